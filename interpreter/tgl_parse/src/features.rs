//! Feature-gate pre-scan.

use tgl_ir::FeatureFlags;

/// Scan a whole script once and derive its [`FeatureFlags`].
///
/// Directives are case-insensitive, may appear anywhere, and take effect for
/// the entire run regardless of position. The scan has no other side effect;
/// directive lines are skipped during execution.
pub fn scan_features(lines: &[&str]) -> FeatureFlags {
    let mut flags = FeatureFlags::default();
    for raw in lines {
        let line = raw.trim().to_ascii_lowercase();
        let Some(rest) = line.strip_prefix("!implement") else {
            continue;
        };
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let mut words = rest.split_whitespace();
        match words.next() {
            Some("condition") => match words.next() {
                Some("normal") => flags.condition_normal = true,
                Some("looping") => flags.condition_looping = true,
                _ => {}
            },
            Some("time") => flags.time = true,
            Some("fastmode") => flags.fast_mode = true,
            _ => {}
        }
    }
    flags
}
