//! Per-run feature flags.

/// Capability flags derived from a script's `!implement` directives.
///
/// Recomputed by a single pre-scan at the start of every run and threaded
/// through the engines as a value. Never stored in process-global state, so
/// concurrent runs cannot leak flags into each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// `!implement condition normal` — unlocks `If` / `Else If` / `Else`.
    pub condition_normal: bool,
    /// `!implement condition looping` — unlocks `During` and `For`.
    pub condition_looping: bool,
    /// `!implement time` — unlocks `wait(...)` and `log(time.now)`.
    pub time: bool,
    /// `!implement fastmode` — selects the reduced fast engine for the run.
    pub fast_mode: bool,
}
