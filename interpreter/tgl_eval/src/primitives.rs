//! Output and delay primitives shared by both engines.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tgl_ir::{FeatureFlags, Value};

use crate::env::Environment;
use crate::errors::{feature_not_enabled, EvalResult, Feature};
use crate::literal::{evaluate_literal, list_index_ref};
use crate::output::OutputBuffer;
use crate::expr;

/// Execute `log(arg)`.
///
/// Argument forms in priority order: `time.now` (gated by the time flag),
/// list-index reference, variable reference, free-form expression.
pub(crate) fn log_statement(
    arg: &str,
    flags: FeatureFlags,
    env: &Environment,
    out: &OutputBuffer,
) -> EvalResult<()> {
    if arg == "time.now" {
        if !flags.time {
            return Err(feature_not_enabled(Feature::Time));
        }
        out.push(now_millis().to_string());
        return Ok(());
    }
    if let Some((name, index)) = list_index_ref(arg) {
        out.push(env.list_item(name, index)?.to_string());
        return Ok(());
    }
    if let Some(name) = arg.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        out.push(env.lookup(name.trim())?.to_string());
        return Ok(());
    }
    out.push(expr::evaluate_expr(arg, env)?.to_string());
    Ok(())
}

/// Execute `wait(ms)`: a blocking spin for the full duration.
///
/// Deliberately not a sleep: the delay primitive monopolizes the evaluating
/// thread and cannot be interrupted early.
pub(crate) fn busy_wait(millis: u64) {
    let deadline = Instant::now() + Duration::from_millis(millis);
    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}

/// Milliseconds since the Unix epoch, for `log(time.now)`.
pub(crate) fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Evaluate the comma-separated elements of a list literal.
pub(crate) fn evaluate_list_items(items: &str, env: &Environment) -> EvalResult<Vec<Value>> {
    items
        .split(',')
        .map(|item| evaluate_literal(item, env))
        .collect()
}
