//! Standard execution engine: full control flow.
//!
//! Runs a slice of source lines against the run's namespace, feature flags
//! and output buffer, recursing into block bodies. Conditional chains are
//! parsed into structured nodes before evaluation; loop bodies are
//! re-extracted on every encounter and their guards re-evaluated before
//! every iteration.

use tgl_ir::{loosely_equal, FeatureFlags, Stmt, Value};
use tgl_parse::{classify, extract_block, parse_conditional};

use crate::env::Environment;
use crate::errors::{dangling_branch, feature_not_enabled, syntax_error, EvalResult, Feature};
use crate::literal::evaluate_literal;
use crate::output::OutputBuffer;
use crate::primitives::{busy_wait, evaluate_list_items, log_statement};

/// Hard cap on condition-guarded (`During`) loop iterations.
pub(crate) const DURING_ITERATION_CAP: usize = 1000;
/// Hard cap on counted (`For`) loop iterations.
pub(crate) const FOR_ITERATION_CAP: usize = 10_000;
/// Warning emitted (once) when a loop reaches its cap. Reaching the cap is
/// recovered: execution continues past the loop.
pub(crate) const LOOP_GUARD_MESSAGE: &str = "Infinite loop guard triggered.";

/// Execute a sequence of lines. Stops at the first error; output emitted
/// before the failure stays in the buffer.
pub(crate) fn run(
    lines: &[&str],
    flags: FeatureFlags,
    env: &mut Environment,
    out: &OutputBuffer,
) -> EvalResult<()> {
    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx].trim();
        match classify(line) {
            Stmt::If { left, right } => {
                if !flags.condition_normal {
                    return Err(feature_not_enabled(Feature::ConditionNormal));
                }
                let chain = parse_conditional(lines, idx, left, right);
                for branch in &chain.branches {
                    let taken = match &branch.guard {
                        Some((l, r)) => {
                            let left_val = evaluate_literal(l, env)?;
                            let right_val = evaluate_literal(r, env)?;
                            loosely_equal(&left_val, &right_val)
                        }
                        None => true,
                    };
                    if taken {
                        run(branch.body, flags, env, out)?;
                        break;
                    }
                }
                idx += chain.consumed;
                continue;
            }
            // A sibling header reachable here was not consumed by a
            // preceding chain, so it has no unmatched If at this level.
            Stmt::ElseIf { .. } => return Err(dangling_branch("Else If")),
            Stmt::Else => return Err(dangling_branch("Else")),
            Stmt::During { left, right } => {
                if !flags.condition_looping {
                    return Err(feature_not_enabled(Feature::ConditionLooping));
                }
                let block = extract_block(lines, idx);
                let mut remaining = DURING_ITERATION_CAP;
                loop {
                    let left_val = evaluate_literal(&left, env)?;
                    let right_val = evaluate_literal(&right, env)?;
                    if !loosely_equal(&left_val, &right_val) {
                        break;
                    }
                    run(block.body, flags, env, out)?;
                    remaining -= 1;
                    if remaining == 0 {
                        tracing::debug!(cap = DURING_ITERATION_CAP, "During loop hit iteration cap");
                        out.push(LOOP_GUARD_MESSAGE);
                        break;
                    }
                }
                idx += block.consumed;
                continue;
            }
            Stmt::For {
                var,
                start,
                check,
                end,
                body,
            } => {
                if !flags.condition_looping {
                    return Err(feature_not_enabled(Feature::ConditionLooping));
                }
                let initial = evaluate_literal(&start, env)?;
                env.define(var, initial);
                let body_line = [body.as_str()];
                let mut remaining = FOR_ITERATION_CAP;
                loop {
                    let end_val = evaluate_literal(&end, env)?;
                    // A missing check variable reads as a failed guard, not
                    // an error; the loop simply does not run.
                    let holds = env
                        .get(&check)
                        .is_some_and(|current| loosely_equal(current, &end_val));
                    if !holds {
                        break;
                    }
                    run(&body_line, flags, env, out)?;
                    remaining -= 1;
                    if remaining == 0 {
                        tracing::debug!(cap = FOR_ITERATION_CAP, "For loop hit iteration cap");
                        out.push(LOOP_GUARD_MESSAGE);
                        break;
                    }
                }
            }
            Stmt::Log { arg } => log_statement(&arg, flags, env, out)?,
            Stmt::Wait { millis } => {
                if !flags.time {
                    return Err(feature_not_enabled(Feature::Time));
                }
                busy_wait(millis);
            }
            Stmt::Assign { name, value } => {
                let value = evaluate_literal(&value, env)?;
                env.define(name, value);
            }
            Stmt::ListAssign { name, items } => {
                let items = evaluate_list_items(&items, env)?;
                env.define(name, Value::List(items));
            }
            Stmt::Directive | Stmt::Skip => {}
            // Fast-mode declarations are not part of the standard dialect.
            Stmt::Glb { .. } | Stmt::Declaration | Stmt::Unknown { .. } => {
                return Err(syntax_error(line));
            }
        }
        idx += 1;
    }
    Ok(())
}
