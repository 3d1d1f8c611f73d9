//! Fast-mode execution engine.
//!
//! A reduced, non-recursive pass selected when `!implement fastmode` is set:
//! declaration-oriented headers and straight-line statements only. Control
//! flow is deliberately absent; a conditional or loop header in fast mode is
//! a syntax error, keeping fast mode a strict subset of the dialect.

use tgl_ir::{FeatureFlags, Stmt, Value};
use tgl_parse::classify;

use crate::env::Environment;
use crate::errors::{feature_not_enabled, syntax_error, EvalResult, Feature};
use crate::literal::evaluate_literal;
use crate::output::OutputBuffer;
use crate::primitives::{busy_wait, evaluate_list_items, log_statement};

/// Execute a script in fast mode.
pub(crate) fn run(
    lines: &[&str],
    flags: FeatureFlags,
    env: &mut Environment,
    out: &OutputBuffer,
) -> EvalResult<()> {
    for raw in lines {
        let line = raw.trim();
        match classify(line) {
            // Grouplet/process/connect wiring and directives are structural
            // no-ops in fast mode.
            Stmt::Declaration | Stmt::Directive | Stmt::Skip => {}
            Stmt::Glb { name, value } => {
                let value = match value
                    .strip_prefix('#')
                    .and_then(|rest| rest.strip_suffix('#'))
                {
                    Some(items) => Value::List(evaluate_list_items(items, env)?),
                    None => evaluate_literal(&value, env)?,
                };
                env.define(name, value);
            }
            Stmt::Assign { name, value } => {
                let value = evaluate_literal(&value, env)?;
                env.define(name, value);
            }
            Stmt::ListAssign { name, items } => {
                let items = evaluate_list_items(&items, env)?;
                env.define(name, Value::List(items));
            }
            Stmt::Log { arg } => log_statement(&arg, flags, env, out)?,
            Stmt::Wait { millis } => {
                if !flags.time {
                    return Err(feature_not_enabled(Feature::Time));
                }
                busy_wait(millis);
            }
            // No control flow in fast mode.
            Stmt::If { .. }
            | Stmt::ElseIf { .. }
            | Stmt::Else
            | Stmt::During { .. }
            | Stmt::For { .. }
            | Stmt::Unknown { .. } => return Err(syntax_error(line)),
        }
    }
    Ok(())
}
