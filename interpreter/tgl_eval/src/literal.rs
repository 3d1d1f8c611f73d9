//! Literal and reference evaluation.
//!
//! `evaluate_literal` is the single resolver for right-hand sides, comparison
//! operands and list elements. Forms are checked in the dialect's fixed
//! precedence; the first matching form wins, and the bare-text fallback at
//! the bottom never fails.

use tgl_ir::Value;

use crate::env::Environment;
use crate::errors::{expression_error, EvalResult};

/// Evaluate one literal or reference against the namespace.
///
/// Precedence: list-index reference, variable reference, floating literal
/// `|n|`, integer literal `*n*`, `_true_` / `_false_` / `_maybe_`, quoted
/// text, bare numeric text, bare text.
pub fn evaluate_literal(text: &str, env: &Environment) -> EvalResult<Value> {
    let val = text.trim();

    if let Some((name, index)) = list_index_ref(val) {
        return env.list_item(name, index);
    }
    if let Some(name) = val.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return env.lookup(name.trim());
    }
    if let Some(inner) = framed(val, '|') {
        return inner
            .trim()
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| expression_error(format!("malformed floating literal: {val}")));
    }
    if let Some(inner) = framed(val, '*') {
        return inner
            .trim()
            .parse::<i64>()
            .map(Value::int)
            .map_err(|_| expression_error(format!("malformed integer literal: {val}")));
    }
    match val {
        "_true_" => return Ok(Value::Bool(true)),
        "_false_" => return Ok(Value::Bool(false)),
        "_maybe_" => return Ok(Value::Maybe),
        _ => {}
    }
    if let Some(inner) = quoted(val) {
        return Ok(Value::text(inner));
    }
    if let Ok(n) = val.parse::<f64>() {
        return Ok(Value::Number(n));
    }
    Ok(Value::text(val))
}

/// Parse a `/name/<index>` list-index reference.
pub(crate) fn list_index_ref(val: &str) -> Option<(&str, usize)> {
    let (name, after) = val.strip_prefix('/')?.split_once('/')?;
    let digits = after.strip_prefix('<')?.strip_suffix('>')?;
    let index = digits.parse::<usize>().ok()?;
    Some((name.trim(), index))
}

/// Strip a matching pair of framing characters (`*5*`, `|2.5|`).
fn framed(val: &str, frame: char) -> Option<&str> {
    val.strip_prefix(frame)?.strip_suffix(frame)
}

/// Strip a matching pair of single or double quotes.
fn quoted(val: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if let Some(inner) = val.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return Some(inner);
        }
    }
    None
}
