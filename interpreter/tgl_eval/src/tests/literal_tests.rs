//! Tests for literal and reference evaluation.
#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use crate::env::Environment;
use crate::errors::EvalErrorKind;
use crate::literal::evaluate_literal;
use tgl_ir::Value;

fn env_with(name: &str, value: Value) -> Environment {
    let mut env = Environment::new();
    env.define(name, value);
    env
}

#[test]
fn framed_numeric_literals() {
    let env = Environment::new();
    assert_eq!(evaluate_literal("*5*", &env).unwrap(), Value::int(5));
    assert_eq!(evaluate_literal("|5.5|", &env).unwrap(), Value::Number(5.5));
    assert_eq!(evaluate_literal("*-3*", &env).unwrap(), Value::int(-3));
}

#[test]
fn keyword_literals() {
    let env = Environment::new();
    assert_eq!(evaluate_literal("_true_", &env).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_literal("_false_", &env).unwrap(), Value::Bool(false));
    assert_eq!(evaluate_literal("_maybe_", &env).unwrap(), Value::Maybe);
}

#[test]
fn quoted_text_strips_quotes() {
    let env = Environment::new();
    assert_eq!(evaluate_literal("\"hello\"", &env).unwrap(), Value::text("hello"));
    assert_eq!(evaluate_literal("'world'", &env).unwrap(), Value::text("world"));
}

#[test]
fn bare_text_and_numbers() {
    let env = Environment::new();
    assert_eq!(evaluate_literal("42", &env).unwrap(), Value::Number(42.0));
    assert_eq!(evaluate_literal("4.5", &env).unwrap(), Value::Number(4.5));
    // The fallback never fails.
    assert_eq!(evaluate_literal("plain words", &env).unwrap(), Value::text("plain words"));
}

#[test]
fn variable_reference() {
    let env = env_with("x", Value::int(7));
    assert_eq!(evaluate_literal("[x]", &env).unwrap(), Value::int(7));

    let err = evaluate_literal("[missing]", &env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn list_index_reference_is_zero_based() {
    let env = env_with(
        "L",
        Value::List(vec![Value::int(1), Value::int(2), Value::int(3)]),
    );
    assert_eq!(evaluate_literal("/L/<0>", &env).unwrap(), Value::int(1));
    assert_eq!(evaluate_literal("/L/<2>", &env).unwrap(), Value::int(3));
}

#[test]
fn missing_list_fails() {
    let env = Environment::new();
    let err = evaluate_literal("/L/<0>", &env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedList {
            name: "L".to_string()
        }
    );
    assert_eq!(err.message, "List /L/ is not defined.");
}

#[test]
fn out_of_range_index_fails_explicitly() {
    let env = env_with("L", Value::List(vec![Value::int(1)]));
    let err = evaluate_literal("/L/<5>", &env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IndexOutOfRange {
            name: "L".to_string(),
            index: 5,
            len: 1
        }
    );
}

#[test]
fn malformed_framed_literals_fail() {
    let env = Environment::new();
    let err = evaluate_literal("*abc*", &env).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ExpressionError { .. }));
    let err = evaluate_literal("|x|", &env).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ExpressionError { .. }));
}
