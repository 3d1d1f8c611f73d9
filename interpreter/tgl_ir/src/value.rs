//! Runtime value model and loose equality.
//!
//! The dialect distinguishes integer literals (`*5*`) from floating literals
//! (`|5.5|`) in source, but both resolve to the single [`Value::Number`]
//! domain at runtime. `Maybe` is the dialect's null.

use std::fmt;

/// A runtime value.
///
/// Lists are heterogeneous; nothing in the dialect constrains element types.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Numeric value. Integer and floating literals share this domain.
    Number(f64),
    /// Text value, quotes already stripped.
    Text(String),
    /// Boolean value (`_true_` / `_false_`).
    Bool(bool),
    /// The dialect's null (`_maybe_`).
    Maybe,
    /// Ordered, heterogeneous sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Construct a number from an integer literal.
    ///
    /// i64 -> f64 is lossy above 2^53; script literals never get there.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn int(n: i64) -> Self {
        Value::Number(n as f64)
    }

    /// Construct a text value.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Name of this value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Maybe => "maybe",
            Value::List(_) => "list",
        }
    }

    /// Numeric coercion used by loose equality and arithmetic.
    ///
    /// Booleans coerce to 0/1; text coerces when it parses as a number.
    /// `Maybe` and lists never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Maybe | Value::List(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display already prints 5.0 as "5" and 5.5 as "5.5",
            // matching the original runtime's number rendering.
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Maybe => write!(f, "maybe"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Loose, coercive equality for the dialect's `=?` comparison.
///
/// Required compatibility behavior: a boolean may equal a number, and text
/// may equal a number when numerically equal. The coercion rules are:
///
/// - text vs text and boolean vs boolean compare directly
/// - `Maybe` equals only `Maybe`
/// - lists compare elementwise (loosely); a list never equals a non-list
/// - any remaining mixed pair compares numerically via [`Value::as_number`];
///   if either side does not coerce, the values are unequal
pub fn loosely_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Maybe, Value::Maybe) => true,
        (Value::Maybe, _) | (_, Value::Maybe) => false,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loosely_equal(x, y))
        }
        (Value::List(_), _) | (_, Value::List(_)) => false,
        _ => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn number_display_trims_integral() {
        assert_eq!(Value::int(5).to_string(), "5");
        assert_eq!(Value::Number(5.5).to_string(), "5.5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
    }

    #[test]
    fn list_display_joins_with_commas() {
        let list = Value::List(vec![Value::int(1), Value::text("two"), Value::Bool(true)]);
        assert_eq!(list.to_string(), "1,two,true");
    }

    #[test]
    fn loose_equality_same_type() {
        assert!(loosely_equal(&Value::int(2), &Value::Number(2.0)));
        assert!(loosely_equal(&Value::text("a"), &Value::text("a")));
        assert!(!loosely_equal(&Value::text("1.0"), &Value::text("1")));
        assert!(loosely_equal(&Value::Maybe, &Value::Maybe));
    }

    #[test]
    fn loose_equality_coerces_bool_and_text() {
        assert!(loosely_equal(&Value::Bool(true), &Value::int(1)));
        assert!(loosely_equal(&Value::Bool(false), &Value::int(0)));
        assert!(loosely_equal(&Value::text("2"), &Value::int(2)));
        assert!(loosely_equal(&Value::Bool(true), &Value::text("1")));
        assert!(!loosely_equal(&Value::text("two"), &Value::int(2)));
        assert!(!loosely_equal(&Value::Bool(true), &Value::int(2)));
    }

    #[test]
    fn maybe_equals_only_maybe() {
        assert!(!loosely_equal(&Value::Maybe, &Value::int(0)));
        assert!(!loosely_equal(&Value::Maybe, &Value::text("")));
        assert!(!loosely_equal(&Value::Maybe, &Value::Bool(false)));
    }

    #[test]
    fn lists_compare_elementwise() {
        let a = Value::List(vec![Value::int(1), Value::text("2")]);
        let b = Value::List(vec![Value::Bool(true), Value::int(2)]);
        assert!(loosely_equal(&a, &b));
        assert!(!loosely_equal(&a, &Value::int(1)));
        assert!(!loosely_equal(
            &a,
            &Value::List(vec![Value::int(1), Value::text("2"), Value::int(3)])
        ));
    }
}
