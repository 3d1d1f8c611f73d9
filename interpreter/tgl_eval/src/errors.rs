//! Evaluation errors.
//!
//! Every error here is a script-author error: fatal to the current run, never
//! to the process. The façade converts them into a trailing `Error: <message>`
//! output line. `EvalErrorKind` keeps the categories distinguishable for
//! tests; the factory functions populate both `kind` and `message`.

use std::fmt;

/// Result of evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// A gated statement class, for [`EvalErrorKind::FeatureNotEnabled`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    /// `If` / `Else If` / `Else`, gated by `!implement condition normal`.
    ConditionNormal,
    /// `During` / `For`, gated by `!implement condition looping`.
    ConditionLooping,
    /// `wait(...)` / `log(time.now)`, gated by `!implement time`.
    Time,
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    /// A `[name]` reference to a variable the namespace does not hold.
    UndefinedVariable { name: String },
    /// A `/name/` reference to a list the namespace does not hold.
    UndefinedList { name: String },
    /// A `/name/<i>` access past the end of the list.
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },
    /// A statement form used without its enabling `!implement` directive.
    FeatureNotEnabled { feature: Feature },
    /// `Else If` / `Else` with no preceding unmatched `If` at the same level.
    DanglingBranch { header: String },
    /// A line matching no statement form.
    SyntaxError { line: String },
    /// A malformed literal or free-form `log(...)` expression.
    ExpressionError { detail: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::UndefinedVariable { name } => {
                write!(f, "Variable [{name}] is not defined.")
            }
            EvalErrorKind::UndefinedList { name } => {
                write!(f, "List /{name}/ is not defined.")
            }
            EvalErrorKind::IndexOutOfRange { name, index, len } => {
                write!(f, "List /{name}/ has no element at index {index} (length {len}).")
            }
            EvalErrorKind::FeatureNotEnabled { feature } => match feature {
                Feature::ConditionNormal => {
                    write!(f, "Normal conditions not enabled! Use !implement condition normal")
                }
                Feature::ConditionLooping => {
                    write!(f, "Looping conditions not enabled! Use !implement condition looping")
                }
                Feature::Time => {
                    write!(f, "Time features not enabled! Use !implement time")
                }
            },
            EvalErrorKind::DanglingBranch { header } => {
                write!(f, "{header} without preceding If block!")
            }
            EvalErrorKind::SyntaxError { line } => {
                write!(f, "Unknown instruction or syntax: \"{line}\"")
            }
            EvalErrorKind::ExpressionError { detail } => write!(f, "{detail}"),
        }
    }
}

/// Evaluation error: a structured kind plus its rendered message.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured category, for programmatic matching in tests.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory constructors

pub fn undefined_variable(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable { name: name.into() })
}

pub fn undefined_list(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedList { name: name.into() })
}

pub fn index_out_of_range(name: impl Into<String>, index: usize, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange {
        name: name.into(),
        index,
        len,
    })
}

pub fn feature_not_enabled(feature: Feature) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FeatureNotEnabled { feature })
}

pub fn dangling_branch(header: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DanglingBranch {
        header: header.into(),
    })
}

pub fn syntax_error(line: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SyntaxError { line: line.into() })
}

pub fn expression_error(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpressionError {
        detail: detail.into(),
    })
}
