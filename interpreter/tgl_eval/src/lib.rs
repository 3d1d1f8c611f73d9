//! Tgl Eval - Execution engines and interpreter façade for Together.
//!
//! # Architecture
//!
//! - [`Environment`]: the run's flat namespace (one per invocation; nested
//!   blocks share it)
//! - [`evaluate_literal`]: the single resolver for literals and references
//! - [`evaluate_expr`]: minimal arithmetic/concat evaluator for free-form
//!   `log(...)` arguments
//! - `exec`: the standard engine (conditionals, both loop forms, output,
//!   delay, assignment)
//! - `fast`: the reduced fast-mode engine (declarations and straight-line
//!   statements only)
//! - [`Interpreter`]: the façade that selects an engine per run and converts
//!   any evaluation failure into a trailing `Error:` output line
//!
//! Execution is single-threaded and synchronous per invocation. All per-run
//! state (flags, namespace, output buffer) is created inside
//! [`Interpreter::run`], so concurrent invocations are independent.

mod env;
pub mod errors;
mod exec;
mod expr;
mod fast;
mod interpreter;
mod literal;
mod output;
mod primitives;

#[cfg(test)]
mod tests;

pub use env::Environment;
pub use errors::{
    dangling_branch, expression_error, feature_not_enabled, index_out_of_range, syntax_error,
    undefined_list, undefined_variable, EvalError, EvalErrorKind, EvalResult, Feature,
};
pub use expr::evaluate_expr;
pub use interpreter::{run_script, Interpreter};
pub use literal::evaluate_literal;
pub use output::OutputBuffer;

// Re-export the data types for convenience.
pub use tgl_ir::{loosely_equal, FeatureFlags, Stmt, Value};
