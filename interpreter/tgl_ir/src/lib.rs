//! Tgl IR - Core data types for the Together interpreter.
//!
//! The Together dialect is line-oriented: every statement occupies one source
//! line, and brace-delimited blocks group lines under conditional and loop
//! headers. This crate holds the data types shared by the classifier
//! (`tgl_parse`) and the execution engines (`tgl_eval`):
//!
//! - [`Value`]: the runtime value model (number, text, boolean, maybe, list)
//!   and the loose cross-type equality the dialect's `=?` comparison uses
//! - [`Stmt`]: the tagged statement shape produced by line classification
//! - [`FeatureFlags`]: the per-run capability set derived from `!implement`
//!   directives

mod features;
mod stmt;
mod value;

pub use features::FeatureFlags;
pub use stmt::Stmt;
pub use value::{loosely_equal, Value};
