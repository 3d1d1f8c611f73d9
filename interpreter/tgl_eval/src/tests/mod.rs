//! Test modules for the evaluator.
//!
//! Engine tests call `exec::run` / `fast::run` directly so error kinds stay
//! observable; façade tests go through `run_script` and assert on the joined
//! output text, the only thing callers ever see.

mod literal_tests;
