//! Interpreter façade.
//!
//! Owns nothing across runs: every call to [`Interpreter::run`] derives a
//! fresh flag set, namespace and output buffer, so concurrent runs cannot
//! observe each other's state.

use tgl_parse::scan_features;

use crate::env::Environment;
use crate::output::OutputBuffer;
use crate::{exec, fast};

/// The interpreter façade: script text in, output text out.
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    /// Create an interpreter.
    pub fn new() -> Self {
        Interpreter
    }

    /// Run a script and return its collected output.
    ///
    /// This never fails: any evaluation error is converted into a single
    /// trailing `Error: <message>` line, with output from the lines executed
    /// before the failure preserved. Callers receive diagnostics as content,
    /// not as a distinct failure channel.
    pub fn run(&self, source: &str) -> String {
        let lines: Vec<&str> = source.lines().collect();
        let flags = scan_features(&lines);
        tracing::debug!(?flags, line_count = lines.len(), "starting script run");

        let mut env = Environment::new();
        let out = OutputBuffer::new();
        let result = if flags.fast_mode {
            fast::run(&lines, flags, &mut env, &out)
        } else {
            exec::run(&lines, flags, &mut env, &out)
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "script run stopped on error");
            out.push(format!("Error: {err}"));
        }
        out.join()
    }
}

/// Run a script with a throwaway [`Interpreter`].
pub fn run_script(source: &str) -> String {
    Interpreter::new().run(source)
}
