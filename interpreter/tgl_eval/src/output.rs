//! Run-local output buffer.

use parking_lot::Mutex;

/// Collects output lines emitted during one script run.
///
/// Appended to by the log primitive and the loop-guard warning, joined once
/// by the façade. Interior mutability lets the engines share `&OutputBuffer`
/// while the namespace is borrowed mutably.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    lines: Mutex<Vec<String>>,
}

impl OutputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        OutputBuffer::default()
    }

    /// Append one output line.
    pub fn push(&self, line: impl Into<String>) {
        self.lines.lock().push(line.into());
    }

    /// Number of lines collected so far.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Join all collected lines with newlines.
    pub fn join(&self) -> String {
        self.lines.lock().join("\n")
    }
}
