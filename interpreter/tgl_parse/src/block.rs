//! Brace-delimited block extraction.
//!
//! Blocks are delimited by a header line ending in `{` and the matching line
//! ending in `}` at the same nesting depth. Depth is tracked per line (the
//! dialect never puts both braces meaningfully on one line), so nested
//! blocks' closers cannot terminate an outer block early.

/// A block body plus the number of source lines the whole block occupies
/// (header, body and closing line).
#[derive(Clone, Copy, Debug)]
pub struct Block<'a> {
    /// Lines strictly between the header and its matching closer.
    pub body: &'a [&'a str],
    /// Total lines consumed from the header through the closer, inclusive.
    pub consumed: usize,
}

/// Extract the block opened by the header at `lines[start]`.
///
/// The header itself contributes no body line and the closing line is
/// excluded. An unterminated block swallows the rest of the script, which
/// matches how a missing closer behaves in the original dialect.
pub fn extract_block<'a>(lines: &'a [&'a str], start: usize) -> Block<'a> {
    let mut depth = 0usize;
    for (i, raw) in lines.iter().enumerate().skip(start) {
        let line = raw.trim();
        if line.ends_with('{') {
            depth += 1;
            if i == start {
                continue;
            }
        }
        if line.ends_with('}') {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Block {
                    body: &lines[start + 1..i],
                    consumed: i - start + 1,
                };
            }
        }
    }
    Block {
        body: &lines[start + 1..],
        consumed: lines.len() - start,
    }
}
