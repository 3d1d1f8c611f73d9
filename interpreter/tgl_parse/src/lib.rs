//! Source-shape recognition for the Together dialect.
//!
//! The dialect is line-oriented, so there is no token lexer: each trimmed
//! source line is matched against an ordered set of statement-shape matchers
//! ([`classify`]), and brace-delimited bodies are located by depth-tracked
//! scanning ([`extract_block`]). Conditional chains are parsed into
//! structured nodes ([`parse_conditional`]) so the engines never do manual
//! index arithmetic to find sibling branches.
//!
//! Blocks are re-extracted every time a header is encountered, never cached;
//! loop bodies are cheap line slices into the original script.

mod block;
mod chain;
mod classify;
mod features;

pub use block::{extract_block, Block};
pub use chain::{parse_conditional, Branch, CondChain};
pub use classify::classify;
pub use features::scan_features;
