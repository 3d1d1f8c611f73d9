//! Structured conditional chains.
//!
//! A conditional chain is an `If` block followed by zero or more sibling
//! `Else If` blocks and an optional trailing `Else` block. The whole chain is
//! parsed into one node before evaluation, so the engine picks a branch and
//! advances past the chain without index arithmetic.

use crate::{classify, extract_block};
use tgl_ir::Stmt;

/// A full `If` / `Else If` / `Else` chain.
#[derive(Debug)]
pub struct CondChain<'a> {
    /// Branches in source order; at most the last has no guard.
    pub branches: Vec<Branch<'a>>,
    /// Total source lines the chain occupies, starting at the `If` header.
    pub consumed: usize,
}

/// One branch of a conditional chain.
#[derive(Clone, Debug)]
pub struct Branch<'a> {
    /// Comparison operands, or `None` for the trailing `Else`.
    pub guard: Option<(String, String)>,
    /// The branch body lines.
    pub body: &'a [&'a str],
}

/// Parse the conditional chain whose `If` header sits at `lines[start]`.
///
/// `left` and `right` are the `If` header's operands, already classified by
/// the caller. Sibling headers must follow the previous block's closing line
/// directly; the first non-sibling line ends the chain.
pub fn parse_conditional<'a>(
    lines: &'a [&'a str],
    start: usize,
    left: String,
    right: String,
) -> CondChain<'a> {
    let mut branches = Vec::new();
    let mut idx = start;

    let block = extract_block(lines, idx);
    idx += block.consumed;
    branches.push(Branch {
        guard: Some((left, right)),
        body: block.body,
    });

    loop {
        match lines.get(idx).map(|raw| classify(raw)) {
            Some(Stmt::ElseIf { left, right }) => {
                let block = extract_block(lines, idx);
                idx += block.consumed;
                branches.push(Branch {
                    guard: Some((left, right)),
                    body: block.body,
                });
            }
            Some(Stmt::Else) => {
                let block = extract_block(lines, idx);
                idx += block.consumed;
                branches.push(Branch {
                    guard: None,
                    body: block.body,
                });
                break;
            }
            _ => break,
        }
    }

    CondChain {
        branches,
        consumed: idx - start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn guards(chain: &CondChain<'_>) -> Vec<Option<(String, String)>> {
        chain.branches.iter().map(|b| b.guard.clone()).collect()
    }

    #[test]
    fn lone_if() {
        let lines = ["If <[a]> =? <[b]> {", "log(1)", "}", "log(2)"];
        let chain = parse_conditional(&lines, 0, "[a]".to_string(), "[b]".to_string());
        assert_eq!(chain.consumed, 3);
        assert_eq!(chain.branches.len(), 1);
        assert_eq!(chain.branches[0].body, &["log(1)"]);
    }

    #[test]
    fn full_chain() {
        let lines = [
            "If <[a]> =? <*1*> {",
            "log(1)",
            "}",
            "Else If <[a]> =? <*2*> {",
            "log(2)",
            "}",
            "Else {",
            "log(3)",
            "}",
            "log(4)",
        ];
        let chain = parse_conditional(&lines, 0, "[a]".to_string(), "*1*".to_string());
        assert_eq!(chain.consumed, 9);
        assert_eq!(
            guards(&chain),
            vec![
                Some(("[a]".to_string(), "*1*".to_string())),
                Some(("[a]".to_string(), "*2*".to_string())),
                None,
            ]
        );
        assert_eq!(chain.branches[2].body, &["log(3)"]);
    }

    #[test]
    fn nested_chain_belongs_to_inner_if() {
        let lines = [
            "If <1> =? <1> {",
            "If <2> =? <3> {",
            "log(inner)",
            "}",
            "Else {",
            "log(inner-else)",
            "}",
            "}",
            "Else {",
            "log(outer-else)",
            "}",
        ];
        let chain = parse_conditional(&lines, 0, "1".to_string(), "1".to_string());
        assert_eq!(chain.consumed, 11);
        assert_eq!(chain.branches.len(), 2);
        assert_eq!(chain.branches[0].body.len(), 6);
        assert_eq!(chain.branches[1].body, &["log(outer-else)"]);
    }
}
