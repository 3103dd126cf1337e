//! Code table derivation: symbols to (bit-pattern, bit-length) pairs

use crate::config::SYMBOL_COUNT;
use crate::tree::Node;

/// A single prefix code. `bits` holds the code right-aligned; `len` is
/// the number of significant bits. Carrying the length explicitly keeps
/// leading zero bits intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Symbol-to-code mapping derived from one tree. Transient: alive only
/// while encoding.
#[derive(Debug)]
pub struct CodeTable {
    codes: [Option<Code>; SYMBOL_COUNT],
}

impl CodeTable {
    /// Walk the tree depth-first, assigning each leaf the path taken to
    /// reach it: 0 for a left edge, 1 for a right edge. Symbols absent
    /// from the tree get no entry. A root that is itself a leaf (empty
    /// input, where the sentinel is the whole alphabet) gets the 1-bit
    /// constant code 0 instead of a zero-length code.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = [None; SYMBOL_COUNT];
        match root {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some(Code { bits: 0, len: 1 });
            }
            Node::Internal { .. } => assign(root, 0, 0, &mut codes),
        }
        Self { codes }
    }

    pub fn get(&self, symbol: u16) -> Option<Code> {
        self.codes[symbol as usize]
    }
}

fn assign(node: &Node, bits: u64, len: u8, codes: &mut [Option<Code>; SYMBOL_COUNT]) {
    match node {
        Node::Leaf { symbol, .. } => codes[*symbol as usize] = Some(Code { bits, len }),
        Node::Internal { left, right, .. } => {
            assign(left, bits << 1, len + 1, codes);
            assign(right, (bits << 1) | 1, len + 1, codes);
        }
    }
}
