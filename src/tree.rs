//! Huffman tree construction.
//!
//! The tree is built greedily: keep every pending node in a min-priority
//! queue, repeatedly pull the two lightest, and join them under a new
//! internal node until one node remains.
//!
//! # Tie-breaking
//!
//! `std::collections::BinaryHeap` makes no promise about the order in which
//! equal keys come out, so the queue is keyed by `(weight, sequence)`.
//! Input leaves take sequence numbers `0..n` in input order and every merged
//! node takes the next free number. Among equal weights the node inserted
//! first is popped first, which makes the tree shape a pure function of the
//! input sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::symbol::{self, Symbol};

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its weight.
    Leaf {
        /// Symbol name.
        name: String,
        /// Occurrence count.
        weight: u64,
    },
    /// Two merged subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Result<Node> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(Error::WeightOverflow)?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Queue entry. Ordered so that `BinaryHeap` pops the lightest, oldest node.
#[derive(Debug)]
struct Pending {
    seq: usize,
    node: Node,
}

impl Pending {
    fn key(&self) -> (u64, usize) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An immutable Huffman tree whose leaves are exactly the input symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

/// Build the Huffman tree for a symbol table.
///
/// The first node popped in each merge becomes the left child, the second
/// the right child.
///
/// # Errors
/// - `Error::EmptyInput` if `symbols` is empty.
/// - `Error::EmptyName`, `Error::ZeroWeight` or `Error::DuplicateSymbol`
///   for the first malformed record.
/// - `Error::WeightOverflow` if the weights sum past `u64::MAX`.
pub fn build(symbols: &[Symbol]) -> Result<HuffmanTree> {
    symbol::validate(symbols)?;

    let mut pq: BinaryHeap<Pending> = symbols
        .iter()
        .enumerate()
        .map(|(seq, s)| Pending {
            seq,
            node: Node::Leaf {
                name: s.name.clone(),
                weight: s.weight,
            },
        })
        .collect();
    let mut next_seq = symbols.len();

    while pq.len() > 1 {
        let (Some(left), Some(right)) = (pq.pop(), pq.pop()) else {
            break;
        };
        pq.push(Pending {
            seq: next_seq,
            node: Node::merge(left.node, right.node)?,
        });
        next_seq += 1;
    }

    pq.pop()
        .map(|p| HuffmanTree { root: p.node })
        .ok_or(Error::EmptyInput)
}

impl HuffmanTree {
    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight, equal to the sum of all input weights.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves (one per input symbol).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Number of internal nodes, `leaf_count() - 1`.
    pub fn internal_count(&self) -> usize {
        self.leaf_count() - 1
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// True for a single-symbol alphabet.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Decode a string of `'0'`/`'1'` characters into symbol names.
    ///
    /// A single-leaf tree reads one `'0'` per symbol, matching the one-bit
    /// codeword assigned to it.
    ///
    /// # Errors
    /// - `Error::InvalidBit` for any other character, or a `'1'` in a
    ///   single-leaf stream.
    /// - `Error::TruncatedCode` if the input stops mid-codeword.
    pub fn decode(&self, bits: &str) -> Result<Vec<&str>> {
        let mut out = Vec::new();

        if let Node::Leaf { name, .. } = &self.root {
            for c in bits.chars() {
                match c {
                    '0' => out.push(name.as_str()),
                    other => return Err(Error::InvalidBit(other)),
                }
            }
            return Ok(out);
        }

        let mut curr = &self.root;
        for c in bits.chars() {
            curr = match (curr, c) {
                (Node::Internal { left, .. }, '0') => left,
                (Node::Internal { right, .. }, '1') => right,
                (_, other) => return Err(Error::InvalidBit(other)),
            };

            if let Node::Leaf { name, .. } = curr {
                out.push(name.as_str());
                curr = &self.root;
            }
        }

        if !std::ptr::eq(curr, &self.root) {
            return Err(Error::TruncatedCode);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::table;

    fn leaf_name(node: &Node) -> Option<&str> {
        match node {
            Node::Leaf { name, .. } => Some(name),
            Node::Internal { .. } => None,
        }
    }

    fn assert_weights_conserved(node: &Node) {
        if let Node::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            assert_weights_conserved(left);
            assert_weights_conserved(right);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(build(&[]), Err(Error::EmptyInput));
    }

    #[test]
    fn test_duplicate_rejected() {
        let symbols = table([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(build(&symbols), Err(Error::DuplicateSymbol("a".into())));
    }

    #[test]
    fn test_weight_sum_overflow_rejected() {
        let symbols = table([("a", u64::MAX), ("b", 1)]);
        assert_eq!(build(&symbols), Err(Error::WeightOverflow));

        let symbols = table([("a", u64::MAX - 1), ("b", 1)]);
        assert_eq!(build(&symbols).unwrap().weight(), u64::MAX);
    }

    #[test]
    fn test_single_symbol_is_root_leaf() {
        let tree = build(&table([("voice", 5)])).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.internal_count(), 0);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.weight(), 5);
    }

    #[test]
    fn test_two_symbols_merge_once() {
        let tree = build(&table([("a", 3), ("b", 7)])).unwrap();
        match tree.root() {
            Node::Internal {
                weight,
                left,
                right,
            } => {
                assert_eq!(*weight, 10);
                assert_eq!(leaf_name(left), Some("a"));
                assert_eq!(leaf_name(right), Some("b"));
            }
            Node::Leaf { .. } => panic!("expected internal root"),
        }
        assert_eq!(tree.internal_count(), 1);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        // Equal weights: earlier input goes left.
        let tree = build(&table([("y", 4), ("x", 4)])).unwrap();
        let Node::Internal { left, right, .. } = tree.root() else {
            panic!("expected internal root");
        };
        assert_eq!(leaf_name(left), Some("y"));
        assert_eq!(leaf_name(right), Some("x"));
    }

    #[test]
    fn test_four_symbol_shape() {
        let tree = build(&table([("a", 1), ("b", 1), ("c", 2), ("d", 4)])).unwrap();
        assert_eq!(tree.weight(), 8);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.internal_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert_weights_conserved(tree.root());

        let Node::Internal { left, right, .. } = tree.root() else {
            panic!("expected internal root");
        };
        assert_eq!(leaf_name(left), Some("d"));
        assert_eq!(right.weight(), 4);
    }

    #[test]
    fn test_decode_walks_tree() {
        let tree = build(&table([("a", 1), ("b", 1), ("c", 2), ("d", 4)])).unwrap();
        // d=0 c=10 a=110 b=111
        assert_eq!(tree.decode("0101101110").unwrap(), vec!["d", "c", "a", "b", "d"]);
        assert_eq!(tree.decode("").unwrap(), Vec::<&str>::new());
        assert_eq!(tree.decode("11"), Err(Error::TruncatedCode));
        assert_eq!(tree.decode("0x"), Err(Error::InvalidBit('x')));
    }

    #[test]
    fn test_decode_single_leaf() {
        let tree = build(&table([("voice", 5)])).unwrap();
        assert_eq!(tree.decode("000").unwrap(), vec!["voice"; 3]);
        assert_eq!(tree.decode("01"), Err(Error::InvalidBit('1')));
    }
}
