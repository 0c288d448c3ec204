//! Codeword derivation.
//!
//! Each symbol's codeword is its root-to-leaf path, `0` for a left turn and
//! `1` for a right turn. Since only leaves carry symbols, no codeword can be
//! a prefix of another.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Symbol name to codeword mapping, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    codes: BTreeMap<String, String>,
}

/// Walk the tree and assign every leaf its path as a codeword.
///
/// A tree that is a single leaf yields `"0"` for its symbol: a symbol must
/// occupy at least one bit.
pub fn derive_codes(tree: &HuffmanTree) -> CodeMap {
    let mut codes = BTreeMap::new();
    match tree.root() {
        Node::Leaf { name, .. } => {
            codes.insert(name.clone(), "0".to_string());
        }
        root => build_codes(root, String::new(), &mut codes),
    }
    let map = CodeMap { codes };
    debug_assert!(map.is_prefix_free());
    map
}

fn build_codes(node: &Node, prefix: String, codes: &mut BTreeMap<String, String>) {
    match node {
        Node::Leaf { name, .. } => {
            codes.insert(name.clone(), prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            build_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push('1');
            build_codes(right, right_prefix, codes);
        }
    }
}

impl CodeMap {
    /// Codeword for `name`, if it is in the alphabet.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    /// Number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a codeword.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(name, codeword)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check that no codeword is a prefix of another.
    ///
    /// Sorting the codewords puts any prefix directly before some word it
    /// prefixes, so only neighbours need comparing.
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<&str> = self.codes.values().map(String::as_str).collect();
        words.sort_unstable();
        words.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// Concatenate the codewords of a symbol sequence.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for a name outside the alphabet.
    pub fn encode<S: AsRef<str>>(&self, names: &[S]) -> Result<String> {
        let mut bits = String::new();
        for name in names {
            let name = name.as_ref();
            let code = self
                .get(name)
                .ok_or_else(|| Error::UnknownSymbol(name.to_string()))?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}
