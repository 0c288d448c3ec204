//! Tree, code map and statistics built together from one symbol table.

use crate::codes::{derive_codes, CodeMap};
use crate::error::Result;
use crate::stats::{analyze, Stats};
use crate::symbol::Symbol;
use crate::tree::{build, HuffmanTree};

/// A complete, consistent Huffman code for one symbol table.
#[derive(Debug, Clone)]
pub struct Codebook {
    tree: HuffmanTree,
    codes: CodeMap,
    stats: Stats,
}

impl Codebook {
    /// Build the tree, derive the codewords and analyze them.
    ///
    /// Either every stage succeeds or the first error is returned; there is
    /// no partial result.
    pub fn new(symbols: &[Symbol]) -> Result<Self> {
        let tree = build(symbols)?;
        let codes = derive_codes(&tree);
        let stats = analyze(symbols, &codes)?;
        Ok(Self { tree, codes, stats })
    }

    /// The Huffman tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Codeword per symbol.
    pub fn codes(&self) -> &CodeMap {
        &self.codes
    }

    /// Compression statistics.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Encode a symbol sequence as a `'0'`/`'1'` string.
    pub fn encode<S: AsRef<str>>(&self, names: &[S]) -> Result<String> {
        self.codes.encode(names)
    }

    /// Decode a `'0'`/`'1'` string back into symbol names.
    pub fn decode(&self, bits: &str) -> Result<Vec<&str>> {
        self.tree.decode(bits)
    }
}
