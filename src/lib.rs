//! # Static Huffman Coding for Keyword Tables
//!
//! *Optimal prefix codes for a closed, weighted alphabet.*
//!
//! ## Intuition First
//!
//! Suppose every keyword in a corpus had to be written down as a string of bits.
//! The simplest scheme gives every keyword the same number of bits, enough to
//! tell all of them apart. But some keywords occur hundreds of times and others
//! once. Huffman coding hands the short bit strings to the frequent keywords and
//! the long ones to the rare keywords, while making sure no codeword is the
//! beginning of another, so a concatenated stream can still be split apart
//! without separators.
//!
//! ## The Problem
//!
//! Given symbols $s_1, \dots, s_n$ with weights $w_i \ge 1$, choose prefix-free
//! codewords $c_i$ minimizing the weighted external path length
//!
//! ```text
//! L = \sum_i w_i \cdot |c_i|
//! ```
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down splitting, not always optimal
//! 1952  Huffman     Bottom-up greedy merging: provably optimal prefix codes
//! 1976  Rissanen    Arithmetic coding beats the one-bit-per-symbol floor
//! ```
//!
//! Huffman's insight was to build the code tree from the leaves up: the two
//! rarest symbols can always be siblings at the deepest level of some optimal
//! tree, so merging them and recursing on the smaller problem loses nothing.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ to build the tree with a binary heap, $O(n \cdot d)$
//!   to write out the codewords, where $d$ is the tree depth.
//! - **Space**: $2n - 1$ tree nodes.
//!
//! ## Failure Modes
//!
//! 1. **One-symbol alphabets**: the tree is a bare leaf with an empty path; the
//!    symbol is given the one-bit codeword `"0"` instead.
//! 2. **Tie sensitivity**: equal weights admit several optimal trees. Ties are
//!    broken by insertion order (see [`tree`]), so reordering the input can
//!    change individual codewords without changing the total length.
//!
//! ## Implementation Notes
//!
//! The pipeline is strictly one-way:
//! - [`tree::build`]: symbol table to [`HuffmanTree`].
//! - [`codes::derive_codes`]: tree to [`CodeMap`].
//! - [`stats::analyze`]: symbol table and code map to [`Stats`], compared against
//!   a fixed-width code of `max(1, ceil(log2(n)))` bits per symbol.
//!
//! [`Codebook`] runs all three at once. [`report`] formats the results.
//!
//! ```
//! use keyhuff::{symbol, Codebook};
//!
//! let book = Codebook::new(&symbol::table([("a", 1), ("b", 1), ("c", 2), ("d", 4)]))?;
//! assert_eq!(book.codes().get("d"), Some("0"));
//! assert_eq!(book.stats().huffman_total_bits, 14);
//! # Ok::<(), keyhuff::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codebook;
pub mod codes;
pub mod error;
pub mod report;
pub mod stats;
pub mod symbol;
pub mod tree;

pub use codebook::Codebook;
pub use codes::{derive_codes, CodeMap};
pub use error::{Error, Result};
pub use report::ReportConfig;
pub use stats::{analyze, Stats};
pub use symbol::Symbol;
pub use tree::{build, HuffmanTree, Node};
