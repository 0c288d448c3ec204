//! Error types for Huffman code construction and analysis.

use thiserror::Error;

/// Error variants for building, deriving, analyzing and applying a code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No symbols were supplied.
    #[error("empty input: at least one symbol is required")]
    EmptyInput,

    /// The same symbol name appears more than once in the input.
    #[error("duplicate symbol: {0:?}")]
    DuplicateSymbol(String),

    /// A symbol with an empty name was supplied.
    #[error("symbol name must not be empty")]
    EmptyName,

    /// A symbol carries a weight of zero.
    #[error("symbol {0:?} has zero weight")]
    ZeroWeight(String),

    /// Total occurrences are zero, so averages and ratios are undefined.
    #[error("division undefined: total occurrences is zero")]
    DivisionUndefined,

    /// Summed or scaled weights do not fit in a `u64`.
    #[error("weight overflow: totals exceed u64")]
    WeightOverflow,

    /// The code map covers a different number of symbols than the table.
    #[error("code map has {found} entries for {expected} symbols")]
    CodeCountMismatch {
        /// Symbols in the table.
        expected: usize,
        /// Entries in the code map.
        found: usize,
    },

    /// A symbol in the table has no codeword in the code map.
    #[error("no codeword for symbol {0:?}")]
    MissingCode(String),

    /// Encoding was asked for a symbol outside the alphabet.
    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(String),

    /// A bit string contained something other than '0' or '1'.
    #[error("invalid bit: {0:?}")]
    InvalidBit(char),

    /// The bit string ended in the middle of a codeword.
    #[error("bit stream ends inside a codeword")]
    TruncatedCode,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
