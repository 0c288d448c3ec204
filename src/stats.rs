//! Compression analysis against a fixed-width baseline.
//!
//! A fixed-width code for `n` symbols needs `ceil(log2(n))` bits per
//! occurrence (at least one). The Huffman code spends `len(code(s))` bits on
//! each occurrence of `s`. The ratio of the two totals is the compression
//! ratio; below 1.0 the Huffman code is smaller.

use crate::codes::CodeMap;
use crate::error::{Error, Result};
use crate::symbol::{self, Symbol};

/// Aggregate bit counts for one symbol table and its code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Number of distinct symbols.
    pub symbol_count: usize,
    /// Sum of all weights.
    pub total_occurrences: u64,
    /// Bits per symbol of the fixed-width baseline.
    pub fixed_bits_per_symbol: u32,
    /// `total_occurrences * fixed_bits_per_symbol`.
    pub fixed_total_bits: u64,
    /// Sum of `weight * codeword length`.
    pub huffman_total_bits: u64,
    /// `huffman_total_bits / total_occurrences`.
    pub avg_huffman_length: f64,
    /// `huffman_total_bits / fixed_total_bits`.
    pub compression_ratio: f64,
}

impl Stats {
    /// Fraction of the fixed-width size saved, `1 - compression_ratio`.
    pub fn space_saving(&self) -> f64 {
        1.0 - self.compression_ratio
    }
}

/// Smallest fixed code width able to tell `n` symbols apart, floored at one bit.
pub fn fixed_width(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros().max(1)
}

/// Compute compression statistics for `symbols` under `codes`.
///
/// # Errors
/// - `Error::DivisionUndefined` if the weights sum to zero (including an
///   empty table).
/// - `Error::EmptyName`, `Error::ZeroWeight` or `Error::DuplicateSymbol`
///   for the first malformed record.
/// - `Error::CodeCountMismatch` if `codes` does not hold exactly one entry
///   per symbol.
/// - `Error::MissingCode` if a symbol has no codeword.
/// - `Error::WeightOverflow` if a bit total exceeds `u64::MAX`.
pub fn analyze(symbols: &[Symbol], codes: &CodeMap) -> Result<Stats> {
    let total_occurrences = symbols
        .iter()
        .try_fold(0u64, |acc, s| acc.checked_add(s.weight))
        .ok_or(Error::WeightOverflow)?;
    if total_occurrences == 0 {
        return Err(Error::DivisionUndefined);
    }
    symbol::validate(symbols)?;
    if codes.len() != symbols.len() {
        return Err(Error::CodeCountMismatch {
            expected: symbols.len(),
            found: codes.len(),
        });
    }

    let symbol_count = symbols.len();
    let fixed_bits_per_symbol = fixed_width(symbol_count);
    let fixed_total_bits = total_occurrences
        .checked_mul(u64::from(fixed_bits_per_symbol))
        .ok_or(Error::WeightOverflow)?;

    let mut huffman_total_bits = 0u64;
    for s in symbols {
        let code = codes
            .get(&s.name)
            .ok_or_else(|| Error::MissingCode(s.name.clone()))?;
        huffman_total_bits = s
            .weight
            .checked_mul(code.len() as u64)
            .and_then(|bits| huffman_total_bits.checked_add(bits))
            .ok_or(Error::WeightOverflow)?;
    }

    Ok(Stats {
        symbol_count,
        total_occurrences,
        fixed_bits_per_symbol,
        fixed_total_bits,
        huffman_total_bits,
        avg_huffman_length: huffman_total_bits as f64 / total_occurrences as f64,
        compression_ratio: huffman_total_bits as f64 / fixed_total_bits as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::derive_codes;
    use crate::symbol::table;
    use crate::tree::build;

    fn stats_for(pairs: &[(&str, u64)]) -> Stats {
        let symbols = table(pairs.iter().copied());
        let codes = derive_codes(&build(&symbols).unwrap());
        analyze(&symbols, &codes).unwrap()
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(fixed_width(0), 1);
        assert_eq!(fixed_width(1), 1);
        assert_eq!(fixed_width(2), 1);
        assert_eq!(fixed_width(3), 2);
        assert_eq!(fixed_width(4), 2);
        assert_eq!(fixed_width(5), 3);
        assert_eq!(fixed_width(13), 4);
        assert_eq!(fixed_width(1024), 10);
        assert_eq!(fixed_width(1025), 11);
    }

    #[test]
    fn test_single_symbol() {
        let stats = stats_for(&[("voice", 5)]);
        assert_eq!(stats.fixed_bits_per_symbol, 1);
        assert_eq!(stats.fixed_total_bits, 5);
        assert_eq!(stats.huffman_total_bits, 5);
        assert_eq!(stats.avg_huffman_length, 1.0);
        assert_eq!(stats.compression_ratio, 1.0);
    }

    #[test]
    fn test_two_symbols() {
        let stats = stats_for(&[("a", 3), ("b", 7)]);
        assert_eq!(stats.total_occurrences, 10);
        assert_eq!(stats.fixed_bits_per_symbol, 1);
        assert_eq!(stats.fixed_total_bits, 10);
        assert_eq!(stats.huffman_total_bits, 10);
        assert_eq!(stats.compression_ratio, 1.0);
        assert_eq!(stats.space_saving(), 0.0);
    }

    #[test]
    fn test_four_symbols() {
        let stats = stats_for(&[("a", 1), ("b", 1), ("c", 2), ("d", 4)]);
        assert_eq!(stats.symbol_count, 4);
        assert_eq!(stats.total_occurrences, 8);
        assert_eq!(stats.fixed_bits_per_symbol, 2);
        assert_eq!(stats.fixed_total_bits, 16);
        assert_eq!(stats.huffman_total_bits, 14);
        assert_eq!(stats.avg_huffman_length, 1.75);
        assert_eq!(stats.compression_ratio, 0.875);
    }

    #[test]
    fn test_uniform_weights_match_fixed_width() {
        let stats = stats_for(&[("a", 3), ("b", 3), ("c", 3), ("d", 3)]);
        assert_eq!(stats.huffman_total_bits, stats.fixed_total_bits);
        assert_eq!(stats.compression_ratio, 1.0);
    }

    #[test]
    fn test_zero_total_is_undefined() {
        let codes = CodeMap::default();
        assert_eq!(analyze(&[], &codes), Err(Error::DivisionUndefined));
        assert_eq!(
            analyze(&table([("a", 0)]), &codes),
            Err(Error::DivisionUndefined)
        );
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let codes = derive_codes(&build(&table([("a", 1), ("b", 1), ("c", 2)])).unwrap());
        let symbols = table([("a", 1), ("a", 1), ("b", 1), ("c", 2)]);
        assert_eq!(
            analyze(&symbols, &codes),
            Err(Error::DuplicateSymbol("a".into()))
        );
    }

    #[test]
    fn test_zero_weight_rejected_when_total_positive() {
        let codes = derive_codes(&build(&table([("a", 1), ("b", 1)])).unwrap());
        assert_eq!(
            analyze(&table([("a", 3), ("b", 0)]), &codes),
            Err(Error::ZeroWeight("b".into()))
        );
    }

    #[test]
    fn test_code_map_size_mismatch() {
        let codes = derive_codes(&build(&table([("a", 1), ("b", 1), ("c", 2)])).unwrap());
        assert_eq!(
            analyze(&table([("a", 1), ("b", 1)]), &codes),
            Err(Error::CodeCountMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_bit_totals_overflow() {
        let half = u64::MAX / 2;
        let symbols = table([("a", half), ("b", half), ("c", 1)]);
        let codes = derive_codes(&build(&symbols).unwrap());
        assert_eq!(analyze(&symbols, &codes), Err(Error::WeightOverflow));

        let symbols = table([("a", u64::MAX), ("b", 1)]);
        assert_eq!(
            analyze(&symbols, &CodeMap::default()),
            Err(Error::WeightOverflow)
        );
    }

    #[test]
    fn test_missing_code() {
        let symbols = table([("a", 3), ("b", 7)]);
        let codes = derive_codes(&build(&table([("a", 3), ("c", 7)])).unwrap());
        assert_eq!(
            analyze(&symbols, &codes),
            Err(Error::MissingCode("b".into()))
        );
    }
}
