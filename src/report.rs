//! Text rendering of codewords and statistics.

use std::fmt;

use crate::codebook::Codebook;
use crate::codes::CodeMap;
use crate::stats::Stats;

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of codewords listed before truncating.
    pub max_display: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { max_display: 20 }
    }
}

/// Codeword listing truncated to `max_display` entries, in name order.
pub struct CodeListing<'a> {
    codes: &'a CodeMap,
    max_display: usize,
}

impl<'a> CodeListing<'a> {
    /// List at most `max_display` entries of `codes`.
    pub fn new(codes: &'a CodeMap, max_display: usize) -> Self {
        Self { codes, max_display }
    }
}

impl fmt::Display for CodeListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.codes.len().min(self.max_display);
        writeln!(f, "Huffman codes ({} of {} shown):", shown, self.codes.len())?;
        for (name, code) in self.codes.iter().take(shown) {
            writeln!(f, "  {} -> {}", name, code)?;
        }
        if self.codes.len() > shown {
            writeln!(f, "  ... ({} more)", self.codes.len() - shown)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbols (N): {}", self.symbol_count)?;
        writeln!(f, "Total occurrences: {}", self.total_occurrences)?;
        writeln!(f, "Fixed-width code:")?;
        writeln!(f, "  total bits: {}", self.fixed_total_bits)?;
        writeln!(f, "  bits per symbol: {}", self.fixed_bits_per_symbol)?;
        writeln!(f, "Huffman code:")?;
        writeln!(f, "  total bits: {}", self.huffman_total_bits)?;
        writeln!(f, "  average length: {:.4} bits", self.avg_huffman_length)?;
        writeln!(f, "  compression ratio: {:.4}", self.compression_ratio)?;
        writeln!(f, "  space saving: {:.2}%", self.space_saving() * 100.0)
    }
}

/// Render the code listing followed by the statistics.
pub fn render(book: &Codebook, config: &ReportConfig) -> String {
    format!(
        "{}\n{}",
        CodeListing::new(book.codes(), config.max_display),
        book.stats()
    )
}
