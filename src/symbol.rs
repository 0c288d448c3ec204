//! Weighted symbol records.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// A keyword and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// The keyword. Non-empty and unique within a table.
    pub name: String,
    /// Occurrence count. Must be at least 1.
    pub weight: u64,
}

impl Symbol {
    /// Create a symbol record.
    pub fn new(name: impl Into<String>, weight: u64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

impl From<(&str, u64)> for Symbol {
    fn from((name, weight): (&str, u64)) -> Self {
        Self::new(name, weight)
    }
}

impl From<(String, u64)> for Symbol {
    fn from((name, weight): (String, u64)) -> Self {
        Self::new(name, weight)
    }
}

/// Collect `(name, weight)` pairs into a symbol table.
pub fn table<I, S>(pairs: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: Into<Symbol>,
{
    pairs.into_iter().map(Into::into).collect()
}

/// Check the input contract: non-empty list, non-empty unique names,
/// positive weights. Reports the first violation in input order.
pub(crate) fn validate(symbols: &[Symbol]) -> Result<()> {
    if symbols.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut seen = HashSet::with_capacity(symbols.len());
    for s in symbols {
        if s.name.is_empty() {
            return Err(Error::EmptyName);
        }
        if s.weight == 0 {
            return Err(Error::ZeroWeight(s.name.clone()));
        }
        if !seen.insert(s.name.as_str()) {
            return Err(Error::DuplicateSymbol(s.name.clone()));
        }
    }
    Ok(())
}
