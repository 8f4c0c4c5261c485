// Sequential token table.

use super::TableError;

/// An ordered list of `(from, to)` token pairs applied one after another.
///
/// Declared order is part of the table's meaning: every occurrence of the
/// first `from` token is rewritten before the second pair is looked at, and
/// a later pair may match text produced by an earlier one. Tables are never
/// reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    pairs: Vec<(String, String)>,
}

impl TokenTable {
    /// Build a table from two index-aligned token lists.
    pub fn new(from: &[&str], to: &[&str]) -> Result<Self, TableError> {
        if from.len() != to.len() {
            return Err(TableError::LengthMismatch { from: from.len(), to: to.len() });
        }
        Self::from_pairs(from.iter().copied().zip(to.iter().copied()))
    }

    /// Build a table from `(from, to)` pairs, in order.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TableError> {
        let pairs = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (f, t))| {
                if f.is_empty() || t.is_empty() {
                    Err(TableError::EmptyToken(i))
                } else {
                    Ok((f.to_string(), t.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pairs })
    }

    /// The same index pairing read in the opposite direction.
    ///
    /// Order is kept as declared, which is what the letter tables rely on:
    /// one list of letters serves both directions.
    pub fn reversed(&self) -> Self {
        Self {
            pairs: self.pairs.iter().map(|(f, t)| (t.clone(), f.clone())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }

    /// Replace every occurrence of each `from` token, pair by pair.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (from, to) in &self.pairs {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }
        out
    }
}
