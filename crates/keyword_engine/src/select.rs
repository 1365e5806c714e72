use serde::Serialize;

use crate::frequency::{FrequencyTable, KeywordCount};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("top-n must be at least 1, got {0}")]
    InvalidTopN(usize),
}

/// The most frequent keywords, count descending, ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopNResult {
    entries: Vec<KeywordCount>,
}

impl TopNResult {
    pub fn entries(&self) -> &[KeywordCount] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<KeywordCount> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the selected counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|entry| (entry.keyword.as_str(), entry.count))
    }
}

/// Select the `n` most frequent entries of `table`.
///
/// Returns every entry when `n` exceeds the distinct keyword count.
pub fn top_n(table: &FrequencyTable, n: usize) -> Result<TopNResult, SelectError> {
    if n == 0 {
        return Err(SelectError::InvalidTopN(n));
    }
    let mut entries = table.entries().to_vec();
    // `sort_by` is stable and entries start in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(n);
    Ok(TopNResult { entries })
}
