use std::collections::HashMap;

use serde::Serialize;

/// A keyword together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

/// Occurrence counts per exact keyword string.
///
/// Entries are kept in first-seen order; `index` maps a keyword to its slot
/// in `entries`. Invariant: `total` equals the number of keywords recorded
/// and every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<KeywordCount>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a keyword stream in a single pass.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for keyword in keywords {
            table.record(keyword.as_ref());
        }
        table
    }

    pub fn record(&mut self, keyword: &str) {
        self.total += 1;
        if let Some(&slot) = self.index.get(keyword) {
            self.entries[slot].count += 1;
            return;
        }
        self.index.insert(keyword.to_string(), self.entries.len());
        self.entries.push(KeywordCount {
            keyword: keyword.to_string(),
            count: 1,
        });
    }

    pub fn get(&self, keyword: &str) -> Option<u64> {
        self.index.get(keyword).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted stream.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[KeywordCount] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|entry| (entry.keyword.as_str(), entry.count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_keywords(iter)
    }
}
