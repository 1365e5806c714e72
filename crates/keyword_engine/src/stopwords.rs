//! Stopword filtering for free-text extraction.

use std::collections::HashSet;

/// Function words dropped from Chinese running text by default.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "的", "了", "在", "是", "我", "你", "他", "她", "它", "们", "这", "那", "之", "与", "和", "或",
];

/// An exact-match (case-sensitive) stopword set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The default Chinese function-word list.
    pub fn builtin() -> Self {
        Self::from_list(DEFAULT_STOPWORDS.iter().copied())
    }

    /// Create an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_loaded() {
        let set = StopwordSet::builtin();
        assert_eq!(set.len(), DEFAULT_STOPWORDS.len());
        assert!(set.contains("的"));
        assert!(!set.contains("中文"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let set = StopwordSet::from_list(["the"]);
        assert!(set.contains("the"));
        assert!(!set.contains("The"));
    }
}
