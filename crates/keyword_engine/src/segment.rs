use jieba_rs::Jieba;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Splits cleaned running text into candidate words, in reading order.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmenterKind {
    /// Dictionary + HMM segmentation for Chinese text.
    #[default]
    Jieba,
    /// UAX #29 word boundaries, suited to space-delimited languages.
    Unicode,
}

impl SegmenterKind {
    pub fn build(self) -> Box<dyn Segmenter> {
        match self {
            SegmenterKind::Jieba => Box::new(JiebaSegmenter::new()),
            SegmenterKind::Unicode => Box::new(UnicodeWordSegmenter),
        }
    }
}

/// Loads the bundled jieba dictionary once at construction.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter").finish_non_exhaustive()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeWordSegmenter;

impl Segmenter for UnicodeWordSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_segmenter_splits_on_word_boundaries() {
        let words = UnicodeWordSegmenter.segment("quick brown fox");
        assert_eq!(words, vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn jieba_keeps_every_character() {
        let text = "我们在学习中文分词";
        let words = JiebaSegmenter::new().segment(text);
        assert_eq!(words.concat(), text);
        assert!(words.len() > 1);
    }
}
