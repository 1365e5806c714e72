use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::{TextExtractor, VisibleTextExtractor};
use crate::segment::Segmenter;
use crate::stopwords::StopwordSet;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Keywords in extraction order; duplicates are kept.
pub type KeywordStream = Vec<String>;

/// Already-decoded input: either pre-split lines or one text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDocument {
    Lines(Vec<String>),
    Text(String),
}

impl RawDocument {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawDocument::Lines(lines.into_iter().map(Into::into).collect())
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        RawDocument::Text(text.into())
    }

    /// Lines in document order; a text blob is split on `\n` / `\r\n`.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            RawDocument::Lines(lines) => lines.iter().map(String::as_str).collect(),
            RawDocument::Text(text) => text.lines().collect(),
        }
    }

    /// The whole document as one string; lines are joined with `\n`.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            RawDocument::Lines(lines) => Cow::Owned(lines.join("\n")),
            RawDocument::Text(text) => Cow::Borrowed(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawDocument::Lines(lines) => lines.iter().all(String::is_empty),
            RawDocument::Text(text) => text.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    /// Semicolon-separated tags on lines that start with a marker.
    #[default]
    TaggedField,
    /// Segmented natural-language text with stopword removal.
    FreeText,
}

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, document: &RawDocument) -> KeywordStream;
}

/// Extracts tags from lines such as `K1 rust;parsing;rust`.
///
/// Lines without the marker are skipped without complaint, and payload
/// pieces are only checked for non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedFieldTokenizer {
    marker: String,
    delimiter: char,
}

impl TaggedFieldTokenizer {
    pub const DEFAULT_MARKER: &'static str = "K1 ";
    pub const DEFAULT_DELIMITER: char = ';';

    pub fn new(marker: impl Into<String>, delimiter: char) -> Self {
        Self {
            marker: marker.into(),
            delimiter,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for TaggedFieldTokenizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARKER, Self::DEFAULT_DELIMITER)
    }
}

impl Tokenizer for TaggedFieldTokenizer {
    fn tokenize(&self, document: &RawDocument) -> KeywordStream {
        let mut keywords = Vec::new();
        for line in document.lines() {
            let Some(payload) = line.strip_prefix(self.marker.as_str()) else {
                continue;
            };
            keywords.extend(
                payload
                    .trim()
                    .split(self.delimiter)
                    .filter(|piece| !piece.is_empty())
                    .map(ToOwned::to_owned),
            );
        }
        keywords
    }
}

/// Markup stripping, cleaning, segmentation and stopword removal.
pub struct FreeTextTokenizer {
    extractor: Box<dyn TextExtractor>,
    segmenter: Box<dyn Segmenter>,
    stopwords: StopwordSet,
    lowercase: bool,
}

impl FreeTextTokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>, stopwords: StopwordSet) -> Self {
        Self {
            extractor: Box::new(VisibleTextExtractor),
            segmenter,
            stopwords,
            lowercase: false,
        }
    }

    /// Lowercase tokens before stopword filtering and counting.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

impl std::fmt::Debug for FreeTextTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreeTextTokenizer")
            .field("stopwords", &self.stopwords.len())
            .field("lowercase", &self.lowercase)
            .finish_non_exhaustive()
    }
}

impl Tokenizer for FreeTextTokenizer {
    fn tokenize(&self, document: &RawDocument) -> KeywordStream {
        let visible = self.extractor.visible_text(&document.text());
        let cleaned = clean_text(&visible);
        self.segmenter
            .segment(&cleaned)
            .into_iter()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .filter(|word| !self.stopwords.contains(word))
            .collect()
    }
}

/// Collapse whitespace runs, then drop punctuation and digits.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let without_punctuation = PUNCTUATION.replace_all(&collapsed, "");
    DIGITS.replace_all(&without_punctuation, "").into_owned()
}
