use std::path::PathBuf;
use std::sync::OnceLock;

use keyword_logging::{kw_debug, kw_info, kw_warn};
use thiserror::Error;

use crate::decode::{decode_text_with_default, DecodeError};
use crate::frequency::FrequencyTable;
use crate::present::{table_rows, BarSeries, TableRow, WordCloudInput};
use crate::select::{top_n, SelectError, TopNResult};
use crate::settings::{AnalysisSettings, ConfigError};
use crate::stopwords::StopwordSet;
use crate::tokenize::{
    FreeTextTokenizer, KeywordStream, RawDocument, TaggedFieldTokenizer, Tokenizer, TokenizerMode,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("input decoding failed: {0}")]
    InputDecoding(#[from] DecodeError),
}

/// Non-fatal conditions the presentation layer may want to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineWarning {
    /// No keywords survived extraction.
    EmptyResult,
}

/// Outcome of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub mode: TokenizerMode,
    /// Encoding the input bytes were decoded with, if bytes were given.
    pub encoding_label: Option<String>,
    /// Length of the keyword stream that was counted.
    pub keyword_count: usize,
    pub table: FrequencyTable,
    pub warnings: Vec<PipelineWarning>,
}

impl AnalysisReport {
    fn from_stream(mode: TokenizerMode, encoding_label: Option<String>, stream: KeywordStream) -> Self {
        let keyword_count = stream.len();
        let table = FrequencyTable::from_keywords(&stream);
        let mut warnings = Vec::new();
        if table.is_empty() {
            kw_warn!("No keywords extracted in {:?} mode", mode);
            warnings.push(PipelineWarning::EmptyResult);
        }
        Self {
            mode,
            encoding_label,
            keyword_count,
            table,
            warnings,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn top(&self, n: usize) -> Result<TopNResult, SelectError> {
        top_n(&self.table, n)
    }

    pub fn bar_series(&self, n: usize) -> Result<BarSeries, SelectError> {
        Ok(BarSeries::from_top(&self.top(n)?))
    }

    pub fn table_rows(&self, n: usize) -> Result<Vec<TableRow>, SelectError> {
        Ok(table_rows(&self.top(n)?))
    }

    pub fn word_cloud(
        &self,
        n: usize,
        font_path: impl Into<PathBuf>,
    ) -> Result<WordCloudInput, SelectError> {
        Ok(WordCloudInput::new(&self.top(n)?, font_path))
    }
}

/// Decode -> tokenize -> count, configured once from [`AnalysisSettings`].
///
/// The free-text tokenizer (and its segmentation dictionary) is built on
/// first use so tagged-field analysis stays cheap.
pub struct KeywordPipeline {
    settings: AnalysisSettings,
    tagged: TaggedFieldTokenizer,
    free_text: OnceLock<FreeTextTokenizer>,
}

impl KeywordPipeline {
    pub fn new(settings: AnalysisSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let tagged = TaggedFieldTokenizer::new(
            settings.tagged.marker.clone(),
            settings.tagged.delimiter,
        );
        Ok(Self {
            settings,
            tagged,
            free_text: OnceLock::new(),
        })
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Analyze raw bytes. `hint` overrides the configured encoding and may be
    /// a bare label or a Content-Type value; a Content-Type without a charset
    /// leaves the configured encoding in force.
    pub fn analyze(
        &self,
        bytes: &[u8],
        hint: Option<&str>,
        mode: TokenizerMode,
    ) -> Result<AnalysisReport, PipelineError> {
        let decoded =
            decode_text_with_default(bytes, hint, self.settings.encoding.as_deref())?;
        kw_debug!(
            "Decoded {} bytes as {} ({} chars)",
            bytes.len(),
            decoded.encoding_label,
            decoded.text.chars().count()
        );
        let document = RawDocument::from_text(decoded.text);
        let stream = self.tokenize(&document, mode);
        Ok(AnalysisReport::from_stream(
            mode,
            Some(decoded.encoding_label),
            stream,
        ))
    }

    /// Analyze an already-decoded document.
    pub fn analyze_document(&self, document: &RawDocument, mode: TokenizerMode) -> AnalysisReport {
        let stream = self.tokenize(document, mode);
        AnalysisReport::from_stream(mode, None, stream)
    }

    pub fn tokenize(&self, document: &RawDocument, mode: TokenizerMode) -> KeywordStream {
        let stream = match mode {
            TokenizerMode::TaggedField => self.tagged.tokenize(document),
            TokenizerMode::FreeText => self.free_text_tokenizer().tokenize(document),
        };
        kw_debug!("Tokenized {:?} document into {} keywords", mode, stream.len());
        stream
    }

    fn free_text_tokenizer(&self) -> &FreeTextTokenizer {
        self.free_text.get_or_init(|| {
            let options = &self.settings.free_text;
            let mut stopwords = if options.builtin_stopwords {
                StopwordSet::builtin()
            } else {
                StopwordSet::empty()
            };
            if options.lowercase {
                stopwords.extend(options.extra_stopwords.iter().map(|w| w.to_lowercase()));
            } else {
                stopwords.extend(options.extra_stopwords.iter().cloned());
            }
            kw_info!(
                "Building free-text tokenizer ({:?} segmenter, {} stopwords)",
                options.segmenter,
                stopwords.len()
            );
            FreeTextTokenizer::new(options.segmenter.build(), stopwords)
                .with_lowercase(options.lowercase)
        })
    }
}

impl std::fmt::Debug for KeywordPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordPipeline")
            .field("settings", &self.settings)
            .field("free_text_ready", &self.free_text.get().is_some())
            .finish()
    }
}
