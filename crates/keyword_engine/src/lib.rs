//! Keyword engine: decoding, tokenization, counting and top-N selection.
mod decode;
mod extract;
mod frequency;
mod pipeline;
mod present;
mod segment;
mod select;
mod settings;
mod stopwords;
mod tokenize;

pub use decode::{
    charset_from_content_type, decode_text, decode_text_with_default, DecodeError, DecodedText,
    DEFAULT_ENCODING,
};
pub use extract::{TextExtractor, VisibleTextExtractor};
pub use frequency::{FrequencyTable, KeywordCount};
pub use pipeline::{AnalysisReport, KeywordPipeline, PipelineError, PipelineWarning};
pub use present::{
    table_rows, BarSeries, Orientation, TableRow, WordCloudInput, DEFAULT_FONT_PATH,
    WORD_CLOUD_BACKGROUND, WORD_CLOUD_HEIGHT, WORD_CLOUD_WIDTH,
};
pub use segment::{JiebaSegmenter, Segmenter, SegmenterKind, UnicodeWordSegmenter};
pub use select::{top_n, SelectError, TopNResult};
pub use settings::{
    AnalysisSettings, ConfigError, FreeTextSettings, TaggedFieldSettings, DEFAULT_BAR_TOP_N,
    DEFAULT_CLOUD_TOP_N,
};
pub use stopwords::{StopwordSet, DEFAULT_STOPWORDS};
pub use tokenize::{
    clean_text, FreeTextTokenizer, KeywordStream, RawDocument, TaggedFieldTokenizer, Tokenizer,
    TokenizerMode,
};
