use keyword_engine::{BarSeries, TableRow, TokenizerMode, WordCloudInput};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Idle,
    Working,
    /// A document was analyzed but produced no keywords.
    Empty,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: TokenizerMode,
    pub url_input: String,
    pub bar_top_n: usize,
    pub cloud_top_n: usize,
    pub status: StatusView,
    pub source_label: Option<String>,
    pub encoding_label: Option<String>,
    pub keyword_count: usize,
    pub distinct_keywords: usize,
    pub bar: BarSeries,
    /// Same selection as `bar`, with ranks.
    pub table: Vec<TableRow>,
    pub word_cloud: Option<WordCloudInput>,
    pub dirty: bool,
}
