use keyword_engine::TokenizerMode;

use crate::RequestId;

/// Where the document under analysis came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Upload { name: String },
    Url(String),
}

impl DocumentSource {
    pub fn label(&self) -> &str {
        match self {
            DocumentSource::Upload { name } => name,
            DocumentSource::Url(url) => url,
        }
    }
}

/// Work the host performs on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Download `url` and answer with `Msg::FetchCompleted`.
    FetchUrl { request_id: RequestId, url: String },
    /// Run the keyword pipeline and answer with `Msg::AnalysisCompleted`.
    Analyze {
        request_id: RequestId,
        source: DocumentSource,
        bytes: Vec<u8>,
        /// Encoding label or Content-Type value; `None` uses the configured default.
        encoding_hint: Option<String>,
        mode: TokenizerMode,
    },
}
