use keyword_engine::{AnalysisReport, PipelineError, TokenizerMode};

use crate::RequestId;

/// Response body handed back by the host after a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked tagged-field or free-text extraction.
    ModeSelected(TokenizerMode),
    /// User uploaded a file.
    FileUploaded { name: String, bytes: Vec<u8> },
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// User submitted the current URL input.
    UrlSubmitted,
    /// Host finished a `FetchUrl` effect. The error is the host's message.
    FetchCompleted {
        request_id: RequestId,
        result: Result<FetchedPage, String>,
    },
    /// Host finished an `Analyze` effect.
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisReport, PipelineError>,
    },
    /// Bar chart / table slider moved.
    BarTopNChanged(usize),
    /// Word-cloud slider moved.
    CloudTopNChanged(usize),
    /// Clear the loaded document and any error.
    Reset,
    /// UI/render tick to coalesce rendering.
    Tick,
    NoOp,
}
