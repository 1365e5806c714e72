use keyword_engine::TokenizerMode;
use keyword_logging::{kw_debug, kw_info, kw_warn};
use url::Url;

use crate::{AppState, DocumentSource, Effect, Msg, Status};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::FileUploaded { name, bytes } => {
            kw_info!("Upload {} ({} bytes) in {:?} mode", name, bytes.len(), state.mode());
            let source = DocumentSource::Upload { name };
            let request_id = state.begin_request(source.clone(), Status::Analyzing);
            vec![Effect::Analyze {
                request_id,
                source,
                bytes,
                encoding_hint: None,
                mode: state.mode(),
            }]
        }
        Msg::UrlInputChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::UrlSubmitted => {
            let raw = state.url_input().trim().to_string();
            if raw.is_empty() {
                return (state, Vec::new());
            }
            match parse_web_url(&raw) {
                Ok(url) => {
                    kw_info!("Fetching {}", url);
                    let request_id =
                        state.begin_request(DocumentSource::Url(url.clone()), Status::Fetching);
                    vec![Effect::FetchUrl { request_id, url }]
                }
                Err(message) => {
                    kw_warn!("Rejected url input {:?}: {}", raw, message);
                    state.fail(message);
                    Vec::new()
                }
            }
        }
        Msg::FetchCompleted { request_id, result } => {
            let Some(source) = state.pending(request_id).map(|p| p.source.clone()) else {
                kw_debug!("Ignoring stale fetch result {}", request_id);
                return (state, Vec::new());
            };
            match result {
                Ok(page) => {
                    state.set_status(Status::Analyzing);
                    vec![Effect::Analyze {
                        request_id,
                        source,
                        bytes: page.bytes,
                        encoding_hint: page.content_type,
                        mode: TokenizerMode::FreeText,
                    }]
                }
                Err(message) => {
                    kw_warn!("Fetch of {} failed: {}", source.label(), message);
                    state.fail(format!("fetch failed: {message}"));
                    Vec::new()
                }
            }
        }
        Msg::AnalysisCompleted { request_id, result } => {
            if state.pending(request_id).is_none() {
                kw_debug!("Ignoring stale analysis result {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(report) => {
                    kw_info!(
                        "Analysis {} done: {} keywords, {} distinct",
                        request_id,
                        report.keyword_count,
                        report.table.len()
                    );
                    state.complete(report);
                }
                Err(err) => {
                    kw_warn!("Analysis {} failed: {}", request_id, err);
                    state.fail(err.to_string());
                }
            }
            Vec::new()
        }
        Msg::BarTopNChanged(n) => {
            state.set_bar_top_n(n);
            Vec::new()
        }
        Msg::CloudTopNChanged(n) => {
            state.set_cloud_top_n(n);
            Vec::new()
        }
        Msg::Reset => {
            state.reset();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn parse_web_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|err| format!("invalid url: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(format!("unsupported url scheme: {other}")),
    }
}
