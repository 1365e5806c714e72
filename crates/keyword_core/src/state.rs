use std::ops::RangeInclusive;
use std::path::PathBuf;

use keyword_engine::{AnalysisReport, AnalysisSettings, TokenizerMode};

use crate::effect::DocumentSource;
use crate::view_model::{AppViewModel, StatusView};

pub type RequestId = u64;

pub const BAR_TOP_N_RANGE: RangeInclusive<usize> = 1..=50;
pub const CLOUD_TOP_N_RANGE: RangeInclusive<usize> = 1..=200;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Fetching,
    Analyzing,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingRequest {
    pub(crate) id: RequestId,
    pub(crate) source: DocumentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    mode: TokenizerMode,
    url_input: String,
    bar_top_n: usize,
    cloud_top_n: usize,
    font_path: PathBuf,
    next_request_id: RequestId,
    pending: Option<PendingRequest>,
    loaded: Option<(DocumentSource, AnalysisReport)>,
    status: Status,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&AnalysisSettings::default())
    }

    /// Initial mode, slider positions and font path come from `settings`.
    pub fn with_settings(settings: &AnalysisSettings) -> Self {
        Self {
            mode: settings.mode,
            url_input: String::new(),
            bar_top_n: clamp_to(settings.bar_top_n, &BAR_TOP_N_RANGE),
            cloud_top_n: clamp_to(settings.cloud_top_n, &CLOUD_TOP_N_RANGE),
            font_path: settings.font_path.clone(),
            next_request_id: 1,
            pending: None,
            loaded: None,
            status: Status::Idle,
            dirty: false,
        }
    }

    pub fn mode(&self) -> TokenizerMode {
        self.mode
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.loaded.as_ref().map(|(_, report)| report)
    }

    pub fn view(&self) -> AppViewModel {
        let mut view = AppViewModel {
            mode: self.mode,
            url_input: self.url_input.clone(),
            bar_top_n: self.bar_top_n,
            cloud_top_n: self.cloud_top_n,
            status: self.status_view(),
            dirty: self.dirty,
            ..AppViewModel::default()
        };
        if let Some((source, report)) = &self.loaded {
            view.source_label = Some(source.label().to_string());
            view.encoding_label = report.encoding_label.clone();
            view.keyword_count = report.keyword_count;
            view.distinct_keywords = report.table.len();
            view.bar = report.bar_series(self.bar_top_n).unwrap_or_default();
            view.table = report.table_rows(self.bar_top_n).unwrap_or_default();
            if !report.is_empty() {
                view.word_cloud = report
                    .word_cloud(self.cloud_top_n, self.font_path.clone())
                    .ok();
            }
        }
        view
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn status_view(&self) -> StatusView {
        match &self.status {
            Status::Idle => StatusView::Idle,
            Status::Fetching | Status::Analyzing => StatusView::Working,
            Status::Ready => match self.report() {
                Some(report) if report.is_empty() => StatusView::Empty,
                _ => StatusView::Ready,
            },
            Status::Failed(message) => StatusView::Error(message.clone()),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_mode(&mut self, mode: TokenizerMode) {
        if self.mode != mode {
            self.mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_bar_top_n(&mut self, n: usize) {
        let n = clamp_to(n, &BAR_TOP_N_RANGE);
        if self.bar_top_n != n {
            self.bar_top_n = n;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_cloud_top_n(&mut self, n: usize) {
        let n = clamp_to(n, &CLOUD_TOP_N_RANGE);
        if self.cloud_top_n != n {
            self.cloud_top_n = n;
            self.mark_dirty();
        }
    }

    /// Starts a new request, superseding any in flight.
    pub(crate) fn begin_request(&mut self, source: DocumentSource, status: Status) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(PendingRequest { id, source });
        self.status = status;
        self.mark_dirty();
        id
    }

    /// The in-flight request matching `id`, if it is still current.
    pub(crate) fn pending(&self, id: RequestId) -> Option<&PendingRequest> {
        self.pending.as_ref().filter(|pending| pending.id == id)
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.pending = None;
        self.set_status(Status::Failed(message));
    }

    pub(crate) fn complete(&mut self, report: AnalysisReport) {
        if let Some(pending) = self.pending.take() {
            self.loaded = Some((pending.source, report));
            self.set_status(Status::Ready);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.url_input.clear();
        self.pending = None;
        self.loaded = None;
        self.status = Status::Idle;
        self.mark_dirty();
    }
}

fn clamp_to(n: usize, range: &RangeInclusive<usize>) -> usize {
    n.clamp(*range.start(), *range.end())
}
