use std::sync::Once;

use keyword_core::{
    update, AppState, DocumentSource, Effect, FetchedPage, Msg, StatusView, BAR_TOP_N_RANGE,
    CLOUD_TOP_N_RANGE,
};
use keyword_engine::{
    AnalysisReport, DecodeError, KeywordPipeline, AnalysisSettings, PipelineError, RawDocument,
    TokenizerMode,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(keyword_logging::initialize_for_tests);
}

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlInputChanged(input.to_string()));
    update(state, Msg::UrlSubmitted)
}

fn tagged_report(lines: &[&str]) -> AnalysisReport {
    KeywordPipeline::new(AnalysisSettings::default())
        .unwrap()
        .analyze_document(
            &RawDocument::from_lines(lines.iter().copied()),
            TokenizerMode::TaggedField,
        )
}

#[test]
fn upload_emits_analyze_effect_in_current_mode() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::FileUploaded {
            name: "export.txt".into(),
            bytes: b"K1 a;b".to_vec(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::Analyze {
            request_id: 1,
            source: DocumentSource::Upload {
                name: "export.txt".into()
            },
            bytes: b"K1 a;b".to_vec(),
            encoding_hint: None,
            mode: TokenizerMode::TaggedField,
        }]
    );
    assert_eq!(state.view().status, StatusView::Working);
    assert!(state.consume_dirty());
}

#[test]
fn url_submission_trims_and_requests_fetch() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "  https://example.com/news  ");
    assert_eq!(
        effects,
        vec![Effect::FetchUrl {
            request_id: 1,
            url: "https://example.com/news".into(),
        }]
    );
    assert_eq!(state.view().status, StatusView::Working);

    let (_state, effects) = submit_url(AppState::new(), "   ");
    assert!(effects.is_empty());
}

#[test]
fn invalid_url_sets_error_without_effects() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "not a url");
    assert!(effects.is_empty());
    assert!(matches!(state.view().status, StatusView::Error(ref m) if m.starts_with("invalid url")));
}

#[test]
fn fetched_page_is_analyzed_as_free_text_with_content_type_hint() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com/");
    let (_state, effects) = update(
        state,
        Msg::FetchCompleted {
            request_id: 1,
            result: Ok(FetchedPage {
                bytes: b"<p>hi</p>".to_vec(),
                content_type: Some("text/html; charset=gbk".into()),
            }),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Analyze {
            request_id: 1,
            source: DocumentSource::Url("https://example.com/".into()),
            bytes: b"<p>hi</p>".to_vec(),
            encoding_hint: Some("text/html; charset=gbk".into()),
            mode: TokenizerMode::FreeText,
        }]
    );
}

#[test]
fn fetch_failure_is_reported() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com/");
    let (state, effects) = update(
        state,
        Msg::FetchCompleted {
            request_id: 1,
            result: Err("connection refused".into()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().status,
        StatusView::Error("fetch failed: connection refused".into())
    );
}

#[test]
fn stale_results_are_ignored() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://a.example.com/");
    let (state, _) = submit_url(state, "https://b.example.com/");

    let (state, effects) = update(
        state,
        Msg::FetchCompleted {
            request_id: 1,
            result: Ok(FetchedPage {
                bytes: Vec::new(),
                content_type: None,
            }),
        },
    );
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: Ok(tagged_report(&["K1 stale"])),
        },
    );
    assert!(state.report().is_none());
    assert_eq!(state.view().status, StatusView::Working);
}

#[test]
fn completed_analysis_populates_view() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FileUploaded {
            name: "export.txt".into(),
            bytes: Vec::new(),
        },
    );
    let report = tagged_report(&["K1 apple;banana;apple", "ignored line", "K1 banana;cherry"]);
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: Ok(report),
        },
    );
    let (state, _) = update(state, Msg::BarTopNChanged(2));

    let view = state.view();
    assert_eq!(view.status, StatusView::Ready);
    assert_eq!(view.source_label.as_deref(), Some("export.txt"));
    assert_eq!(view.keyword_count, 5);
    assert_eq!(view.distinct_keywords, 3);
    assert_eq!(view.bar.labels, vec!["apple", "banana"]);
    assert_eq!(view.table.len(), 2);
    assert_eq!(view.table[0].rank, 1);

    let cloud = view.word_cloud.expect("word cloud");
    assert_eq!(cloud.weights.len(), 3);
    assert_eq!(cloud.font_path().to_str(), Some("simhei.ttf"));
}

#[test]
fn empty_analysis_shows_empty_status() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FileUploaded {
            name: "empty.txt".into(),
            bytes: Vec::new(),
        },
    );
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: Ok(tagged_report(&["nothing tagged"])),
        },
    );
    let view = state.view();
    assert_eq!(view.status, StatusView::Empty);
    assert!(view.bar.is_empty());
    assert!(view.word_cloud.is_none());
}

#[test]
fn decoding_errors_surface_in_status() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FileUploaded {
            name: "bad.txt".into(),
            bytes: b"\xff".to_vec(),
        },
    );
    let err = PipelineError::InputDecoding(DecodeError::DecodeFailure {
        encoding: "UTF-8".into(),
        message: "bad bytes".into(),
    });
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            result: Err(err.clone()),
        },
    );
    assert_eq!(state.view().status, StatusView::Error(err.to_string()));
}

#[test]
fn sliders_are_clamped_to_their_ranges() {
    let (state, _) = update(AppState::new(), Msg::BarTopNChanged(0));
    let (state, _) = update(state, Msg::CloudTopNChanged(10_000));
    let view = state.view();
    assert_eq!(view.bar_top_n, *BAR_TOP_N_RANGE.start());
    assert_eq!(view.cloud_top_n, *CLOUD_TOP_N_RANGE.end());
}

#[test]
fn mode_switch_applies_to_next_upload() {
    let (state, _) = update(AppState::new(), Msg::ModeSelected(TokenizerMode::FreeText));
    let (_state, effects) = update(
        state,
        Msg::FileUploaded {
            name: "page.html".into(),
            bytes: Vec::new(),
        },
    );
    assert!(matches!(
        effects.as_slice(),
        [Effect::Analyze {
            mode: TokenizerMode::FreeText,
            ..
        }]
    ));
}

#[test]
fn reset_clears_document_but_keeps_sliders() {
    let (state, _) = update(AppState::new(), Msg::BarTopNChanged(7));
    let (state, _) = submit_url(state, "https://example.com/");
    let (state, _) = update(state, Msg::Reset);
    let view = state.view();
    assert_eq!(view.status, StatusView::Idle);
    assert_eq!(view.url_input, "");
    assert_eq!(view.bar_top_n, 7);
}
