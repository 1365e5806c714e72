use keyword_engine::{
    decode_text, decode_text_with_default, DecodeError, TextExtractor, VisibleTextExtractor,
};
use pretty_assertions::assert_eq;

#[test]
fn decode_respects_charset_header() {
    let bytes = b"caf\xe9"; // iso-8859-1
    let decoded = decode_text(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.text, "café");
    assert!(
        decoded.encoding_label.eq_ignore_ascii_case("ISO-8859-1")
            || decoded.encoding_label.eq_ignore_ascii_case("windows-1252")
    );
}

#[test]
fn decode_handles_utf8_bom() {
    let bytes = b"\xEF\xBB\xBFhello";
    let decoded = decode_text(bytes, Some("GBK")).unwrap();
    assert_eq!(decoded.text, "hello");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_without_hint_detects_encoding() {
    let decoded = decode_text("plain ascii".as_bytes(), None).unwrap();
    assert_eq!(decoded.text, "plain ascii");
}

#[test]
fn content_type_without_charset_uses_configured_default() {
    let decoded =
        decode_text_with_default("K1 数据".as_bytes(), Some("text/plain"), Some("UTF-8")).unwrap();
    assert_eq!(decoded.text, "K1 数据");
    assert_eq!(decoded.encoding_label, "UTF-8");

    let err = decode_text_with_default(b"K1 caf\xe9", Some("text/plain"), Some("UTF-8"))
        .unwrap_err();
    assert!(matches!(err, DecodeError::DecodeFailure { encoding, .. } if encoding == "UTF-8"));
}

#[test]
fn content_type_without_charset_and_no_default_detects() {
    let decoded = decode_text("K1 数据".as_bytes(), Some("text/plain")).unwrap();
    assert_eq!(decoded.text, "K1 数据");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn invalid_utf8_reports_the_encoding() {
    let err = decode_text(b"\xC3\x28", Some("utf-8")).unwrap_err();
    assert!(matches!(err, DecodeError::DecodeFailure { encoding, .. } if encoding == "UTF-8"));
}

#[test]
fn extractor_keeps_title_and_body_text_in_order() {
    let html = r#"
    <html><head><title>Title</title><style>body { color: red }</style></head>
    <body>
        <article><h1>Heading</h1><p>Body <b>bold</b>text</p></article>
        <noscript>enable js</noscript>
    </body></html>
    "#;
    let text = VisibleTextExtractor.visible_text(html);
    let words: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(words, vec!["Title", "Heading", "Body", "boldtext"]);
}

#[test]
fn extractor_decodes_entities() {
    let text = VisibleTextExtractor.visible_text("<p>fish &amp; chips</p>");
    assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["fish", "&", "chips"]);
}
