use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Label used when the caller does not supply an encoding hint.
pub const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown encoding label {label:?}")]
    UnknownEncoding { label: String },
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> hint -> chardetng fallback.
///
/// The hint is either a bare encoding label (`"utf-8"`, `"GBK"`) or a
/// Content-Type value such as `"text/html; charset=gb2312"`. A Content-Type
/// without a charset parameter falls through to detection; an unknown label
/// is an error rather than a silent guess.
pub fn decode_text(bytes: &[u8], hint: Option<&str>) -> Result<DecodedText, DecodeError> {
    decode_text_with_default(bytes, hint, None)
}

/// Like [`decode_text`], but a hint that names no charset resolves to
/// `default` before detection is tried. Detection only runs when neither
/// the hint nor `default` names an encoding.
pub fn decode_text_with_default(
    bytes: &[u8],
    hint: Option<&str>,
    default: Option<&str>,
) -> Result<DecodedText, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    let label = hint
        .and_then(label_from_hint)
        .or_else(|| default.and_then(label_from_hint));
    if let Some(label) = label {
        let enc = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| DecodeError::UnknownEncoding { label: label.clone() })?;
        return decode_with(bytes, enc);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn label_from_hint(hint: &str) -> Option<String> {
    let hint = hint.trim();
    if hint.is_empty() {
        return None;
    }
    if hint.contains(';') || hint.contains('/') {
        return charset_from_content_type(hint);
    }
    Some(hint.to_string())
}

/// Pull the `charset=` parameter out of a Content-Type header value.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let part = part.trim();
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()))
        })
        .find(|value| !value.is_empty())
        .map(|s| s.to_string())
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedText, DecodeError> {
    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: used.name().to_string(),
            message: "input contains byte sequences that are invalid for this encoding".into(),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
    })
}
