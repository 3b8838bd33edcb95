// ABOUTME: Resource decoding for raw HTML bytes handed to the extractor.
// ABOUTME: Uses the Content-Type charset when present, otherwise chardetng detection.

use encoding_rs::Encoding;
use tracing::debug;

/// Decodes raw HTML bytes.
///
/// A byte-order mark wins over everything else. Otherwise the `charset`
/// parameter of `content_type` is used when it names a known encoding, and
/// chardetng guesses when it does not.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(declared_encoding)
        .unwrap_or_else(|| detect_encoding(body));

    // `decode` sniffs and strips a BOM before falling back to `encoding`.
    let (decoded, used, _) = encoding.decode(body);
    debug!(encoding = used.name(), "decoded body");
    decoded.into_owned()
}

/// Encoding named by the `charset` parameter of a Content-Type value.
fn declared_encoding(content_type: &str) -> Option<&'static Encoding> {
    let label = content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c: char| c == '"' || c == '\''))
    })?;
    Encoding::for_label(label.as_bytes())
}

fn detect_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, true)
}
