use crate::fetcher::types::{Charset, RawPage};
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

/// Bytes of the body inspected when looking for an in-document charset.
const SNIFF_LEN: usize = 4096;

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: &[u8],
    content_type: &str,
) -> RawPage {
    let encoding = detect_encoding(content_type, body_bytes);
    let html = decode_to_utf8(body_bytes, encoding);

    RawPage {
        url_final,
        status,
        html,
        charset: Charset::from_encoding(encoding),
        fetched_at: Utc::now(),
    }
}

fn encoding_from(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let captures = regex.captures(haystack)?;
    let label = captures.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    // 1. Content-Type header
    if let Some(encoding) = encoding_from(&CHARSET_REGEX, content_type) {
        return encoding;
    }

    // 2. <meta charset> or http-equiv in the document head
    let search_bytes = &body_bytes[..body_bytes.len().min(SNIFF_LEN)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(encoding) = encoding_from(&META_CHARSET_REGEX, &search_str) {
        return encoding;
    }
    if let Some(encoding) = encoding_from(&META_HTTP_EQUIV_REGEX, &search_str) {
        return encoding;
    }

    // 3. Heuristic detection over the whole body
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body_bytes, true);
    detector.guess(None, true)
}

/// Undecodable bytes become U+FFFD; a stray byte must not sink the page.
fn decode_to_utf8(body_bytes: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        warn!(encoding = encoding.name(), "body contained malformed byte sequences");
    }

    decoded.into_owned()
}
