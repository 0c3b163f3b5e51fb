//! Character encoding detection and transcoding.
//!
//! HTML reaches the grader as raw bytes, from disk or from an HTTP body.
//! This module picks an encoding and decodes to UTF-8 without ever failing:
//! undecodable sequences become U+FFFD.
//!
//! Precedence: byte order mark, then the HTTP `Content-Type` charset (URL
//! mode only), then `<meta>` declarations in the first 1024 bytes, then UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes are scanned for `<meta>` declarations.
const META_SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match the `charset=` parameter of a `Content-Type` value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect the encoding declared inside the document itself.
///
/// Covers both `<meta charset>` and the `http-equiv="Content-Type"` form,
/// since the latter also carries a `charset=` token inside a `<meta>` tag.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(META_SNIFF_LEN)]);
    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Encoding named by an HTTP `Content-Type` header, if any.
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_PARAM_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}

/// Decode HTML bytes to a UTF-8 string.
///
/// `content_type` is the HTTP header value in URL mode and `None` for local
/// files. A BOM always wins over the header.
///
/// # Examples
///
/// ```
/// use html_grader::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(html, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = match (Encoding::for_bom(html), content_type.and_then(encoding_from_content_type)) {
        (Some((bom, _)), _) => bom,
        (None, Some(declared)) => declared,
        (None, None) => detect_encoding(html),
    };

    // decode() strips a matching BOM and substitutes U+FFFD for malformed input
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
