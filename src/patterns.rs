//! Compiled regex patterns.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Accepted shape of a remote HTML URL.
///
/// Scheme `http`, `https`, `ftp` or `ftps`; a lowercase dotted host ending in
/// a 2-4 letter label; an optional path without whitespace or any of
/// ``<>#%",{}|\^[]` ``. Deliberately permissive, this is not a URL parser.
pub static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(ht|f)tps?://[a-z0-9\-.]+\.[a-z]{2,4}/?([^\s<>#%",{}|\\^\[\]`]+)?$"#)
        .expect("URL_SHAPE regex")
});

/// Opening `<html>`, `<head>` or `<body>` tag anywhere in the input.
pub static DOCUMENT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(html|head|body)[\s/>]").expect("DOCUMENT_TAG regex")
});
