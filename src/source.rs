//! HTML source resolution.
//!
//! HTML comes from exactly one place per run: a local file or a single HTTP
//! GET. Either way the bytes are decoded to UTF-8 by [`crate::encoding`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::encoding::decode_html;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::URL_SHAPE;

/// Where the HTML to grade comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    /// A local HTML file.
    File(PathBuf),
    /// A remote document fetched with one HTTP GET.
    Url(String),
}

impl HtmlSource {
    /// File source, validated to exist.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::File(assert_file_exists(path.into())?))
    }

    /// URL source, validated against the accepted URL shape.
    pub fn from_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self::Url(assert_valid_url(url.into())?))
    }

    /// Obtain the HTML text.
    pub fn resolve(&self, options: &Options) -> Result<String> {
        let html = match self {
            Self::File(path) => read_html_file(path)?,
            Self::Url(url) => fetch_html(url, options)?,
        };
        info!(source = %self, bytes = html.len(), "resolved html");
        Ok(html)
    }
}

impl fmt::Display for HtmlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Pass `path` through if it exists.
pub fn assert_file_exists(path: PathBuf) -> Result<PathBuf> {
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::NotFound(path))
    }
}

/// Pass `url` through if it has an accepted shape.
pub fn assert_valid_url(url: String) -> Result<String> {
    if URL_SHAPE.is_match(&url) {
        Ok(url)
    } else {
        Err(Error::InvalidUrl(url))
    }
}

/// Read and decode a local HTML file.
pub fn read_html_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(decode_html(&bytes, None))
}

/// Fetch and decode a remote HTML document with a single GET.
///
/// No URL-shape check happens here; callers go through
/// [`HtmlSource::from_url`] for that. Redirects are whatever the HTTP client
/// follows by default.
pub fn fetch_html(url: &str, options: &Options) -> Result<String> {
    let mut builder = Client::builder().user_agent(options.user_agent.as_str());
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(|e| Error::Transport(e.to_string()))?;

    debug!(url, "sending GET");
    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::Transport(e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = response
        .bytes()
        .map_err(|e| Error::Transport(e.to_string()))?;

    Ok(decode_html(&body, content_type.as_deref()))
}
