//! Configuration options for a grading run.
//!
//! The `Options` struct carries the settings the CLI collects into the
//! library pipeline: where the checks live and how remote HTML is fetched.

use std::path::PathBuf;
use std::time::Duration;

/// Default checks file, relative to the invocation directory.
pub const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Configuration options for a grading run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html_grader::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(10)),
///     ..Options::default()
/// };
/// assert_eq!(options.checks.to_str(), Some("checks.json"));
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Path of the JSON checks file.
    ///
    /// Default: `checks.json`
    pub checks: PathBuf,

    /// Overall timeout for the HTTP GET in URL mode.
    ///
    /// `None` leaves the HTTP client's own default in place.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent in URL mode.
    ///
    /// Default: `html-grader/<version>`
    pub user_agent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            checks: PathBuf::from(CHECKSFILE_DEFAULT),
            timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
