//! # html-grader
//!
//! Checks an HTML document for a set of required elements, each described by
//! a CSS selector, and reports which selectors matched.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_grader::{evaluate, CheckList};
//!
//! let checks = CheckList::new(["h1", "h2", "a[href]"]);
//! let report = evaluate("<h1>Hi</h1><a>no link</a>", &checks)?;
//!
//! assert_eq!(
//!     report.to_json_pretty()?,
//!     "{\n    \"a[href]\": false,\n    \"h1\": true,\n    \"h2\": false\n}"
//! );
//! # Ok::<(), html_grader::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Checks**: a JSON array of selector strings ([`load_checks`])
//! - **Source**: HTML from a local file or one HTTP GET ([`HtmlSource`])
//! - **Evaluation**: every unique selector, in sorted order, queried once ([`evaluate`])
//! - **Report**: selector to boolean, printed as 4-space-indented JSON ([`CheckReport`])

mod checks;
mod error;
mod evaluate;
mod options;
mod patterns;
mod report;

/// DOM query adapter over `dom_query`.
pub mod dom;

/// HTML source resolution (local file or HTTP).
pub mod source;

/// Character encoding detection and transcoding.
pub mod encoding;

use std::path::Path;

// Public API - re-exports
pub use checks::{load_checks, CheckList};
pub use error::{Error, Result};
pub use evaluate::{evaluate, evaluate_document};
pub use options::{Options, CHECKSFILE_DEFAULT};
pub use report::{print_report, CheckReport};
pub use source::HtmlSource;

/// Grade HTML text against the selectors in a checks file.
pub fn check_html(html: &str, checks_path: &Path) -> Result<CheckReport> {
    let checks = load_checks(checks_path)?;
    evaluate(html, &checks)
}

/// Grade a local HTML file against the selectors in a checks file.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
///
/// let report = html_grader::check_html_file(Path::new("index.html"), Path::new("checks.json"))?;
/// println!("{}", report.to_json_pretty()?);
/// # Ok::<(), html_grader::Error>(())
/// ```
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> Result<CheckReport> {
    let html = source::read_html_file(html_path)?;
    check_html(&html, checks_path)
}

/// Run the whole pipeline for one source: resolve the HTML, load the checks
/// named in `options`, evaluate.
pub fn grade(source: &HtmlSource, options: &Options) -> Result<CheckReport> {
    let html = source.resolve(options)?;
    check_html(&html, &options.checks)
}
