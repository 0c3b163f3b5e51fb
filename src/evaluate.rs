//! Check evaluation.
//!
//! Turns HTML text plus a [`CheckList`] into a [`CheckReport`]:
//!
//! 1. Parse the HTML (never fails, see [`HtmlDocument::parse`])
//! 2. Sort and dedup the selectors
//! 3. Compile all of them; one invalid selector aborts the run
//! 4. Record whether each one matches at least one element

use tracing::{debug, info};

use crate::checks::CheckList;
use crate::dom::{ElementQuery, HtmlDocument};
use crate::error::Result;
use crate::report::CheckReport;

/// Evaluate `checks` against an HTML string.
///
/// # Example
///
/// ```rust
/// use html_grader::{evaluate, CheckList};
///
/// let report = evaluate("<h1>Hi</h1>", &CheckList::new(["h2", "h1"]))?;
/// assert_eq!(report.get("h1"), Some(true));
/// assert_eq!(report.get("h2"), Some(false));
/// # Ok::<(), html_grader::Error>(())
/// ```
pub fn evaluate(html: &str, checks: &CheckList) -> Result<CheckReport> {
    let doc = HtmlDocument::parse(html);
    evaluate_document(&doc, checks)
}

/// Evaluate `checks` against an already parsed document.
pub fn evaluate_document<Q: ElementQuery>(doc: &Q, checks: &CheckList) -> Result<CheckReport> {
    let selectors = checks.sorted();

    // Compile everything up front so a bad selector leaves no partial report
    let compiled = selectors
        .iter()
        .map(|s| doc.compile(s).map(|c| (*s, c)))
        .collect::<Result<Vec<_>>>()?;

    let mut report = CheckReport::new();
    for (selector, matcher) in &compiled {
        let present = doc.contains(matcher);
        debug!(selector, present, "evaluated check");
        report.record(selector, present);
    }

    info!(
        checks = checks.len(),
        unique = report.len(),
        present = report.iter().filter(|(_, p)| *p).count(),
        "evaluation complete"
    );
    Ok(report)
}
