//! DOM Query Adapter
//!
//! The grader needs one capability from a DOM library: "does at least one
//! element match this selector?". [`ElementQuery`] is that seam, and
//! [`HtmlDocument`] implements it on top of the `dom_query` crate.

use dom_query::{Document, Matcher};

use crate::error::{Error, Result};
use crate::patterns::DOCUMENT_TAG;

/// Name given to the wrapper element of a fragment parse. Not a valid tag
/// name, so no type selector can name it; only `*`-style selectors match it.
const FRAGMENT_ROOT: &str = "#document-fragment";

/// Narrow query interface the evaluator depends on.
///
/// Compiling is split from matching so a run can reject every malformed
/// selector before it queries anything.
pub trait ElementQuery {
    /// A selector in whatever form the backend matches with.
    type Selector;

    /// Compile selector text, failing with [`Error::Selector`] on bad syntax.
    fn compile(&self, selector: &str) -> Result<Self::Selector>;

    /// True if at least one element matches.
    fn contains(&self, selector: &Self::Selector) -> bool;
}

/// Parsed HTML document.
///
/// Parsing follows the HTML5 tree-construction algorithm, so malformed
/// markup is repaired rather than rejected. Input without an explicit
/// `<html>`, `<head>` or `<body>` tag is parsed as a fragment, so those
/// elements only match when the markup actually contains them.
pub struct HtmlDocument {
    doc: Document,
}

impl HtmlDocument {
    /// Parse an HTML string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use html_grader::dom::HtmlDocument;
    ///
    /// let doc = HtmlDocument::parse("<h1>Hi</h1>");
    /// assert!(doc.contains_selector("h1")?);
    /// assert!(!doc.contains_selector("h2")?);
    /// # Ok::<(), html_grader::Error>(())
    /// ```
    #[must_use]
    pub fn parse(html: &str) -> Self {
        if DOCUMENT_TAG.is_match(html) {
            return Self {
                doc: Document::from(html),
            };
        }

        let doc = Document::fragment(html);
        // html5ever hangs fragment content off a synthetic `html` element
        if let Some(wrapper) = doc.root().first_element_child() {
            wrapper.rename(FRAGMENT_ROOT);
        }
        Self { doc }
    }

    /// Compile and match in one step.
    pub fn contains_selector(&self, selector: &str) -> Result<bool> {
        let matcher = self.compile(selector)?;
        Ok(self.contains(&matcher))
    }
}

impl ElementQuery for HtmlDocument {
    type Selector = Matcher;

    fn compile(&self, selector: &str) -> Result<Matcher> {
        Matcher::new(selector).map_err(|e| Error::Selector {
            selector: selector.to_string(),
            reason: format!(
                "{:?} at line {}, column {}",
                e.kind, e.location.line, e.location.column
            ),
        })
    }

    fn contains(&self, selector: &Matcher) -> bool {
        !self.doc.select_matcher(selector).is_empty()
    }
}
