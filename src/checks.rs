//! Checks file loading.
//!
//! A checks file is a UTF-8 JSON array of CSS selector strings, e.g.
//! `["h1", "#lang code", "div.result"]`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Ordered list of selectors to look for in a document.
///
/// Keeps the file's order. The evaluator works from [`CheckList::sorted`],
/// so reports never depend on how the file was authored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    /// Build a list from selector strings, keeping their order.
    #[must_use]
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON array of strings.
    ///
    /// `path` is only used to label errors.
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        let selectors: Vec<String> = serde_json::from_str(json).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { selectors })
    }

    /// Selectors in file order.
    #[must_use]
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Unique selectors in lexicographic (byte) order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.selectors.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.dedup();
        sorted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Load a checks file.
///
/// The path must exist; a missing file is [`Error::NotFound`], anything that
/// is not a JSON array of strings is [`Error::Config`].
pub fn load_checks(path: &Path) -> Result<CheckList> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    // Lossy decode so a stray non-UTF-8 byte surfaces as a JSON error, not an I/O one
    let bytes = fs::read(path)?;
    let checks = CheckList::from_json(&String::from_utf8_lossy(&bytes), path)?;

    debug!(path = %path.display(), count = checks.len(), "loaded checks");
    Ok(checks)
}
