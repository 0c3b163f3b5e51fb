//! Check reports and JSON output.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Indentation of the printed report.
const INDENT: &[u8] = b"    ";

/// Selector to present/absent mapping.
///
/// Keys iterate (and serialize) in lexicographic byte order, the same order
/// the evaluator works in, and a selector can appear only once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: BTreeMap<String, bool>,
}

impl CheckReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result. Returns false if the selector was already present,
    /// in which case the first result is kept.
    pub fn record(&mut self, selector: &str, present: bool) -> bool {
        match self.results.entry(selector.to_string()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(present);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Result for one selector, `None` if it was not checked.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    /// Results in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// True if every checked selector matched.
    #[must_use]
    pub fn all_present(&self) -> bool {
        self.results.values().all(|present| *present)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Pretty JSON with 4-space indentation, no trailing newline.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.serialize_pretty(&mut buf)?;
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the report followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        self.serialize_pretty(&mut out)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    fn serialize_pretty<W: Write>(&self, out: W) -> Result<()> {
        let mut ser = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser).map_err(std::io::Error::from)?;
        Ok(())
    }
}

/// Print a report to stdout.
pub fn print_report(report: &CheckReport) -> Result<()> {
    report.write_to(std::io::stdout().lock())
}
