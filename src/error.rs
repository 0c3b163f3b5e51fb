//! Error types for html-grader.
//!
//! Every error is terminal for a run: there is no retry, no partial report
//! and no fallback source.

use std::path::PathBuf;

/// Error type for grading operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The checks file is not a JSON array of strings.
    #[error("Invalid checks file {}: {reason}", path.display())]
    Config {
        /// Path of the offending checks file.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// A checks or HTML file path does not exist.
    #[error("{} does not exist. Exiting.", .0.display())]
    NotFound(PathBuf),

    /// The URL argument does not have an accepted shape.
    #[error("Error: Invalid url")]
    InvalidUrl(String),

    /// The HTTP request failed before a response was received.
    #[error("Error: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("Error: {0}")]
    HttpStatus(u16),

    /// A selector is not valid CSS selector syntax.
    #[error("Invalid selector {selector:?}: {reason}")]
    Selector {
        /// The selector as written in the checks file.
        selector: String,
        /// Selector parser diagnostic.
        reason: String,
    },

    /// Reading an existing file or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Always 1, including non-200 responses, which the historical tool
    /// only logged.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the diagnostic belongs on stdout rather than stderr.
    ///
    /// Missing files and HTTP status failures go to stdout, where the
    /// historical tool printed them.
    #[must_use]
    pub fn prints_to_stdout(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::HttpStatus(_))
    }
}

/// Result type alias for grading operations.
pub type Result<T> = std::result::Result<T, Error>;
