//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering every failure
//! the library can report. Two conditions are deliberately *not* errors:
//!
//! - a text field no decoding strategy could repair is returned unchanged
//!   (see [`crate::decode`]);
//! - a message record without any displayable text is skipped and counted
//!   (see [`crate::parser::ParseSummary`]).
//!
//! An archive that cannot be read or parsed produces [`ChatlensError::Io`] or
//! [`ChatlensError::Parse`]. When several archives are loaded together, that
//! error is kept next to the failing path instead of aborting the batch
//! (see [`crate::aggregate::load_archives`]).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The archive file doesn't exist
    /// - Permission denied
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The archive is not valid JSON or does not have the expected shape.
    #[error("Failed to parse archive{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// JSON serialization error while rendering the report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a parse error for an archive document.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatlensError::Parse { source, path }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if the archive could not be read or parsed.
    pub fn is_read_failure(&self) -> bool {
        self.is_io() || self.is_parse()
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}
