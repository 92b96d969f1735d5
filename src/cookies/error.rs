//! Cookie file error types.

use std::io;
use thiserror::Error;

/// Errors produced while reading, parsing or decoding cookie files.
///
/// Format errors (`MalformedLine`, `MalformedExpiry`) are only surfaced in
/// strict mode. `Io` is surfaced in every mode.
#[derive(Debug, Error)]
pub enum CookieFileError {
    #[error("invalid line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("invalid expires {value:?} on line {line_number}: {reason}")]
    MalformedExpiry {
        line_number: usize,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("invalid cookie JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for cookie file operations.
pub type Result<T> = std::result::Result<T, CookieFileError>;

impl CookieFileError {
    /// Create a malformed line error.
    pub fn malformed_line(line_number: usize, line: impl Into<String>) -> Self {
        CookieFileError::MalformedLine {
            line_number,
            line: line.into(),
        }
    }

    /// Create a malformed expiry error.
    pub fn malformed_expiry(
        line_number: usize,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        CookieFileError::MalformedExpiry {
            line_number,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error comes from the file contents rather than from I/O.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            CookieFileError::MalformedLine { .. } | CookieFileError::MalformedExpiry { .. }
        )
    }

    pub fn is_io(&self) -> bool {
        matches!(self, CookieFileError::Io(_))
    }
}
