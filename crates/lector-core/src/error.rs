//! Error types and exit codes for lector
//!
//! The engines themselves are total: every degenerate input (zero-height
//! document, empty corpus, empty query) has a defined non-error output.
//! Errors exist only at the host surface — loading a corpus or trace file,
//! bad CLI arguments.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or invalid corpus/trace)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the lector CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or invalid input file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur at the lector host surface
#[derive(Error, Debug)]
pub enum LectorError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("corpus not found: {path:?}")]
    CorpusNotFound { path: PathBuf },

    #[error("invalid corpus in {path:?}: {reason}")]
    InvalidCorpus { path: PathBuf, reason: String },

    #[error("invalid scroll trace in {path:?}: {reason}")]
    InvalidTrace { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl LectorError {
    /// Create an error for an unreadable or unparseable corpus file
    pub fn invalid_corpus(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        LectorError::InvalidCorpus {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unreadable or unparseable trace file
    pub fn invalid_trace(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        LectorError::InvalidTrace {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LectorError::UnknownFormat(_) | LectorError::UsageError(_) => ExitCode::Usage,

            LectorError::CorpusNotFound { .. }
            | LectorError::InvalidCorpus { .. }
            | LectorError::InvalidTrace { .. } => ExitCode::Data,

            LectorError::Io(_) | LectorError::Json(_) | LectorError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LectorError::UnknownFormat(_) => "unknown_format",
            LectorError::UsageError(_) => "usage_error",
            LectorError::CorpusNotFound { .. } => "corpus_not_found",
            LectorError::InvalidCorpus { .. } => "invalid_corpus",
            LectorError::InvalidTrace { .. } => "invalid_trace",
            LectorError::Io(_) => "io_error",
            LectorError::Json(_) => "json_error",
            LectorError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for lector operations
pub type Result<T> = std::result::Result<T, LectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_2() {
        assert_eq!(
            LectorError::UnknownFormat("yaml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            LectorError::UsageError("bad flag".into()).exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn data_errors_exit_3() {
        let err = LectorError::CorpusNotFound {
            path: PathBuf::from("/missing.json"),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(
            LectorError::invalid_corpus("/bad.json", "not an array").exit_code(),
            ExitCode::Data
        );
    }

    #[test]
    fn json_envelope_carries_type_and_code() {
        let err = LectorError::UnknownFormat("yaml".into());
        let value = err.to_json();
        assert_eq!(value["error"]["code"], 2);
        assert_eq!(value["error"]["type"], "unknown_format");
    }
}
