//! Error types and exit codes for paperwiki
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/filter)
//! - 3: Data error (missing configuration, empty input, bad library)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing configuration, empty input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during paperwiki operations
#[derive(Error, Debug)]
pub enum PaperwikiError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("filter keyword '{0}' expects a pattern after it")]
    FilterKeywordNoPattern(String),

    #[error("invalid filter pattern: {0}")]
    FilterPattern(#[from] regex::Error),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no paper references found")]
    EmptyInput,

    #[error("wiki directory not configured (set wiki_dir under [storage] in the config file)")]
    WikiDirNotConfigured,

    #[error("paper library not configured (set library under [storage] in the config file)")]
    LibraryNotConfigured,

    #[error("paper library not found at {path:?}")]
    LibraryNotFound { path: PathBuf },

    #[error("invalid paper library {path:?}: {reason}")]
    InvalidLibrary { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl PaperwikiError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PaperwikiError::UnknownFormat(_)
            | PaperwikiError::FilterKeywordNoPattern(_)
            | PaperwikiError::FilterPattern(_)
            | PaperwikiError::UsageError(_) => ExitCode::Usage,

            PaperwikiError::EmptyInput
            | PaperwikiError::WikiDirNotConfigured
            | PaperwikiError::LibraryNotConfigured
            | PaperwikiError::LibraryNotFound { .. }
            | PaperwikiError::InvalidLibrary { .. } => ExitCode::Data,

            PaperwikiError::Io(_)
            | PaperwikiError::Toml(_)
            | PaperwikiError::Json(_)
            | PaperwikiError::Other(_) => ExitCode::Failure,
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PaperwikiError::UnknownFormat(_) => "unknown_format",
            PaperwikiError::FilterKeywordNoPattern(_) => "filter_keyword_no_pattern",
            PaperwikiError::FilterPattern(_) => "filter_pattern",
            PaperwikiError::UsageError(_) => "usage_error",
            PaperwikiError::EmptyInput => "empty_input",
            PaperwikiError::WikiDirNotConfigured => "wiki_dir_not_configured",
            PaperwikiError::LibraryNotConfigured => "library_not_configured",
            PaperwikiError::LibraryNotFound { .. } => "library_not_found",
            PaperwikiError::InvalidLibrary { .. } => "invalid_library",
            PaperwikiError::Io(_) => "io_error",
            PaperwikiError::Toml(_) => "toml_error",
            PaperwikiError::Json(_) => "json_error",
            PaperwikiError::Other(_) => "other",
        }
    }
}

/// Result type alias for paperwiki operations
pub type Result<T> = std::result::Result<T, PaperwikiError>;
