//! Error types for slnlink
//!
//! Uses `thiserror` for library errors. Action entry points report
//! failures through the message sink and a boolean; these errors cover
//! the fallible plumbing underneath them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for slnlink operations
pub type SlnlinkResult<T> = Result<T, SlnlinkError>;

/// Main error type for slnlink operations
#[derive(Error, Debug)]
pub enum SlnlinkError {
    /// A `primaryOutputIndexes` token was not a non-negative integer
    #[error("invalid primary output index '{token}' - expected a non-negative integer")]
    InvalidOutputIndex { token: String },

    /// A `primaryOutputIndexes` index referenced a primary output that does not exist
    #[error("primary output index {index} is out of range (have {count} primary outputs)")]
    OutputIndexOutOfRange { index: usize, count: usize },

    /// The `projectFiles` argument was not valid JSON
    #[error("invalid 'projectFiles' value: {message}")]
    InvalidProjectFilesValue { message: String },

    /// The configured globs matched no generated project files
    #[error("no project files matched the configured globs")]
    NoProjectFilesMatched,

    /// The external solution command could not be started
    #[error("failed to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest file could not be read
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_index() {
        let err = SlnlinkError::InvalidOutputIndex {
            token: "two".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid primary output index 'two' - expected a non-negative integer"
        );
    }

    #[test]
    fn test_error_display_out_of_range() {
        let err = SlnlinkError::OutputIndexOutOfRange { index: 5, count: 3 };
        assert_eq!(
            err.to_string(),
            "primary output index 5 is out of range (have 3 primary outputs)"
        );
    }
}
