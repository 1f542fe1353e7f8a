//! Error types for realm-config.
//!
//! Uses the dual-error pattern: `RealmConfigError` for library consumers
//! with path and phase context, and `CodecError` for the format layer,
//! which knows nothing about files.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode or encode a value in one of the supported formats.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Combined document (JSON) failure.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Section document (YAML) failure.
    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Main error type for the realm-config library.
#[derive(Debug, Error)]
pub enum RealmConfigError {
    /// A document was malformed or missed a required field.
    #[error("Failed to parse {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// Serializing an in-memory value failed. Not expected for valid values.
    #[error("Failed to serialize {what}: {source}")]
    Encode {
        what: String,
        #[source]
        source: CodecError,
    },

    /// Filesystem operation failed.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The section directory does not exist (merge before split).
    #[error("Config directory {} does not exist; run 'realm-config split' first", .0.display())]
    DirectoryMissing(PathBuf),

    /// The command line could not be understood. Carries the usage text.
    #[error("{0}")]
    Usage(String),
}

impl RealmConfigError {
    /// Build an `Io` error for `action` on `path`.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for realm-config operations.
pub type Result<T> = std::result::Result<T, RealmConfigError>;
