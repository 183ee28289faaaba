//! Bindings configuration error types.

use std::path::PathBuf;

use crate::{ValidationError, common::ErrorSeverity};

/// Errors raised while loading or saving gamepad bindings files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid for the format
    #[error("Failed to parse {format} bindings: {reason}")]
    Parse {
        /// Format name ("json" or "yaml")
        format: String,
        /// Parser message
        reason: String,
    },

    /// Bindings could not be rendered in the requested format
    #[error("Failed to serialize {format} bindings: {reason}")]
    Serialize {
        /// Format name ("json" or "yaml")
        format: String,
        /// Serializer message
        reason: String,
    },

    /// The file extension does not name a supported format
    #[error("Unsupported bindings file format: '{0}'")]
    UnsupportedFormat(String),

    /// The file parsed but the bindings break a convention
    #[error("Invalid bindings: {0}")]
    Invalid(#[from] ValidationError),
}

impl ConfigError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(format: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Parse {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialize(format: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Serialize {
            format: format.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
