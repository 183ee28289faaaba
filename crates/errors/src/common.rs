//! Top-level error type and classification shared by all Scrubmarine crates.

use core::fmt;

use crate::{ConfigError, ValidationError};

/// Top-level error type wrapping every Scrubmarine sub-error.
#[derive(Debug, thiserror::Error)]
pub enum ScrubmarineError {
    /// A sample or configuration value broke one of its conventions
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Bindings configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl ScrubmarineError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrubmarineError::Validation(_) => ErrorCategory::Validation,
            ScrubmarineError::Config(_) => ErrorCategory::Config,
            ScrubmarineError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScrubmarineError::Validation(e) => e.severity(),
            ScrubmarineError::Config(e) => e.severity(),
            ScrubmarineError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        ScrubmarineError::Other(msg.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Convention and range violations
    Validation = 0,
    /// Bindings configuration errors
    Config = 1,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, the value can still be displayed but should be flagged
    Warning = 1,
    /// Error, operation failed
    Error = 2,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
        }
    }
}
