//! Convention violation error types.
//!
//! Sample and configuration types accept any value at construction time.
//! These errors describe which convention a value breaks when a caller
//! asks for it to be checked.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Numeric value is NaN or infinite
    #[error("Field '{field}' must be a finite number")]
    NotFinite {
        /// Field name
        field: String,
    },

    /// Value is required but missing or empty
    #[error("Required field '{0}' is missing")]
    Required(String),

    /// Payload text is not in the expected encoding
    #[error("Invalid encoding for field '{field}': {reason}")]
    InvalidEncoding {
        /// Field name
        field: String,
        /// Reason for the encoding error
        reason: String,
    },

    /// Two roles mapped onto the same controller index
    #[error("{kind} index {index} is bound to both '{first}' and '{second}'")]
    DuplicateIndex {
        /// Kind of input ("axis" or "button")
        kind: String,
        /// The shared index
        index: usize,
        /// First role holding the index
        first: String,
        /// Second role holding the index
        second: String,
    },

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }

    /// Field the error refers to, if it names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidEncoding { field, .. }
            | ValidationError::Required(field) => Some(field.as_str()),
            ValidationError::DuplicateIndex { .. } | ValidationError::ConstraintViolation(_) => {
                None
            }
        }
    }

    /// Prefix the field path with `parent`, e.g. `depth` becomes `sensors.depth`.
    pub fn nested(self, parent: &str) -> Self {
        let join = |field: String| format!("{parent}.{field}");
        match self {
            ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            } => ValidationError::OutOfRange {
                field: join(field),
                value,
                min,
                max,
            },
            ValidationError::NotFinite { field } => ValidationError::NotFinite { field: join(field) },
            ValidationError::Required(field) => ValidationError::Required(join(field)),
            ValidationError::InvalidEncoding { field, reason } => {
                ValidationError::InvalidEncoding {
                    field: join(field),
                    reason,
                }
            }
            ValidationError::ConstraintViolation(msg) => {
                ValidationError::ConstraintViolation(format!("{parent}: {msg}"))
            }
            other @ ValidationError::DuplicateIndex { .. } => other,
        }
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a non-finite number error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
        }
    }

    /// Create a required field error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required(field.into())
    }

    /// Create an invalid encoding error.
    pub fn invalid_encoding(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidEncoding {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate index error.
    pub fn duplicate_index(
        kind: impl Into<String>,
        index: usize,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        ValidationError::DuplicateIndex {
            kind: kind.into(),
            index,
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ValidationError::ConstraintViolation(msg.into())
    }
}
