//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use scrubmarine_errors::prelude::*;
//!
//! fn check_sensitivity(value: f32) -> ValidationResult {
//!     validate_finite!("sensitivity", value);
//!     validate_range!("sensitivity", value, f32::MIN_POSITIVE, f32::MAX);
//!     Ok(())
//! }
//!
//! assert!(check_sensitivity(1.0).is_ok());
//! assert!(check_sensitivity(0.0).is_err());
//! assert!(check_sensitivity(f32::NAN).is_err());
//! ```

pub use crate::{
    Result, ValidationResult,
    common::{ErrorCategory, ErrorSeverity, ScrubmarineError},
    config::ConfigError,
    validate_finite, validate_range,
    validation::ValidationError,
};

/// Return a not-finite validation error when `$value` is NaN or infinite.
#[macro_export]
macro_rules! validate_finite {
    ($field:expr, $value:expr) => {
        if !$value.is_finite() {
            return Err($crate::ValidationError::not_finite($field).into());
        }
    };
}

/// Return an out of range validation error when `$value` is outside `[$min, $max]`.
///
/// NaN is never inside the range and is rejected.
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {
        if !($min..=$max).contains(&$value) {
            return Err($crate::ValidationError::out_of_range($field, $value, $min, $max).into());
        }
    };
}
