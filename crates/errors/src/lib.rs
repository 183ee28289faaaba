//! Centralized error types for Scrubmarine
//!
//! Telemetry and gamepad shapes never fail to construct. Their conventions
//! (axis ranges, positive resolutions, consistent alerts) are checked only
//! when a caller asks for it, and those checks report through the types in
//! this crate.
//!
//! # Architecture
//!
//! - [`common`]: Top-level error type and classification
//! - [`validation`]: Convention and range violations on sample values
//! - [`config`]: Bindings file loading and saving failures
//!
//! # Example
//!
//! ```
//! use scrubmarine_errors::prelude::*;
//!
//! fn check_deadzone(value: f32) -> Result<f32> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(ValidationError::out_of_range("deadzone", value, 0.0, 1.0).into());
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_deadzone(0.1).is_ok());
//! assert!(check_deadzone(1.5).is_err());
//! ```

#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod prelude;
pub mod validation;

pub use common::{ErrorCategory, ErrorSeverity, ScrubmarineError};
pub use config::ConfigError;
pub use validation::ValidationError;

/// A specialized `Result` type for Scrubmarine operations.
pub type Result<T> = std::result::Result<T, ScrubmarineError>;

/// A specialized `Result` type for convention checks on a single value.
pub type ValidationResult<T = ()> = std::result::Result<T, ValidationError>;
