//! Vehicle link status.

use scrubmarine_errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Whether the front-end currently has a live link to the vehicle.
///
/// `error` is only populated while disconnected. It is always present on the
/// wire, as `null` when there is nothing to report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConnectionStatus {
    pub fn connected() -> Self {
        Self {
            connected: true,
            error: None,
        }
    }

    pub fn disconnected(reason: impl Into<String>) -> Self {
        Self {
            connected: false,
            error: Some(reason.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn validate(&self) -> ValidationResult {
        if self.connected && self.error.is_some() {
            return Err(ValidationError::constraint(
                "error message set while connected",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn default_is_disconnected_without_error() {
        let status = ConnectionStatus::default();
        assert!(!status.is_connected());
        assert_eq!(status.error_message(), None);
        assert!(status.validate().is_ok());
    }

    #[test]
    fn disconnected_carries_reason() {
        let status = ConnectionStatus::disconnected("tether timeout");
        assert_eq!(status.error_message(), Some("tether timeout"));
        assert!(status.validate().is_ok());
    }

    #[test]
    fn error_while_connected_is_rejected() {
        let status = ConnectionStatus {
            connected: true,
            error: Some("stale".to_string()),
        };
        assert!(matches!(
            status.validate(),
            Err(ValidationError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn connected_serializes_null_error() -> TestResult {
        let json = serde_json::to_value(ConnectionStatus::connected())?;
        assert_eq!(json, serde_json::json!({ "connected": true, "error": null }));
        Ok(())
    }

    #[test]
    fn missing_error_field_deserializes_as_none() -> TestResult {
        let status: ConnectionStatus = serde_json::from_str(r#"{"connected":false}"#)?;
        assert_eq!(status, ConnectionStatus::default());
        Ok(())
    }
}
