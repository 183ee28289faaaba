//! Commands produced by the gamepad input layer.

use core::fmt;

use scrubmarine_errors::{ValidationError, ValidationResult, validate_finite, validate_range};
use serde::{Deserialize, Serialize};

/// Lower bound of a normalized axis.
pub const AXIS_MIN: f32 = -1.0;
/// Upper bound of a normalized axis.
pub const AXIS_MAX: f32 = 1.0;

/// Normalized stick/trigger positions, each in `[-1, 1]` by convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GamepadMovement {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub throttle: f32,
}

impl GamepadMovement {
    /// All axes centered.
    pub const NEUTRAL: Self = Self {
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
        throttle: 0.0,
    };

    pub fn new(roll: f32, pitch: f32, yaw: f32, throttle: f32) -> Self {
        Self {
            roll,
            pitch,
            yaw,
            throttle,
        }
    }

    fn named_axes(&self) -> [(&'static str, f32); 4] {
        [
            ("roll", self.roll),
            ("pitch", self.pitch),
            ("yaw", self.yaw),
            ("throttle", self.throttle),
        ]
    }

    pub fn is_within_range(&self) -> bool {
        self.named_axes()
            .iter()
            .all(|(_, value)| (AXIS_MIN..=AXIS_MAX).contains(value))
    }

    /// Reports the first axis that is not finite or lies outside `[-1, 1]`.
    pub fn validate(&self) -> ValidationResult {
        for (axis, value) in self.named_axes() {
            validate_finite!(axis, value);
            validate_range!(axis, value, AXIS_MIN, AXIS_MAX);
        }
        Ok(())
    }

    /// Copy with every axis forced into `[-1, 1]`; NaN becomes 0.
    pub fn clamped(&self) -> Self {
        Self {
            roll: clamp_axis(self.roll),
            pitch: clamp_axis(self.pitch),
            yaw: clamp_axis(self.yaw),
            throttle: clamp_axis(self.throttle),
        }
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(AXIS_MIN, AXIS_MAX)
    }
}

/// A command sent from the controller to the vehicle.
///
/// On the wire this is `{"type": "<kind>", "value": <payload>}`.
///
/// # Example
/// ```
/// use scrubmarine_input_maps::GamepadCommand;
///
/// let json = serde_json::to_string(&GamepadCommand::Arm(true)).unwrap_or_default();
/// assert_eq!(json, r#"{"type":"arm","value":true}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum GamepadCommand {
    Movement(GamepadMovement),
    /// Requested speed setting.
    Speed(f32),
    /// `true` arms the thrusters, `false` disarms them.
    Arm(bool),
    /// Named flight mode.
    Mode(String),
    /// `true` requests an emergency surface.
    Emergency(bool),
}

impl GamepadCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            GamepadCommand::Movement(_) => CommandKind::Movement,
            GamepadCommand::Speed(_) => CommandKind::Speed,
            GamepadCommand::Arm(_) => CommandKind::Arm,
            GamepadCommand::Mode(_) => CommandKind::Mode,
            GamepadCommand::Emergency(_) => CommandKind::Emergency,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        match self {
            GamepadCommand::Movement(movement) => movement.validate(),
            GamepadCommand::Speed(speed) => {
                validate_finite!("speed", *speed);
                Ok(())
            }
            GamepadCommand::Mode(mode) if mode.trim().is_empty() => {
                Err(ValidationError::required("mode"))
            }
            GamepadCommand::Mode(_) | GamepadCommand::Arm(_) | GamepadCommand::Emergency(_) => {
                Ok(())
            }
        }
    }
}

/// Discriminant of a [`GamepadCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Movement,
    Speed,
    Arm,
    Mode,
    Emergency,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Movement,
        CommandKind::Speed,
        CommandKind::Arm,
        CommandKind::Mode,
        CommandKind::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Movement => "movement",
            CommandKind::Speed => "speed",
            CommandKind::Arm => "arm",
            CommandKind::Mode => "mode",
            CommandKind::Emergency => "emergency",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn arm_roundtrips_for_both_values() -> TestResult {
        for armed in [true, false] {
            let command = GamepadCommand::Arm(armed);
            let json = serde_json::to_string(&command)?;
            let restored: GamepadCommand = serde_json::from_str(&json)?;
            assert_eq!(restored, command);
        }
        Ok(())
    }

    #[test]
    fn movement_wire_shape() -> TestResult {
        let command = GamepadCommand::Movement(GamepadMovement::new(0.5, -0.25, 0.0, 1.0));
        let json = serde_json::to_value(&command)?;
        assert_eq!(
            json,
            serde_json::json!({
                "type": "movement",
                "value": { "roll": 0.5, "pitch": -0.25, "yaw": 0.0, "throttle": 1.0 }
            })
        );
        Ok(())
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let parsed = serde_json::from_str::<GamepadCommand>(r#"{"type":"arm","value":"yes"}"#);
        assert!(parsed.is_err());

        let parsed = serde_json::from_str::<GamepadCommand>(r#"{"type":"emergency","value":1.0}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed = serde_json::from_str::<GamepadCommand>(r#"{"type":"dive","value":true}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn kind_matches_wire_tag() -> TestResult {
        let commands = [
            GamepadCommand::Movement(GamepadMovement::NEUTRAL),
            GamepadCommand::Speed(0.5),
            GamepadCommand::Arm(true),
            GamepadCommand::Mode("hover".to_string()),
            GamepadCommand::Emergency(true),
        ];
        for command in commands {
            let json = serde_json::to_value(&command)?;
            assert_eq!(json["type"], command.kind().as_str());
        }
        Ok(())
    }

    #[test]
    fn movement_validate_names_axis() {
        let movement = GamepadMovement::new(0.0, 0.0, 1.5, 0.0);
        assert!(!movement.is_within_range());
        let err = movement.validate().err();
        assert_eq!(err.as_ref().and_then(|e| e.field()), Some("yaw"));
    }

    #[test]
    fn clamped_handles_nan_and_overflow() {
        let movement = GamepadMovement::new(f32::NAN, 3.0, -7.0, f32::INFINITY).clamped();
        assert_eq!(movement, GamepadMovement::new(0.0, 1.0, -1.0, 1.0));
        assert!(movement.validate().is_ok());
    }

    #[test]
    fn command_validation() {
        assert!(GamepadCommand::Speed(f32::NAN).validate().is_err());
        assert!(GamepadCommand::Mode(String::new()).validate().is_err());
        assert!(GamepadCommand::Mode("stabilize".into()).validate().is_ok());
        assert!(GamepadCommand::Emergency(true).validate().is_ok());
    }

    #[test]
    fn command_kind_display() {
        assert_eq!(CommandKind::Emergency.to_string(), "emergency");
        assert_eq!(CommandKind::ALL.len(), 5);
    }
}
