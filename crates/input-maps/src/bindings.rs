//! Controller binding table.
//!
//! Maps physical controller axis and button indices onto vehicle roles. Axis
//! and button indices live in separate namespaces, so axis 0 and button 0 can
//! both be bound at once.

use std::collections::HashMap;

use scrubmarine_errors::{ValidationError, ValidationResult, validate_finite, validate_range};
use serde::{Deserialize, Serialize};

/// Standard two-stick layout.
///
/// Left stick drives roll (horizontal) and pitch (vertical), the right stick
/// horizontal drives yaw, and the triggers drive throttle. Face buttons arm
/// (A/Cross) and surface (B/Circle), the bumpers step speed, Start shuts down.
pub const DEFAULT_GAMEPAD_BINDINGS: GamepadBindings = GamepadBindings {
    movement_axes: MovementAxes {
        roll: 0,
        pitch: 1,
        yaw: 2,
        throttle: 3,
    },
    buttons: ButtonBindings {
        arm: 0,
        emergency_surface: 1,
        increase_speed: 4,
        decrease_speed: 5,
        shutdown: 9,
    },
    deadzone: 0.1,
    sensitivity: 1.0,
};

/// Movement role driven by an analog axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisRole {
    Roll,
    Pitch,
    Yaw,
    Throttle,
}

impl AxisRole {
    pub const ALL: [AxisRole; 4] = [
        AxisRole::Roll,
        AxisRole::Pitch,
        AxisRole::Yaw,
        AxisRole::Throttle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AxisRole::Roll => "roll",
            AxisRole::Pitch => "pitch",
            AxisRole::Yaw => "yaw",
            AxisRole::Throttle => "throttle",
        }
    }
}

/// Action triggered by a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonRole {
    Arm,
    EmergencySurface,
    IncreaseSpeed,
    DecreaseSpeed,
    Shutdown,
}

impl ButtonRole {
    pub const ALL: [ButtonRole; 5] = [
        ButtonRole::Arm,
        ButtonRole::EmergencySurface,
        ButtonRole::IncreaseSpeed,
        ButtonRole::DecreaseSpeed,
        ButtonRole::Shutdown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonRole::Arm => "arm",
            ButtonRole::EmergencySurface => "emergencySurface",
            ButtonRole::IncreaseSpeed => "increaseSpeed",
            ButtonRole::DecreaseSpeed => "decreaseSpeed",
            ButtonRole::Shutdown => "shutdown",
        }
    }
}

/// Axis index per movement role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MovementAxes {
    pub roll: usize,
    pub pitch: usize,
    pub yaw: usize,
    pub throttle: usize,
}

impl Default for MovementAxes {
    fn default() -> Self {
        DEFAULT_GAMEPAD_BINDINGS.movement_axes
    }
}

impl MovementAxes {
    pub fn index_of(&self, role: AxisRole) -> usize {
        match role {
            AxisRole::Roll => self.roll,
            AxisRole::Pitch => self.pitch,
            AxisRole::Yaw => self.yaw,
            AxisRole::Throttle => self.throttle,
        }
    }

    /// Role bound to controller axis `index`, if any.
    pub fn role_for(&self, index: usize) -> Option<AxisRole> {
        AxisRole::ALL
            .into_iter()
            .find(|role| self.index_of(*role) == index)
    }

    pub fn validate(&self) -> ValidationResult {
        ensure_unique(
            "axis",
            AxisRole::ALL.map(|role| (role.as_str(), self.index_of(role))),
        )
    }
}

/// Button index per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ButtonBindings {
    pub arm: usize,
    pub emergency_surface: usize,
    pub increase_speed: usize,
    pub decrease_speed: usize,
    pub shutdown: usize,
}

impl Default for ButtonBindings {
    fn default() -> Self {
        DEFAULT_GAMEPAD_BINDINGS.buttons
    }
}

impl ButtonBindings {
    pub fn index_of(&self, role: ButtonRole) -> usize {
        match role {
            ButtonRole::Arm => self.arm,
            ButtonRole::EmergencySurface => self.emergency_surface,
            ButtonRole::IncreaseSpeed => self.increase_speed,
            ButtonRole::DecreaseSpeed => self.decrease_speed,
            ButtonRole::Shutdown => self.shutdown,
        }
    }

    /// Action bound to controller button `index`, if any.
    pub fn role_for(&self, index: usize) -> Option<ButtonRole> {
        ButtonRole::ALL
            .into_iter()
            .find(|role| self.index_of(*role) == index)
    }

    pub fn validate(&self) -> ValidationResult {
        ensure_unique(
            "button",
            ButtonRole::ALL.map(|role| (role.as_str(), self.index_of(role))),
        )
    }
}

/// Full controller configuration.
///
/// Field names serialize in camelCase (`movementAxes`, `emergencySurface`)
/// so files stay interchangeable with the browser front-end. Missing fields
/// take their value from [`DEFAULT_GAMEPAD_BINDINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GamepadBindings {
    pub movement_axes: MovementAxes,
    pub buttons: ButtonBindings,
    /// Fraction of each axis range around center read as zero, in `[0, 1]`.
    pub deadzone: f32,
    /// Linear multiplier on axis readings, positive.
    pub sensitivity: f32,
}

impl Default for GamepadBindings {
    fn default() -> Self {
        DEFAULT_GAMEPAD_BINDINGS
    }
}

impl GamepadBindings {
    pub fn validate(&self) -> ValidationResult {
        validate_finite!("deadzone", self.deadzone);
        validate_range!("deadzone", self.deadzone, 0.0, 1.0);
        validate_finite!("sensitivity", self.sensitivity);
        if self.sensitivity <= 0.0 {
            return Err(ValidationError::out_of_range(
                "sensitivity",
                self.sensitivity,
                f32::MIN_POSITIVE,
                f32::MAX,
            ));
        }
        self.movement_axes
            .validate()
            .map_err(|e| e.nested("movementAxes"))?;
        self.buttons.validate().map_err(|e| e.nested("buttons"))?;
        Ok(())
    }
}

fn ensure_unique<const N: usize>(kind: &str, entries: [(&'static str, usize); N]) -> ValidationResult {
    let mut seen: HashMap<usize, &'static str> = HashMap::with_capacity(N);
    for (role, index) in entries {
        if let Some(first) = seen.insert(index, role) {
            return Err(ValidationError::duplicate_index(kind, index, first, role));
        }
    }
    Ok(())
}
