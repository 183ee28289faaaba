//! Gamepad command shapes and controller bindings.
//!
//! The input layer reads a physical controller through a [`GamepadBindings`]
//! table and emits [`GamepadCommand`] values for the vehicle link. Only the
//! shapes and the binding table live here; polling the controller and turning
//! raw axes into commands belong to the input layer itself.
//!
//! Binding tables are stored as portable JSON or YAML files (see [`config`]).
//! A file only needs the entries it changes; everything else falls back to
//! [`DEFAULT_GAMEPAD_BINDINGS`].

#![deny(static_mut_refs)]

pub mod bindings;
pub mod config;
pub mod gamepad;

pub use bindings::{
    AxisRole, ButtonBindings, ButtonRole, DEFAULT_GAMEPAD_BINDINGS, GamepadBindings, MovementAxes,
};
pub use config::{
    BindingsFormat, load_bindings, load_bindings_or_default, parse_bindings, render_bindings,
    save_bindings,
};
pub use gamepad::{CommandKind, GamepadCommand, GamepadMovement};
