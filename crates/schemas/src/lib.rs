//! Sensor telemetry and link status shapes for Scrubmarine.
//!
//! These are the values the vehicle link hands to the front-end every tick.
//! They carry no behavior beyond construction and optional convention checks:
//! transport, frame decoding and display all live with the consumers.
//!
//! ## Modules
//! - `telemetry` - Camera, NDT (thickness) and depth samples plus the per-tick `SensorData` aggregate
//! - `connection` - Link status reported alongside the telemetry stream

#![deny(static_mut_refs)]

pub mod connection;
pub mod telemetry;

pub use connection::ConnectionStatus;
pub use telemetry::{
    ALERT_DIFFERENCE_TOLERANCE, Anomaly, CameraData, DepthData, NdtAlert, NdtData, SensorData,
};
