//! Sensor telemetry samples.
//!
//! Every type here is a plain value. Construction never checks anything;
//! the conventions documented on each field are only verified by the
//! `validate` methods, which callers run when they want to flag bad samples.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use scrubmarine_errors::{ValidationError, ValidationResult, validate_finite};
use serde::{Deserialize, Serialize};

/// Absolute slack allowed between an alert's reported `difference` and
/// `current - previous`. It does not scale with the magnitude of the readings.
pub const ALERT_DIFFERENCE_TOLERANCE: f64 = 1e-6;

/// One camera frame.
///
/// # Example
/// ```
/// use scrubmarine_schemas::CameraData;
///
/// let frame = CameraData::from_frame_bytes("front", &[0xFF, 0xD8, 0xFF], 1_700_000_000.0, [640, 480]);
/// assert_eq!(frame.frame, "/9j/");
/// assert_eq!(frame.width(), 640);
/// assert!(frame.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    /// Stream identifier, e.g. `front` or `rear`.
    pub camera_id: String,

    /// Encoded image, carried as base64 text.
    pub frame: String,

    /// Capture time. Non-decreasing within one `camera_id` stream by convention.
    pub timestamp: f64,

    /// `[width, height]` in pixels, both positive by convention.
    pub resolution: [u32; 2],
}

impl CameraData {
    /// Build a frame from raw image bytes, base64-encoding the payload.
    pub fn from_frame_bytes(
        camera_id: impl Into<String>,
        bytes: &[u8],
        timestamp: f64,
        resolution: [u32; 2],
    ) -> Self {
        Self {
            camera_id: camera_id.into(),
            frame: STANDARD.encode(bytes),
            timestamp,
            resolution,
        }
    }

    /// Undo the base64 text encoding of `frame`.
    ///
    /// The returned bytes are still in whatever image format the camera
    /// produced; nothing here interprets them.
    pub fn frame_bytes(&self) -> ValidationResult<Vec<u8>> {
        STANDARD
            .decode(&self.frame)
            .map_err(|e| ValidationError::invalid_encoding("frame", e.to_string()))
    }

    pub fn width(&self) -> u32 {
        let [width, _] = self.resolution;
        width
    }

    pub fn height(&self) -> u32 {
        let [_, height] = self.resolution;
        height
    }

    /// True when `self` can come after `previous` in the same stream.
    pub fn follows(&self, previous: &CameraData) -> bool {
        self.camera_id == previous.camera_id && self.timestamp >= previous.timestamp
    }

    pub fn validate(&self) -> ValidationResult {
        if self.camera_id.trim().is_empty() {
            return Err(ValidationError::required("camera_id"));
        }
        validate_finite!("timestamp", self.timestamp);
        if self.width() == 0 {
            return Err(ValidationError::out_of_range(
                "resolution.width",
                0,
                1,
                u32::MAX,
            ));
        }
        if self.height() == 0 {
            return Err(ValidationError::out_of_range(
                "resolution.height",
                0,
                1,
                u32::MAX,
            ));
        }
        Ok(())
    }
}

/// A localized thickness anomaly found during an NDT sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub position: f64,
    pub value: f64,
}

impl Anomaly {
    pub fn new(position: f64, value: f64) -> Self {
        Self { position, value }
    }
}

/// Alert raised when a thickness reading changes noticeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdtAlert {
    /// Alert category as reported by the vehicle.
    #[serde(rename = "type")]
    pub kind: String,
    pub previous: f64,
    pub current: f64,
    /// Expected to equal `current - previous`.
    pub difference: f64,
}

impl NdtAlert {
    /// Build an alert with `difference` derived from the two readings.
    pub fn new(kind: impl Into<String>, previous: f64, current: f64) -> Self {
        Self {
            kind: kind.into(),
            previous,
            current,
            difference: current - previous,
        }
    }

    /// Whether `difference` is within [`ALERT_DIFFERENCE_TOLERANCE`] of
    /// `current - previous`.
    pub fn is_consistent(&self) -> bool {
        (self.difference - (self.current - self.previous)).abs() <= ALERT_DIFFERENCE_TOLERANCE
    }

    pub fn validate(&self) -> ValidationResult {
        validate_finite!("previous", self.previous);
        validate_finite!("current", self.current);
        validate_finite!("difference", self.difference);
        if !self.is_consistent() {
            return Err(ValidationError::constraint(format!(
                "difference {} does not match current - previous ({})",
                self.difference,
                self.current - self.previous
            )));
        }
        Ok(())
    }
}

/// Non-destructive testing (hull thickness) reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdtData {
    pub thickness: f64,
    pub anomalies: Vec<Anomaly>,
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<NdtAlert>,
}

impl NdtData {
    pub fn new(thickness: f64, timestamp: f64) -> Self {
        Self {
            thickness,
            anomalies: Vec::new(),
            timestamp,
            alert: None,
        }
    }

    pub fn with_anomaly(mut self, anomaly: Anomaly) -> Self {
        self.anomalies.push(anomaly);
        self
    }

    pub fn with_alert(mut self, alert: NdtAlert) -> Self {
        self.alert = Some(alert);
        self
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn validate(&self) -> ValidationResult {
        validate_finite!("thickness", self.thickness);
        validate_finite!("timestamp", self.timestamp);
        for (i, anomaly) in self.anomalies.iter().enumerate() {
            if !anomaly.position.is_finite() {
                return Err(ValidationError::not_finite(format!("anomalies[{i}].position")));
            }
            if !anomaly.value.is_finite() {
                return Err(ValidationError::not_finite(format!("anomalies[{i}].value")));
            }
        }
        if let Some(alert) = &self.alert {
            alert.validate().map_err(|e| e.nested("alert"))?;
        }
        Ok(())
    }
}

/// Depth, water temperature and hull pressure sampled together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthData {
    pub depth: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub timestamp: f64,
}

impl DepthData {
    pub fn validate(&self) -> ValidationResult {
        validate_finite!("depth", self.depth);
        validate_finite!("temperature", self.temperature);
        validate_finite!("pressure", self.pressure);
        validate_finite!("timestamp", self.timestamp);
        Ok(())
    }
}

/// Everything that arrived in one telemetry tick.
///
/// A missing slot means no new sample this tick, not a failed sensor, so an
/// all-empty value is perfectly valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_front: Option<CameraData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_rear: Option<CameraData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndt: Option<NdtData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<DepthData>,
}

impl SensorData {
    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }

    /// Number of slots carrying a sample.
    pub fn sample_count(&self) -> usize {
        usize::from(self.camera_front.is_some())
            + usize::from(self.camera_rear.is_some())
            + usize::from(self.ndt.is_some())
            + usize::from(self.depth.is_some())
    }

    /// Overlay the samples present in `update`, keeping the rest.
    ///
    /// Folding every tick into one value this way yields the latest known
    /// sample per sensor.
    pub fn merge(&mut self, update: SensorData) {
        if let Some(frame) = update.camera_front {
            self.camera_front = Some(frame);
        }
        if let Some(frame) = update.camera_rear {
            self.camera_rear = Some(frame);
        }
        if let Some(ndt) = update.ndt {
            self.ndt = Some(ndt);
        }
        if let Some(depth) = update.depth {
            self.depth = Some(depth);
        }
    }

    pub fn validate(&self) -> ValidationResult {
        if let Some(frame) = &self.camera_front {
            frame.validate().map_err(|e| e.nested("camera_front"))?;
        }
        if let Some(frame) = &self.camera_rear {
            frame.validate().map_err(|e| e.nested("camera_rear"))?;
        }
        if let Some(ndt) = &self.ndt {
            ndt.validate().map_err(|e| e.nested("ndt"))?;
        }
        if let Some(depth) = &self.depth {
            depth.validate().map_err(|e| e.nested("depth"))?;
        }
        Ok(())
    }
}
