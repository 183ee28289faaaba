//! Wire-shape tests for the telemetry schemas.
//!
//! Payloads here use the exact field names the vehicle link emits.

use scrubmarine_schemas::{
    Anomaly, CameraData, ConnectionStatus, DepthData, NdtAlert, NdtData, SensorData,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

// ──────────────────────────────────────────────────────────────────────
// SensorData
// ──────────────────────────────────────────────────────────────────────

#[test]
fn sensor_data_deserializes_from_empty_object() -> TestResult {
    let data: SensorData = serde_json::from_str("{}")?;
    assert_eq!(data, SensorData::default());
    assert!(data.validate().is_ok());
    Ok(())
}

#[test]
fn empty_sensor_data_serializes_to_empty_object() -> TestResult {
    let json = serde_json::to_string(&SensorData::default())?;
    assert_eq!(json, "{}");
    Ok(())
}

#[test]
fn full_tick_parses_every_slot() -> TestResult {
    let payload = r#"{
        "camera_front": {
            "camera_id": "front",
            "frame": "/9j/",
            "timestamp": 1718000000.25,
            "resolution": [1920, 1080]
        },
        "camera_rear": {
            "camera_id": "rear",
            "frame": "/9j/",
            "timestamp": 1718000000.25,
            "resolution": [640, 480]
        },
        "ndt": {
            "thickness": 11.8,
            "anomalies": [{ "position": 0.35, "value": 10.9 }],
            "timestamp": 1718000000.0,
            "alert": { "type": "thickness_drop", "previous": 12.3, "current": 11.8, "difference": -0.5 }
        },
        "depth": { "depth": 14.2, "temperature": 9.5, "pressure": 2.43, "timestamp": 1718000000.0 }
    }"#;

    let data: SensorData = serde_json::from_str(payload)?;
    assert_eq!(data.sample_count(), 4);
    assert!(data.validate().is_ok());

    let front = data.camera_front.as_ref().ok_or("front frame missing")?;
    assert_eq!(front.resolution, [1920, 1080]);
    assert_eq!(front.frame_bytes()?, vec![0xFF, 0xD8, 0xFF]);

    let ndt = data.ndt.as_ref().ok_or("ndt missing")?;
    assert_eq!(ndt.anomalies, vec![Anomaly::new(0.35, 10.9)]);
    let alert = ndt.alert.as_ref().ok_or("alert missing")?;
    assert_eq!(alert.kind, "thickness_drop");
    assert!(alert.is_consistent());
    Ok(())
}

#[test]
fn partial_tick_leaves_other_slots_empty() -> TestResult {
    let payload = r#"{ "depth": { "depth": 3.0, "temperature": 12.0, "pressure": 1.3, "timestamp": 7.0 } }"#;
    let data: SensorData = serde_json::from_str(payload)?;
    assert_eq!(data.sample_count(), 1);
    assert!(data.camera_front.is_none());
    assert!(data.ndt.is_none());
    Ok(())
}

// ──────────────────────────────────────────────────────────────────────
// NDT
// ──────────────────────────────────────────────────────────────────────

#[test]
fn ndt_alert_uses_type_key_on_the_wire() -> TestResult {
    let json = serde_json::to_value(NdtAlert::new("corrosion", 10.0, 9.0))?;
    assert_eq!(json["type"], "corrosion");
    assert!(json.get("kind").is_none());
    Ok(())
}

#[test]
fn ndt_without_alert_omits_field() -> TestResult {
    let json = serde_json::to_value(NdtData::new(12.0, 3.0))?;
    assert!(json.get("alert").is_none());
    let restored: NdtData = serde_json::from_value(json)?;
    assert_eq!(restored.alert, None);
    Ok(())
}

// ──────────────────────────────────────────────────────────────────────
// Depth and connection
// ──────────────────────────────────────────────────────────────────────

#[test]
fn depth_data_roundtrip() -> TestResult {
    let depth = DepthData {
        depth: 22.5,
        temperature: 8.25,
        pressure: 3.26,
        timestamp: 99.0,
    };
    let restored: DepthData = serde_json::from_str(&serde_json::to_string(&depth)?)?;
    assert_eq!(restored, depth);
    Ok(())
}

#[test]
fn disconnected_status_wire_shape() -> TestResult {
    let json = serde_json::to_value(ConnectionStatus::disconnected("socket closed"))?;
    assert_eq!(
        json,
        serde_json::json!({ "connected": false, "error": "socket closed" })
    );
    Ok(())
}

#[test]
fn camera_stream_ordering_over_a_sequence() {
    let frames: Vec<CameraData> = [1.0, 1.5, 1.5, 2.0]
        .into_iter()
        .map(|t| CameraData::from_frame_bytes("front", b"x", t, [320, 240]))
        .collect();
    assert!(frames.windows(2).all(|pair| match pair {
        [prev, next] => next.follows(prev),
        _ => false,
    }));
}
