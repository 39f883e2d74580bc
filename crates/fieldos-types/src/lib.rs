use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feet-to-meters conversion factor (exact, by international yard definition).
const FEET_TO_METERS: f64 = 0.3048;

/// A 2-D heading, stored in degrees and always normalized to `(-180, 180]`.
///
/// The normalization convention is load-bearing: the alliance mirror
/// transform subtracts 180° and must be its own inverse, which only holds
/// when every `Rotation` lives in a single canonical range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Rotation {
    degrees: f64,
}

impl Rotation {
    /// The zero heading (facing +X).
    pub const ZERO: Rotation = Rotation { degrees: 0.0 };

    /// Create a rotation from degrees, normalizing into `(-180, 180]`.
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: normalize_degrees(degrees),
        }
    }

    /// Create a rotation from radians, normalizing into `(-180, 180]`.
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// The heading in degrees, within `(-180, 180]`.
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// The heading in radians, within `(-pi, pi]`.
    pub fn radians(self) -> f64 {
        self.degrees.to_radians()
    }
}

impl std::ops::Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::from_degrees(self.degrees + rhs.degrees)
    }
}

impl std::ops::Sub for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation::from_degrees(self.degrees - rhs.degrees)
    }
}

impl From<f64> for Rotation {
    fn from(degrees: f64) -> Self {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for f64 {
    fn from(rotation: Rotation) -> f64 {
        rotation.degrees
    }
}

/// Map an arbitrary angle in degrees into `(-180, 180]`.
fn normalize_degrees(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d <= -180.0 {
        d += 360.0;
    } else if d > 180.0 {
        d -= 360.0;
    }
    d
}

/// A 2-D rigid-body pose on the field: position in meters plus heading.
///
/// Immutable value type. Authored canonically for the red alliance by mode
/// plans; the blue variant is derived by the mirror transform in
/// `fieldos-auto`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position in meters (along the field width axis).
    pub x_m: f64,
    /// Y position in meters (along the field length axis).
    pub y_m: f64,
    /// Robot heading.
    pub heading: Rotation,
}

impl Pose {
    /// Create a pose from meters and a heading.
    pub fn new(x_m: f64, y_m: f64, heading: Rotation) -> Self {
        Self { x_m, y_m, heading }
    }
}

/// One of the two sides of the symmetric competition field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alliance {
    Red,
    Blue,
}

impl std::fmt::Display for Alliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alliance::Red => write!(f, "red"),
            Alliance::Blue => write!(f, "blue"),
        }
    }
}

/// Field dimensions in meters. Constant for the lifetime of the process;
/// the width defines the mirror line for the alliance pose transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    /// Distance between the two alliance walls, in meters.
    pub width_m: f64,
    /// Length of the field perpendicular to the width, in meters.
    pub length_m: f64,
}

impl FieldGeometry {
    /// Create a field geometry from meters.
    pub const fn new(width_m: f64, length_m: f64) -> Self {
        Self { width_m, length_m }
    }
}

impl Default for FieldGeometry {
    /// The reference field: 54 ft between alliance walls, 27 ft across.
    fn default() -> Self {
        Self::new(54.0 * FEET_TO_METERS, 27.0 * FEET_TO_METERS)
    }
}

/// A chassis velocity request for a differential drivetrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveCommand {
    /// Forward velocity in meters per second.
    pub linear_mps: f64,
    /// Counter-clockwise angular velocity in radians per second.
    pub angular_radps: f64,
}

impl DriveCommand {
    /// A full-stop command.
    pub const STOP: DriveCommand = DriveCommand {
        linear_mps: 0.0,
        angular_radps: 0.0,
    };

    /// Create a velocity command.
    pub fn new(linear_mps: f64, angular_radps: f64) -> Self {
        Self {
            linear_mps,
            angular_radps,
        }
    }
}

/// Global error type spanning drivetrain faults and autonomous-mode
/// construction and sequencing defects.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Hardware Fault on {component}: {details}")]
    HardwareFault { component: String, details: String },

    #[error("Mode Construction Failed: {0}")]
    ModeConstruction(String),

    #[error("Task queued after draining began in mode '{mode}'")]
    LateQueue { mode: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_in_range_is_unchanged() {
        assert_eq!(Rotation::from_degrees(30.0).degrees(), 30.0);
        assert_eq!(Rotation::from_degrees(-150.0).degrees(), -150.0);
        assert_eq!(Rotation::from_degrees(180.0).degrees(), 180.0);
    }

    #[test]
    fn rotation_normalizes_to_half_open_range() {
        // -180 is excluded from the range; it maps to +180.
        assert_eq!(Rotation::from_degrees(-180.0).degrees(), 180.0);
        assert_eq!(Rotation::from_degrees(540.0).degrees(), 180.0);
        assert_eq!(Rotation::from_degrees(-540.0).degrees(), 180.0);
        assert_eq!(Rotation::from_degrees(360.0).degrees(), 0.0);
        assert_eq!(Rotation::from_degrees(-190.0).degrees(), 170.0);
    }

    #[test]
    fn rotation_sub_wraps() {
        let r = Rotation::from_degrees(30.0) - Rotation::from_degrees(180.0);
        assert_eq!(r.degrees(), -150.0);

        let r = Rotation::ZERO - Rotation::from_degrees(180.0);
        // 0 - 180 = -180, which normalizes to +180.
        assert_eq!(r.degrees(), 180.0);
    }

    #[test]
    fn rotation_radians_round_trip() {
        let r = Rotation::from_radians(std::f64::consts::FRAC_PI_2);
        assert!((r.degrees() - 90.0).abs() < 1e-9);
        assert!((r.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn rotation_serializes_as_bare_degrees() {
        let json = serde_json::to_string(&Rotation::from_degrees(45.0)).unwrap();
        assert_eq!(json, "45.0");
        let back: Rotation = serde_json::from_str("-540.0").unwrap();
        // Deserialization normalizes too.
        assert_eq!(back.degrees(), 180.0);
    }

    #[test]
    fn pose_roundtrip() {
        let pose = Pose::new(2.0, 3.0, Rotation::from_degrees(90.0));
        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(pose, back);
    }

    #[test]
    fn alliance_roundtrip_and_display() {
        let json = serde_json::to_string(&Alliance::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let back: Alliance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Alliance::Blue);
        assert_eq!(Alliance::Red.to_string(), "red");
    }

    #[test]
    fn default_field_matches_reference_dimensions() {
        let field = FieldGeometry::default();
        assert!((field.width_m - 16.4592).abs() < 1e-9);
        assert!((field.length_m - 8.2296).abs() < 1e-9);
    }

    #[test]
    fn field_error_display() {
        let err = FieldError::HardwareFault {
            component: "drivetrain".to_string(),
            details: "gyro offline".to_string(),
        };
        assert!(err.to_string().contains("drivetrain"));

        let err2 = FieldError::LateQueue {
            mode: "two_piece_center".to_string(),
        };
        assert!(err2.to_string().contains("two_piece_center"));
    }
}
