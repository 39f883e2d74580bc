//! Alliance pose transform.
//!
//! Starting poses are authored once, for the red alliance. The field is
//! symmetric under a 180° rotation about its center combined with a mirror
//! across the long axis, so the blue equivalent of any red pose is derived
//! rather than authored: reflect X across the field width and rotate the
//! heading by 180°.
//!
//! # Example
//!
//! ```rust
//! use fieldos_auto::mirror;
//! use fieldos_types::{Pose, Rotation};
//!
//! let red = Pose::new(2.0, 3.0, Rotation::ZERO);
//! let blue = mirror(red, 16.0);
//! assert_eq!(blue, Pose::new(14.0, 3.0, Rotation::from_degrees(180.0)));
//! ```

use fieldos_types::{Pose, Rotation};

/// Map a canonical red-alliance pose to the mirrored blue-alliance pose.
///
/// `x' = width - x`, `y' = y`, `heading' = heading - 180°` (normalized).
/// Only the field width participates: the alliance stations face each other
/// across the width axis, so the length plays no role in the symmetry even
/// though it is part of the stored field geometry.
///
/// Pure and total for finite inputs, and its own inverse:
/// `mirror(mirror(p, w), w) == p`.
pub fn mirror(pose: Pose, field_width_m: f64) -> Pose {
    Pose::new(
        field_width_m - pose.x_m,
        pose.y_m,
        pose.heading - Rotation::from_degrees(180.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pose_close(a: Pose, b: Pose) {
        assert!((a.x_m - b.x_m).abs() < 1e-9, "x: {} vs {}", a.x_m, b.x_m);
        assert!((a.y_m - b.y_m).abs() < 1e-9, "y: {} vs {}", a.y_m, b.y_m);
        assert!(
            (a.heading.degrees() - b.heading.degrees()).abs() < 1e-9,
            "heading: {} vs {}",
            a.heading.degrees(),
            b.heading.degrees()
        );
    }

    #[test]
    fn reflects_x_across_field_width() {
        let blue = mirror(Pose::new(2.0, 3.0, Rotation::ZERO), 16.0);
        assert_pose_close(blue, Pose::new(14.0, 3.0, Rotation::from_degrees(180.0)));
    }

    #[test]
    fn y_is_unchanged() {
        let blue = mirror(Pose::new(5.0, 7.25, Rotation::from_degrees(45.0)), 16.0);
        assert_eq!(blue.y_m, 7.25);
    }

    #[test]
    fn rotates_heading_half_turn() {
        let blue = mirror(Pose::new(5.0, 10.0, Rotation::from_degrees(30.0)), 16.0);
        assert_pose_close(blue, Pose::new(11.0, 10.0, Rotation::from_degrees(-150.0)));
    }

    #[test]
    fn mirror_is_its_own_inverse() {
        let poses = [
            Pose::new(2.0, 3.0, Rotation::ZERO),
            Pose::new(0.0, 0.0, Rotation::from_degrees(180.0)),
            Pose::new(15.9, 8.0, Rotation::from_degrees(-90.0)),
            Pose::new(8.0, 4.0, Rotation::from_degrees(179.5)),
            Pose::new(1.3, 2.7, Rotation::from_degrees(-179.5)),
        ];
        for pose in poses {
            assert_pose_close(mirror(mirror(pose, 16.0), 16.0), pose);
        }
    }

    #[test]
    fn center_of_field_maps_to_itself_in_x() {
        let blue = mirror(Pose::new(8.0, 1.0, Rotation::ZERO), 16.0);
        assert_eq!(blue.x_m, 8.0);
    }
}
