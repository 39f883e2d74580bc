//! Generic `Drivetrain` trait for differential-drive chassis hardware.
//!
//! Drivers implement this trait and are handed to the autonomous core by
//! reference. The core never reaches for a process-wide singleton; the
//! drivetrain is an explicit constructor argument, which keeps the mirror
//! and queue logic testable in isolation.

use fieldos_types::{DriveCommand, FieldError, Pose};

/// A differential-drive chassis with field-relative odometry.
///
/// Every drivetrain has a stable string identifier used in fault messages
/// and log events.
pub trait Drivetrain: Send + Sync {
    /// Stable identifier for this drivetrain, e.g. `"drive_base"`.
    fn id(&self) -> &str;

    /// Seed the odometry estimate with a known field pose.
    ///
    /// Called exactly once per autonomous-mode construction. Must not be
    /// called again mid-mode.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::HardwareFault`] if the estimate cannot be
    /// applied (e.g. the gyro is offline). The caller treats this as fatal
    /// for the mode being built.
    fn reset_odometry(&mut self, pose: Pose) -> Result<(), FieldError>;

    /// Command chassis velocities.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::HardwareFault`] if the command cannot be
    /// applied.
    fn drive(&mut self, command: DriveCommand) -> Result<(), FieldError>;

    /// Bring the chassis to an immediate stop. Infallible by contract:
    /// a stop must always be accepted.
    fn stop(&mut self);

    /// The most recent odometry pose estimate.
    fn pose(&self) -> Pose;
}
