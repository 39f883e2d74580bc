//! In-process simulated drivetrain for CI testing without physical hardware.
//!
//! [`SimDrivetrain`] records every command and integrates a simple unicycle
//! model so the full autonomous stack can run in headless tests. It also
//! counts odometry resets, which lets tests assert the exactly-once reset
//! contract of mode construction, and can be built in a failing
//! configuration to exercise fatal construction paths.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use fieldos_hal::{Drivetrain, SimDrivetrain};
//! use fieldos_types::DriveCommand;
//!
//! let mut drive = SimDrivetrain::new("drive_base");
//! drive.drive(DriveCommand::new(1.0, 0.0)).expect("sim drive must succeed");
//! drive.step(Duration::from_secs(1));
//! assert!((drive.pose().x_m - 1.0).abs() < 1e-9);
//! ```

use std::time::Duration;

use fieldos_types::{DriveCommand, FieldError, Pose, Rotation};
use tracing::debug;

use crate::drivetrain::Drivetrain;

/// A simulated differential drivetrain.
///
/// Tracks a pose by integrating the most recent [`DriveCommand`] under a
/// unicycle model on each call to [`SimDrivetrain::step`]. Always succeeds
/// unless constructed via [`SimDrivetrain::failing`], in which case
/// odometry resets return a hardware fault.
pub struct SimDrivetrain {
    id: String,
    pose: Pose,
    last_command: DriveCommand,
    reset_count: usize,
    fail_resets: bool,
}

impl SimDrivetrain {
    /// Create a simulated drivetrain at the field origin.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pose: Pose::new(0.0, 0.0, Rotation::ZERO),
            last_command: DriveCommand::STOP,
            reset_count: 0,
            fail_resets: false,
        }
    }

    /// Create a drivetrain whose `reset_odometry` always faults.
    ///
    /// Used by tests that need mode construction to fail.
    pub fn failing(id: impl Into<String>) -> Self {
        Self {
            fail_resets: true,
            ..Self::new(id)
        }
    }

    /// Advance the simulation by `dt`, integrating the last command.
    ///
    /// Heading is integrated first, then the position advances along the
    /// updated heading.
    pub fn step(&mut self, dt: Duration) {
        let dt_s = dt.as_secs_f64();
        let heading =
            self.pose.heading + Rotation::from_radians(self.last_command.angular_radps * dt_s);
        self.pose = Pose::new(
            self.pose.x_m + self.last_command.linear_mps * heading.radians().cos() * dt_s,
            self.pose.y_m + self.last_command.linear_mps * heading.radians().sin() * dt_s,
            heading,
        );
    }

    /// The most recently commanded velocities.
    pub fn last_command(&self) -> DriveCommand {
        self.last_command
    }

    /// How many times `reset_odometry` has been called.
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }
}

impl Drivetrain for SimDrivetrain {
    fn id(&self) -> &str {
        &self.id
    }

    fn reset_odometry(&mut self, pose: Pose) -> Result<(), FieldError> {
        if self.fail_resets {
            return Err(FieldError::HardwareFault {
                component: self.id.clone(),
                details: "odometry reset rejected (simulated fault)".to_string(),
            });
        }
        self.reset_count += 1;
        self.pose = pose;
        debug!(id = %self.id, x_m = pose.x_m, y_m = pose.y_m, "sim odometry reset");
        Ok(())
    }

    fn drive(&mut self, command: DriveCommand) -> Result<(), FieldError> {
        self.last_command = command;
        Ok(())
    }

    fn stop(&mut self) {
        self.last_command = DriveCommand::STOP;
    }

    fn pose(&self) -> Pose {
        self.pose
    }
}
