//! Concrete autonomous tasks.
//!
//! Three building blocks cover the mode library: a dead-time wait, a timed
//! open-loop drive segment, and a one-shot subsystem action wrapped in a
//! closure. Real trajectory following is deliberately absent; drive
//! segments are commanded velocities over a duration.

use std::time::Duration;

use fieldos_types::DriveCommand;
use tracing::warn;

use crate::task::{Task, TaskContext};

// ────────────────────────────────────────────────────────────────────────────
// WaitTask
// ────────────────────────────────────────────────────────────────────────────

/// Does nothing for a fixed duration.
///
/// Used to hold position while another mechanism settles, or to stagger a
/// mode against alliance partners.
pub struct WaitTask {
    duration: Duration,
    elapsed: Duration,
}

impl WaitTask {
    /// Create a wait of the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }
}

impl Task for WaitTask {
    fn name(&self) -> &str {
        "wait"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) {
        self.elapsed += ctx.dt;
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DriveTask
// ────────────────────────────────────────────────────────────────────────────

/// Commands fixed chassis velocities for a fixed duration, then stops.
///
/// The command is re-issued every step so a drivetrain with a command
/// watchdog keeps moving. A drive fault ends the task early (with the
/// chassis stopped) rather than stalling the sequencer.
pub struct DriveTask {
    command: DriveCommand,
    duration: Duration,
    elapsed: Duration,
    done: bool,
}

impl DriveTask {
    /// Create a timed velocity segment.
    pub fn new(command: DriveCommand, duration: Duration) -> Self {
        Self {
            command,
            duration,
            elapsed: Duration::ZERO,
            done: false,
        }
    }
}

impl Task for DriveTask {
    fn name(&self) -> &str {
        "drive"
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) {
        if self.done {
            return;
        }
        self.elapsed += ctx.dt;
        if self.elapsed >= self.duration {
            ctx.drivetrain.stop();
            self.done = true;
            return;
        }
        if let Err(e) = ctx.drivetrain.drive(self.command) {
            warn!(task = self.name(), error = %e, "drive fault; ending segment early");
            ctx.drivetrain.stop();
            self.done = true;
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ActionTask
// ────────────────────────────────────────────────────────────────────────────

type Action = Box<dyn FnOnce(&mut TaskContext<'_>) + Send>;

/// Runs a one-shot closure and completes on its first step.
///
/// Covers discrete subsystem actions (start an intake, fire a shooter)
/// without a dedicated task type per mechanism.
pub struct ActionTask {
    name: String,
    action: Option<Action>,
}

impl ActionTask {
    /// Wrap a closure as a task. The closure runs exactly once.
    pub fn new(
        name: impl Into<String>,
        action: impl FnOnce(&mut TaskContext<'_>) + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            action: Some(Box::new(action)),
        }
    }
}

impl Task for ActionTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, ctx: &mut TaskContext<'_>) {
        if let Some(action) = self.action.take() {
            action(ctx);
        }
    }

    fn is_done(&self) -> bool {
        self.action.is_none()
    }
}
