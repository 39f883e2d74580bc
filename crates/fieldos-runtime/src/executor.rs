//! [`AutoExecutor`] – drives an autonomous mode under the fixed-period loop.
//!
//! Each control period the host calls [`AutoExecutor::tick`]. The executor
//! steps the current task and checks its completion predicate; on
//! completion it pulls the next task from the mode exactly once and
//! switches to it, or stops the chassis when the exhaustion sentinel comes
//! back. The executor does no timing of its own — it is reactive to being
//! polled, tolerates jitter in the polling period, and does O(1) work per
//! tick beyond the task's own step.
//!
//! Switching out of autonomous (teleop, disabled) is an abrupt external
//! cancellation: [`AutoExecutor::cancel`] discards the current task and the
//! remaining queue without executing further steps and stops the chassis.

use std::time::Duration;

use fieldos_auto::mode::AutoMode;
use fieldos_auto::task::{Task, TaskContext};
use fieldos_hal::Drivetrain;
use tracing::info;

/// Result of one executor tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorStatus {
    /// A task is still running (or about to start).
    Running,
    /// The mode is exhausted or cancelled; the chassis has been stopped.
    /// Further ticks are no-ops.
    Finished,
}

/// Drives one [`AutoMode`] to completion, one task at a time.
///
/// Owns the mode and the task currently being executed; ownership of each
/// task transfers here for exactly the period it is current.
pub struct AutoExecutor {
    mode: AutoMode,
    current: Option<Box<dyn Task>>,
    finished: bool,
}

impl AutoExecutor {
    /// Wrap a built mode. No task is pulled until the first tick.
    pub fn new(mode: AutoMode) -> Self {
        Self {
            mode,
            current: None,
            finished: false,
        }
    }

    /// Execute one control-period slice.
    ///
    /// `dt` is the time elapsed since the previous tick as measured by the
    /// host loop.
    pub fn tick(&mut self, drivetrain: &mut dyn Drivetrain, dt: Duration) -> ExecutorStatus {
        if self.finished {
            return ExecutorStatus::Finished;
        }

        if self.current.is_none() {
            match self.mode.next_task() {
                Some(task) => {
                    info!(mode = self.mode.name(), task = task.name(), "task started");
                    self.current = Some(task);
                }
                None => return self.finish(drivetrain),
            }
        }

        let Some(task) = self.current.as_mut() else {
            return ExecutorStatus::Running;
        };

        let mut ctx = TaskContext { drivetrain, dt };
        task.step(&mut ctx);

        if task.is_done() {
            info!(mode = self.mode.name(), task = task.name(), "task complete");
            self.current = None;
            // Exactly one pull per completion.
            match self.mode.next_task() {
                Some(next) => {
                    info!(mode = self.mode.name(), task = next.name(), "task started");
                    self.current = Some(next);
                }
                None => return self.finish(drivetrain),
            }
        }

        ExecutorStatus::Running
    }

    /// Abruptly cancel the mode: discard the current task and every queued
    /// task without executing further steps, and stop the chassis.
    ///
    /// Idempotent. The host must cease calling [`AutoExecutor::tick`] once
    /// the operating mode changes; `cancel` makes the discard explicit.
    pub fn cancel(&mut self, drivetrain: &mut dyn Drivetrain) {
        if self.finished {
            return;
        }
        let discarded =
            self.mode.remaining() + usize::from(self.current.is_some());
        self.current = None;
        while self.mode.next_task().is_some() {}
        drivetrain.stop();
        self.finished = true;
        info!(mode = self.mode.name(), discarded, "autonomous cancelled");
    }

    /// Whether the executor has finished (exhausted or cancelled).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The mode being executed.
    pub fn mode(&self) -> &AutoMode {
        &self.mode
    }

    fn finish(&mut self, drivetrain: &mut dyn Drivetrain) -> ExecutorStatus {
        drivetrain.stop();
        self.finished = true;
        info!(mode = self.mode.name(), "autonomous complete");
        ExecutorStatus::Finished
    }
}
