//! [`Task`] – the unit of autonomous work.
//!
//! The driver loop calls [`Task::step`] once per fixed control period and
//! checks [`Task::is_done`] after each step. A task moves through an
//! implicit lifecycle: constructed → running (receiving periodic steps) →
//! done. Done is terminal and never re-entered.
//!
//! A task that fails internally is still required to report done so the
//! sequencer can advance; no task may hang the queue indefinitely. Runtime
//! faults are the task's own responsibility and stay out of the sequencer's
//! contract.

use std::time::Duration;

use fieldos_hal::Drivetrain;

/// Everything a task may touch during one step of execution.
pub struct TaskContext<'a> {
    /// The injected chassis handle.
    pub drivetrain: &'a mut dyn Drivetrain,
    /// Time elapsed since the previous step.
    pub dt: Duration,
}

/// A single autonomous behavior with a run-to-completion lifecycle.
///
/// Implementations must make `step` cheap enough to complete well within
/// one control period; there is no internal parallelism and nothing may
/// block.
pub trait Task: Send {
    /// Human-readable name used in log events.
    fn name(&self) -> &str;

    /// Execute one control-period slice of work.
    ///
    /// Called repeatedly until [`Task::is_done`] returns `true`. Must not
    /// be called again after that.
    fn step(&mut self, ctx: &mut TaskContext<'_>);

    /// Whether the task has finished. Terminal: once `true`, stays `true`.
    fn is_done(&self) -> bool;
}
