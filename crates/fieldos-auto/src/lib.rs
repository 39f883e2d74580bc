//! `fieldos-auto` – Autonomous Sequencing Core
//!
//! The alliance-aware autonomous task sequencer. A mode is an ordered queue
//! of discrete tasks plus a starting pose authored once for the red
//! alliance; the blue variant is derived geometrically rather than authored
//! twice.
//!
//! # Modules
//!
//! - [`mirror`] – [`mirror`][mirror::mirror]: the pure pose transform that
//!   maps a canonical red-alliance starting pose to the blue equivalent
//!   under the field's rotational symmetry.
//! - [`task`] – [`Task`][task::Task]: the unit of autonomous work, driven
//!   one step per control period until it reports completion.
//! - [`tasks`] – concrete behaviors: [`WaitTask`][tasks::WaitTask],
//!   [`DriveTask`][tasks::DriveTask], [`ActionTask`][tasks::ActionTask].
//! - [`mode`] – [`AutoMode`][mode::AutoMode]: resolves the alliance once at
//!   construction, seeds odometry exactly once, and exposes the pull-based
//!   FIFO task protocol (`next_task` returns `None` as the designed
//!   exhaustion sentinel, never an error).

pub mod mirror;
pub mod mode;
pub mod task;
pub mod tasks;

pub use mirror::mirror;
pub use mode::{AllianceSource, AutoMode, FixedAlliance, ModePlan, ModeState};
pub use task::{Task, TaskContext};
pub use tasks::{ActionTask, DriveTask, WaitTask};
