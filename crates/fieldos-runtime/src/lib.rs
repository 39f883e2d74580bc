//! `fieldos-runtime` – Driver Loop Engine
//!
//! The fixed-period host side of the control stack. The autonomous core in
//! `fieldos-auto` is purely reactive; this crate is what polls it.
//!
//! # Modules
//!
//! - [`executor`] – [`AutoExecutor`][executor::AutoExecutor]:
//!   drives one autonomous mode to completion, one task step per control
//!   period, pulling the next task exactly once when the current one
//!   reports done and stopping the chassis when the queue's exhaustion
//!   sentinel comes back. Also implements abrupt cancellation for mode
//!   switches (teleop / disabled).
//! - [`subsystem`] – [`Subsystem`][subsystem::Subsystem] and
//!   [`SubsystemSet`][subsystem::SubsystemSet]:
//!   the periodic lifecycle broadcast every registered subsystem receives
//!   each period, in registration order:
//!   `periodic → write_outputs → output_telemetry → write_log`.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing]:
//!   initialises the global `tracing` subscriber from `RUST_LOG`, with an
//!   optional JSON formatter for log aggregators.

pub mod executor;
pub mod subsystem;
pub mod telemetry;

pub use executor::{AutoExecutor, ExecutorStatus};
pub use subsystem::{Subsystem, SubsystemSet};
pub use telemetry::init_tracing;
