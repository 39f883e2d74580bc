//! `fieldos-hal` – Hardware Abstraction
//!
//! The seam between control logic and physical hardware. The rest of the
//! stack only ever talks to the [`Drivetrain`][drivetrain::Drivetrain]
//! trait, so drivers can be swapped without touching sequencing logic, and
//! the autonomous core is testable against the in-process
//! [`SimDrivetrain`][sim::SimDrivetrain].
//!
//! # Modules
//!
//! - [`drivetrain`] – [`Drivetrain`][drivetrain::Drivetrain]: odometry
//!   reset, chassis velocity commands, and pose readback.
//! - [`sim`] – [`SimDrivetrain`][sim::SimDrivetrain]: a kinematic stub that
//!   records commands and integrates a unicycle model, for headless tests
//!   and CI.

pub mod drivetrain;
pub mod sim;

pub use drivetrain::Drivetrain;
pub use sim::SimDrivetrain;
