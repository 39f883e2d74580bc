//! [`Subsystem`] – the periodic lifecycle every mechanism participates in.
//!
//! The host loop broadcasts four phases to all registered subsystems each
//! control period, always in the same order and always phase-by-phase
//! (every subsystem's `periodic` runs before any subsystem's
//! `write_outputs`, and so on):
//!
//! 1. `periodic` – read sensors, update internal state.
//! 2. `write_outputs` – push computed outputs to actuators.
//! 3. `output_telemetry` – publish dashboard values.
//! 4. `write_log` – append to the match log.
//!
//! Everything runs on the one control thread; no phase may block.

use tracing::debug;

/// A robot mechanism participating in the periodic lifecycle.
///
/// All phases except [`Subsystem::stop`] have empty defaults so simple
/// mechanisms only implement what they use.
pub trait Subsystem: Send {
    /// Stable name used in log events.
    fn name(&self) -> &str;

    /// Read sensors and update internal state.
    fn periodic(&mut self) {}

    /// Push computed outputs to actuators.
    fn write_outputs(&mut self) {}

    /// Publish dashboard telemetry.
    fn output_telemetry(&self) {}

    /// Append to the match log.
    fn write_log(&self) {}

    /// Bring the mechanism to a safe stop. Called when the robot is
    /// disabled.
    fn stop(&mut self);
}

/// An ordered collection of subsystems receiving the lifecycle broadcast.
///
/// Broadcast order is registration order.
#[derive(Default)]
pub struct SubsystemSet {
    subsystems: Vec<Box<dyn Subsystem>>,
}

impl SubsystemSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subsystem at the end of the broadcast order.
    pub fn register(&mut self, subsystem: Box<dyn Subsystem>) {
        debug!(subsystem = subsystem.name(), "subsystem registered");
        self.subsystems.push(subsystem);
    }

    /// Run one full lifecycle broadcast: each phase across every subsystem
    /// before the next phase begins.
    pub fn broadcast(&mut self) {
        for s in &mut self.subsystems {
            s.periodic();
        }
        for s in &mut self.subsystems {
            s.write_outputs();
        }
        for s in &self.subsystems {
            s.output_telemetry();
        }
        for s in &self.subsystems {
            s.write_log();
        }
    }

    /// Stop every subsystem, in registration order.
    pub fn stop_all(&mut self) {
        for s in &mut self.subsystems {
            s.stop();
        }
    }

    /// Number of registered subsystems.
    pub fn len(&self) -> usize {
        self.subsystems.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.subsystems.is_empty()
    }
}
