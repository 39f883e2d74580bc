//! [`AutoMode`] – an authored autonomous routine.
//!
//! A mode is data, not a subclass: a [`ModePlan`] names the routine, carries
//! its canonical red-alliance starting pose, and lists its tasks in
//! execution order. [`AutoMode::build`] resolves the alliance exactly once,
//! derives the actual starting pose (mirroring for blue), seeds the
//! drivetrain odometry exactly once, and then serves tasks front-to-back
//! through [`AutoMode::next_task`].
//!
//! Queue discipline: append-only before the first pop, pop-only after.
//! Exhaustion is a normal terminal condition signalled by `None`, not an
//! error; appending after draining has begun is a logic defect and is
//! rejected with [`FieldError::LateQueue`].
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use fieldos_auto::{AutoMode, FixedAlliance, ModePlan, WaitTask};
//! use fieldos_hal::SimDrivetrain;
//! use fieldos_types::{Alliance, FieldGeometry, Pose, Rotation};
//!
//! let plan = ModePlan::new("taxi", Pose::new(2.0, 3.0, Rotation::ZERO))
//!     .with_task(Box::new(WaitTask::new(Duration::from_secs(1))));
//!
//! let mut drive = SimDrivetrain::new("drive_base");
//! let mut mode = AutoMode::build(
//!     plan,
//!     &FixedAlliance(Some(Alliance::Red)),
//!     FieldGeometry::new(16.0, 8.0),
//!     &mut drive,
//! )
//! .expect("construction must succeed in sim");
//!
//! assert!(mode.next_task().is_some());
//! assert!(mode.next_task().is_none()); // exhausted
//! ```

use std::collections::VecDeque;

use fieldos_hal::Drivetrain;
use fieldos_types::{Alliance, FieldError, FieldGeometry, Pose};
use tracing::{info, warn};

use crate::mirror::mirror;
use crate::task::Task;

// ────────────────────────────────────────────────────────────────────────────
// Alliance source
// ────────────────────────────────────────────────────────────────────────────

/// The external signal reporting which alliance this robot is on.
///
/// May legitimately be absent early in a match cycle (the field controller
/// has not yet assigned sides). Injected into [`AutoMode::build`] so the
/// sequencer never reaches for a process-wide singleton.
pub trait AllianceSource {
    /// The currently reported alliance, if one has been assigned.
    fn alliance(&self) -> Option<Alliance>;
}

/// An [`AllianceSource`] that always reports the same value. Used by the
/// sim entry point and by tests.
pub struct FixedAlliance(pub Option<Alliance>);

impl AllianceSource for FixedAlliance {
    fn alliance(&self) -> Option<Alliance> {
        self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mode plan
// ────────────────────────────────────────────────────────────────────────────

/// The declarative description of an autonomous routine: a name, the
/// canonical red-alliance starting pose, and an ordered task list.
///
/// Execution order is fixed by append order.
pub struct ModePlan {
    name: String,
    red_start: Pose,
    tasks: Vec<Box<dyn Task>>,
}

impl ModePlan {
    /// Start a plan with its canonical red-alliance starting pose.
    pub fn new(name: impl Into<String>, red_start: Pose) -> Self {
        Self {
            name: name.into(),
            red_start,
            tasks: Vec::new(),
        }
    }

    /// Append a task. Tasks run in the order they were appended.
    pub fn with_task(mut self, task: Box<dyn Task>) -> Self {
        self.tasks.push(task);
        self
    }

    /// The routine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical red-alliance starting pose.
    pub fn red_start(&self) -> Pose {
        self.red_start
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AutoMode
// ────────────────────────────────────────────────────────────────────────────

/// Lifecycle of an [`AutoMode`]'s task queue.
///
/// `Building` exists only while [`AutoMode::build`] runs; a mode observed
/// from outside is `Ready` until the first pop, `Draining` while tasks
/// remain, and `Exhausted` once a pop has returned the `None` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    Building,
    Ready,
    Draining,
    Exhausted,
}

/// A built autonomous routine: resolved starting pose plus a FIFO queue of
/// tasks, consumed one at a time by the driver loop.
///
/// Created once per match or test run; state is not reused across runs.
pub struct AutoMode {
    name: String,
    state: ModeState,
    alliance: Alliance,
    starting_pose: Pose,
    tasks: VecDeque<Box<dyn Task>>,
}

impl AutoMode {
    /// Build a mode from its plan.
    ///
    /// Resolves the alliance exactly once. An absent alliance falls back to
    /// red with a warning: a defined pose is strictly safer than aborting
    /// mode selection, and the warning surfaces the fallback to the
    /// operator before the match starts. Blue alliances get the mirrored
    /// starting pose.
    ///
    /// The resolved pose is pushed to the drivetrain odometry exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ModeConstruction`] when the odometry reset
    /// fails; the mode is unusable and selection must be retried or
    /// surfaced to the operator. There is no partial construction.
    pub fn build(
        plan: ModePlan,
        alliance_source: &dyn AllianceSource,
        field: FieldGeometry,
        drivetrain: &mut dyn Drivetrain,
    ) -> Result<Self, FieldError> {
        let alliance = match alliance_source.alliance() {
            Some(alliance) => alliance,
            None => {
                warn!(
                    mode = %plan.name,
                    "alliance not yet assigned; defaulting to red"
                );
                Alliance::Red
            }
        };

        let starting_pose = match alliance {
            Alliance::Blue => mirror(plan.red_start, field.width_m),
            Alliance::Red => plan.red_start,
        };

        drivetrain.reset_odometry(starting_pose).map_err(|e| {
            FieldError::ModeConstruction(format!(
                "odometry reset failed for mode '{}': {e}",
                plan.name
            ))
        })?;

        info!(
            mode = %plan.name,
            alliance = %alliance,
            x_m = starting_pose.x_m,
            y_m = starting_pose.y_m,
            heading_deg = starting_pose.heading.degrees(),
            tasks = plan.tasks.len(),
            "autonomous mode built"
        );

        Ok(Self {
            name: plan.name,
            state: ModeState::Ready,
            alliance,
            starting_pose,
            tasks: plan.tasks.into(),
        })
    }

    /// Pop and return the front task.
    ///
    /// Never blocks and never fails: an empty queue yields the `None`
    /// sentinel, and every later call keeps yielding it (idempotent
    /// terminal behavior). O(1).
    pub fn next_task(&mut self) -> Option<Box<dyn Task>> {
        match self.tasks.pop_front() {
            Some(task) => {
                self.state = ModeState::Draining;
                Some(task)
            }
            None => {
                self.state = ModeState::Exhausted;
                None
            }
        }
    }

    /// Append a task to the back of the queue.
    ///
    /// Permitted only while the mode is still [`ModeState::Ready`]; once
    /// draining has begun the append is a logic defect and is rejected
    /// without mutating the queue.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::LateQueue`] after the first call to
    /// [`AutoMode::next_task`].
    pub fn queue_task(&mut self, task: Box<dyn Task>) -> Result<(), FieldError> {
        match self.state {
            ModeState::Building | ModeState::Ready => {
                self.tasks.push_back(task);
                Ok(())
            }
            ModeState::Draining | ModeState::Exhausted => Err(FieldError::LateQueue {
                mode: self.name.clone(),
            }),
        }
    }

    /// The routine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current queue lifecycle state.
    pub fn state(&self) -> ModeState {
        self.state
    }

    /// The alliance this mode was resolved for.
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// The alliance-resolved starting pose pushed to odometry at build.
    pub fn starting_pose(&self) -> Pose {
        self.starting_pose
    }

    /// Number of tasks still queued (excluding any task already handed to
    /// the driver loop).
    pub fn remaining(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::WaitTask;
    use fieldos_hal::SimDrivetrain;
    use fieldos_types::Rotation;
    use std::time::Duration;

    fn wait_ms(ms: u64) -> Box<dyn Task> {
        Box::new(WaitTask::new(Duration::from_millis(ms)))
    }

    fn field16() -> FieldGeometry {
        FieldGeometry::new(16.0, 8.0)
    }

    fn build(
        plan: ModePlan,
        alliance: Option<Alliance>,
        drive: &mut SimDrivetrain,
    ) -> Result<AutoMode, FieldError> {
        AutoMode::build(plan, &FixedAlliance(alliance), field16(), drive)
    }

    #[test]
    fn red_alliance_uses_canonical_pose() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("taxi", Pose::new(2.0, 3.0, Rotation::ZERO));
        let mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        assert_eq!(mode.alliance(), Alliance::Red);
        assert_eq!(mode.starting_pose(), Pose::new(2.0, 3.0, Rotation::ZERO));
        assert_eq!(drive.pose(), Pose::new(2.0, 3.0, Rotation::ZERO));
    }

    #[test]
    fn blue_alliance_gets_mirrored_pose() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("taxi", Pose::new(5.0, 10.0, Rotation::from_degrees(30.0)));
        let mode = build(plan, Some(Alliance::Blue), &mut drive).unwrap();

        let start = mode.starting_pose();
        assert!((start.x_m - 11.0).abs() < 1e-9);
        assert!((start.y_m - 10.0).abs() < 1e-9);
        assert!((start.heading.degrees() - (-150.0)).abs() < 1e-9);
    }

    #[test]
    fn absent_alliance_defaults_to_red() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("taxi", Pose::new(2.0, 3.0, Rotation::ZERO));
        let mode = build(plan, None, &mut drive).unwrap();

        assert_eq!(mode.alliance(), Alliance::Red);
        assert_eq!(mode.starting_pose(), Pose::new(2.0, 3.0, Rotation::ZERO));
    }

    #[test]
    fn odometry_reset_happens_exactly_once() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("three_piece", Pose::new(1.0, 1.0, Rotation::ZERO))
            .with_task(wait_ms(10))
            .with_task(wait_ms(10))
            .with_task(wait_ms(10));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        while mode.next_task().is_some() {}
        assert_eq!(drive.reset_count(), 1);
    }

    #[test]
    fn failed_odometry_reset_is_fatal() {
        let mut drive = SimDrivetrain::failing("drive_base");
        let plan = ModePlan::new("taxi", Pose::new(2.0, 3.0, Rotation::ZERO));
        let result = build(plan, Some(Alliance::Red), &mut drive);

        assert!(matches!(result, Err(FieldError::ModeConstruction(_))));
    }

    #[test]
    fn tasks_come_back_in_fifo_order() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("ordered", Pose::new(0.0, 0.0, Rotation::ZERO))
            .with_task(wait_ms(10))
            .with_task(wait_ms(20))
            .with_task(wait_ms(30));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        // Names are all "wait"; distinguish by draining exactly three.
        assert_eq!(mode.remaining(), 3);
        assert!(mode.next_task().is_some());
        assert!(mode.next_task().is_some());
        assert!(mode.next_task().is_some());
        assert!(mode.next_task().is_none());
    }

    #[test]
    fn exhaustion_sentinel_is_idempotent() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("abc", Pose::new(0.0, 0.0, Rotation::ZERO))
            .with_task(wait_ms(1))
            .with_task(wait_ms(1))
            .with_task(wait_ms(1));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        assert!(mode.next_task().is_some()); // A
        assert!(mode.next_task().is_some()); // B
        assert!(mode.next_task().is_some()); // C
        assert!(mode.next_task().is_none()); // sentinel
        assert!(mode.next_task().is_none()); // still the sentinel
        assert_eq!(mode.state(), ModeState::Exhausted);
    }

    #[test]
    fn queue_while_ready_preserves_order() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan =
            ModePlan::new("late_ok", Pose::new(0.0, 0.0, Rotation::ZERO)).with_task(wait_ms(1));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        // Still Ready: appends are allowed and go to the back.
        mode.queue_task(wait_ms(2)).unwrap();
        assert_eq!(mode.remaining(), 2);
        assert_eq!(mode.state(), ModeState::Ready);
    }

    #[test]
    fn queue_after_first_pop_is_rejected() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan =
            ModePlan::new("strict", Pose::new(0.0, 0.0, Rotation::ZERO)).with_task(wait_ms(1));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        let _running = mode.next_task();
        assert_eq!(mode.state(), ModeState::Draining);

        let result = mode.queue_task(wait_ms(2));
        assert!(matches!(result, Err(FieldError::LateQueue { .. })));
        // The rejected append must not have mutated the queue.
        assert_eq!(mode.remaining(), 0);
    }

    #[test]
    fn queue_after_exhaustion_is_rejected() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("strict", Pose::new(0.0, 0.0, Rotation::ZERO));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        assert!(mode.next_task().is_none());
        assert!(matches!(
            mode.queue_task(wait_ms(2)),
            Err(FieldError::LateQueue { .. })
        ));
    }

    #[test]
    fn empty_plan_goes_straight_to_exhausted() {
        let mut drive = SimDrivetrain::new("drive_base");
        let plan = ModePlan::new("noop", Pose::new(0.0, 0.0, Rotation::ZERO));
        let mut mode = build(plan, Some(Alliance::Red), &mut drive).unwrap();

        assert_eq!(mode.state(), ModeState::Ready);
        assert!(mode.next_task().is_none());
        assert_eq!(mode.state(), ModeState::Exhausted);
    }
}
