//! `fieldos-cli` – FieldOS Sim Runner
//!
//! This binary runs a demonstration autonomous routine against the
//! simulated drivetrain. It:
//!
//! 1. Initialises structured logging (`RUST_LOG`, `FIELDOS_LOG_FORMAT=json`).
//! 2. Loads `fieldos.toml` (field geometry, alliance override, loop period).
//! 3. Builds the demo mode — resolving the alliance and mirroring the
//!    starting pose when on blue.
//! 4. Drives the task queue at the configured fixed period until it is
//!    exhausted, printing the final pose.
//! 5. Intercepts **Ctrl-C** to cancel the mode and stop the chassis.

mod config;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use tracing::error;

use fieldos_auto::{ActionTask, AutoMode, DriveTask, FixedAlliance, ModePlan, WaitTask};
use fieldos_hal::{Drivetrain, SimDrivetrain};
use fieldos_runtime::{AutoExecutor, ExecutorStatus};
use fieldos_types::{DriveCommand, Pose, Rotation};

use crate::config::Config;

fn main() -> ExitCode {
    fieldos_runtime::telemetry::init_tracing();

    println!("{}", "FieldOS sim runner".bold().cyan());

    let config = Config::load(Path::new("fieldos.toml"));

    // Ctrl-C raises a flag; the loop cancels the mode on the next tick.
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_flag = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        shutdown_flag.store(true, Ordering::SeqCst);
    }) {
        error!(error = %e, "failed to install Ctrl-C handler");
        return ExitCode::FAILURE;
    }

    let mut drive = SimDrivetrain::new("drive_base");
    let mode = match AutoMode::build(
        demo_plan(),
        &FixedAlliance(config.alliance),
        config.field(),
        &mut drive,
    ) {
        Ok(mode) => mode,
        Err(e) => {
            error!(error = %e, "mode construction failed");
            println!("{} {e}", "construction error:".bold().red());
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} {} on the {} alliance, starting at {}",
        "running".bold().green(),
        mode.name(),
        mode.alliance(),
        format_pose(mode.starting_pose()),
    );

    let period = config.loop_period();
    let mut exec = AutoExecutor::new(mode);
    loop {
        if shutdown.load(Ordering::SeqCst) {
            exec.cancel(&mut drive);
            println!("{}", "cancelled".bold().yellow());
            break;
        }
        if exec.tick(&mut drive, period) == ExecutorStatus::Finished {
            println!("{}", "mode exhausted".bold().green());
            break;
        }
        drive.step(period);
        thread::sleep(period);
    }

    println!("final pose: {}", format_pose(drive.pose()).bold());
    ExitCode::SUCCESS
}

/// The demo routine: leave the start, pause, score, return toward the wall.
fn demo_plan() -> ModePlan {
    ModePlan::new("demo_taxi_and_score", Pose::new(1.5, 4.0, Rotation::ZERO))
        .with_task(Box::new(DriveTask::new(
            DriveCommand::new(1.0, 0.0),
            Duration::from_millis(1500),
        )))
        .with_task(Box::new(WaitTask::new(Duration::from_millis(500))))
        .with_task(Box::new(ActionTask::new("score", |_ctx| {
            println!("{}", "  scoring game piece".magenta());
        })))
        .with_task(Box::new(DriveTask::new(
            DriveCommand::new(-0.5, 0.0),
            Duration::from_millis(1000),
        )))
}

fn format_pose(pose: Pose) -> String {
    format!(
        "({:.2} m, {:.2} m, {:.1}°)",
        pose.x_m,
        pose.y_m,
        pose.heading.degrees()
    )
}
