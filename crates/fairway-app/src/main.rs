//! Headless runner for FAIRWAY scenarios.
//!
//! Wires scenario → engine → recorder and drives the tick loop. Wall-clock
//! pacing lives here, outside the core: manual and playback modes are
//! throttled to the tick interval (scaled by `--rate`), test mode runs as
//! fast as the machine allows.

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};

use fairway_sim::driver::{Driver, LiveDriver};
use fairway_sim::playback::{ReplayDriver, RunLog};
use fairway_sim::scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Real-time paced live run under external control.
    Manual,
    /// Free-running scripted live run.
    Test,
    /// Replay a recorded run log.
    Playback,
}

#[derive(Debug, Parser)]
#[command(
    name = "fairway",
    about = "Waypoint traffic simulator with CPA/TCPA risk assessment"
)]
struct Cli {
    /// Driving mode.
    #[arg(long, value_enum, default_value_t = Mode::Test)]
    mode: Mode,

    /// Scenario JSON file (manual and test modes).
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Recorded run log to replay (playback mode).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Speed multiplier for paced modes (2.0 = twice real time).
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Directory where run logs are written.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Skip run recording.
    #[arg(long)]
    no_record: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Cli::parse()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut driver = build_driver(&cli)?;

    let tick_duration = Duration::from_secs_f64(driver.tick_secs() / cli.rate.max(0.001));
    let paced = driver.paced();
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;

    while driver.is_running() {
        let snapshot = driver.step();
        ticks += 1;
        log::debug!(
            "t={:.1}s, {} vessels",
            snapshot.elapsed_time_s,
            snapshot.vessels.len()
        );

        if paced {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind — reset to avoid a catch-up spiral.
                next_tick_time = now;
            }
        }
    }

    let final_obs = driver.observation();
    log::info!(
        "run finished after {ticks} ticks at t={:.1}s",
        final_obs.elapsed_time_s
    );
    for (id, vessel) in &final_obs.vessels {
        if vessel.risk.is_empty() {
            log::info!(
                "  {id}: position ({:.0}, {:.0}), course {:.1} deg",
                vessel.position[0],
                vessel.position[1],
                vessel.course_deg
            );
        } else {
            let min_cpa = vessel
                .risk
                .values()
                .map(|r| r.cpa_m)
                .fold(f64::INFINITY, f64::min);
            log::info!(
                "  {id}: position ({:.0}, {:.0}), course {:.1} deg, min CPA {min_cpa:.0} m",
                vessel.position[0],
                vessel.position[1],
                vessel.course_deg
            );
        }
    }

    if let Some(recorder) = driver.take_recorder() {
        let path = recorder.save_to_dir(&cli.log_dir)?;
        log::info!("run log saved to {}", path.display());
    }

    Ok(())
}

fn build_driver(cli: &Cli) -> Result<Driver, Box<dyn Error>> {
    match cli.mode {
        Mode::Manual | Mode::Test => {
            let path = cli
                .scenario
                .as_ref()
                .ok_or("--scenario is required for manual and test modes")?;
            let setup = scenario::load_scenario(path)?;
            let live = LiveDriver::new(setup, !cli.no_record)?;
            Ok(match cli.mode {
                Mode::Manual => Driver::Manual(live),
                _ => Driver::Test(live),
            })
        }
        Mode::Playback => {
            let path = cli
                .log_file
                .as_ref()
                .ok_or("--log-file is required for playback mode")?;
            let run = RunLog::load(path)?;
            Ok(Driver::Playback(ReplayDriver::new(run)?))
        }
    }
}
