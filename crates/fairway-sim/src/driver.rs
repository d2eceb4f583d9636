//! Driving policies over the shared engine core.
//!
//! The three modes differ only in how ticks are triggered and how
//! termination is evaluated: Manual and Test advance a live engine
//! (paced vs. free-running), Playback steps through a recorded run and
//! terminates at its final step.

use fairway_core::errors::ConfigError;
use fairway_core::state::ObservationSnapshot;

use crate::engine::TrafficEngine;
use crate::playback::ReplayDriver;
use crate::recorder::RunRecorder;
use crate::spawn::SimSetup;

/// A live engine plus optional run recording.
pub struct LiveDriver {
    pub engine: TrafficEngine,
    recorder: Option<RunRecorder>,
}

impl LiveDriver {
    pub fn new(setup: SimSetup, record: bool) -> Result<Self, ConfigError> {
        let engine = TrafficEngine::new(&setup)?;
        let recorder = record.then(|| RunRecorder::new(setup));
        Ok(Self { engine, recorder })
    }

    pub fn step(&mut self) -> ObservationSnapshot {
        let snapshot = self.engine.advance_tick();
        if let Some(recorder) = &mut self.recorder {
            recorder.record(snapshot.clone());
        }
        snapshot
    }
}

/// Tagged driving policy over the shared orchestrator.
pub enum Driver {
    /// Live simulation paced against the wall clock by its outer loop.
    Manual(LiveDriver),
    /// Live simulation advanced as fast as the outer loop can call it.
    Test(LiveDriver),
    /// Replay of a recorded run.
    Playback(ReplayDriver),
}

impl Driver {
    /// Advance one step and return the resulting observation.
    pub fn step(&mut self) -> ObservationSnapshot {
        match self {
            Driver::Manual(live) | Driver::Test(live) => live.step(),
            Driver::Playback(replay) => replay.step().clone(),
        }
    }

    /// Current observation without advancing.
    pub fn observation(&self) -> ObservationSnapshot {
        match self {
            Driver::Manual(live) | Driver::Test(live) => live.engine.get_observation(),
            Driver::Playback(replay) => replay.current().clone(),
        }
    }

    /// Live policies run until every vessel has arrived; playback runs
    /// until the final recorded step.
    pub fn is_running(&self) -> bool {
        match self {
            Driver::Manual(live) | Driver::Test(live) => live.engine.is_running(),
            Driver::Playback(replay) => !replay.is_finished(),
        }
    }

    /// Whether the outer loop should throttle steps to the wall clock.
    pub fn paced(&self) -> bool {
        matches!(self, Driver::Manual(_) | Driver::Playback(_))
    }

    /// Tick interval driving this run.
    pub fn tick_secs(&self) -> f64 {
        match self {
            Driver::Manual(live) | Driver::Test(live) => live.engine.clock().tick_secs,
            Driver::Playback(replay) => replay.clock().tick_secs,
        }
    }

    /// The live engine, if this policy has one (playback does not).
    pub fn engine_mut(&mut self) -> Option<&mut TrafficEngine> {
        match self {
            Driver::Manual(live) | Driver::Test(live) => Some(&mut live.engine),
            Driver::Playback(_) => None,
        }
    }

    /// Take the recorder out of a live driver for persistence.
    pub fn take_recorder(&mut self) -> Option<RunRecorder> {
        match self {
            Driver::Manual(live) | Driver::Test(live) => live.recorder.take(),
            Driver::Playback(_) => None,
        }
    }
}
