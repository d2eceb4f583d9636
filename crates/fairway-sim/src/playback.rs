//! Playback of recorded runs.
//!
//! A `ReplayDriver` steps and scrubs through the observations stored in a
//! run log. It never re-simulates — the recorded snapshots are served as
//! they were written, and termination is reaching the final recorded step
//! rather than the all-vessels-arrived check used for live runs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fairway_core::state::ObservationSnapshot;
use fairway_core::types::SimClock;

use crate::spawn::SimSetup;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to read run log: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed run log JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("run log contains no steps")]
    Empty,
}

/// A recorded run: the setup it was produced from plus every per-tick
/// observation, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunLog {
    pub setup: SimSetup,
    pub log: Vec<ObservationSnapshot>,
}

impl RunLog {
    pub fn load(path: &Path) -> Result<Self, PlaybackError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn from_json(text: &str) -> Result<Self, PlaybackError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Steps through a recorded run.
pub struct ReplayDriver {
    run: RunLog,
    clock: SimClock,
    cursor: usize,
}

impl ReplayDriver {
    pub fn new(run: RunLog) -> Result<Self, PlaybackError> {
        if run.log.is_empty() {
            return Err(PlaybackError::Empty);
        }
        let mut clock = SimClock::new(run.setup.tick_secs);
        clock.seek(run.log[0].elapsed_time_s);
        Ok(Self {
            run,
            clock,
            cursor: 0,
        })
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.run.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.log.is_empty()
    }

    /// Elapsed time of the final recorded step.
    pub fn t_max(&self) -> f64 {
        self.run.log[self.run.log.len() - 1].elapsed_time_s
    }

    /// The observation at the current cursor.
    pub fn current(&self) -> &ObservationSnapshot {
        &self.run.log[self.cursor]
    }

    /// Advance to the next recorded step (clamped at the end) and return
    /// its observation.
    pub fn step(&mut self) -> &ObservationSnapshot {
        if self.cursor + 1 < self.run.log.len() {
            self.cursor += 1;
        }
        self.clock.seek(self.run.log[self.cursor].elapsed_time_s);
        &self.run.log[self.cursor]
    }

    /// Jump to the recorded step closest in time to `elapsed_secs`
    /// without replaying intermediate steps.
    pub fn seek_time(&mut self, elapsed_secs: f64) {
        let mut best = 0;
        let mut best_delta = f64::INFINITY;
        for (n, step) in self.run.log.iter().enumerate() {
            let delta = (step.elapsed_time_s - elapsed_secs).abs();
            if delta < best_delta {
                best = n;
                best_delta = delta;
            }
        }
        self.cursor = best;
        self.clock.seek(self.run.log[best].elapsed_time_s);
    }

    /// True once the final recorded step has been reached.
    pub fn is_finished(&self) -> bool {
        self.cursor == self.run.log.len() - 1
    }

    pub fn setup(&self) -> &SimSetup {
        &self.run.setup
    }

    pub fn clock(&self) -> SimClock {
        self.clock
    }
}
