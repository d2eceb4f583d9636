//! Run recording: accumulates per-tick observations and persists them as
//! a JSON run log.
//!
//! A log embeds the setup it was recorded from, so playback needs nothing
//! but the log file. Files are named `log_<n>.json` with `n` the first
//! free index in the target directory.

use std::io;
use std::path::{Path, PathBuf};

use fairway_core::state::ObservationSnapshot;

use crate::playback::RunLog;
use crate::spawn::SimSetup;

/// Collects one observation per tick for later persistence.
#[derive(Debug)]
pub struct RunRecorder {
    setup: SimSetup,
    steps: Vec<ObservationSnapshot>,
}

impl RunRecorder {
    pub fn new(setup: SimSetup) -> Self {
        Self {
            setup,
            steps: Vec::new(),
        }
    }

    /// Append one tick's observation.
    pub fn record(&mut self, snapshot: ObservationSnapshot) {
        self.steps.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The recorded run as a self-describing log.
    pub fn into_log(self) -> RunLog {
        RunLog {
            setup: self.setup,
            log: self.steps,
        }
    }

    /// Serialize the recorded run to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let log = RunLog {
            setup: self.setup.clone(),
            log: self.steps.clone(),
        };
        serde_json::to_string_pretty(&log)
    }

    /// Write the run log to `dir`, creating the directory if needed.
    /// Returns the path written.
    pub fn save_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = next_log_path(dir);
        let json = self
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

/// First free `log_<n>.json` path in `dir`.
fn next_log_path(dir: &Path) -> PathBuf {
    let mut n = 0;
    loop {
        let path = dir.join(format!("log_{n}.json"));
        if !path.exists() {
            return path;
        }
        n += 1;
    }
}
