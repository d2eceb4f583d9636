//! Driver commands sent to the simulation engine.
//!
//! Commands are queued and applied at the next tick boundary, before that
//! tick's integration pass. Drivers running between ticks may instead use
//! the engine's direct mutation methods.

use serde::{Deserialize, Serialize};

use crate::types::Waypoint;

/// Mutations a driving loop can request on a running simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriverCommand {
    /// Replace a vessel's waypoint queue. The vessel's original goal is
    /// preserved as the final entry of the resulting queue.
    SetWaypoints {
        vessel_id: String,
        waypoints: Vec<Waypoint>,
    },
    /// Set a vessel's speed in m/s (the knots representation follows).
    SetSpeed { vessel_id: String, speed_mps: f64 },
    /// Set a vessel's course in degrees (0 = North, clockwise).
    SetCourse { vessel_id: String, course_deg: f64 },
}
