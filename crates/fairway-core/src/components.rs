//! ECS components for hecs vessel entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Position, RiskRecord, Waypoint};

/// Stable identity key for a vessel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselId(pub String);

/// Commanded course and speed.
///
/// Speed is held in both m/s and knots; the pair is always updated
/// together so the two representations stay numerically consistent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Helm {
    /// Course in degrees (0 = North, clockwise positive).
    pub course_deg: f64,
    pub speed_mps: f64,
    pub speed_kn: f64,
}

/// Waypoint-following navigation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigator {
    /// Active waypoint queue. The first entry of the initial queue is the
    /// vessel's starting position; the last entry is always the goal.
    pub waypoints: Vec<Waypoint>,
    /// Index of the current target waypoint within the active queue.
    pub target_index: usize,
    /// The final destination, preserved across waypoint-queue replacement.
    pub goal: Waypoint,
    /// Set once the final waypoint is reached. The vessel keeps way on its
    /// last course and speed after this is set.
    pub arrived: bool,
}

/// Append-only position history, one entry per tick.
/// Used for course-keeping (arrival tests) and downstream rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionHistory {
    pub positions: Vec<Position>,
}

/// Per-vessel risk snapshot keyed by other-vessel id.
/// Tick-local: fully replaced each tick, never shared between vessels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskTable {
    pub contacts: BTreeMap<String, RiskRecord>,
}
