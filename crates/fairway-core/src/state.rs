//! Observation snapshot — the complete visible state produced each tick.
//!
//! This is the durable contract consumed by logging, playback, and
//! rendering collaborators. Maps are ordered so serialized snapshots are
//! reproducible byte for byte.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{RiskRecord, Waypoint};

/// Read-only view of the whole simulation at one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationSnapshot {
    /// Elapsed simulation time in seconds.
    pub elapsed_time_s: f64,
    /// Per-vessel state keyed by vessel id.
    pub vessels: BTreeMap<String, VesselView>,
}

/// One vessel's externally visible state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VesselView {
    /// Planar position `[x, y]` in meters.
    pub position: [f64; 2],
    /// Course in degrees (0 = North, clockwise).
    pub course_deg: f64,
    pub speed_kn: f64,
    pub speed_mps: f64,
    /// Active waypoint queue, `[x, y]` or `[x, y, speed_directive]` rows.
    pub waypoints: Vec<Waypoint>,
    /// Risk assessment toward every other vessel, keyed by its id.
    pub risk: BTreeMap<String, RiskRecord>,
}
