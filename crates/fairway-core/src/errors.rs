//! Configuration errors.
//!
//! These are hard failures raised immediately at construction or call
//! time; the caller must fix its input and retry. Degenerate geometry
//! (zero relative velocity, zero-length segments) is NOT an error — those
//! conditions have defined outputs in the geometry and risk modules.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no speed specified for vessel {vessel_id:?}")]
    MissingSpeed { vessel_id: String },

    #[error("vessel {vessel_id:?} has {count} waypoints, at least 2 required")]
    ShortWaypointList { vessel_id: String, count: usize },

    #[error("empty waypoint update for vessel {vessel_id:?}")]
    EmptyWaypointUpdate { vessel_id: String },

    #[error("unknown vessel id {vessel_id:?}")]
    UnknownVessel { vessel_id: String },

    #[error("duplicate vessel id {vessel_id:?}")]
    DuplicateVessel { vessel_id: String },

    #[error("scenario defines no vessels")]
    NoVessels,
}
