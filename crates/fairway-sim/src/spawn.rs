//! Vessel spawn factories for setting up the simulation world.
//!
//! Validates vessel descriptors and creates entities with the full
//! component bundle. A vessel starts at its first waypoint, steering
//! toward the second.

use hecs::World;
use serde::{Deserialize, Serialize};

use fairway_core::components::{Helm, Navigator, PositionHistory, RiskTable, VesselId};
use fairway_core::constants::DEFAULT_TICK_SECS;
use fairway_core::errors::ConfigError;
use fairway_core::types::Waypoint;
use fairway_core::{geometry, units};

/// Everything needed to start a simulation: the tick interval and the
/// vessel descriptors, already in planar coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSetup {
    #[serde(default = "default_tick_secs")]
    pub tick_secs: f64,
    pub vessels: Vec<VesselSpec>,
}

fn default_tick_secs() -> f64 {
    DEFAULT_TICK_SECS
}

/// One vessel descriptor. Speed may be given in either unit; supplying
/// neither is a configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselSpec {
    pub id: String,
    /// Ordered waypoint queue; the first entry is the starting position.
    pub waypoints: Vec<Waypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_kn: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_mps: Option<f64>,
}

impl VesselSpec {
    /// Resolve the configured speed to m/s. `speed_mps` wins when both
    /// are supplied.
    pub fn speed_mps(&self) -> Result<f64, ConfigError> {
        self.speed_mps
            .or(self.speed_kn.map(units::kn_to_mps))
            .ok_or_else(|| ConfigError::MissingSpeed {
                vessel_id: self.id.clone(),
            })
    }
}

/// Validate a descriptor and spawn the vessel entity.
pub fn spawn_vessel(world: &mut World, spec: &VesselSpec) -> Result<hecs::Entity, ConfigError> {
    if spec.waypoints.len() < 2 {
        return Err(ConfigError::ShortWaypointList {
            vessel_id: spec.id.clone(),
            count: spec.waypoints.len(),
        });
    }
    let speed_mps = spec.speed_mps()?;

    let position = spec.waypoints[0].position();
    let course_deg = geometry::bearing_deg(position, spec.waypoints[1].position());

    let helm = Helm {
        course_deg,
        speed_mps,
        speed_kn: units::mps_to_kn(speed_mps),
    };
    let velocity = geometry::velocity_from(course_deg, speed_mps);

    let navigator = Navigator {
        waypoints: spec.waypoints.clone(),
        target_index: 1,
        goal: spec.waypoints[spec.waypoints.len() - 1],
        arrived: false,
    };

    let history = PositionHistory {
        positions: vec![position],
    };

    Ok(world.spawn((
        VesselId(spec.id.clone()),
        position,
        velocity,
        helm,
        navigator,
        history,
        RiskTable::default(),
    )))
}
