//! Observation builder: queries the world and assembles the per-tick
//! `ObservationSnapshot`. Read-only — it never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use fairway_core::components::{Helm, Navigator, RiskTable, VesselId};
use fairway_core::state::{ObservationSnapshot, VesselView};
use fairway_core::types::{Position, SimClock};

/// Build a complete observation from the current world state.
pub fn build_observation(world: &World, clock: &SimClock) -> ObservationSnapshot {
    let mut vessels = BTreeMap::new();

    for (_entity, (id, pos, helm, nav, risk)) in world
        .query::<(&VesselId, &Position, &Helm, &Navigator, &RiskTable)>()
        .iter()
    {
        vessels.insert(
            id.0.clone(),
            VesselView {
                position: [pos.x, pos.y],
                course_deg: helm.course_deg,
                speed_kn: helm.speed_kn,
                speed_mps: helm.speed_mps,
                waypoints: nav.waypoints.clone(),
                risk: risk.contacts.clone(),
            },
        );
    }

    ObservationSnapshot {
        elapsed_time_s: clock.elapsed_secs,
        vessels,
    }
}
