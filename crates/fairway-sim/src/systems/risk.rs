//! Pairwise collision-risk assessment (CPA/TCPA).
//!
//! Runs strictly after the navigation pass so every record is computed
//! from post-integration state. Each vessel's `RiskTable` is rebuilt from
//! its own perspective toward every other vessel — directional records,
//! not deduplicated per pair.

use std::collections::BTreeMap;

use glam::DVec2;
use hecs::World;

use fairway_core::components::{RiskTable, VesselId};
use fairway_core::constants::{RELATIVE_SPEED_EPS, TCPA_ALREADY_PASSED};
use fairway_core::types::{Position, RiskRecord, Velocity};
use fairway_core::{geometry, units};

/// Rebuild every vessel's risk table against every other vessel.
pub fn run(world: &mut World) {
    // First pass: collect post-integration kinematic state. Sorted by id
    // so the assessment order never depends on entity iteration order.
    let mut states: Vec<(String, Position, Velocity)> = world
        .query_mut::<(&VesselId, &Position, &Velocity)>()
        .into_iter()
        .map(|(_entity, (id, pos, vel))| (id.0.clone(), *pos, *vel))
        .collect();
    states.sort_by(|a, b| a.0.cmp(&b.0));

    // Second pass: replace each table wholesale.
    for (_entity, (id, pos, vel, table)) in
        world.query_mut::<(&VesselId, &Position, &Velocity, &mut RiskTable)>()
    {
        let mut contacts = BTreeMap::new();
        for (other_id, other_pos, other_vel) in &states {
            if *other_id == id.0 {
                continue;
            }
            contacts.insert(other_id.clone(), assess(*pos, *vel, *other_pos, *other_vel));
        }
        table.contacts = contacts;
    }
}

/// Full risk record from `self` toward `other`.
fn assess(pos: Position, vel: Velocity, other_pos: Position, other_vel: Velocity) -> RiskRecord {
    let (cpa_m, tcpa_s) = cpa_tcpa(pos, vel, other_pos, other_vel);
    let range_m = geometry::distance(pos, other_pos);
    RiskRecord {
        cpa_m,
        cpa_yds: units::m_to_yds(cpa_m),
        tcpa_s,
        range_m,
        range_yds: units::m_to_yds(range_m),
        bearing_deg: geometry::bearing_deg(pos, other_pos),
    }
}

/// Closest point of approach and time to reach it, assuming both vessels
/// hold course and speed.
///
/// Returns `(cpa_m, tcpa_s)`. A closest approach already in the past
/// yields the [`TCPA_ALREADY_PASSED`] sentinel. Zero relative velocity
/// (parallel courses at equal speed) yields the current range and an
/// infinite TCPA — never NaN.
pub fn cpa_tcpa(
    pos: Position,
    vel: Velocity,
    other_pos: Position,
    other_vel: Velocity,
) -> (f64, f64) {
    let dv = DVec2::new(vel.x - other_vel.x, vel.y - other_vel.y);
    let dp = DVec2::new(pos.x - other_pos.x, pos.y - other_pos.y);

    let rel_speed_sq = dv.length_squared();
    if rel_speed_sq < RELATIVE_SPEED_EPS * RELATIVE_SPEED_EPS {
        return (dp.length(), f64::INFINITY);
    }

    let cpa_m = dv.perp_dot(dp).abs() / rel_speed_sq.sqrt();
    let mut tcpa_s = -dv.dot(dp) / rel_speed_sq;
    if tcpa_s < 0.0 {
        tcpa_s = TCPA_ALREADY_PASSED;
    }
    (cpa_m, tcpa_s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpa_tcpa_head_on() {
        // 1000 m apart, closing head-on at 10 m/s each.
        let a_pos = Position::new(0.0, 0.0);
        let a_vel = Velocity::new(0.0, 10.0);
        let b_pos = Position::new(0.0, 1000.0);
        let b_vel = Velocity::new(0.0, -10.0);

        let (cpa, tcpa) = cpa_tcpa(a_pos, a_vel, b_pos, b_vel);
        assert!(cpa.abs() < 1e-9, "head-on CPA should be zero, got {cpa}");
        assert!((tcpa - 50.0).abs() < 1e-9, "expected 50 s, got {tcpa}");
    }

    #[test]
    fn test_cpa_tcpa_offset_crossing() {
        // B passes 100 m east of A's track; A stationary.
        let a_pos = Position::new(0.0, 0.0);
        let a_vel = Velocity::new(0.0, 0.0);
        let b_pos = Position::new(100.0, 1000.0);
        let b_vel = Velocity::new(0.0, -5.0);

        let (cpa, tcpa) = cpa_tcpa(a_pos, a_vel, b_pos, b_vel);
        assert!((cpa - 100.0).abs() < 1e-9);
        assert!((tcpa - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_cpa_tcpa_already_passed_sentinel() {
        // B is astern and opening: closest approach is in the past.
        let a_pos = Position::new(0.0, 0.0);
        let a_vel = Velocity::new(0.0, 10.0);
        let b_pos = Position::new(0.0, -500.0);
        let b_vel = Velocity::new(0.0, -10.0);

        let (_cpa, tcpa) = cpa_tcpa(a_pos, a_vel, b_pos, b_vel);
        assert_eq!(tcpa, TCPA_ALREADY_PASSED);
    }

    #[test]
    fn test_cpa_tcpa_zero_relative_velocity() {
        // Parallel courses, equal speed: separation never changes.
        let a_pos = Position::new(0.0, 0.0);
        let b_pos = Position::new(300.0, 400.0);
        let vel = Velocity::new(3.0, 4.0);

        let (cpa, tcpa) = cpa_tcpa(a_pos, vel, b_pos, vel);
        assert!((cpa - 500.0).abs() < 1e-9, "CPA should be current range");
        assert!(tcpa.is_infinite());
        assert!(!cpa.is_nan());
    }

    #[test]
    fn test_cpa_symmetric_between_perspectives() {
        let a_pos = Position::new(0.0, 0.0);
        let a_vel = Velocity::new(2.0, 7.0);
        let b_pos = Position::new(900.0, -350.0);
        let b_vel = Velocity::new(-4.0, 3.0);

        let (cpa_ab, tcpa_ab) = cpa_tcpa(a_pos, a_vel, b_pos, b_vel);
        let (cpa_ba, tcpa_ba) = cpa_tcpa(b_pos, b_vel, a_pos, a_vel);
        assert!((cpa_ab - cpa_ba).abs() < 1e-9);
        assert!((tcpa_ab - tcpa_ba).abs() < 1e-9);
    }
}
