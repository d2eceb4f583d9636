//! Dead-reckoning integration and the waypoint-following state machine.
//!
//! Each tick every vessel advances along its velocity vector, appends the
//! new position to its history, and checks whether it has come abeam of
//! its current target waypoint. Reaching the final waypoint sets the
//! arrived flag only — the vessel keeps way on its last course and speed.

use hecs::World;

use fairway_core::components::{Helm, Navigator, PositionHistory};
use fairway_core::constants::ARRIVAL_THRESHOLD_M;
use fairway_core::types::{Position, Velocity, Waypoint};
use fairway_core::{geometry, units};

/// Run one integration step for every vessel.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, helm, nav, history)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &mut Helm,
        &mut Navigator,
        &mut PositionHistory,
    )>() {
        let prev = *pos;
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        history.positions.push(*pos);

        if nav.arrived {
            continue;
        }
        let Some(target) = nav.waypoints.get(nav.target_index) else {
            continue;
        };

        // Arrival is judged by the waypoint's distance to this tick's
        // travel segment, so an overshoot within one tick still counts.
        let d = geometry::perpendicular_distance(*pos, prev, target.position());
        if d < ARRIVAL_THRESHOLD_M {
            if nav.target_index < nav.waypoints.len() - 1 {
                nav.target_index += 1;
                let next = nav.waypoints[nav.target_index].position();
                apply_course(helm, vel, geometry::bearing_deg(*pos, next));
            } else {
                nav.arrived = true;
            }
        }
    }
}

/// Set a new course and recompute the velocity vector. No interpolation —
/// heading changes are instantaneous step functions.
pub fn apply_course(helm: &mut Helm, vel: &mut Velocity, course_deg: f64) {
    helm.course_deg = course_deg;
    *vel = geometry::velocity_from(course_deg, helm.speed_mps);
}

/// Set a new speed, keeping both unit representations consistent, and
/// recompute the velocity vector.
pub fn apply_speed(helm: &mut Helm, vel: &mut Velocity, speed_mps: f64) {
    helm.speed_mps = speed_mps;
    helm.speed_kn = units::mps_to_kn(speed_mps);
    *vel = geometry::velocity_from(helm.course_deg, speed_mps);
}

/// Replace the active waypoint queue.
///
/// The stored goal is re-appended unless the new queue already ends at it,
/// so the original destination always survives replacement. The first
/// entry of the new queue becomes the immediate target and the course is
/// recomputed from the vessel's current position.
pub fn replace_waypoints(
    nav: &mut Navigator,
    helm: &mut Helm,
    vel: &mut Velocity,
    pos: Position,
    mut new_queue: Vec<Waypoint>,
) {
    if new_queue.last().map(Waypoint::position) != Some(nav.goal.position()) {
        new_queue.push(nav.goal);
    }
    nav.waypoints = new_queue;
    nav.target_index = 0;

    let target = nav.waypoints[0].position();
    apply_course(helm, vel, geometry::bearing_deg(pos, target));
}
