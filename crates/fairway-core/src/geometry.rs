//! Planar geometry primitives.
//!
//! Pure functions, no state. Bearings are compass-style: degrees from
//! North, clockwise positive, range (-180, 180].

use glam::DVec2;

use crate::types::{Position, Velocity};

fn vec(p: Position) -> DVec2 {
    DVec2::new(p.x, p.y)
}

/// Bearing from `from` to `to` in degrees (0 = North, clockwise).
pub fn bearing_deg(from: Position, to: Position) -> f64 {
    let d = vec(to) - vec(from);
    d.x.atan2(d.y).to_degrees()
}

/// Euclidean distance between two points in meters.
pub fn distance(a: Position, b: Position) -> f64 {
    (vec(b) - vec(a)).length()
}

/// Distance from point `e` to the segment `a`-`b`.
///
/// Three cases by dot-product sign: `e` projects beyond `b` (distance to
/// `b`), `e` projects before `a` (distance to `a`), otherwise the true
/// perpendicular distance to the line. A zero-length segment reduces to
/// the point distance from `a`.
pub fn perpendicular_distance(a: Position, b: Position, e: Position) -> f64 {
    let ab = vec(b) - vec(a);
    let be = vec(e) - vec(b);
    let ae = vec(e) - vec(a);

    if ab.length_squared() == 0.0 {
        return ae.length();
    }

    if ab.dot(be) > 0.0 {
        be.length()
    } else if ab.dot(ae) < 0.0 {
        ae.length()
    } else {
        ab.perp_dot(ae).abs() / ab.length()
    }
}

/// Velocity vector for a course (degrees from North, clockwise) and speed.
pub fn velocity_from(course_deg: f64, speed_mps: f64) -> Velocity {
    let course_rad = course_deg.to_radians();
    Velocity::new(speed_mps * course_rad.sin(), speed_mps * course_rad.cos())
}
