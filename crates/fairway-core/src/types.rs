//! Fundamental geometric and simulation types.

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Planar position in simulation space (meters, Cartesian).
/// x = East, y = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Planar velocity in simulation space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Range to another position in meters.
    pub fn range_to(&self, other: &Position) -> f64 {
        crate::geometry::distance(*self, *other)
    }

    /// Bearing to another position in degrees (0 = North, clockwise).
    pub fn bearing_deg_to(&self, other: &Position) -> f64 {
        crate::geometry::bearing_deg(*self, *other)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// A navigation waypoint: planar target point with an optional speed
/// directive in knots.
///
/// Serializes as a 2-element array `[x, y]`, or 3-element `[x, y, speed_kn]`
/// when a directive is present, matching the scenario and log file formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub speed_kn: Option<f64>,
}

impl Waypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            speed_kn: None,
        }
    }

    pub fn with_speed(x: f64, y: f64, speed_kn: f64) -> Self {
        Self {
            x,
            y,
            speed_kn: Some(speed_kn),
        }
    }

    /// The waypoint's planar position.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl From<Position> for Waypoint {
    fn from(p: Position) -> Self {
        Waypoint::new(p.x, p.y)
    }
}

impl Serialize for Waypoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.speed_kn.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        if let Some(speed) = self.speed_kn {
            seq.serialize_element(&speed)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Waypoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WaypointVisitor;

        impl<'de> Visitor<'de> for WaypointVisitor {
            type Value = Waypoint;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a waypoint array [x, y] or [x, y, speed_kn]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Waypoint, A::Error> {
                let x = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let y = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
                let speed_kn = seq.next_element()?;
                Ok(Waypoint { x, y, speed_kn })
            }
        }

        deserializer.deserialize_seq(WaypointVisitor)
    }
}

/// Pairwise collision-risk assessment, computed from one vessel's
/// perspective toward another. Replaced wholesale every tick.
///
/// A `tcpa_s` of [`crate::constants::TCPA_ALREADY_PASSED`] means the closest
/// approach lies in the past; `f64::INFINITY` means the pair has no relative
/// motion and the separation never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub cpa_m: f64,
    pub cpa_yds: f64,
    pub tcpa_s: f64,
    pub range_m: f64,
    pub range_yds: f64,
    pub bearing_deg: f64,
}

/// Simulation time tracking: fixed tick interval plus cumulative elapsed
/// time. Elapsed time is directly settable to support externally driven
/// seeking (playback scrubbing).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimClock {
    /// Seconds per tick.
    pub tick_secs: f64,
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new(tick_secs: f64) -> Self {
        Self {
            tick_secs,
            tick: 0,
            elapsed_secs: 0.0,
        }
    }

    /// Advance by one tick interval.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.tick_secs;
    }

    /// Set elapsed time directly without replaying intermediate ticks.
    /// Does not touch vessel state; reconciling vessels with a sought time
    /// is the driver's responsibility.
    pub fn seek(&mut self, elapsed_secs: f64) {
        self.elapsed_secs = elapsed_secs;
        self.tick = (elapsed_secs / self.tick_secs).round() as u64;
    }
}
