//! Scenario loading: geographic JSON descriptors → planar `SimSetup`.
//!
//! Scenario files carry waypoints as degrees-minutes-seconds coordinate
//! pairs. Everything geographic is resolved here, at load time — the
//! engine only ever sees planar meters.
//!
//! ```json
//! {
//!   "params": { "t_step": 1.0, "origin": ["50-57-0.0N", "1-20-0.0W"] },
//!   "vessel_details": [
//!     { "vessel": "ownship",
//!       "waypoints": [["50-57-0.0N", "1-20-0.0W"],
//!                     ["50-58-30.0N", "1-18-0.0W", 8.0]],
//!       "speed_kn": 10.0 }
//!   ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use fairway_core::constants::DEFAULT_TICK_SECS;
use fairway_core::geo::{dms_to_decimal, GeoError, GeoProjection};
use fairway_core::types::Waypoint;

use crate::spawn::{SimSetup, VesselSpec};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error("cannot resolve projection origin: scenario has no waypoints")]
    NoOrigin,
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    params: ScenarioParams,
    vessel_details: Vec<VesselDetail>,
}

#[derive(Debug, Deserialize)]
struct ScenarioParams {
    #[serde(default = "default_tick")]
    t_step: f64,
    /// Optional projection reference `[lat_dms, lon_dms]`. Defaults to the
    /// first waypoint of the first vessel.
    #[serde(default)]
    origin: Option<[String; 2]>,
}

fn default_tick() -> f64 {
    DEFAULT_TICK_SECS
}

#[derive(Debug, Deserialize)]
struct VesselDetail {
    vessel: String,
    waypoints: Vec<GeoWaypoint>,
    #[serde(default)]
    speed_kn: Option<f64>,
    #[serde(default)]
    speed_mps: Option<f64>,
}

/// A `[lat_dms, lon_dms]` or `[lat_dms, lon_dms, speed_kn]` row.
#[derive(Debug)]
struct GeoWaypoint {
    lat_dms: String,
    lon_dms: String,
    speed_kn: Option<f64>,
}

impl<'de> Deserialize<'de> for GeoWaypoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GeoWaypointVisitor;

        impl<'de> Visitor<'de> for GeoWaypointVisitor {
            type Value = GeoWaypoint;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a waypoint array [lat_dms, lon_dms] or [lat_dms, lon_dms, speed_kn]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<GeoWaypoint, A::Error> {
                let lat_dms = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let lon_dms = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
                let speed_kn = seq.next_element()?;
                Ok(GeoWaypoint {
                    lat_dms,
                    lon_dms,
                    speed_kn,
                })
            }
        }

        deserializer.deserialize_seq(GeoWaypointVisitor)
    }
}

/// Load and convert a scenario file.
pub fn load_scenario(path: &Path) -> Result<SimSetup, ScenarioError> {
    let text = fs::read_to_string(path)?;
    parse_scenario(&text)
}

/// Parse scenario JSON and project its waypoints into planar coordinates.
pub fn parse_scenario(text: &str) -> Result<SimSetup, ScenarioError> {
    let file: ScenarioFile = serde_json::from_str(text)?;

    let (ref_lat, ref_lon) = match &file.params.origin {
        Some([lat, lon]) => (dms_to_decimal(lat)?, dms_to_decimal(lon)?),
        None => {
            let first = file
                .vessel_details
                .iter()
                .flat_map(|v| v.waypoints.first())
                .next()
                .ok_or(ScenarioError::NoOrigin)?;
            (
                dms_to_decimal(&first.lat_dms)?,
                dms_to_decimal(&first.lon_dms)?,
            )
        }
    };
    let projection = GeoProjection::new(ref_lat, ref_lon);

    let mut vessels = Vec::with_capacity(file.vessel_details.len());
    for detail in &file.vessel_details {
        let mut waypoints = Vec::with_capacity(detail.waypoints.len());
        for wp in &detail.waypoints {
            let lat = dms_to_decimal(&wp.lat_dms)?;
            let lon = dms_to_decimal(&wp.lon_dms)?;
            let pos = projection.to_sim(lat, lon);
            waypoints.push(Waypoint {
                x: pos.x,
                y: pos.y,
                speed_kn: wp.speed_kn,
            });
        }
        vessels.push(VesselSpec {
            id: detail.vessel.clone(),
            waypoints,
            speed_kn: detail.speed_kn,
            speed_mps: detail.speed_mps,
        });
    }

    Ok(SimSetup {
        tick_secs: file.params.t_step,
        vessels,
    })
}
