//! Geographic input handling: DMS coordinate parsing and projection to
//! simulation-space planar coordinates.
//!
//! Used only at scenario load time — the simulation core works purely in
//! planar meters. Uses equirectangular projection centered on a scenario
//! reference point; accurate to <0.1% within 400km of the reference.

use thiserror::Error;

use crate::types::Position;

/// Meters per degree of latitude (nearly constant across the globe).
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Failure to interpret a geographic coordinate string.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("missing hemisphere suffix in {0:?} (expected N, S, E or W)")]
    MissingHemisphere(String),
    #[error("invalid numeric component {component:?} in coordinate {coord:?}")]
    BadComponent { coord: String, component: String },
    #[error("coordinate {0:?} has more than degrees-minutes-seconds components")]
    TooManyComponents(String),
}

/// Convert a degrees-minutes-seconds coordinate string to decimal degrees.
///
/// Accepts `"50-57-0.0N"` style strings: dash-separated degrees, optional
/// minutes and seconds, terminated by a hemisphere letter. Southern and
/// western hemispheres yield negative values.
pub fn dms_to_decimal(coord: &str) -> Result<f64, GeoError> {
    let (body, hemisphere) = match coord.char_indices().last() {
        Some((idx, c)) if "NSEWnsew".contains(c) => (&coord[..idx], c.to_ascii_uppercase()),
        _ => return Err(GeoError::MissingHemisphere(coord.to_string())),
    };

    let sign = if hemisphere == 'N' || hemisphere == 'E' {
        1.0
    } else {
        -1.0
    };

    let parts: Vec<&str> = body.split('-').collect();
    if parts.len() > 3 {
        return Err(GeoError::TooManyComponents(coord.to_string()));
    }

    let mut degrees = 0.0;
    for (n, part) in parts.iter().enumerate() {
        let value: f64 = part.parse().map_err(|_| GeoError::BadComponent {
            coord: coord.to_string(),
            component: part.to_string(),
        })?;
        degrees += value / 60.0_f64.powi(n as i32);
    }

    Ok(sign * degrees)
}

/// Geographic projection anchored at a reference point.
///
/// The reference point maps to sim-space origin (0, 0).
/// x = East, y = North.
#[derive(Debug, Clone)]
pub struct GeoProjection {
    /// Reference latitude in degrees.
    pub ref_lat: f64,
    /// Reference longitude in degrees.
    pub ref_lon: f64,
    /// Cached cos(ref_lat) for longitude scaling.
    cos_ref_lat: f64,
}

impl GeoProjection {
    /// Create a new projection centered at the given lat/lon (degrees).
    pub fn new(ref_lat: f64, ref_lon: f64) -> Self {
        Self {
            ref_lat,
            ref_lon,
            cos_ref_lat: ref_lat.to_radians().cos(),
        }
    }

    /// Convert lat/lon (degrees) to a sim-space position.
    pub fn to_sim(&self, lat: f64, lon: f64) -> Position {
        let x = (lon - self.ref_lon) * METERS_PER_DEGREE * self.cos_ref_lat;
        let y = (lat - self.ref_lat) * METERS_PER_DEGREE;
        Position::new(x, y)
    }

    /// Convert a sim-space position back to (lat, lon) in degrees.
    pub fn to_geo(&self, pos: &Position) -> (f64, f64) {
        let lon = self.ref_lon + pos.x / (METERS_PER_DEGREE * self.cos_ref_lat);
        let lat = self.ref_lat + pos.y / METERS_PER_DEGREE;
        (lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_to_decimal_whole_degrees() {
        assert!((dms_to_decimal("50N").unwrap() - 50.0).abs() < 1e-12);
        assert!((dms_to_decimal("50S").unwrap() + 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_dms_to_decimal_minutes_seconds() {
        // 50° 57' 0.0" N = 50.95
        let v = dms_to_decimal("50-57-0.0N").unwrap();
        assert!((v - 50.95).abs() < 1e-10, "got {v}");

        // 1° 30' 0.0" W = -1.5
        let v = dms_to_decimal("1-30-0.0W").unwrap();
        assert!((v + 1.5).abs() < 1e-10, "got {v}");

        // seconds weight 1/3600
        let v = dms_to_decimal("0-0-36.0E").unwrap();
        assert!((v - 0.01).abs() < 1e-10, "got {v}");
    }

    #[test]
    fn test_dms_to_decimal_rejects_garbage() {
        assert!(dms_to_decimal("50-57-0.0").is_err());
        assert!(dms_to_decimal("fiftyN").is_err());
        assert!(dms_to_decimal("1-2-3-4N").is_err());
    }

    #[test]
    fn test_geo_projection_roundtrip() {
        let proj = GeoProjection::new(50.9, -1.4);
        let pos = proj.to_sim(50.95, -1.33);
        let (lat, lon) = proj.to_geo(&pos);
        assert!((lat - 50.95).abs() < 1e-10);
        assert!((lon + 1.33).abs() < 1e-10);
    }

    #[test]
    fn test_geo_projection_scales() {
        // At the equator, 1 degree ≈ 111,320 m in both axes.
        let proj = GeoProjection::new(0.0, 0.0);
        let north = proj.to_sim(1.0, 0.0);
        assert!((north.y - 111_320.0).abs() < 1.0);
        assert!(north.x.abs() < 1e-6);

        // At 60°N, 1 degree of longitude shrinks by cos(60°).
        let proj60 = GeoProjection::new(60.0, 0.0);
        let east = proj60.to_sim(60.0, 1.0);
        let expected = 111_320.0 * 60.0_f64.to_radians().cos();
        assert!((east.x - expected).abs() < 1.0);
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let proj = GeoProjection::new(50.9, -1.4);
        let pos = proj.to_sim(50.9, -1.4);
        assert!(pos.x.abs() < 1e-9);
        assert!(pos.y.abs() < 1e-9);
    }
}
