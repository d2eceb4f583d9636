//! Unit conversions.
//!
//! The conversion factors are fixed literals shared with the scenario and
//! log formats; they must not be rederived from higher-precision sources.

/// Yards per meter.
pub const YDS_PER_M: f64 = 1.09361;

/// Meters per yard.
pub const M_PER_YD: f64 = 0.9144;

/// Knots per meter-per-second.
pub const KN_PER_MPS: f64 = 1.94384;

/// Meters-per-second per knot.
pub const MPS_PER_KN: f64 = 0.514444;

pub fn m_to_yds(m: f64) -> f64 {
    m * YDS_PER_M
}

pub fn yds_to_m(yds: f64) -> f64 {
    yds * M_PER_YD
}

pub fn mps_to_kn(mps: f64) -> f64 {
    mps * KN_PER_MPS
}

pub fn kn_to_mps(kn: f64) -> f64 {
    kn * MPS_PER_KN
}
