//! Simulation constants and tuning parameters.

/// Default tick interval in seconds, used when a scenario does not set one.
pub const DEFAULT_TICK_SECS: f64 = 1.0;

// --- Navigation ---

/// Distance below which a vessel is considered to have reached its current
/// target waypoint (meters).
pub const ARRIVAL_THRESHOLD_M: f64 = 50.0;

// --- Collision risk ---

/// Sentinel TCPA for a closest approach that already occurred in the past.
/// Distinct from 0.0 so "already receding" is never conflated with
/// "closing right now".
pub const TCPA_ALREADY_PASSED: f64 = -1.0;

/// Relative speeds below this are treated as zero relative motion (m/s).
/// Two vessels on parallel courses at equal speed fall in this regime.
pub const RELATIVE_SPEED_EPS: f64 = 1e-9;
