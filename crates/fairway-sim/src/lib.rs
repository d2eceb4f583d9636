//! Traffic simulation engine for FAIRWAY.
//!
//! Owns the hecs ECS world, runs the per-tick navigation and risk systems,
//! and produces `ObservationSnapshot`s for driving loops and consumers.

pub mod driver;
pub mod engine;
pub mod playback;
pub mod recorder;
pub mod scenario;
pub mod spawn;
pub mod systems;

pub use engine::TrafficEngine;
pub use fairway_core as core;
