//! Traffic engine — the tick orchestrator.
//!
//! `TrafficEngine` owns the hecs ECS world, the simulation clock, and the
//! id→entity registry. It sequences each tick as two strict passes:
//! integration for every vessel first, then risk recomputation against
//! post-integration state. Completely headless and rate-independent —
//! wall-clock pacing belongs to whatever loop drives it.

use std::collections::{HashMap, VecDeque};

use hecs::World;

use fairway_core::commands::DriverCommand;
use fairway_core::components::{Helm, Navigator};
use fairway_core::errors::ConfigError;
use fairway_core::state::ObservationSnapshot;
use fairway_core::types::{Position, SimClock, Velocity, Waypoint};

use crate::spawn::{self, SimSetup};
use crate::systems;

/// The simulation engine. Owns the ECS world and all simulation state.
pub struct TrafficEngine {
    world: World,
    clock: SimClock,
    registry: HashMap<String, hecs::Entity>,
    command_queue: VecDeque<DriverCommand>,
}

impl TrafficEngine {
    /// Create an engine from a validated setup. Fails fast on the first
    /// invalid vessel descriptor; no partially constructed engine escapes.
    pub fn new(setup: &SimSetup) -> Result<Self, ConfigError> {
        if setup.vessels.is_empty() {
            return Err(ConfigError::NoVessels);
        }

        let mut world = World::new();
        let mut registry = HashMap::new();
        for spec in &setup.vessels {
            if registry.contains_key(&spec.id) {
                return Err(ConfigError::DuplicateVessel {
                    vessel_id: spec.id.clone(),
                });
            }
            let entity = spawn::spawn_vessel(&mut world, spec)?;
            registry.insert(spec.id.clone(), entity);
        }

        Ok(Self {
            world,
            clock: SimClock::new(setup.tick_secs),
            registry,
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a command for application at the next tick boundary, before
    /// that tick's integration pass. The target vessel is validated now.
    pub fn queue_command(&mut self, command: DriverCommand) -> Result<(), ConfigError> {
        let vessel_id = match &command {
            DriverCommand::SetWaypoints {
                vessel_id,
                waypoints,
            } => {
                if waypoints.is_empty() {
                    return Err(ConfigError::EmptyWaypointUpdate {
                        vessel_id: vessel_id.clone(),
                    });
                }
                vessel_id
            }
            DriverCommand::SetSpeed { vessel_id, .. }
            | DriverCommand::SetCourse { vessel_id, .. } => vessel_id,
        };
        if !self.registry.contains_key(vessel_id) {
            return Err(ConfigError::UnknownVessel {
                vessel_id: vessel_id.clone(),
            });
        }
        self.command_queue.push_back(command);
        Ok(())
    }

    /// Advance the simulation by one tick and return the resulting
    /// observation.
    ///
    /// Order within a tick: queued mutations, clock, integration pass for
    /// every vessel, then the risk pass against post-integration state.
    /// The two passes never interleave.
    pub fn advance_tick(&mut self) -> ObservationSnapshot {
        self.process_commands();
        self.clock.advance();
        systems::navigation::run(&mut self.world, self.clock.tick_secs);
        systems::risk::run(&mut self.world);
        systems::snapshot::build_observation(&self.world, &self.clock)
    }

    /// Read-only observation of the current state. Never mutates.
    pub fn get_observation(&self) -> ObservationSnapshot {
        systems::snapshot::build_observation(&self.world, &self.clock)
    }

    /// Replace a vessel's waypoint queue immediately. Callable between
    /// full `advance_tick` invocations; mid-tick callers go through
    /// `queue_command` instead.
    pub fn set_waypoints(
        &mut self,
        vessel_id: &str,
        waypoints: Vec<Waypoint>,
    ) -> Result<(), ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyWaypointUpdate {
                vessel_id: vessel_id.to_string(),
            });
        }
        let entity = self.lookup(vessel_id)?;
        let (pos, vel, helm, nav) = self
            .world
            .query_one_mut::<(&Position, &mut Velocity, &mut Helm, &mut Navigator)>(entity)
            .map_err(|_| ConfigError::UnknownVessel {
                vessel_id: vessel_id.to_string(),
            })?;
        systems::navigation::replace_waypoints(nav, helm, vel, *pos, waypoints);
        Ok(())
    }

    /// Set a vessel's speed in m/s immediately.
    pub fn set_speed(&mut self, vessel_id: &str, speed_mps: f64) -> Result<(), ConfigError> {
        let entity = self.lookup(vessel_id)?;
        let (vel, helm) = self
            .world
            .query_one_mut::<(&mut Velocity, &mut Helm)>(entity)
            .map_err(|_| ConfigError::UnknownVessel {
                vessel_id: vessel_id.to_string(),
            })?;
        systems::navigation::apply_speed(helm, vel, speed_mps);
        Ok(())
    }

    /// Set a vessel's course in degrees immediately.
    pub fn set_course(&mut self, vessel_id: &str, course_deg: f64) -> Result<(), ConfigError> {
        let entity = self.lookup(vessel_id)?;
        let (vel, helm) = self
            .world
            .query_one_mut::<(&mut Velocity, &mut Helm)>(entity)
            .map_err(|_| ConfigError::UnknownVessel {
                vessel_id: vessel_id.to_string(),
            })?;
        systems::navigation::apply_course(helm, vel, course_deg);
        Ok(())
    }

    /// True until every vessel has reached its final waypoint. Replay
    /// drivers layer their own termination on top of this check.
    pub fn is_running(&self) -> bool {
        self.world
            .query::<&Navigator>()
            .iter()
            .any(|(_entity, nav)| !nav.arrived)
    }

    /// Set elapsed time directly (playback scrubbing). Vessel state is not
    /// reconciled here — that is the seeking driver's concern.
    pub fn seek(&mut self, elapsed_secs: f64) {
        self.clock.seek(elapsed_secs);
    }

    /// Current simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn lookup(&self, vessel_id: &str) -> Result<hecs::Entity, ConfigError> {
        self.registry
            .get(vessel_id)
            .copied()
            .ok_or_else(|| ConfigError::UnknownVessel {
                vessel_id: vessel_id.to_string(),
            })
    }

    /// Apply all queued commands. Targets were validated at queue time and
    /// vessels are never despawned, so lookups cannot fail here.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                DriverCommand::SetWaypoints {
                    vessel_id,
                    waypoints,
                } => {
                    let _ = self.set_waypoints(&vessel_id, waypoints);
                }
                DriverCommand::SetSpeed {
                    vessel_id,
                    speed_mps,
                } => {
                    let _ = self.set_speed(&vessel_id, speed_mps);
                }
                DriverCommand::SetCourse {
                    vessel_id,
                    course_deg,
                } => {
                    let _ = self.set_course(&vessel_id, course_deg);
                }
            }
        }
    }
}
