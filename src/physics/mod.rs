//! Physics simulation for the planetary system.
//!
//! The integrator itself is plain Rust operating on `&mut [Body]`. This
//! module wraps it for Bevy: the bodies live in the [`SolarSystem`] resource
//! and are advanced once per `FixedUpdate` tick.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{DegenerateStateError, net_force, pairwise_force};
pub use integrator::{Simulator, UpdateMode};

use crate::body::{Body, InvalidBodyError, total_momentum, validate_bodies};
use crate::types::{DEFAULT_TIMESTEP, G, SimulationClock};

/// Ticks between momentum diagnostics in the log.
const MOMENTUM_LOG_INTERVAL: u64 = 600;

/// Plugin providing the fixed-tick physics step.
///
/// Expects a [`SolarSystem`] resource to be inserted by the application.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        // Keeps settings the application inserted before adding the plugin
        app.init_resource::<SimulationSettings>();
        let tick_hz = app.world().resource::<SimulationSettings>().tick_hz;

        app.init_resource::<SimulationClock>()
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .add_systems(FixedUpdate, physics_step);
    }
}

/// Configuration for the physics step.
#[derive(Resource, Clone, Debug)]
pub struct SimulationSettings {
    /// Simulated seconds per tick. Default: 43200 (half a day).
    pub timestep: f64,
    /// Gravitational constant. Default: 6.67428e-11.
    pub gravitational_constant: f64,
    /// Jacobi or Gauss-Seidel update. Default: synchronous.
    pub update_mode: UpdateMode,
    /// Trail length cap per body. Default: unbounded.
    pub max_orbit_points: Option<usize>,
    /// Physics ticks per real second. Default: 60.
    pub tick_hz: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravitational_constant: G,
            update_mode: UpdateMode::Synchronous,
            max_orbit_points: None,
            tick_hz: 60.0,
        }
    }
}

impl SimulationSettings {
    /// Build the stepper described by these settings.
    pub fn simulator(&self) -> Simulator {
        Simulator {
            gravitational_constant: self.gravitational_constant,
            update_mode: self.update_mode,
            max_orbit_points: self.max_orbit_points,
        }
    }
}

/// The fixed set of simulated bodies.
#[derive(Resource, Clone, Debug)]
pub struct SolarSystem {
    bodies: Vec<Body>,
}

impl SolarSystem {
    /// Wrap a set of bodies after checking cross-body invariants.
    pub fn new(bodies: Vec<Body>) -> Result<Self, InvalidBodyError> {
        validate_bodies(&bodies)?;
        Ok(Self { bodies })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Advance all bodies by one tick.
    pub fn advance(&mut self, simulator: &Simulator, dt: f64) -> Result<(), DegenerateStateError> {
        simulator.advance(&mut self.bodies, dt)
    }
}

/// Main physics system.
///
/// Runs in FixedUpdate. A degenerate tick halts the simulation; the last
/// committed state stays on screen.
fn physics_step(
    mut system: ResMut<SolarSystem>,
    mut clock: ResMut<SimulationClock>,
    settings: Res<SimulationSettings>,
) {
    if clock.halted {
        return;
    }

    if let Err(err) = system.advance(&settings.simulator(), settings.timestep) {
        error!("Simulation halted after {} ticks: {}", clock.ticks, err);
        clock.halted = true;
        return;
    }

    clock.ticks += 1;
    clock.elapsed += settings.timestep;

    if clock.ticks % MOMENTUM_LOG_INTERVAL == 0 {
        let momentum = total_momentum(system.bodies());
        debug!(
            "Day {:.1}: total momentum ({:.6e}, {:.6e}) kg·m/s",
            clock.days(),
            momentum.x,
            momentum.y
        );
    }
}
