//! Explicit Euler integration of the N-body system.
//!
//! Each tick computes the net gravitational force on every body, kicks its
//! velocity by `F/m·dt`, then drifts its position by `v·dt`. New states are
//! staged and committed only after every body has been evaluated, so a tick
//! either completes for all bodies or leaves them untouched.

use bevy::math::DVec2;

use super::gravity::{DegenerateStateError, net_force};
use crate::body::Body;
use crate::types::G;

/// How bodies within one tick observe each other's updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Jacobi update: every force uses the positions from before the tick.
    #[default]
    Synchronous,
    /// Gauss-Seidel update: bodies are advanced in slice order and later
    /// bodies feel the already-moved positions of earlier ones.
    Sequential,
}

/// State computed for one body, awaiting commit.
#[derive(Clone, Copy, Debug)]
struct StagedState {
    position: DVec2,
    velocity: DVec2,
    distance_to_anchor: Option<f64>,
}

/// Stateless stepper for a fixed collection of bodies.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Gravitational constant used for every pair.
    pub gravitational_constant: f64,
    pub update_mode: UpdateMode,
    /// Trail length cap per body. `None` keeps every point.
    pub max_orbit_points: Option<usize>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            update_mode: UpdateMode::Synchronous,
            max_orbit_points: None,
        }
    }
}

impl Simulator {
    /// Advance every body by one timestep of `dt` seconds.
    ///
    /// On success each body's velocity, position, anchor distance and orbit
    /// path are updated. On error nothing is modified.
    pub fn advance(&self, bodies: &mut [Body], dt: f64) -> Result<(), DegenerateStateError> {
        let staged = match self.update_mode {
            UpdateMode::Synchronous => self.stage_synchronous(bodies, dt)?,
            UpdateMode::Sequential => self.stage_sequential(bodies, dt)?,
        };

        for (body, state) in bodies.iter_mut().zip(staged) {
            body.velocity = state.velocity;
            body.position = state.position;
            if let Some(distance) = state.distance_to_anchor {
                body.distance_to_anchor = distance;
            }
            body.record_position(self.max_orbit_points);
        }

        Ok(())
    }

    /// Evaluate all bodies against the same pre-tick snapshot.
    fn stage_synchronous(
        &self,
        bodies: &[Body],
        dt: f64,
    ) -> Result<Vec<StagedState>, DegenerateStateError> {
        let snapshot: Vec<DVec2> = bodies.iter().map(Body::position).collect();

        (0..bodies.len())
            .map(|i| {
                let (force, distance_to_anchor) =
                    net_force(bodies, &snapshot, i, self.gravitational_constant)?;
                Ok(euler_step(&bodies[i], snapshot[i], force, dt, distance_to_anchor))
            })
            .collect()
    }

    /// Evaluate bodies in order, feeding each result into the next evaluation.
    fn stage_sequential(
        &self,
        bodies: &[Body],
        dt: f64,
    ) -> Result<Vec<StagedState>, DegenerateStateError> {
        let mut positions: Vec<DVec2> = bodies.iter().map(Body::position).collect();
        let mut staged = Vec::with_capacity(bodies.len());

        for (i, body) in bodies.iter().enumerate() {
            let (force, distance_to_anchor) =
                net_force(bodies, &positions, i, self.gravitational_constant)?;
            let state = euler_step(body, positions[i], force, dt, distance_to_anchor);
            positions[i] = state.position;
            staged.push(state);
        }

        Ok(staged)
    }
}

/// Kick then drift: `v += F/m·dt`, `x += v·dt`.
#[inline]
fn euler_step(
    body: &Body,
    position: DVec2,
    force: DVec2,
    dt: f64,
    distance_to_anchor: Option<f64>,
) -> StagedState {
    let velocity = body.velocity() + force / body.mass() * dt;
    StagedState {
        position: position + velocity * dt,
        velocity,
        distance_to_anchor,
    }
}
