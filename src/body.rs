//! Celestial body state.
//!
//! A [`Body`] is a point mass with display attributes and a trail of past
//! positions. Bodies are validated once at construction; afterwards only the
//! physics integrator mutates them.

use bevy::math::{DVec2, Vec2};
use bevy::prelude::Color;

use crate::types::ScreenProjection;

/// Reasons a body (or a set of bodies) is rejected at setup.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidBodyError {
    #[error("body '{name}' has non-positive mass {mass} kg")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body '{name}' has a non-finite position or velocity")]
    NonFiniteState { name: String },

    #[error("both '{first}' and '{second}' are flagged as the central body")]
    DuplicateCentralBody { first: String, second: String },
}

/// A single celestial body in the simulation.
#[derive(Clone, Debug)]
pub struct Body {
    name: String,
    pub(crate) position: DVec2,
    pub(crate) velocity: DVec2,
    mass: f64,
    radius: f32,
    color: Color,
    is_central_body: bool,
    pub(crate) distance_to_anchor: f64,
    pub(crate) orbit_path: Vec<DVec2>,
}

impl Body {
    /// Create a body at rest.
    ///
    /// `position` is in meters, `mass` in kilograms, `radius` in pixels.
    pub fn new(
        name: impl Into<String>,
        position: DVec2,
        radius: f32,
        color: Color,
        mass: f64,
    ) -> Result<Self, InvalidBodyError> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(InvalidBodyError::NonPositiveMass { name, mass });
        }
        if !position.is_finite() {
            return Err(InvalidBodyError::NonFiniteState { name });
        }

        Ok(Self {
            name,
            position,
            velocity: DVec2::ZERO,
            mass,
            radius,
            color,
            is_central_body: false,
            distance_to_anchor: 0.0,
            orbit_path: Vec::new(),
        })
    }

    /// Set the initial velocity (m/s).
    pub fn with_velocity(mut self, velocity: DVec2) -> Result<Self, InvalidBodyError> {
        if !velocity.is_finite() {
            return Err(InvalidBodyError::NonFiniteState { name: self.name });
        }
        self.velocity = velocity;
        Ok(self)
    }

    /// Mark this body as the gravitational anchor used for distance readouts.
    pub fn central(mut self) -> Self {
        self.is_central_body = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in meters.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Velocity in m/s.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Display radius in pixels.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_central_body(&self) -> bool {
        self.is_central_body
    }

    /// Distance to the central body as of the last tick (meters).
    pub fn distance_to_anchor(&self) -> f64 {
        self.distance_to_anchor
    }

    /// Positions after each committed tick, oldest first.
    pub fn orbit_path(&self) -> &[DVec2] {
        &self.orbit_path
    }

    /// Linear momentum (kg·m/s).
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Snapshot of everything the renderer needs for this body.
    pub fn current_display_state(&self, projection: &ScreenProjection) -> DisplayState {
        DisplayState {
            screen_position: projection.to_screen(self.position),
            radius: self.radius,
            color: self.color,
            label: self.name.clone(),
            distance_to_anchor: self.distance_to_anchor,
            is_central_body: self.is_central_body,
        }
    }

    /// Append a trail point, dropping the oldest ones beyond `max_points`.
    pub(crate) fn record_position(&mut self, max_points: Option<usize>) {
        self.orbit_path.push(self.position);
        if let Some(max) = max_points
            && self.orbit_path.len() > max
        {
            let overflow = self.orbit_path.len() - max;
            self.orbit_path.drain(0..overflow);
        }
    }
}

/// Render-facing view of a body.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    /// Position in window pixels (origin top-left, y down).
    pub screen_position: Vec2,
    /// Circle radius in pixels.
    pub radius: f32,
    pub color: Color,
    pub label: String,
    /// Distance to the central body in meters.
    pub distance_to_anchor: f64,
    pub is_central_body: bool,
}

impl DisplayState {
    /// Distance caption such as `"Earth: 149600000km"`.
    ///
    /// The central body has no caption.
    pub fn caption(&self) -> Option<String> {
        if self.is_central_body {
            return None;
        }
        Some(format!(
            "{}: {}km",
            self.label,
            (self.distance_to_anchor / 1000.0).round()
        ))
    }
}

/// Check the invariants that span several bodies.
///
/// At most one body may be the central body.
pub fn validate_bodies(bodies: &[Body]) -> Result<(), InvalidBodyError> {
    let mut central = bodies.iter().filter(|b| b.is_central_body);
    if let (Some(first), Some(second)) = (central.next(), central.next()) {
        return Err(InvalidBodyError::DuplicateCentralBody {
            first: first.name.clone(),
            second: second.name.clone(),
        });
    }
    Ok(())
}

/// Total linear momentum of a set of bodies (kg·m/s).
pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(Body::momentum).sum()
}
