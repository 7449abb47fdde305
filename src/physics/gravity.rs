//! Pairwise Newtonian gravity between bodies.
//!
//! Forces are evaluated from body positions only, so callers can run them
//! against any snapshot of the system.

use bevy::math::DVec2;

use crate::body::Body;

/// Raised when two bodies sit at the same point, where the force is undefined.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DegenerateStateError {
    #[error("bodies '{body}' and '{other}' are at zero distance")]
    ZeroDistance { body: String, other: String },
}

/// Force exerted on one point mass by another.
///
/// # Arguments
/// * `position`, `mass` - The body being pulled (meters, kilograms)
/// * `other_position`, `other_mass` - The body doing the pulling
/// * `g` - Gravitational constant
///
/// # Returns
/// The force vector in newtons and the separation distance in meters,
/// or `None` when the bodies are too close for a finite force.
#[inline]
pub fn pairwise_force(
    position: DVec2,
    mass: f64,
    other_position: DVec2,
    other_mass: f64,
    g: f64,
) -> Option<(DVec2, f64)> {
    let delta = other_position - position;
    let distance = delta.length();
    if distance == 0.0 {
        return None;
    }

    let magnitude = g * mass * other_mass / (distance * distance);
    let theta = delta.y.atan2(delta.x);
    let force = DVec2::new(theta.cos() * magnitude, theta.sin() * magnitude);

    // Subnormal separations overflow the inverse square
    if !force.is_finite() {
        return None;
    }

    Some((force, distance))
}

/// Net force on `bodies[index]`, with the body's own position overridden.
///
/// `positions` supplies the position of every body (same indexing as
/// `bodies`), which lets callers evaluate forces against a staged snapshot.
///
/// # Returns
/// The summed force in newtons and, if the system has a central body other
/// than `bodies[index]`, the distance to it.
pub fn net_force(
    bodies: &[Body],
    positions: &[DVec2],
    index: usize,
    g: f64,
) -> Result<(DVec2, Option<f64>), DegenerateStateError> {
    let body = &bodies[index];
    let position = positions[index];
    let mut total = DVec2::ZERO;
    let mut anchor_distance = None;

    for (other_index, other) in bodies.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let (force, distance) =
            pairwise_force(position, body.mass(), positions[other_index], other.mass(), g)
                .ok_or_else(|| DegenerateStateError::ZeroDistance {
                    body: body.name().to_string(),
                    other: other.name().to_string(),
                })?;

        if other.is_central_body() {
            anchor_distance = Some(distance);
        }
        total += force;
    }

    Ok((total, anchor_distance))
}
