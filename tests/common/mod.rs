//! Common test utilities for integration tests.

use bevy::math::DVec2;
use bevy::prelude::Color;
use inner_planets::body::Body;
use inner_planets::types::{AU_TO_METERS, G};

pub const SUN_MASS: f64 = 1.98892e30;
pub const EARTH_MASS: f64 = 5.9742e24;

/// A central star at rest at the origin.
pub fn sun() -> Body {
    Body::new("Sun", DVec2::ZERO, 30.0, Color::WHITE, SUN_MASS)
        .unwrap()
        .central()
}

/// A planet on the +x axis in a circular orbit around [`sun`].
pub fn circular_planet(name: &str, distance_au: f64, mass: f64) -> Body {
    let r = distance_au * AU_TO_METERS;
    let v = (G * (SUN_MASS + mass) / r).sqrt();
    Body::new(name, DVec2::new(r, 0.0), 10.0, Color::WHITE, mass)
        .unwrap()
        .with_velocity(DVec2::new(0.0, v))
        .unwrap()
}

/// Earth as configured in the inner planets preset.
pub fn earth() -> Body {
    Body::new(
        "Earth",
        DVec2::new(AU_TO_METERS, 0.0),
        16.0,
        Color::WHITE,
        EARTH_MASS,
    )
    .unwrap()
    .with_velocity(DVec2::new(0.0, -29783.0))
    .unwrap()
}

/// Relative separation of a two-body system.
pub fn separation(bodies: &[Body]) -> f64 {
    (bodies[1].position() - bodies[0].position()).length()
}

/// Compute orbital period of the sun-planet pair.
pub fn orbital_period(semi_major_axis: f64, planet_mass: f64) -> f64 {
    use std::f64::consts::TAU;
    TAU * (semi_major_axis.powi(3) / (G * (SUN_MASS + planet_mass))).sqrt()
}
