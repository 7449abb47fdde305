//! Preset body configurations.
//!
//! The default scene is the Sun with the four inner planets, each starting
//! on the x-axis with a tangential velocity close to its mean orbital speed.

use bevy::math::DVec2;
use bevy::prelude::Color;

use crate::body::{Body, InvalidBodyError};
use crate::types::AU_TO_METERS;

/// Initial conditions for one preset body.
#[derive(Clone, Copy, Debug)]
pub struct BodyPreset {
    pub name: &'static str,
    /// Distance along the x-axis in AU (negative = left of the Sun).
    pub distance_au: f64,
    /// Display radius in pixels.
    pub radius: f32,
    /// sRGB color.
    pub color: [u8; 3],
    /// Mass in kilograms.
    pub mass: f64,
    /// Initial y velocity in m/s.
    pub velocity_y: f64,
    pub central: bool,
}

impl BodyPreset {
    /// Build the validated body.
    pub fn build(&self) -> Result<Body, InvalidBodyError> {
        let [r, g, b] = self.color;
        let body = Body::new(
            self.name,
            DVec2::new(self.distance_au * AU_TO_METERS, 0.0),
            self.radius,
            Color::srgb_u8(r, g, b),
            self.mass,
        )?
        .with_velocity(DVec2::new(0.0, self.velocity_y))?;

        Ok(if self.central { body.central() } else { body })
    }
}

pub const SUN: BodyPreset = BodyPreset {
    name: "Sun",
    distance_au: 0.0,
    radius: 30.0,
    color: [200, 200, 0],
    mass: 1.98892e30,
    velocity_y: 0.0,
    central: true,
};

pub const MERCURY: BodyPreset = BodyPreset {
    name: "Mercury",
    distance_au: 0.387,
    radius: 8.0,
    color: [80, 80, 80],
    mass: 3.30e23,
    velocity_y: -47.4e3,
    central: false,
};

pub const VENUS: BodyPreset = BodyPreset {
    name: "Venus",
    distance_au: -0.723,
    radius: 14.0,
    color: [100, 0, 100],
    mass: 4.8685e24,
    velocity_y: 35.02e3,
    central: false,
};

pub const EARTH: BodyPreset = BodyPreset {
    name: "Earth",
    distance_au: 1.0,
    radius: 16.0,
    color: [50, 50, 200],
    mass: 5.9742e24,
    velocity_y: -29.783e3,
    central: false,
};

pub const MARS: BodyPreset = BodyPreset {
    name: "Mars",
    distance_au: -1.524,
    radius: 12.0,
    color: [200, 40, 50],
    mass: 6.39e23,
    velocity_y: 24.077e3,
    central: false,
};

/// Sun, Mercury, Venus, Earth and Mars, in that order.
pub static INNER_PLANETS: &[BodyPreset] = &[SUN, MERCURY, VENUS, EARTH, MARS];

/// Build the inner solar system.
pub fn inner_planets() -> Result<Vec<Body>, InvalidBodyError> {
    INNER_PLANETS.iter().map(BodyPreset::build).collect()
}
