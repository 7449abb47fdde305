//! Core physics constants and shared simulation resources.

use bevy::math::{DVec2, Vec2};
use bevy::prelude::*;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67428e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 149.6e9;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Default simulation timestep: half a day per tick.
pub const DEFAULT_TIMESTEP: f64 = 0.5 * SECONDS_PER_DAY;

/// Window width in pixels.
pub const WINDOW_WIDTH: u32 = 800;

/// Window height in pixels.
pub const WINDOW_HEIGHT: u32 = 800;

/// Pixels per meter: 1 AU spans 250 px.
pub const PIXELS_PER_METER: f64 = 250.0 / AU_TO_METERS;

/// Maps simulation meters onto window pixels.
///
/// Screen space has its origin in the top-left corner of the window with y
/// pointing down, so the simulation origin lands at the window center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenProjection {
    /// Pixels per meter.
    pub scale: f64,
    /// Window width in pixels.
    pub width: f32,
    /// Window height in pixels.
    pub height: f32,
}

impl Default for ScreenProjection {
    fn default() -> Self {
        Self {
            scale: PIXELS_PER_METER,
            width: WINDOW_WIDTH as f32,
            height: WINDOW_HEIGHT as f32,
        }
    }
}

impl ScreenProjection {
    /// Project a simulation position (meters) into screen pixels.
    pub fn to_screen(&self, position: DVec2) -> Vec2 {
        let scaled = position * self.scale;
        Vec2::new(
            scaled.x as f32 + self.width / 2.0,
            scaled.y as f32 + self.height / 2.0,
        )
    }

    /// Convert screen pixels into Bevy 2D world coordinates.
    ///
    /// The 2D camera is centred on the origin with y pointing up.
    pub fn to_world_2d(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width / 2.0, self.height / 2.0 - screen.y)
    }
}

/// Simulation progress resource.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationClock {
    /// Number of ticks committed so far.
    pub ticks: u64,
    /// Simulated seconds elapsed since start.
    pub elapsed: f64,
    /// Set once a tick fails; no further ticks are attempted.
    pub halted: bool,
}

impl SimulationClock {
    /// Elapsed simulation time in days.
    pub fn days(&self) -> f64 {
        self.elapsed / SECONDS_PER_DAY
    }
}
