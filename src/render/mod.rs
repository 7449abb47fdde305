//! Rendering systems for the planetary simulation.
//!
//! Draws each body as a filled circle, its trailing orbit path, and a
//! distance caption. Everything is read back from the [`SolarSystem`]
//! resource after the physics tick.

mod bodies;
mod labels;
mod orbits;

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use self::bodies::{spawn_bodies, sync_body_transforms};
use self::labels::draw_body_labels;
use self::orbits::{configure_trail_gizmos, draw_orbit_trails};
use crate::types::ScreenProjection;

pub use self::bodies::BodyIndex;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin::default());
        }

        app.init_resource::<ViewSettings>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_camera, spawn_bodies, configure_trail_gizmos))
            .add_systems(Update, (sync_body_transforms, draw_orbit_trails).chain())
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for drawing the simulation.
#[derive(Resource, Clone, Debug)]
pub struct ViewSettings {
    /// Meters-to-pixels mapping.
    pub projection: ScreenProjection,
    /// Orbit trail line width in pixels.
    pub trail_width: f32,
    /// Caption font size in points.
    pub font_size: f32,
    pub show_labels: bool,
    pub show_trails: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            projection: ScreenProjection::default(),
            trail_width: 2.0,
            font_size: 20.0,
            show_labels: true,
            show_trails: true,
        }
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// Body circles, above the gizmo trails at z = 0.
    pub const BODY: f32 = 1.0;
}

/// Spawn the 2D camera centred on the window.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
