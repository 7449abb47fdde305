//! Orbit trail rendering using Bevy Gizmos.
//!
//! Each body's recorded positions are drawn as an open polyline in the
//! body's color. Trails with two points or fewer are skipped.

use bevy::prelude::*;

use super::ViewSettings;
use crate::body::Body;
use crate::physics::SolarSystem;

/// Minimum number of recorded points before a trail is drawn.
const MIN_TRAIL_POINTS: usize = 3;

/// Apply the configured trail width to the default gizmo group.
pub(super) fn configure_trail_gizmos(
    mut config_store: ResMut<GizmoConfigStore>,
    settings: Res<ViewSettings>,
) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = settings.trail_width;
}

/// Trail points for a body in Bevy 2D world coordinates.
pub(super) fn trail_points(body: &Body, settings: &ViewSettings) -> Option<Vec<Vec2>> {
    if body.orbit_path().len() < MIN_TRAIL_POINTS {
        return None;
    }

    let projection = &settings.projection;
    Some(
        body.orbit_path()
            .iter()
            .map(|&p| projection.to_world_2d(projection.to_screen(p)))
            .collect(),
    )
}

/// Draw the trailing path of every body.
pub(super) fn draw_orbit_trails(
    mut gizmos: Gizmos,
    system: Res<SolarSystem>,
    settings: Res<ViewSettings>,
) {
    if !settings.show_trails {
        return;
    }

    for body in system.bodies() {
        if let Some(points) = trail_points(body, &settings) {
            gizmos.linestrip_2d(points, body.color());
        }
    }
}
