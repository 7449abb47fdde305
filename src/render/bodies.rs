//! Body circle spawning and transform sync.

use bevy::prelude::*;

use super::{ViewSettings, z_layers};
use crate::physics::SolarSystem;

/// Index of the body this entity draws, into [`SolarSystem::bodies`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyIndex(pub usize);

/// Spawn one filled circle per body.
pub(super) fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    system: Res<SolarSystem>,
    settings: Res<ViewSettings>,
) {
    for (i, body) in system.bodies().iter().enumerate() {
        let state = body.current_display_state(&settings.projection);
        let pos = settings.projection.to_world_2d(state.screen_position);

        commands.spawn((
            Mesh2d(meshes.add(Circle::new(state.radius))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(state.color))),
            Transform::from_xyz(pos.x, pos.y, z_layers::BODY),
            BodyIndex(i),
        ));
    }

    info!("Spawned {} bodies", system.bodies().len());
}

/// Move body circles to their current simulated positions.
pub(super) fn sync_body_transforms(
    system: Res<SolarSystem>,
    settings: Res<ViewSettings>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        let Some(body) = system.bodies().get(*i) else {
            continue;
        };
        let screen = settings.projection.to_screen(body.position());
        let pos = settings.projection.to_world_2d(screen);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
