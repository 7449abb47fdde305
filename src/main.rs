//! Inner Planets - N-body gravity simulation
//!
//! Opens a window showing the Sun and the four inner planets orbiting under
//! mutual gravitation. Close the window to quit.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use inner_planets::physics::{PhysicsPlugin, SolarSystem};
use inner_planets::render::RenderPlugin;
use inner_planets::scenarios::inner_planets;
use inner_planets::types::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> AppExit {
    let system = match inner_planets().and_then(SolarSystem::new) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("Invalid initial configuration: {err}");
            return AppExit::from_code(1);
        }
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "The Inner Planets".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Insert resources before plugins that depend on them
        .insert_resource(system)
        .add_plugins((PhysicsPlugin, RenderPlugin))
        .run();

    match &exit {
        AppExit::Success => info!("Program exited successfully"),
        AppExit::Error(code) => error!("Exited with code {code}"),
    }
    exit
}
