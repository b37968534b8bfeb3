use bevy::prelude::*;

mod camera;
mod game;
mod graph;
mod input;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;

use crate::visual::BoardPlugin;

// Background #1a1a2e
const BACKGROUND_COLOR: Color = Color::srgb(0.102, 0.102, 0.180);

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Flux Ring".into(),
            resolution: WindowResolution::new(800, 800),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(BACKGROUND_COLOR))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(BoardPlugin);

    app.run();
}
