use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Marker for the one camera pointer events unproject against
#[derive(Component)]
pub struct MainCamera;

/// A plain 2d camera at the origin. World units are logical pixels and
/// the board is centered on (0, 0), so no projection tuning is needed.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}
