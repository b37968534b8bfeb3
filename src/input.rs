use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_systems(Update, (track_cursor_pos, collect_pointer_events));
    }
}

/// A single press on the window. Only presses matter here; the game has
/// no drag gestures, so moves and releases never become events.
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Window (logical) coordinates, origin top-left as the camera
    /// viewport expects
    pub position: Vec2,
    pub button: PointerButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button or a touch: picks the transfer source
    Primary,
    /// Right mouse button: sends a token
    Secondary,
}

impl PointerEvent {
    /// Convert window coords to world space using the 2d camera
    pub fn to_world(&self, camera: &Camera, camera_transform: &GlobalTransform) -> Option<Vec2> {
        camera
            .viewport_to_world_2d(camera_transform, self.position)
            .ok()
    }
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(p) = cursor.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                button: PointerButton::Primary,
            });
        }
        if mouse_buttons.just_pressed(MouseButton::Right) {
            out.write(PointerEvent {
                position: p,
                button: PointerButton::Secondary,
            });
        }
    }

    // Touch has no second button; a tap acts as the primary press
    for ev in touch_events.read() {
        if ev.phase == TouchPhase::Started {
            out.write(PointerEvent {
                position: ev.position,
                button: PointerButton::Primary,
            });
        }
    }
}
