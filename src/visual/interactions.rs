use crate::camera::MainCamera;
use crate::game::{GameSession, LevelTracker};
use crate::graph::MoveResult;
use crate::input::{PointerButton, PointerEvent};
use crate::visual::board::{BoardRebuild, RebuildReason};
use crate::visual::hud::restart_hit_rect;
use crate::visual::layout::RingLayout;
use bevy::prelude::*;
use bevy::window::WindowResized;

/// System: resolve pointer presses into selections, transfers and restarts
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    mut rebuilds: MessageWriter<BoardRebuild>,
    mut session: ResMut<GameSession>,
    tracker: Res<LevelTracker>,
    layout: Res<RingLayout>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for event in pointer_events.read() {
        let Some(world_pos) = event.to_world(camera, camera_transform) else {
            continue;
        };

        if event.button == PointerButton::Primary
            && restart_hit_rect(window).contains(world_pos)
        {
            info!("↻ Restart requested");
            rebuilds.write(BoardRebuild {
                reason: RebuildReason::Restart,
            });
            continue;
        }

        let Some(node) = layout.node_at(world_pos) else {
            // Clicks on empty space keep the current selection
            continue;
        };

        let result = match event.button {
            PointerButton::Primary => session.select(node),
            PointerButton::Secondary => session.transfer(node),
        };

        match result {
            Some(MoveResult::Selected(source)) => {
                info!("Selected node {} as transfer source", source);
            }
            Some(MoveResult::Transferred { from, to }) => {
                info!("Moved token from {} to {}", from, to);
            }
            Some(MoveResult::BoardSolved { from, to }) => {
                info!(
                    "🎉 Level {} solved in {} moves! (final transfer {} to {})",
                    tracker.level_number(),
                    session.state().moves(),
                    from,
                    to
                );
            }
            Some(MoveResult::Invalid(_)) | None => {}
        }
    }
}

/// System: R restarts the current level from the keyboard
pub fn handle_restart_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut rebuilds: MessageWriter<BoardRebuild>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        info!("↻ Restart requested");
        rebuilds.write(BoardRebuild {
            reason: RebuildReason::Restart,
        });
    }
}

/// System: refit the board whenever the window changes size
pub fn watch_resize(
    mut resize_events: MessageReader<WindowResized>,
    mut rebuilds: MessageWriter<BoardRebuild>,
) {
    if resize_events.read().last().is_some() {
        rebuilds.write(BoardRebuild {
            reason: RebuildReason::Resize,
        });
    }
}
