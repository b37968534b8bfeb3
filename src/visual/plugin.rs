use crate::game::{setup_level_library, GameSession, LevelTracker};
use crate::visual::board::{rebuild_board, setup_session, spawn_board, BoardRebuild, RebuildReason};
use crate::visual::edges::{draw_edges, draw_selection_ring};
use crate::visual::hud::{
    position_hud, spawn_hud, update_banner, update_level_text, update_moves_text,
};
use crate::visual::interactions::{handle_pointer_input, handle_restart_key, watch_resize};
use crate::visual::nodes::{update_node_visuals, update_value_labels};
use bevy::prelude::*;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BoardRebuild>()
            // Load the level library first, then roll and spawn the opening board
            .add_systems(
                Startup,
                (setup_level_library, setup_session, spawn_board, spawn_hud).chain(),
            )
            // Game-state advancement is throttled; drawing runs every frame
            .add_systems(FixedUpdate, advance_celebration)
            .add_systems(
                Update,
                (
                    // Player input
                    handle_pointer_input,
                    handle_restart_key,
                    watch_resize,
                    // Board lifecycle
                    rebuild_board,
                    // Node visuals
                    update_node_visuals,
                    update_value_labels,
                    draw_edges,
                    draw_selection_ring,
                    // HUD updates
                    position_hud,
                    update_level_text,
                    update_moves_text,
                    update_banner,
                )
                    .chain(),
            );
    }
}

/// Tick the celebration fade and move on once the advance delay fires
fn advance_celebration(
    time: Res<Time>,
    mut session: ResMut<GameSession>,
    mut tracker: ResMut<LevelTracker>,
    mut rebuilds: MessageWriter<BoardRebuild>,
) {
    if !session.is_celebrating() {
        return;
    }

    if !session.tick_celebration(time.delta()) {
        return;
    }

    if tracker.advance() {
        info!("Advancing to level {}", tracker.level_number());
        rebuilds.write(BoardRebuild {
            reason: RebuildReason::LevelAdvance,
        });
    } else {
        info!("🎉 All levels complete!");
        session.complete_all();
    }
}
