use crate::game::{BoardPlan, GameSession, LevelLibrary, LevelTracker};
use crate::visual::layout::RingLayout;
use crate::visual::nodes::{srgba_from_vec, value_to_color, GraphNode, NodeVisual, ValueLabel};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const NODE_Z: f32 = 1.0;
const LABEL_Z: f32 = 0.1;
const VALUE_FONT_FRACTION: f32 = 0.8;
const IDEAL_FONT_FRACTION: f32 = 0.48;
const IDEAL_LABEL_DROP: f32 = 0.8;

/// Why the board is being torn down and respawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildReason {
    Restart,
    Resize,
    LevelAdvance,
}

/// Request to roll a fresh board for the current level and respawn it
#[derive(Message, Debug, Clone, Copy)]
pub struct BoardRebuild {
    pub reason: RebuildReason,
}

/// Everything spawned for one board carries this marker
#[derive(Component)]
pub struct BoardEntity;

/// Roll a fresh board for the tracker's current level
fn plan_for(library: &LevelLibrary, tracker: &LevelTracker) -> Option<BoardPlan> {
    let config = library.level(tracker.current_index())?;
    let mut rng = StdRng::from_os_rng();
    Some(config.generator().generate(&mut rng))
}

/// System: build the opening board and park the session resources
pub fn setup_session(mut commands: Commands, library: Res<LevelLibrary>) {
    let tracker = LevelTracker::new(library.level_count());
    let Some(plan) = plan_for(&library, &tracker) else {
        return;
    };

    info!(
        "✓ Level {} board ready: {} nodes, {} edges, {} tokens pooled on node {}",
        tracker.level_number(),
        plan.node_count,
        plan.edges.len(),
        plan.total_tokens(),
        plan.start
    );

    commands.insert_resource(GameSession::new(&plan));
    commands.insert_resource(tracker);
}

/// System: size the ring to the window and spawn the level entities
pub fn spawn_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    session: Res<GameSession>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let layout = RingLayout::fit(
        session.state().topology().node_count(),
        window.width(),
        window.height(),
    );
    commands.insert_resource(layout);

    spawn_board_entities(&mut commands, &mut meshes, &mut materials, &session, &layout);
}

/// System: regenerate the level and respawn it when a rebuild is requested
pub fn rebuild_board(
    mut commands: Commands,
    mut rebuilds: MessageReader<BoardRebuild>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut session: ResMut<GameSession>,
    library: Res<LevelLibrary>,
    tracker: Res<LevelTracker>,
    windows: Query<&Window>,
    board_entities: Query<Entity, With<BoardEntity>>,
) {
    let Some(rebuild) = rebuilds.read().last().copied() else {
        return;
    };

    let Ok(window) = windows.single() else {
        return;
    };

    let Some(plan) = plan_for(&library, &tracker) else {
        return;
    };
    session.load(&plan);

    let layout = RingLayout::fit(plan.node_count, window.width(), window.height());
    commands.insert_resource(layout);

    for entity in &board_entities {
        commands.entity(entity).despawn();
    }
    spawn_board_entities(&mut commands, &mut meshes, &mut materials, &session, &layout);

    match rebuild.reason {
        RebuildReason::Resize => {
            debug!("↻ Board refit after resize: ring radius {}", layout.ring_radius);
        }
        RebuildReason::Restart => {
            info!("↻ Level {} restarted", tracker.level_number());
        }
        RebuildReason::LevelAdvance => {
            info!(
                "✓ Level {} board ready: {} nodes, {} edges, {} tokens pooled on node {}",
                tracker.level_number(),
                plan.node_count,
                plan.edges.len(),
                plan.total_tokens(),
                plan.start
            );
        }
    }
}

/// Spawn one circle mesh per node with its count labels as children
fn spawn_board_entities(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    session: &GameSession,
    layout: &RingLayout,
) {
    let state = session.state();

    for node in state.topology().node_ids() {
        let position = layout.position_of(node);
        let value = state.value(node);
        let ideal = state.ideal(node);
        let color = value_to_color(value, ideal);

        commands
            .spawn((
                GraphNode { node_id: node },
                NodeVisual { current_color: color },
                BoardEntity,
                Mesh2d(meshes.add(Circle::new(layout.node_radius))),
                MeshMaterial2d(materials.add(ColorMaterial::from(srgba_from_vec(color)))),
                Transform::from_translation(position.extend(NODE_Z)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    ValueLabel { node_id: node },
                    Text2d::new(value.to_string()),
                    TextFont {
                        font_size: layout.node_radius * VALUE_FONT_FRACTION,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_translation(Vec3::new(0.0, 0.0, LABEL_Z)),
                ));
                parent.spawn((
                    Text2d::new(format!("/{ideal}")),
                    TextFont {
                        font_size: layout.node_radius * IDEAL_FONT_FRACTION,
                        ..default()
                    },
                    TextColor(Color::WHITE.with_alpha(0.6)),
                    Transform::from_translation(Vec3::new(
                        0.0,
                        -layout.node_radius * IDEAL_LABEL_DROP,
                        LABEL_Z,
                    )),
                ));
            });
    }
}
