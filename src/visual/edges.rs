use crate::game::GameSession;
use crate::visual::layout::RingLayout;
use bevy::prelude::*;

const EDGE_COLOR: Color = Color::srgba(0.392, 0.392, 0.588, 0.3);
const SELECTION_PULSE_RATE: f32 = 3.0;
const SELECTION_RING_OFFSET_FRACTION: f32 = 0.32;
const SELECTION_PULSE_FRACTION: f32 = 0.2;

/// System: draw every edge as a faint line between its two seats
pub fn draw_edges(mut gizmos: Gizmos, session: Res<GameSession>, layout: Res<RingLayout>) {
    let topology = session.state().topology();
    for edge in topology.edges().iter() {
        gizmos.line_2d(
            layout.position_of(edge.a),
            layout.position_of(edge.b),
            EDGE_COLOR,
        );
    }
}

/// System: pulse a white ring around the selected source node
pub fn draw_selection_ring(
    mut gizmos: Gizmos,
    time: Res<Time>,
    session: Res<GameSession>,
    layout: Res<RingLayout>,
) {
    if !session.is_playing() {
        return;
    }
    let Some(selected) = session.state().selected() else {
        return;
    };

    let pulse = (time.elapsed_secs() * SELECTION_PULSE_RATE).sin();
    let radius = layout.node_radius
        * (1.0 + SELECTION_RING_OFFSET_FRACTION + SELECTION_PULSE_FRACTION * pulse);

    gizmos.circle_2d(
        Isometry2d::from_translation(layout.position_of(selected)),
        radius,
        Color::WHITE,
    );
}
