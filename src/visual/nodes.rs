use crate::game::GameSession;
use crate::graph::NodeId;
use bevy::prelude::*;

const NODE_RED: Vec4 = Vec4::new(0.906, 0.298, 0.235, 1.0);
const NODE_ORANGE: Vec4 = Vec4::new(0.902, 0.494, 0.133, 1.0);
const NODE_YELLOW: Vec4 = Vec4::new(0.953, 0.612, 0.071, 1.0);
const NODE_GREEN: Vec4 = Vec4::new(0.180, 0.800, 0.443, 1.0);
const NODE_PURPLE: Vec4 = Vec4::new(0.608, 0.349, 0.714, 1.0);

/// Marker tying an entity to its seat on the ring
#[derive(Component)]
pub struct GraphNode {
    pub node_id: NodeId,
}

/// Marker for the text showing a node's current count
#[derive(Component)]
pub struct ValueLabel {
    pub node_id: NodeId,
}

/// Visual animation state for a node
#[derive(Component, Debug)]
pub struct NodeVisual {
    /// Color shown last frame, eased toward the state color every tick
    pub current_color: Vec4,
}

/// Color for a node holding `value` tokens against a target of `ideal`.
/// The ramp climbs red, orange, yellow as the count approaches the
/// target, lands on green exactly at it and turns purple past it.
pub fn value_to_color(value: u32, ideal: u32) -> Vec4 {
    if value == ideal {
        return NODE_GREEN;
    }
    if value > ideal {
        return NODE_PURPLE;
    }

    // value < ideal from here; compare thirds without float division
    if value * 3 < ideal {
        NODE_RED
    } else if value * 3 < ideal * 2 {
        NODE_ORANGE
    } else {
        NODE_YELLOW
    }
}

/// Colors travel as sRGB components in a Vec4 so they can lerp
pub fn srgba_from_vec(color: Vec4) -> Color {
    Color::srgba(color.x, color.y, color.z, color.w)
}

/// System: ease node colors toward their state color and repaint materials
pub fn update_node_visuals(
    time: Res<Time>,
    session: Res<GameSession>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut nodes: Query<(&GraphNode, &mut NodeVisual, &MeshMaterial2d<ColorMaterial>)>,
) {
    let dt = time.delta_secs();
    let state = session.state();

    for (graph_node, mut visual, material_handle) in &mut nodes {
        let value = state.value(graph_node.node_id);
        let ideal = state.ideal(graph_node.node_id);
        let target = value_to_color(value, ideal);

        // Fast ease-out, quick at first and settling near the target
        visual.current_color = visual.current_color.lerp(target, (dt * 8.0).min(1.0));

        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = srgba_from_vec(visual.current_color);
        }
    }
}

/// System: rewrite count labels when the state changes
pub fn update_value_labels(session: Res<GameSession>, mut labels: Query<(&ValueLabel, &mut Text2d)>) {
    if !session.is_changed() {
        return;
    }

    let state = session.state();
    for (label, mut text) in &mut labels {
        text.0 = state.value(label.node_id).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ramp_thirds() {
        // Target of 3: one token per third
        assert_eq!(value_to_color(0, 3), NODE_RED);
        assert_eq!(value_to_color(1, 3), NODE_ORANGE);
        assert_eq!(value_to_color(2, 3), NODE_YELLOW);
        assert_eq!(value_to_color(3, 3), NODE_GREEN);
        assert_eq!(value_to_color(4, 3), NODE_PURPLE);

        // Target of 2: the halfway point reads orange
        assert_eq!(value_to_color(0, 2), NODE_RED);
        assert_eq!(value_to_color(1, 2), NODE_ORANGE);
        assert_eq!(value_to_color(2, 2), NODE_GREEN);
    }

    #[test]
    fn test_green_means_exact_only() {
        assert_eq!(value_to_color(16, 2), NODE_PURPLE);
        assert_ne!(value_to_color(15, 16), NODE_GREEN);
        assert_eq!(value_to_color(16, 16), NODE_GREEN);
        assert_ne!(value_to_color(17, 16), NODE_GREEN);
    }
}
