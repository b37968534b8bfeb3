use crate::graph::{ring_angle, NodeId};
use bevy::prelude::*;

/// Ring radius as a fraction of the window's short side
const RING_RADIUS_FRACTION: f32 = 0.32;

/// Node circle radius as a fraction of the ring radius
const NODE_RADIUS_FRACTION: f32 = 0.1;

/// Nodes never grow past this fraction of the half-gap between
/// neighboring seats, so crowded rings stay readable
const NODE_SEAT_LIMIT: f32 = 0.8;

/// Where every node of the current board sits on screen.
/// World origin is the board center; world units are logical pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RingLayout {
    pub node_count: usize,
    pub ring_radius: f32,
    pub node_radius: f32,
}

impl RingLayout {
    /// Fit the ring to a window, keeping seats clear of each other
    pub fn fit(node_count: usize, window_width: f32, window_height: f32) -> Self {
        assert!(node_count > 0, "cannot lay out an empty ring");

        let ring_radius = window_width.min(window_height) * RING_RADIUS_FRACTION;

        // Half the straight-line distance between neighboring seats
        let half_chord = ring_radius * (std::f32::consts::PI / node_count as f32).sin();
        let node_radius = (ring_radius * NODE_RADIUS_FRACTION).min(half_chord * NODE_SEAT_LIMIT);

        RingLayout {
            node_count,
            ring_radius,
            node_radius,
        }
    }

    /// World position of a seat. Node 0 sits at angle zero, the rest
    /// follow counterclockwise at even spacing.
    pub fn position_of(&self, node: NodeId) -> Vec2 {
        let angle = ring_angle(node.index(), self.node_count);
        Vec2::new(angle.cos(), angle.sin()) * self.ring_radius
    }

    /// The seat under a world-space point, if the point falls inside
    /// that seat's circle
    pub fn node_at(&self, point: Vec2) -> Option<NodeId> {
        (0..self.node_count)
            .map(NodeId)
            .min_by(|&a, &b| {
                let dist_a = point.distance_squared(self.position_of(a));
                let dist_b = point.distance_squared(self.position_of(b));
                dist_a.partial_cmp(&dist_b).unwrap()
            })
            .filter(|&node| point.distance(self.position_of(node)) <= self.node_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_the_short_side() {
        let landscape = RingLayout::fit(8, 1000.0, 600.0);
        let portrait = RingLayout::fit(8, 600.0, 1000.0);

        assert_eq!(landscape.ring_radius, portrait.ring_radius);
        assert_eq!(landscape.ring_radius, 600.0 * RING_RADIUS_FRACTION);
    }

    #[test]
    fn test_seats_sit_on_the_ring() {
        let layout = RingLayout::fit(8, 800.0, 800.0);

        for i in 0..8 {
            let distance = layout.position_of(NodeId(i)).length();
            assert!(
                (distance - layout.ring_radius).abs() < 1e-3,
                "seat {i} drifted off the ring"
            );
        }

        // Seat 0 at angle zero, seat 2 a quarter turn on
        let first = layout.position_of(NodeId(0));
        assert!((first.x - layout.ring_radius).abs() < 1e-3);
        assert!(first.y.abs() < 1e-3);

        let quarter = layout.position_of(NodeId(2));
        assert!(quarter.x.abs() < 1e-3);
        assert!((quarter.y - layout.ring_radius).abs() < 1e-3);
    }

    #[test]
    fn test_node_at_hits_inside_the_seat_circle() {
        let layout = RingLayout::fit(8, 800.0, 800.0);
        let seat = layout.position_of(NodeId(3));

        assert_eq!(layout.node_at(seat), Some(NodeId(3)));
        assert_eq!(
            layout.node_at(seat + Vec2::new(layout.node_radius * 0.9, 0.0)),
            Some(NodeId(3))
        );
        assert_eq!(
            layout.node_at(seat + Vec2::new(layout.node_radius * 1.1, 0.0)),
            None
        );
    }

    #[test]
    fn test_node_at_misses_the_ring_center() {
        let layout = RingLayout::fit(8, 800.0, 800.0);
        assert_eq!(layout.node_at(Vec2::ZERO), None);
    }

    #[test]
    fn test_node_at_picks_the_nearest_seat() {
        let layout = RingLayout::fit(8, 800.0, 800.0);

        let near_one = layout.position_of(NodeId(1)) + Vec2::splat(layout.node_radius * 0.3);
        assert_eq!(layout.node_at(near_one), Some(NodeId(1)));
    }

    #[test]
    fn test_crowded_rings_shrink_their_seats() {
        let sparse = RingLayout::fit(6, 800.0, 800.0);
        let crowded = RingLayout::fit(40, 800.0, 800.0);

        assert!(crowded.node_radius < sparse.node_radius);

        // Neighboring seats never overlap
        let gap = crowded
            .position_of(NodeId(0))
            .distance(crowded.position_of(NodeId(1)));
        assert!(crowded.node_radius * 2.0 < gap);
    }
}
