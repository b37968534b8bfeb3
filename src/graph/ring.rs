use std::f32::consts::TAU;
use std::fmt;

/// Node identifier, an index into the ring (0..node_count)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Minimal circular hop distance between two seats on a ring of
/// `node_count` nodes. Neighboring seats are 1 apart; the farthest pair
/// is `node_count / 2` apart.
pub fn ring_distance(a: NodeId, b: NodeId, node_count: usize) -> usize {
    assert!(a.index() < node_count && b.index() < node_count);

    let raw = a.index().abs_diff(b.index());
    raw.min(node_count - raw)
}

/// Angle (radians) of a node's seat when `node_count` nodes are spread
/// evenly around a circle, node 0 at angle 0.
pub fn ring_angle(index: usize, node_count: usize) -> f32 {
    assert!(node_count > 0);

    index as f32 / node_count as f32 * TAU
}
