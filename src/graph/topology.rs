use super::edge::{Edge, EdgeSet};
use super::ring::NodeId;

use std::collections::VecDeque;

/// The fixed shape of one board: how many nodes sit on the ring and
/// which pairs are linked. This represents ONLY adjacency, not token counts.
#[derive(Debug, Clone)]
pub struct Topology {
    node_count: usize,
    edges: EdgeSet,
}

impl Topology {
    /// Create a topology from an already-built edge set
    pub fn new(node_count: usize, edges: EdgeSet) -> Self {
        assert!(node_count > 0, "topology needs at least one node");
        for edge in edges.iter() {
            assert!(
                edge.b.index() < node_count,
                "edge {edge} references node outside 0..{node_count}"
            );
        }

        Topology { node_count, edges }
    }

    /// Create a topology from raw index pairs, deduplicating as it goes
    pub fn from_pairs(node_count: usize, pairs: &[[usize; 2]]) -> Self {
        let mut edges = EdgeSet::new();
        for &[a, b] in pairs {
            edges.add(Edge::new(NodeId(a), NodeId(b)));
        }
        Self::new(node_count, edges)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Iterate all node ids in ring order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count).map(NodeId)
    }

    /// Check if two nodes are directly linked
    pub fn linked(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.linked(a, b)
    }

    /// All nodes directly linked to `node`
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.edges.neighbors_of(node)
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.edges.degree(node)
    }

    /// Breadth-first reachability check from node 0.
    /// Every board must be connected or some nodes could never be balanced.
    pub fn is_connected(&self) -> bool {
        let mut seen = vec![false; self.node_count];
        let mut queue = VecDeque::new();

        seen[0] = true;
        queue.push_back(NodeId(0));

        while let Some(node) = queue.pop_front() {
            for neighbor in self.edges.neighbors_of(node) {
                if !seen[neighbor.index()] {
                    seen[neighbor.index()] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        seen.iter().all(|&reached| reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_deduplicates() {
        let topo = Topology::from_pairs(4, &[[0, 1], [1, 0], [1, 2], [2, 3]]);

        assert_eq!(topo.node_count(), 4);
        assert_eq!(topo.edge_count(), 3);
        assert!(topo.linked(NodeId(0), NodeId(1)));
        assert!(topo.linked(NodeId(1), NodeId(2)));
        assert!(!topo.linked(NodeId(0), NodeId(2)));
    }

    #[test]
    fn test_neighbors_cover_both_directions() {
        let topo = Topology::from_pairs(5, &[[0, 1], [0, 4], [2, 0]]);

        assert_eq!(
            topo.neighbors(NodeId(0)),
            vec![NodeId(1), NodeId(4), NodeId(2)]
        );
        assert_eq!(topo.neighbors(NodeId(4)), vec![NodeId(0)]);
        assert_eq!(topo.degree(NodeId(0)), 3);
        assert_eq!(topo.degree(NodeId(3)), 0);
    }

    #[test]
    fn test_path_graph_is_connected() {
        let topo = Topology::from_pairs(4, &[[0, 1], [1, 2], [2, 3]]);
        assert!(topo.is_connected());
    }

    #[test]
    fn test_split_graph_is_not_connected() {
        // Two separate pairs, no bridge between them
        let topo = Topology::from_pairs(4, &[[0, 1], [2, 3]]);
        assert!(!topo.is_connected());
    }

    #[test]
    fn test_single_node_is_connected() {
        let topo = Topology::new(1, EdgeSet::new());
        assert!(topo.is_connected());
    }

    #[test]
    fn test_ring_with_chords_is_connected() {
        let mut pairs: Vec<[usize; 2]> = (0..12).map(|i| [i, (i + 1) % 12]).collect();
        pairs.push([0, 6]);
        pairs.push([3, 9]);

        let topo = Topology::from_pairs(12, &pairs);
        assert!(topo.is_connected());
        assert_eq!(topo.edge_count(), 14);
        assert_eq!(topo.degree(NodeId(0)), 3);
        assert_eq!(topo.degree(NodeId(1)), 2);
    }
}
