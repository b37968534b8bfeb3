use super::ring::NodeId;

use std::collections::HashSet;
use std::fmt;

/// An undirected link between two nodes
/// Invariant: always stored in canonical form with a < b
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    /// Create a new edge, automatically ordering the endpoints
    pub fn new(x: NodeId, y: NodeId) -> Self {
        assert!(x != y, "self-loop edge {x}-{y}");
        if x < y { Edge { a: x, b: y } } else { Edge { a: y, b: x } }
    }

    /// Check if this edge touches a given node
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Get the endpoint opposite to `node`, if `node` is on this edge
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// A set of undirected edges with O(1) membership checks.
/// Also keeps insertion order so rendering iterates a stable sequence.
/// There is no removal: level graphs are rebuilt from scratch, never edited.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: HashSet<Edge>,
    in_order: Vec<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        EdgeSet {
            edges: HashSet::new(),
            in_order: Vec::new(),
        }
    }

    /// Add an edge to the set
    /// Returns true if the edge was newly inserted, false if it already existed
    pub fn add(&mut self, edge: Edge) -> bool {
        if self.edges.insert(edge) {
            self.in_order.push(edge);
            true
        } else {
            false
        }
    }

    /// Check if an edge exists in the set
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Check if two nodes are directly linked
    pub fn linked(&self, x: NodeId, y: NodeId) -> bool {
        x != y && self.edges.contains(&Edge::new(x, y))
    }

    /// Get the number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the edge set is empty
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate edges in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.in_order.iter()
    }

    /// Count how many edges are incident to a given node
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.contains_node(node))
            .count()
    }

    /// All nodes directly linked to `node`, in insertion order
    pub fn neighbors_of(&self, node: NodeId) -> Vec<NodeId> {
        self.in_order
            .iter()
            .filter_map(|edge| edge.other_end(node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_form() {
        let e1 = Edge::new(NodeId(1), NodeId(3));
        let e2 = Edge::new(NodeId(3), NodeId(1));

        assert_eq!(e1, e2, "Edges should be equal regardless of order");
        assert_eq!(e1.a, NodeId(1));
        assert_eq!(e1.b, NodeId(3));
    }

    #[test]
    fn test_edge_endpoints() {
        let edge = Edge::new(NodeId(1), NodeId(3));

        assert!(edge.contains_node(NodeId(1)));
        assert!(edge.contains_node(NodeId(3)));
        assert!(!edge.contains_node(NodeId(2)));

        assert_eq!(edge.other_end(NodeId(1)), Some(NodeId(3)));
        assert_eq!(edge.other_end(NodeId(3)), Some(NodeId(1)));
        assert_eq!(edge.other_end(NodeId(2)), None);
    }

    #[test]
    fn test_edge_set_basic_ops() {
        let mut set = EdgeSet::new();

        let e1 = Edge::new(NodeId(0), NodeId(1));
        let e2 = Edge::new(NodeId(1), NodeId(2));

        assert!(set.add(e1));
        assert!(set.add(e2));
        assert!(!set.add(e1), "Adding duplicate should return false");

        assert_eq!(set.len(), 2);
        assert!(set.contains(&e1));
        assert!(set.contains(&e2));
    }

    #[test]
    fn test_linked_is_symmetric() {
        let mut set = EdgeSet::new();
        set.add(Edge::new(NodeId(2), NodeId(5)));

        assert!(set.linked(NodeId(2), NodeId(5)));
        assert!(set.linked(NodeId(5), NodeId(2)));
        assert!(!set.linked(NodeId(2), NodeId(4)));
        // A node is never linked to itself
        assert!(!set.linked(NodeId(2), NodeId(2)));
    }

    #[test]
    fn test_edge_set_insertion_order() {
        let mut set = EdgeSet::new();

        let e1 = Edge::new(NodeId(0), NodeId(1));
        let e2 = Edge::new(NodeId(1), NodeId(2));
        let e3 = Edge::new(NodeId(2), NodeId(3));

        set.add(e1);
        set.add(e2);
        set.add(e3);
        // Re-adding must not duplicate the iteration entry
        set.add(Edge::new(NodeId(1), NodeId(0)));

        let order: Vec<_> = set.iter().copied().collect();
        assert_eq!(order, vec![e1, e2, e3]);
    }

    #[test]
    fn test_edge_set_degree_and_neighbors() {
        let mut set = EdgeSet::new();

        set.add(Edge::new(NodeId(0), NodeId(1)));
        set.add(Edge::new(NodeId(0), NodeId(4)));
        set.add(Edge::new(NodeId(0), NodeId(5)));
        set.add(Edge::new(NodeId(1), NodeId(5)));

        assert_eq!(set.degree(NodeId(0)), 3);
        assert_eq!(set.degree(NodeId(1)), 2);
        assert_eq!(set.degree(NodeId(5)), 2);
        assert_eq!(set.degree(NodeId(7)), 0);

        assert_eq!(
            set.neighbors_of(NodeId(0)),
            vec![NodeId(1), NodeId(4), NodeId(5)]
        );
        assert_eq!(set.neighbors_of(NodeId(5)), vec![NodeId(0), NodeId(1)]);
        assert!(set.neighbors_of(NodeId(7)).is_empty());
    }
}
