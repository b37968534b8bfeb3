use super::ring::NodeId;
use std::fmt;

/// Token counts for every node on the board, indexed by NodeId.
/// Length is fixed at construction and matches the topology's node count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens(Vec<u32>);

impl Tokens {
    /// Create from explicit per-node counts
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "Tokens must cover at least one node");
        Tokens(values)
    }

    /// Every node holding the same count
    pub fn uniform(node_count: usize, value: u32) -> Self {
        assert!(node_count > 0, "Tokens must cover at least one node");
        Tokens(vec![value; node_count])
    }

    /// The entire supply stacked on one node, every other node empty
    pub fn concentrated(node_count: usize, node: NodeId, total: u32) -> Self {
        let mut tokens = Tokens::uniform(node_count, 0);
        tokens.set(node, total);
        tokens
    }

    pub fn node_count(&self) -> usize {
        self.0.len()
    }

    /// Get the count for a specific node
    pub fn get(&self, node: NodeId) -> u32 {
        self.0[node.index()]
    }

    /// Set the count for a specific node
    pub fn set(&mut self, node: NodeId, value: u32) {
        self.0[node.index()] = value;
    }

    /// Take one token from a node. The node must hold at least one.
    pub fn remove_one(&mut self, node: NodeId) {
        assert!(
            self.0[node.index()] > 0,
            "node {node} has no tokens to remove"
        );
        self.0[node.index()] -= 1;
    }

    /// Give one token to a node
    pub fn add_one(&mut self, node: NodeId) {
        self.0[node.index()] += 1;
    }

    /// Check if every node matches its target count
    pub fn matches(&self, target: &Tokens) -> bool {
        self.0 == target.0
    }

    /// Sum of all tokens on the board
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<u32>> for Tokens {
    fn from(vec: Vec<u32>) -> Self {
        Tokens::new(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_creation() {
        let t = Tokens::new(vec![1, 2, 3, 4]);
        assert_eq!(t.node_count(), 4);
        assert_eq!(t.get(NodeId(0)), 1);
        assert_eq!(t.get(NodeId(3)), 4);

        let u = Tokens::uniform(8, 2);
        assert_eq!(u.node_count(), 8);
        assert_eq!(u.total(), 16);

        let c = Tokens::concentrated(8, NodeId(3), 16);
        assert_eq!(c.get(NodeId(3)), 16);
        assert_eq!(c.get(NodeId(0)), 0);
        assert_eq!(c.total(), 16);
    }

    #[test]
    fn test_tokens_move_one() {
        let mut t = Tokens::uniform(4, 2);

        t.remove_one(NodeId(1));
        t.add_one(NodeId(2));

        assert_eq!(t.get(NodeId(1)), 1);
        assert_eq!(t.get(NodeId(2)), 3);
        assert_eq!(t.total(), 8, "Moving a token never changes the total");
    }

    #[test]
    #[should_panic(expected = "no tokens to remove")]
    fn test_remove_from_empty_node_panics() {
        let mut t = Tokens::new(vec![0, 3]);
        t.remove_one(NodeId(0));
    }

    #[test]
    fn test_matches_target() {
        let target = Tokens::uniform(4, 3);

        let mut t = Tokens::new(vec![3, 3, 2, 4]);
        assert!(!t.matches(&target));

        t.remove_one(NodeId(3));
        t.add_one(NodeId(2));
        assert!(t.matches(&target));
    }

    #[test]
    fn test_display_format() {
        let t = Tokens::new(vec![0, 12, 3]);
        assert_eq!(t.to_string(), "[0 12 3]");
    }
}
