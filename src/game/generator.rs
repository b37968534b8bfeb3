use crate::graph::{ring_distance, Edge, EdgeSet, GameState, NodeId, Tokens, Topology};

use rand::prelude::*;
use rand::rngs::StdRng;

/// Everything needed to spawn one playable board
#[derive(Debug, Clone)]
pub struct BoardPlan {
    pub node_count: usize,
    pub edges: EdgeSet,
    pub start: NodeId,
    pub ideal_value: u32,
}

impl BoardPlan {
    /// The conserved token sum for this board
    pub fn total_tokens(&self) -> u32 {
        self.node_count as u32 * self.ideal_value
    }

    /// Build the playable state: the full supply stacked on the start
    /// node, every node aiming for the same ideal count.
    pub fn to_state(&self) -> GameState {
        let topology = Topology::new(self.node_count, self.edges.clone());
        let values = Tokens::concentrated(self.node_count, self.start, self.total_tokens());
        let ideals = Tokens::uniform(self.node_count, self.ideal_value);

        GameState::new(topology, values, ideals)
    }
}

/// A strategy for producing board shapes.
/// Object-safe so a level config can hand back whichever strategy it uses.
pub trait GraphGenerator {
    fn generate(&self, rng: &mut StdRng) -> BoardPlan;
}

/// Reproduces a hand-authored link list exactly, every time
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    node_count: usize,
    ideal_value: u32,
    start: NodeId,
    links: Vec<[usize; 2]>,
}

impl FixedGenerator {
    pub fn new(node_count: usize, ideal_value: u32, start_node: usize, links: Vec<[usize; 2]>) -> Self {
        assert!(start_node < node_count, "start node outside the board");

        FixedGenerator {
            node_count,
            ideal_value,
            start: NodeId(start_node),
            links,
        }
    }
}

impl GraphGenerator for FixedGenerator {
    fn generate(&self, _rng: &mut StdRng) -> BoardPlan {
        let mut edges = EdgeSet::new();
        for &[a, b] in &self.links {
            edges.add(Edge::new(NodeId(a), NodeId(b)));
        }

        BoardPlan {
            node_count: self.node_count,
            edges,
            start: self.start,
            ideal_value: self.ideal_value,
        }
    }
}

/// Builds a fresh connected layout each time: a random spanning tree,
/// then extra chords up to the configured density.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    node_count: usize,
    ideal_value: u32,
    edge_factor: f32,
    max_degree: usize,
    min_ring_gap: usize,
}

impl RandomGenerator {
    pub fn new(
        node_count: usize,
        ideal_value: u32,
        edge_factor: f32,
        max_degree: usize,
        min_ring_gap: usize,
    ) -> Self {
        assert!(node_count >= 3, "randomized boards need at least 3 nodes");
        assert!(max_degree >= 2, "a spanning tree cannot form under max degree 2");
        assert!(edge_factor >= 1.0, "edge factor below 1.0 starves the board");
        assert!(min_ring_gap >= 1, "ring gap must be at least 1");

        RandomGenerator {
            node_count,
            ideal_value,
            edge_factor,
            max_degree,
            min_ring_gap,
        }
    }

    /// Connect every node by attaching each, in shuffled order, to a random
    /// already-connected node that still has degree capacity.
    fn spanning_tree(&self, rng: &mut StdRng) -> EdgeSet {
        let mut edges = EdgeSet::new();

        let mut pending: Vec<NodeId> = (0..self.node_count).map(NodeId).collect();
        pending.shuffle(rng);

        let mut connected = vec![pending.pop().expect("node_count >= 3")];

        while let Some(node) = pending.pop() {
            let anchors: Vec<NodeId> = connected
                .iter()
                .copied()
                .filter(|&a| edges.degree(a) < self.max_degree)
                .collect();

            // A tree of k nodes carries k - 1 edges, so its degree sum is
            // 2(k - 1) < 2k: with max_degree >= 2 some anchor always remains.
            let anchor = *anchors.choose(rng).expect("tree always has spare capacity");

            edges.add(Edge::new(node, anchor));
            connected.push(node);
        }

        edges
    }

    /// Add chords on top of the tree until the density target is met or
    /// the attempt budget runs out. Chords between visually adjacent ring
    /// seats are rejected; tree edges are exempt from that rule.
    fn add_chords(&self, edges: &mut EdgeSet, rng: &mut StdRng) {
        let n = self.node_count;
        let target_edges = (self.edge_factor * n as f32).ceil() as usize;
        let max_attempts = n * n;
        let mut attempts = 0;

        while edges.len() < target_edges && attempts < max_attempts {
            attempts += 1;

            let a = NodeId(rng.random_range(0..n));
            let b = NodeId(rng.random_range(0..n));
            if a == b {
                continue;
            }

            let edge = Edge::new(a, b);
            if edges.contains(&edge) {
                continue;
            }
            if edges.degree(a) >= self.max_degree || edges.degree(b) >= self.max_degree {
                continue;
            }
            if ring_distance(a, b, n) < self.min_ring_gap {
                continue;
            }

            edges.add(edge);
        }

        if edges.len() < target_edges {
            log::debug!(
                "Board reached {} of {} target edges before the attempt budget ran out",
                edges.len(),
                target_edges
            );
        }
    }
}

impl GraphGenerator for RandomGenerator {
    fn generate(&self, rng: &mut StdRng) -> BoardPlan {
        let mut edges = self.spanning_tree(rng);
        self.add_chords(&mut edges, rng);

        let start = NodeId(rng.random_range(0..self.node_count));

        BoardPlan {
            node_count: self.node_count,
            edges,
            start,
            ideal_value: self.ideal_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter_links() -> Vec<[usize; 2]> {
        vec![
            [0, 1],
            [0, 4],
            [0, 5],
            [1, 5],
            [2, 6],
            [3, 4],
            [3, 6],
            [3, 7],
        ]
    }

    #[test]
    fn test_fixed_generator_reproduces_links() {
        let generator = FixedGenerator::new(8, 2, 0, starter_links());
        let mut rng = StdRng::seed_from_u64(7);

        let plan = generator.generate(&mut rng);

        assert_eq!(plan.node_count, 8);
        assert_eq!(plan.start, NodeId(0));
        assert_eq!(plan.edges.len(), 8);
        assert!(plan.edges.linked(NodeId(0), NodeId(4)));
        assert!(plan.edges.linked(NodeId(3), NodeId(7)));
        assert!(!plan.edges.linked(NodeId(0), NodeId(7)));
    }

    #[test]
    fn test_plan_to_state() {
        let generator = FixedGenerator::new(8, 2, 0, starter_links());
        let mut rng = StdRng::seed_from_u64(7);

        let state = generator.generate(&mut rng).to_state();

        assert_eq!(state.total_tokens(), 16);
        assert_eq!(state.value(NodeId(0)), 16, "Supply starts on the start node");
        assert_eq!(state.value(NodeId(1)), 0);
        assert_eq!(state.ideal(NodeId(5)), 2);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.selected(), None);
        assert!(!state.is_solved());
    }

    #[test]
    fn test_random_boards_are_connected() {
        let generator = RandomGenerator::new(12, 3, 1.4, 4, 2);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generator.generate(&mut rng);

            let topology = Topology::new(plan.node_count, plan.edges.clone());
            assert!(topology.is_connected(), "seed {seed} produced a split board");
        }
    }

    #[test]
    fn test_random_boards_respect_degree_cap() {
        let generator = RandomGenerator::new(12, 3, 1.4, 4, 2);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generator.generate(&mut rng);

            for i in 0..plan.node_count {
                let degree = plan.edges.degree(NodeId(i));
                assert!(degree <= 4, "seed {seed}: node {i} has degree {degree}");
            }
        }
    }

    #[test]
    fn test_random_edge_counts_in_range() {
        let generator = RandomGenerator::new(12, 3, 1.4, 4, 2);
        let target = (1.4f32 * 12.0).ceil() as usize;

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generator.generate(&mut rng);

            assert!(plan.edges.len() >= 11, "seed {seed}: fewer edges than a tree");
            assert!(
                plan.edges.len() <= target,
                "seed {seed}: {} edges exceeds target {target}",
                plan.edges.len()
            );
        }
    }

    #[test]
    fn test_impossible_ring_gap_leaves_bare_tree() {
        // Max ring distance on 12 seats is 6, so a gap of 7 rejects every
        // chord and only the spanning tree survives.
        let generator = RandomGenerator::new(12, 3, 2.0, 6, 7);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = generator.generate(&mut rng);

            assert_eq!(plan.edges.len(), 11, "seed {seed} added a forbidden chord");
        }
    }

    #[test]
    fn test_same_seed_reproduces_board() {
        let generator = RandomGenerator::new(12, 3, 1.4, 4, 2);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let plan_a = generator.generate(&mut rng_a);
        let plan_b = generator.generate(&mut rng_b);

        let edges_a: Vec<Edge> = plan_a.edges.iter().copied().collect();
        let edges_b: Vec<Edge> = plan_b.edges.iter().copied().collect();

        assert_eq!(edges_a, edges_b);
        assert_eq!(plan_a.start, plan_b.start);
    }

    #[test]
    fn test_start_node_varies_across_seeds() {
        let generator = RandomGenerator::new(12, 3, 1.4, 4, 2);

        let mut starts = std::collections::HashSet::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            starts.insert(generator.generate(&mut rng).start);
        }

        assert!(starts.len() > 1, "start node never moved across 50 seeds");
    }
}
