use super::ring::NodeId;
use super::tokens::Tokens;
use super::topology::Topology;
use std::fmt;

/// Error types for transfer validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NothingSelected,
    SourceExhausted(NodeId),
    NotNeighbors(NodeId, NodeId),
    SelfTransfer(NodeId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NothingSelected => {
                write!(f, "No node is selected")
            }
            ValidationError::SourceExhausted(n) => {
                write!(f, "Node {} has no tokens to send", n)
            }
            ValidationError::NotNeighbors(a, b) => {
                write!(f, "Nodes {} and {} are not linked", a, b)
            }
            ValidationError::SelfTransfer(n) => {
                write!(f, "Node {} cannot send to itself", n)
            }
        }
    }
}

/// Result of attempting a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Selected(NodeId),
    Transferred { from: NodeId, to: NodeId },
    BoardSolved { from: NodeId, to: NodeId },
    Invalid(ValidationError),
}

/// Simulation state for one board: the fixed topology and targets,
/// plus everything the player changes while solving it.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The board shape (never changes during play)
    topology: Topology,

    /// The target count each node must reach (never changes during play)
    ideals: Tokens,

    /// Current token counts (change as the player transfers)
    values: Tokens,

    /// The node designated as transfer source, if any
    selected: Option<NodeId>,

    /// Successful transfers so far
    moves: u32,
}

impl GameState {
    /// Create a fresh board with no selection and zero moves
    pub fn new(topology: Topology, values: Tokens, ideals: Tokens) -> Self {
        assert_eq!(
            values.node_count(),
            topology.node_count(),
            "token counts must cover every node"
        );
        assert_eq!(
            ideals.node_count(),
            topology.node_count(),
            "ideal counts must cover every node"
        );
        assert_eq!(
            values.total(),
            ideals.total(),
            "board is unwinnable unless totals agree"
        );

        GameState {
            topology,
            ideals,
            values,
            selected: None,
            moves: 0,
        }
    }

    /// Get the current token count of a node
    pub fn value(&self, node: NodeId) -> u32 {
        self.values.get(node)
    }

    /// Get the target count of a node
    pub fn ideal(&self, node: NodeId) -> u32 {
        self.ideals.get(node)
    }

    /// Get all current counts (for display)
    pub fn values(&self) -> &Tokens {
        &self.values
    }

    /// Get all target counts
    pub fn ideals(&self) -> &Tokens {
        &self.ideals
    }

    /// Get the board shape
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The currently selected source node, if any
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Number of successful transfers so far
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Total tokens on the board (conserved by every transfer)
    pub fn total_tokens(&self) -> u32 {
        self.values.total()
    }

    /// Check if a node holds exactly its target count
    pub fn is_satisfied(&self, node: NodeId) -> bool {
        self.values.get(node) == self.ideals.get(node)
    }

    /// Check if the board is solved (every node at its target)
    pub fn is_solved(&self) -> bool {
        self.values.matches(&self.ideals)
    }

    /// Mark a node as the transfer source.
    /// Any node may be selected, even an empty or satisfied one; the
    /// selection simply replaces whatever was selected before.
    pub fn select(&mut self, node: NodeId) -> MoveResult {
        assert!(
            node.index() < self.topology.node_count(),
            "selected node {} is not on this board",
            node
        );
        self.selected = Some(node);
        MoveResult::Selected(node)
    }

    /// Validate if one token could move from the selection to `to`
    pub fn can_transfer(&self, to: NodeId) -> Result<(), ValidationError> {
        let Some(from) = self.selected else {
            return Err(ValidationError::NothingSelected);
        };

        if from == to {
            return Err(ValidationError::SelfTransfer(to));
        }

        if !self.topology.linked(from, to) {
            return Err(ValidationError::NotNeighbors(from, to));
        }

        if self.values.get(from) == 0 {
            return Err(ValidationError::SourceExhausted(from));
        }

        Ok(())
    }

    /// Move one token from the selected node to `to`.
    /// The selection stays put so repeated sends from one source are cheap.
    pub fn transfer(&mut self, to: NodeId) -> MoveResult {
        if let Err(e) = self.can_transfer(to) {
            log::debug!("Transfer to {} rejected: {}", to, e);
            return MoveResult::Invalid(e);
        }

        // can_transfer guarantees a selection exists
        let from = self.selected.unwrap();

        self.values.remove_one(from);
        self.values.add_one(to);
        self.moves += 1;

        if self.is_solved() {
            MoveResult::BoardSolved { from, to }
        } else {
            MoveResult::Transferred { from, to }
        }
    }
}
