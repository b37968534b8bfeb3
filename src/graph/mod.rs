mod edge;
mod ring;
mod state;
mod tokens;
mod topology;

pub use edge::{Edge, EdgeSet};
pub use ring::{ring_angle, ring_distance, NodeId};
pub use state::{GameState, MoveResult, ValidationError};
pub use tokens::Tokens;
pub use topology::Topology;
