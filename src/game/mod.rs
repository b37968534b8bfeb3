mod generator;
mod levels;
mod progression;
mod session;

pub use generator::{BoardPlan, FixedGenerator, GraphGenerator, RandomGenerator};
pub use levels::{setup_level_library, LevelConfig, LevelLibrary, TopologySpec};
pub use progression::LevelTracker;
pub use session::{GameSession, Phase};
