use super::generator::{FixedGenerator, GraphGenerator, RandomGenerator};
use crate::graph::Topology;
use bevy::prelude::*;
use serde::Deserialize;

const LEVELS_JSON: &str = include_str!("../../assets/levels.json");

/// Resource containing every playable level, in play order
#[derive(Resource, Debug)]
pub struct LevelLibrary {
    levels: Vec<LevelConfig>,
}

/// Configuration for a single level
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    pub node_count: usize,
    pub ideal_value: u32,
    pub topology: TopologySpec,
}

/// How a level's board shape is produced
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    /// A hand-authored link list with a fixed starting node
    Fixed {
        start_node: usize,
        links: Vec<[usize; 2]>,
    },
    /// A randomized layout built fresh for every attempt
    Random {
        edge_factor: f32,
        max_degree: usize,
        min_ring_gap: usize,
    },
}

/// Top-level shape of the embedded JSON file
#[derive(Debug, Deserialize)]
struct LevelFile {
    levels: Vec<LevelConfig>,
}

impl LevelConfig {
    /// The conserved token sum for this level
    pub fn total_tokens(&self) -> u32 {
        self.node_count as u32 * self.ideal_value
    }

    /// The board-building strategy this level asks for
    pub fn generator(&self) -> Box<dyn GraphGenerator> {
        match &self.topology {
            TopologySpec::Fixed { start_node, links } => Box::new(FixedGenerator::new(
                self.node_count,
                self.ideal_value,
                *start_node,
                links.clone(),
            )),
            TopologySpec::Random {
                edge_factor,
                max_degree,
                min_ring_gap,
            } => Box::new(RandomGenerator::new(
                self.node_count,
                self.ideal_value,
                *edge_factor,
                *max_degree,
                *min_ring_gap,
            )),
        }
    }

    /// Check one level's data, reporting problems with its 1-based number
    fn validate(&self, level_num: usize) -> Result<(), String> {
        if self.node_count < 3 {
            return Err(format!(
                "Level {} has {} nodes, need at least 3",
                level_num, self.node_count
            ));
        }

        if self.ideal_value == 0 {
            return Err(format!("Level {} has a zero ideal value", level_num));
        }

        match &self.topology {
            TopologySpec::Fixed { start_node, links } => {
                if *start_node >= self.node_count {
                    return Err(format!(
                        "Level {} start node {} is outside 0..{}",
                        level_num, start_node, self.node_count
                    ));
                }

                for link in links {
                    let [a, b] = *link;
                    if a >= self.node_count || b >= self.node_count {
                        return Err(format!(
                            "Level {} link {}-{} references a node outside 0..{}",
                            level_num, a, b, self.node_count
                        ));
                    }
                    if a == b {
                        return Err(format!("Level {} link {}-{} is a self-loop", level_num, a, b));
                    }
                }

                let topology = Topology::from_pairs(self.node_count, links);
                if !topology.is_connected() {
                    return Err(format!(
                        "Level {} topology is not connected; some nodes could never be balanced",
                        level_num
                    ));
                }
            }
            TopologySpec::Random {
                edge_factor,
                max_degree,
                min_ring_gap,
            } => {
                if *edge_factor < 1.0 {
                    return Err(format!(
                        "Level {} edge factor {} is below 1.0, too few edges for a connected board",
                        level_num, edge_factor
                    ));
                }
                if *max_degree < 2 {
                    return Err(format!(
                        "Level {} max degree {} is below 2, a spanning tree cannot form",
                        level_num, max_degree
                    ));
                }
                if *min_ring_gap < 1 {
                    return Err(format!("Level {} has a zero ring gap", level_num));
                }
            }
        }

        Ok(())
    }
}

impl LevelLibrary {
    /// Load the level library from embedded JSON data
    pub fn load() -> Result<Self, String> {
        Self::from_json(LEVELS_JSON)
    }

    /// Parse and validate JSON data into a level library
    fn from_json(data: &str) -> Result<Self, String> {
        let file: LevelFile =
            serde_json::from_str(data).map_err(|e| format!("Level JSON parse error: {}", e))?;

        if file.levels.is_empty() {
            return Err("No levels in level file".to_string());
        }

        for (i, level) in file.levels.iter().enumerate() {
            level.validate(i + 1)?;
        }

        Ok(LevelLibrary {
            levels: file.levels,
        })
    }

    /// Get a level by zero-based index
    pub fn level(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }
}

/// System to load and initialize the level library
/// This should run early in Startup schedule, before the first board spawns
pub fn setup_level_library(mut commands: Commands) {
    match LevelLibrary::load() {
        Ok(library) => {
            info!("✓ Level library loaded successfully:");
            info!("  - {} levels", library.level_count());

            for (i, level) in library.levels().iter().enumerate() {
                match &level.topology {
                    TopologySpec::Fixed { links, .. } => {
                        info!(
                            "  - Level {}: {} nodes, ideal {}, {} fixed links",
                            i + 1,
                            level.node_count,
                            level.ideal_value,
                            links.len()
                        );
                    }
                    TopologySpec::Random { edge_factor, .. } => {
                        info!(
                            "  - Level {}: {} nodes, ideal {}, randomized (edge factor {})",
                            i + 1,
                            level.node_count,
                            level.ideal_value,
                            edge_factor
                        );
                    }
                }
            }

            commands.insert_resource(library);
        }
        Err(e) => {
            error!("Failed to load level library: {}", e);
            panic!("Cannot continue without level data");
        }
    }
}
