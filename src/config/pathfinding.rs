//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::AStarConfig;

use super::defaults;

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathfindingSection {
    /// A* algorithm settings
    #[serde(default)]
    pub astar: AStarSettings,
}

/// A* algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Enable 8-directional movement
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            diagonal_cost: std::f32::consts::SQRT_2,
            max_iterations: 100_000,
        }
    }
}

impl AStarSettings {
    /// Convert to the runtime planner config
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            allow_diagonal: self.allow_diagonal,
            diagonal_cost: self.diagonal_cost,
            max_iterations: self.max_iterations,
        }
    }
}
