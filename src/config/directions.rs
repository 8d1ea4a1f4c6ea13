//! Directions configuration section.

use serde::{Deserialize, Serialize};

use crate::directions::DirectionsConfig;

use super::defaults;

/// Direction generation settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionsSection {
    /// Assumed walking speed in feet per second
    #[serde(default = "defaults::walking_speed_ft_s")]
    pub walking_speed_ft_s: f32,

    /// Landmark annotation radius in cells
    #[serde(default = "defaults::landmark_radius_cells")]
    pub landmark_radius_cells: f32,
}

impl Default for DirectionsSection {
    fn default() -> Self {
        Self {
            walking_speed_ft_s: defaults::walking_speed_ft_s(),
            landmark_radius_cells: defaults::landmark_radius_cells(),
        }
    }
}

impl DirectionsSection {
    /// Convert to the runtime generator config
    pub fn to_directions_config(&self) -> DirectionsConfig {
        DirectionsConfig {
            walking_speed_ft_s: self.walking_speed_ft_s,
            landmark_radius_cells: self.landmark_radius_cells,
        }
    }
}
