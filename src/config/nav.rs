//! Root configuration and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::directions::DirectionsSection;
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::pathfinding::PathfindingSection;

/// Full navigation configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct NavConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Direction generation settings
    #[serde(default)]
    pub directions: DirectionsSection,
}

impl NavConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/nav.yaml), falling back
    /// to defaults when the file does not exist
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/nav.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = NavConfig::default();
        assert_relative_eq!(config.grid.cell_size_in, 12.0);
        assert!(config.pathfinding.astar.allow_diagonal);
        assert_relative_eq!(config.directions.walking_speed_ft_s, 4.0);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
grid:
  cell_size_in: 24.0
pathfinding:
  astar:
    max_iterations: 5000
"#;
        let config = NavConfig::from_yaml(yaml).unwrap();
        assert_relative_eq!(config.grid.cell_size_in, 24.0);
        assert_eq!(config.pathfinding.astar.max_iterations, 5000);
        // Unspecified fields keep their defaults
        assert!(config.pathfinding.astar.allow_diagonal);
        assert_relative_eq!(config.directions.landmark_radius_cells, 2.0);
    }

    #[test]
    fn test_empty_yaml() {
        let config = NavConfig::from_yaml("{}").unwrap();
        assert_relative_eq!(config.grid.cell_size_in, 12.0);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = NavConfig::from_yaml("grid: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }
}
