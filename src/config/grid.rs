//! Grid configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Grid settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Cell edge length in inches
    #[serde(default = "defaults::cell_size_in")]
    pub cell_size_in: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            cell_size_in: defaults::cell_size_in(),
        }
    }
}
