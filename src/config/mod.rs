//! Unified configuration loading for marga-nav.
//!
//! Loads all settings from a single YAML file; every field has a default,
//! so a missing or partial file is never fatal.

mod defaults;
mod directions;
mod error;
mod grid;
mod nav;
mod pathfinding;

pub use directions::DirectionsSection;
pub use error::ConfigLoadError;
pub use grid::GridSection;
pub use nav::NavConfig;
pub use pathfinding::{AStarSettings, PathfindingSection};
