//! Path planning on the floor grid.
//!
//! - **A\* search**: shortest walkable route between two cells
//! - **Simplification**: collapse the raw cell path to turning points
//!
//! ```rust,ignore
//! use marga_nav::pathfinding::{AStarPlanner, AStarConfig};
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//! let result = planner.find_path_world(start, goal);
//! if result.success {
//!     println!("route: {} cells, cost {:.2}", result.path_grid.len(), result.cost);
//! }
//! ```

pub mod astar;
mod simplify;

pub use astar::{AStarConfig, AStarPlanner, PathFailure, PathResult, find_path, path_exists};
pub use simplify::{path_length, simplify_path};
