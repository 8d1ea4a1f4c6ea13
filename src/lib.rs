//! # Marga-Nav: Indoor Floor-Plan Navigation
//!
//! A pathfinding library for warehouse blueprint editors: discretize a
//! floor plan into a walkable grid, rasterize wall/shelf/zone rectangles as
//! obstacles, find routes with A*, and narrate them as turn-by-turn
//! directions.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{Navigator, Rect, WorldPoint};
//!
//! // 480 x 360 inch floor plan, 12-inch cells
//! let mut nav = Navigator::new(480.0, 360.0, 12.0);
//!
//! // Walls and shelves arrive as rectangles from the editor
//! nav.add_obstacle(Rect::new(120.0, 0.0, 132.0, 240.0));
//! nav.add_landmark(4, "Receiving Dock", WorldPoint::new(300.0, 60.0));
//!
//! // Click-to-click route query; None means "no route", not an error
//! if let Some(route) = nav.find_route(WorldPoint::new(24.0, 24.0), WorldPoint::new(420.0, 300.0)) {
//!     println!("route: {} waypoints, cost {:.1}", route.waypoints.len(), route.cost);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! Floor plans are authored in inches with the origin at the top-left
//! corner: positive X to the right, positive Y downward (screen space).
//! Grid cells are uniform squares; cell (x, y) covers the world area from
//! `(x, y) * cell_size` to `(x+1, y+1) * cell_size`.
//!
//! ## Architecture
//!
//! - [`core`](crate::core): fundamental types ([`GridCoord`], [`WorldPoint`], [`Rect`])
//! - [`config`]: YAML-backed configuration sections
//! - [`grid`]: the walkable-cell grid and obstacle rasterizer
//! - [`pathfinding`]: A* search and waypoint simplification
//! - [`directions`]: turn-by-turn instruction generation
//! - [`Navigator`]: facade tying one floor plan's grid, obstacles, and
//!   landmarks together
//!
//! ## Failure Model
//!
//! The component is driven by interactive mouse input, where edge-case
//! input is the common case. Nothing in the query path panics or returns
//! `Err`: a click inside a wall yields `None` (or a [`PathFailure`] reason
//! from the planner), and over-drawn obstacle rectangles are clipped to the
//! floor plan.

pub mod config;
pub mod core;
pub mod directions;
pub mod grid;
mod navigator;
pub mod pathfinding;

pub use crate::core::{GridCoord, Rect, WorldPoint};
pub use config::NavConfig;
pub use directions::{DirectionStep, DirectionsGenerator, Landmark, LandmarkMap, RouteDirections};
pub use grid::FloorGrid;
pub use navigator::Navigator;
pub use pathfinding::{AStarConfig, AStarPlanner, PathFailure, PathResult, simplify_path};

use serde::{Deserialize, Serialize};

/// One point along a route: world position paired with its grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Cell-center position in world (inch) coordinates
    pub position: WorldPoint,
    /// The grid cell this waypoint sits in
    pub cell: GridCoord,
}

/// A simplified route through the floor plan.
///
/// Produced fresh per query and immutable once returned; waypoints are the
/// direction-change points of the underlying cell path, endpoints included.
#[derive(Clone, Debug)]
pub struct Route {
    /// Turning-point waypoints, start and goal included
    pub waypoints: Vec<Waypoint>,
    /// Total path cost in cell units
    pub cost: f32,
}

impl Route {
    /// Total route length in inches
    pub fn length_inches(&self) -> f32 {
        pathfinding::path_length(&self.waypoints)
    }

    /// Total route length in feet
    pub fn length_feet(&self) -> f32 {
        self.length_inches() / 12.0
    }

    /// Whether the route has no segments
    pub fn is_empty(&self) -> bool {
        self.waypoints.len() < 2
    }
}
