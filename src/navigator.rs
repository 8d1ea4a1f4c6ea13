//! High-level navigation facade.
//!
//! Owns the floor grid and landmark set for one floor plan and exposes the
//! route queries the blueprint editor calls: plan, simplify, and narrate.

use log::debug;

use crate::config::NavConfig;
use crate::core::{Rect, WorldPoint};
use crate::directions::{DirectionsConfig, DirectionsGenerator, LandmarkMap, RouteDirections};
use crate::grid::FloorGrid;
use crate::pathfinding::{simplify_path, AStarConfig, AStarPlanner, PathResult};
use crate::{Route, Waypoint};

/// Navigation facade for one floor plan.
///
/// Single-writer, single-reader: obstacle edits and route queries come from
/// the same interactive editing session, so no synchronization is needed.
pub struct Navigator {
    grid: FloorGrid,
    landmarks: LandmarkMap,
    astar: AStarConfig,
    directions: DirectionsConfig,
}

impl Navigator {
    /// Create a navigator for a floor plan of the given size in inches.
    pub fn new(width_in: f32, height_in: f32, cell_size_in: f32) -> Self {
        Self {
            grid: FloorGrid::from_floor_plan(width_in, height_in, cell_size_in),
            landmarks: LandmarkMap::new(),
            astar: AStarConfig::default(),
            directions: DirectionsConfig::default(),
        }
    }

    /// Create a navigator from a loaded configuration.
    pub fn with_config(width_in: f32, height_in: f32, config: &NavConfig) -> Self {
        Self {
            grid: FloorGrid::from_floor_plan(width_in, height_in, config.grid.cell_size_in),
            landmarks: LandmarkMap::new(),
            astar: config.pathfinding.astar.to_astar_config(),
            directions: config.directions.to_directions_config(),
        }
    }

    /// The underlying grid
    pub fn grid(&self) -> &FloorGrid {
        &self.grid
    }

    /// The landmark set
    pub fn landmarks(&self) -> &LandmarkMap {
        &self.landmarks
    }

    /// Mark an obstacle rectangle (wall, shelf footprint, restricted zone).
    pub fn add_obstacle(&mut self, rect: Rect) {
        self.grid.add_obstacle(rect);
    }

    /// Remove every obstacle, restoring a fully walkable floor.
    pub fn clear_obstacles(&mut self) {
        self.grid.clear_obstacles();
    }

    /// Add a named landmark from an inventory-location record.
    pub fn add_landmark(&mut self, id: u32, name: impl Into<String>, position: WorldPoint) {
        self.landmarks.insert(id, name, position);
    }

    /// Replace the landmark set.
    pub fn set_landmarks(&mut self, landmarks: LandmarkMap) {
        self.landmarks = landmarks;
    }

    /// Run the raw A* planner between two world points.
    ///
    /// Exposes the full [`PathResult`], including the failure reason, for
    /// callers that want to tell the user why no route was found.
    pub fn plan(&self, start: WorldPoint, goal: WorldPoint) -> PathResult {
        let planner = AStarPlanner::new(&self.grid, self.astar.clone());
        planner.find_path_world(start, goal)
    }

    /// Find a simplified route between two world points.
    ///
    /// Returns `None` when no route exists: the endpoints are blocked, out
    /// of bounds, or separated by obstacles. That is the expected outcome
    /// for a click inside a wall, not an error.
    pub fn find_route(&self, start: WorldPoint, goal: WorldPoint) -> Option<Route> {
        let result = self.plan(start, goal);
        if !result.success {
            debug!("[Navigator] no route: {:?}", result.failure_reason);
            return None;
        }

        let raw: Vec<Waypoint> = result
            .path_grid
            .iter()
            .zip(result.path_world.iter())
            .map(|(&cell, &position)| Waypoint { position, cell })
            .collect();

        Some(Route {
            waypoints: simplify_path(&raw),
            cost: result.cost,
        })
    }

    /// Find a route and narrate it as turn-by-turn directions.
    pub fn directions(&self, start: WorldPoint, goal: WorldPoint) -> Option<RouteDirections> {
        let route = self.find_route(start, goal)?;
        let generator =
            DirectionsGenerator::with_config(self.grid.cell_size(), self.directions.clone());
        Some(generator.generate(&route.waypoints, &self.landmarks))
    }
}
