//! The A* planner.

use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::FloorGrid;

use super::types::{AStarConfig, AStarNode, PathFailure, PathResult};

/// Cardinal steps, cost 1.0 each
const CARDINALS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal steps, cost `diagonal_cost` each
const DIAGONALS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// A* pathfinder over a [`FloorGrid`].
///
/// Searches 8-connected by default with unit orthogonal cost and sqrt(2)
/// diagonal cost, guided by the octile-distance heuristic. The heuristic is
/// admissible and consistent for this movement model, so the returned path
/// is cost-optimal. Which of several equally-optimal paths comes back
/// depends on heap ordering among equal-f nodes and is not specified.
pub struct AStarPlanner<'a> {
    grid: &'a FloorGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a FloorGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a FloorGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Find a path from start to goal (grid coordinates).
    ///
    /// Every failure mode is a normal return carrying a [`PathFailure`];
    /// clicking inside a wall must not raise.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        if !self.grid.is_valid_coord(start) || !self.grid.is_valid_coord(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        if !self.grid.is_walkable(start) {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !self.grid.is_walkable(goal) {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, f32> = HashMap::new();

        let h_start = self.heuristic(start, goal);
        open_set.push(AStarNode {
            coord: start,
            g_cost: 0.0,
            f_cost: h_start,
        });
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            nodes_expanded += 1;

            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            if current.coord == goal {
                return self.reconstruct_path(came_from, goal, current.g_cost, nodes_expanded);
            }

            if closed_set.contains(&current.coord) {
                continue;
            }
            closed_set.insert(current.coord);

            for &(dx, dy) in &CARDINALS {
                self.relax_neighbor(
                    current.coord,
                    dx,
                    dy,
                    1.0,
                    goal,
                    &closed_set,
                    &mut came_from,
                    &mut g_scores,
                    &mut open_set,
                );
            }

            if self.config.allow_diagonal {
                for &(dx, dy) in &DIAGONALS {
                    // Corner-cutting rule: a diagonal step is admitted only
                    // when both flanking orthogonal cells are walkable, so
                    // the path never clips the corner of an obstacle.
                    let flank_a = GridCoord::new(current.coord.x + dx, current.coord.y);
                    let flank_b = GridCoord::new(current.coord.x, current.coord.y + dy);
                    if !self.grid.is_walkable(flank_a) || !self.grid.is_walkable(flank_b) {
                        continue;
                    }

                    self.relax_neighbor(
                        current.coord,
                        dx,
                        dy,
                        self.config.diagonal_cost,
                        goal,
                        &closed_set,
                        &mut came_from,
                        &mut g_scores,
                        &mut open_set,
                    );
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Find a path from start to goal (world coordinates, inches).
    ///
    /// Endpoints are snapped to cells with `floor(coord / cell_size)`.
    pub fn find_path_world(&self, start: WorldPoint, goal: WorldPoint) -> PathResult {
        let start_grid = self.grid.world_to_grid(start);
        let goal_grid = self.grid.world_to_grid(goal);
        self.find_path(start_grid, goal_grid)
    }

    /// Relax one neighbor of the current node.
    #[allow(clippy::too_many_arguments)]
    fn relax_neighbor(
        &self,
        from: GridCoord,
        dx: i32,
        dy: i32,
        move_cost: f32,
        goal: GridCoord,
        closed_set: &HashSet<GridCoord>,
        came_from: &mut HashMap<GridCoord, GridCoord>,
        g_scores: &mut HashMap<GridCoord, f32>,
        open_set: &mut BinaryHeap<AStarNode>,
    ) {
        let neighbor = GridCoord::new(from.x + dx, from.y + dy);

        if closed_set.contains(&neighbor) {
            return;
        }

        // Non-walkable cells are never expanded (this also rejects
        // out-of-bounds neighbors)
        if !self.grid.is_walkable(neighbor) {
            return;
        }

        let tentative_g = g_scores[&from] + move_cost;

        let current_g = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
        if tentative_g < current_g {
            came_from.insert(neighbor, from);
            g_scores.insert(neighbor, tentative_g);

            let h = self.heuristic(neighbor, goal);
            open_set.push(AStarNode {
                coord: neighbor,
                g_cost: tentative_g,
                f_cost: tentative_g + h,
            });
        }
    }

    /// Heuristic function (octile distance for 8-connected grids)
    fn heuristic(&self, from: GridCoord, to: GridCoord) -> f32 {
        let dx = (from.x - to.x).abs() as f32;
        let dy = (from.y - to.y).abs() as f32;

        if self.config.allow_diagonal {
            // Octile distance: max + (sqrt(2) - 1) * min
            let min = dx.min(dy);
            let max = dx.max(dy);
            max + (self.config.diagonal_cost - 1.0) * min
        } else {
            // Manhattan distance
            dx + dy
        }
    }

    /// Reconstruct the path from the came_from map
    fn reconstruct_path(
        &self,
        came_from: HashMap<GridCoord, GridCoord>,
        goal: GridCoord,
        cost: f32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path_grid = Vec::new();
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            path_grid.push(current);
            current = prev;
        }
        path_grid.push(current); // Add start
        path_grid.reverse();

        let path_world: Vec<WorldPoint> = path_grid
            .iter()
            .map(|c| self.grid.grid_to_world(*c))
            .collect();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            path_grid.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path_grid,
            path_world,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
