//! A* pathfinding on the floor grid.
//!
//! Implements A* search with:
//! - 8-connected movement (unit orthogonal cost, sqrt(2) diagonal cost)
//! - Octile-distance heuristic
//! - Corner-cutting prevention on diagonal steps
//!
//! Failure (blocked endpoint, unreachable goal, out-of-bounds click) is a
//! normal return value, never a panic.

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathResult};

use crate::core::WorldPoint;
use crate::grid::FloorGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &FloorGrid, start: WorldPoint, goal: WorldPoint) -> PathResult {
    let planner = AStarPlanner::with_defaults(grid);
    planner.find_path_world(start, goal)
}

/// Check if a path exists (ignores the path itself)
pub fn path_exists(grid: &FloorGrid, start: WorldPoint, goal: WorldPoint) -> bool {
    find_path(grid, start, goal).success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, Rect};
    use approx::assert_relative_eq;
    use std::f32::consts::SQRT_2;

    fn open_grid() -> FloorGrid {
        FloorGrid::new(50, 50, 24.0)
    }

    #[test]
    fn test_simple_path() {
        let grid = open_grid();
        let planner = AStarPlanner::with_defaults(&grid);

        let start = GridCoord::new(10, 25);
        let goal = GridCoord::new(40, 25);

        let result = planner.find_path(start, goal);

        assert!(result.success);
        assert!(!result.path_grid.is_empty());
        assert_eq!(result.path_grid[0], start);
        assert_eq!(*result.path_grid.last().unwrap(), goal);
        assert_relative_eq!(result.cost, 30.0);
        // 30 cells of 24 inches each
        assert_relative_eq!(result.length_inches(), 720.0);
    }

    #[test]
    fn test_diagonal_path_cost() {
        let grid = open_grid();
        let planner = AStarPlanner::with_defaults(&grid);

        let result = planner.find_path(GridCoord::new(10, 10), GridCoord::new(19, 19));

        assert!(result.success);
        // Pure diagonal: 9 steps at sqrt(2) each
        assert_relative_eq!(result.cost, 9.0 * SQRT_2, epsilon = 1e-4);
        assert_eq!(result.length_cells(), 10);
    }

    #[test]
    fn test_path_around_obstacle() {
        let mut grid = open_grid();
        // Wall across the middle, rows 15..35 of column 25
        grid.add_obstacle(Rect::new(25.0 * 24.0, 15.0 * 24.0, 26.0 * 24.0, 35.0 * 24.0));

        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(10, 25), GridCoord::new(40, 25));

        assert!(result.success);
        // Detour is dearer than the straight 30-cell run
        assert!(result.cost > 30.0);
    }

    #[test]
    fn test_no_path() {
        let mut grid = open_grid();
        // Full-height barrier
        grid.add_obstacle(Rect::new(25.0 * 24.0, 0.0, 26.0 * 24.0, 50.0 * 24.0));

        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(10, 25), GridCoord::new(40, 25));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_start_blocked() {
        let mut grid = open_grid();
        grid.add_obstacle(Rect::new(10.0 * 24.0, 25.0 * 24.0, 11.0 * 24.0, 26.0 * 24.0));

        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(10, 25), GridCoord::new(40, 25));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));
    }

    #[test]
    fn test_goal_blocked() {
        let mut grid = open_grid();
        grid.add_obstacle(Rect::new(40.0 * 24.0, 25.0 * 24.0, 41.0 * 24.0, 26.0 * 24.0));

        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(10, 25), GridCoord::new(40, 25));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::GoalBlocked));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = open_grid();
        let planner = AStarPlanner::with_defaults(&grid);

        let result = planner.find_path(GridCoord::new(-1, 0), GridCoord::new(10, 10));
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));

        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(50, 10));
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));
    }

    #[test]
    fn test_corner_cutting_blocked() {
        // Two blocked cells form an L around the diagonal from (0,0) to
        // (1,1); on a 2x2 grid there is no way around, so the search must
        // fail rather than cut the corner.
        let mut grid = FloorGrid::new(2, 2, 24.0);
        grid.add_obstacle(Rect::new(24.0, 0.0, 48.0, 24.0)); // (1, 0)
        grid.add_obstacle(Rect::new(0.0, 24.0, 24.0, 48.0)); // (0, 1)

        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(0, 0), GridCoord::new(1, 1));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_corner_cutting_takes_detour() {
        // Same L shape on a bigger grid: the path exists but must walk
        // around the corner, never diagonally through it.
        let mut grid = FloorGrid::new(10, 10, 24.0);
        grid.add_obstacle(Rect::new(5.0 * 24.0, 4.0 * 24.0, 6.0 * 24.0, 5.0 * 24.0)); // (5, 4)
        grid.add_obstacle(Rect::new(4.0 * 24.0, 5.0 * 24.0, 5.0 * 24.0, 6.0 * 24.0)); // (4, 5)

        let planner = AStarPlanner::with_defaults(&grid);
        let result = planner.find_path(GridCoord::new(4, 4), GridCoord::new(5, 5));

        assert!(result.success);
        for pair in result.path_grid.windows(2) {
            let (sx, sy) = pair[0].step_direction(&pair[1]);
            if sx != 0 && sy != 0 {
                let flank_a = GridCoord::new(pair[0].x + sx, pair[0].y);
                let flank_b = GridCoord::new(pair[0].x, pair[0].y + sy);
                assert!(grid.is_walkable(flank_a) && grid.is_walkable(flank_b));
            }
        }
    }

    #[test]
    fn test_4_connected() {
        let grid = open_grid();
        let config = AStarConfig {
            allow_diagonal: false,
            ..Default::default()
        };
        let planner = AStarPlanner::new(&grid, config);

        let result = planner.find_path(GridCoord::new(10, 10), GridCoord::new(19, 19));

        assert!(result.success);
        // Manhattan: 9 + 9 steps
        assert_relative_eq!(result.cost, 18.0);
    }

    #[test]
    fn test_world_coordinates() {
        let grid = open_grid();
        let planner = AStarPlanner::with_defaults(&grid);

        let result = planner.find_path_world(WorldPoint::new(10.0, 10.0), WorldPoint::new(500.0, 10.0));

        assert!(result.success);
        // Both endpoints snap to row 0: (0,0) to (20,0)
        assert_eq!(result.path_grid[0], GridCoord::new(0, 0));
        assert_eq!(*result.path_grid.last().unwrap(), GridCoord::new(20, 0));
    }

    #[test]
    fn test_free_helpers() {
        let mut grid = open_grid();
        assert!(path_exists(&grid, WorldPoint::new(10.0, 10.0), WorldPoint::new(500.0, 500.0)));

        grid.add_obstacle(Rect::new(0.0, 0.0, 24.0, 24.0));
        let result = find_path(&grid, WorldPoint::new(10.0, 10.0), WorldPoint::new(500.0, 500.0));
        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));
    }
}
