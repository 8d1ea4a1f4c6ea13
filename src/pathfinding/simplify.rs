//! Waypoint reduction.
//!
//! A raw A* path visits every cell center it crosses, which is hundreds of
//! collinear points on a long straight run. Only genuine turning points
//! matter to the route overlay and the directions generator, so the path is
//! collapsed to the points where the direction of travel changes.

use crate::Waypoint;

/// Collapse a raw cell-center path to its direction-change waypoints.
///
/// A point is kept when the sign pair of the step into its successor
/// differs from the sign pair of the previous kept segment. The first and
/// last points are always kept. Paths shorter than 3 points are returned
/// unchanged.
///
/// Idempotent: simplifying an already-simplified path is a no-op, because
/// every retained interior point is a turn by construction.
pub fn simplify_path(path: &[Waypoint]) -> Vec<Waypoint> {
    if path.len() < 3 {
        return path.to_vec();
    }

    let mut simplified = vec![path[0]];
    let mut last_dir = path[0].cell.step_direction(&path[1].cell);

    for i in 1..path.len() - 1 {
        let dir = path[i].cell.step_direction(&path[i + 1].cell);
        if dir != last_dir {
            simplified.push(path[i]);
            last_dir = dir;
        }
    }

    simplified.push(*path.last().unwrap());
    simplified
}

/// Total Euclidean length of a path in inches
pub fn path_length(path: &[Waypoint]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2)
        .map(|w| w[0].position.distance(&w[1].position))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, WorldPoint};
    use approx::assert_relative_eq;

    fn wp(x: i32, y: i32) -> Waypoint {
        // 24-inch cells, cell-center positions
        Waypoint {
            position: WorldPoint::new((x as f32 + 0.5) * 24.0, (y as f32 + 0.5) * 24.0),
            cell: GridCoord::new(x, y),
        }
    }

    #[test]
    fn test_short_paths_unchanged() {
        let empty: Vec<Waypoint> = Vec::new();
        assert!(simplify_path(&empty).is_empty());

        let one = vec![wp(0, 0)];
        assert_eq!(simplify_path(&one), one);

        // Exactly 2 points short-circuits, even if collinear-adjacent
        let two = vec![wp(0, 0), wp(1, 0)];
        assert_eq!(simplify_path(&two), two);
    }

    #[test]
    fn test_collinear_run_collapses() {
        let path: Vec<Waypoint> = (0..10).map(|x| wp(x, 0)).collect();
        let simplified = simplify_path(&path);

        assert_eq!(simplified.len(), 2);
        assert_eq!(simplified[0], path[0]);
        assert_eq!(simplified[1], path[9]);
    }

    #[test]
    fn test_turn_points_kept() {
        // Right 3, down 2, diagonal 2: turns at (3,0) and (3,2)
        let path = vec![
            wp(0, 0),
            wp(1, 0),
            wp(2, 0),
            wp(3, 0),
            wp(3, 1),
            wp(3, 2),
            wp(4, 3),
            wp(5, 4),
        ];
        let simplified = simplify_path(&path);

        assert_eq!(
            simplified,
            vec![wp(0, 0), wp(3, 0), wp(3, 2), wp(5, 4)]
        );
    }

    #[test]
    fn test_idempotent() {
        let path = vec![
            wp(0, 0),
            wp(1, 0),
            wp(2, 0),
            wp(2, 1),
            wp(2, 2),
            wp(3, 3),
        ];
        let once = simplify_path(&path);
        let twice = simplify_path(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_point_always_kept() {
        // Final segment continues the previous direction; the endpoint must
        // still be present
        let path = vec![wp(0, 0), wp(0, 1), wp(1, 1), wp(2, 1), wp(3, 1)];
        let simplified = simplify_path(&path);

        assert_eq!(*simplified.last().unwrap(), wp(3, 1));
        assert_eq!(simplified, vec![wp(0, 0), wp(0, 1), wp(3, 1)]);
    }

    #[test]
    fn test_path_length() {
        let path = vec![wp(0, 0), wp(3, 0), wp(3, 4)];
        // 3 cells right then 4 cells down, 24 inches per cell
        assert_relative_eq!(path_length(&path), 7.0 * 24.0);
        assert_relative_eq!(path_length(&path[..1]), 0.0);
    }
}
