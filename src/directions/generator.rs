//! Turn-by-turn direction generation.
//!
//! Converts a simplified waypoint path into human-readable steps with
//! distances, arrow glyphs, landmark annotations, and summary metrics.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;
use crate::Waypoint;

use super::landmarks::LandmarkMap;

/// Direction generation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Assumed walking speed in feet per second
    pub walking_speed_ft_s: f32,
    /// Landmark annotation radius, in cells (scaled by the grid cell size)
    pub landmark_radius_cells: f32,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            walking_speed_ft_s: 4.0,
            landmark_radius_cells: 2.0,
        }
    }
}

/// One turn-by-turn instruction, derived from a single path segment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionStep {
    /// 1-based step number for display
    pub step_index: usize,
    /// Human-readable instruction text
    pub instruction: String,
    /// Arrow glyph matching the direction of travel
    pub icon: char,
    /// Segment length in whole feet
    pub distance_feet: f32,
    /// Nearby named location, when one is within range of the step's
    /// destination
    pub landmark: Option<String>,
    /// Destination of this segment in world coordinates
    pub position: WorldPoint,
}

/// A full set of directions plus summary metrics
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteDirections {
    /// Ordered steps, one per path segment
    pub steps: Vec<DirectionStep>,
    /// Total route length in whole feet
    pub total_distance_feet: f32,
    /// Walking time estimate in whole seconds
    pub estimated_time_secs: f32,
}

impl RouteDirections {
    fn empty() -> Self {
        Self::default()
    }
}

/// Generates turn-by-turn directions from simplified waypoint paths.
pub struct DirectionsGenerator {
    config: DirectionsConfig,
    /// Landmark lookup radius in inches (landmark_radius_cells * cell size)
    landmark_radius_in: f32,
}

impl DirectionsGenerator {
    /// Create a generator for a grid with the given cell size
    pub fn new(cell_size_in: f32) -> Self {
        Self::with_config(cell_size_in, DirectionsConfig::default())
    }

    /// Create with custom settings
    pub fn with_config(cell_size_in: f32, config: DirectionsConfig) -> Self {
        let landmark_radius_in = config.landmark_radius_cells * cell_size_in;
        Self {
            config,
            landmark_radius_in,
        }
    }

    /// Generate directions for a simplified waypoint path.
    ///
    /// A path of fewer than 2 waypoints yields an empty, zeroed result.
    pub fn generate(&self, path: &[Waypoint], landmarks: &LandmarkMap) -> RouteDirections {
        if path.len() < 2 {
            return RouteDirections::empty();
        }

        let mut steps = Vec::with_capacity(path.len() - 1);
        let mut total_inches = 0.0;

        for (i, pair) in path.windows(2).enumerate() {
            let from = pair[0].position;
            let to = pair[1].position;

            let segment_inches = from.distance(&to);
            total_inches += segment_inches;
            let distance_feet = (segment_inches / 12.0).round();

            let (heading, icon) = classify_segment(from, to);

            let landmark = landmarks
                .first_within(to, self.landmark_radius_in)
                .map(|l| l.name.clone());

            let instruction = match &landmark {
                Some(name) => format!("Head {} for {} ft, past {}", heading, distance_feet, name),
                None => format!("Head {} for {} ft", heading, distance_feet),
            };

            steps.push(DirectionStep {
                step_index: i + 1,
                instruction,
                icon,
                distance_feet,
                landmark,
                position: to,
            });
        }

        let total_distance_feet = (total_inches / 12.0).round();
        let estimated_time_secs = (total_distance_feet / self.config.walking_speed_ft_s).round();

        RouteDirections {
            steps,
            total_distance_feet,
            estimated_time_secs,
        }
    }
}

/// Classify a segment by its dominant axis of movement.
///
/// |dx| > |dy| reads as horizontal travel (right/left by sign of dx),
/// anything else as vertical (down/up by sign of dy; the floor plan is in
/// screen space, so positive Y is down).
fn classify_segment(from: WorldPoint, to: WorldPoint) -> (&'static str, char) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() > dy.abs() {
        if dx >= 0.0 {
            ("right", '→')
        } else {
            ("left", '←')
        }
    } else if dy >= 0.0 {
        ("down", '↓')
    } else {
        ("up", '↑')
    }
}
