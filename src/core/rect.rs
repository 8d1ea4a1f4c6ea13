//! Axis-aligned rectangles for obstacle footprints.

use serde::{Deserialize, Serialize};

use super::WorldPoint;

/// An axis-aligned rectangle in world (inch) coordinates.
///
/// Walls, shelf footprints, and restricted zones all arrive as rectangles
/// drawn in the blueprint editor. The editor makes no promise about corner
/// order, so construction normalizes to min/max form.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum corner (top-left in screen space)
    pub min: WorldPoint,
    /// Maximum corner (bottom-right in screen space)
    pub max: WorldPoint,
}

impl Rect {
    /// Build a rectangle from any two opposite corners.
    pub fn from_corners(a: WorldPoint, b: WorldPoint) -> Self {
        Self {
            min: WorldPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: WorldPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Build a rectangle from raw corner coordinates.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::from_corners(WorldPoint::new(x1, y1), WorldPoint::new(x2, y2))
    }

    /// Width in inches
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height in inches
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether the point lies inside the rectangle (edges inclusive)
    #[inline]
    pub fn contains(&self, p: WorldPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
