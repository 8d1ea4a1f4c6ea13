//! Floor grid storage.
//!
//! Discretizes a rectangular floor plan into uniform cells and tracks which
//! cells are blocked by obstacle rectangles. The grid uses a coordinate
//! system where:
//! - cell (0, 0) covers the world area from (0, 0) to (cell_size, cell_size)
//! - positive X is to the right, positive Y is down (screen space)
//! - cell (x, y) covers (x*cell_size, y*cell_size) to ((x+1)*cell_size, (y+1)*cell_size)
//!
//! Walkable flags live in a single flat array indexed `y * width + x`.

use log::debug;

use crate::core::{GridCoord, Rect, WorldPoint};

/// Walkable-cell grid for one floor plan.
///
/// Created once per floor-plan load and rebuilt whenever the plan's
/// obstacles change. The obstacle rectangles are retained so callers can
/// inspect or re-derive them after edits.
#[derive(Clone, Debug)]
pub struct FloorGrid {
    /// Walkable flag per cell, indexed `y * width + x`
    walkable: Vec<bool>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
    /// Cell edge length in inches
    cell_size: f32,
    /// Obstacle rectangles applied to this grid
    obstacles: Vec<Rect>,
}

impl FloorGrid {
    /// Create a fully walkable grid with the given cell dimensions.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            walkable: vec![true; width * height],
            width,
            height,
            cell_size,
            obstacles: Vec::new(),
        }
    }

    /// Create a grid covering a floor plan of the given size in inches.
    ///
    /// Dimensions are `ceil(extent / cell_size)` per axis, at least one
    /// cell each, so a plan that is not an exact multiple of the cell size
    /// still gets full coverage.
    pub fn from_floor_plan(width_in: f32, height_in: f32, cell_size_in: f32) -> Self {
        let cols = (width_in / cell_size_in).ceil().max(1.0) as usize;
        let rows = (height_in / cell_size_in).ceil().max(1.0) as usize;
        Self::new(cols, rows, cell_size_in)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell edge length in inches
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Obstacle rectangles currently applied
    #[inline]
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Convert world coordinates to grid coordinates.
    ///
    /// Points outside the floor plan map to out-of-range coordinates;
    /// check with [`is_valid_coord`](Self::is_valid_coord).
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            (point.x / self.cell_size).floor() as i32,
            (point.y / self.cell_size).floor() as i32,
        )
    }

    /// Convert grid coordinates to world coordinates (cell center)
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            (coord.x as f32 + 0.5) * self.cell_size,
            (coord.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Check if a world point falls inside the grid
    #[inline]
    pub fn contains_point(&self, point: WorldPoint) -> bool {
        self.is_valid_coord(self.world_to_grid(point))
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Whether the cell is walkable. Out-of-bounds cells are not.
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => self.walkable[i],
            None => false,
        }
    }

    /// Mark every cell intersecting the rectangle as non-walkable.
    ///
    /// The rectangle may extend past the floor-plan edges; the footprint is
    /// clipped to grid bounds rather than rejected, since editor-drawn
    /// shapes routinely straddle the edge by a pixel or two.
    pub fn add_obstacle(&mut self, rect: Rect) {
        self.rasterize(&rect);
        self.obstacles.push(rect);
    }

    /// Reset every cell to walkable and empty the obstacle set.
    pub fn clear_obstacles(&mut self) {
        self.walkable.fill(true);
        self.obstacles.clear();
        debug!("[FloorGrid] cleared obstacles, {} cells walkable", self.cell_count());
    }

    /// Mark the cells covered by one rectangle.
    ///
    /// Cell x spans [x*cell, (x+1)*cell), so the covered column range is
    /// floor(min/cell) through ceil(max/cell) - 1, clamped to the grid.
    fn rasterize(&mut self, rect: &Rect) {
        let col_min = (rect.min.x / self.cell_size).floor() as i64;
        let col_max = (rect.max.x / self.cell_size).ceil() as i64 - 1;
        let row_min = (rect.min.y / self.cell_size).floor() as i64;
        let row_max = (rect.max.y / self.cell_size).ceil() as i64 - 1;

        let col_lo = col_min.max(0);
        let col_hi = col_max.min(self.width as i64 - 1);
        let row_lo = row_min.max(0);
        let row_hi = row_max.min(self.height as i64 - 1);

        if col_lo > col_hi || row_lo > row_hi {
            // Entirely outside the grid, or degenerate (zero area)
            return;
        }

        for row in row_lo..=row_hi {
            let base = row as usize * self.width;
            for col in col_lo..=col_hi {
                self.walkable[base + col as usize] = false;
            }
        }
    }
}
