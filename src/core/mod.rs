//! Core types for the marga-nav floor grid library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`WorldPoint`]: coordinate types (cells and inches)
//! - [`Rect`]: axis-aligned obstacle rectangles

mod point;
mod rect;

pub use point::{GridCoord, WorldPoint};
pub use rect::Rect;
