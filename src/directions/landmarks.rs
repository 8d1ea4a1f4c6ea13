//! Named locations used to annotate direction steps.

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

/// A named location on the floor plan.
///
/// Sourced from inventory-location records; `id` is the record key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Inventory record id
    pub id: u32,
    /// Display name ("Receiving Dock", "Aisle 4 Shelf B", ...)
    pub name: String,
    /// World position in inches
    pub position: WorldPoint,
}

/// Insertion-ordered set of landmarks.
///
/// Lookups return the first landmark within range in insertion order.
/// There is deliberately no distance ranking among several nearby
/// landmarks; location maps are tens of entries and any nearby name is an
/// adequate annotation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LandmarkMap {
    entries: Vec<Landmark>,
}

impl LandmarkMap {
    /// Create an empty landmark map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a landmark
    pub fn insert(&mut self, id: u32, name: impl Into<String>, position: WorldPoint) {
        self.entries.push(Landmark {
            id,
            name: name.into(),
            position,
        });
    }

    /// First landmark (in insertion order) within `radius` inches of `point`
    pub fn first_within(&self, point: WorldPoint, radius: f32) -> Option<&Landmark> {
        let radius_sq = radius * radius;
        self.entries
            .iter()
            .find(|l| l.position.distance_squared(&point) <= radius_sq)
    }

    /// Number of landmarks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over landmarks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.entries.iter()
    }
}
