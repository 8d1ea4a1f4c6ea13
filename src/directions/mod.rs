//! Turn-by-turn directions.
//!
//! Converts a simplified route into numbered, human-readable steps
//! ("Head right for 18 ft, past Receiving Dock") plus total distance and a
//! walking-time estimate, annotated with nearby named landmarks from the
//! inventory system.

mod generator;
mod landmarks;

pub use generator::{DirectionStep, DirectionsConfig, DirectionsGenerator, RouteDirections};
pub use landmarks::{Landmark, LandmarkMap};
