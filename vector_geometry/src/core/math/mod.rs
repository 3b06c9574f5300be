//! Core math for working in 2D space: coordinates, bounding boxes, and line segment math.
mod bbox;
mod coordinate;
mod segment_math;

pub use bbox::Bbox;
pub use coordinate::{coord, Coordinate};
pub use segment_math::*;
