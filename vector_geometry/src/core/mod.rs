//! Core module has the numeric traits and the coordinate level math shared by all geometries.
pub mod math;
pub mod traits;
