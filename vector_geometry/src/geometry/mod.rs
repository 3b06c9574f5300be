//! This module has the geometry types (points, line strings, linear rings, polygons and their
//! multi variants), the [Geometry] sum type over all of them, and the shared [GeometryOps]
//! contract.
//!
//! Geometries are built through [GeometryFactory](crate::factory::GeometryFactory) and are
//! read-only everywhere except through the [editor](crate::editor) module.
pub(crate) mod internal;
mod geometry_enum;
mod line_string;
mod linear_ring;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod relate;
mod traits;
mod types;

pub use geometry_enum::*;
pub use line_string::*;
pub use linear_ring::*;
pub use multi_line_string::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use relate::{coordinate_within, touches};
pub use traits::*;
pub use types::*;

/// Default tolerance used to decide if a coordinate touches a segment.
pub const DEFAULT_TOUCH_EPS: f64 = 1e-5;
