//! Planar vector geometry: points, line strings, rings, polygons and their multi variants, with
//! measures (area, length, centroid, distance), validity and intersect tests, well known text
//! output, and index based in place editing.
//!
//! Geometries are created through a [GeometryFactory](factory::GeometryFactory), queried through
//! the [GeometryOps](geometry::GeometryOps) trait, and modified only through the [editor] module
//! or the [index::service] operations.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;
pub mod core;
pub mod editor;
pub mod factory;
pub mod geometry;
pub mod index;

pub use static_aabb2d_index::AABB;

/// Commonly used types, traits and functions.
pub mod prelude {
    pub use crate::core::math::{coord, Bbox, Coordinate};
    pub use crate::core::traits::{FuzzyEq, FuzzyOrd, Real};
    pub use crate::editor;
    pub use crate::factory::GeometryFactory;
    pub use crate::geometry::{
        coordinate_within, touches, Geometry, GeometryOps, GeometryOptions, GeometryRef,
        GeometryType, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point,
        Polygon,
    };
    pub use crate::index::{GeometryIndex, GeometryIndexNotFoundError, GeometryIndexType};
}
