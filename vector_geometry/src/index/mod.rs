//! Hierarchical addressing of vertexes, edges and sub-geometries, used by interactive editing.
//!
//! A [GeometryIndex] is a path of steps from the top level geometry down to its target. The
//! functions of [service] resolve, navigate and edit through such paths, failing with a
//! [GeometryIndexNotFoundError] when an index does not resolve.
mod error;
mod geometry_index;
pub mod service;

pub use error::*;
pub use geometry_index::*;
