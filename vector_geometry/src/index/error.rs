use super::{GeometryIndex, GeometryIndexType};
use crate::geometry::GeometryType;
use thiserror::Error;

/// Failure to resolve a [GeometryIndex] against a geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryIndexNotFoundError {
    /// A step value is negative or past the end of what the geometry holds.
    #[error("index {index} not found: {index_type} {value} out of bounds (count {count})")]
    OutOfBounds {
        index: GeometryIndex,
        index_type: GeometryIndexType,
        value: i32,
        count: usize,
    },
    /// A step asks for something the geometry reached cannot provide, e.g. an edge of a point.
    #[error("index {index} not found: {geometry_type} has no {index_type}")]
    TypeMismatch {
        index: GeometryIndex,
        geometry_type: GeometryType,
        index_type: GeometryIndexType,
    },
    /// The geometry reached is empty.
    #[error("index {index} not found: {geometry_type} is empty")]
    EmptyTarget {
        index: GeometryIndex,
        geometry_type: GeometryType,
    },
    #[error("could not parse geometry index from '{input}'")]
    Unparseable { input: String },
    /// The operation is not defined for the index given.
    #[error("invalid operation: {message}")]
    InvalidOperation { message: String },
}

/// Result type used by the index operations.
pub type IndexResult<R> = Result<R, GeometryIndexNotFoundError>;
