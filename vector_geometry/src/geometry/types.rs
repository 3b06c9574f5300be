//! Supporting public types used by the geometry trait methods.
use crate::core::traits::Real;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The concrete kind of a geometry.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryType {
    /// Type name, e.g. `"LineString"`.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
        }
    }

    /// Tag used as the prefix in well known text, e.g. `"LINESTRING"`.
    pub fn wkt_tag(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::LinearRing => "LINEARRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
        }
    }

    /// Returns `true` for the multi geometry types.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint | GeometryType::MultiLineString | GeometryType::MultiPolygon
        )
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Struct to hold options parameters used by geometry queries.
#[derive(Debug, Copy, Clone)]
pub struct GeometryOptions<T>
where
    T: Real,
{
    /// Distance below which a coordinate is considered to touch a segment.
    pub touch_eps: T,
    /// If true a valid linear ring requires at least 4 coordinates (3 distinct positions plus the
    /// closing coordinate), if false 3 coordinates are enough.
    pub strict_ring_size: bool,
}

impl<T> GeometryOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            touch_eps: T::touch_epsilon(),
            strict_ring_size: true,
        }
    }

    /// Minimum coordinate count of a valid linear ring for these options.
    #[inline]
    pub fn min_ring_size(&self) -> usize {
        if self.strict_ring_size {
            4
        } else {
            3
        }
    }
}

impl<T> Default for GeometryOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
