use super::{
    internal::{coord_seq, wkt_writer},
    GeometryOps, GeometryOptions, GeometryRef, GeometryType,
};
use crate::core::{math::Coordinate, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of coordinates forming connected line segments. Not required to be closed.
///
/// A line string is empty when it holds no coordinates. It is valid when empty or when it holds
/// more than one coordinate, a line of a single isolated coordinate is invalid.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) coordinates: Vec<Coordinate<T>>,
}

impl<T> LineString<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(srid: i32, precision: i32, coordinates: Vec<Coordinate<T>>) -> Self {
        LineString {
            srid,
            precision,
            coordinates,
        }
    }

    /// Borrow the coordinate sequence.
    #[inline]
    pub fn as_coordinates(&self) -> &[Coordinate<T>] {
        &self.coordinates
    }

    /// Coordinate at position `n`, `None` if out of range.
    #[inline]
    pub fn coordinate_n(&self, n: usize) -> Option<Coordinate<T>> {
        self.coordinates.get(n).copied()
    }

    #[inline]
    pub fn start_coordinate(&self) -> Option<Coordinate<T>> {
        self.coordinates.first().copied()
    }

    #[inline]
    pub fn end_coordinate(&self) -> Option<Coordinate<T>> {
        self.coordinates.last().copied()
    }

    /// Returns `true` if the line is non-empty and its first and last coordinates are equal.
    #[inline]
    pub fn is_closed(&self) -> bool {
        coord_seq::is_closed(&self.coordinates)
    }

    /// Single geometries are their own only member: returns `self` for any `n`, including negative
    /// and out of range values.
    #[inline]
    pub fn geometry_n(&self, _n: isize) -> &Self {
        self
    }
}

impl<T> GeometryOps for LineString<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn srid(&self) -> i32 {
        self.srid
    }

    #[inline]
    fn precision(&self) -> i32 {
        self.precision
    }

    #[inline]
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::LineString(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    #[inline]
    fn num_points(&self) -> usize {
        self.coordinates.len()
    }

    fn coordinates(&self) -> Vec<Coordinate<T>> {
        self.coordinates.clone()
    }

    #[inline]
    fn num_geometries(&self) -> usize {
        1
    }

    #[inline]
    fn area(&self) -> T {
        T::zero()
    }

    fn length(&self) -> T {
        coord_seq::length(&self.coordinates)
    }

    fn centroid(&self) -> Option<Coordinate<T>> {
        coord_seq::centroid(&self.coordinates)
    }

    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        coord_seq::distance(&self.coordinates, coordinate)
    }

    fn is_simple(&self) -> bool {
        !coord_seq::has_self_intersect(&self.coordinates)
    }

    fn is_valid_opt(&self, _options: &GeometryOptions<T>) -> bool {
        self.coordinates.is_empty() || self.coordinates.len() > 1
    }

    fn to_wkt(&self) -> String {
        wkt_writer::tagged(
            GeometryType::LineString.wkt_tag(),
            &wkt_writer::coordinate_seq(&self.coordinates),
        )
    }
}
