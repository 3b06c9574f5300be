use super::{
    internal::{coord_seq, wkt_writer},
    GeometryOps, GeometryOptions, GeometryRef, GeometryType,
};
use crate::core::{math::Coordinate, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed line string: the first coordinate equals the last.
///
/// [GeometryFactory::create_linear_ring](crate::factory::GeometryFactory::create_linear_ring)
/// closes open input by appending a copy of the first coordinate.
///
/// A ring is valid when empty, or when it is closed, holds enough coordinates (see
/// [GeometryOptions::strict_ring_size]) and has no self intersects.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) coordinates: Vec<Coordinate<T>>,
}

impl<T> LinearRing<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(srid: i32, precision: i32, coordinates: Vec<Coordinate<T>>) -> Self {
        LinearRing {
            srid,
            precision,
            coordinates,
        }
    }

    /// Borrow the coordinate sequence (closing coordinate included).
    #[inline]
    pub fn as_coordinates(&self) -> &[Coordinate<T>] {
        &self.coordinates
    }

    /// Coordinate at position `n`, `None` if out of range.
    #[inline]
    pub fn coordinate_n(&self, n: usize) -> Option<Coordinate<T>> {
        self.coordinates.get(n).copied()
    }

    /// Returns `true` if the ring is non-empty and its first and last coordinates are equal.
    #[inline]
    pub fn is_closed(&self) -> bool {
        coord_seq::is_closed(&self.coordinates)
    }

    /// Number of distinct vertexes, the closing coordinate is not counted.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Shoelace area, positive if the ring runs counter clockwise and negative if it runs
    /// clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector_geometry::prelude::*;
    /// let factory = GeometryFactory::new(4326, -1);
    /// let ring = factory.create_linear_ring(&[coord(0.0, 0.0), coord(2.0, 0.0), coord(2.0, 2.0)]);
    /// assert_eq!(ring.signed_area(), 2.0);
    /// let reversed = factory.create_linear_ring(&[coord(2.0, 2.0), coord(2.0, 0.0), coord(0.0, 0.0)]);
    /// assert_eq!(reversed.signed_area(), -2.0);
    /// assert_eq!(reversed.area(), 2.0);
    /// ```
    #[inline]
    pub fn signed_area(&self) -> T {
        coord_seq::signed_area(&self.coordinates)
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > T::zero()
    }

    /// Single geometries are their own only member: returns `self` for any `n`, including negative
    /// and out of range values.
    #[inline]
    pub fn geometry_n(&self, _n: isize) -> &Self {
        self
    }
}

impl<T> GeometryOps for LinearRing<T>
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
        GeometryType::LinearRing
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::LinearRing(self)
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

    /// Enclosed area, independent of ring direction.
    fn area(&self) -> T {
        self.signed_area().abs()
    }

    fn length(&self) -> T {
        coord_seq::length(&self.coordinates)
    }

    /// Length weighted centroid of the ring's segments.
    fn centroid(&self) -> Option<Coordinate<T>> {
        coord_seq::centroid(&self.coordinates)
    }

    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        coord_seq::distance(&self.coordinates, coordinate)
    }

    fn is_simple(&self) -> bool {
        !coord_seq::has_self_intersect(&self.coordinates)
    }

    fn is_valid_opt(&self, options: &GeometryOptions<T>) -> bool {
        if self.coordinates.is_empty() {
            return true;
        }

        self.is_closed()
            && self.coordinates.len() >= options.min_ring_size()
            && self.is_simple()
    }

    fn to_wkt(&self) -> String {
        wkt_writer::tagged(
            GeometryType::LinearRing.wkt_tag(),
            &wkt_writer::coordinate_seq(&self.coordinates),
        )
    }
}
