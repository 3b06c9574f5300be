use super::{
    internal::wkt_writer, GeometryOps, GeometryOptions, GeometryRef, GeometryType,
};
use crate::core::{
    math::{Bbox, Coordinate},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single position, or the empty point when no coordinate is set.
///
/// Points are always valid and simple.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) coordinate: Option<Coordinate<T>>,
}

impl<T> Point<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(srid: i32, precision: i32, coordinate: Option<Coordinate<T>>) -> Self {
        Point {
            srid,
            precision,
            coordinate,
        }
    }

    /// The point's position, `None` if the point is empty.
    #[inline]
    pub fn coordinate(&self) -> Option<Coordinate<T>> {
        self.coordinate
    }

    /// Single geometries are their own only member: returns `self` for any `n`, including negative
    /// and out of range values.
    #[inline]
    pub fn geometry_n(&self, _n: isize) -> &Self {
        self
    }
}

impl<T> GeometryOps for Point<T>
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
        GeometryType::Point
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::Point(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.coordinate.is_none()
    }

    #[inline]
    fn num_points(&self) -> usize {
        usize::from(self.coordinate.is_some())
    }

    fn coordinates(&self) -> Vec<Coordinate<T>> {
        self.coordinate.into_iter().collect()
    }

    #[inline]
    fn num_geometries(&self) -> usize {
        1
    }

    fn bounds(&self) -> Option<Bbox<T>> {
        self.coordinate
            .map(|c| Bbox::new(c.x, c.y, T::zero(), T::zero()))
    }

    #[inline]
    fn area(&self) -> T {
        T::zero()
    }

    #[inline]
    fn length(&self) -> T {
        T::zero()
    }

    #[inline]
    fn centroid(&self) -> Option<Coordinate<T>> {
        self.coordinate
    }

    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        self.coordinate.map(|c| c.distance(coordinate))
    }

    #[inline]
    fn is_simple(&self) -> bool {
        true
    }

    #[inline]
    fn is_valid_opt(&self, _options: &GeometryOptions<T>) -> bool {
        true
    }

    fn to_wkt(&self) -> String {
        let body = match &self.coordinate {
            Some(c) => format!("({})", wkt_writer::coordinate(c)),
            None => wkt_writer::EMPTY.to_string(),
        };
        wkt_writer::tagged(GeometryType::Point.wkt_tag(), &body)
    }
}
