use super::{
    internal::wkt_writer, GeometryOps, GeometryOptions, GeometryRef, GeometryType, Point,
};
use crate::core::{math::Coordinate, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of points.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) points: Vec<Point<T>>,
}

impl<T> MultiPoint<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(srid: i32, precision: i32, points: Vec<Point<T>>) -> Self {
        MultiPoint {
            srid,
            precision,
            points,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Member at position `n`, `None` if out of range.
    #[inline]
    pub fn geometry_n(&self, n: isize) -> Option<&Point<T>> {
        usize::try_from(n).ok().and_then(|i| self.points.get(i))
    }
}

impl<T> GeometryOps for MultiPoint<T>
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
        GeometryType::MultiPoint
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::MultiPoint(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn num_points(&self) -> usize {
        self.points.iter().map(|p| p.num_points()).sum()
    }

    fn coordinates(&self) -> Vec<Coordinate<T>> {
        self.points.iter().filter_map(|p| p.coordinate()).collect()
    }

    #[inline]
    fn num_geometries(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn area(&self) -> T {
        T::zero()
    }

    #[inline]
    fn length(&self) -> T {
        T::zero()
    }

    /// Mean position of all non-empty members.
    fn centroid(&self) -> Option<Coordinate<T>> {
        let coords = self.coordinates();
        if coords.is_empty() {
            return None;
        }

        let (sum, count) = coords
            .iter()
            .fold((Coordinate::zero(), T::zero()), |(sum, count), c| {
                (sum + c, count + T::one())
            });
        Some(sum.scale(T::one() / count))
    }

    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        self.points
            .iter()
            .filter_map(|p| p.distance(coordinate))
            .reduce(|a, b| num_traits::real::Real::min(a, b))
    }

    fn is_simple(&self) -> bool {
        self.points.iter().all(|p| p.is_simple())
    }

    fn is_valid_opt(&self, options: &GeometryOptions<T>) -> bool {
        self.points.iter().all(|p| p.is_valid_opt(options))
    }

    fn to_wkt(&self) -> String {
        let body = wkt_writer::group(self.points.iter().map(|p| match p.coordinate() {
            Some(c) => format!("({})", wkt_writer::coordinate(&c)),
            None => wkt_writer::EMPTY.to_string(),
        }));
        wkt_writer::tagged(GeometryType::MultiPoint.wkt_tag(), &body)
    }
}
