use super::{
    internal::wkt_writer, polygon::polygon_wkt_body, GeometryOps, GeometryOptions, GeometryRef,
    GeometryType, Polygon,
};
use crate::core::{math::Coordinate, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of polygons.
///
/// Members are validated individually, overlap between members is not checked.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) polygons: Vec<Polygon<T>>,
}

impl<T> MultiPolygon<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(srid: i32, precision: i32, polygons: Vec<Polygon<T>>) -> Self {
        MultiPolygon {
            srid,
            precision,
            polygons,
        }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon<T>] {
        &self.polygons
    }

    /// Member at position `n`, `None` if out of range.
    #[inline]
    pub fn geometry_n(&self, n: isize) -> Option<&Polygon<T>> {
        usize::try_from(n).ok().and_then(|i| self.polygons.get(i))
    }

    /// Returns `true` if any member polygon contains `coordinate`, see
    /// [Polygon::contains_coordinate].
    pub fn contains_coordinate(&self, coordinate: Coordinate<T>) -> bool {
        self.polygons
            .iter()
            .any(|p| p.contains_coordinate(coordinate))
    }
}

impl<T> GeometryOps for MultiPolygon<T>
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
        GeometryType::MultiPolygon
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::MultiPolygon(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    fn num_points(&self) -> usize {
        self.polygons.iter().map(|p| p.num_points()).sum()
    }

    fn coordinates(&self) -> Vec<Coordinate<T>> {
        self.polygons.iter().flat_map(|p| p.coordinates()).collect()
    }

    #[inline]
    fn num_geometries(&self) -> usize {
        self.polygons.len()
    }

    fn area(&self) -> T {
        self.polygons
            .iter()
            .fold(T::zero(), |acc, p| acc + p.area())
    }

    fn length(&self) -> T {
        self.polygons
            .iter()
            .fold(T::zero(), |acc, p| acc + p.length())
    }

    /// Area weighted average of the member centroids.
    fn centroid(&self) -> Option<Coordinate<T>> {
        let mut total_area = T::zero();
        let mut sum = Coordinate::zero();
        let mut any = false;
        for polygon in &self.polygons {
            if let Some(c) = polygon.centroid() {
                let area = polygon.area();
                sum = sum + c.scale(area);
                total_area = total_area + area;
                any = true;
            }
        }

        if !any {
            return None;
        }

        Some(Coordinate::new(sum.x / total_area, sum.y / total_area))
    }

    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        self.polygons
            .iter()
            .filter_map(|p| p.distance(coordinate))
            .reduce(|a, b| num_traits::real::Real::min(a, b))
    }

    fn is_simple(&self) -> bool {
        self.polygons.iter().all(|p| p.is_simple())
    }

    fn is_valid_opt(&self, options: &GeometryOptions<T>) -> bool {
        self.polygons.iter().all(|p| p.is_valid_opt(options))
    }

    fn to_wkt(&self) -> String {
        let body = wkt_writer::group(self.polygons.iter().map(polygon_wkt_body));
        wkt_writer::tagged(GeometryType::MultiPolygon.wkt_tag(), &body)
    }
}
