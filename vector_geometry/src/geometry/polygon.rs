use super::{
    internal::wkt_writer,
    relate, GeometryOps, GeometryOptions, GeometryRef, GeometryType, LinearRing,
};
use crate::core::{
    math::{ring_winding_number, Coordinate},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exterior ring (shell) with zero or more interior rings (holes).
///
/// A polygon is empty when it has no exterior ring. Holes are not checked at construction, a
/// polygon is valid when every ring is valid and no two rings (shell included) intersect.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) exterior_ring: Option<LinearRing<T>>,
    pub(crate) interior_rings: Vec<LinearRing<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(
        srid: i32,
        precision: i32,
        exterior_ring: Option<LinearRing<T>>,
        interior_rings: Vec<LinearRing<T>>,
    ) -> Self {
        Polygon {
            srid,
            precision,
            exterior_ring,
            interior_rings,
        }
    }

    #[inline]
    pub fn exterior_ring(&self) -> Option<&LinearRing<T>> {
        self.exterior_ring.as_ref()
    }

    #[inline]
    pub fn interior_rings(&self) -> &[LinearRing<T>] {
        &self.interior_rings
    }

    /// Hole at position `n`, `None` if out of range.
    #[inline]
    pub fn interior_ring_n(&self, n: usize) -> Option<&LinearRing<T>> {
        self.interior_rings.get(n)
    }

    #[inline]
    pub fn num_interior_rings(&self) -> usize {
        self.interior_rings.len()
    }

    /// Iterate the exterior ring followed by all holes, nothing if the polygon is empty.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing<T>> + '_ {
        let holes: &[LinearRing<T>] = match self.exterior_ring {
            Some(_) => &self.interior_rings,
            None => &[],
        };
        self.exterior_ring.iter().chain(holes)
    }

    /// Returns `true` if `coordinate` lies inside the exterior ring and outside every hole.
    ///
    /// Result is not defined for coordinates lying exactly on a ring, use
    /// [touches](super::touches) to test for that.
    pub fn contains_coordinate(&self, coordinate: Coordinate<T>) -> bool {
        let Some(shell) = &self.exterior_ring else {
            return false;
        };

        ring_winding_number(shell.as_coordinates(), coordinate) != 0
            && self
                .interior_rings
                .iter()
                .all(|hole| ring_winding_number(hole.as_coordinates(), coordinate) == 0)
    }

    /// Single geometries are their own only member: returns `self` for any `n`, including negative
    /// and out of range values.
    #[inline]
    pub fn geometry_n(&self, _n: isize) -> &Self {
        self
    }
}

impl<T> GeometryOps for Polygon<T>
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
        GeometryType::Polygon
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::Polygon(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.exterior_ring.is_none()
    }

    fn num_points(&self) -> usize {
        self.rings().map(|r| r.num_points()).sum()
    }

    fn coordinates(&self) -> Vec<Coordinate<T>> {
        self.rings()
            .flat_map(|r| r.as_coordinates().iter().copied())
            .collect()
    }

    #[inline]
    fn num_geometries(&self) -> usize {
        1
    }

    /// Exterior ring area minus the area of every hole.
    fn area(&self) -> T {
        let Some(shell) = &self.exterior_ring else {
            return T::zero();
        };

        self.interior_rings
            .iter()
            .fold(shell.area(), |acc, hole| acc - hole.area())
    }

    /// Sum of the lengths of all rings.
    fn length(&self) -> T {
        self.rings().fold(T::zero(), |acc, r| acc + r.length())
    }

    /// Centroid of the exterior ring, holes are not taken into account.
    fn centroid(&self) -> Option<Coordinate<T>> {
        self.exterior_ring.as_ref().and_then(|shell| shell.centroid())
    }

    /// Minimum distance to the exterior ring and every hole.
    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        self.rings()
            .filter_map(|r| r.distance(coordinate))
            .reduce(|a, b| num_traits::real::Real::min(a, b))
    }

    fn is_simple(&self) -> bool {
        self.rings().all(|r| r.is_simple())
    }

    fn is_valid_opt(&self, options: &GeometryOptions<T>) -> bool {
        if self.is_empty() {
            return true;
        }

        if !self.rings().all(|r| r.is_valid_opt(options)) {
            return false;
        }

        let rings = self.rings().collect::<Vec<_>>();
        for (i, r1) in rings.iter().enumerate() {
            for r2 in rings.iter().skip(i + 1) {
                if relate::linear_intersects(
                    r1.as_coordinates(),
                    r2.as_coordinates(),
                    options.touch_eps,
                ) {
                    return false;
                }
            }
        }

        true
    }

    fn to_wkt(&self) -> String {
        wkt_writer::tagged(GeometryType::Polygon.wkt_tag(), &polygon_wkt_body(self))
    }
}

/// `"((shell), (hole1), ...)"` or `"EMPTY"`.
pub(crate) fn polygon_wkt_body<T>(polygon: &Polygon<T>) -> String
where
    T: Real,
{
    if polygon.is_empty() {
        return wkt_writer::EMPTY.to_string();
    }

    wkt_writer::group(
        polygon
            .rings()
            .map(|r| wkt_writer::coordinate_seq(r.as_coordinates())),
    )
}
