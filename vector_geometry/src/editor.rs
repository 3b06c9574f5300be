//! In place modification of geometries.
//!
//! Geometries are read-only through their public API, the functions of this module are the only
//! way to change one after creation. Setters taking a position are bounds checked and return
//! `false` (leaving the geometry unchanged) when the position does not exist.
//!
//! SRID and precision are never changed by an edit.
use crate::{
    core::{math::Coordinate, traits::Real},
    geometry::{
        Geometry, GeometryRef, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon,
        Point, Polygon,
    },
};

mod sealed {
    use crate::core::math::Coordinate;

    pub trait CoordinateSequence<T> {
        fn coordinates_mut(&mut self) -> &mut Vec<Coordinate<T>>;
    }
}

/// Geometries holding a single editable coordinate sequence: [LineString] and [LinearRing].
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait LinearGeometry<T>: sealed::CoordinateSequence<T> {}

impl<T> sealed::CoordinateSequence<T> for LineString<T> {
    #[inline]
    fn coordinates_mut(&mut self) -> &mut Vec<Coordinate<T>> {
        &mut self.coordinates
    }
}

impl<T> LinearGeometry<T> for LineString<T> {}

impl<T> sealed::CoordinateSequence<T> for LinearRing<T> {
    #[inline]
    fn coordinates_mut(&mut self) -> &mut Vec<Coordinate<T>> {
        &mut self.coordinates
    }
}

impl<T> LinearGeometry<T> for LinearRing<T> {}

#[inline]
fn replace_n<E>(items: &mut [E], item: E, n: usize) -> bool {
    match items.get_mut(n) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Replace all coordinates of a line string or ring. Rings are not closed automatically.
#[inline]
pub fn set_coordinates<T, L>(geometry: &mut L, coordinates: Vec<Coordinate<T>>) -> bool
where
    T: Real,
    L: LinearGeometry<T>,
{
    *geometry.coordinates_mut() = coordinates;
    true
}

/// Replace the coordinate at position `n`, returns `false` if the geometry is empty or `n` is out
/// of range.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// let factory = GeometryFactory::new(4326, -1);
/// let mut line = factory.create_line_string(&[coord(0.0, 0.0), coord(1.0, 0.0)]);
/// assert!(editor::set_coordinate_n(&mut line, coord(2.0, 0.0), 1));
/// assert!(!editor::set_coordinate_n(&mut line, coord(2.0, 0.0), 2));
/// assert_eq!(line.coordinate_n(1), Some(coord(2.0, 0.0)));
/// ```
#[inline]
pub fn set_coordinate_n<T, L>(geometry: &mut L, coordinate: Coordinate<T>, n: usize) -> bool
where
    T: Real,
    L: LinearGeometry<T>,
{
    replace_n(geometry.coordinates_mut(), coordinate, n)
}

/// Set (or clear with `None`) the position of a point.
#[inline]
pub fn set_coordinate<T>(point: &mut Point<T>, coordinate: Option<Coordinate<T>>) -> bool
where
    T: Real,
{
    point.coordinate = coordinate;
    true
}

#[inline]
pub fn set_points<T>(multi_point: &mut MultiPoint<T>, points: Vec<Point<T>>) -> bool
where
    T: Real,
{
    multi_point.points = points;
    true
}

#[inline]
pub fn set_point_n<T>(multi_point: &mut MultiPoint<T>, point: Point<T>, n: usize) -> bool
where
    T: Real,
{
    replace_n(&mut multi_point.points, point, n)
}

/// Append `point` to the members, does nothing and returns `false` if `point` is `None`.
#[inline]
pub fn add_point<T>(multi_point: &mut MultiPoint<T>, point: Option<Point<T>>) -> bool
where
    T: Real,
{
    match point {
        Some(p) => {
            multi_point.points.push(p);
            true
        }
        None => false,
    }
}

#[inline]
pub fn set_line_strings<T>(
    multi_line_string: &mut MultiLineString<T>,
    line_strings: Vec<LineString<T>>,
) -> bool
where
    T: Real,
{
    multi_line_string.line_strings = line_strings;
    true
}

#[inline]
pub fn set_line_string_n<T>(
    multi_line_string: &mut MultiLineString<T>,
    line_string: LineString<T>,
    n: usize,
) -> bool
where
    T: Real,
{
    replace_n(&mut multi_line_string.line_strings, line_string, n)
}

/// Set the exterior ring. Setting `None` makes the polygon empty, interior rings are kept but take
/// no part in any query while the polygon is empty.
#[inline]
pub fn set_exterior_ring<T>(polygon: &mut Polygon<T>, exterior_ring: Option<LinearRing<T>>) -> bool
where
    T: Real,
{
    polygon.exterior_ring = exterior_ring;
    true
}

#[inline]
pub fn set_interior_rings<T>(polygon: &mut Polygon<T>, interior_rings: Vec<LinearRing<T>>) -> bool
where
    T: Real,
{
    polygon.interior_rings = interior_rings;
    true
}

#[inline]
pub fn set_interior_ring_n<T>(polygon: &mut Polygon<T>, interior_ring: LinearRing<T>, n: usize) -> bool
where
    T: Real,
{
    replace_n(&mut polygon.interior_rings, interior_ring, n)
}

#[inline]
pub fn set_polygons<T>(multi_polygon: &mut MultiPolygon<T>, polygons: Vec<Polygon<T>>) -> bool
where
    T: Real,
{
    multi_polygon.polygons = polygons;
    true
}

#[inline]
pub fn set_polygon_n<T>(multi_polygon: &mut MultiPolygon<T>, polygon: Polygon<T>, n: usize) -> bool
where
    T: Real,
{
    replace_n(&mut multi_polygon.polygons, polygon, n)
}

#[inline]
fn remove_n<E>(items: &mut Vec<E>, n: usize) -> bool {
    if n < items.len() {
        items.remove(n);
        true
    } else {
        false
    }
}

/// Remove the member at position `n`, returns `false` if `n` is out of range.
#[inline]
pub fn remove_point_n<T>(multi_point: &mut MultiPoint<T>, n: usize) -> bool
where
    T: Real,
{
    remove_n(&mut multi_point.points, n)
}

#[inline]
pub fn remove_line_string_n<T>(multi_line_string: &mut MultiLineString<T>, n: usize) -> bool
where
    T: Real,
{
    remove_n(&mut multi_line_string.line_strings, n)
}

#[inline]
pub fn remove_polygon_n<T>(multi_polygon: &mut MultiPolygon<T>, n: usize) -> bool
where
    T: Real,
{
    remove_n(&mut multi_polygon.polygons, n)
}

#[inline]
pub fn remove_interior_ring_n<T>(polygon: &mut Polygon<T>, n: usize) -> bool
where
    T: Real,
{
    remove_n(&mut polygon.interior_rings, n)
}

/// Mutable view of one geometry inside a geometry tree, used to navigate to the target of an
/// edit.
#[derive(Debug)]
pub(crate) enum GeometryMut<'a, T> {
    Point(&'a mut Point<T>),
    LineString(&'a mut LineString<T>),
    LinearRing(&'a mut LinearRing<T>),
    Polygon(&'a mut Polygon<T>),
    MultiPoint(&'a mut MultiPoint<T>),
    MultiLineString(&'a mut MultiLineString<T>),
    MultiPolygon(&'a mut MultiPolygon<T>),
}

impl<'a, T> GeometryMut<'a, T>
where
    T: Real,
{
    pub(crate) fn new(geometry: &'a mut Geometry<T>) -> Self {
        match geometry {
            Geometry::Point(g) => GeometryMut::Point(g),
            Geometry::LineString(g) => GeometryMut::LineString(g),
            Geometry::LinearRing(g) => GeometryMut::LinearRing(g),
            Geometry::Polygon(g) => GeometryMut::Polygon(g),
            Geometry::MultiPoint(g) => GeometryMut::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryMut::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryMut::MultiPolygon(g),
        }
    }

    /// Read-only view of the same geometry.
    pub(crate) fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        match self {
            GeometryMut::Point(g) => GeometryRef::Point(&**g),
            GeometryMut::LineString(g) => GeometryRef::LineString(&**g),
            GeometryMut::LinearRing(g) => GeometryRef::LinearRing(&**g),
            GeometryMut::Polygon(g) => GeometryRef::Polygon(&**g),
            GeometryMut::MultiPoint(g) => GeometryRef::MultiPoint(&**g),
            GeometryMut::MultiLineString(g) => GeometryRef::MultiLineString(&**g),
            GeometryMut::MultiPolygon(g) => GeometryRef::MultiPolygon(&**g),
        }
    }

    /// Child geometry at position `n`: polygon rings (exterior ring first) or multi geometry
    /// members. `None` for leaf geometries and positions that do not exist.
    pub(crate) fn child(self, n: usize) -> Option<GeometryMut<'a, T>> {
        match self {
            GeometryMut::Polygon(poly) => {
                if n == 0 {
                    poly.exterior_ring.as_mut().map(GeometryMut::LinearRing)
                } else if poly.exterior_ring.is_some() {
                    poly.interior_rings
                        .get_mut(n - 1)
                        .map(GeometryMut::LinearRing)
                } else {
                    None
                }
            }
            GeometryMut::MultiPoint(g) => g.points.get_mut(n).map(GeometryMut::Point),
            GeometryMut::MultiLineString(g) => {
                g.line_strings.get_mut(n).map(GeometryMut::LineString)
            }
            GeometryMut::MultiPolygon(g) => g.polygons.get_mut(n).map(GeometryMut::Polygon),
            GeometryMut::Point(_) | GeometryMut::LineString(_) | GeometryMut::LinearRing(_) => None,
        }
    }
}
