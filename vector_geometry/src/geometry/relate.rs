//! Spatial predicates between geometries and between a geometry and a single position.
use super::{internal::coord_seq, GeometryOps, GeometryOptions, GeometryRef};
use crate::core::{math::Coordinate, traits::Real};

/// The parts of a geometry taking part in boundary tests.
#[derive(Debug, Copy, Clone)]
enum Primitive<'a, T> {
    Coordinate(Coordinate<T>),
    Linear(&'a [Coordinate<T>]),
}

impl<'a, T> Primitive<'a, T>
where
    T: Real,
{
    /// A single coordinate sequence acts as the coordinate it holds.
    #[inline]
    fn from_slice(coords: &'a [Coordinate<T>]) -> Self {
        if coords.len() == 1 {
            Primitive::Coordinate(coords[0])
        } else {
            Primitive::Linear(coords)
        }
    }
}

#[inline]
fn push_slice<'a, T>(out: &mut Vec<Primitive<'a, T>>, coords: &'a [Coordinate<T>])
where
    T: Real,
{
    if !coords.is_empty() {
        out.push(Primitive::from_slice(coords));
    }
}

fn collect_primitives<'a, T>(geometry: GeometryRef<'a, T>, out: &mut Vec<Primitive<'a, T>>)
where
    T: Real,
{
    match geometry {
        GeometryRef::Point(p) => {
            if let Some(c) = p.coordinate() {
                out.push(Primitive::Coordinate(c));
            }
        }
        GeometryRef::LineString(ls) => push_slice(out, ls.as_coordinates()),
        GeometryRef::LinearRing(r) => push_slice(out, r.as_coordinates()),
        GeometryRef::Polygon(poly) => {
            for ring in poly.rings() {
                push_slice(out, ring.as_coordinates());
            }
        }
        GeometryRef::MultiPoint(mp) => {
            for p in mp.points() {
                collect_primitives(GeometryRef::Point(p), out);
            }
        }
        GeometryRef::MultiLineString(mls) => {
            for ls in mls.line_strings() {
                collect_primitives(GeometryRef::LineString(ls), out);
            }
        }
        GeometryRef::MultiPolygon(mpoly) => {
            for poly in mpoly.polygons() {
                collect_primitives(GeometryRef::Polygon(poly), out);
            }
        }
    }
}

fn primitives<T>(geometry: GeometryRef<'_, T>) -> Vec<Primitive<'_, T>>
where
    T: Real,
{
    let mut result = Vec::new();
    collect_primitives(geometry, &mut result);
    result
}

fn primitives_intersect<T>(a: Primitive<'_, T>, b: Primitive<'_, T>, eps: T) -> bool
where
    T: Real,
{
    match (a, b) {
        (Primitive::Coordinate(c1), Primitive::Coordinate(c2)) => c1 == c2,
        (Primitive::Coordinate(c), Primitive::Linear(coords))
        | (Primitive::Linear(coords), Primitive::Coordinate(c)) => {
            coord_seq::touches(coords, c, eps)
        }
        (Primitive::Linear(coords1), Primitive::Linear(coords2)) => {
            coord_seq::any_segments_intersect(coords1, coords2)
                || coord_seq::any_vertex_touches(coords1, coords2, eps)
                || coord_seq::any_vertex_touches(coords2, coords1, eps)
        }
    }
}

/// Boundary intersect test between two geometries, see [GeometryOps::intersects_opt].
pub(crate) fn intersects<T>(
    a: GeometryRef<'_, T>,
    b: GeometryRef<'_, T>,
    options: &GeometryOptions<T>,
) -> bool
where
    T: Real,
{
    let a_parts = primitives(a);
    if a_parts.is_empty() {
        return false;
    }

    let b_parts = primitives(b);
    a_parts.iter().any(|&pa| {
        b_parts
            .iter()
            .any(|&pb| primitives_intersect(pa, pb, options.touch_eps))
    })
}

/// Returns `true` if two coordinate sequences cross, or a vertex of either lies within `eps` of the
/// other. Empty sequences never intersect.
pub(crate) fn linear_intersects<T>(coords1: &[Coordinate<T>], coords2: &[Coordinate<T>], eps: T) -> bool
where
    T: Real,
{
    if coords1.is_empty() || coords2.is_empty() {
        return false;
    }

    primitives_intersect(
        Primitive::from_slice(coords1),
        Primitive::from_slice(coords2),
        eps,
    )
}

/// Returns `true` if `coordinate` lies on the boundary of `geometry`: equal to one of its points or
/// within [Real::touch_epsilon] of one of its segments.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// let factory = GeometryFactory::new(4326, -1);
/// let line = factory.create_line_string(&[coord(0.0, 0.0), coord(10.0, 0.0)]);
/// assert!(touches(&line, coord(5.0, 0.0)));
/// assert!(!touches(&line, coord(5.0, 1.0)));
/// ```
pub fn touches<G>(geometry: &G, coordinate: Coordinate<G::Num>) -> bool
where
    G: GeometryOps + ?Sized,
{
    let eps = G::Num::touch_epsilon();
    primitives(geometry.as_geometry_ref())
        .into_iter()
        .any(|p| primitives_intersect(p, Primitive::Coordinate(coordinate), eps))
}

/// Returns `true` if `coordinate` lies in the interior of an areal geometry: inside a polygon's
/// exterior ring and outside all of its interior rings. Always `false` for point and line
/// geometries.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// let factory = GeometryFactory::new(4326, -1);
/// let square = factory.create_polygon_from_bbox(&Bbox::new(0.0, 0.0, 10.0, 10.0));
/// assert!(coordinate_within(&square, coord(5.0, 5.0)));
/// assert!(!coordinate_within(&square, coord(15.0, 5.0)));
/// ```
pub fn coordinate_within<G>(geometry: &G, coordinate: Coordinate<G::Num>) -> bool
where
    G: GeometryOps + ?Sized,
{
    match geometry.as_geometry_ref() {
        GeometryRef::Polygon(poly) => poly.contains_coordinate(coordinate),
        GeometryRef::MultiPolygon(mpoly) => mpoly.contains_coordinate(coordinate),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::coord;

    #[test]
    fn single_coordinate_slice_acts_as_point() {
        let eps = 1e-5;
        let line = [coord(0.0, 0.0), coord(10.0, 0.0)];
        assert!(linear_intersects(&[coord(3.0, 0.0)], &line, eps));
        assert!(linear_intersects(&line, &[coord(3.0, 0.0)], eps));
        assert!(!linear_intersects(&[coord(3.0, 1.0)], &line, eps));
        assert!(!linear_intersects(&[], &line, eps));
    }

    #[test]
    fn touching_end_point_intersects() {
        let eps = 1e-5;
        let a = [coord(0.0, 0.0), coord(10.0, 0.0)];
        // collinear continuation only shares the end point
        let b = [coord(10.0, 0.0), coord(20.0, 0.0)];
        assert!(linear_intersects(&a, &b, eps));
        let c = [coord(11.0, 0.0), coord(20.0, 0.0)];
        assert!(!linear_intersects(&a, &c, eps));
    }
}
