//! Line segment math: intersection tests, intersection points, distances, and containment of a
//! position within a closed coordinate sequence.
use super::Coordinate;
use crate::core::traits::Real;

/// Returns `true` if `a` and `b` are both non-zero and share a sign.
#[inline]
fn same_sign<T>(a: T, b: T) -> bool
where
    T: Real,
{
    a != T::zero() && b != T::zero() && (a > T::zero()) == (b > T::zero())
}

/// Returns `true` if `point` is strictly left of the direction `p0->p1`.
#[inline]
fn is_left<T>(p0: Coordinate<T>, p1: Coordinate<T>, point: Coordinate<T>) -> bool
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0) > T::zero()
}

/// Tests if the segment `p1->p2` intersects the segment `q1->q2`.
///
/// Each segment is tested against the line through the other: if both end points of one segment
/// lie strictly on the same side of the other's line there is no intersect. End points lying on the
/// other segment count as intersecting (touching segments intersect). Collinear segments are
/// reported as not intersecting, even when they overlap.
///
/// # Examples
///
/// ```
/// # use vector_geometry::core::math::*;
/// // crossing
/// assert!(segments_intersect(coord(0.0, 0.0), coord(2.0, 2.0), coord(0.0, 2.0), coord(2.0, 0.0)));
/// // touching at an end point
/// assert!(segments_intersect(coord(0.0, 0.0), coord(1.0, 1.0), coord(1.0, 1.0), coord(2.0, 0.0)));
/// // collinear
/// assert!(!segments_intersect(coord(0.0, 0.0), coord(2.0, 0.0), coord(1.0, 0.0), coord(3.0, 0.0)));
/// ```
pub fn segments_intersect<T>(
    p1: Coordinate<T>,
    p2: Coordinate<T>,
    q1: Coordinate<T>,
    q2: Coordinate<T>,
) -> bool
where
    T: Real,
{
    // line through p1, p2 as a1 * x + b1 * y + c1 = 0
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = p2.x * p1.y - p1.x * p2.y;

    let r3 = a1 * q1.x + b1 * q1.y + c1;
    let r4 = a1 * q2.x + b1 * q2.y + c1;
    if same_sign(r3, r4) {
        return false;
    }

    // line through q1, q2 as a2 * x + b2 * y + c2 = 0
    let a2 = q2.y - q1.y;
    let b2 = q1.x - q2.x;
    let c2 = q2.x * q1.y - q1.x * q2.y;

    let r1 = a2 * p1.x + b2 * p1.y + c2;
    let r2 = a2 * p2.x + b2 * p2.y + c2;
    if same_sign(r1, r2) {
        return false;
    }

    // collinear
    a1 * b2 - a2 * b1 != T::zero()
}

/// Returns the intersection point of the infinite lines through `p1->p2` and `q1->q2`.
///
/// Returns `None` if the lines are parallel (or either segment is a single point), using fuzzy
/// comparison of the perpendicular dot product with zero.
///
/// # Examples
///
/// ```
/// # use vector_geometry::core::math::*;
/// let p = line_intersection_point(coord(0.0, 0.0), coord(1.0, 0.0), coord(3.0, 1.0), coord(3.0, 2.0));
/// assert_eq!(p, Some(coord(3.0, 0.0)));
/// let parallel = line_intersection_point(coord(0.0, 0.0), coord(1.0, 0.0), coord(0.0, 1.0), coord(1.0, 1.0));
/// assert_eq!(parallel, None);
/// ```
pub fn line_intersection_point<T>(
    p1: Coordinate<T>,
    p2: Coordinate<T>,
    q1: Coordinate<T>,
    q2: Coordinate<T>,
) -> Option<Coordinate<T>>
where
    T: Real,
{
    // parametric form P(t) = p1 + t * (p2 - p1) solved with perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    let v = p2 - p1;
    let u = q2 - q1;
    let v_pdot_u = v.perp_dot(u);
    if v_pdot_u.fuzzy_eq_zero() {
        return None;
    }

    let w = p1 - q1;
    let t = u.perp_dot(w) / v_pdot_u;
    Some(p1 + v.scale(t))
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
///
/// If the segment has zero length `p0` is returned.
///
/// # Examples
///
/// ```
/// # use vector_geometry::core::math::*;
/// let p0 = coord(0.0, 0.0);
/// let p1 = coord(10.0, 0.0);
/// assert_eq!(nearest_point_on_segment(p0, p1, coord(4.0, 3.0)), coord(4.0, 0.0));
/// assert_eq!(nearest_point_on_segment(p0, p1, coord(-4.0, 3.0)), p0);
/// assert_eq!(nearest_point_on_segment(p0, p1, coord(14.0, 3.0)), p1);
/// ```
#[inline]
pub fn nearest_point_on_segment<T>(
    p0: Coordinate<T>,
    p1: Coordinate<T>,
    point: Coordinate<T>,
) -> Coordinate<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1.fuzzy_lt(T::zero()) {
        return p0;
    }

    let c2 = v.length_squared();
    if c2.fuzzy_lt(c1) {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Shortest distance from `point` to the line segment from `p0` to `p1`.
#[inline]
pub fn distance_to_segment<T>(p0: Coordinate<T>, p1: Coordinate<T>, point: Coordinate<T>) -> T
where
    T: Real,
{
    nearest_point_on_segment(p0, p1, point).distance(point)
}

/// Calculate the winding number of the closed coordinate sequence `ring` around `point`.
///
/// The sequence is treated as closed whether or not the last coordinate repeats the first. For a
/// ring without self intersects the result is 1 (counter clockwise around the point), -1
/// (clockwise around the point) or 0 (point outside). Result is not defined for points lying on
/// the ring.
pub fn ring_winding_number<T>(ring: &[Coordinate<T>], point: Coordinate<T>) -> i32
where
    T: Real,
{
    let n = ring.len();
    if n < 2 {
        return 0;
    }

    let mut winding = 0;
    for i in 0..n {
        let v1 = ring[i];
        let v2 = ring[(i + 1) % n];
        if v1.y <= point.y {
            if v2.y > point.y && is_left(v1, v2, point) {
                // left and upward crossing
                winding += 1;
            }
        } else if v2.y <= point.y && !is_left(v1, v2, point) {
            // right and downward crossing
            winding -= 1;
        }
    }

    winding
}

/// Tests if `point` lies inside the closed coordinate sequence `ring` using the crossing number
/// (even-odd) rule.
///
/// A horizontal ray is cast from `point` and crossings with the ring's edges are counted, an odd
/// count means inside. As with [ring_winding_number] the sequence is treated as closed and the
/// result for points lying on the ring is not defined.
///
/// # Examples
///
/// ```
/// # use vector_geometry::core::math::*;
/// let ring = [coord(0.0, 0.0), coord(4.0, 0.0), coord(4.0, 4.0), coord(0.0, 4.0)];
/// assert!(point_within_ring(&ring, coord(1.0, 3.0)));
/// assert!(!point_within_ring(&ring, coord(-1.0, 3.0)));
/// ```
pub fn point_within_ring<T>(ring: &[Coordinate<T>], point: Coordinate<T>) -> bool
where
    T: Real,
{
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = ring[i];
        let vj = ring[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::coord;

    #[test]
    fn segments_intersect_cases() {
        let p1 = coord(0.0, 0.0);
        let p2 = coord(10.0, 0.0);
        // t junction
        assert!(segments_intersect(p1, p2, coord(5.0, 0.0), coord(5.0, 5.0)));
        // disjoint
        assert!(!segments_intersect(p1, p2, coord(5.0, 1.0), coord(5.0, 5.0)));
        // line crosses but segment stops short
        assert!(!segments_intersect(p1, p2, coord(11.0, -1.0), coord(11.0, 1.0)));
        // parallel
        assert!(!segments_intersect(p1, p2, coord(0.0, 1.0), coord(10.0, 1.0)));
    }

    #[test]
    fn degenerate_segment_closest_point() {
        let p = coord(2.0, 2.0);
        assert_eq!(nearest_point_on_segment(p, p, coord(5.0, 6.0)), p);
        assert_eq!(distance_to_segment(p, p, coord(5.0, 6.0)), 5.0);
    }

    #[test]
    fn winding_number_square() {
        let square = [
            coord(0.0, 0.0),
            coord(4.0, 0.0),
            coord(4.0, 4.0),
            coord(0.0, 4.0),
            coord(0.0, 0.0),
        ];
        assert_eq!(ring_winding_number(&square, coord(2.0, 2.0)), 1);
        assert_eq!(ring_winding_number(&square, coord(5.0, 2.0)), 0);
        let reversed: Vec<_> = square.iter().rev().copied().collect();
        assert_eq!(ring_winding_number(&reversed, coord(2.0, 2.0)), -1);
    }

    #[test]
    fn crossing_number_matches_winding_for_simple_ring() {
        let l_shape = [
            coord(0.0, 0.0),
            coord(4.0, 0.0),
            coord(4.0, 1.0),
            coord(1.0, 1.0),
            coord(1.0, 4.0),
            coord(0.0, 4.0),
            coord(0.0, 0.0),
        ];
        for p in [
            coord(0.5, 0.5),
            coord(3.0, 0.5),
            coord(0.5, 3.0),
            coord(3.0, 3.0),
            coord(-1.0, 0.5),
        ] {
            assert_eq!(
                point_within_ring(&l_shape, p),
                ring_winding_number(&l_shape, p) != 0
            );
        }
        assert!(!point_within_ring(&l_shape, coord(3.0, 3.0)));
    }
}
