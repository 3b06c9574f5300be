//! Algorithms over plain coordinate sequences, shared by line strings, linear rings and polygon
//! rings.
use crate::core::{
    math::{distance_to_segment, segments_intersect, Coordinate},
    traits::Real,
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

/// Pairwise segment tests above this count go through a spatial index.
const BRUTE_FORCE_PAIR_LIMIT: usize = 1024;

/// Returns `true` if the sequence is non-empty and its first and last coordinates are exactly
/// equal.
#[inline]
pub(crate) fn is_closed<T>(coords: &[Coordinate<T>]) -> bool
where
    T: Real,
{
    match (coords.first(), coords.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Appends a copy of the first coordinate if the sequence is not closed. A single coordinate is
/// never treated as closed.
pub(crate) fn close<T>(coords: &mut Vec<Coordinate<T>>)
where
    T: Real,
{
    match (coords.first(), coords.last()) {
        (Some(&first), Some(&last)) if coords.len() == 1 || first != last => coords.push(first),
        _ => {}
    }
}

/// Sum of consecutive segment lengths.
pub(crate) fn length<T>(coords: &[Coordinate<T>]) -> T
where
    T: Real,
{
    coords
        .windows(2)
        .fold(T::zero(), |acc, w| acc + w[0].distance(w[1]))
}

/// Shoelace sum over consecutive coordinate pairs divided by two. Positive for counter clockwise
/// closed sequences, negative for clockwise.
pub(crate) fn signed_area<T>(coords: &[Coordinate<T>]) -> T
where
    T: Real,
{
    let double_area = coords
        .windows(2)
        .fold(T::zero(), |acc, w| acc + w[0].x * w[1].y - w[1].x * w[0].y);
    double_area / T::two()
}

/// Length weighted average of segment midpoints, `None` for an empty sequence. A sequence with
/// zero total length divides by zero and yields NaN components.
pub(crate) fn centroid<T>(coords: &[Coordinate<T>]) -> Option<Coordinate<T>>
where
    T: Real,
{
    if coords.is_empty() {
        return None;
    }

    let mut total_length = T::zero();
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    for w in coords.windows(2) {
        let seg_length = w[0].distance(w[1]);
        let mid = w[0].midpoint(w[1]);
        sum_x = sum_x + mid.x * seg_length;
        sum_y = sum_y + mid.y * seg_length;
        total_length = total_length + seg_length;
    }

    Some(Coordinate::new(sum_x / total_length, sum_y / total_length))
}

/// Minimum distance from `point` to the segments of the sequence (or to its only coordinate),
/// `None` for an empty sequence.
pub(crate) fn distance<T>(coords: &[Coordinate<T>], point: Coordinate<T>) -> Option<T>
where
    T: Real,
{
    match coords.len() {
        0 => None,
        1 => Some(coords[0].distance(point)),
        _ => coords
            .windows(2)
            .map(|w| distance_to_segment(w[0], w[1], point))
            .reduce(|a, b| num_traits::real::Real::min(a, b)),
    }
}

/// Returns `true` if `point` lies within `eps` of any segment (or equals the only coordinate) of
/// the sequence.
pub(crate) fn touches<T>(coords: &[Coordinate<T>], point: Coordinate<T>, eps: T) -> bool
where
    T: Real,
{
    match coords.len() {
        0 => false,
        1 => coords[0] == point,
        _ => coords
            .windows(2)
            .any(|w| distance_to_segment(w[0], w[1], point) < eps),
    }
}

/// Returns `true` if any two non-adjacent segments of the sequence intersect.
///
/// Consecutive segments always share an end point and are skipped, as are the first and last
/// segments of a closed sequence.
pub(crate) fn has_self_intersect<T>(coords: &[Coordinate<T>]) -> bool
where
    T: Real,
{
    if coords.len() < 4 {
        // at most two segments which are adjacent
        return false;
    }

    let seg_count = coords.len() - 1;
    let closed = is_closed(coords);
    for i in 0..seg_count {
        for j in (i + 2)..seg_count {
            if closed && i == 0 && j == seg_count - 1 {
                continue;
            }

            if segments_intersect(coords[i], coords[i + 1], coords[j], coords[j + 1]) {
                return true;
            }
        }
    }

    false
}

/// Returns `true` if any segment of `coords1` intersects any segment of `coords2`.
pub(crate) fn any_segments_intersect<T>(coords1: &[Coordinate<T>], coords2: &[Coordinate<T>]) -> bool
where
    T: Real,
{
    if coords1.len() < 2 || coords2.len() < 2 {
        return false;
    }

    let brute_force = || {
        coords1.windows(2).any(|s1| {
            coords2
                .windows(2)
                .any(|s2| segments_intersect(s1[0], s1[1], s2[0], s2[1]))
        })
    };

    if (coords1.len() - 1) * (coords2.len() - 1) <= BRUTE_FORCE_PAIR_LIMIT {
        return brute_force();
    }

    let Some(index) = segment_aabb_index(coords2) else {
        return brute_force();
    };

    let fuzz = T::fuzzy_epsilon();
    coords1.windows(2).any(|s1| {
        let (min_x, min_y, max_x, max_y) = segment_box(s1[0], s1[1]);
        index
            .query(min_x - fuzz, min_y - fuzz, max_x + fuzz, max_y + fuzz)
            .into_iter()
            .any(|i| segments_intersect(s1[0], s1[1], coords2[i], coords2[i + 1]))
    })
}

/// `(min_x, min_y, max_x, max_y)` of the segment `a->b`.
#[inline]
fn segment_box<T>(a: Coordinate<T>, b: Coordinate<T>) -> (T, T, T, T)
where
    T: Real,
{
    use num_traits::real::Real as R;
    (
        R::min(a.x, b.x),
        R::min(a.y, b.y),
        R::max(a.x, b.x),
        R::max(a.y, b.y),
    )
}

/// Spatial index of the sequence's segment bounding boxes, keyed by segment start index.
///
/// Returns `None` if the index could not be built (numeric cast failure for exotic `T`).
pub(crate) fn segment_aabb_index<T>(coords: &[Coordinate<T>]) -> Option<StaticAABB2DIndex<T>>
where
    T: Real,
{
    let seg_count = coords.len().saturating_sub(1);
    let mut builder = StaticAABB2DIndexBuilder::new(seg_count);
    for w in coords.windows(2) {
        let (min_x, min_y, max_x, max_y) = segment_box(w[0], w[1]);
        builder.add(min_x, min_y, max_x, max_y);
    }

    builder.build().ok()
}

/// Returns `true` if any coordinate of `coords1` touches (see [touches]) `coords2`.
pub(crate) fn any_vertex_touches<T>(coords1: &[Coordinate<T>], coords2: &[Coordinate<T>], eps: T) -> bool
where
    T: Real,
{
    coords1.iter().any(|&c| touches(coords2, c, eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::coord;

    fn zigzag(count: usize, y_offset: f64) -> Vec<Coordinate> {
        (0..count)
            .map(|i| coord(i as f64, if i % 2 == 0 { y_offset } else { y_offset + 1.0 }))
            .collect()
    }

    #[test]
    fn segment_box_orders_corners() {
        assert_eq!(
            segment_box(coord(3.0, -1.0), coord(1.0, 2.0)),
            (1.0, -1.0, 3.0, 2.0)
        );
        assert_eq!(segment_box(coord(1.0f32, 1.0), coord(1.0, 1.0)), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn indexed_scan_matches_brute_force() {
        let a = zigzag(100, 0.0);
        let crossing = vec![coord(50.5, -5.0), coord(50.5, 5.0)];
        let apart = zigzag(100, 10.0);
        assert!(any_segments_intersect(&a, &crossing));
        assert!(!any_segments_intersect(&a, &apart));
        // shifted copy sharing vertexes with the original
        let shifted: Vec<_> = a.iter().map(|c| coord(c.x + 1.0, c.y)).collect();
        assert!(any_segments_intersect(&a, &shifted));
    }

    #[test]
    fn self_intersect_bowtie() {
        let bowtie = [
            coord(0.0, 0.0),
            coord(2.0, 2.0),
            coord(2.0, 0.0),
            coord(0.0, 2.0),
            coord(0.0, 0.0),
        ];
        assert!(has_self_intersect(&bowtie));
        let square = [
            coord(0.0, 0.0),
            coord(2.0, 0.0),
            coord(2.0, 2.0),
            coord(0.0, 2.0),
            coord(0.0, 0.0),
        ];
        assert!(!has_self_intersect(&square));
    }

    #[test]
    fn zero_length_centroid_is_nan() {
        let c = centroid(&[coord(1.0, 1.0)]).unwrap();
        assert!(c.is_nan());
        assert!(centroid::<f64>(&[]).is_none());
    }
}
