mod test_utils;

use test_utils::*;
use vector_geometry::{coords, editor, prelude::*};

#[test]
fn points_are_always_valid() {
    assert!(factory().create_point(Some(coord(1.0, 1.0))).is_valid());
    assert!(factory().create_point::<f64>(None).is_valid());
}

#[test]
fn line_string_validity() {
    let f = factory();
    assert!(f.create_line_string::<f64>(&[]).is_valid());
    assert!(!f.create_line_string(&coords![(1.0, 1.0)]).is_valid());
    assert!(f.create_line_string(&coords![(1.0, 1.0), (2.0, 2.0)]).is_valid());
    // self intersecting lines are valid, but not simple
    let crossing = f.create_line_string(&coords![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    assert!(crossing.is_valid());
    assert!(!crossing.is_simple());
}

#[test]
fn ring_validity() {
    let f = factory();
    assert!(f.create_linear_ring::<f64>(&[]).is_valid());
    assert!(square_ring(0.0, 0.0, 1.0).is_valid());
    let bowtie = f.create_linear_ring(&coords![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    assert!(!bowtie.is_simple());
    assert!(!bowtie.is_valid());
}

#[test]
fn ring_size_strictness() {
    let f = factory();
    // three coordinates: a closed out and back line
    let short = f.create_linear_ring(&coords![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
    assert_eq!(short.num_points(), 3);
    assert!(!short.is_valid());
    let relaxed = GeometryOptions {
        strict_ring_size: false,
        ..GeometryOptions::new()
    };
    assert!(short.is_valid_opt(&relaxed));

    let triangle = f.create_linear_ring(&coords![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert!(triangle.is_valid());
    assert!(triangle.is_valid_opt(&relaxed));
}

#[test]
fn open_ring_is_invalid() {
    let mut ring = square_ring(0.0, 0.0, 1.0);
    assert!(editor::set_coordinate_n(&mut ring, coord(0.5, -0.5), 0));
    assert!(!ring.is_closed());
    assert!(!ring.is_valid());
}

#[test]
fn polygon_validity() {
    let f = factory();
    assert!(square_with_hole().is_valid());
    assert!(f.create_polygon::<f64>(None, &[]).is_valid());

    // hole crossing the shell
    let crossing = f.create_polygon(
        Some(&square_ring(0.0, 0.0, 10.0)),
        &[square_ring(8.0, 2.0, 4.0)],
    );
    assert!(!crossing.is_valid());

    // hole touching the shell from inside
    let touching = f.create_polygon(
        Some(&square_ring(0.0, 0.0, 10.0)),
        &[square_ring(0.0, 2.0, 4.0)],
    );
    assert!(!touching.is_valid());

    // overlapping holes
    let overlapping_holes = f.create_polygon(
        Some(&square_ring(0.0, 0.0, 10.0)),
        &[square_ring(1.0, 1.0, 4.0), square_ring(3.0, 3.0, 4.0)],
    );
    assert!(!overlapping_holes.is_valid());

    // separate holes
    let separate_holes = f.create_polygon(
        Some(&square_ring(0.0, 0.0, 10.0)),
        &[square_ring(1.0, 1.0, 2.0), square_ring(5.0, 5.0, 2.0)],
    );
    assert!(separate_holes.is_valid());
}

#[test]
fn polygon_with_invalid_ring_is_invalid() {
    let f = factory();
    let bowtie = f.create_linear_ring(&coords![(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    assert!(!f.create_polygon(Some(&bowtie), &[]).is_valid());
    let tiny_hole = f.create_linear_ring(&coords![(1.0, 1.0)]);
    assert!(!f
        .create_polygon(Some(&square_ring(0.0, 0.0, 10.0)), &[tiny_hole])
        .is_valid());
}

#[test]
fn multi_validity_follows_members() {
    let f = factory();
    let valid =
        f.create_multi_line_string(&[f.create_line_string(&coords![(0.0, 0.0), (1.0, 1.0)])]);
    assert!(valid.is_valid());
    let invalid = f.create_multi_line_string(&[
        f.create_line_string(&coords![(0.0, 0.0), (1.0, 1.0)]),
        f.create_line_string(&coords![(5.0, 5.0)]),
    ]);
    assert!(!invalid.is_valid());

    // overlap between members is not checked
    let overlapping = f.create_multi_polygon(&[
        f.create_polygon(Some(&square_ring(0.0, 0.0, 4.0)), &[]),
        f.create_polygon(Some(&square_ring(2.0, 2.0, 4.0)), &[]),
    ]);
    assert!(overlapping.is_valid());
}

#[test]
fn simple_checks_skip_adjacent_segments() {
    let f = factory();
    // sharp turn back along the previous segment touches only adjacent segments
    let spike = f.create_line_string(&coords![(0.0, 0.0), (4.0, 0.0), (2.0, 1.0)]);
    assert!(spike.is_simple());
    // closed line: first and last segments share the closing point
    let closed = f.create_line_string(&coords![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]);
    assert!(closed.is_simple());
    // long line folding back onto itself
    let folded = f.create_line_string(&coords![(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (5.0, -5.0)]);
    assert!(!folded.is_simple());
}
