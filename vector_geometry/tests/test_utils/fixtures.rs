use vector_geometry::prelude::*;

pub const SRID: i32 = 4326;

pub fn factory() -> GeometryFactory {
    GeometryFactory::new(SRID, -1)
}

/// Closed counter clockwise square ring with lower left corner at (`x`, `y`).
pub fn square_ring(x: f64, y: f64, size: f64) -> LinearRing {
    factory().create_linear_ring_from_bbox(&Bbox::new(x, y, size, size))
}

/// Square (10, 10) - (20, 20) with a square hole (12, 12) - (18, 18).
pub fn square_with_hole() -> Polygon {
    factory().create_polygon(
        Some(&square_ring(10.0, 10.0, 10.0)),
        &[square_ring(12.0, 12.0, 6.0)],
    )
}

/// Open zigzag line with `count` coordinates starting at (`x`, `y`).
pub fn zigzag(x: f64, y: f64, count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| coord(x + i as f64, if i % 2 == 0 { y } else { y + 1.0 }))
        .collect()
}

/// One of every geometry type, including empty ones.
pub fn all_geometries() -> Vec<Geometry> {
    let f = factory();
    let line = f.create_line_string(&[coord(0.0, 0.0), coord(5.0, 5.0), coord(10.0, 0.0)]);
    vec![
        f.create_point(Some(coord(30.0, 10.0))).into(),
        f.create_point::<f64>(None).into(),
        line.clone().into(),
        f.create_line_string::<f64>(&[]).into(),
        square_ring(0.0, 0.0, 4.0).into(),
        square_with_hole().into(),
        f.create_polygon::<f64>(None, &[]).into(),
        f.create_multi_point(&[
            f.create_point(Some(coord(1.0, 2.0))),
            f.create_point(Some(coord(3.0, 4.0))),
        ])
        .into(),
        f.create_multi_line_string(&[
            line,
            f.create_line_string(&[coord(-1.0, -1.0), coord(-2.0, -3.0)]),
        ])
        .into(),
        f.create_multi_polygon(&[
            square_with_hole(),
            f.create_polygon(Some(&square_ring(30.0, 30.0, 2.0)), &[]),
        ])
        .into(),
    ]
}
