use vector_geometry::prelude::*;

fn main() {
    geometry_creation();
    ring_closing();
    enum_dispatch();
}

fn geometry_creation() {
    println!("Testing geometry creation...");

    let factory = GeometryFactory::new(4326, -1);

    let point = factory.create_point(Some(coord(30.0, 10.0)));
    assert_eq!(point.to_wkt(), "POINT (30.0 10.0)");
    assert_eq!(point.srid(), 4326, "Factory SRID should be carried over");

    let empty = factory.create_point::<f64>(None);
    assert!(empty.is_empty(), "Point without coordinate should be empty");
    assert_eq!(empty.to_wkt(), "POINT EMPTY");

    let line =
        factory.create_line_string(&[coord(30.0, 10.0), coord(10.0, 30.0), coord(40.0, 40.0)]);
    assert_eq!(line.num_points(), 3);
    assert_eq!(line.to_wkt(), "LINESTRING (30.0 10.0, 10.0 30.0, 40.0 40.0)");

    let multi = factory.create_multi_point(&[point.clone(), point]);
    assert_eq!(multi.num_geometries(), 2);
    assert_eq!(multi.to_wkt(), "MULTIPOINT ((30.0 10.0), (30.0 10.0))");

    println!("Geometry creation completed successfully!");
}

fn ring_closing() {
    println!("Testing ring closing...");

    let factory = GeometryFactory::new(4326, -1);

    // already closed input is kept as is
    let closed = factory.create_linear_ring(&[
        coord(10.0, 10.0),
        coord(20.0, 10.0),
        coord(20.0, 20.0),
        coord(10.0, 10.0),
    ]);
    assert_eq!(closed.num_points(), 4, "Closed input should not grow");

    // open input gets the first coordinate appended
    let open =
        factory.create_linear_ring(&[coord(10.0, 10.0), coord(20.0, 10.0), coord(20.0, 20.0)]);
    assert_eq!(open.num_points(), 4, "Open input should be closed");
    assert_eq!(open.coordinate_n(3), Some(coord(10.0, 10.0)));
    assert!(open.is_valid());

    let from_bbox = factory.create_linear_ring_from_bbox(&Bbox::new(0.0, 0.0, 2.0, 1.0));
    assert_eq!(
        from_bbox.to_wkt(),
        "LINEARRING (0.0 0.0, 2.0 0.0, 2.0 1.0, 0.0 1.0, 0.0 0.0)"
    );

    println!("Ring closing completed successfully!");
}

fn enum_dispatch() {
    println!("Testing geometry enum dispatch...");

    let factory = GeometryFactory::new(4326, -1);
    let geometries: Vec<Geometry> = vec![
        factory.create_point(Some(coord(1.0, 1.0))).into(),
        factory.create_line_string(&[coord(0.0, 0.0), coord(3.0, 4.0)]).into(),
        factory
            .create_polygon_from_bbox(&Bbox::new(0.0, 0.0, 10.0, 10.0))
            .into(),
    ];

    for geometry in &geometries {
        println!(
            "{}: points = {}, length = {}, area = {}",
            geometry.geometry_type(),
            geometry.num_points(),
            geometry.length(),
            geometry.area()
        );
    }

    // a deep copy with the factory's SRID
    let other_factory = GeometryFactory::new(3857, -1);
    let copy = other_factory.create_geometry(&geometries[2]);
    assert_eq!(copy.srid(), 3857);
    assert_eq!(copy.coordinates(), geometries[2].coordinates());

    println!("Geometry enum dispatch completed successfully!");
}
