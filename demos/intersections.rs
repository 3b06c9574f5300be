use vector_geometry::prelude::*;

fn main() {
    line_intersections();
    polygon_boundaries();
    point_predicates();
}

fn line_intersections() {
    println!("Testing line intersections...");

    let factory = GeometryFactory::new(4326, -1);
    let a = factory.create_line_string(&[coord(0.0, 0.0), coord(10.0, 10.0)]);
    let b = factory.create_line_string(&[coord(0.0, 10.0), coord(10.0, 0.0)]);
    let c = factory.create_line_string(&[coord(20.0, 0.0), coord(30.0, 10.0)]);

    assert!(a.intersects(&b), "Crossing lines should intersect");
    assert!(!a.intersects(&c), "Disjoint lines should not intersect");

    // a point on the interior of a segment touches the line
    let on_line = factory.create_point(Some(coord(5.0, 5.0)));
    assert!(on_line.intersects(&a));

    // touch distance is configurable
    let near = factory.create_point(Some(coord(5.0, 5.001)));
    assert!(!near.intersects(&a));
    let options = GeometryOptions {
        touch_eps: 0.01,
        ..GeometryOptions::new()
    };
    assert!(near.intersects_opt(&a, &options));

    println!("Line intersections completed successfully!");
}

fn polygon_boundaries() {
    println!("Testing polygon boundaries...");

    let factory = GeometryFactory::new(4326, -1);
    let square = factory.create_polygon_from_bbox(&Bbox::new(0.0, 0.0, 10.0, 10.0));

    // only the rings take part, a line fully inside does not intersect
    let inside = factory.create_line_string(&[coord(2.0, 2.0), coord(8.0, 8.0)]);
    assert!(!inside.intersects(&square));

    let crossing = factory.create_line_string(&[coord(5.0, 5.0), coord(15.0, 5.0)]);
    assert!(crossing.intersects(&square));

    let multi = factory.create_multi_line_string(&[inside, crossing]);
    assert!(
        multi.intersects(&square),
        "Multi geometry intersects if any member does"
    );

    println!("Polygon boundaries completed successfully!");
}

fn point_predicates() {
    println!("Testing point predicates...");

    let factory = GeometryFactory::new(4326, -1);
    let shell = factory.create_linear_ring_from_bbox(&Bbox::new(0.0, 0.0, 10.0, 10.0));
    let hole = factory.create_linear_ring_from_bbox(&Bbox::new(4.0, 4.0, 2.0, 2.0));
    let polygon = factory.create_polygon(Some(&shell), &[hole]);

    assert!(coordinate_within(&polygon, coord(1.0, 1.0)));
    assert!(!coordinate_within(&polygon, coord(5.0, 5.0)), "Inside the hole");
    assert!(touches(&polygon, coord(4.0, 5.0)), "On the hole ring");
    assert!(!touches(&polygon, coord(1.0, 1.0)));

    println!("Point predicates completed successfully!");
}
