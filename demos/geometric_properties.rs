use vector_geometry::{
    core::traits::FuzzyEq,
    prelude::*,
};

fn main() {
    polygon_area();
    lengths_and_centroids();
    validity();
}

fn polygon_area() {
    println!("Testing polygon area...");

    let factory = GeometryFactory::new(4326, -1);
    let shell = factory.create_linear_ring(&[
        coord(10.0, 10.0),
        coord(20.0, 10.0),
        coord(20.0, 20.0),
        coord(10.0, 20.0),
    ]);
    let hole = factory.create_linear_ring(&[
        coord(12.0, 12.0),
        coord(18.0, 12.0),
        coord(18.0, 18.0),
        coord(12.0, 18.0),
    ]);
    let polygon = factory.create_polygon(Some(&shell), &[hole]);

    assert!(
        polygon.area().fuzzy_eq(64.0),
        "Area should be the shell area minus the hole area"
    );
    println!("Polygon with hole: area = {}", polygon.area());

    assert!(shell.is_counter_clockwise());
    assert!(shell.signed_area() > 0.0);

    println!("Polygon area completed successfully!");
}

fn lengths_and_centroids() {
    println!("Testing lengths and centroids...");

    let factory = GeometryFactory::new(4326, -1);
    let line = factory.create_line_string(&[coord(0.0, 0.0), coord(10.0, 0.0), coord(10.0, 10.0)]);
    assert!(line.length().fuzzy_eq(20.0));

    let centroid = line.centroid().unwrap();
    assert!(centroid.fuzzy_eq(coord(7.5, 2.5)), "Centroid is length weighted");

    let distance = line.distance(coord(5.0, 3.0)).unwrap();
    assert!(distance.fuzzy_eq(3.0));

    let bounds = line.bounds().unwrap();
    println!(
        "Line bounds: x = {}, y = {}, width = {}, height = {}",
        bounds.x, bounds.y, bounds.width, bounds.height
    );

    println!("Lengths and centroids completed successfully!");
}

fn validity() {
    println!("Testing validity...");

    let factory = GeometryFactory::new(4326, -1);

    let bowtie = factory.create_linear_ring(&[
        coord(0.0, 0.0),
        coord(2.0, 2.0),
        coord(2.0, 0.0),
        coord(0.0, 2.0),
    ]);
    assert!(!bowtie.is_simple(), "Bowtie ring crosses itself");
    assert!(!bowtie.is_valid());

    let triangle = factory.create_linear_ring(&[coord(0.0, 0.0), coord(1.0, 0.0), coord(0.0, 1.0)]);
    assert!(triangle.is_valid());

    let short = factory.create_linear_ring(&[coord(0.0, 0.0), coord(1.0, 0.0)]);
    let relaxed = GeometryOptions {
        strict_ring_size: false,
        ..GeometryOptions::new()
    };
    assert!(!short.is_valid(), "Three coordinates are too few by default");
    assert!(short.is_valid_opt(&relaxed));

    println!("Validity completed successfully!");
}
