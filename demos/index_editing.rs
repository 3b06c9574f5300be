use vector_geometry::{index::service, prelude::*};

fn main() {
    index_text_form();
    navigation();
    editing();
}

fn index_text_form() {
    println!("Testing index text form...");

    let index: GeometryIndex = "geometry1.geometry0.vertex4".parse().unwrap();
    assert_eq!(index.index_type(), GeometryIndexType::Vertex);
    assert_eq!(index.value(), 4);
    assert_eq!(index.depth(), 3);
    assert_eq!(index.to_string(), "geometry1.geometry0.vertex4");

    let created = service::create(GeometryIndexType::Edge, &[0, 2]).unwrap();
    assert_eq!(created.to_string(), "geometry0.edge2");

    assert!("vertex1.vertex2".parse::<GeometryIndex>().is_err());

    println!("Index text form completed successfully!");
}

fn navigation() {
    println!("Testing index navigation...");

    let factory = GeometryFactory::new(4326, -1);
    let ring = factory.create_linear_ring(&[coord(0.0, 0.0), coord(1.0, 0.0), coord(1.0, 1.0)]);

    // ring of 3 distinct vertexes, vertex 0 wraps around to vertex 2
    let neighbors = service::get_adjacent_vertices(&ring, &"vertex0".parse().unwrap()).unwrap();
    let values: Vec<i32> = neighbors.iter().map(|i| i.value()).collect();
    assert_eq!(values, [2, 1]);

    let shell = factory.create_linear_ring_from_bbox(&Bbox::new(0.0, 0.0, 10.0, 10.0));
    let hole = factory.create_linear_ring_from_bbox(&Bbox::new(4.0, 4.0, 2.0, 2.0));
    let polygon = factory.create_polygon(Some(&shell), &[hole]);

    let vertex = service::get_vertex(&polygon, &"geometry1.vertex2".parse().unwrap()).unwrap();
    assert_eq!(vertex, coord(6.0, 6.0));

    match service::get_vertex(&polygon, &"geometry2.vertex0".parse().unwrap()) {
        Ok(_) => panic!("Polygon has no second hole"),
        Err(e) => println!("Expected error: {e}"),
    }

    println!("Index navigation completed successfully!");
}

fn editing() {
    println!("Testing index based editing...");

    let factory = GeometryFactory::new(4326, -1);
    let mut geometry: Geometry = factory
        .create_polygon_from_bbox(&Bbox::new(0.0, 0.0, 10.0, 10.0))
        .into();

    service::insert(&mut geometry, &"geometry0.edge0".parse().unwrap(), &[coord(5.0, -2.0)])
        .unwrap();
    assert_eq!(geometry.num_points(), 6);

    service::set_vertex(&mut geometry, &"geometry0.vertex0".parse().unwrap(), coord(-1.0, -1.0))
        .unwrap();
    let ring = service::get_geometry(&geometry, &"geometry0".parse().unwrap()).unwrap();
    assert!(ring.is_valid(), "Ring is kept closed when vertex 0 moves");

    service::delete(&mut geometry, &"geometry0.vertex1".parse().unwrap()).unwrap();
    assert_eq!(geometry.num_points(), 5);
    println!("Edited polygon: {geometry}");

    println!("Index based editing completed successfully!");
}
