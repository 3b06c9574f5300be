mod test_utils;

use test_utils::*;
use vector_geometry::{
    coords,
    index::{service, IndexResult},
    prelude::*,
};

fn idx(text: &str) -> GeometryIndex {
    text.parse().unwrap()
}

fn values(indexes: IndexResult<Vec<GeometryIndex>>) -> Vec<i32> {
    indexes.unwrap().iter().map(|i| i.value()).collect()
}

/// First and last coordinate.
fn ends(geometry: &Geometry) -> (Coordinate, Coordinate) {
    let coordinates = geometry.coordinates();
    (coordinates[0], coordinates[coordinates.len() - 1])
}

fn triangle() -> LinearRing {
    factory().create_linear_ring(&coords![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])
}

fn multi_polygon() -> MultiPolygon {
    let f = factory();
    f.create_multi_polygon(&[
        square_with_hole(),
        f.create_polygon(Some(&square_ring(30.0, 30.0, 2.0)), &[]),
    ])
}

#[test]
fn ring_vertex_zero_wraps_around() {
    let ring = triangle();
    assert_eq!(ring.num_points(), 4);
    assert_eq!(values(service::get_adjacent_vertices(&ring, &idx("vertex0"))), [2, 1]);
    // closing vertex is the same position as vertex 0
    assert_eq!(values(service::get_adjacent_vertices(&ring, &idx("vertex3"))), [2, 1]);
    assert_eq!(values(service::get_adjacent_vertices(&ring, &idx("vertex1"))), [0, 2]);
}

#[test]
fn vertex_adjacency_is_symmetric() {
    let ring = square_ring(0.0, 0.0, 4.0);
    let line = factory().create_line_string(&zigzag(0.0, 0.0, 5));
    // every stored coordinate, the closing vertex of the ring included
    let cases: Vec<(Geometry, i32)> = vec![(ring.into(), 5), (line.into(), 5)];
    for (geometry, count) in cases {
        for v in 0..count {
            let vertex = GeometryIndex::new(GeometryIndexType::Vertex, v);
            for neighbor in service::get_adjacent_vertices(&geometry, &vertex).unwrap() {
                assert!(
                    service::is_adjacent(&geometry, &neighbor, &vertex).unwrap(),
                    "{vertex} and {neighbor} of {geometry}"
                );
            }
        }
    }
}

#[test]
fn ring_closing_vertex_is_adjacent_to_neighbors_of_vertex_zero() {
    let ring = triangle();
    assert!(service::is_adjacent(&ring, &idx("vertex2"), &idx("vertex3")).unwrap());
    assert!(service::is_adjacent(&ring, &idx("vertex3"), &idx("vertex2")).unwrap());
    assert!(service::is_adjacent(&ring, &idx("vertex1"), &idx("vertex3")).unwrap());
    assert!(!service::is_adjacent(&ring, &idx("vertex0"), &idx("vertex3")).unwrap());
}

#[test]
fn line_end_points_have_one_neighbor() {
    let line = factory().create_line_string(&zigzag(0.0, 0.0, 3));
    assert_eq!(values(service::get_adjacent_vertices(&line, &idx("vertex0"))), [1]);
    assert_eq!(values(service::get_adjacent_vertices(&line, &idx("vertex1"))), [0, 2]);
    assert_eq!(values(service::get_adjacent_vertices(&line, &idx("vertex2"))), [1]);
    assert_eq!(values(service::get_adjacent_edges(&line, &idx("vertex0"))), [0]);
    assert_eq!(values(service::get_adjacent_edges(&line, &idx("vertex2"))), [1]);
    assert_eq!(values(service::get_adjacent_edges(&line, &idx("edge0"))), [1]);
    assert_eq!(values(service::get_adjacent_vertices(&line, &idx("edge1"))), [1, 2]);
}

#[test]
fn ring_edges_wrap_around() {
    let ring = square_ring(0.0, 0.0, 4.0);
    assert_eq!(values(service::get_adjacent_edges(&ring, &idx("vertex0"))), [3, 0]);
    assert_eq!(values(service::get_adjacent_edges(&ring, &idx("edge0"))), [3, 1]);
    assert_eq!(values(service::get_adjacent_vertices(&ring, &idx("edge3"))), [3, 0]);

    let adjacent = service::get_adjacent_edges(&ring, &idx("vertex2")).unwrap();
    assert!(adjacent.iter().all(|i| service::is_edge(i)));
}

#[test]
fn adjacency_results_keep_the_path() {
    let poly = square_with_hole();
    let neighbors = service::get_adjacent_vertices(&poly, &idx("geometry1.vertex0")).unwrap();
    let text: Vec<String> = neighbors.iter().map(|i| i.to_string()).collect();
    assert_eq!(text, ["geometry1.vertex3", "geometry1.vertex1"]);
}

#[test]
fn is_adjacent_checks() {
    let ring = square_ring(0.0, 0.0, 4.0);
    assert_eq!(service::is_adjacent(&ring, &idx("vertex0"), &idx("vertex1")), Ok(true));
    assert_eq!(service::is_adjacent(&ring, &idx("vertex0"), &idx("vertex3")), Ok(true));
    assert_eq!(service::is_adjacent(&ring, &idx("vertex0"), &idx("vertex2")), Ok(false));
    assert_eq!(service::is_adjacent(&ring, &idx("vertex0"), &idx("edge3")), Ok(true));
    assert_eq!(service::is_adjacent(&ring, &idx("edge0"), &idx("edge1")), Ok(true));
    assert_eq!(service::is_adjacent(&ring, &idx("vertex0"), &idx("geometry0")), Ok(false));
    assert!(service::is_adjacent(&ring, &idx("vertex9"), &idx("vertex0")).is_err());
}

#[test]
fn get_vertex_follows_the_path() {
    let poly = square_with_hole();
    assert_eq!(service::get_vertex(&poly, &idx("geometry0.vertex1")), Ok(coord(20.0, 10.0)));
    assert_eq!(service::get_vertex(&poly, &idx("geometry1.vertex2")), Ok(coord(18.0, 18.0)));

    let mpoly = multi_polygon();
    assert_eq!(
        service::get_vertex(&mpoly, &idx("geometry1.geometry0.vertex1")),
        Ok(coord(32.0, 30.0))
    );

    let point = factory().create_point(Some(coord(3.0, 4.0)));
    assert_eq!(service::get_vertex(&point, &idx("vertex0")), Ok(coord(3.0, 4.0)));

    let mp = factory().create_multi_point(&[point.clone(), point]);
    assert_eq!(service::get_vertex(&mp, &idx("geometry1.vertex0")), Ok(coord(3.0, 4.0)));
}

#[test]
fn get_vertex_errors() {
    let poly = square_with_hole();
    assert!(matches!(
        service::get_vertex(&poly, &idx("vertex0")),
        Err(GeometryIndexNotFoundError::TypeMismatch {
            geometry_type: GeometryType::Polygon,
            index_type: GeometryIndexType::Vertex,
            ..
        })
    ));
    assert!(matches!(
        service::get_vertex(&poly, &idx("geometry2.vertex0")),
        Err(GeometryIndexNotFoundError::OutOfBounds {
            index_type: GeometryIndexType::Geometry,
            value: 2,
            count: 2,
            ..
        })
    ));
    assert!(matches!(
        service::get_vertex(&poly, &idx("geometry0.vertex-1")),
        Err(GeometryIndexNotFoundError::OutOfBounds {
            index_type: GeometryIndexType::Vertex,
            value: -1,
            count: 5,
            ..
        })
    ));
    assert!(matches!(
        service::get_vertex(&poly, &idx("geometry0.edge0")),
        Err(GeometryIndexNotFoundError::InvalidOperation { .. })
    ));

    let empty = factory().create_line_string::<f64>(&[]);
    assert!(matches!(
        service::get_vertex(&empty, &idx("vertex0")),
        Err(GeometryIndexNotFoundError::EmptyTarget {
            geometry_type: GeometryType::LineString,
            ..
        })
    ));

    let error = service::get_vertex(&empty, &idx("vertex0")).unwrap_err();
    assert_eq!(error.to_string(), "index vertex0 not found: LineString is empty");
}

#[test]
fn get_edge_returns_end_points() {
    let ring = square_ring(0.0, 0.0, 4.0);
    assert_eq!(
        service::get_edge(&ring, &idx("edge3")),
        Ok((coord(0.0, 4.0), coord(0.0, 0.0)))
    );
    assert!(matches!(
        service::get_edge(&ring, &idx("edge4")),
        Err(GeometryIndexNotFoundError::OutOfBounds { count: 4, .. })
    ));

    let point = factory().create_point(Some(coord(3.0, 4.0)));
    assert!(matches!(
        service::get_edge(&point, &idx("edge0")),
        Err(GeometryIndexNotFoundError::TypeMismatch {
            geometry_type: GeometryType::Point,
            index_type: GeometryIndexType::Edge,
            ..
        })
    ));
}

#[test]
fn get_geometry_returns_children() {
    let poly = square_with_hole();
    match service::get_geometry(&poly, &idx("geometry0")) {
        Ok(GeometryRef::LinearRing(r)) => assert_eq!(Some(r), poly.exterior_ring()),
        other => panic!("unexpected result: {other:?}"),
    }
    match service::get_geometry(&poly, &idx("geometry1")) {
        Ok(GeometryRef::LinearRing(r)) => assert_eq!(Some(r), poly.interior_ring_n(0)),
        other => panic!("unexpected result: {other:?}"),
    }

    let mpoly = multi_polygon();
    let member = service::get_geometry(&mpoly, &idx("geometry1")).unwrap();
    assert_eq!(member.to_geometry(), Geometry::from(mpoly.polygons()[1].clone()));

    let line = factory().create_line_string(&zigzag(0.0, 0.0, 3));
    assert!(matches!(
        service::get_geometry(&line, &idx("geometry0")),
        Err(GeometryIndexNotFoundError::TypeMismatch { .. })
    ));

    let empty = factory().create_polygon::<f64>(None, &[square_ring(0.0, 0.0, 1.0)]);
    assert!(matches!(
        service::get_geometry(&empty, &idx("geometry0")),
        Err(GeometryIndexNotFoundError::OutOfBounds { count: 0, .. })
    ));
}

#[test]
fn geometry_type_of_target() {
    let mpoly = multi_polygon();
    assert_eq!(
        service::get_geometry_type(&mpoly, &idx("geometry1")),
        Ok(GeometryType::Polygon)
    );
    assert_eq!(
        service::get_geometry_type(&mpoly, &idx("geometry0.geometry1")),
        Ok(GeometryType::LinearRing)
    );
    assert_eq!(
        service::get_geometry_type(&mpoly, &idx("geometry0.geometry1.vertex0")),
        Ok(GeometryType::LinearRing)
    );
    assert!(service::get_geometry_type(&mpoly, &idx("geometry0.geometry2.vertex0")).is_err());

    let line = factory().create_line_string(&zigzag(0.0, 0.0, 3));
    assert_eq!(
        service::get_geometry_type(&line, &idx("edge1")),
        Ok(GeometryType::LineString)
    );
}

#[test]
fn siblings() {
    let poly = square_with_hole();
    assert_eq!(
        service::get_sibling_vertices(&poly, &idx("geometry1.vertex0")),
        Ok(square_ring(12.0, 12.0, 6.0).coordinates())
    );
    assert!(service::get_sibling_vertices(&poly, &idx("geometry1")).is_err());

    let line = factory().create_line_string(&zigzag(0.0, 0.0, 3));
    assert_eq!(service::get_sibling_count(&line, &idx("vertex0")), Ok(3));
    assert_eq!(service::get_sibling_count(&line, &idx("edge0")), Ok(2));
    assert_eq!(service::get_sibling_count(&poly, &idx("geometry0")), Ok(2));

    // terminal value is not checked
    let mpoly = multi_polygon();
    assert_eq!(service::get_sibling_count(&mpoly, &idx("geometry0.geometry5")), Ok(2));
    assert!(service::get_sibling_count(&line, &idx("geometry0")).is_err());
}

#[test]
fn create_and_navigate_indexes() {
    let index = service::create(GeometryIndexType::Vertex, &[1, 0, 4]).unwrap();
    assert_eq!(index, idx("geometry1.geometry0.vertex4"));
    assert_eq!(service::get_type(&index), GeometryIndexType::Vertex);
    assert_eq!(service::get_value(&index), 4);
    assert!(service::is_vertex(&index));
    assert!(!service::is_edge(&index));
    assert!(!service::is_geometry(&index));

    let parent = service::get_parent(&index).unwrap();
    assert_eq!(parent.to_string(), "geometry1.geometry0");
    assert!(service::is_geometry(&parent));
    assert!(service::is_child_of(&parent, &index));
    assert!(!service::is_child_of(&index, &parent));
    assert!(!service::is_child_of(&parent, &parent));
    assert!(!service::is_child_of(&idx("geometry1"), &idx("geometry10.vertex0")));
    assert!(service::get_parent(&idx("vertex3")).is_none());

    let edge = service::add_children(&idx("geometry1"), GeometryIndexType::Edge, &[0, 2]).unwrap();
    assert_eq!(edge.to_string(), "geometry1.geometry0.edge2");
    assert!(matches!(
        service::add_children(&index, GeometryIndexType::Edge, &[0]),
        Err(GeometryIndexNotFoundError::InvalidOperation { .. })
    ));
}

#[test]
fn next_and_previous_are_unchecked() {
    let index = idx("geometry1.vertex0");
    assert_eq!(service::next_vertex(&index).to_string(), "geometry1.vertex1");
    assert_eq!(service::previous_vertex(&index).to_string(), "geometry1.vertex-1");
    assert_eq!(service::next_vertex(&idx("edge7")), idx("edge8"));
}

#[test]
fn parse_errors() {
    assert_eq!(
        "vertex1.vertex2".parse::<GeometryIndex>(),
        Err(GeometryIndexNotFoundError::Unparseable {
            input: "vertex1.vertex2".to_string()
        })
    );
    assert!("".parse::<GeometryIndex>().is_err());
    assert!("geometry".parse::<GeometryIndex>().is_err());
}

#[test]
fn insert_into_line_string() {
    let mut line: Geometry = factory()
        .create_line_string(&coords![(0.0, 0.0), (2.0, 0.0)])
        .into();
    service::insert(&mut line, &idx("vertex2"), &[coord(3.0, 0.0)]).unwrap();
    service::insert(&mut line, &idx("vertex0"), &[coord(-1.0, 0.0)]).unwrap();
    service::insert(&mut line, &idx("edge1"), &[coord(1.0, 0.0), coord(1.5, 0.0)]).unwrap();
    assert_eq!(
        line.coordinates(),
        coords![(-1.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.5, 0.0), (2.0, 0.0), (3.0, 0.0)]
    );
    assert!(service::insert(&mut line, &idx("vertex7"), &[coord(9.0, 9.0)]).is_err());
    assert!(service::insert(&mut line, &idx("geometry0"), &[coord(9.0, 9.0)]).is_err());
    assert_eq!(line.num_points(), 6);
}

#[test]
fn insert_into_ring_keeps_it_closed() {
    let mut ring: Geometry = square_ring(0.0, 0.0, 4.0).into();
    service::insert(&mut ring, &idx("vertex2"), &[coord(5.0, 2.0)]).unwrap();
    assert_eq!(
        ring.coordinates(),
        coords![(0.0, 0.0), (4.0, 0.0), (5.0, 2.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]
    );

    service::insert(&mut ring, &idx("vertex0"), &[coord(-1.0, -1.0)]).unwrap();
    assert_eq!(ends(&ring), (coord(-1.0, -1.0), coord(-1.0, -1.0)));
    assert_eq!(ring.num_points(), 7);

    service::insert(&mut ring, &idx("edge5"), &[coord(-1.0, 2.0)]).unwrap();
    assert_eq!(ring.num_points(), 8);
    assert_eq!(service::get_vertex(&ring, &idx("vertex6")), Ok(coord(-1.0, 2.0)));
    assert!(ring.is_valid());

    // inserting at the closing vertex appends after the last distinct vertex
    service::insert(&mut ring, &idx("vertex7"), &[coord(-2.0, 0.0)]).unwrap();
    assert_eq!(ring.num_points(), 9);
    assert_eq!(service::get_vertex(&ring, &idx("vertex7")), Ok(coord(-2.0, 0.0)));
    assert_eq!(ends(&ring), (coord(-1.0, -1.0), coord(-1.0, -1.0)));

    assert!(matches!(
        service::insert(&mut ring, &idx("vertex9"), &[coord(9.0, 9.0)]),
        Err(GeometryIndexNotFoundError::OutOfBounds { count: 9, .. })
    ));
}

#[test]
fn append_to_ring_matches_append_to_line() {
    let mut ring: Geometry = square_ring(0.0, 0.0, 4.0).into();
    service::insert(&mut ring, &idx("vertex4"), &[coord(-1.0, 2.0)]).unwrap();
    assert_eq!(
        ring.coordinates(),
        coords![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (-1.0, 2.0), (0.0, 0.0)]
    );
    assert!(ring.is_valid());

    let mut line: Geometry = factory()
        .create_line_string(&coords![(0.0, 0.0), (4.0, 0.0)])
        .into();
    service::insert(&mut line, &idx("vertex2"), &[coord(4.0, 4.0)]).unwrap();
    assert_eq!(line.coordinates(), coords![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
}

#[test]
fn insert_into_empty_ring_and_point() {
    let mut ring: Geometry = factory().create_linear_ring::<f64>(&[]).into();
    service::insert(&mut ring, &idx("vertex0"), &coords![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])
        .unwrap();
    assert_eq!(ring.num_points(), 4);
    assert!(ring.is_valid());

    let mut point: Geometry = factory().create_point::<f64>(None).into();
    service::insert(&mut point, &idx("vertex0"), &[coord(2.0, 2.0)]).unwrap();
    assert_eq!(point.coordinates(), [coord(2.0, 2.0)]);
    assert!(matches!(
        service::insert(&mut point, &idx("vertex0"), &[coord(3.0, 3.0)]),
        Err(GeometryIndexNotFoundError::InvalidOperation { .. })
    ));
}

#[test]
fn insert_through_nested_paths() {
    let mut poly: Geometry = square_with_hole().into();
    service::insert(&mut poly, &idx("geometry1.edge0"), &[coord(15.0, 13.0)]).unwrap();
    assert_eq!(poly.num_points(), 11);
    assert_eq!(service::get_vertex(&poly, &idx("geometry1.vertex1")), Ok(coord(15.0, 13.0)));

    let mut mp: Geometry = factory()
        .create_multi_point(&[factory().create_point(Some(coord(1.0, 1.0)))])
        .into();
    assert!(matches!(
        service::insert(&mut mp, &idx("vertex0"), &[coord(2.0, 2.0)]),
        Err(GeometryIndexNotFoundError::TypeMismatch {
            geometry_type: GeometryType::MultiPoint,
            ..
        })
    ));
}

#[test]
fn delete_from_line_string() {
    let mut line: Geometry = factory().create_line_string(&zigzag(0.0, 0.0, 4)).into();
    service::delete(&mut line, &idx("vertex1")).unwrap();
    assert_eq!(line.coordinates(), coords![(0.0, 0.0), (2.0, 0.0), (3.0, 1.0)]);
    service::delete(&mut line, &idx("edge0")).unwrap();
    assert_eq!(line.coordinates(), coords![(3.0, 1.0)]);
    assert!(service::delete(&mut line, &idx("edge0")).is_err());
    assert!(service::delete(&mut line, &idx("geometry0")).is_err());
}

#[test]
fn delete_from_ring_keeps_it_closed() {
    let mut ring: Geometry = square_ring(0.0, 0.0, 4.0).into();
    service::delete(&mut ring, &idx("vertex0")).unwrap();
    assert_eq!(
        ring.coordinates(),
        coords![(4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (4.0, 0.0)]
    );

    let mut closing: Geometry = square_ring(0.0, 0.0, 4.0).into();
    service::delete(&mut closing, &idx("vertex4")).unwrap();
    assert_eq!(closing, ring);

    let mut edge: Geometry = square_ring(0.0, 0.0, 4.0).into();
    service::delete(&mut edge, &idx("edge3")).unwrap();
    assert_eq!(edge.coordinates(), coords![(4.0, 0.0), (4.0, 4.0), (4.0, 0.0)]);
}

#[test]
fn delete_children() {
    let mut poly: Geometry = square_with_hole().into();
    service::delete(&mut poly, &idx("geometry1")).unwrap();
    assert_eq!(poly.num_points(), 5);
    assert_eq!(poly.area(), 100.0);

    let mut emptied: Geometry = square_with_hole().into();
    service::delete(&mut emptied, &idx("geometry0")).unwrap();
    assert!(emptied.is_empty());
    assert_eq!(emptied.to_wkt(), "POLYGON EMPTY");
    assert_eq!(service::get_sibling_count(&emptied, &idx("geometry0")), Ok(0));

    let mut mpoly: Geometry = multi_polygon().into();
    service::delete(&mut mpoly, &idx("geometry0")).unwrap();
    assert_eq!(mpoly.num_geometries(), 1);
    service::delete(&mut mpoly, &idx("geometry0.geometry0.vertex0")).unwrap();
    assert_eq!(mpoly.num_points(), 4);
    assert!(service::delete(&mut mpoly, &idx("geometry1")).is_err());
}

#[test]
fn delete_point_coordinate() {
    let mut point: Geometry = factory().create_point(Some(coord(1.0, 1.0))).into();
    service::delete(&mut point, &idx("vertex0")).unwrap();
    assert!(point.is_empty());
    assert!(matches!(
        service::delete(&mut point, &idx("vertex0")),
        Err(GeometryIndexNotFoundError::EmptyTarget { .. })
    ));
}

#[test]
fn set_vertex_moves_ring_ends_together() {
    let mut ring: Geometry = square_ring(0.0, 0.0, 4.0).into();
    service::set_vertex(&mut ring, &idx("vertex0"), coord(-1.0, -1.0)).unwrap();
    assert_eq!(ends(&ring), (coord(-1.0, -1.0), coord(-1.0, -1.0)));
    service::set_vertex(&mut ring, &idx("vertex4"), coord(-2.0, -2.0)).unwrap();
    assert_eq!(ends(&ring), (coord(-2.0, -2.0), coord(-2.0, -2.0)));
    service::set_vertex(&mut ring, &idx("vertex2"), coord(5.0, 5.0)).unwrap();
    assert_eq!(service::get_vertex(&ring, &idx("vertex2")), Ok(coord(5.0, 5.0)));
    assert!(ring.is_valid());

    assert!(service::set_vertex(&mut ring, &idx("vertex5"), coord(0.0, 0.0)).is_err());
    assert!(service::set_vertex(&mut ring, &idx("edge0"), coord(0.0, 0.0)).is_err());
}

#[test]
fn set_vertex_on_nested_and_point_geometries() {
    let mut mpoly: Geometry = multi_polygon().into();
    service::set_vertex(&mut mpoly, &idx("geometry0.geometry1.vertex2"), coord(17.0, 17.0))
        .unwrap();
    assert_eq!(
        service::get_vertex(&mpoly, &idx("geometry0.geometry1.vertex2")),
        Ok(coord(17.0, 17.0))
    );

    let mut point: Geometry = factory().create_point(Some(coord(1.0, 1.0))).into();
    service::set_vertex(&mut point, &idx("vertex0"), coord(2.0, 2.0)).unwrap();
    assert_eq!(point.coordinates(), [coord(2.0, 2.0)]);

    let mut empty: Geometry = factory().create_point::<f64>(None).into();
    assert!(service::set_vertex(&mut empty, &idx("vertex0"), coord(2.0, 2.0)).is_err());
}

#[test]
fn edits_keep_srid() {
    let mut line: Geometry = factory().create_line_string(&zigzag(0.0, 0.0, 3)).into();
    service::insert(&mut line, &idx("vertex1"), &[coord(0.5, 0.5)]).unwrap();
    service::delete(&mut line, &idx("vertex0")).unwrap();
    assert_eq!(line.srid(), SRID);
}
