//! Operations resolving, navigating and editing geometries through a [GeometryIndex].
//!
//! Children of a geometry, addressed by [GeometryIndexType::Geometry] steps, are the rings of a
//! polygon (exterior ring at 0, interior ring `i` at `i + 1`) and the members of a multi geometry.
//! Points, line strings and rings have no children, their vertexes and edges are addressed by the
//! terminal step.
//!
//! Rings are addressed by distinct vertex: vertex `0` and the closing vertex `len - 1` are the
//! same position, adjacency wraps around, and edits keep the ring closed.
use super::{GeometryIndex, GeometryIndexNotFoundError, GeometryIndexType, IndexResult};
use crate::{
    core::{math::Coordinate, traits::Real},
    editor::{self, GeometryMut},
    geometry::{internal::coord_seq, Geometry, GeometryOps, GeometryRef, GeometryType},
};

fn out_of_bounds(
    index: &GeometryIndex,
    index_type: GeometryIndexType,
    value: i32,
    count: usize,
) -> GeometryIndexNotFoundError {
    log::trace!("{index_type} {value} of {index} out of bounds (count {count})");
    GeometryIndexNotFoundError::OutOfBounds {
        index: index.clone(),
        index_type,
        value,
        count,
    }
}

fn type_mismatch<T>(
    index: &GeometryIndex,
    geometry: GeometryRef<'_, T>,
    index_type: GeometryIndexType,
) -> GeometryIndexNotFoundError
where
    T: Real,
{
    let geometry_type = geometry.geometry_type();
    log::trace!("{index} asks for a {index_type} of a {geometry_type}");
    GeometryIndexNotFoundError::TypeMismatch {
        index: index.clone(),
        geometry_type,
        index_type,
    }
}

fn empty_target<T>(index: &GeometryIndex, geometry: GeometryRef<'_, T>) -> GeometryIndexNotFoundError
where
    T: Real,
{
    let geometry_type = geometry.geometry_type();
    log::trace!("{index} points into an empty {geometry_type}");
    GeometryIndexNotFoundError::EmptyTarget {
        index: index.clone(),
        geometry_type,
    }
}

fn invalid_operation(message: String) -> GeometryIndexNotFoundError {
    log::trace!("{message}");
    GeometryIndexNotFoundError::InvalidOperation { message }
}

fn expect_terminal(index: &GeometryIndex, expected: GeometryIndexType) -> IndexResult<()> {
    if index.index_type() == expected {
        Ok(())
    } else {
        Err(invalid_operation(format!(
            "expected a {expected} index, got {index}"
        )))
    }
}

/// `value` as a position below `count`.
fn checked_position(
    index: &GeometryIndex,
    index_type: GeometryIndexType,
    value: i32,
    count: usize,
) -> IndexResult<usize> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v < count)
        .ok_or_else(|| out_of_bounds(index, index_type, value, count))
}

#[inline]
fn to_index(index: &GeometryIndex, index_type: GeometryIndexType, position: usize) -> GeometryIndex {
    index.with_terminal(index_type, position as i32)
}

/// Number of children, `None` for geometries that cannot have children.
fn child_count<T>(geometry: GeometryRef<'_, T>) -> Option<usize>
where
    T: Real,
{
    match geometry {
        GeometryRef::Polygon(g) => Some(if g.is_empty() {
            0
        } else {
            1 + g.num_interior_rings()
        }),
        GeometryRef::MultiPoint(g) => Some(g.points().len()),
        GeometryRef::MultiLineString(g) => Some(g.line_strings().len()),
        GeometryRef::MultiPolygon(g) => Some(g.polygons().len()),
        GeometryRef::Point(_) | GeometryRef::LineString(_) | GeometryRef::LinearRing(_) => None,
    }
}

fn child<T>(geometry: GeometryRef<'_, T>, n: usize) -> Option<GeometryRef<'_, T>>
where
    T: Real,
{
    match geometry {
        GeometryRef::Polygon(g) => match n {
            0 => g.exterior_ring().map(GeometryRef::LinearRing),
            _ if g.is_empty() => None,
            _ => g.interior_ring_n(n - 1).map(GeometryRef::LinearRing),
        },
        GeometryRef::MultiPoint(g) => g.points().get(n).map(GeometryRef::Point),
        GeometryRef::MultiLineString(g) => g.line_strings().get(n).map(GeometryRef::LineString),
        GeometryRef::MultiPolygon(g) => g.polygons().get(n).map(GeometryRef::Polygon),
        GeometryRef::Point(_) | GeometryRef::LineString(_) | GeometryRef::LinearRing(_) => None,
    }
}

fn child_position<T>(index: &GeometryIndex, geometry: GeometryRef<'_, T>, value: i32) -> IndexResult<usize>
where
    T: Real,
{
    let count = child_count(geometry)
        .ok_or_else(|| type_mismatch(index, geometry, GeometryIndexType::Geometry))?;
    checked_position(index, GeometryIndexType::Geometry, value, count)
}

/// Geometry reached by following the leading geometry steps of `index`.
fn resolve_container<'a, T>(
    geometry: GeometryRef<'a, T>,
    index: &GeometryIndex,
) -> IndexResult<GeometryRef<'a, T>>
where
    T: Real,
{
    index
        .parent_steps()
        .iter()
        .try_fold(geometry, |current, &(_, value)| {
            let n = child_position(index, current, value)?;
            child(current, n)
                .ok_or_else(|| out_of_bounds(index, GeometryIndexType::Geometry, value, n))
        })
}

fn resolve_container_mut<'a, T>(
    geometry: &'a mut Geometry<T>,
    index: &GeometryIndex,
) -> IndexResult<GeometryMut<'a, T>>
where
    T: Real,
{
    let mut current = GeometryMut::new(geometry);
    for &(_, value) in index.parent_steps() {
        let n = child_position(index, current.as_geometry_ref(), value)?;
        current = current
            .child(n)
            .ok_or_else(|| out_of_bounds(index, GeometryIndexType::Geometry, value, n))?;
    }

    Ok(current)
}

/// Coordinates owned directly by a point, line string or ring.
fn own_coordinates<T>(geometry: GeometryRef<'_, T>) -> Option<&[Coordinate<T>]>
where
    T: Real,
{
    match geometry {
        GeometryRef::Point(g) => {
            let coords: &[Coordinate<T>] = match &g.coordinate {
                Some(c) => std::slice::from_ref(c),
                None => &[],
            };
            Some(coords)
        }
        GeometryRef::LineString(g) => Some(g.as_coordinates()),
        GeometryRef::LinearRing(g) => Some(g.as_coordinates()),
        _ => None,
    }
}

/// Coordinates of a line string or ring, the only geometries having edges.
fn edge_coordinates<T>(geometry: GeometryRef<'_, T>) -> Option<&[Coordinate<T>]>
where
    T: Real,
{
    match geometry {
        GeometryRef::LineString(g) => Some(g.as_coordinates()),
        GeometryRef::LinearRing(g) => Some(g.as_coordinates()),
        _ => None,
    }
}

/// Number of distinct vertexes of a closed ring.
#[inline]
fn ring_vertex_count(len: usize) -> usize {
    len.saturating_sub(1)
}

fn vertex_position<'a, T>(
    index: &GeometryIndex,
    container: GeometryRef<'a, T>,
) -> IndexResult<(&'a [Coordinate<T>], usize)>
where
    T: Real,
{
    let coords = own_coordinates(container)
        .ok_or_else(|| type_mismatch(index, container, GeometryIndexType::Vertex))?;
    if coords.is_empty() {
        return Err(empty_target(index, container));
    }

    let v = checked_position(index, GeometryIndexType::Vertex, index.value(), coords.len())?;
    Ok((coords, v))
}

fn edge_position<'a, T>(
    index: &GeometryIndex,
    container: GeometryRef<'a, T>,
) -> IndexResult<(&'a [Coordinate<T>], usize)>
where
    T: Real,
{
    let coords = edge_coordinates(container)
        .ok_or_else(|| type_mismatch(index, container, GeometryIndexType::Edge))?;
    if coords.is_empty() {
        return Err(empty_target(index, container));
    }

    let e = checked_position(index, GeometryIndexType::Edge, index.value(), coords.len() - 1)?;
    Ok((coords, e))
}

/// Positions before and after `position` on a ring of `n` distinct vertexes (or edges).
fn ring_neighbors(position: usize, n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let p = position % n;
    let mut result = Vec::with_capacity(2);
    for candidate in [(p + n - 1) % n, (p + 1) % n] {
        if candidate != p && !result.contains(&candidate) {
            result.push(candidate);
        }
    }
    result
}

/// Positions before and after `position` in an open sequence of `count` items.
fn line_neighbors(position: usize, count: usize) -> Vec<usize> {
    let mut result = Vec::with_capacity(2);
    if position > 0 {
        result.push(position - 1);
    }
    if position + 1 < count {
        result.push(position + 1);
    }
    result
}

/// Builds an index with one step per value, all but the last being geometry steps.
///
/// # Examples
///
/// ```
/// # use vector_geometry::index::{service, GeometryIndexType};
/// let index = service::create(GeometryIndexType::Vertex, &[1, 0, 4]).unwrap();
/// assert_eq!(index.to_string(), "geometry1.geometry0.vertex4");
/// assert!(service::create(GeometryIndexType::Vertex, &[]).is_err());
/// ```
pub fn create(index_type: GeometryIndexType, values: &[i32]) -> IndexResult<GeometryIndex> {
    GeometryIndex::from_values(index_type, values)
        .ok_or_else(|| invalid_operation("an index needs at least one value".to_string()))
}

/// Extends `index`, which must address a geometry, with child steps.
pub fn add_children(
    index: &GeometryIndex,
    index_type: GeometryIndexType,
    values: &[i32],
) -> IndexResult<GeometryIndex> {
    index.with_children(index_type, values).ok_or_else(|| {
        invalid_operation(format!(
            "cannot add children {values:?} to {index}, it must address a geometry"
        ))
    })
}

#[inline]
pub fn get_type(index: &GeometryIndex) -> GeometryIndexType {
    index.index_type()
}

#[inline]
pub fn get_value(index: &GeometryIndex) -> i32 {
    index.value()
}

#[inline]
pub fn is_vertex(index: &GeometryIndex) -> bool {
    index.index_type() == GeometryIndexType::Vertex
}

#[inline]
pub fn is_edge(index: &GeometryIndex) -> bool {
    index.index_type() == GeometryIndexType::Edge
}

#[inline]
pub fn is_geometry(index: &GeometryIndex) -> bool {
    index.index_type() == GeometryIndexType::Geometry
}

/// Index of the geometry holding the target of `index`, `None` for a single step index (whose
/// holder is the top level geometry).
#[inline]
pub fn get_parent(index: &GeometryIndex) -> Option<GeometryIndex> {
    index.parent()
}

/// Returns `true` if `index` addresses something inside the geometry addressed by `parent`.
#[inline]
pub fn is_child_of(parent: &GeometryIndex, index: &GeometryIndex) -> bool {
    parent.is_parent_of(index)
}

/// Index with the terminal value plus one. Not checked against any geometry.
#[inline]
pub fn next_vertex(index: &GeometryIndex) -> GeometryIndex {
    index.next_vertex()
}

/// Index with the terminal value minus one. Not checked against any geometry.
#[inline]
pub fn previous_vertex(index: &GeometryIndex) -> GeometryIndex {
    index.previous_vertex()
}

/// Coordinate addressed by a vertex index.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// # use vector_geometry::index::service;
/// let factory = GeometryFactory::new(4326, -1);
/// let shell = factory.create_linear_ring(&[coord(0.0, 0.0), coord(10.0, 0.0), coord(10.0, 10.0)]);
/// let polygon: Geometry = factory.create_polygon(Some(&shell), &[]).into();
/// let index = "geometry0.vertex2".parse().unwrap();
/// assert_eq!(service::get_vertex(&polygon, &index), Ok(coord(10.0, 10.0)));
/// // vertexes belong to the rings, not to the polygon
/// assert!(service::get_vertex(&polygon, &"vertex2".parse().unwrap()).is_err());
/// ```
pub fn get_vertex<G>(geometry: &G, index: &GeometryIndex) -> IndexResult<Coordinate<G::Num>>
where
    G: GeometryOps + ?Sized,
{
    expect_terminal(index, GeometryIndexType::Vertex)?;
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let (coords, v) = vertex_position(index, container)?;
    Ok(coords[v])
}

/// Start and end coordinates of the edge addressed by an edge index.
pub fn get_edge<G>(
    geometry: &G,
    index: &GeometryIndex,
) -> IndexResult<(Coordinate<G::Num>, Coordinate<G::Num>)>
where
    G: GeometryOps + ?Sized,
{
    expect_terminal(index, GeometryIndexType::Edge)?;
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let (coords, e) = edge_position(index, container)?;
    Ok((coords[e], coords[e + 1]))
}

/// Geometry addressed by a geometry index: a polygon ring or a multi geometry member.
pub fn get_geometry<'a, G>(
    geometry: &'a G,
    index: &GeometryIndex,
) -> IndexResult<GeometryRef<'a, G::Num>>
where
    G: GeometryOps + ?Sized,
{
    expect_terminal(index, GeometryIndexType::Geometry)?;
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let n = child_position(index, container, index.value())?;
    child(container, n)
        .ok_or_else(|| out_of_bounds(index, GeometryIndexType::Geometry, index.value(), n))
}

/// Type of the geometry addressed by a geometry index, or of the geometry holding the vertex or
/// edge addressed.
pub fn get_geometry_type<G>(geometry: &G, index: &GeometryIndex) -> IndexResult<GeometryType>
where
    G: GeometryOps + ?Sized,
{
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let target = match index.index_type() {
        GeometryIndexType::Vertex => vertex_position(index, container).map(|_| container),
        GeometryIndexType::Edge => edge_position(index, container).map(|_| container),
        GeometryIndexType::Geometry => get_geometry(geometry, index),
    };

    Ok(target?.geometry_type())
}

/// All coordinates of the geometry holding the vertex or edge addressed by `index`.
pub fn get_sibling_vertices<G>(
    geometry: &G,
    index: &GeometryIndex,
) -> IndexResult<Vec<Coordinate<G::Num>>>
where
    G: GeometryOps + ?Sized,
{
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let (coords, _) = match index.index_type() {
        GeometryIndexType::Vertex => vertex_position(index, container)?,
        GeometryIndexType::Edge => edge_position(index, container)?,
        GeometryIndexType::Geometry => {
            return Err(invalid_operation(format!(
                "{index} addresses a geometry, sibling vertexes need a vertex or edge index"
            )))
        }
    };

    Ok(coords.to_vec())
}

/// Number of targets of the same type as the one addressed by `index` held by the same geometry:
/// coordinates for a vertex index, edges for an edge index, children for a geometry index. The
/// terminal value itself is not checked.
pub fn get_sibling_count<G>(geometry: &G, index: &GeometryIndex) -> IndexResult<usize>
where
    G: GeometryOps + ?Sized,
{
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let index_type = index.index_type();
    let count = match index_type {
        GeometryIndexType::Vertex => own_coordinates(container).map(<[_]>::len),
        GeometryIndexType::Edge => {
            edge_coordinates(container).map(|coords| coords.len().saturating_sub(1))
        }
        GeometryIndexType::Geometry => child_count(container),
    };

    count.ok_or_else(|| type_mismatch(index, container, index_type))
}

/// Vertexes next to the vertex or edge addressed by `index`.
///
/// For a vertex these are the previous and next vertex, for an edge its two end points. Ring
/// vertexes wrap around (vertex 0 of a ring with 3 distinct vertexes has neighbors 2 and 1), the
/// first and last vertex of a line string have a single neighbor. The closing vertex of a ring is
/// the same vertex as vertex 0 and has its neighbors.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// # use vector_geometry::index::service;
/// let factory = GeometryFactory::new(4326, -1);
/// let ring = factory.create_linear_ring(&[coord(0.0, 0.0), coord(1.0, 0.0), coord(1.0, 1.0)]);
/// let neighbors = service::get_adjacent_vertices(&ring, &"vertex0".parse().unwrap()).unwrap();
/// let values: Vec<_> = neighbors.iter().map(|i| i.value()).collect();
/// assert_eq!(values, [2, 1]);
/// ```
pub fn get_adjacent_vertices<G>(geometry: &G, index: &GeometryIndex) -> IndexResult<Vec<GeometryIndex>>
where
    G: GeometryOps + ?Sized,
{
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let is_ring = matches!(container, GeometryRef::LinearRing(_));
    let positions = match index.index_type() {
        GeometryIndexType::Vertex => {
            let (coords, v) = vertex_position(index, container)?;
            if is_ring {
                ring_neighbors(v, ring_vertex_count(coords.len()))
            } else {
                line_neighbors(v, coords.len())
            }
        }
        GeometryIndexType::Edge => {
            let (coords, e) = edge_position(index, container)?;
            if is_ring {
                let n = ring_vertex_count(coords.len());
                let end = (e + 1) % n;
                if end == e {
                    vec![e]
                } else {
                    vec![e, end]
                }
            } else {
                vec![e, e + 1]
            }
        }
        GeometryIndexType::Geometry => {
            return Err(invalid_operation(format!(
                "{index} addresses a geometry, adjacency needs a vertex or edge index"
            )))
        }
    };

    Ok(positions
        .into_iter()
        .map(|p| to_index(index, GeometryIndexType::Vertex, p))
        .collect())
}

/// Edges next to the vertex or edge addressed by `index`.
///
/// For a vertex these are the edges ending and starting at it, for an edge the previous and next
/// edge. Ring edges wrap around, line string edges do not.
pub fn get_adjacent_edges<G>(geometry: &G, index: &GeometryIndex) -> IndexResult<Vec<GeometryIndex>>
where
    G: GeometryOps + ?Sized,
{
    let container = resolve_container(geometry.as_geometry_ref(), index)?;
    let is_ring = matches!(container, GeometryRef::LinearRing(_));
    let positions = match index.index_type() {
        GeometryIndexType::Vertex => {
            let (coords, v) = vertex_position(index, container)?;
            let edge_count = coords.len() - 1;
            if is_ring {
                let n = ring_vertex_count(coords.len());
                if n == 0 {
                    Vec::new()
                } else {
                    let p = v % n;
                    let before = (p + n - 1) % n;
                    if before == p {
                        vec![p]
                    } else {
                        vec![before, p]
                    }
                }
            } else {
                let mut edges = Vec::with_capacity(2);
                if v > 0 {
                    edges.push(v - 1);
                }
                if v < edge_count {
                    edges.push(v);
                }
                edges
            }
        }
        GeometryIndexType::Edge => {
            let (coords, e) = edge_position(index, container)?;
            if is_ring {
                ring_neighbors(e, ring_vertex_count(coords.len()))
            } else {
                line_neighbors(e, coords.len() - 1)
            }
        }
        GeometryIndexType::Geometry => {
            return Err(invalid_operation(format!(
                "{index} addresses a geometry, adjacency needs a vertex or edge index"
            )))
        }
    };

    Ok(positions
        .into_iter()
        .map(|p| to_index(index, GeometryIndexType::Edge, p))
        .collect())
}

/// Returns `true` if `two` is one of the vertexes (for a vertex index) or edges (for an edge index)
/// adjacent to `one`, see [get_adjacent_vertices] and [get_adjacent_edges]. A geometry index is
/// never adjacent.
pub fn is_adjacent<G>(geometry: &G, one: &GeometryIndex, two: &GeometryIndex) -> IndexResult<bool>
where
    G: GeometryOps + ?Sized,
{
    let candidates = match two.index_type() {
        GeometryIndexType::Vertex => get_adjacent_vertices(geometry, one)?,
        GeometryIndexType::Edge => get_adjacent_edges(geometry, one)?,
        GeometryIndexType::Geometry => return Ok(false),
    };

    let two = ring_vertex_wrapped(geometry.as_geometry_ref(), two);
    Ok(candidates.contains(&two))
}

/// The closing vertex of a ring is the same vertex as vertex 0, adjacency reports it as such.
fn ring_vertex_wrapped<T>(geometry: GeometryRef<'_, T>, index: &GeometryIndex) -> GeometryIndex
where
    T: Real,
{
    if index.index_type() == GeometryIndexType::Vertex {
        if let Ok(GeometryRef::LinearRing(ring)) = resolve_container(geometry, index) {
            let n = ring_vertex_count(ring.as_coordinates().len());
            if let Ok(v) = usize::try_from(index.value()) {
                if n > 0 && v == n {
                    return index.with_terminal(GeometryIndexType::Vertex, 0);
                }
            }
        }
    }
    index.clone()
}

/// Insert `coordinates` at the position addressed by `index`.
///
/// A vertex index inserts before that vertex, the vertex count of a line string (one past the
/// end) appends. For rings the positions are `0..=len - 1`: inserting at 0 moves the closing
/// vertex along, inserting at `len - 1` appends before the closing vertex. An edge index inserts
/// between the edge's end points. An empty point accepts a single coordinate at vertex 0.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// # use vector_geometry::index::service;
/// let factory = GeometryFactory::new(4326, -1);
/// let mut line: Geometry = factory.create_line_string(&[coord(0.0, 0.0), coord(2.0, 0.0)]).into();
/// service::insert(&mut line, &"edge0".parse().unwrap(), &[coord(1.0, 1.0)]).unwrap();
/// assert_eq!(line.to_wkt(), "LINESTRING (0.0 0.0, 1.0 1.0, 2.0 0.0)");
/// // edges only exist strictly between vertexes
/// assert!(service::insert(&mut line, &"edge2".parse().unwrap(), &[coord(3.0, 0.0)]).is_err());
/// ```
pub fn insert<T>(
    geometry: &mut Geometry<T>,
    index: &GeometryIndex,
    coordinates: &[Coordinate<T>],
) -> IndexResult<()>
where
    T: Real,
{
    let index_type = index.index_type();
    if index_type == GeometryIndexType::Geometry {
        return Err(invalid_operation(format!(
            "cannot insert coordinates at {index}, a vertex or edge index is required"
        )));
    }

    match resolve_container_mut(geometry, index)? {
        GeometryMut::Point(p) => {
            if index_type != GeometryIndexType::Vertex {
                return Err(type_mismatch(index, p.as_geometry_ref(), index_type));
            }
            if !p.is_empty() || coordinates.len() != 1 {
                return Err(invalid_operation(format!(
                    "cannot insert {} coordinates at {index}, a point holds one coordinate",
                    coordinates.len()
                )));
            }
            checked_position(index, index_type, index.value(), 1)?;
            editor::set_coordinate(p, Some(coordinates[0]));
        }
        GeometryMut::LineString(ls) => {
            let at = match index_type {
                GeometryIndexType::Edge => edge_position(index, ls.as_geometry_ref())?.1 + 1,
                _ => checked_position(index, index_type, index.value(), ls.num_points() + 1)?,
            };
            let mut new_coords = ls.as_coordinates().to_vec();
            new_coords.splice(at..at, coordinates.iter().copied());
            editor::set_coordinates(ls, new_coords);
        }
        GeometryMut::LinearRing(r) => {
            let mut new_coords = r.as_coordinates().to_vec();
            if index_type == GeometryIndexType::Edge {
                let at = edge_position(index, r.as_geometry_ref())?.1 + 1;
                new_coords.splice(at..at, coordinates.iter().copied());
            } else if new_coords.is_empty() {
                checked_position(index, index_type, index.value(), 1)?;
                new_coords.extend_from_slice(coordinates);
                coord_seq::close(&mut new_coords);
            } else {
                // position `count` is the closing coordinate, inserting there appends
                let count = ring_vertex_count(new_coords.len());
                let at = checked_position(index, index_type, index.value(), count + 1)?;
                new_coords.splice(at..at, coordinates.iter().copied());
                if at == 0 {
                    let last = new_coords.len() - 1;
                    new_coords[last] = new_coords[0];
                }
            }
            editor::set_coordinates(r, new_coords);
        }
        other => return Err(type_mismatch(index, other.as_geometry_ref(), index_type)),
    }

    log::debug!("inserted {} coordinates at {index}", coordinates.len());
    Ok(())
}

/// Distinct vertexes of a ring without those at `positions`, closed again.
fn ring_without<T>(coords: &[Coordinate<T>], positions: &[usize]) -> Vec<Coordinate<T>>
where
    T: Real,
{
    let n = ring_vertex_count(coords.len());
    if n == 0 {
        return Vec::new();
    }

    let mut remove: Vec<usize> = positions.iter().map(|p| p % n).collect();
    remove.sort_unstable_by(|a, b| b.cmp(a));
    remove.dedup();

    let mut result = coords[..n].to_vec();
    for p in remove {
        result.remove(p);
    }
    coord_seq::close(&mut result);
    result
}

/// Delete the vertex, edge (both of its end points) or child geometry addressed by `index`.
///
/// Deleting vertex 0 or the closing vertex of a ring deletes the same position, the ring is closed
/// again on its new first vertex. Deleting the exterior ring of a polygon (child 0) empties the
/// polygon, removing its interior rings as well.
pub fn delete<T>(geometry: &mut Geometry<T>, index: &GeometryIndex) -> IndexResult<()>
where
    T: Real,
{
    let index_type = index.index_type();
    match (index_type, resolve_container_mut(geometry, index)?) {
        (GeometryIndexType::Geometry, container) => {
            let n = child_position(index, container.as_geometry_ref(), index.value())?;
            match container {
                GeometryMut::Polygon(p) if n == 0 => {
                    editor::set_exterior_ring(p, None);
                    editor::set_interior_rings(p, Vec::new());
                }
                GeometryMut::Polygon(p) => {
                    editor::remove_interior_ring_n(p, n - 1);
                }
                GeometryMut::MultiPoint(g) => {
                    editor::remove_point_n(g, n);
                }
                GeometryMut::MultiLineString(g) => {
                    editor::remove_line_string_n(g, n);
                }
                GeometryMut::MultiPolygon(g) => {
                    editor::remove_polygon_n(g, n);
                }
                leaf => return Err(type_mismatch(index, leaf.as_geometry_ref(), index_type)),
            }
        }
        (GeometryIndexType::Vertex, GeometryMut::Point(p)) => {
            vertex_position(index, p.as_geometry_ref())?;
            editor::set_coordinate(p, None);
        }
        (GeometryIndexType::Vertex, GeometryMut::LineString(ls)) => {
            let (coords, v) = vertex_position(index, ls.as_geometry_ref())?;
            let mut new_coords = coords.to_vec();
            new_coords.remove(v);
            editor::set_coordinates(ls, new_coords);
        }
        (GeometryIndexType::Vertex, GeometryMut::LinearRing(r)) => {
            let (coords, v) = vertex_position(index, r.as_geometry_ref())?;
            let new_coords = ring_without(coords, &[v]);
            editor::set_coordinates(r, new_coords);
        }
        (GeometryIndexType::Edge, GeometryMut::LineString(ls)) => {
            let (coords, e) = edge_position(index, ls.as_geometry_ref())?;
            let mut new_coords = coords.to_vec();
            new_coords.drain(e..=e + 1);
            editor::set_coordinates(ls, new_coords);
        }
        (GeometryIndexType::Edge, GeometryMut::LinearRing(r)) => {
            let (coords, e) = edge_position(index, r.as_geometry_ref())?;
            let new_coords = ring_without(coords, &[e, e + 1]);
            editor::set_coordinates(r, new_coords);
        }
        (_, other) => return Err(type_mismatch(index, other.as_geometry_ref(), index_type)),
    }

    log::debug!("deleted {index}");
    Ok(())
}

/// Move the vertex addressed by `index` to `coordinate`. Moving vertex 0 or the closing vertex of a
/// ring moves both.
pub fn set_vertex<T>(
    geometry: &mut Geometry<T>,
    index: &GeometryIndex,
    coordinate: Coordinate<T>,
) -> IndexResult<()>
where
    T: Real,
{
    expect_terminal(index, GeometryIndexType::Vertex)?;
    match resolve_container_mut(geometry, index)? {
        GeometryMut::Point(p) => {
            vertex_position(index, p.as_geometry_ref())?;
            editor::set_coordinate(p, Some(coordinate));
        }
        GeometryMut::LineString(ls) => {
            let (_, v) = vertex_position(index, ls.as_geometry_ref())?;
            editor::set_coordinate_n(ls, coordinate, v);
        }
        GeometryMut::LinearRing(r) => {
            let (coords, v) = vertex_position(index, r.as_geometry_ref())?;
            let last = coords.len() - 1;
            if v == 0 || v == last {
                editor::set_coordinate_n(r, coordinate, 0);
                editor::set_coordinate_n(r, coordinate, last);
            } else {
                editor::set_coordinate_n(r, coordinate, v);
            }
        }
        other => {
            return Err(type_mismatch(
                index,
                other.as_geometry_ref(),
                GeometryIndexType::Vertex,
            ))
        }
    }

    log::debug!("moved {index}");
    Ok(())
}
