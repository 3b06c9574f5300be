//! Construction of geometries.
use crate::{
    core::{
        math::{Bbox, Coordinate},
        traits::Real,
    },
    geometry::{
        internal::coord_seq, Geometry, GeometryOps, GeometryRef, LineString, LinearRing,
        MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Builds geometries sharing one spatial reference identifier and precision.
///
/// Every geometry created (or copied) by a factory carries the factory's `srid` and `precision`.
/// All inputs are deep copied, so the created geometry never aliases caller owned data.
///
/// Construction never fails: geometries that break the rules of their type (for example a ring with
/// too few coordinates) are still created, use [GeometryOps::is_valid] to check them.
///
/// # Examples
///
/// ```
/// # use vector_geometry::prelude::*;
/// let factory = GeometryFactory::new(4326, -1);
/// let ring = factory.create_linear_ring(&[coord(0.0, 0.0), coord(4.0, 0.0), coord(4.0, 4.0)]);
/// // closing coordinate appended
/// assert_eq!(ring.num_points(), 4);
/// assert!(ring.is_closed());
/// let polygon = factory.create_polygon(Some(&ring), &[]);
/// assert_eq!(polygon.area(), 8.0);
/// assert_eq!(polygon.srid(), 4326);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeometryFactory {
    srid: i32,
    precision: i32,
}

impl GeometryFactory {
    #[inline]
    pub fn new(srid: i32, precision: i32) -> Self {
        GeometryFactory { srid, precision }
    }

    #[inline]
    pub fn srid(&self) -> i32 {
        self.srid
    }

    #[inline]
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Point at `coordinate`, or the empty point if `coordinate` is `None`.
    #[inline]
    pub fn create_point<T>(&self, coordinate: Option<Coordinate<T>>) -> Point<T>
    where
        T: Real,
    {
        Point::new(self.srid, self.precision, coordinate)
    }

    /// Line string through `coordinates` in order. An empty slice creates the empty line string.
    #[inline]
    pub fn create_line_string<T>(&self, coordinates: &[Coordinate<T>]) -> LineString<T>
    where
        T: Real,
    {
        LineString::new(self.srid, self.precision, coordinates.to_vec())
    }

    /// Closed ring through `coordinates`.
    ///
    /// If the first and last coordinates differ (exact comparison) a copy of the first is appended.
    /// A single coordinate is never considered closed and becomes a two coordinate ring, which is
    /// not valid. An empty slice creates the empty ring.
    pub fn create_linear_ring<T>(&self, coordinates: &[Coordinate<T>]) -> LinearRing<T>
    where
        T: Real,
    {
        let mut coords = Vec::with_capacity(coordinates.len() + 1);
        coords.extend_from_slice(coordinates);
        coord_seq::close(&mut coords);

        LinearRing::new(self.srid, self.precision, coords)
    }

    /// Closed five coordinate ring around the corners of `bbox`, starting and ending at its origin.
    pub fn create_linear_ring_from_bbox<T>(&self, bbox: &Bbox<T>) -> LinearRing<T>
    where
        T: Real,
    {
        let min_x = bbox.x;
        let min_y = bbox.y;
        let max_x = bbox.max_x();
        let max_y = bbox.max_y();
        let coords = vec![
            Coordinate::new(min_x, min_y),
            Coordinate::new(max_x, min_y),
            Coordinate::new(max_x, max_y),
            Coordinate::new(min_x, max_y),
            Coordinate::new(min_x, min_y),
        ];

        LinearRing::new(self.srid, self.precision, coords)
    }

    /// Polygon with the `exterior_ring` and `interior_rings` given. The empty polygon is created if
    /// `exterior_ring` is `None`, interior rings are then ignored.
    pub fn create_polygon<T>(
        &self,
        exterior_ring: Option<&LinearRing<T>>,
        interior_rings: &[LinearRing<T>],
    ) -> Polygon<T>
    where
        T: Real,
    {
        let Some(exterior_ring) = exterior_ring else {
            return Polygon::new(self.srid, self.precision, None, Vec::new());
        };

        let exterior = self.create_linear_ring(exterior_ring.as_coordinates());
        let interiors = interior_rings
            .iter()
            .map(|r| self.create_linear_ring(r.as_coordinates()))
            .collect();

        Polygon::new(self.srid, self.precision, Some(exterior), interiors)
    }

    /// Polygon without holes covering `bbox`, see [GeometryFactory::create_linear_ring_from_bbox].
    pub fn create_polygon_from_bbox<T>(&self, bbox: &Bbox<T>) -> Polygon<T>
    where
        T: Real,
    {
        let exterior = self.create_linear_ring_from_bbox(bbox);
        Polygon::new(self.srid, self.precision, Some(exterior), Vec::new())
    }

    pub fn create_multi_point<T>(&self, points: &[Point<T>]) -> MultiPoint<T>
    where
        T: Real,
    {
        let members = points.iter().map(|p| self.create_point(p.coordinate())).collect();
        MultiPoint::new(self.srid, self.precision, members)
    }

    pub fn create_multi_line_string<T>(&self, line_strings: &[LineString<T>]) -> MultiLineString<T>
    where
        T: Real,
    {
        let members = line_strings
            .iter()
            .map(|ls| self.create_line_string(ls.as_coordinates()))
            .collect();
        MultiLineString::new(self.srid, self.precision, members)
    }

    pub fn create_multi_polygon<T>(&self, polygons: &[Polygon<T>]) -> MultiPolygon<T>
    where
        T: Real,
    {
        let members = polygons.iter().map(|p| self.copy_polygon(p)).collect();
        MultiPolygon::new(self.srid, self.precision, members)
    }

    /// Deep copy of any geometry, carrying this factory's srid and precision.
    ///
    /// Each part is rebuilt through the matching `create_*` function, so rings are closed the same
    /// way [GeometryFactory::create_linear_ring] closes them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector_geometry::prelude::*;
    /// let line = GeometryFactory::new(4326, -1).create_line_string(&[coord(0.0, 0.0), coord(3.0, 4.0)]);
    /// let copy = GeometryFactory::new(3857, 2).create_geometry(&line);
    /// assert_eq!(copy.srid(), 3857);
    /// assert_eq!(copy.precision(), 2);
    /// assert_eq!(copy.length(), 5.0);
    /// assert_eq!(copy.geometry_type(), GeometryType::LineString);
    /// ```
    pub fn create_geometry<G>(&self, other: &G) -> Geometry<G::Num>
    where
        G: GeometryOps + ?Sized,
    {
        match other.as_geometry_ref() {
            GeometryRef::Point(g) => self.create_point(g.coordinate()).into(),
            GeometryRef::LineString(g) => self.create_line_string(g.as_coordinates()).into(),
            GeometryRef::LinearRing(g) => self.create_linear_ring(g.as_coordinates()).into(),
            GeometryRef::Polygon(g) => self.copy_polygon(g).into(),
            GeometryRef::MultiPoint(g) => self.create_multi_point(g.points()).into(),
            GeometryRef::MultiLineString(g) => {
                self.create_multi_line_string(g.line_strings()).into()
            }
            GeometryRef::MultiPolygon(g) => self.create_multi_polygon(g.polygons()).into(),
        }
    }

    #[inline]
    fn copy_polygon<T>(&self, polygon: &Polygon<T>) -> Polygon<T>
    where
        T: Real,
    {
        self.create_polygon(polygon.exterior_ring(), polygon.interior_rings())
    }
}
