use super::{relate, GeometryOptions, GeometryRef, GeometryType};
use crate::core::{
    math::{Bbox, Coordinate},
    traits::Real,
};

/// Trait holding the operations shared by every geometry type.
///
/// All methods are read-only queries. SRID and precision are fixed when a geometry is created and
/// are never consulted by the binary operations ([GeometryOps::intersects]); callers combining
/// geometries from different spatial reference systems must transform them first.
pub trait GeometryOps {
    /// Numeric type used for the coordinates.
    type Num: Real;

    /// Spatial reference identifier.
    fn srid(&self) -> i32;

    /// Rounding precision hint, -1 when unspecified.
    fn precision(&self) -> i32;

    fn geometry_type(&self) -> GeometryType;

    /// Borrowed view of this geometry used for dispatch over the geometry kinds.
    fn as_geometry_ref(&self) -> GeometryRef<'_, Self::Num>;

    fn is_empty(&self) -> bool;

    /// Total number of coordinates held, over all parts.
    fn num_points(&self) -> usize;

    /// Copy of all the coordinates held, in order: for polygons the exterior ring followed by each
    /// interior ring, for multi geometries each member in turn.
    fn coordinates(&self) -> Vec<Coordinate<Self::Num>>;

    /// Number of member geometries, 1 for single geometries.
    fn num_geometries(&self) -> usize;

    /// Bounding box of all coordinates, `None` if the geometry is empty.
    fn bounds(&self) -> Option<Bbox<Self::Num>> {
        Bbox::from_coordinates(self.coordinates())
    }

    /// Enclosed area, always 0 for point and line geometries.
    fn area(&self) -> Self::Num;

    /// Total length of all segments.
    fn length(&self) -> Self::Num;

    /// Centroid, `None` if the geometry is empty.
    ///
    /// Line centroids are weighted by segment length, so a line with zero total length yields a
    /// NaN coordinate.
    fn centroid(&self) -> Option<Coordinate<Self::Num>>;

    /// Minimum distance from `coordinate` to the geometry's coordinates and segments, `None` if the
    /// geometry is empty.
    fn distance(&self, coordinate: Coordinate<Self::Num>) -> Option<Self::Num>;

    /// Returns `true` if no two non-adjacent segments of a coordinate sequence intersect. Empty
    /// geometries are simple, multi geometries are simple if all members are.
    fn is_simple(&self) -> bool;

    /// Same as [GeometryOps::is_valid_opt] with default options.
    fn is_valid(&self) -> bool {
        self.is_valid_opt(&GeometryOptions::new())
    }

    /// Validity check for this geometry type, see the type's documentation for its rules.
    fn is_valid_opt(&self, options: &GeometryOptions<Self::Num>) -> bool;

    /// Same as [GeometryOps::intersects_opt] with default options.
    fn intersects<G>(&self, other: &G) -> bool
    where
        G: GeometryOps<Num = Self::Num> + ?Sized,
    {
        self.intersects_opt(other, &GeometryOptions::new())
    }

    /// Tests if the boundaries of two geometries intersect.
    ///
    /// Segments are tested pairwise for crossings, a coordinate lying on a segment of the other
    /// geometry (within `options.touch_eps`) also counts. Polygons take part through their rings
    /// only: a geometry lying entirely inside a polygon without meeting a ring does not intersect
    /// it. Multi geometries intersect if any member does, on either side.
    fn intersects_opt<G>(&self, other: &G, options: &GeometryOptions<Self::Num>) -> bool
    where
        G: GeometryOps<Num = Self::Num> + ?Sized,
    {
        relate::intersects(self.as_geometry_ref(), other.as_geometry_ref(), options)
    }

    /// Well known text representation, e.g. `"POINT (30.0 10.0)"`.
    fn to_wkt(&self) -> String;
}
