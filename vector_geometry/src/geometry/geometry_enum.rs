use super::{
    GeometryOps, GeometryOptions, GeometryType, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::core::{
    math::{Bbox, Coordinate},
    traits::Real,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any geometry, owned.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", content = "geometry")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<T = f64> {
    Point(Point<T>),
    LineString(LineString<T>),
    LinearRing(LinearRing<T>),
    Polygon(Polygon<T>),
    MultiPoint(MultiPoint<T>),
    MultiLineString(MultiLineString<T>),
    MultiPolygon(MultiPolygon<T>),
}

/// Any geometry, borrowed. Returned when navigating into members of a geometry without copying.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeometryRef<'a, T = f64> {
    Point(&'a Point<T>),
    LineString(&'a LineString<T>),
    LinearRing(&'a LinearRing<T>),
    Polygon(&'a Polygon<T>),
    MultiPoint(&'a MultiPoint<T>),
    MultiLineString(&'a MultiLineString<T>),
    MultiPolygon(&'a MultiPolygon<T>),
}

/// Evaluate `$body` with `$g` bound to the geometry held by whichever variant `$value` is.
macro_rules! dispatch {
    ($value:expr, $g:ident => $body:expr) => {
        match $value {
            Self::Point($g) => $body,
            Self::LineString($g) => $body,
            Self::LinearRing($g) => $body,
            Self::Polygon($g) => $body,
            Self::MultiPoint($g) => $body,
            Self::MultiLineString($g) => $body,
            Self::MultiPolygon($g) => $body,
        }
    };
}

/// Implements [GeometryOps] for a sum type by delegating to the held geometry.
macro_rules! impl_geometry_ops_dispatch {
    () => {
        type Num = T;

        #[inline]
        fn srid(&self) -> i32 {
            dispatch!(self, g => g.srid())
        }

        #[inline]
        fn precision(&self) -> i32 {
            dispatch!(self, g => g.precision())
        }

        #[inline]
        fn geometry_type(&self) -> GeometryType {
            dispatch!(self, g => g.geometry_type())
        }

        #[inline]
        fn is_empty(&self) -> bool {
            dispatch!(self, g => g.is_empty())
        }

        #[inline]
        fn num_points(&self) -> usize {
            dispatch!(self, g => g.num_points())
        }

        fn coordinates(&self) -> Vec<Coordinate<T>> {
            dispatch!(self, g => g.coordinates())
        }

        #[inline]
        fn num_geometries(&self) -> usize {
            dispatch!(self, g => g.num_geometries())
        }

        fn bounds(&self) -> Option<Bbox<T>> {
            dispatch!(self, g => g.bounds())
        }

        fn area(&self) -> T {
            dispatch!(self, g => g.area())
        }

        fn length(&self) -> T {
            dispatch!(self, g => g.length())
        }

        fn centroid(&self) -> Option<Coordinate<T>> {
            dispatch!(self, g => g.centroid())
        }

        fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
            dispatch!(self, g => g.distance(coordinate))
        }

        fn is_simple(&self) -> bool {
            dispatch!(self, g => g.is_simple())
        }

        fn is_valid_opt(&self, options: &GeometryOptions<T>) -> bool {
            dispatch!(self, g => g.is_valid_opt(options))
        }

        fn to_wkt(&self) -> String {
            dispatch!(self, g => g.to_wkt())
        }
    };
}

impl<T> GeometryOps for Geometry<T>
where
    T: Real,
{
    impl_geometry_ops_dispatch!();

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        match self {
            Geometry::Point(g) => GeometryRef::Point(g),
            Geometry::LineString(g) => GeometryRef::LineString(g),
            Geometry::LinearRing(g) => GeometryRef::LinearRing(g),
            Geometry::Polygon(g) => GeometryRef::Polygon(g),
            Geometry::MultiPoint(g) => GeometryRef::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryRef::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryRef::MultiPolygon(g),
        }
    }
}

impl<'a, T> GeometryOps for GeometryRef<'a, T>
where
    T: Real,
{
    impl_geometry_ops_dispatch!();

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        *self
    }
}

impl<T> Geometry<T>
where
    T: Real,
{
    /// Member at position `n` of a multi geometry (`None` if out of range). Single geometries
    /// return themselves for any `n`.
    #[inline]
    pub fn geometry_n(&self, n: isize) -> Option<GeometryRef<'_, T>> {
        self.as_geometry_ref().geometry_n(n)
    }
}

impl<'a, T> GeometryRef<'a, T>
where
    T: Real,
{
    /// Member at position `n` of a multi geometry (`None` if out of range). Single geometries
    /// return themselves for any `n`.
    pub fn geometry_n(self, n: isize) -> Option<GeometryRef<'a, T>> {
        match self {
            GeometryRef::MultiPoint(g) => g.geometry_n(n).map(GeometryRef::Point),
            GeometryRef::MultiLineString(g) => g.geometry_n(n).map(GeometryRef::LineString),
            GeometryRef::MultiPolygon(g) => g.geometry_n(n).map(GeometryRef::Polygon),
            single => Some(single),
        }
    }

    /// Owned copy of the referenced geometry.
    pub fn to_geometry(self) -> Geometry<T> {
        match self {
            GeometryRef::Point(g) => Geometry::Point(g.clone()),
            GeometryRef::LineString(g) => Geometry::LineString(g.clone()),
            GeometryRef::LinearRing(g) => Geometry::LinearRing(g.clone()),
            GeometryRef::Polygon(g) => Geometry::Polygon(g.clone()),
            GeometryRef::MultiPoint(g) => Geometry::MultiPoint(g.clone()),
            GeometryRef::MultiLineString(g) => Geometry::MultiLineString(g.clone()),
            GeometryRef::MultiPolygon(g) => Geometry::MultiPolygon(g.clone()),
        }
    }
}

macro_rules! impl_from_variant {
    ($variant:ident) => {
        impl<T> From<$variant<T>> for Geometry<T> {
            #[inline]
            fn from(g: $variant<T>) -> Self {
                Geometry::$variant(g)
            }
        }

        impl<'a, T> From<&'a $variant<T>> for GeometryRef<'a, T> {
            #[inline]
            fn from(g: &'a $variant<T>) -> Self {
                GeometryRef::$variant(g)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(LineString);
impl_from_variant!(LinearRing);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPoint);
impl_from_variant!(MultiLineString);
impl_from_variant!(MultiPolygon);

impl<T> fmt::Display for Geometry<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

impl<T> fmt::Display for GeometryRef<'_, T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}
