use super::{
    internal::{coord_seq, wkt_writer},
    GeometryOps, GeometryOptions, GeometryRef, GeometryType, LineString,
};
use crate::core::{math::Coordinate, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of line strings.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString<T = f64> {
    pub(crate) srid: i32,
    pub(crate) precision: i32,
    pub(crate) line_strings: Vec<LineString<T>>,
}

impl<T> MultiLineString<T>
where
    T: Real,
{
    #[inline]
    pub(crate) fn new(srid: i32, precision: i32, line_strings: Vec<LineString<T>>) -> Self {
        MultiLineString {
            srid,
            precision,
            line_strings,
        }
    }

    #[inline]
    pub fn line_strings(&self) -> &[LineString<T>] {
        &self.line_strings
    }

    /// Member at position `n`, `None` if out of range.
    #[inline]
    pub fn geometry_n(&self, n: isize) -> Option<&LineString<T>> {
        usize::try_from(n).ok().and_then(|i| self.line_strings.get(i))
    }
}

impl<T> GeometryOps for MultiLineString<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn srid(&self) -> i32 {
        self.srid
    }

    #[inline]
    fn precision(&self) -> i32 {
        self.precision
    }

    #[inline]
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    #[inline]
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        GeometryRef::MultiLineString(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    fn num_points(&self) -> usize {
        self.line_strings.iter().map(|l| l.num_points()).sum()
    }

    fn coordinates(&self) -> Vec<Coordinate<T>> {
        self.line_strings
            .iter()
            .flat_map(|l| l.as_coordinates().iter().copied())
            .collect()
    }

    #[inline]
    fn num_geometries(&self) -> usize {
        self.line_strings.len()
    }

    #[inline]
    fn area(&self) -> T {
        T::zero()
    }

    fn length(&self) -> T {
        self.line_strings
            .iter()
            .fold(T::zero(), |acc, l| acc + l.length())
    }

    /// Length weighted centroid over the segments of all members.
    fn centroid(&self) -> Option<Coordinate<T>> {
        if self.line_strings.iter().all(|l| l.is_empty()) {
            return None;
        }

        let mut total_length = T::zero();
        let mut sum = Coordinate::zero();
        for line in &self.line_strings {
            for w in line.as_coordinates().windows(2) {
                let seg_length = w[0].distance(w[1]);
                sum = sum + w[0].midpoint(w[1]).scale(seg_length);
                total_length = total_length + seg_length;
            }
        }

        Some(Coordinate::new(sum.x / total_length, sum.y / total_length))
    }

    fn distance(&self, coordinate: Coordinate<T>) -> Option<T> {
        self.line_strings
            .iter()
            .filter_map(|l| coord_seq::distance(l.as_coordinates(), coordinate))
            .reduce(|a, b| num_traits::real::Real::min(a, b))
    }

    fn is_simple(&self) -> bool {
        self.line_strings.iter().all(|l| l.is_simple())
    }

    fn is_valid_opt(&self, options: &GeometryOptions<T>) -> bool {
        self.line_strings.iter().all(|l| l.is_valid_opt(options))
    }

    fn to_wkt(&self) -> String {
        let body = wkt_writer::group(
            self.line_strings
                .iter()
                .map(|l| wkt_writer::coordinate_seq(l.as_coordinates())),
        );
        wkt_writer::tagged(GeometryType::MultiLineString.wkt_tag(), &body)
    }
}
