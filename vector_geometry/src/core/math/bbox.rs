use super::{coord, Coordinate};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box defined by an origin and extents.
///
/// The origin (`x`, `y`) is the minimum corner, `width` and `height` are never negative for boxes
/// created by this crate. A box around a single position has zero width and height.
///
/// All operations are non-mutating and return new boxes.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bbox<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Default for Bbox<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Bbox::new(T::zero(), T::zero(), T::zero(), T::zero())
    }
}

impl<T> Bbox<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Bbox {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box holding all the `coordinates` given, `None` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector_geometry::core::math::*;
    /// let coords = [coord(1.0, 5.0), coord(4.0, 2.0), coord(2.0, 3.0)];
    /// let bbox = Bbox::from_coordinates(coords.iter().copied()).unwrap();
    /// assert_eq!(bbox, Bbox::new(1.0, 2.0, 3.0, 3.0));
    /// ```
    pub fn from_coordinates<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate<T>>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for c in iter {
            if c.x < min_x {
                min_x = c.x;
            } else if c.x > max_x {
                max_x = c.x;
            }

            if c.y < min_y {
                min_y = c.y;
            } else if c.y > max_y {
                max_y = c.y;
            }
        }

        Some(Bbox::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.y + self.height
    }

    /// Minimum corner.
    #[inline]
    pub fn origin(&self) -> Coordinate<T> {
        coord(self.x, self.y)
    }

    /// Maximum corner.
    #[inline]
    pub fn end_point(&self) -> Coordinate<T> {
        coord(self.max_x(), self.max_y())
    }

    #[inline]
    pub fn center_point(&self) -> Coordinate<T> {
        coord(
            self.x + self.width / T::two(),
            self.y + self.height / T::two(),
        )
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// A box is empty if either of its extents is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == T::zero() || self.height == T::zero()
    }

    /// Box with origin and both extents at zero, used as the neutral element of
    /// [Bbox::union].
    #[inline]
    fn is_all_zero(&self) -> bool {
        self.x == T::zero()
            && self.y == T::zero()
            && self.width == T::zero()
            && self.height == T::zero()
    }

    /// Smallest box holding both `self` and `other`.
    ///
    /// A box with origin and extents all zero is ignored rather than stretching the result to
    /// the coordinate origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector_geometry::core::math::*;
    /// let a = Bbox::new(10.0, 10.0, 5.0, 5.0);
    /// let b = Bbox::new(12.0, 0.0, 10.0, 2.0);
    /// assert_eq!(a.union(&b), Bbox::new(10.0, 0.0, 12.0, 15.0));
    /// assert_eq!(a.union(&Bbox::default()), a);
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        if other.is_all_zero() {
            return *self;
        }

        if self.is_all_zero() {
            return *other;
        }

        let min_x = num_traits::real::Real::min(self.x, other.x);
        let min_y = num_traits::real::Real::min(self.y, other.y);
        let max_x = num_traits::real::Real::max(self.max_x(), other.max_x());
        let max_y = num_traits::real::Real::max(self.max_y(), other.max_y());
        Bbox::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Overlapping area of `self` and `other`, `None` if they do not intersect.
    ///
    /// Boxes touching only along a side or at a corner intersect in a zero extent box.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let min_x = num_traits::real::Real::max(self.x, other.x);
        let min_y = num_traits::real::Real::max(self.y, other.y);
        let max_x = num_traits::real::Real::min(self.max_x(), other.max_x());
        let max_y = num_traits::real::Real::min(self.max_y(), other.max_y());
        Some(Bbox::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Returns `true` if `other` lies entirely within `self`, boundary inclusive.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Returns `true` if `coordinate` lies within `self`, boundary inclusive.
    #[inline]
    pub fn contains_coordinate(&self, coordinate: Coordinate<T>) -> bool {
        coordinate.x >= self.x
            && coordinate.y >= self.y
            && coordinate.x <= self.max_x()
            && coordinate.y <= self.max_y()
    }

    /// Returns `true` if the boxes overlap, boundary inclusive.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.x > self.max_x()
            || other.max_x() < self.x
            || other.y > self.max_y()
            || other.max_y() < self.y)
    }

    /// Box grown by `range` on all sides, `None` if `range` is negative.
    pub fn buffer(&self, range: T) -> Option<Self> {
        if range < T::zero() {
            return None;
        }

        Some(Bbox::new(
            self.x - range,
            self.y - range,
            self.width + T::two() * range,
            self.height + T::two() * range,
        ))
    }

    /// Box scaled by `factor` around its center point, `None` if `factor` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector_geometry::core::math::*;
    /// let bbox = Bbox::new(0.0, 0.0, 10.0, 4.0);
    /// assert_eq!(bbox.scale(2.0), Some(Bbox::new(-5.0, -2.0, 20.0, 8.0)));
    /// assert_eq!(bbox.scale(0.0), None);
    /// ```
    pub fn scale(&self, factor: T) -> Option<Self> {
        if factor <= T::zero() {
            return None;
        }

        let center = self.center_point();
        let width = self.width * factor;
        let height = self.height * factor;
        Some(Bbox::new(
            center.x - width / T::two(),
            center.y - height / T::two(),
            width,
            height,
        ))
    }

    /// Box moved by `dx`, `dy`, extents are unchanged.
    #[inline]
    pub fn translate(&self, dx: T, dy: T) -> Self {
        Bbox::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Convert to the min/max representation used by `static_aabb2d_index`.
    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(self.x, self.y, self.max_x(), self.max_y())
    }
}

impl<T> From<AABB<T>> for Bbox<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: AABB<T>) -> Self {
        Bbox::new(
            aabb.min_x,
            aabb.min_y,
            aabb.max_x - aabb.min_x,
            aabb.max_y - aabb.min_y,
        )
    }
}
