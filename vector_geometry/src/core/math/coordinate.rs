use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D position.
///
/// Equality through `==` is exact numeric equality of both components, use
/// [Coordinate::fuzzy_eq] for a tolerant comparison. Coordinates are `Copy` so a copy is always an
/// independent value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Coordinate<T>
where
    T: Real,
{
    /// Create a new coordinate with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Coordinate { x, y }
    }

    /// Create a zero coordinate (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Coordinate::new(T::zero(), T::zero())
    }

    /// Euclidean distance to `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vector_geometry::core::math::*;
    /// let c1 = Coordinate::new(0.0, 0.0);
    /// let c2 = Coordinate::new(3.0, 4.0);
    /// assert_eq!(c1.distance(c2), 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (other - self).length()
    }

    /// Position halfway between `self` and `other`.
    #[inline]
    pub fn midpoint(&self, other: Self) -> Self {
        Coordinate::new(
            (self.x + other.x) / T::two(),
            (self.y + other.y) / T::two(),
        )
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> T {
        (other - self).length_squared()
    }

    /// Uniformly scale the coordinate (as a vector) by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        coord(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the coordinate treated as a vector from the origin.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the coordinate treated as a vector from the origin.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Fuzzy equal comparison with another coordinate using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another coordinate using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Returns `true` if either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        // NaN is the only value unordered with itself
        self.x.partial_cmp(&self.x).is_none() || self.y.partial_cmp(&self.y).is_none()
    }
}

#[inline(always)]
pub fn coord<T>(x: T, y: T) -> Coordinate<T>
where
    T: Real,
{
    Coordinate::new(x, y)
}

impl<T> From<(T, T)> for Coordinate<T>
where
    T: Real,
{
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Coordinate::new(x, y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Coordinate<T>> for Coordinate<T> {
            type Output = Coordinate<T>;
            fn $op_func(self, rhs: Coordinate<T>) -> Self::Output {
                Coordinate::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Coordinate<T>> for Coordinate<T> {
            type Output = Coordinate<T>;
            fn $op_func(self, rhs: &Coordinate<T>) -> Self::Output {
                Coordinate::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Coordinate<T>> for &'a Coordinate<T> {
            type Output = Coordinate<T>;
            fn $op_func(self, rhs: &'b Coordinate<T>) -> Self::Output {
                Coordinate::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Coordinate<T>> for &Coordinate<T> {
            type Output = Coordinate<T>;
            fn $op_func(self, rhs: Coordinate<T>) -> Self::Output {
                Coordinate::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Neg for Coordinate<T> {
    type Output = Coordinate<T>;
    fn neg(self) -> Self::Output {
        Coordinate::new(-self.x, -self.y)
    }
}
