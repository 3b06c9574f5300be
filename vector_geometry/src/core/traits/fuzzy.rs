//! Tolerant comparisons for the float types coordinates are stored as.

/// Equality within a tolerance.
///
/// `Coordinate` equality through `==` is exact (ring closing and point intersects depend on it),
/// this trait is for the places where computed values are compared: parallel line detection,
/// centroids and measures in tests.
///
/// # Examples
///
/// ```
/// # use vector_geometry::core::traits::*;
/// let area = 0.1 + 0.2;
/// assert_ne!(area, 0.3);
/// assert!(area.fuzzy_eq(0.3));
/// assert!(1e-9f64.fuzzy_eq_zero());
/// assert!(!1.0f64.fuzzy_eq_eps(1.5, 0.25));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Tolerance used by the non `_eps` methods.
    fn fuzzy_epsilon() -> Self;

    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

/// Ordering within a tolerance: values closer than the epsilon count as both greater and less.
///
/// # Examples
///
/// ```
/// # use vector_geometry::core::traits::*;
/// // a projection parameter just below zero still counts as on the segment start
/// assert!((-1e-10f64).fuzzy_gt(0.0));
/// assert!(1.0f64.fuzzy_lt(1.0));
/// assert!(0.999_999_999f64.fuzzy_in_range(1.0, 2.0));
/// assert!(!2.5f64.fuzzy_in_range(1.0, 2.0));
/// ```
pub trait FuzzyOrd: FuzzyEq {
    /// `self + fuzzy_epsilon > other`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_float {
    ($($ty:ty => $eps:expr),+ $(,)?) => {
        $(
            impl FuzzyEq for $ty {
                #[inline]
                fn fuzzy_epsilon() -> Self {
                    $eps
                }

                #[inline]
                fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    (self - other).abs() < fuzzy_epsilon
                }

                #[inline]
                fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                    self.abs() < fuzzy_epsilon
                }
            }

            impl FuzzyOrd for $ty {
                #[inline]
                fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    self + fuzzy_epsilon > other
                }

                #[inline]
                fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                    *self < other + fuzzy_epsilon
                }
            }
        )+
    };
}

impl_fuzzy_float!(f32 => 1.0e-6, f64 => 1.0e-8);
