use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Float type usable as a coordinate component. Implemented for `f32` and `f64`, every geometry
/// type defaults to `f64`.
///
/// Requires [IndexableNum] so segment boxes can go into a `StaticAABB2DIndex`.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + Default + std::fmt::Debug + IndexableNum + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Distance below which a coordinate touches a segment, see
    /// [DEFAULT_TOUCH_EPS](crate::geometry::DEFAULT_TOUCH_EPS).
    #[inline]
    fn touch_epsilon() -> Self {
        Self::from(crate::geometry::DEFAULT_TOUCH_EPS).unwrap()
    }
}

impl<T> Real for T where
    T: num_traits::real::Real + FuzzyOrd + Default + std::fmt::Debug + IndexableNum + 'static
{
}
