/// Asserts two values are equal using [FuzzyEq](crate::core::traits::FuzzyEq), with an optional
/// epsilon. Works for floats and for coordinates.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            left.fuzzy_eq(*right),
            "assertion failed: `left.fuzzy_eq(right)`\n  left: `{:?}`\n right: `{:?}`",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right, eps) = (&$left, &$right, &$eps);
        assert!(
            left.fuzzy_eq_eps(*right, *eps),
            "assertion failed: `left.fuzzy_eq_eps(right, eps)`\n  left: `{:?}`\n right: `{:?}`\n \
             eps: `{:?}`",
            left,
            right,
            eps
        );
    }};
}

/// Construct a `Vec` of coordinates from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use vector_geometry::coords;
/// # use vector_geometry::core::math::*;
/// let coords = coords![(0.0, 1.0), (2.0, 0.0)];
/// assert_eq!(coords.len(), 2);
/// assert_eq!(coords[0], coord(0.0, 1.0));
/// assert_eq!(coords[1], coord(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! coords {
    ($( $x:expr ),* $(,)?) => {
        ::std::vec![$($crate::core::math::Coordinate::new($x.0, $x.1)),*]
    };
}
