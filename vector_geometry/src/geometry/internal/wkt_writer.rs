//! Well known text fragments. Coordinates render as `"x y"` using the float `Debug` form, which
//! round trips exactly. Ordinary magnitudes keep a fractional part (`30.0`), very large or small
//! ones use exponent notation (`1e16`).
use crate::core::{math::Coordinate, traits::Real};

pub(crate) const EMPTY: &str = "EMPTY";

#[inline]
pub(crate) fn coordinate<T>(c: &Coordinate<T>) -> String
where
    T: Real,
{
    format!("{:?} {:?}", c.x, c.y)
}

/// `"(x1 y1, x2 y2, ...)"`, or `"EMPTY"` for an empty sequence.
pub(crate) fn coordinate_seq<T>(coords: &[Coordinate<T>]) -> String
where
    T: Real,
{
    if coords.is_empty() {
        return EMPTY.to_string();
    }

    format!(
        "({})",
        coords.iter().map(coordinate).collect::<Vec<_>>().join(", ")
    )
}

/// `"(part1, part2, ...)"`, or `"EMPTY"` if there are no parts.
pub(crate) fn group<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let parts = parts.into_iter().collect::<Vec<_>>();
    if parts.is_empty() {
        return EMPTY.to_string();
    }

    format!("({})", parts.join(", "))
}

/// Prefix `body` with the geometry tag, e.g. `"POINT (1.0 2.0)"` or `"POINT EMPTY"`.
#[inline]
pub(crate) fn tagged(tag: &str, body: &str) -> String {
    format!("{tag} {body}")
}
