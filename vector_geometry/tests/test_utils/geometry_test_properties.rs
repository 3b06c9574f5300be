use vector_geometry::{
    core::traits::FuzzyEq,
    prelude::{Bbox, Coordinate, GeometryOps},
};

/// Fuzzy compare bounding boxes.
pub fn bbox_fuzzy_eq_eps(a: &Bbox, b: &Bbox, eps: f64) -> bool {
    a.x.fuzzy_eq_eps(b.x, eps)
        && a.y.fuzzy_eq_eps(b.y, eps)
        && a.width.fuzzy_eq_eps(b.width, eps)
        && a.height.fuzzy_eq_eps(b.height, eps)
}

/// Fuzzy compare coordinate lists.
pub fn coordinates_fuzzy_eq_eps(a: &[Coordinate], b: &[Coordinate], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(c1, c2)| c1.fuzzy_eq_eps(*c2, eps))
}

/// Holds a set of properties of a geometry for comparison in tests.
#[derive(Debug, Copy, Clone)]
pub struct GeometryProperties {
    pub num_points: usize,
    pub area: f64,
    pub length: f64,
    pub bounds: Option<Bbox>,
}

impl GeometryProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-6;

    pub fn new(num_points: usize, area: f64, length: f64, bounds: Option<Bbox>) -> Self {
        Self {
            num_points,
            area,
            length,
            bounds,
        }
    }

    pub fn from_geometry<G>(geometry: &G) -> Self
    where
        G: GeometryOps<Num = f64> + ?Sized,
    {
        Self::new(
            geometry.num_points(),
            geometry.area(),
            geometry.length(),
            geometry.bounds(),
        )
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        let bounds_eq = match (&self.bounds, &other.bounds) {
            (Some(a), Some(b)) => bbox_fuzzy_eq_eps(a, b, eps),
            (None, None) => true,
            _ => false,
        };

        self.num_points == other.num_points
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.length.fuzzy_eq_eps(other.length, eps)
            && bounds_eq
    }
}

pub fn assert_properties_eq<G>(geometry: &G, expected: &GeometryProperties)
where
    G: GeometryOps<Num = f64> + ?Sized,
{
    let actual = GeometryProperties::from_geometry(geometry);
    assert!(
        actual.fuzzy_eq_eps(expected, GeometryProperties::PROP_CMP_EPS),
        "property mismatch\n  actual: {actual:?}\nexpected: {expected:?}"
    );
}
