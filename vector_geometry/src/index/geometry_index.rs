use super::GeometryIndexNotFoundError;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a step of a [GeometryIndex] points at.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryIndexType {
    /// A single coordinate of a point, line string or ring.
    Vertex,
    /// A pair of consecutive coordinates of a line string or ring.
    Edge,
    /// A polygon ring (exterior ring at 0, interior rings after it) or a multi geometry member.
    Geometry,
}

impl GeometryIndexType {
    /// Name used in the text form of an index.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryIndexType::Vertex => "vertex",
            GeometryIndexType::Edge => "edge",
            GeometryIndexType::Geometry => "geometry",
        }
    }
}

impl fmt::Display for GeometryIndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address of a vertex, edge or sub-geometry inside a geometry.
///
/// An index is a non-empty path of `(type, value)` steps. Every step but the last is a
/// [GeometryIndexType::Geometry] step descending into a polygon ring or multi geometry member, the
/// last step (the terminal) selects the target. Values are signed so that unchecked arithmetic on
/// them (see [GeometryIndex::next_vertex]) can go out of range, such indexes fail to resolve.
///
/// The text form joins the steps with `.`:
///
/// ```
/// # use vector_geometry::index::*;
/// let index: GeometryIndex = "geometry1.vertex3".parse().unwrap();
/// assert_eq!(index.steps(), &[(GeometryIndexType::Geometry, 1), (GeometryIndexType::Vertex, 3)]);
/// assert_eq!(index.to_string(), "geometry1.vertex3");
/// assert!("geometry1.edge".parse::<GeometryIndex>().is_err());
/// ```
///
/// With the `serde` feature an index serializes as its list of steps and deserializing checks the
/// same shape rules as parsing.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "Vec<(GeometryIndexType, i32)>",
        into = "Vec<(GeometryIndexType, i32)>"
    )
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeometryIndex {
    steps: Vec<(GeometryIndexType, i32)>,
}

impl GeometryIndex {
    /// Single step index.
    #[inline]
    pub fn new(index_type: GeometryIndexType, value: i32) -> Self {
        GeometryIndex {
            steps: vec![(index_type, value)],
        }
    }

    /// Index with one step per value: geometry steps for all values but the last, which gets
    /// `index_type`. Returns `None` if `values` is empty.
    pub fn from_values(index_type: GeometryIndexType, values: &[i32]) -> Option<Self> {
        let (&last, parents) = values.split_last()?;
        let mut steps = Vec::with_capacity(values.len());
        steps.extend(parents.iter().map(|&v| (GeometryIndexType::Geometry, v)));
        steps.push((index_type, last));
        Some(GeometryIndex { steps })
    }

    #[inline]
    pub fn steps(&self) -> &[(GeometryIndexType, i32)] {
        &self.steps
    }

    /// Number of steps.
    #[inline]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// Type of the terminal step.
    #[inline]
    pub fn index_type(&self) -> GeometryIndexType {
        self.terminal().0
    }

    /// Value of the terminal step.
    #[inline]
    pub fn value(&self) -> i32 {
        self.terminal().1
    }

    #[inline]
    fn terminal(&self) -> (GeometryIndexType, i32) {
        // steps are never empty
        self.steps[self.steps.len() - 1]
    }

    /// The leading geometry steps (all but the terminal).
    #[inline]
    pub(crate) fn parent_steps(&self) -> &[(GeometryIndexType, i32)] {
        &self.steps[..self.steps.len() - 1]
    }

    /// Index without the terminal step, `None` for a single step index.
    pub fn parent(&self) -> Option<GeometryIndex> {
        if self.steps.len() < 2 {
            return None;
        }

        Some(GeometryIndex {
            steps: self.parent_steps().to_vec(),
        })
    }

    /// Index addressing a target inside the one addressed by `self`, `None` if the terminal of
    /// `self` is not a geometry step or `values` is empty.
    pub fn with_children(&self, index_type: GeometryIndexType, values: &[i32]) -> Option<Self> {
        if self.index_type() != GeometryIndexType::Geometry {
            return None;
        }

        let child = GeometryIndex::from_values(index_type, values)?;
        let mut steps = self.steps.clone();
        steps.extend(child.steps);
        Some(GeometryIndex { steps })
    }

    /// Same index with its terminal step replaced.
    pub fn with_terminal(&self, index_type: GeometryIndexType, value: i32) -> Self {
        let mut steps = self.steps.clone();
        let last = steps.len() - 1;
        steps[last] = (index_type, value);
        GeometryIndex { steps }
    }

    /// Returns `true` if `self` is a strict prefix of `other`.
    pub fn is_parent_of(&self, other: &GeometryIndex) -> bool {
        other.steps.len() > self.steps.len() && other.steps.starts_with(&self.steps)
    }

    /// Index with the terminal value incremented, not checked against any geometry.
    #[inline]
    pub fn next_vertex(&self) -> Self {
        let (index_type, value) = self.terminal();
        self.with_terminal(index_type, value.wrapping_add(1))
    }

    /// Index with the terminal value decremented, not checked against any geometry.
    #[inline]
    pub fn previous_vertex(&self) -> Self {
        let (index_type, value) = self.terminal();
        self.with_terminal(index_type, value.wrapping_sub(1))
    }
}

impl fmt::Display for GeometryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (index_type, value)) in self.steps.iter().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            write!(f, "{}{}", index_type, value)?;
        }
        Ok(())
    }
}

impl FromStr for GeometryIndex {
    type Err = GeometryIndexNotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || GeometryIndexNotFoundError::Unparseable {
            input: s.to_string(),
        };

        let parse_step = |part: &str| {
            [
                GeometryIndexType::Geometry,
                GeometryIndexType::Vertex,
                GeometryIndexType::Edge,
            ]
            .into_iter()
            .find_map(|t| {
                let value = part.strip_prefix(t.name())?.parse::<i32>().ok()?;
                Some((t, value))
            })
        };

        let steps = s
            .split('.')
            .map(parse_step)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(unparseable)?;

        GeometryIndex::try_from(steps).map_err(|_| unparseable())
    }
}

impl TryFrom<Vec<(GeometryIndexType, i32)>> for GeometryIndex {
    type Error = GeometryIndexNotFoundError;

    /// Fails unless `steps` is non-empty with only geometry steps before the terminal.
    fn try_from(steps: Vec<(GeometryIndexType, i32)>) -> Result<Self, Self::Error> {
        let well_formed = steps.split_last().is_some_and(|(_, parents)| {
            parents
                .iter()
                .all(|(t, _)| *t == GeometryIndexType::Geometry)
        });
        if !well_formed {
            return Err(GeometryIndexNotFoundError::Unparseable {
                input: format!("{steps:?}"),
            });
        }

        Ok(GeometryIndex { steps })
    }
}

impl From<GeometryIndex> for Vec<(GeometryIndexType, i32)> {
    fn from(index: GeometryIndex) -> Self {
        index.steps
    }
}
