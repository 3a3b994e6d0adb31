//! Named point series.

use crate::geom::{Bounds3, Point3};
use crate::sequence::PointSequence;

/// A named polyline drawn as one connected strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    points: PointSequence,
}

impl Series {
    /// Create an empty series.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: PointSequence::new(),
        }
    }

    /// Build a series from an iterator of points.
    pub fn from_points<I>(name: impl Into<String>, iter: I) -> Self
    where
        I: IntoIterator<Item = Point3>,
    {
        Self {
            name: name.into(),
            points: iter.into_iter().collect(),
        }
    }

    /// Access the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the series points.
    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    /// Append a point.
    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounds of the series, if it has any points.
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.points.iter())
    }

    pub(crate) fn points_mut(&mut self) -> &mut PointSequence {
        &mut self.points
    }
}
