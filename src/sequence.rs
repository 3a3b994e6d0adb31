//! Ordered point batches with strip and segment emission.

use crate::geom::Point3;
use crate::transform::Transform;

/// An ordered batch of points.
///
/// Order is significant: [`strip`](Self::strip) connects consecutive points
/// and [`segments`](Self::segments) pairs them two at a time. Transforming a
/// sequence may leave empty slots where a point could not be projected; those
/// slots keep their position so the remaining connectivity is unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Option<Point3>>,
}

impl PointSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point.
    pub fn push(&mut self, point: Point3) {
        self.points.push(Some(point));
    }

    /// Number of slots, including skipped ones.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the sequence has no slots.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, or `None` if out of range or skipped.
    pub fn get(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied().flatten()
    }

    /// Iterate over present points in order.
    pub fn iter(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().flatten().copied()
    }

    /// Number of slots whose projection was skipped.
    pub fn skipped(&self) -> usize {
        self.points.iter().filter(|point| point.is_none()).count()
    }

    /// Replace every point with its transformed counterpart.
    pub fn transform(&mut self, transform: &Transform) {
        let next: Vec<Option<Point3>> = self
            .points
            .iter()
            .map(|point| point.and_then(|point| point.transform(transform)))
            .collect();
        self.points = next;
    }

    /// Consecutive pairs `(p[i], p[i + 1])` forming a connected polyline.
    pub fn strip(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.points
            .windows(2)
            .filter_map(|pair| Some((pair[0]?, pair[1]?)))
    }

    /// Independent pairs `(p[0], p[1]), (p[2], p[3]), ...`.
    ///
    /// A trailing unpaired point is ignored.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.points
            .chunks_exact(2)
            .filter_map(|pair| Some((pair[0]?, pair[1]?)))
    }

    pub(crate) fn map_in_place(&mut self, f: impl Fn(Point3) -> Point3) {
        for point in self.points.iter_mut().flatten() {
            *point = f(*point);
        }
    }
}

impl FromIterator<Point3> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(Some).collect(),
        }
    }
}

impl Extend<Point3> for PointSequence {
    fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        self.points.extend(iter.into_iter().map(Some));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> PointSequence {
        (0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn strip_connects_neighbours() {
        let seq = line(4);
        let pairs: Vec<_> = seq.strip().map(|(a, b)| (a.x, b.x)).collect();
        assert_eq!(pairs, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    }

    #[test]
    fn segments_are_disjoint_pairs() {
        let seq = line(5);
        let pairs: Vec<_> = seq.segments().map(|(a, b)| (a.x, b.x)).collect();
        assert_eq!(pairs, vec![(0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn short_sequences_emit_nothing() {
        assert_eq!(line(0).strip().count(), 0);
        assert_eq!(line(1).strip().count(), 0);
        assert_eq!(line(1).segments().count(), 0);
    }

    #[test]
    fn transform_replaces_contents_in_order() {
        let mut seq = line(3);
        seq.transform(&Transform::translate(10.0, 1.0, 0.0));
        let xs: Vec<_> = seq.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xs, vec![(10.0, 1.0), (11.0, 1.0), (12.0, 1.0)]);
    }

    #[test]
    fn skipped_points_break_only_their_pairs() {
        let mut seq: PointSequence = [0.0, 2.0, 0.5, 0.25]
            .into_iter()
            .map(|z| Point3::new(1.0, 1.0, z))
            .collect();
        // w = 1 - 0.5 * z reaches zero at z = 2
        seq.transform(&Transform::perspective(-0.5));
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.skipped(), 1);
        assert!(seq.get(1).is_none());
        assert_eq!(seq.strip().count(), 1);
        assert_eq!(seq.segments().count(), 1);
        assert!(seq.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn emitters_do_not_consume_the_sequence() {
        let seq = line(3);
        assert_eq!(seq.strip().count(), 2);
        assert_eq!(seq.strip().count(), 2);
        assert_eq!(seq.len(), 3);
    }
}
