//! Geometric primitives used by the chart pipeline.
//!
//! [`Point3`] and [`Bounds3`] live in model space. Screen-space types carry
//! device pixel coordinates and are what render commands are expressed in.

use std::ops::Sub;

use crate::transform::Transform;

/// Homogeneous weights at or below this are behind the projection centre.
pub(crate) const W_EPSILON: f64 = 1e-9;

/// A point in 3D model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Transform the point, including the perspective divide.
    ///
    /// Returns `None` when the homogeneous weight is not positive (the point
    /// sits on or behind the projection centre) or the result is not finite;
    /// callers skip such points when rendering.
    pub fn transform(&self, transform: &Transform) -> Option<Point3> {
        let [x, y, z, w] = transform.apply([self.x, self.y, self.z, 1.0]);
        if !w.is_finite() || w <= W_EPSILON {
            return None;
        }
        let out = Point3::new(x / w, y / w, z / w);
        out.is_finite().then_some(out)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Check that all components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Drop the depth component and move to screen space.
    pub fn to_screen(&self) -> ScreenPoint {
        ScreenPoint::new(self.x as f32, self.y as f32)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, other: Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// Axis-aligned bounding box in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Bounds3 {
    /// Bounds of a single point.
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Compute bounds over an iterator of points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.expand_to_include(point);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`.
    pub fn expand_to_include(&mut self, point: Point3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Extent along each axis.
    pub fn size(&self) -> Point3 {
        self.max - self.min
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset by another point.
    pub fn offset(&self, by: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x + by.x, self.y + by.y)
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self::new(
            origin,
            ScreenPoint::new(origin.x + width, origin.y + height),
        )
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Translate the rectangle.
    pub fn offset(&self, by: ScreenPoint) -> ScreenRect {
        ScreenRect::new(self.min.offset(by), self.max.offset(by))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affine_transform_skips_divide() {
        let t = Transform::translate(1.0, 2.0, 3.0);
        let p = Point3::new(1.0, 1.0, 1.0).transform(&t).unwrap();
        assert_eq!(p, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn zero_weight_is_skipped() {
        // w = 1 + (-1) * 1 = 0
        let t = Transform::perspective(-1.0);
        assert!(Point3::new(5.0, 5.0, 1.0).transform(&t).is_none());
        assert!(Point3::new(5.0, 5.0, 0.5).transform(&t).is_some());
    }

    #[test]
    fn points_behind_projection_centre_are_skipped() {
        // w = 1 - 0.5 * z is negative past z = 2; dividing would mirror the point
        let t = Transform::perspective(-0.5);
        assert!(Point3::new(5.0, 5.0, 3.0).transform(&t).is_none());
        assert!(Point3::new(5.0, 5.0, 40.0).transform(&t).is_none());
        let p = Point3::new(5.0, 5.0, 1.0).transform(&t).unwrap();
        assert_eq!(p, Point3::new(10.0, 10.0, 2.0));
    }

    #[test]
    fn non_finite_results_are_skipped() {
        let t = Transform::scale(f64::INFINITY, 1.0, 1.0);
        assert!(Point3::new(1.0, 0.0, 0.0).transform(&t).is_none());
    }

    #[test]
    fn bounds_track_min_and_max() {
        let bounds = Bounds3::from_points([
            Point3::new(1.0, -2.0, 5.0),
            Point3::new(-3.0, 4.0, 5.0),
            Point3::new(0.0, 0.0, 7.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point3::new(-3.0, -2.0, 5.0));
        assert_eq!(bounds.max, Point3::new(1.0, 4.0, 7.0));
        assert_eq!(bounds.size(), Point3::new(4.0, 6.0, 2.0));
        assert!(Bounds3::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn screen_rect_validity() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(2.0, 3.0), 10.0, 0.0);
        assert!(!rect.is_valid());
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(2.0, 3.0), 10.0, 4.0);
        assert!(rect.is_valid());
        assert_eq!(rect.max, ScreenPoint::new(12.0, 7.0));
    }
}
