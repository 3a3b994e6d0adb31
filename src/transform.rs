//! Homogeneous 4x4 transforms.
//!
//! Matrices follow the column-vector convention: a point `p` maps to `M · p`,
//! translation lives in the last column and projection in the last row.
//! Transforms are combined with [`Transform::compose`], which reads left to
//! right in application order: `a.compose(b)` applies `a` first, then `b`.

const SIZE: usize = 4;

/// A 4x4 transform in homogeneous coordinates.
///
/// Transforms are immutable values; every constructor starts from the
/// identity and composition always produces a new transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: [[f64; SIZE]; SIZE],
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create the identity transform.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `(x, y, z)`.
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[0][3] = x;
        t.m[1][3] = y;
        t.m[2][3] = z;
        t
    }

    /// Per-axis scale.
    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[0][0] = x;
        t.m[1][1] = y;
        t.m[2][2] = z;
        t
    }

    /// Rotation about the X axis by `degrees`.
    pub fn rotate_x(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut t = Self::IDENTITY;
        t.m[1][1] = cos;
        t.m[1][2] = sin;
        t.m[2][1] = -sin;
        t.m[2][2] = cos;
        t
    }

    /// Rotation about the Y axis by `degrees`.
    pub fn rotate_y(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut t = Self::IDENTITY;
        t.m[0][0] = cos;
        t.m[0][2] = -sin;
        t.m[2][0] = sin;
        t.m[2][2] = cos;
        t
    }

    /// Rotation about the Z axis by `degrees`.
    pub fn rotate_z(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let mut t = Self::IDENTITY;
        t.m[0][0] = cos;
        t.m[0][1] = sin;
        t.m[1][0] = -sin;
        t.m[1][1] = cos;
        t
    }

    /// Perspective projection with the given strength.
    ///
    /// The resulting homogeneous weight is `w = 1 + strength * z`, so small
    /// strengths give a gentle foreshortening that never reaches `w = 0` for
    /// geometry scaled to screen size.
    pub fn perspective(strength: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[3][2] = strength;
        t
    }

    /// Compose two transforms: the result applies `self` first, then `next`.
    pub fn compose(&self, next: &Transform) -> Transform {
        let mut out = [[0.0; SIZE]; SIZE];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..SIZE).map(|k| next.m[row][k] * self.m[k][col]).sum();
            }
        }
        Transform { m: out }
    }

    /// Matrix entry at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below 4.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[row][col]
    }

    /// Multiply a homogeneous 4-vector by this matrix.
    pub(crate) fn apply(&self, v: [f64; SIZE]) -> [f64; SIZE] {
        let mut out = [0.0; SIZE];
        for (row, value) in out.iter_mut().enumerate() {
            *value = (0..SIZE).map(|k| self.m[row][k] * v[k]).sum();
        }
        out
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point3;

    const EPS: f64 = 1e-9;

    fn samples() -> [Point3; 4] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, -2.0, 3.5),
            Point3::new(-7.25, 4.0, 0.5),
            Point3::new(100.0, 250.0, -40.0),
        ]
    }

    fn assert_close(a: Point3, b: Point3) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn identity_is_neutral_in_both_orders() {
        let m = Transform::translate(3.0, -1.0, 2.0)
            .compose(&Transform::rotate_y(33.0))
            .compose(&Transform::scale(2.0, 0.5, 4.0))
            .compose(&Transform::perspective(0.0015));
        let left = Transform::identity().compose(&m);
        let right = m.compose(&Transform::identity());
        for p in samples() {
            let expected = p.transform(&m).unwrap();
            assert_close(p.transform(&left).unwrap(), expected);
            assert_close(p.transform(&right).unwrap(), expected);
        }
    }

    #[test]
    fn compose_applies_left_operand_first() {
        let shift = Transform::translate(10.0, 0.0, 0.0);
        let double = Transform::scale(2.0, 2.0, 2.0);
        let p = Point3::new(1.0, 1.0, 1.0);

        let shift_then_double = p.transform(&shift.compose(&double)).unwrap();
        assert_close(shift_then_double, Point3::new(22.0, 2.0, 2.0));

        let double_then_shift = p.transform(&double.compose(&shift)).unwrap();
        assert_close(double_then_shift, Point3::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn compose_does_not_mutate_operands() {
        let a = Transform::rotate_z(15.0);
        let b = Transform::translate(1.0, 2.0, 3.0);
        let a_before = a;
        let b_before = b;
        let _ = a.compose(&b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn rotations_preserve_distance() {
        let rotations = [
            Transform::rotate_x(37.0),
            Transform::rotate_y(-122.0),
            Transform::rotate_z(359.0),
            Transform::rotate_x(90.0).compose(&Transform::rotate_y(45.0)),
        ];
        let points = samples();
        for rotation in rotations {
            for a in points {
                for b in points {
                    let before = a.distance(b);
                    let after = a
                        .transform(&rotation)
                        .unwrap()
                        .distance(b.transform(&rotation).unwrap());
                    assert!((before - after).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn scale_and_translate_change_distance_predictably() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert!((a.distance(b) - 5.0).abs() < EPS);

        let uniform = Transform::scale(3.0, 3.0, 3.0);
        let scaled = a
            .transform(&uniform)
            .unwrap()
            .distance(b.transform(&uniform).unwrap());
        assert!((scaled - 15.0).abs() < EPS);

        let stretch_x = Transform::scale(2.0, 1.0, 1.0);
        let stretched = a
            .transform(&stretch_x)
            .unwrap()
            .distance(b.transform(&stretch_x).unwrap());
        assert!((stretched - (36.0_f64 + 16.0).sqrt()).abs() < EPS);

        let shift = Transform::translate(-5.0, 8.0, 13.0);
        let moved = a.transform(&shift).unwrap();
        assert_close(moved, Point3::new(-4.0, 10.0, 16.0));
        assert!((a.distance(moved) - (25.0_f64 + 64.0 + 169.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn rotate_x_inverse_restores_points() {
        for theta in [0.0, 37.0, 90.0, 180.0, 359.0] {
            let round = Transform::rotate_x(theta).compose(&Transform::rotate_x(-theta));
            for p in samples() {
                assert_close(p.transform(&round).unwrap(), p);
            }
        }
    }

    #[test]
    fn rotate_x_quarter_turn_moves_y_into_negative_z() {
        let p = Point3::new(0.0, 1.0, 0.0).transform(&Transform::rotate_x(90.0));
        assert_close(p.unwrap(), Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn perspective_divides_by_weight() {
        let projection = Transform::perspective(0.5);
        let p = Point3::new(4.0, 2.0, 2.0).transform(&projection).unwrap();
        assert_close(p, Point3::new(2.0, 1.0, 1.0));
        assert_eq!(projection.get(3, 2), 0.5);
    }
}
