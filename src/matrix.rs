use std::ops::Mul;

use crate::feq;
use crate::space::Vec3;

/// A 3-by-3 matrix.
///
/// Only used for camera orientation, so the constructors are limited to
/// rotations. Matrices compose with `*` and apply to a `Vec3` with `*`.
#[derive(Copy, Clone, Debug)]
pub struct Mat3 {
    pub values: [[f64; 3]; 3],
}

impl PartialEq for Mat3 {
    fn eq(&self, other: &Mat3) -> bool {
        for r in 0..3 {
            for c in 0..3 {
                if !feq(self.values[r][c], other.values[r][c]) {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for Mat3 {
    fn default() -> Mat3 {
        Mat3::identity()
    }
}

impl Mat3 {
    pub fn identity() -> Mat3 {
        Mat3 {
            values: [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// A rotation about the x axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Mat3 {
        let (sin, cos) = angle.sin_cos();

        Mat3 {
            values: [
                [1.0, 0.0, 0.0],
                [0.0, cos, -sin],
                [0.0, sin, cos],
            ],
        }
    }

    /// A rotation about the y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Mat3 {
        let (sin, cos) = angle.sin_cos();

        Mat3 {
            values: [
                [cos, 0.0, sin],
                [0.0, 1.0, 0.0],
                [-sin, 0.0, cos],
            ],
        }
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, other: Mat3) -> Mat3 {
        let mut values = [[0.0; 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                for k in 0..3 {
                    values[r][c] += self.values[r][k] * other.values[k][c];
                }
            }
        }

        Mat3 { values }
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.values;

        Vec3 {
            x: m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            y: m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            z: m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        }
    }
}

/* Tests */

#[test]
fn identity_preserves_vector() {
    let v = Vec3::new(1.0, 2.0, 3.0);

    assert_eq!(Mat3::identity() * v, v);
}

#[test]
fn rotate_x_quarter_turn() {
    let m = Mat3::rotation_x(std::f64::consts::FRAC_PI_2);

    assert_eq!(m * Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn rotate_y_quarter_turn() {
    let m = Mat3::rotation_y(std::f64::consts::FRAC_PI_2);

    assert_eq!(m * Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn compose_rotations() {
    let yaw = Mat3::rotation_y(std::f64::consts::FRAC_PI_2);
    let pitch = Mat3::rotation_x(std::f64::consts::FRAC_PI_2);
    let v = Vec3::new(0.0, 0.0, 1.0);

    // Pitch first: z goes to -y; then yaw leaves y alone.
    assert_eq!((yaw * pitch) * v, yaw * (pitch * v));
    assert_eq!((yaw * pitch) * v, Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn opposite_rotations_cancel() {
    let m = Mat3::rotation_y(0.7) * Mat3::rotation_y(-0.7);

    assert_eq!(m, Mat3::identity());
}
