use std::ops::{ Add, Sub, Neg, Mul };

use serde::{ Serialize, Deserialize };

use crate::feq;

/// A free vector in 3D space.
///
/// Vectors are closed under addition and scalar multiplication, and carry the
/// usual geometric operations: dot product, magnitude, normalization and
/// reflection. Positions are *not* vectors; see `Point3`.
#[derive(Copy, Clone, Debug, Default, PartialOrd, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Vec3) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z)
    }
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x
            + self.y * other.y
            + self.z * other.z
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalize(&self) -> Vec3 {
        let mag = self.magnitude();

        Vec3 {
            x: self.x * (1.0 / mag),
            y: self.y * (1.0 / mag),
            z: self.z * (1.0 / mag),
        }
    }

    /// Reflects a vector about a normal.
    ///
    /// Both this vector and the result point *away* from the surface, which
    /// is the orientation the lighting equations work with:
    /// `2·n·⟨n,v⟩ − v`.
    pub fn reflect(&self, normal: &Vec3) -> Vec3 {
        *normal * 2.0 * self.dot(normal) - *self
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

/// An affine point in 3D space.
///
/// Points support only the algebraically valid operations: point − point is a
/// `Vec3`, point ± vector is another point. There is deliberately no
/// point + point, and no magnitude or normalization — a position has neither.
#[derive(Copy, Clone, Debug, Default, PartialOrd, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PartialEq for Point3 {
    fn eq(&self, other: &Point3) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z)
    }
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }

    pub fn origin() -> Point3 {
        Default::default()
    }
}

impl Sub for Point3 {
    type Output = Vec3;

    fn sub(self, other: Point3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;

    fn add(self, other: Vec3) -> Point3 {
        Point3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;

    fn sub(self, other: Vec3) -> Point3 {
        Point3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/* Tests */

#[test]
fn add_vectors() {
    let a = Vec3::new(3.0, -2.0, 5.0);
    let b = Vec3::new(-2.0, 3.0, 1.0);

    assert_eq!(a + b, Vec3::new(1.0, 1.0, 6.0));
}

#[test]
fn sub_points() {
    let p1 = Point3::new(3.0, 2.0, 1.0);
    let p2 = Point3::new(5.0, 6.0, 7.0);

    assert_eq!(p1 - p2, Vec3::new(-2.0, -4.0, -6.0));
}

#[test]
fn add_vector_to_point() {
    let p = Point3::new(3.0, 2.0, 1.0);
    let v = Vec3::new(5.0, 6.0, 7.0);

    assert_eq!(p + v, Point3::new(8.0, 8.0, 8.0));
}

#[test]
fn sub_vector_from_point() {
    let p = Point3::new(3.0, 2.0, 1.0);
    let v = Vec3::new(5.0, 6.0, 7.0);

    assert_eq!(p - v, Point3::new(-2.0, -4.0, -6.0));
}

#[test]
fn neg_vector() {
    let v = Vec3::new(1.0, -2.0, 3.0);

    assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
}

#[test]
fn mul_scalar() {
    let v = Vec3::new(1.0, -2.0, 3.0);

    assert_eq!(v * 3.5, Vec3::new(3.5, -7.0, 10.5));
    assert_eq!(3.5 * v, Vec3::new(3.5, -7.0, 10.5));
}

#[test]
fn magnitude() {
    let v = Vec3::new(1.0, 2.0, 3.0);

    assert_eq!(v.magnitude(), f64::sqrt(14.0));
}

#[test]
fn normalize() {
    let v = Vec3::new(4.0, 0.0, 0.0);
    assert_eq!(v.normalize(), Vec3::new(1.0, 0.0, 0.0));

    let v = Vec3::new(1.0, 2.0, 3.0);
    let e = Vec3::new(
        1.0 / f64::sqrt(14.0),
        2.0 / f64::sqrt(14.0),
        3.0 / f64::sqrt(14.0)
    );
    assert_eq!(v.normalize(), e);
}

#[test]
fn dot_vectors() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(2.0, 3.0, 4.0);

    assert_eq!(a.dot(&b), 20.0);
}

#[test]
fn reflect_about_normal() {
    // Both vectors point away from the surface.
    let v = Vec3::new(1.0, 1.0, 0.0);
    let n = Vec3::new(0.0, 1.0, 0.0);

    assert_eq!(v.reflect(&n), Vec3::new(-1.0, 1.0, 0.0));
}

#[test]
fn reflect_along_normal() {
    let v = Vec3::new(0.0, 2.0, 0.0);
    let n = Vec3::new(0.0, 1.0, 0.0);

    assert_eq!(v.reflect(&n), Vec3::new(0.0, 2.0, 0.0));
}
