use crate::space::{ Point3, Vec3 };

/// A ray with an origin and a (not necessarily unit) direction.
///
/// Positions along the ray are parameterized by `t`: `origin + direction·t`.
/// Callers must supply a non-degenerate direction; a zero-length direction
/// makes the intersection quadratic divide by zero and yields NaN/infinite
/// parameters rather than a panic.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn position(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

/* Tests */

#[test]
fn ray_position() {
    let r = Ray::new(
                Point3::new(2.0, 3.0, 4.0),
                Vec3::new(1.0, 0.0, 0.0)
            );

    assert_eq!(r.position(0.0), Point3::new(2.0, 3.0, 4.0));
    assert_eq!(r.position(1.0), Point3::new(3.0, 3.0, 4.0));
    assert_eq!(r.position(-1.0), Point3::new(1.0, 3.0, 4.0));
    assert_eq!(r.position(2.5), Point3::new(4.5, 3.0, 4.0));
}

#[test]
fn position_scales_with_direction_length() {
    let r = Ray::new(
                Point3::origin(),
                Vec3::new(0.0, 0.0, 2.0)
            );

    assert_eq!(r.position(1.5), Point3::new(0.0, 0.0, 3.0));
}
