use crate::ray::Ray;
use crate::scene::{ Scene, Sphere };

/// The nearest object hit by a ray, and the parametric distance to it.
#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    pub sphere: &'a Sphere,
    pub t: f64,
}

/// Finds where a ray pierces a sphere.
///
/// Points on the sphere satisfy `⟨P − C, P − C⟩ = r²`; substituting
/// `P = O + t·D` gives a quadratic in `t` with
/// `a = ⟨D,D⟩`, `b = 2⟨CO,D⟩`, `c = ⟨CO,CO⟩ − r²` where `CO = O − C`.
///
/// Returns both roots, the `+` branch of the quadratic formula first. A
/// negative discriminant returns `(∞, ∞)` so that callers can filter roots
/// with plain numeric comparisons instead of branching on validity.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> (f64, f64) {
    let r = sphere.radius;
    let co = ray.origin - sphere.position;

    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * co.dot(&ray.direction);
    let c = co.dot(&co) - r * r;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f64::INFINITY, f64::INFINITY);
    }

    let t1 = (-b + discriminant.sqrt()) / (2.0 * a);
    let t2 = (-b - discriminant.sqrt()) / (2.0 * a);
    (t1, t2)
}

/// Finds the nearest intersection of a ray with any scene object inside the
/// parametric window `[t_min, t_max]`.
///
/// The scan is sequential and the comparison strict, so when two roots are
/// numerically equal the earliest object in `scene.objects` wins. That
/// tie-break is part of the renderer's determinism guarantee: it depends on
/// object order only, never on thread scheduling.
pub fn closest_intersection<'a>(ray: &Ray, t_min: f64, t_max: f64,
    scene: &'a Scene) -> Option<Hit<'a>> {

    let mut closest_t = f64::INFINITY;
    let mut closest_sphere = None;

    for sphere in scene.objects.iter() {
        let (t1, t2) = intersect_ray_sphere(ray, sphere);
        if t1 >= t_min && t1 <= t_max && t1 < closest_t {
            closest_t = t1;
            closest_sphere = Some(sphere);
        }
        if t2 >= t_min && t2 <= t_max && t2 < closest_t {
            closest_t = t2;
            closest_sphere = Some(sphere);
        }
    }

    closest_sphere.map(|sphere| Hit { sphere, t: closest_t })
}

/* Tests */

#[cfg(test)]
fn plain_sphere(x: f64, y: f64, z: f64, radius: f64) -> Sphere {
    use crate::color::Color;
    use crate::space::Point3;

    Sphere {
        color: Color::white(),
        position: Point3::new(x, y, z),
        radius,
        specular: -1.0,
        reflective: 0.0,
    }
}

#[test]
fn two_roots_straight_ahead() {
    use crate::space::{ Point3, Vec3 };

    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
    let s = plain_sphere(0.0, 0.0, 5.0, 1.0);

    let (t1, t2) = intersect_ray_sphere(&r, &s);

    // The midpoint of the roots is the projection of the center onto the
    // ray; their difference is the chord length through the center.
    assert_eq!(t1, 6.0);
    assert_eq!(t2, 4.0);
    assert_eq!((t1 + t2) / 2.0, 5.0);
    assert_eq!(t1 - t2, 2.0);
}

#[test]
fn miss_returns_infinity() {
    use crate::space::{ Point3, Vec3 };

    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0));
    let s = plain_sphere(0.0, 0.0, 5.0, 1.0);

    let (t1, t2) = intersect_ray_sphere(&r, &s);

    assert_eq!(t1, f64::INFINITY);
    assert_eq!(t2, f64::INFINITY);
}

#[test]
fn tangent_ray_repeats_root() {
    use crate::space::{ Point3, Vec3 };

    let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    let s = plain_sphere(0.0, 0.0, 5.0, 1.0);

    let (t1, t2) = intersect_ray_sphere(&r, &s);

    assert_eq!(t1, 5.0);
    assert_eq!(t2, 5.0);
}

#[test]
fn closest_picks_nearest_valid_root() {
    use crate::space::{ Point3, Vec3 };

    let scene = Scene {
        lights: vec![],
        objects: vec![
            plain_sphere(0.0, 0.0, 10.0, 1.0),
            plain_sphere(0.0, 0.0, 5.0, 1.0),
        ],
    };
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    let hit = closest_intersection(&r, 0.001, f64::INFINITY, &scene).unwrap();

    assert_eq!(hit.t, 4.0);
    assert!(std::ptr::eq(hit.sphere, &scene.objects[1]));
}

#[test]
fn window_excludes_roots() {
    use crate::space::{ Point3, Vec3 };

    let scene = Scene {
        lights: vec![],
        objects: vec![plain_sphere(0.0, 0.0, 5.0, 1.0)],
    };
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    // Roots are at t = 4 and t = 6; a window past them sees nothing.
    assert!(closest_intersection(&r, 7.0, f64::INFINITY, &scene).is_none());

    // A window that reaches only the far root reports it.
    let hit = closest_intersection(&r, 5.0, f64::INFINITY, &scene).unwrap();
    assert_eq!(hit.t, 6.0);
}

#[test]
fn equal_roots_break_ties_by_scan_order() {
    use crate::space::{ Point3, Vec3 };

    // Two identical spheres produce identical roots; the first one scanned
    // must win.
    let scene = Scene {
        lights: vec![],
        objects: vec![
            plain_sphere(0.0, 0.0, 5.0, 1.0),
            plain_sphere(0.0, 0.0, 5.0, 1.0),
        ],
    };
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    let hit = closest_intersection(&r, 0.001, f64::INFINITY, &scene).unwrap();

    assert!(std::ptr::eq(hit.sphere, &scene.objects[0]));
}

#[test]
fn empty_scene_has_no_hit() {
    use crate::space::{ Point3, Vec3 };

    let scene = Scene::empty();
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    assert!(closest_intersection(&r, 0.001, f64::INFINITY, &scene).is_none());
}
