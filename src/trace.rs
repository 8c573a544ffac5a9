use crate::color::Color;
use crate::consts::SHADOW_EPSILON;
use crate::intersect::closest_intersection;
use crate::light::compute_lighting;
use crate::ray::Ray;
use crate::scene::Scene;

/// Traces a ray through the scene and returns the color seen along it.
///
/// The nearest intersection inside `[t_min, t_max]` is shaded with the local
/// lighting model. If the surface is reflective and the depth budget allows,
/// the incoming ray is mirrored about the surface normal and traced again
/// from the hit point; the reflected color is blended in proportionally to
/// the surface's reflectivity. The integer `depth` counter is the sole
/// termination guarantee of the recursion — there is no geometric stop
/// condition.
///
/// A reflected color exactly equal to `background` is treated as "the bounce
/// saw nothing" and left out of the blend entirely, so a mirror facing empty
/// space keeps its local color instead of being tinted by the background.
/// The comparison is deliberately exact, not tolerance-based.
pub fn trace_ray(ray: &Ray, t_min: f64, t_max: f64, scene: &Scene,
    depth: u32, background: Color) -> Color {

    let hit = match closest_intersection(ray, t_min, t_max, scene) {
        Some(hit) => hit,
        None => return background,
    };

    let point = ray.position(hit.t);
    let normal = (point - hit.sphere.position).normalize();
    let local_color = hit.sphere.color * compute_lighting(
        point, normal, scene, -ray.direction, hit.sphere.specular);

    if depth == 0 || hit.sphere.reflective <= 0.0 {
        return local_color;
    }

    let reflected = Ray::new(point, (-ray.direction).reflect(&normal));
    let reflected_color = trace_ray(&reflected, SHADOW_EPSILON, f64::INFINITY,
        scene, depth - 1, background);

    if reflected_color == background {
        return local_color;
    }

    local_color * (1.0 - hit.sphere.reflective)
        + reflected_color * hit.sphere.reflective
}

/* Tests */

#[cfg(test)]
use crate::scene::{ Light, Sphere };
#[cfg(test)]
use crate::space::{ Point3, Vec3 };

#[test]
fn miss_returns_background_exactly() {
    let scene = Scene {
        lights: vec![Light::Ambient { intensity: 0.2 }],
        objects: vec![Sphere {
            color: Color::red(),
            position: Point3::new(0.0, -1.0, 3.0),
            radius: 1.0,
            specular: 500.0,
            reflective: 0.2,
        }],
    };

    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0));
    let background = Color::rgb(0.1, 0.2, 0.3);

    let color = trace_ray(&r, 1.0, f64::INFINITY, &scene, 3, background);

    assert_eq!(color, background);
}

#[test]
fn ambient_lit_sphere_end_to_end() {
    // One red sphere, one ambient light: the pixel must be exactly
    // red * 0.2. The direction is normalized so the near intersection
    // stays past t_min = 1 and the ray shades the front face; the
    // reflected bounce then sees only background and the short-circuit
    // keeps the local color unblended. (An unnormalized direction of
    // magnitude sqrt(10) would clip the near root and shade the back
    // face instead, bouncing through the sphere's interior.)
    let scene = Scene {
        lights: vec![Light::Ambient { intensity: 0.2 }],
        objects: vec![Sphere {
            color: Color::red(),
            position: Point3::new(0.0, -1.0, 3.0),
            radius: 1.0,
            specular: 500.0,
            reflective: 0.2,
        }],
    };

    let r = Ray::new(Point3::origin(), Vec3::new(0.0, -1.0, 3.0).normalize());

    let color = trace_ray(&r, 1.0, f64::INFINITY, &scene, 3, Color::black());

    assert_eq!(color, Color::red() * 0.2);
}

#[cfg(test)]
fn facing_mirrors_scene() -> Scene {
    // A reflective white sphere ahead of the camera and a matte green
    // sphere behind it. A ray hitting the front of the white sphere
    // reflects straight back and hits the green one.
    Scene {
        lights: vec![Light::Ambient { intensity: 0.5 }],
        objects: vec![
            Sphere {
                color: Color::white(),
                position: Point3::new(0.0, 0.0, 5.0),
                radius: 1.0,
                specular: -1.0,
                reflective: 0.5,
            },
            Sphere {
                color: Color::green(),
                position: Point3::new(0.0, 0.0, -5.0),
                radius: 1.0,
                specular: -1.0,
                reflective: 0.0,
            },
        ],
    }
}

#[test]
fn depth_zero_never_recurses() {
    let scene = facing_mirrors_scene();
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    let color = trace_ray(&r, 1.0, f64::INFINITY, &scene, 0, Color::black());

    // Local color only, despite reflective = 0.5.
    assert_eq!(color, Color::white() * 0.5);
}

#[test]
fn one_bounce_blends_reflected_color() {
    let scene = facing_mirrors_scene();
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    let color = trace_ray(&r, 1.0, f64::INFINITY, &scene, 1, Color::black());

    // local = white * 0.5, reflected = green * 0.5;
    // blend = local * 0.5 + reflected * 0.5.
    assert_eq!(color, Color::rgb(0.25, 0.5, 0.25));
}

#[test]
fn bounce_into_background_keeps_local_color() {
    let scene = Scene {
        lights: vec![Light::Ambient { intensity: 0.5 }],
        objects: vec![Sphere {
            color: Color::white(),
            position: Point3::new(0.0, 0.0, 5.0),
            radius: 1.0,
            specular: -1.0,
            reflective: 0.5,
        }],
    };
    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));

    // With a non-black background the blend would visibly tint the sphere
    // if the short-circuit were missing.
    let background = Color::rgb(0.3, 0.3, 0.9);
    let color = trace_ray(&r, 1.0, f64::INFINITY, &scene, 3, background);

    assert_eq!(color, Color::white() * 0.5);
}

#[test]
fn non_reflective_surface_is_terminal() {
    let mut scene = facing_mirrors_scene();
    scene.objects[0].reflective = 0.0;

    let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
    let color = trace_ray(&r, 1.0, f64::INFINITY, &scene, 3, Color::black());

    assert_eq!(color, Color::white() * 0.5);
}
