use crate::consts::SHADOW_EPSILON;
use crate::intersect::closest_intersection;
use crate::ray::Ray;
use crate::scene::{ Light, Scene };
use crate::space::{ Point3, Vec3 };

/// The diffuse contribution of one light.
///
/// Intensity falls off with the cosine of the angle between the surface
/// normal and the light ray, which is the dot product of the normal with the
/// normalized light ray. The result is unclamped; the caller floors it at
/// zero so back-facing light contributes nothing.
pub fn diffuse_light(normal: &Vec3, light_ray: &Vec3, intensity: f64) -> f64 {
    intensity * normal.dot(&light_ray.normalize())
}

/// The specular coefficient of one light.
///
/// `point_to_camera` is the view vector from the shaded point back to the
/// camera. The light ray bounces off the surface with the incidence angle
/// mirrored about the normal; the highlight is strongest when that bounce
/// lines up with the view vector, falling off with `cos^specular` of the
/// angle between them. An exponent of `-1.0` (or below) disables the term.
///
/// Returns a non-negative coefficient; the caller scales it by the light's
/// intensity. For exponents of 1 and above the coefficient stays within
/// `[0, 1]`, but exponents in `(-1, 0)` amplify instead of attenuating and
/// can push it past 1.
pub fn specular_light(point_to_camera: &Vec3, normal: &Vec3, light_ray: &Vec3,
    specular: f64) -> f64 {

    if specular <= -1.0 {
        return 0.0;
    }

    let reflected_ray = light_ray.reflect(normal);
    let r_dot_v = reflected_ray.dot(point_to_camera);
    if r_dot_v > 0.0 {
        let cos = r_dot_v
            / (reflected_ray.magnitude() * point_to_camera.magnitude());
        cos.powf(specular)
    } else {
        // The bounce points away from the camera; no highlight.
        0.0
    }
}

/// Computes the light intensity at a point on a surface.
///
/// Ambient lights contribute unconditionally. Directional and point lights
/// are first shadow-tested: a probe ray from the point toward the light is
/// intersected against the scene, offset by a small epsilon so the surface
/// does not occlude itself. Point lights cap the probe at `t = 1` (the light
/// ray already has the full length to the light); directional lights have no
/// upper bound. Any hit silences both the diffuse and specular terms of that
/// light.
///
/// The sum is clamped to at most 1. There is no lower clamp: each diffuse
/// term is floored at zero individually, and the specular coefficient is
/// never negative.
pub fn compute_lighting(point: Point3, normal: Vec3, scene: &Scene,
    point_to_camera: Vec3, specular: f64) -> f64 {

    let mut intensity = 0.0;

    for light in scene.lights.iter() {
        let (light_ray, light_intensity, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                intensity += ambient;
                continue;
            },
            Light::Directional { intensity, direction } => {
                (direction, intensity, f64::INFINITY)
            },
            Light::Point { intensity, position } => {
                (position - point, intensity, 1.0)
            },
        };

        // Shadow check
        let probe = Ray::new(point, light_ray);
        if closest_intersection(&probe, SHADOW_EPSILON, t_max, scene)
            .is_some() {
            continue;
        }

        intensity += diffuse_light(&normal, &light_ray, light_intensity)
            .max(0.0);
        intensity += light_intensity
            * specular_light(&point_to_camera, &normal, &light_ray, specular);
    }

    intensity.min(1.0)
}

/* Tests */

#[cfg(test)]
use crate::color::Color;
#[cfg(test)]
use crate::scene::Sphere;

#[test]
fn ambient_light_alone() {
    let scene = Scene {
        lights: vec![Light::Ambient { intensity: 0.2 }],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 0.2);
}

#[test]
fn head_on_point_light() {
    let scene = Scene {
        lights: vec![Light::Point {
            intensity: 0.6,
            position: Point3::new(0.0, 5.0, 0.0),
        }],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 0.6);
}

#[test]
fn grazing_light_contributes_nothing() {
    // The light sits in the surface plane, so the diffuse cosine is zero,
    // and nothing may push the intensity below zero either.
    let scene = Scene {
        lights: vec![Light::Directional {
            intensity: 0.8,
            direction: Vec3::new(1.0, 0.0, 0.0),
        }],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 0.0);
}

#[test]
fn backlight_is_floored_at_zero() {
    let scene = Scene {
        lights: vec![
            Light::Ambient { intensity: 0.2 },
            Light::Directional {
                intensity: 0.8,
                direction: Vec3::new(0.0, -1.0, 0.0),
            },
        ],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    // The back-facing directional light must not cancel the ambient term.
    assert_eq!(intensity, 0.2);
}

#[test]
fn intensity_clamps_at_one() {
    let scene = Scene {
        lights: vec![
            Light::Ambient { intensity: 0.9 },
            Light::Directional {
                intensity: 0.9,
                direction: Vec3::new(0.0, 1.0, 0.0),
            },
        ],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 1.0);
}

#[test]
fn specular_aligned_with_view() {
    // Light and camera both sit straight up from the surface, so the
    // reflected ray lines up with the view vector: cos = 1 regardless of
    // exponent.
    let scene = Scene {
        lights: vec![Light::Point {
            intensity: 0.3,
            position: Point3::new(0.0, 2.0, 0.0),
        }],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        10.0,
    );

    // Diffuse 0.3 plus specular 0.3 * 1^10.
    assert_eq!(intensity, 0.6);
}

#[test]
fn fractional_negative_exponent_exceeds_one() {
    // cos < 1 raised to a negative power grows instead of decaying, so the
    // coefficient is non-negative but not capped at 1. Exponents down to
    // (but excluding) -1 are admitted.
    let normal = Vec3::new(0.0, 1.0, 0.0);
    let light_ray = Vec3::new(0.0, 1.0, 0.0);
    let point_to_camera = Vec3::new(0.0, 1.0, 1.0);

    let coefficient = specular_light(&point_to_camera, &normal, &light_ray,
        -0.5);

    assert!(coefficient > 1.0);
}

#[test]
fn negative_exponent_disables_specular() {
    let scene = Scene {
        lights: vec![Light::Point {
            intensity: 0.3,
            position: Point3::new(0.0, 2.0, 0.0),
        }],
        objects: vec![],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 0.3);
}

#[test]
fn occluder_shadows_point_light() {
    // A sphere sits directly between the light and the shaded point. Only
    // the ambient term survives.
    let occluder = Sphere {
        color: Color::white(),
        position: Point3::new(0.0, 2.5, 0.0),
        radius: 0.5,
        specular: -1.0,
        reflective: 0.0,
    };

    let scene = Scene {
        lights: vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Point3::new(0.0, 5.0, 0.0),
            },
        ],
        objects: vec![occluder],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        500.0,
    );

    assert_eq!(intensity, 0.2);
}

#[test]
fn occluder_behind_point_light_does_not_shadow() {
    // The sphere lies past the light (t > 1 on the probe ray), so it cannot
    // cast a shadow from a point light.
    let bystander = Sphere {
        color: Color::white(),
        position: Point3::new(0.0, 10.0, 0.0),
        radius: 0.5,
        specular: -1.0,
        reflective: 0.0,
    };

    let scene = Scene {
        lights: vec![Light::Point {
            intensity: 0.6,
            position: Point3::new(0.0, 5.0, 0.0),
        }],
        objects: vec![bystander],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 0.6);
}

#[test]
fn directional_shadow_has_no_distance_cap() {
    // The same far-away sphere does occlude a directional light, whose
    // probe interval is unbounded above.
    let occluder = Sphere {
        color: Color::white(),
        position: Point3::new(0.0, 10.0, 0.0),
        radius: 0.5,
        specular: -1.0,
        reflective: 0.0,
    };

    let scene = Scene {
        lights: vec![Light::Directional {
            intensity: 0.6,
            direction: Vec3::new(0.0, 1.0, 0.0),
        }],
        objects: vec![occluder],
    };

    let intensity = compute_lighting(
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        &scene,
        Vec3::new(0.0, 1.0, 0.0),
        -1.0,
    );

    assert_eq!(intensity, 0.0);
}

#[test]
fn lighting_stays_in_unit_interval() {
    let scene = Scene {
        lights: vec![
            Light::Ambient { intensity: 0.2 },
            Light::Point {
                intensity: 0.6,
                position: Point3::new(2.0, 1.0, 0.0),
            },
            Light::Directional {
                intensity: 0.2,
                direction: Vec3::new(1.0, 4.0, 4.0),
            },
        ],
        objects: vec![],
    };

    for &(nx, ny, nz) in [
        (0.0, 1.0, 0.0),
        (0.0, -1.0, 0.0),
        (1.0, 0.0, 0.0),
        (0.577, 0.577, 0.577),
    ].iter() {
        let intensity = compute_lighting(
            Point3::new(0.5, -0.5, 3.0),
            Vec3::new(nx, ny, nz),
            &scene,
            Vec3::new(-0.5, 0.5, -3.0),
            500.0,
        );

        assert!(intensity >= 0.0 && intensity <= 1.0);
    }
}
