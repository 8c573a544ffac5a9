use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{ self, BufReader };
use std::path::Path;

use serde::{ Serialize, Deserialize };

use crate::color::Color;
use crate::space::{ Point3, Vec3 };

/// A sphere with its surface properties.
///
/// `specular` is the Phong exponent; `-1.0` disables the specular term
/// entirely. `reflective` is the fraction of the mirror-reflected color
/// blended into the surface color, expected in `[0, 1]`. A non-positive
/// radius or an out-of-range reflectivity is a caller error and produces an
/// undefined (but non-panicking) image.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub color: Color,
    pub position: Point3,
    pub radius: f64,

    #[serde(default = "specular_disabled")]
    pub specular: f64,

    #[serde(default)]
    pub reflective: f64,
}

fn specular_disabled() -> f64 {
    -1.0
}

/// A light source.
///
/// The three kinds are closed and known at compile time, so lights are an
/// enum dispatched with exhaustive matches.
///
/// Directions point from the lit surface *toward* the light. Shadow rays for
/// a `Point` light use the unnormalized `position − point` vector, so any
/// occluder lies in the parametric interval `(ε, 1]`; for a `Directional`
/// light the interval is unbounded above.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Ambient { intensity: f64 },
    Directional { intensity: f64, direction: Vec3 },
    Point { intensity: f64, position: Point3 },
}

/// Everything visible: lights and spheres.
///
/// The order of `objects` matters in one narrow case: when two intersections
/// have exactly equal parametric distance, the earliest object in the list
/// wins. The camera is deliberately not part of the scene, so the same scene
/// can be rendered from several viewpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub lights: Vec<Light>,
    pub objects: Vec<Sphere>,
}

impl Scene {
    /// Creates a scene with no lights and no objects.
    pub fn empty() -> Scene {
        Default::default()
    }

    /// Loads a scene from a JSON description file.
    pub fn load(path: &Path) -> Result<Scene, SceneError> {
        let file = File::open(path)?;
        let scene = serde_json::from_reader(BufReader::new(file))?;
        Ok(scene)
    }
}

/// An error raised while loading a scene description.
#[derive(Debug)]
pub enum SceneError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "could not read scene: {}", e),
            SceneError::Parse(e) => write!(f, "could not parse scene: {}", e),
        }
    }
}

impl Error for SceneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SceneError::Io(e) => Some(e),
            SceneError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SceneError {
    fn from(e: io::Error) -> SceneError {
        SceneError::Io(e)
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> SceneError {
        SceneError::Parse(e)
    }
}

/* Tests */

#[test]
fn parse_scene_json() {
    let text = r#"{
        "lights": [
            { "type": "ambient", "intensity": 0.2 },
            { "type": "point", "intensity": 0.6,
              "position": { "x": 2.0, "y": 1.0, "z": 0.0 } },
            { "type": "directional", "intensity": 0.2,
              "direction": { "x": 1.0, "y": 4.0, "z": 4.0 } }
        ],
        "objects": [
            { "color": { "r": 1.0, "g": 0.0, "b": 0.0 },
              "position": { "x": 0.0, "y": -1.0, "z": 3.0 },
              "radius": 1.0, "specular": 500.0, "reflective": 0.2 }
        ]
    }"#;

    let scene: Scene = serde_json::from_str(text).unwrap();

    assert_eq!(scene.lights.len(), 3);
    assert_eq!(scene.lights[0], Light::Ambient { intensity: 0.2 });
    assert_eq!(scene.lights[1], Light::Point {
        intensity: 0.6,
        position: Point3::new(2.0, 1.0, 0.0),
    });

    assert_eq!(scene.objects.len(), 1);
    assert_eq!(scene.objects[0].color, Color::red());
    assert_eq!(scene.objects[0].reflective, 0.2);
}

#[test]
fn sphere_defaults_from_json() {
    let text = r#"{
        "color": { "r": 0.0, "g": 0.0, "b": 1.0 },
        "position": { "x": 2.0, "y": 0.0, "z": 4.0 },
        "radius": 1.0
    }"#;

    let sphere: Sphere = serde_json::from_str(text).unwrap();

    // Specular is disabled and reflectivity is off unless requested.
    assert_eq!(sphere.specular, -1.0);
    assert_eq!(sphere.reflective, 0.0);
}

#[test]
fn scene_roundtrip() {
    let scene = Scene {
        lights: vec![
            Light::Ambient { intensity: 0.5 },
            Light::Directional {
                intensity: 0.3,
                direction: Vec3::new(0.0, 1.0, 0.0),
            },
        ],
        objects: vec![
            Sphere {
                color: Color::green(),
                position: Point3::new(-2.0, 0.0, 4.0),
                radius: 1.0,
                specular: 10.0,
                reflective: 0.4,
            },
        ],
    };

    let text = serde_json::to_string(&scene).unwrap();
    let parsed: Scene = serde_json::from_str(&text).unwrap();

    assert_eq!(scene, parsed);
}

#[test]
fn load_missing_scene_fails() {
    let err = Scene::load(Path::new("/nonexistent/scene.json")).unwrap_err();

    assert!(matches!(err, SceneError::Io(_)));
}
