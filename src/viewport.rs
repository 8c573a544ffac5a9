use crate::matrix::Mat3;
use crate::space::{ Point3, Vec3 };

/// The pixel dimensions of the target canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: usize,
    pub height: usize,
}

impl CanvasSize {
    pub fn new(width: usize, height: usize) -> CanvasSize {
        CanvasSize { width, height }
    }

    /// The number of pixels on the canvas, i.e. the required frame buffer
    /// length.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// The camera and its projection plane.
///
/// The viewport is a `width`-by-`height` rectangle floating `distance` in
/// front of the camera; canvas pixels map onto it to become ray directions.
/// `pitch` and `yaw` are in degrees (the interactive driver that feeds this
/// renderer steps them in whole-degree increments). The caller mutates
/// position and angles between frames; the renderer only reads them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,

    /// Distance from the camera position to the projection plane.
    pub distance: f64,

    pub position: Point3,
    pub pitch: f64,
    pub yaw: f64,
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
            position: Point3::origin(),
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl Viewport {
    /// The camera orientation as a rotation matrix: yaw about the y axis
    /// applied after pitch about the x axis.
    pub fn rotation(&self) -> Mat3 {
        Mat3::rotation_y(self.yaw.to_radians())
            * Mat3::rotation_x(self.pitch.to_radians())
    }
}

/// Maps a centered canvas coordinate to a ray direction through the
/// projection plane.
///
/// `x` and `y` must already be centered (canvas middle at the origin, x
/// increasing right, y increasing up); the renderer performs that centering.
/// The direction is simply the canvas coordinate scaled onto the viewport
/// rectangle, with the plane distance as the z component. Camera rotation is
/// applied by the caller afterward.
pub fn canvas_to_viewport(x: f64, y: f64, canvas: CanvasSize,
    viewport: &Viewport) -> Vec3 {

    Vec3 {
        x: x * viewport.width / canvas.width as f64,
        y: y * viewport.height / canvas.height as f64,
        z: viewport.distance,
    }
}

/* Tests */

#[test]
fn center_pixel_looks_straight_ahead() {
    let canvas = CanvasSize::new(320, 320);
    let viewport: Viewport = Default::default();

    let dir = canvas_to_viewport(0.0, 0.0, canvas, &viewport);

    assert_eq!(dir, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn canvas_corner_maps_to_viewport_corner() {
    let canvas = CanvasSize::new(200, 100);
    let viewport = Viewport {
        width: 2.0,
        height: 1.0,
        ..Default::default()
    };

    let dir = canvas_to_viewport(100.0, 50.0, canvas, &viewport);

    assert_eq!(dir, Vec3::new(1.0, 0.5, 1.0));
}

#[test]
fn default_rotation_is_identity() {
    let viewport: Viewport = Default::default();

    assert_eq!(viewport.rotation(), Mat3::identity());
}

#[test]
fn yaw_turns_view_sideways() {
    let viewport = Viewport { yaw: 90.0, ..Default::default() };

    let ahead = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(viewport.rotation() * ahead, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn pixel_count_matches_buffer_contract() {
    let canvas = CanvasSize::new(320, 240);

    assert_eq!(canvas.pixel_count(), 320 * 240);
}
