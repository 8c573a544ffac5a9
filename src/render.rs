use rayon::{ ThreadPool, ThreadPoolBuilder };

use crate::color::Color;
use crate::consts::TRACE_DEPTH;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace::trace_ray;
use crate::viewport::{ canvas_to_viewport, CanvasSize, Viewport };

/// A scanline renderer with a long-lived worker pool.
///
/// The pool is built once and reused for every frame; a `render` call is one
/// fork-join episode over it. Each canvas row becomes one task: rows are
/// independent, roughly uniform in cost, and coarse enough to amortize
/// dispatch overhead, so there is no finer-grained work splitting.
///
/// Each task receives an exclusive slice of the frame buffer for its row, so
/// no two tasks ever write the same memory and no lock is needed around the
/// buffer. Pixel values do not depend on scheduling: parallel and serial
/// rendering of the same inputs produce bit-identical buffers.
pub struct Renderer {
    pool: ThreadPool,
    parallel: bool,
}

impl Renderer {
    /// Creates a renderer with a pool of `threads` workers.
    pub fn new(threads: usize) -> Renderer {
        // There should be at least one thread to run row tasks.
        assert!(threads > 0);

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build the render worker pool");

        Renderer { pool, parallel: true }
    }

    /// Enables or disables the worker pool.
    ///
    /// With parallelism off, every row task runs inline on the calling
    /// thread, in top-to-bottom order. Useful for debugging; the resulting
    /// image is identical either way.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    /// Renders one frame of `scene` into `buffer`.
    ///
    /// `buffer` must hold exactly `canvas.width * canvas.height` pixels,
    /// row-major with the top-left pixel first. Every element is written
    /// exactly once. The call blocks until the whole frame is complete;
    /// there is no partial-frame path.
    pub fn render(&self, buffer: &mut [Color], canvas: CanvasSize,
        viewport: &Viewport, scene: &Scene) {

        assert_eq!(buffer.len(), canvas.pixel_count(),
            "frame buffer does not match the canvas size");

        let rotation = viewport.rotation();

        // Canvas coordinates have their origin at the top-left corner with y
        // growing downward; the projection plane is centered with y growing
        // upward. Center both coordinates here before mapping.
        let render_row = |j: usize, row: &mut [Color]| {
            let y = (canvas.height as i64 / 2 - j as i64) as f64;
            for (i, pixel) in row.iter_mut().enumerate() {
                let x = (i as i64 - canvas.width as i64 / 2) as f64;

                let direction = rotation
                    * canvas_to_viewport(x, y, canvas, viewport);
                let ray = Ray::new(viewport.position, direction);

                *pixel = trace_ray(&ray, 1.0, f64::INFINITY, scene,
                    TRACE_DEPTH, Color::black());
            }
        };

        let rows = buffer.chunks_mut(canvas.width);
        if self.parallel {
            let render_row = &render_row;
            // Fork one task per row, join when all rows have completed.
            self.pool.scope(|scope| {
                for (j, row) in rows.enumerate() {
                    scope.spawn(move |_| render_row(j, row));
                }
            });
        } else {
            for (j, row) in rows.enumerate() {
                render_row(j, row);
            }
        }
    }
}

/* Tests */

#[cfg(test)]
use crate::scene::{ Light, Sphere };
#[cfg(test)]
use crate::space::{ Point3, Vec3 };

#[cfg(test)]
fn test_scene() -> Scene {
    Scene {
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
        objects: vec![
            Sphere {
                color: Color::red(),
                position: Point3::new(0.0, -1.0, 3.0),
                radius: 1.0,
                specular: 500.0,
                reflective: 0.2,
            },
            Sphere {
                color: Color::blue(),
                position: Point3::new(2.0, 0.0, 4.0),
                radius: 1.0,
                specular: 500.0,
                reflective: 0.3,
            },
            Sphere {
                color: Color::yellow(),
                position: Point3::new(0.0, -5001.0, 0.0),
                radius: 5000.0,
                specular: 1000.0,
                reflective: 0.5,
            },
        ],
    }
}

#[test]
fn parallel_and_serial_render_identically() {
    let scene = test_scene();
    let canvas = CanvasSize::new(64, 48);
    let viewport: Viewport = Default::default();

    let mut parallel_buffer = vec![Color::black(); canvas.pixel_count()];
    let mut serial_buffer = vec![Color::black(); canvas.pixel_count()];

    let mut renderer = Renderer::new(4);
    renderer.render(&mut parallel_buffer, canvas, &viewport, &scene);

    renderer.set_parallel(false);
    renderer.render(&mut serial_buffer, canvas, &viewport, &scene);

    for (p, s) in parallel_buffer.iter().zip(serial_buffer.iter()) {
        assert_eq!(p.r.to_bits(), s.r.to_bits());
        assert_eq!(p.g.to_bits(), s.g.to_bits());
        assert_eq!(p.b.to_bits(), s.b.to_bits());
    }
}

#[test]
fn every_pixel_is_written() {
    // Rendering an empty scene must overwrite every sentinel value with the
    // background color.
    let scene = Scene::empty();
    let canvas = CanvasSize::new(17, 9);
    let sentinel = Color::rgb(-1.0, -1.0, -1.0);
    let mut buffer = vec![sentinel; canvas.pixel_count()];

    let renderer = Renderer::new(2);
    renderer.render(&mut buffer, canvas, &Default::default(), &scene);

    assert!(buffer.iter().all(|c| *c == Color::black()));
}

#[test]
fn renderer_survives_repeated_frames() {
    // The pool is reused across frames; successive renders of the same
    // inputs must agree.
    let scene = test_scene();
    let canvas = CanvasSize::new(32, 32);
    let viewport: Viewport = Default::default();

    let renderer = Renderer::new(4);
    let mut first = vec![Color::black(); canvas.pixel_count()];
    let mut second = vec![Color::black(); canvas.pixel_count()];

    renderer.render(&mut first, canvas, &viewport, &scene);
    renderer.render(&mut second, canvas, &viewport, &scene);

    assert_eq!(first, second);
}

#[test]
fn camera_translation_shifts_the_image() {
    let scene = test_scene();
    let canvas = CanvasSize::new(32, 32);

    let renderer = Renderer::new(2);

    let mut here = vec![Color::black(); canvas.pixel_count()];
    renderer.render(&mut here, canvas, &Default::default(), &scene);

    let moved = Viewport {
        position: Point3::new(0.0, 0.0, -2.0),
        ..Default::default()
    };
    let mut there = vec![Color::black(); canvas.pixel_count()];
    renderer.render(&mut there, canvas, &moved, &scene);

    assert_ne!(here, there);
}

#[test]
#[should_panic(expected = "frame buffer")]
fn wrong_buffer_length_panics() {
    let renderer = Renderer::new(1);
    let mut buffer = vec![Color::black(); 10];

    renderer.render(&mut buffer, CanvasSize::new(4, 4),
        &Default::default(), &Scene::empty());
}
