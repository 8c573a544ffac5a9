use std::path::PathBuf;
use std::process;

use clap::Parser;

use soft_render::canvas::Canvas;
use soft_render::color::Color;
use soft_render::consts::{ CANVAS_HEIGHT, CANVAS_WIDTH, NUM_THREADS, OUT_FILE };
use soft_render::render::Renderer;
use soft_render::scene::{ Light, Scene, Sphere };
use soft_render::space::{ Point3, Vec3 };
use soft_render::viewport::{ CanvasSize, Viewport };

#[derive(Parser)]
#[clap(about = "Render a sphere scene to a PPM image.")]
struct Args {
    /// Canvas width in pixels.
    #[clap(long, default_value_t = CANVAS_WIDTH)]
    width: usize,

    /// Canvas height in pixels.
    #[clap(long, default_value_t = CANVAS_HEIGHT)]
    height: usize,

    /// Number of worker threads in the render pool.
    #[clap(long, default_value_t = NUM_THREADS)]
    threads: usize,

    /// Render rows inline on the main thread instead of on the pool.
    #[clap(long)]
    serial: bool,

    /// A JSON scene description; the built-in scene is rendered without one.
    #[clap(long)]
    scene: Option<PathBuf>,

    /// Output image path.
    #[clap(long, default_value = OUT_FILE)]
    out: PathBuf,
}

/// Three lit spheres resting on a huge yellow "floor" sphere.
fn reference_scene() -> Scene {
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
                color: Color::green(),
                position: Point3::new(-2.0, 0.0, 4.0),
                radius: 1.0,
                specular: 10.0,
                reflective: 0.4,
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

fn main() {
    let args = Args::parse();

    let scene = match args.scene {
        Some(ref path) => match Scene::load(path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                process::exit(1);
            },
        },
        None => reference_scene(),
    };

    let mut renderer = Renderer::new(args.threads);
    renderer.set_parallel(!args.serial);

    let canvas_size = CanvasSize::new(args.width, args.height);
    let viewport: Viewport = Default::default();
    let mut canvas = Canvas::new(args.width, args.height);

    renderer.render(canvas.pixels_mut(), canvas_size, &viewport, &scene);

    if let Err(e) = canvas.save(&args.out) {
        eprintln!("{}: {}", args.out.display(), e);
        process::exit(1);
    }

    println!("Saved render to {}.", args.out.display());
}
