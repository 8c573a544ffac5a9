use std::fs::File;
use std::io;
use std::io::{ BufWriter, Write };
use std::path::Path;

use crate::color::Color;

/// A canvas of pixels.
///
/// Owns the flat frame buffer the renderer writes into and can persist it as
/// a plain-text PPM image. Pixels are stored row-major with the top-left
/// pixel first.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Canvas {
    /// The width of the canvas, in pixels.
    pub width: usize,

    /// The height of the canvas, in pixels.
    pub height: usize,

    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas with the specified width and height.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    /// The frame buffer, for handing to `Renderer::render`.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Writes a color to a location on the canvas.
    ///
    /// Out-of-bounds writes are silently ignored. `x` is the column and `y`
    /// the row, both zero-indexed from the top-left corner.
    pub fn write_pixel(&mut self, x: usize, y: usize, pixel: &Color) {
        if x >= self.width || y >= self.height {
            return;
        }

        self.pixels[(y * self.width) + x] = *pixel;
    }

    /// Reads a color from a location on the canvas, or `None` when the
    /// location is out of bounds.
    pub fn read_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixels[(y * self.width) + x])
    }

    /// Saves the canvas as a plain-text PPM file.
    ///
    /// Channels are scaled to 0..=255 and clamped here, at the presentation
    /// boundary; the stored colors themselves stay unclamped.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);

        writeln!(&mut out, "P3")?;
        writeln!(&mut out, "{} {}", self.width, self.height)?;
        writeln!(&mut out, "255")?;

        for pixel in self.pixels.iter() {
            let r = (pixel.r * 255.0).clamp(0.0, 255.0).round() as u8;
            let g = (pixel.g * 255.0).clamp(0.0, 255.0).round() as u8;
            let b = (pixel.b * 255.0).clamp(0.0, 255.0).round() as u8;

            writeln!(&mut out, "{} {} {}", r, g, b)?;
        }

        out.flush()
    }
}

/* Tests */

#[test]
fn new_canvas_is_black() {
    let canvas = Canvas::new(4, 3);

    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(canvas.read_pixel(x, y).unwrap(), Color::black());
        }
    }
}

#[test]
fn write_and_read_pixel() {
    let purple = Color::rgb(1.0, 0.0, 1.0);
    let mut canvas = Canvas::new(8, 8);

    canvas.write_pixel(4, 2, &purple);

    assert_eq!(canvas.read_pixel(4, 2).unwrap(), purple);
}

#[test]
fn out_of_bounds_access_is_ignored() {
    let mut canvas = Canvas::new(2, 2);

    canvas.write_pixel(5, 5, &Color::white());

    assert_eq!(canvas.read_pixel(5, 5), None);
    assert_eq!(canvas.read_pixel(1, 1).unwrap(), Color::black());
}

#[test]
fn buffer_is_row_major() {
    let mut canvas = Canvas::new(3, 2);
    canvas.write_pixel(1, 1, &Color::red());

    // Row 1, column 1 of a 3-wide canvas is flat index 4.
    assert_eq!(canvas.pixels_mut()[4], Color::red());
}
