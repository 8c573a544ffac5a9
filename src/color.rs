use std::ops::{ Add, Mul };

use serde::{ Serialize, Deserialize };

use crate::feq;

/// An RGB color.
///
/// Each channel nominally ranges from 0.0 to 1.0, but values above 1.0 are
/// allowed to appear transiently while lighting contributions accumulate.
/// Channels are only clamped at presentation boundaries (e.g. when a canvas
/// is written out), never during arithmetic.
///
/// Equality is derived, i.e. bitwise per channel. The ray tracer compares a
/// reflected color against the background color verbatim to decide whether a
/// bounce saw any geometry at all, so a tolerance here would change rendering
/// behavior. Use `approx_eq` for comparisons that should absorb floating
/// point error.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd,
    Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Creates a color with red, green and blue values.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// The color black.
    pub fn black() -> Color {
        Color::rgb(0.0, 0.0, 0.0)
    }

    /// The color white.
    pub fn white() -> Color {
        Color::rgb(1.0, 1.0, 1.0)
    }

    /// The color red.
    pub fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    /// The color green.
    pub fn green() -> Color {
        Color::rgb(0.0, 1.0, 0.0)
    }

    /// The color blue.
    pub fn blue() -> Color {
        Color::rgb(0.0, 0.0, 1.0)
    }

    /// The color yellow.
    pub fn yellow() -> Color {
        Color::rgb(1.0, 0.984, 0.0)
    }

    /// Compares two colors channel-wise with a small epsilon.
    pub fn approx_eq(&self, other: &Color) -> bool {
        feq(self.r, other.r) &&
            feq(self.g, other.g) &&
            feq(self.b, other.b)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

/// Scales every channel, e.g. by a lighting intensity.
impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            r: self.r * other,
            g: self.g * other,
            b: self.b * other,
        }
    }
}

/* Tests */

#[test]
fn add_colors() {
    let a = Color::rgb(0.9, 0.6, 0.75);
    let b = Color::rgb(0.7, 0.1, 0.25);

    assert!((a + b).approx_eq(&Color::rgb(1.6, 0.7, 1.0)));
}

#[test]
fn scale_color() {
    let c = Color::rgb(0.2, 0.3, 0.4);

    assert!((c * 2.0).approx_eq(&Color::rgb(0.4, 0.6, 0.8)));
}

#[test]
fn equality_is_exact() {
    // 0.1 + 0.2 != 0.3 in binary floating point; the derived equality must
    // notice, even though approx_eq does not.
    let computed = Color::rgb(0.1 + 0.2, 0.0, 0.0);
    let literal = Color::rgb(0.3, 0.0, 0.0);

    assert_ne!(computed, literal);
    assert!(computed.approx_eq(&literal));
}

#[test]
fn channels_exceed_one_without_clamping() {
    let c = Color::white() * 1.5 + Color::rgb(0.5, 0.0, 0.0);

    assert!(c.approx_eq(&Color::rgb(2.0, 1.5, 1.5)));
}
