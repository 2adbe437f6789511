//! Error pixel visualization
//!
//! Four interchangeable transforms turn a mismatching pixel pair into the
//! highlight color written to the diff image. All of them are pure
//! functions of the pair and the configured [`ErrorColor`].

use crate::error::CompareError;
use crate::pixel::PixelInfo;
use resemble_core::color;
use std::fmt;
use std::str::FromStr;

/// Cap on how far `MovementDifferenceIntensity` leans toward the error color.
pub const MOVEMENT_INTENSITY_SCALE: f64 = 0.8;

/// Highlight color for mismatching pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl ErrorColor {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl Default for ErrorColor {
    /// Opaque red.
    fn default() -> Self {
        Self::new(255, 0, 0, 255)
    }
}

/// How mismatching pixels are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStyle {
    /// The error color as-is
    #[default]
    Flat,
    /// The second image's pixel tinted toward the error color
    Movement,
    /// The error color with alpha proportional to the pixel distance
    FlatDifferenceIntensity,
    /// The second image's pixel tinted in proportion to the pixel distance
    MovementDifferenceIntensity,
}

/// Mean absolute difference of the red, green and blue channels (0-255).
pub fn colors_distance(p1: &PixelInfo, p2: &PixelInfo) -> f64 {
    let d = |a: u8, b: u8| (a as f64 - b as f64).abs();
    (d(p1.r, p2.r) + d(p1.g, p2.g) + d(p1.b, p2.b)) / 3.0
}

impl ErrorStyle {
    /// All styles, in declaration order.
    pub const ALL: [ErrorStyle; 4] = [
        ErrorStyle::Flat,
        ErrorStyle::Movement,
        ErrorStyle::FlatDifferenceIntensity,
        ErrorStyle::MovementDifferenceIntensity,
    ];

    /// Name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Movement => "movement",
            Self::FlatDifferenceIntensity => "flatDifferenceIntensity",
            Self::MovementDifferenceIntensity => "movementDifferenceIntensity",
        }
    }

    /// Compute the packed RGBA highlight for a mismatching pair.
    ///
    /// Fractional results are truncated toward zero.
    pub fn transform(self, error: &ErrorColor, p1: &PixelInfo, p2: &PixelInfo) -> u32 {
        // Channel of p2 scaled by the matching error channel
        let tint = |c: u8, e: u8| c as f64 * (e as f64 / 255.0);

        match self {
            Self::Flat => color::compose_rgba(error.red, error.green, error.blue, error.alpha),
            Self::Movement => {
                let blend = |c: u8, e: u8| ((tint(c, e) + e as f64) / 2.0) as u8;
                color::compose_rgba(
                    blend(p2.r, error.red),
                    blend(p2.g, error.green),
                    blend(p2.b, error.blue),
                    p2.a,
                )
            }
            Self::FlatDifferenceIntensity => color::compose_rgba(
                error.red,
                error.green,
                error.blue,
                colors_distance(p1, p2) as u8,
            ),
            Self::MovementDifferenceIntensity => {
                let ratio = colors_distance(p1, p2) / 255.0 * MOVEMENT_INTENSITY_SCALE;
                let blend =
                    |c: u8, e: u8| ((1.0 - ratio) * tint(c, e) + ratio * e as f64) as u8;
                color::compose_rgba(
                    blend(p2.r, error.red),
                    blend(p2.g, error.green),
                    blend(p2.b, error.blue),
                    p2.a,
                )
            }
        }
    }
}

impl fmt::Display for ErrorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorStyle {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| CompareError::UnknownErrorStyle(s.to_string()))
    }
}
