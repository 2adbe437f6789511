//! Diff image compositing
//!
//! Each analyzed coordinate receives exactly one write, chosen by the
//! classification outcome:
//!
//! - similar pixels keep the first image's color
//! - ignored or brightness-similar pixels become a grayscale copy of the
//!   second image
//! - mismatches get the configured error highlight
//!
//! Matched pixels have their alpha scaled by the transparency factor.

use crate::pixel::PixelInfo;
use crate::visualize::{ErrorColor, ErrorStyle};
use resemble_core::{PixMut, color};

/// Writes output pixels into the diff frame.
#[derive(Debug)]
pub struct DiffCompositor {
    frame: PixMut,
    transparency: f64,
    error_style: ErrorStyle,
    error_color: ErrorColor,
}

impl DiffCompositor {
    /// Wrap an output frame.
    pub fn new(
        frame: PixMut,
        transparency: f64,
        error_style: ErrorStyle,
        error_color: ErrorColor,
    ) -> Self {
        Self {
            frame,
            transparency,
            error_style,
            error_color,
        }
    }

    #[inline]
    fn scaled_alpha(&self, a: u8) -> u8 {
        (a as f64 * self.transparency) as u8
    }

    /// Copy `pixel`'s color with scaled alpha.
    pub fn copy_pixel(&mut self, x: u32, y: u32, pixel: &PixelInfo) {
        let out = color::compose_rgba(pixel.r, pixel.g, pixel.b, self.scaled_alpha(pixel.a));
        self.frame.set_pixel_unchecked(x, y, out);
    }

    /// Write `pixel`'s brightness as gray with scaled alpha.
    ///
    /// Brightness is derived here if the pixel does not carry it yet.
    pub fn copy_grayscale_pixel(&mut self, x: u32, y: u32, pixel: &PixelInfo) {
        let brightness = pixel
            .brightness()
            .unwrap_or_else(|| color::brightness(pixel.r, pixel.g, pixel.b));
        let gray = brightness as u8;
        let out = color::compose_rgba(gray, gray, gray, self.scaled_alpha(pixel.a));
        self.frame.set_pixel_unchecked(x, y, out);
    }

    /// Write the error highlight for a mismatching pair.
    pub fn error_pixel(&mut self, x: u32, y: u32, p1: &PixelInfo, p2: &PixelInfo) {
        let out = self.error_style.transform(&self.error_color, p1, p2);
        self.frame.set_pixel_unchecked(x, y, out);
    }

    /// Give back the finished frame.
    pub fn into_frame(self) -> PixMut {
        self.frame
    }
}
