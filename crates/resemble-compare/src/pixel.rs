//! Pixel values with lazily derived attributes
//!
//! [`PixelInfo`] is a value copied out of a raster. Brightness and hue
//! are only computed when a branch of the decision tree needs them, and
//! deriving them returns a new value instead of touching the source
//! raster.

use resemble_core::{Pix, color};

/// Raw channels of one pixel plus optionally derived brightness and hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelInfo {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    brightness: Option<f64>,
    hue: Option<f64>,
}

impl PixelInfo {
    /// Wrap raw channels with no derived attributes.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            brightness: None,
            hue: None,
        }
    }

    /// Unpack a 32-bit RGBA word.
    pub fn from_packed(pixel: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(pixel);
        Self::new(r, g, b, a)
    }

    /// Read the pixel at (x, y), or `None` outside the raster.
    pub fn at(pix: &Pix, x: u32, y: u32) -> Option<Self> {
        pix.get_pixel(x, y).map(Self::from_packed)
    }

    /// Read the pixel at signed coordinates, or `None` outside the raster.
    pub fn at_signed(pix: &Pix, x: i64, y: i64) -> Option<Self> {
        pix.get_pixel_signed(x, y).map(Self::from_packed)
    }

    /// This pixel with brightness attached.
    #[must_use]
    pub fn with_brightness(self) -> Self {
        Self {
            brightness: Some(color::brightness(self.r, self.g, self.b)),
            ..self
        }
    }

    /// This pixel with hue attached.
    #[must_use]
    pub fn with_hue(self) -> Self {
        Self {
            hue: Some(color::hue(self.r, self.g, self.b)),
            ..self
        }
    }

    /// Brightness, if it has been derived.
    #[inline]
    pub fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    /// Hue, if it has been derived.
    #[inline]
    pub fn hue(&self) -> Option<f64> {
        self.hue
    }

    /// Repack the raw channels.
    pub fn packed(&self) -> u32 {
        color::compose_rgba(self.r, self.g, self.b, self.a)
    }
}
