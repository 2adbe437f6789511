//! Pixel access functions
//!
//! Bounds-checked reads return `None` for coordinates outside the image;
//! that `None` is the "absent pixel" the comparison engine skips over.

use super::{Pix, PixMut};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value at signed coordinates.
    ///
    /// Negative coordinates are out of bounds, like any other position
    /// outside the image.
    #[inline]
    pub fn get_pixel_signed(&self, x: i64, y: i64) -> Option<u32> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get_pixel(x, y)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y * width + x` is outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_rgba() {
        let mut pm = Pix::new(3, 3).unwrap().try_into_mut().unwrap();
        pm.set_rgba(1, 2, 10, 20, 30, 40).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgba(1, 2), Some((10, 20, 30, 40)));
        assert_eq!(pix.get_rgba(3, 0), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut pm = Pix::new(3, 3).unwrap().try_into_mut().unwrap();
        assert!(pm.set_pixel(3, 0, 1).is_err());
        assert!(pm.set_pixel(0, 3, 1).is_err());
    }

    #[test]
    fn test_signed_access() {
        let mut pm = Pix::new(2, 2).unwrap().try_into_mut().unwrap();
        pm.set_pixel(0, 0, 5).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel_signed(0, 0), Some(5));
        assert_eq!(pix.get_pixel_signed(-1, 0), None);
        assert_eq!(pix.get_pixel_signed(0, -1), None);
        assert_eq!(pix.get_pixel_signed(2, 1), None);
    }

    #[test]
    fn test_row_does_not_wrap() {
        // (width, 0) must not alias (0, 1)
        let mut pm = Pix::new(2, 2).unwrap().try_into_mut().unwrap();
        pm.set_pixel(0, 1, 9).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(2, 0), None);
    }
}
