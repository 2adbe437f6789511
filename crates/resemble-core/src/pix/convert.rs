//! Conversion between `Pix` and flat RGBA byte buffers
//!
//! Codecs and callers outside the workspace usually speak in row-major
//! `[r, g, b, a, r, g, b, a, ...]` byte slices.

use super::Pix;
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Build a PIX from a row-major RGBA byte buffer (4 bytes per pixel).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Pix> {
        let pix = Pix::new(width, height)?;
        let expected = pix.data().len() * 4;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }

        let mut pm = pix.to_mut();
        for (dst, src) in pm.data_mut().iter_mut().zip(bytes.chunks_exact(4)) {
            *dst = color::compose_rgba(src[0], src[1], src[2], src[3]);
        }
        Ok(pm.into())
    }

    /// Flatten to a row-major RGBA byte buffer.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data().len() * 4);
        for &pixel in self.data() {
            let (r, g, b, a) = color::extract_rgba(pixel);
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_bytes_layout() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let pix = Pix::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(pix.get_rgba(0, 0), Some((1, 2, 3, 4)));
        assert_eq!(pix.get_rgba(1, 0), Some((5, 6, 7, 8)));
        assert_eq!(pix.to_rgba_bytes(), bytes);
    }

    #[test]
    fn test_from_rgba_bytes_wrong_length() {
        let err = Pix::from_rgba_bytes(2, 2, &[0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferLength {
                expected: 16,
                actual: 15
            }
        ));
    }
}
