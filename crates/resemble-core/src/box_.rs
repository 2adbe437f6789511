//! Box - Rectangle regions
//!
//! Rectangles are half-open on both axes: a box covers
//! `[x, x + w) x [y, y + h)`.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A small `Copy` type since it's frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    ///
    /// Computed in `i64`, so it never overflows.
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && (x as i64) < self.right() && y >= self.y && (y as i64) < self.bottom()
    }
}

impl From<[i32; 4]> for Box {
    /// Build from an `[x, y, width, height]` quadruple.
    fn from(r: [i32; 4]) -> Self {
        Self::new_unchecked(r[0], r[1], r[2], r[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_rejects_negative_size() {
        assert!(Box::new(0, 0, -1, 5).is_err());
        assert!(Box::new(0, 0, 5, -1).is_err());
        assert!(Box::new(3, 4, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_contains_point_half_open() {
        let b = Box::new(2, 3, 4, 5).unwrap();
        assert!(b.contains_point(2, 3));
        assert!(b.contains_point(5, 7));
        assert!(!b.contains_point(6, 3));
        assert!(!b.contains_point(2, 8));
        assert!(!b.contains_point(1, 3));
    }

    #[test]
    fn test_from_quadruple() {
        let b: Box = [325, 170, 100, 40].into();
        assert_eq!(b.right(), 425);
        assert_eq!(b.bottom(), 210);
    }

    #[test]
    fn test_edges_do_not_overflow() {
        let b = Box::from([2, 0, i32::MAX, 1]);
        assert_eq!(b.right(), 2 + i32::MAX as i64);
        assert!(b.contains_point(i32::MAX, 0));
        assert!(!b.contains_point(1, 0));

        let b = Box::new_unchecked(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        assert!(b.contains_point(i32::MAX, i32::MAX));
        assert!(!b.contains_point(0, 0));
    }
}
