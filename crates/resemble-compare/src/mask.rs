//! Ignored regions
//!
//! Coordinates inside any configured rectangle are never counted as
//! mismatches; the analyzer paints them as a grayscale copy instead.

use resemble_core::Box;

/// A set of rectangles excluded from mismatch counting.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionMask<'a> {
    regions: &'a [Box],
}

impl<'a> RegionMask<'a> {
    /// Wrap a list of rectangles. An empty list masks nothing.
    pub fn new(regions: &'a [Box]) -> Self {
        Self { regions }
    }

    /// True if (x, y) lies in any rectangle (half-open on both axes).
    pub fn is_masked(&self, x: u32, y: u32) -> bool {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return false;
        };
        self.regions.iter().any(|r| r.contains_point(x, y))
    }

    /// True if no rectangle is configured.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
