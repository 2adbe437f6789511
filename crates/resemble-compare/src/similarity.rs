//! Tolerance-banded similarity predicates
//!
//! Every predicate treats an absent operand (an underived brightness, for
//! instance) as "not similar" rather than as an error.

use crate::pixel::PixelInfo;
use crate::tolerance::ToleranceProfile;

/// Compare two values under an exclusive tolerance.
///
/// Returns `false` if either operand is absent, `true` if they are equal,
/// and otherwise whether `|a - b| < tolerance`.
pub fn is_color_similar(a: Option<f64>, b: Option<f64>, tolerance: u8) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    a == b || (a - b).abs() < tolerance as f64
}

#[inline]
fn channel_similar(a: u8, b: u8, tolerance: u8) -> bool {
    is_color_similar(Some(a as f64), Some(b as f64), tolerance)
}

/// Exact equality of red, green and blue; alpha is ignored.
pub fn is_rgb_same(p1: &PixelInfo, p2: &PixelInfo) -> bool {
    p1.r == p2.r && p1.g == p2.g && p1.b == p2.b
}

impl ToleranceProfile {
    /// All four channels similar under their own tolerances.
    pub fn is_rgb_similar(&self, p1: &PixelInfo, p2: &PixelInfo) -> bool {
        channel_similar(p1.r, p2.r, self.red)
            && channel_similar(p1.g, p2.g, self.green)
            && channel_similar(p1.b, p2.b, self.blue)
            && channel_similar(p1.a, p2.a, self.alpha)
    }

    /// Alpha similar and brightness similar under `min_brightness`.
    ///
    /// Both pixels need derived brightness, otherwise this is `false`.
    pub fn is_pixel_brightness_similar(&self, p1: &PixelInfo, p2: &PixelInfo) -> bool {
        let alpha = channel_similar(p1.a, p2.a, self.alpha);
        let brightness = is_color_similar(p1.brightness(), p2.brightness(), self.min_brightness);
        brightness && alpha
    }

    /// Brightness gap strictly greater than `max_brightness`.
    ///
    /// Both pixels need derived brightness, otherwise this is `false`.
    pub fn is_contrasting(&self, p1: &PixelInfo, p2: &PixelInfo) -> bool {
        match (p1.brightness(), p2.brightness()) {
            (Some(b1), Some(b2)) => (b1 - b2).abs() > self.max_brightness as f64,
            _ => false,
        }
    }
}
