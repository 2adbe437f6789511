//! Single-image summary statistics
//!
//! One pass over every pixel gathers:
//!
//! - Mean red, green, blue and brightness as 0-100 percentages
//! - Mean transparency (`(255 - alpha) / 255 * 100`)
//! - The share of pure white and pure black pixels
//!
//! All means are floored, and every share uses the total pixel count as
//! its denominator.

use super::Pix;
use crate::color;

/// Descriptive statistics of one image, each an integer percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageStats {
    /// Mean red level
    pub red: u32,
    /// Mean green level
    pub green: u32,
    /// Mean blue level
    pub blue: u32,
    /// Mean transparency (inverse alpha)
    pub alpha: u32,
    /// Mean brightness
    pub brightness: u32,
    /// Percentage of pixels that are opaque-ish pure white (r = g = b = 255, a > 0)
    pub white: u32,
    /// Percentage of pixels that are opaque-ish pure black (r = g = b = 0, a > 0)
    pub black: u32,
}

impl Pix {
    /// Compute [`ImageStats`] over the whole image.
    pub fn summary_stats(&self) -> ImageStats {
        let mut red_total = 0.0f64;
        let mut green_total = 0.0f64;
        let mut blue_total = 0.0f64;
        let mut alpha_total = 0.0f64;
        let mut brightness_total = 0.0f64;
        let mut white_total = 0u64;
        let mut black_total = 0u64;

        for &pixel in self.data() {
            let (r, g, b, a) = color::extract_rgba(pixel);

            if r == g && r == b && a > 0 {
                match r {
                    0 => black_total += 1,
                    255 => white_total += 1,
                    _ => {}
                }
            }

            red_total += r as f64 / 255.0 * 100.0;
            green_total += g as f64 / 255.0 * 100.0;
            blue_total += b as f64 / 255.0 * 100.0;
            alpha_total += (255 - a) as f64 / 255.0 * 100.0;
            brightness_total += color::brightness(r, g, b) / 255.0 * 100.0;
        }

        let count = self.pixel_count() as f64;
        let mean = |total: f64| (total / count).floor() as u32;
        let share = |n: u64| (n as f64 / count * 100.0).floor() as u32;

        ImageStats {
            red: mean(red_total),
            green: mean(green_total),
            blue: mean(blue_total),
            alpha: mean(alpha_total),
            brightness: mean(brightness_total),
            white: share(white_total),
            black: share(black_total),
        }
    }
}
