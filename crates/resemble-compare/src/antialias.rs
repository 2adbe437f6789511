//! Anti-aliasing detection
//!
//! Decides whether a pixel looks like an edge-smoothing artifact by
//! inspecting its 3x3 neighborhood in its own raster. A pixel is treated
//! as anti-aliased when more than one neighbor is high-contrast, more
//! than one neighbor has a clearly different hue, or fewer than two
//! neighbors share its exact RGB value.

use crate::pixel::PixelInfo;
use crate::similarity::is_rgb_same;
use crate::tolerance::ToleranceProfile;
use resemble_core::Pix;

/// Hue gap above which a neighbor counts as a different hue.
pub const HUE_DIFFERENCE: f64 = 0.3;

/// Neighborhood radius (1 = 3x3 block).
const DISTANCE: i64 = 1;

/// Check whether `source`, located at (x, y) in `pix`, is anti-aliased.
///
/// `source` should carry derived brightness; hue is derived here if it
/// is missing. Neighbors outside the raster are skipped.
pub fn is_antialiased(
    source: &PixelInfo,
    pix: &Pix,
    x: u32,
    y: u32,
    tolerance: &ToleranceProfile,
) -> bool {
    let source = match source.hue() {
        Some(_) => *source,
        None => source.with_hue(),
    };
    let source_hue = source.hue().unwrap_or_default();

    let mut high_contrast = 0u32;
    let mut different_hue = 0u32;
    let mut equivalent = 0u32;

    for dx in -DISTANCE..=DISTANCE {
        for dy in -DISTANCE..=DISTANCE {
            if dx == 0 && dy == 0 {
                continue;
            }

            let Some(target) = PixelInfo::at_signed(pix, x as i64 + dx, y as i64 + dy) else {
                continue;
            };
            let target = target.with_brightness().with_hue();

            if tolerance.is_contrasting(&source, &target) {
                high_contrast += 1;
            }

            if is_rgb_same(&source, &target) {
                equivalent += 1;
            }

            if (target.hue().unwrap_or_default() - source_hue).abs() > HUE_DIFFERENCE {
                different_hue += 1;
            }

            if different_hue > 1 || high_contrast > 1 {
                return true;
            }
        }
    }

    equivalent < 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::Preset;
    use resemble_core::color;

    fn image(w: u32, h: u32, f: impl Fn(u32, u32) -> u32) -> Pix {
        let mut pm = Pix::new(w, h).unwrap().to_mut();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel_unchecked(x, y, f(x, y));
            }
        }
        pm.into()
    }

    fn source(pix: &Pix, x: u32, y: u32) -> PixelInfo {
        PixelInfo::at(pix, x, y).unwrap().with_brightness()
    }

    #[test]
    fn test_isolated_dot_is_antialiased() {
        // White dot on black: every neighbor is high-contrast
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                color::compose_rgb(255, 255, 255)
            } else {
                color::compose_rgb(0, 0, 0)
            }
        });
        assert!(is_antialiased(&source(&pix, 1, 1), &pix, 1, 1, &tol));
    }

    #[test]
    fn test_hue_ring_is_antialiased() {
        // Red center, blue ring of the same brightness band: hue differs
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(3, 3, |x, y| {
            if (x, y) == (1, 1) {
                color::compose_rgb(200, 0, 0)
            } else {
                color::compose_rgb(0, 0, 200)
            }
        });
        assert!(is_antialiased(&source(&pix, 1, 1), &pix, 1, 1, &tol));
    }

    #[test]
    fn test_flat_region_is_not_antialiased() {
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(3, 3, |_, _| color::compose_rgb(90, 90, 90));
        assert!(!is_antialiased(&source(&pix, 1, 1), &pix, 1, 1, &tol));
    }

    #[test]
    fn test_two_equal_neighbors_are_enough() {
        // Exactly two neighbors match; the rest differ only slightly
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(3, 3, |x, y| match (x, y) {
            (1, 1) | (0, 0) | (2, 2) => color::compose_rgb(100, 100, 100),
            _ => color::compose_rgb(110, 110, 110),
        });
        assert!(!is_antialiased(&source(&pix, 1, 1), &pix, 1, 1, &tol));
    }

    #[test]
    fn test_one_equal_neighbor_is_antialiased() {
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(3, 3, |x, y| match (x, y) {
            (1, 1) | (0, 0) => color::compose_rgb(100, 100, 100),
            _ => color::compose_rgb(110, 110, 110),
        });
        assert!(is_antialiased(&source(&pix, 1, 1), &pix, 1, 1, &tol));
    }

    #[test]
    fn test_corner_skips_missing_neighbors() {
        // Corner pixel of a flat image has three neighbors, all equal
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(4, 4, |_, _| color::compose_rgb(30, 60, 90));
        assert!(!is_antialiased(&source(&pix, 0, 0), &pix, 0, 0, &tol));
        assert!(!is_antialiased(&source(&pix, 3, 3), &pix, 3, 3, &tol));
    }

    #[test]
    fn test_single_pixel_image_is_antialiased() {
        // No neighbors at all: fewer than two equivalents
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(1, 1, |_, _| color::compose_rgb(30, 60, 90));
        assert!(is_antialiased(&source(&pix, 0, 0), &pix, 0, 0, &tol));
    }

    #[test]
    fn test_does_not_wrap_across_rows() {
        // 2x2: pixel (1, 0) must not see (0, 1) as its right neighbor
        let tol = ToleranceProfile::from_preset(Preset::IgnoreAntialiasing);
        let pix = image(2, 2, |x, _| {
            if x == 1 {
                color::compose_rgb(50, 50, 50)
            } else {
                color::compose_rgb(60, 60, 60)
            }
        });
        // Only (1, 1) is an equivalent neighbor of (1, 0)
        assert!(is_antialiased(&source(&pix, 1, 0), &pix, 1, 0, &tol));
    }
}
