//! Raster analysis
//!
//! This module drives a full comparison of two rasters:
//!
//! - builds the comparison frame (elementwise max of both sizes)
//! - walks every coordinate, optionally skipping sampled rows and columns
//! - classifies each pixel pair and writes exactly one output pixel
//! - accumulates the mismatch count and timing into a [`DiffResult`]
//!
//! It also exposes single-raster analysis through [`analyze`].

use crate::antialias::is_antialiased;
use crate::composite::DiffCompositor;
use crate::error::CompareResult;
use crate::mask::RegionMask;
use crate::options::CompareOptions;
use crate::pixel::PixelInfo;
use resemble_core::{ImageStats, Pix};
use std::time::Instant;

/// Signed size difference between the first and second raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionDifference {
    pub width: i64,
    pub height: i64,
}

/// Outcome of comparing two rasters.
#[derive(Debug, Clone)]
pub struct DiffResult {
    /// Number of analyzed pairs classified as mismatches
    pub mismatch_count: u64,
    /// Pixel count of the comparison frame
    pub total_pixels: u64,
    /// `mismatch_count / total_pixels * 100`, unrounded
    pub mismatch_percentage: f64,
    /// Wall time spent in the traversal
    pub analysis_time_millis: u64,
    /// True if both rasters have the same width and height
    pub is_same_dimensions: bool,
    /// First raster's size minus the second's
    pub dimension_difference: DimensionDifference,
    diff_image: Pix,
}

impl DiffResult {
    /// Mismatch percentage formatted with two decimals, e.g. `"12.50"`.
    pub fn mismatch_percentage_string(&self) -> String {
        format!("{:.2}", self.mismatch_percentage)
    }

    /// Mismatch percentage rounded to two decimals.
    pub fn mismatch_percentage_rounded(&self) -> f64 {
        (self.mismatch_percentage * 100.0).round() / 100.0
    }

    /// The composited diff raster, sized to the comparison frame.
    pub fn diff_image(&self) -> &Pix {
        &self.diff_image
    }

    /// Take ownership of the diff raster.
    pub fn into_diff_image(self) -> Pix {
        self.diff_image
    }
}

/// Compare two rasters.
///
/// Every coordinate of the frame where both rasters have a pixel receives
/// exactly one output write. Coordinates covered by only one raster, and
/// coordinates skipped by large-image sampling, stay transparent black and
/// are never counted. The percentage is always taken over the full frame.
///
/// # Errors
///
/// Returns an error only if the output frame cannot be allocated.
pub fn compare(a: &Pix, b: &Pix, options: &CompareOptions) -> CompareResult<DiffResult> {
    let start = Instant::now();

    let width = a.width().max(b.width());
    let height = a.height().max(b.height());
    let stride = options.sampling_stride(width, height);

    log::debug!(
        "comparing {}x{} with {}x{} in a {}x{} frame (tolerance {:?}, sampling stride {:?})",
        a.width(),
        a.height(),
        b.width(),
        b.height(),
        width,
        height,
        options.tolerance,
        stride
    );

    let tolerance = &options.tolerance;
    let mask = RegionMask::new(&options.ignore_regions);
    let mut out = DiffCompositor::new(
        Pix::new(width, height)?.to_mut(),
        options.output.transparency,
        options.output.error_style,
        options.output.error_color,
    );
    let mut mismatch_count = 0u64;

    for y in 0..height {
        for x in 0..width {
            if stride.is_some_and(|s| y % s == 0 || x % s == 0) {
                continue;
            }

            let (Some(p1), Some(p2)) = (PixelInfo::at(a, x, y), PixelInfo::at(b, x, y)) else {
                continue;
            };

            if mask.is_masked(x, y) {
                out.copy_grayscale_pixel(x, y, &p2);
                continue;
            }

            if tolerance.ignore_colors {
                let p1 = p1.with_brightness();
                let p2 = p2.with_brightness();
                if tolerance.is_pixel_brightness_similar(&p1, &p2) {
                    out.copy_grayscale_pixel(x, y, &p2);
                } else {
                    out.error_pixel(x, y, &p1, &p2);
                    mismatch_count += 1;
                }
                continue;
            }

            if tolerance.is_rgb_similar(&p1, &p2) {
                out.copy_pixel(x, y, &p1);
                continue;
            }

            if tolerance.ignore_antialiasing {
                let p1 = p1.with_brightness();
                let p2 = p2.with_brightness();
                if is_antialiased(&p1, a, x, y, tolerance) || is_antialiased(&p2, b, x, y, tolerance)
                {
                    if tolerance.is_pixel_brightness_similar(&p1, &p2) {
                        out.copy_grayscale_pixel(x, y, &p2);
                    } else {
                        out.error_pixel(x, y, &p1, &p2);
                        mismatch_count += 1;
                    }
                    continue;
                }
            }

            out.error_pixel(x, y, &p1, &p2);
            mismatch_count += 1;
        }
    }

    let total_pixels = width as u64 * height as u64;
    let mismatch_percentage = mismatch_count as f64 / total_pixels as f64 * 100.0;
    let analysis_time_millis = start.elapsed().as_millis() as u64;

    log::info!(
        "{} mismatching pixels of {} ({:.2}%) in {} ms",
        mismatch_count,
        total_pixels,
        mismatch_percentage,
        analysis_time_millis
    );

    Ok(DiffResult {
        mismatch_count,
        total_pixels,
        mismatch_percentage,
        analysis_time_millis,
        is_same_dimensions: a.sizes_equal(b),
        dimension_difference: DimensionDifference {
            width: a.width() as i64 - b.width() as i64,
            height: a.height() as i64 - b.height() as i64,
        },
        diff_image: out.into_frame().into(),
    })
}

/// Summary statistics of a single raster.
pub fn analyze(pix: &Pix) -> ImageStats {
    let stats = pix.summary_stats();
    log::info!(
        "analyzed {}x{} raster: brightness {}%, white {}%, black {}%",
        pix.width(),
        pix.height(),
        stats.brightness,
        stats.white,
        stats.black
    );
    stats
}
