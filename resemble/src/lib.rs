//! resemble - Image comparison for visual regression testing
//!
//! Compares two images with configurable tolerances and produces a diff
//! image that highlights what changed, plus mismatch statistics. Also
//! reports simple color statistics for a single image.
//!
//! # Overview
//!
//! - Tolerance presets: exact match, small differences, anti-aliasing
//!   forgiveness, brightness-only comparison
//! - Ignored rectangles
//! - Four error highlight styles
//! - Images of different sizes are compared over their union
//!
//! # Example
//!
//! ```no_run
//! use resemble::{CompareOptions, compare_files};
//!
//! let options = CompareOptions::new()
//!     .ignore_antialiasing()
//!     .ignore_rectangles([[0, 0, 100, 40]]);
//! let result = compare_files("before.png", "after.png", &options).unwrap();
//! println!("{}% different", result.mismatch_percentage_string());
//! resemble::write_diff_image(&result, "diff.png").unwrap();
//! ```

mod error;
mod source;

pub use error::{Error, LoadError, Result, Side};
pub use source::{ImageSource, load_pair};

// Core types used everywhere
pub use resemble_core::{Box, ImageFormat, ImageStats, Pix, PixMut, color};

// Comparison engine
pub use resemble_compare::{
    CompareOptions, DiffResult, DimensionDifference, ErrorColor, ErrorStyle, OutputSettings,
    Preset, ToleranceProfile, analyze, compare,
};

pub use resemble_compare as engine;
pub use resemble_io as io;

use std::path::Path;

/// Load two sources and compare them.
///
/// # Errors
///
/// Returns [`Error::Load`] without analyzing anything if either source
/// fails to load.
pub fn compare_sources(
    a: &ImageSource,
    b: &ImageSource,
    options: &CompareOptions,
) -> Result<DiffResult> {
    let (first, second) = load_pair(a, b)?;
    Ok(compare(&first, &second, options)?)
}

/// Compare two image files.
///
/// # Errors
///
/// See [`compare_sources`].
pub fn compare_files<P, Q>(a: P, b: Q, options: &CompareOptions) -> Result<DiffResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    compare_sources(
        &ImageSource::from(a.as_ref()),
        &ImageSource::from(b.as_ref()),
        options,
    )
}

/// Compare two encoded images held in memory.
///
/// # Errors
///
/// See [`compare_sources`].
pub fn compare_mem(a: &[u8], b: &[u8], options: &CompareOptions) -> Result<DiffResult> {
    compare_sources(&ImageSource::from(a), &ImageSource::from(b), options)
}

/// Color statistics of a single image file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or decoded.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<ImageStats> {
    let pix = resemble_io::read_image(path)?;
    Ok(analyze(&pix))
}

/// Color statistics of a single encoded image held in memory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the buffer cannot be decoded.
pub fn analyze_mem(data: &[u8]) -> Result<ImageStats> {
    let pix = resemble_io::read_image_mem(data)?;
    Ok(analyze(&pix))
}

/// Save the diff image of a comparison as PNG.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or encoded.
pub fn write_diff_image<P: AsRef<Path>>(result: &DiffResult, path: P) -> Result<()> {
    resemble_io::write_image(result.diff_image(), path, ImageFormat::Png)?;
    Ok(())
}

/// Encode the diff image of a comparison as PNG bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if encoding fails.
pub fn diff_image_png(result: &DiffResult) -> Result<Vec<u8>> {
    Ok(resemble_io::write_image_mem(
        result.diff_image(),
        ImageFormat::Png,
    )?)
}
