//! resemble-compare - Tolerance-aware image comparison
//!
//! Compares two rasters pixel by pixel and produces a diff raster plus
//! mismatch statistics. Each coordinate goes through one decision path:
//!
//! 1. ignored regions become a grayscale copy of the second image
//! 2. in color-blind mode only brightness is compared
//! 3. pixels within the per-channel tolerances keep the first image's color
//! 4. with anti-aliasing detection on, edge-smoothing artifacts are
//!    forgiven if their brightness is close enough
//! 5. everything else is painted with the configured error style
//!
//! # Example
//!
//! ```
//! use resemble_compare::{CompareOptions, compare};
//! use resemble_core::Pix;
//!
//! let a = Pix::new(8, 8).unwrap();
//! let b = Pix::new(8, 8).unwrap();
//! let result = compare(&a, &b, &CompareOptions::new().ignore_nothing()).unwrap();
//! assert_eq!(result.mismatch_percentage_string(), "0.00");
//! ```

pub mod analyze;
pub mod antialias;
pub mod composite;
mod error;
pub mod mask;
pub mod options;
pub mod pixel;
pub mod similarity;
pub mod tolerance;
pub mod visualize;

pub use analyze::{DiffResult, DimensionDifference, analyze, compare};
pub use antialias::is_antialiased;
pub use composite::DiffCompositor;
pub use error::{CompareError, CompareResult};
pub use mask::RegionMask;
pub use options::{CompareOptions, OutputSettings};
pub use pixel::PixelInfo;
pub use similarity::{is_color_similar, is_rgb_same};
pub use tolerance::{Preset, ToleranceProfile};
pub use visualize::{ErrorColor, ErrorStyle, colors_distance};
