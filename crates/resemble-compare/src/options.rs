//! Comparison configuration
//!
//! Everything a comparison reads is carried in a [`CompareOptions`]
//! value; nothing is process-wide. The consuming builder methods mirror
//! the usual "pick a preset, ignore some regions, compare" chain.

use crate::tolerance::{Preset, ToleranceProfile};
use crate::visualize::{ErrorColor, ErrorStyle};
use resemble_core::Box;

/// Default transparency factor applied to matched pixels.
pub const DEFAULT_TRANSPARENCY: f64 = 1e-6;

/// Default size above which large-image sampling kicks in.
pub const DEFAULT_LARGE_IMAGE_THRESHOLD: u32 = 1200;

/// Diff image rendering settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSettings {
    /// Highlight color for mismatches
    pub error_color: ErrorColor,
    /// Highlight transform for mismatches
    pub error_style: ErrorStyle,
    /// Alpha multiplier (0-1) for matched and ignored pixels
    pub transparency: f64,
    /// Sampling kicks in when either dimension exceeds this; `None` or
    /// `Some(0)` disables sampling
    pub large_image_threshold: Option<u32>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            error_color: ErrorColor::default(),
            error_style: ErrorStyle::default(),
            transparency: DEFAULT_TRANSPARENCY,
            large_image_threshold: Some(DEFAULT_LARGE_IMAGE_THRESHOLD),
        }
    }
}

impl OutputSettings {
    pub fn with_error_color(mut self, error_color: ErrorColor) -> Self {
        self.error_color = error_color;
        self
    }

    pub fn with_error_style(mut self, error_style: ErrorStyle) -> Self {
        self.error_style = error_style;
        self
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_large_image_threshold(mut self, threshold: Option<u32>) -> Self {
        self.large_image_threshold = threshold;
        self
    }
}

/// Full configuration of one comparison.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompareOptions {
    pub tolerance: ToleranceProfile,
    pub output: OutputSettings,
    /// Rectangles excluded from mismatch counting
    pub ignore_regions: Vec<Box>,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a named preset, replacing all tolerances and flags.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.tolerance.apply_preset(preset);
        self
    }

    pub fn ignore_nothing(self) -> Self {
        self.preset(Preset::IgnoreNothing)
    }

    pub fn ignore_less(self) -> Self {
        self.preset(Preset::IgnoreLess)
    }

    pub fn ignore_antialiasing(self) -> Self {
        self.preset(Preset::IgnoreAntialiasing)
    }

    pub fn ignore_colors(self) -> Self {
        self.preset(Preset::IgnoreColors)
    }

    /// Use a raw tolerance profile.
    pub fn tolerance(mut self, tolerance: ToleranceProfile) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the ignored rectangles.
    pub fn ignore_rectangles<I, B>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Box>,
    {
        self.ignore_regions = regions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output(mut self, output: OutputSettings) -> Self {
        self.output = output;
        self
    }

    /// Sampling stride for a frame of the given size, if sampling applies.
    ///
    /// Sampling only runs with anti-aliasing detection on, and only when
    /// the frame is larger than the threshold along some axis.
    pub fn sampling_stride(&self, width: u32, height: u32) -> Option<u32> {
        let threshold = self.output.large_image_threshold.filter(|&t| t > 0)?;
        if self.tolerance.ignore_antialiasing && (width > threshold || height > threshold) {
            Some(LARGE_IMAGE_STRIDE)
        } else {
            None
        }
    }
}

/// Rows and columns whose index is a multiple of this are skipped while sampling.
pub const LARGE_IMAGE_STRIDE: u32 = 6;
