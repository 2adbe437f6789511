//! Tolerance profiles
//!
//! A [`ToleranceProfile`] holds the six per-channel and brightness
//! thresholds plus the two mode switches that steer the decision tree.
//! Profiles come from one of the named [`Preset`]s or from raw values.
//!
//! All thresholds are exclusive: two values are similar when their
//! absolute difference is strictly below the threshold.

/// Named similarity presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Exact match: every channel must be equal
    IgnoreNothing,
    /// Small drift in any channel is tolerated
    #[default]
    IgnoreLess,
    /// Wider tolerances plus the anti-aliasing detector
    IgnoreAntialiasing,
    /// Compare brightness and alpha only
    IgnoreColors,
}

/// Thresholds and mode flags for one comparison.
///
/// Values outside what makes sense for 8-bit channels are not rejected;
/// they simply make the corresponding predicate always or never hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceProfile {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    /// Brightness tolerance used by brightness similarity
    pub min_brightness: u8,
    /// Brightness gap above which two pixels are contrasting
    pub max_brightness: u8,
    /// Run the anti-aliasing detector on mismatching pixels
    pub ignore_antialiasing: bool,
    /// Compare brightness instead of color channels
    pub ignore_colors: bool,
}

impl ToleranceProfile {
    /// Build the profile for a named preset.
    pub const fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::IgnoreNothing => Self::custom(0, 0, 0, 0, 0, 255),
            Preset::IgnoreLess => Self::custom(16, 16, 16, 16, 16, 240),
            Preset::IgnoreAntialiasing => Self {
                ignore_antialiasing: true,
                ..Self::custom(32, 32, 32, 32, 64, 96)
            },
            Preset::IgnoreColors => Self {
                ignore_colors: true,
                ..Self::custom(16, 16, 16, 16, 16, 240)
            },
        }
    }

    /// Build a raw profile with both mode switches off.
    pub const fn custom(
        red: u8,
        green: u8,
        blue: u8,
        alpha: u8,
        min_brightness: u8,
        max_brightness: u8,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            min_brightness,
            max_brightness,
            ignore_antialiasing: false,
            ignore_colors: false,
        }
    }

    /// Replace every threshold and both flags with those of `preset`.
    pub fn apply_preset(&mut self, preset: Preset) {
        *self = Self::from_preset(preset);
    }

    /// Override the red tolerance.
    pub fn with_red(mut self, red: u8) -> Self {
        self.red = red;
        self
    }

    /// Override the green tolerance.
    pub fn with_green(mut self, green: u8) -> Self {
        self.green = green;
        self
    }

    /// Override the blue tolerance.
    pub fn with_blue(mut self, blue: u8) -> Self {
        self.blue = blue;
        self
    }

    /// Override the alpha tolerance.
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Override the brightness similarity tolerance.
    pub fn with_min_brightness(mut self, min_brightness: u8) -> Self {
        self.min_brightness = min_brightness;
        self
    }

    /// Override the contrast threshold.
    pub fn with_max_brightness(mut self, max_brightness: u8) -> Self {
        self.max_brightness = max_brightness;
        self
    }

    /// Toggle the anti-aliasing detector.
    pub fn with_ignore_antialiasing(mut self, on: bool) -> Self {
        self.ignore_antialiasing = on;
        self
    }

    /// Toggle brightness-only comparison.
    pub fn with_ignore_colors(mut self, on: bool) -> Self {
        self.ignore_colors = on;
        self
    }
}

impl Default for ToleranceProfile {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl From<Preset> for ToleranceProfile {
    fn from(preset: Preset) -> Self {
        Self::from_preset(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ignore_less() {
        let t = ToleranceProfile::default();
        assert_eq!(t, ToleranceProfile::from_preset(Preset::IgnoreLess));
        assert_eq!((t.red, t.min_brightness, t.max_brightness), (16, 16, 240));
        assert!(!t.ignore_antialiasing && !t.ignore_colors);
    }

    #[test]
    fn test_ignore_nothing_values() {
        let t = ToleranceProfile::from_preset(Preset::IgnoreNothing);
        assert_eq!(
            (t.red, t.green, t.blue, t.alpha, t.min_brightness, t.max_brightness),
            (0, 0, 0, 0, 0, 255)
        );
    }

    #[test]
    fn test_apply_preset_resets_everything() {
        let mut t = ToleranceProfile::custom(1, 2, 3, 4, 5, 6)
            .with_ignore_antialiasing(true)
            .with_ignore_colors(true);
        t.apply_preset(Preset::IgnoreAntialiasing);
        assert_eq!(t, ToleranceProfile::from_preset(Preset::IgnoreAntialiasing));
        assert!(t.ignore_antialiasing);
        assert!(!t.ignore_colors);
        assert_eq!((t.red, t.min_brightness, t.max_brightness), (32, 64, 96));

        t.apply_preset(Preset::IgnoreColors);
        assert!(t.ignore_colors);
        assert!(!t.ignore_antialiasing);
        assert_eq!((t.alpha, t.min_brightness, t.max_brightness), (16, 16, 240));
    }

    #[test]
    fn test_field_overrides() {
        let t = ToleranceProfile::default().with_red(0).with_max_brightness(10);
        assert_eq!(t.red, 0);
        assert_eq!(t.max_brightness, 10);
        assert_eq!(t.green, 16);
    }
}
