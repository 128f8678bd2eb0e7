// SPDX-License-Identifier: MPL-2.0
//! Zoom scale management
//!
//! The wall is zoomed by a single uniform factor. Pinch and wheel zoom both go
//! through [`ViewScale`], which keeps the factor inside `[MIN_SCALE, MAX_SCALE]`.

pub use crate::config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_FACTOR};

/// Viewport zoom factor, guaranteed to be within valid range (0.5–2.0).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewScale(f32);

impl ViewScale {
    /// Creates a new scale, clamping the value to the valid range.
    /// Non-finite input falls back to the default scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(MIN_SCALE, MAX_SCALE))
        } else {
            Self::default()
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a percentage (e.g., 1.0 → 100%).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Multiplies the scale by `factor`, clamping the result.
    #[must_use]
    pub fn multiplied(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }

    /// Scale after `lines` wheel notches (negative lines zoom out).
    #[must_use]
    pub fn after_wheel(self, lines: f32) -> Self {
        self.multiplied(WHEEL_ZOOM_FACTOR.powf(lines))
    }
}

impl Default for ViewScale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_scale_is_one() {
        assert_abs_diff_eq!(ViewScale::default().value(), 1.0);
    }

    #[test]
    fn new_clamps_to_range() {
        assert_abs_diff_eq!(ViewScale::new(0.1).value(), MIN_SCALE);
        assert_abs_diff_eq!(ViewScale::new(9.0).value(), MAX_SCALE);
        assert_abs_diff_eq!(ViewScale::new(1.5).value(), 1.5);
    }

    #[test]
    fn non_finite_scale_falls_back_to_default() {
        assert_eq!(ViewScale::new(f32::NAN), ViewScale::default());
        assert_eq!(ViewScale::new(f32::INFINITY), ViewScale::default());
    }

    #[test]
    fn wheel_zoom_multiplies_per_line() {
        let scale = ViewScale::default().after_wheel(1.0);
        assert_abs_diff_eq!(scale.value(), WHEEL_ZOOM_FACTOR);

        let back = scale.after_wheel(-1.0);
        assert_abs_diff_eq!(back.value(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn wheel_zoom_stops_at_bounds() {
        let scale = ViewScale::default().after_wheel(100.0);
        assert_abs_diff_eq!(scale.value(), MAX_SCALE);
        let scale = ViewScale::default().after_wheel(-100.0);
        assert_abs_diff_eq!(scale.value(), MIN_SCALE);
    }

    #[test]
    fn format_number_trims_decimals() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(110.00001), "110");
        assert_eq!(format_number(72.5), "72.5");
    }
}
