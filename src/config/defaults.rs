// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Viewport zoom bounds and wheel zoom step
//! - **Layout**: Tile spacing and column breakpoints
//! - **Interaction**: Click threshold and wheel scrolling

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Default viewport scale when the wall is first shown.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum viewport scale reachable by pinch or wheel zoom.
pub const MIN_SCALE: f32 = 0.5;

/// Maximum viewport scale reachable by pinch or wheel zoom.
pub const MAX_SCALE: f32 = 2.0;

/// Scale multiplier applied per wheel line while Ctrl/Cmd is held.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Spacing between tiles and around the grid (in logical pixels).
pub const DEFAULT_IMAGE_GAP_PX: f32 = 5.0;

/// Smallest configurable tile gap.
pub const MIN_IMAGE_GAP_PX: f32 = 0.0;

/// Largest configurable tile gap.
pub const MAX_IMAGE_GAP_PX: f32 = 64.0;

/// Viewports narrower than this get a single column.
pub const SINGLE_COLUMN_MAX_WIDTH: f32 = 600.0;

/// Viewports narrower than this (and at least [`SINGLE_COLUMN_MAX_WIDTH`]) get
/// [`MEDIUM_COLUMN_COUNT`] columns. Anything wider gets [`WIDE_COLUMN_COUNT`].
pub const MEDIUM_COLUMNS_MAX_WIDTH: f32 = 1200.0;

/// Column count for medium-width viewports.
pub const MEDIUM_COLUMN_COUNT: usize = 3;

/// Column count for wide viewports.
pub const WIDE_COLUMN_COUNT: usize = 7;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Maximum pointer travel (in screen pixels) for a release to count as a click.
pub const CLICK_THRESHOLD_PX: f32 = 5.0;

/// Pixels panned per wheel "line" for devices that report line deltas.
pub const WHEEL_LINE_PX: f32 = 40.0;

/// Two-finger distances below this are too small to derive a pinch ratio from.
pub const MIN_PINCH_DISTANCE_PX: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);

    // Layout validation
    assert!(MIN_IMAGE_GAP_PX >= 0.0);
    assert!(MAX_IMAGE_GAP_PX > MIN_IMAGE_GAP_PX);
    assert!(DEFAULT_IMAGE_GAP_PX >= MIN_IMAGE_GAP_PX);
    assert!(DEFAULT_IMAGE_GAP_PX <= MAX_IMAGE_GAP_PX);
    assert!(SINGLE_COLUMN_MAX_WIDTH < MEDIUM_COLUMNS_MAX_WIDTH);
    assert!(MEDIUM_COLUMN_COUNT > 1);
    assert!(WIDE_COLUMN_COUNT > MEDIUM_COLUMN_COUNT);

    // Interaction validation
    assert!(CLICK_THRESHOLD_PX > 0.0);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(MIN_PINCH_DISTANCE_PX > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE, 1.0);
        assert_eq!(MIN_SCALE, 0.5);
        assert_eq!(MAX_SCALE, 2.0);
    }

    #[test]
    fn gap_defaults_are_valid() {
        assert_eq!(DEFAULT_IMAGE_GAP_PX, 5.0);
        assert!(DEFAULT_IMAGE_GAP_PX >= MIN_IMAGE_GAP_PX);
        assert!(DEFAULT_IMAGE_GAP_PX <= MAX_IMAGE_GAP_PX);
    }

    #[test]
    fn click_threshold_is_five_pixels() {
        assert_eq!(CLICK_THRESHOLD_PX, 5.0);
    }
}
