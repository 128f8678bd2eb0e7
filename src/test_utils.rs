// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and image fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

use std::path::{Path, PathBuf};

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Writes a solid-color PNG of the given size and returns its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([40, 90, 160, 255]))
        .save(&path)
        .expect("failed to write test PNG");
    path
}
