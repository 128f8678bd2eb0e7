// SPDX-License-Identifier: MPL-2.0
//! Image loading for the wall.

pub mod image;
pub mod loader;

pub use image::{load_image, ImageData};
pub use loader::{is_supported_image, load_all, scan_directory};

/// Image file extensions accepted on the command line and in directories.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
];
