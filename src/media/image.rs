// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, ImageLoadError, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// A decoded image ready to be drawn on the wall.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Creates a new `ImageData` from encoded bytes (PNG, JPEG, etc.) whose
    /// dimensions are already known.
    #[must_use]
    pub fn from_encoded(encoded_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(encoded_bytes),
            width,
            height,
        }
    }

    /// Natural size in pixels, as used by the layout engine.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized to PNG format using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Io`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
/// - A raster image decodes to zero pixels ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        check_dimensions(path, width, height)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;

        Ok(ImageData::from_encoded(png_data, width, height))
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;

        let (width, height) = img.dimensions();
        check_dimensions(path, width, height)?;

        let pixels = img.to_rgba8().into_vec();

        Ok(ImageData::from_rgba(width, height, pixels))
    }
}

/// Rejects images that would collapse to nothing on the wall.
fn check_dimensions(path: &Path, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::Image(ImageLoadError::new(
            path,
            "image has empty dimensions",
        )));
    }
    Ok(())
}
