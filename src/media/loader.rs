// SPDX-License-Identifier: MPL-2.0
//! Batch loading of the fixed image list shown on the wall.
//!
//! All sources are decoded concurrently on blocking worker threads. The batch
//! resolves once every image is ready and fails as soon as one of them does,
//! so the wall is either complete or replaced by an error state.

use super::image::{load_image, ImageData};
use super::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use futures_util::future::try_join_all;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads every source and returns the images in source order.
///
/// # Errors
///
/// Returns the first failure, tagged with the path of the image that caused it.
pub async fn load_all(sources: Vec<PathBuf>) -> Result<Vec<ImageData>> {
    let tasks = sources.into_iter().map(|path| async move {
        let task_path = path.clone();
        match tokio::task::spawn_blocking(move || load_image(&task_path)).await {
            Ok(result) => result.map_err(|err| err.for_path(&path)),
            Err(join_err) => Err(Error::Io(join_err.to_string()).for_path(&path)),
        }
    });

    try_join_all(tasks).await
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Collects the supported images in `dir`, sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}
