// SPDX-License-Identifier: MPL-2.0
//! Decides which files end up on the wall.
//!
//! Paths given on the command line win. Without any, the `[gallery] images`
//! list from the config file is used; relative entries there are taken
//! relative to the config directory. Directories expand to the images they
//! contain.

use crate::error::Result;
use crate::media::scan_directory;
use std::path::{Path, PathBuf};

/// Builds the ordered list of image files to load.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn resolve_sources(
    cli_paths: &[PathBuf],
    config_images: &[PathBuf],
    config_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    if !cli_paths.is_empty() {
        log::info!("Using {} path(s) from the command line", cli_paths.len());
        return expand(cli_paths.iter().cloned());
    }

    log::info!("Using {} path(s) from the config file", config_images.len());
    expand(config_images.iter().map(|path| match config_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.clone(),
    }))
}

fn expand(paths: impl Iterator<Item = PathBuf>) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = scan_directory(&path)?;
            log::debug!("Found {} image(s) in {}", found.len(), path.display());
            sources.extend(found);
        } else {
            sources.push(path);
        }
    }
    Ok(sources)
}
