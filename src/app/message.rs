// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::{detail, wall};
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Wall(wall::Message),
    Detail(detail::Message),
    /// Every source finished loading, or the first failure.
    ImagesLoaded(Result<Vec<ImageData>, Error>),
    /// The window was opened or resized.
    WindowResized(Size),
    /// Escape pressed and not consumed by a widget.
    EscapePressed,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image files, or directories of images, to show instead of the
    /// configured list.
    pub paths: Vec<PathBuf>,
    /// Shuffle the draw order even if the config file does not ask for it.
    pub shuffle: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_MOSAIC_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
