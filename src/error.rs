// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(ImageLoadError),
    Svg(String),
    Config(String),
}

/// A single image that failed to load, with the path it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoadError {
    pub path: PathBuf,
    pub message: String,
}

impl ImageLoadError {
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Returns the i18n message key shown to the user for this failure.
    pub fn i18n_key(&self) -> &'static str {
        "error-load-image"
    }
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl Error {
    /// Attaches the offending path to a decode or I/O failure.
    pub fn for_path(self, path: &Path) -> Self {
        match self {
            Error::Io(msg) | Error::Svg(msg) => Error::Image(ImageLoadError::new(path, msg)),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
