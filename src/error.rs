// SPDX-License-Identifier: MPL-2.0
use crate::generation::GenerationError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// File extension is not one of the accepted raster formats.
    UnsupportedFileType(String),
    /// File bytes could not be decoded as an image.
    InvalidImage(String),
    Generation(GenerationError),
}

impl Error {
    /// Returns the i18n message key for the user-facing notification.
    ///
    /// The raw error detail is never shown to the user; it is only logged.
    pub fn notification_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-io-error",
            Error::Config(_) => "notification-config-error",
            Error::UnsupportedFileType(_) => "notification-unsupported-file-type",
            Error::InvalidImage(_) => "notification-invalid-image",
            Error::Generation(_) => "notification-generation-failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnsupportedFileType(ext) => write!(f, "Unsupported file type: {}", ext),
            Error::InvalidImage(e) => write!(f, "Invalid image: {}", e),
            Error::Generation(e) => write!(f, "Generation Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::InvalidImage(err.to_string())
    }
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        Error::Generation(err)
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
