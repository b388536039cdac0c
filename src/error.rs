// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The approval flow was started without any attachment.
    EmptyCollection,
    Thumbnail(ThumbnailError),
    /// The windowing runtime failed to start or crashed.
    Gui(String),
}

/// Failure of an asynchronous thumbnail request.
///
/// These never reach the user as an error: the rail simply shows no
/// thumbnail for the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    /// The attachment kind has no still image (audio, generic file).
    NotRenderable,

    /// The attachment carries an error and cannot be previewed.
    InvalidAttachment,

    /// The file could not be read.
    IoError(String),

    /// The file was read but could not be decoded as an image.
    DecodingFailed(String),
}

impl ThumbnailError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ThumbnailError::NotRenderable => "thumbnail-unavailable",
            ThumbnailError::InvalidAttachment => "thumbnail-invalid-attachment",
            ThumbnailError::IoError(_) => "thumbnail-io-error",
            ThumbnailError::DecodingFailed(_) => "thumbnail-decoding-failed",
        }
    }
}

impl fmt::Display for ThumbnailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailError::NotRenderable => write!(f, "No renderable image"),
            ThumbnailError::InvalidAttachment => write!(f, "Attachment has an error"),
            ThumbnailError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ThumbnailError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::EmptyCollection => write!(f, "Approval flow requires at least one attachment"),
            Error::Thumbnail(e) => write!(f, "Thumbnail Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ThumbnailError> for Error {
    fn from(err: ThumbnailError) -> Self {
        Error::Thumbnail(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn thumbnail_error_wraps_into_error() {
        let err: Error = ThumbnailError::NotRenderable.into();
        assert!(matches!(err, Error::Thumbnail(ThumbnailError::NotRenderable)));
        assert_eq!(format!("{}", err), "Thumbnail Error: No renderable image");
    }

    #[test]
    fn thumbnail_error_i18n_keys() {
        assert_eq!(
            ThumbnailError::NotRenderable.i18n_key(),
            "thumbnail-unavailable"
        );
        assert_eq!(
            ThumbnailError::DecodingFailed("x".into()).i18n_key(),
            "thumbnail-decoding-failed"
        );
    }

    #[test]
    fn empty_collection_display() {
        assert!(format!("{}", Error::EmptyCollection).contains("at least one attachment"));
    }
}
