// SPDX-License-Identifier: MPL-2.0
//! Thumbnail generation for the rail.
//!
//! Decoding happens on the blocking pool; the result is delivered back to the
//! update loop as a message, so nothing here touches shared UI state.

use super::{Attachment, ThumbnailSize};
use crate::error::ThumbnailError;
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};
use std::path::Path;

/// A decoded, downscaled still image ready for display.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub size: ThumbnailSize,
    pub handle: image::Handle,
}

/// Decodes `path` and shrinks it so that its longest edge is at most
/// `max_edge` pixels, preserving the aspect ratio.
///
/// # Errors
///
/// Returns [`ThumbnailError::IoError`] if the file cannot be read and
/// [`ThumbnailError::DecodingFailed`] if it is not a decodable image.
pub fn load_from_path(path: &Path, max_edge: u32) -> Result<Thumbnail, ThumbnailError> {
    let decoded = image_rs::open(path).map_err(|err| match err {
        ImageError::IoError(io) => ThumbnailError::IoError(io.to_string()),
        other => ThumbnailError::DecodingFailed(other.to_string()),
    })?;

    let max_edge = max_edge.max(1);
    let scaled = decoded.thumbnail(max_edge, max_edge);
    let (width, height) = scaled.dimensions();
    let pixels = scaled.to_rgba8().into_vec();

    Ok(Thumbnail {
        size: ThumbnailSize::new(width, height),
        handle: image::Handle::from_rgba(width, height, pixels),
    })
}

/// Synchronous thumbnail request for an attachment.
///
/// # Errors
///
/// Fails with [`ThumbnailError::InvalidAttachment`] for attachments carrying
/// an error and [`ThumbnailError::NotRenderable`] when the attachment has no
/// still image, before touching the file system.
pub fn load_thumbnail(attachment: &Attachment, max_edge: u32) -> Result<Thumbnail, ThumbnailError> {
    if attachment.has_error() {
        return Err(ThumbnailError::InvalidAttachment);
    }
    if !attachment.has_still_image() {
        return Err(ThumbnailError::NotRenderable);
    }
    load_from_path(attachment.path(), max_edge)
}

/// Asynchronous thumbnail request, decoding on the tokio blocking pool.
///
/// # Errors
///
/// Same as [`load_thumbnail`]; a panicked or cancelled decode task is
/// reported as [`ThumbnailError::DecodingFailed`].
pub async fn load(attachment: Attachment, max_edge: u32) -> Result<Thumbnail, ThumbnailError> {
    tokio::task::spawn_blocking(move || load_thumbnail(&attachment, max_edge))
        .await
        .map_err(|err| ThumbnailError::DecodingFailed(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
            .save(&path)
            .expect("failed to write test png");
        path
    }

    #[test]
    fn thumbnail_fits_within_max_edge() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "wide.png", 200, 100);

        let thumbnail = load_from_path(&path, 50).expect("thumbnail should load");
        assert_eq!(thumbnail.size, ThumbnailSize::new(50, 25));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.png"), 64);
        assert!(matches!(result, Err(ThumbnailError::IoError(_))));
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").expect("write");

        let result = load_from_path(&path, 64);
        assert!(matches!(result, Err(ThumbnailError::DecodingFailed(_))));
    }

    #[test]
    fn non_image_attachment_is_not_renderable() {
        let audio = Attachment::from_path("voice.opus");
        assert_eq!(
            load_thumbnail(&audio, 64).map(|t| t.size),
            Err(ThumbnailError::NotRenderable)
        );
    }

    #[test]
    fn errored_attachment_is_rejected() {
        let broken = Attachment::from_path("photo.png").with_error("upload prep failed");
        assert_eq!(
            load_thumbnail(&broken, 64).map(|t| t.size),
            Err(ThumbnailError::InvalidAttachment)
        );
    }

    #[tokio::test]
    async fn async_load_decodes_off_thread() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "square.png", 32, 32);

        let thumbnail = load(Attachment::from_path(path), 16)
            .await
            .expect("thumbnail should load");
        assert_eq!(thumbnail.size, ThumbnailSize::new(16, 16));
    }
}
