// SPDX-License-Identifier: MPL-2.0
//! Attachments pending approval and the UI-facing items wrapping them.
//!
//! An [`Attachment`] is the payload supplied by the host. It is identified by
//! an opaque [`AttachmentId`] handed out at creation time, so collections and
//! caches never rely on reference identity.

pub mod collection;
pub mod item;
pub mod thumbnail;

pub use collection::AttachmentItemCollection;
pub use item::{AttachmentItem, ThumbnailSize};
pub use thumbnail::Thumbnail;

use crate::ui::approval::caption::truncate_to_byte_limit;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_ATTACHMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an attachment for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(u64);

impl AttachmentId {
    fn next() -> Self {
        Self(NEXT_ATTACHMENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Media kinds the approval surface distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Video,
    Audio,
    /// Anything else, shown as a generic file page.
    File,
}

impl AttachmentKind {
    /// Detects the kind from the file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
        else {
            return AttachmentKind::File;
        };

        if extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentKind::Image
        } else if extensions::VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentKind::Video
        } else if extensions::AUDIO_EXTENSIONS.contains(&ext.as_str()) {
            AttachmentKind::Audio
        } else {
            AttachmentKind::File
        }
    }
}

/// Supported media extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

    /// Audio file extensions
    pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "m4a", "aac", "ogg", "opus", "wav", "flac"];
}

/// One media or file payload pending send.
#[derive(Debug, Clone)]
pub struct Attachment {
    id: AttachmentId,
    path: PathBuf,
    kind: AttachmentKind,
    caption: Option<String>,
    duration: Option<Duration>,
    error: Option<String>,
}

impl Attachment {
    /// Creates an attachment for `path`, detecting its kind from the extension.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = AttachmentKind::from_path(&path);
        Self::new(path, kind)
    }

    /// Creates an attachment with an explicit kind.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: AttachmentKind) -> Self {
        Self {
            id: AttachmentId::next(),
            path: path.into(),
            kind,
            caption: None,
            duration: None,
            error: None,
        }
    }

    /// Sets the media duration reported by the host for video or audio.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Marks the attachment as failed (e.g. the host could not prepare it).
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn id(&self) -> AttachmentId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    pub fn is_image(&self) -> bool {
        self.kind == AttachmentKind::Image
    }

    pub fn is_video(&self) -> bool {
        self.kind == AttachmentKind::Video
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Whether a still image can be rendered for this attachment.
    pub fn has_still_image(&self) -> bool {
        self.is_image() && !self.has_error()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Stores a caption, clipped to `max_bytes` on a character boundary.
    /// An empty caption clears the field.
    pub fn set_caption(&mut self, caption: Option<&str>, max_bytes: usize) {
        self.caption = caption
            .map(|text| truncate_to_byte_limit(text, max_bytes))
            .filter(|text| !text.is_empty())
            .map(str::to_string);
    }

    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Attachment::from_path("a.png");
        let b = Attachment::from_path("a.png");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn kind_is_detected_from_extension() {
        assert_eq!(Attachment::from_path("x.JPG").kind(), AttachmentKind::Image);
        assert_eq!(Attachment::from_path("x.webm").kind(), AttachmentKind::Video);
        assert_eq!(Attachment::from_path("x.opus").kind(), AttachmentKind::Audio);
        assert_eq!(Attachment::from_path("x.pdf").kind(), AttachmentKind::File);
        assert_eq!(Attachment::from_path("README").kind(), AttachmentKind::File);
    }

    #[test]
    fn media_kind_queries() {
        let video = Attachment::from_path("clip.mp4").with_duration(Duration::from_secs(3));
        assert!(video.is_video());
        assert!(!video.is_image());
        assert_eq!(video.duration(), Some(Duration::from_secs(3)));
        assert!(!video.has_still_image());

        let broken = Attachment::from_path("photo.png").with_error("unreadable");
        assert!(broken.has_error());
        assert!(!broken.has_still_image());
        assert_eq!(broken.error(), Some("unreadable"));
    }

    #[test]
    fn caption_is_bounded_in_bytes() {
        let mut attachment = Attachment::from_path("a.png");
        attachment.set_caption(Some("héllo"), 2);
        // "hé" would be 3 bytes, so only "h" fits.
        assert_eq!(attachment.caption(), Some("h"));

        attachment.set_caption(Some(""), 10);
        assert_eq!(attachment.caption(), None);
    }

    #[test]
    fn file_name_strips_directories() {
        let attachment = Attachment::from_path("/tmp/photos/cat.png");
        assert_eq!(attachment.file_name(), "cat.png");
    }
}
