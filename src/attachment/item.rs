// SPDX-License-Identifier: MPL-2.0
//! UI-facing wrapper around one attachment.

use super::{Attachment, AttachmentId};
use crate::ui::approval::caption::strip_newlines;
use std::hash::{Hash, Hasher};

/// Rendered thumbnail dimensions, zero until a thumbnail has been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
}

impl ThumbnailSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true once a thumbnail has produced real dimensions.
    #[must_use]
    pub fn is_known(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// An attachment plus the derived state the approval surface mutates.
///
/// Equality and hashing only consider the attachment id: two items wrapping
/// the same attachment are the same item whatever their caption or size.
#[derive(Debug, Clone)]
pub struct AttachmentItem {
    attachment: Attachment,
    caption: Option<String>,
    thumbnail_size: ThumbnailSize,
}

impl AttachmentItem {
    #[must_use]
    pub fn new(attachment: Attachment) -> Self {
        let caption = attachment
            .caption()
            .map(strip_newlines)
            .filter(|caption| !caption.is_empty());
        Self {
            attachment,
            caption,
            thumbnail_size: ThumbnailSize::default(),
        }
    }

    pub fn id(&self) -> AttachmentId {
        self.attachment.id()
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Replaces the caption; an empty string clears it.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        let caption = caption.into();
        self.caption = if caption.is_empty() {
            None
        } else {
            Some(caption)
        };
    }

    pub fn thumbnail_size(&self) -> ThumbnailSize {
        self.thumbnail_size
    }

    pub fn set_thumbnail_size(&mut self, size: ThumbnailSize) {
        self.thumbnail_size = size;
    }

    /// Consumes the item, returning the attachment with the item's caption
    /// applied (clipped to `max_caption_bytes`).
    #[must_use]
    pub fn into_attachment(self, max_caption_bytes: usize) -> Attachment {
        let mut attachment = self.attachment;
        attachment.set_caption(self.caption.as_deref(), max_caption_bytes);
        attachment
    }
}

impl PartialEq for AttachmentItem {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for AttachmentItem {}

impl Hash for AttachmentItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<Attachment> for AttachmentItem {
    fn from(attachment: Attachment) -> Self {
        Self::new(attachment)
    }
}
