// SPDX-License-Identifier: MPL-2.0
//! Ordered set of attachment items in display (paging) order.
//!
//! Neighbor lookups never wrap: asking for the item after the last one (or
//! before the first one) yields `None`, which the paging layer treats as a
//! no-op navigation.

use super::{Attachment, AttachmentId, AttachmentItem};

/// Ordered, duplicate-free sequence of [`AttachmentItem`]s.
#[derive(Debug, Clone, Default)]
pub struct AttachmentItemCollection {
    items: Vec<AttachmentItem>,
}

impl AttachmentItemCollection {
    /// Builds a collection, keeping the first occurrence of each attachment.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<AttachmentItem>,
    {
        let mut collection = Self::default();
        for item in items {
            collection.push(item.into());
        }
        collection
    }

    fn push(&mut self, item: AttachmentItem) -> bool {
        if self.contains(item.id()) {
            tracing::warn!(id = %item.id(), "skipping duplicate attachment");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Appends new attachments at the end, skipping ones already present.
    ///
    /// Returns the ids that were actually added, in order.
    pub fn append(&mut self, attachments: Vec<Attachment>) -> Vec<AttachmentId> {
        attachments
            .into_iter()
            .map(AttachmentItem::new)
            .filter_map(|item| {
                let id = item.id();
                self.push(item).then_some(id)
            })
            .collect()
    }

    /// Read-only view of the ordered items.
    pub fn items(&self) -> &[AttachmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&AttachmentItem> {
        self.items.first()
    }

    pub fn contains(&self, id: AttachmentId) -> bool {
        self.position(id).is_some()
    }

    /// Display index of `id`, if it is a member.
    pub fn position(&self, id: AttachmentId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: AttachmentId) -> Option<&AttachmentItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: AttachmentId) -> Option<&mut AttachmentItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// The item displayed right after `id`, or `None` at the end.
    pub fn item_after(&self, id: AttachmentId) -> Option<&AttachmentItem> {
        let index = self.member_position(id)?;
        self.items.get(index + 1)
    }

    /// The item displayed right before `id`, or `None` at the start.
    pub fn item_before(&self, id: AttachmentId) -> Option<&AttachmentItem> {
        let index = self.member_position(id)?;
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// Removes `id` if present, keeping the order of the remaining items.
    ///
    /// Removing an absent id is a no-op.
    pub fn remove(&mut self, id: AttachmentId) -> Option<AttachmentItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Consumes the collection, returning the attachments with their
    /// captions applied.
    #[must_use]
    pub fn into_attachments(self, max_caption_bytes: usize) -> Vec<Attachment> {
        self.items
            .into_iter()
            .map(|item| item.into_attachment(max_caption_bytes))
            .collect()
    }

    fn member_position(&self, id: AttachmentId) -> Option<usize> {
        let position = self.position(id);
        if position.is_none() {
            tracing::error!(%id, "neighbor lookup for an attachment outside the collection");
        }
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_of(names: &[&str]) -> AttachmentItemCollection {
        AttachmentItemCollection::new(names.iter().map(|name| Attachment::from_path(*name)))
    }

    fn ids(collection: &AttachmentItemCollection) -> Vec<AttachmentId> {
        collection.items().iter().map(AttachmentItem::id).collect()
    }

    #[test]
    fn removal_preserves_relative_order() {
        let mut collection = collection_of(&["a.png", "b.png", "c.png", "d.png"]);
        let before = ids(&collection);

        for removed in [before[1], before[0]] {
            collection.remove(removed);
            let expected: Vec<_> = before
                .iter()
                .copied()
                .filter(|id| collection.contains(*id))
                .collect();
            assert_eq!(ids(&collection), expected);
        }
        assert_eq!(ids(&collection), vec![before[2], before[3]]);
    }

    #[test]
    fn removing_absent_item_is_noop() {
        let mut collection = collection_of(&["a.png", "b.png"]);
        let first = ids(&collection)[0];

        assert!(collection.remove(first).is_some());
        assert!(collection.remove(first).is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn neighbors_are_symmetric() {
        let collection = collection_of(&["a.png", "b.mp4", "c.pdf", "d.mp3"]);

        for item in collection.items() {
            if let Some(next) = collection.item_after(item.id()) {
                let back = collection.item_before(next.id()).map(AttachmentItem::id);
                assert_eq!(back, Some(item.id()));
            }
        }
    }

    #[test]
    fn boundaries_have_no_neighbor() {
        let collection = collection_of(&["a.png", "b.png", "c.png"]);
        let ids = ids(&collection);

        assert!(collection.item_before(ids[0]).is_none());
        assert!(collection.item_after(ids[2]).is_none());
        assert_eq!(collection.item_after(ids[0]).map(AttachmentItem::id), Some(ids[1]));
    }

    #[test]
    fn non_member_lookup_returns_none() {
        let collection = collection_of(&["a.png", "b.png"]);
        let stranger = Attachment::from_path("x.png");

        assert!(collection.item_after(stranger.id()).is_none());
        assert!(collection.item_before(stranger.id()).is_none());
    }

    #[test]
    fn duplicates_are_skipped() {
        let attachment = Attachment::from_path("a.png");
        let collection =
            AttachmentItemCollection::new(vec![attachment.clone(), attachment.clone()]);
        assert_eq!(collection.len(), 1);

        let mut collection = collection;
        let other = Attachment::from_path("b.png");
        let added = collection.append(vec![attachment, other.clone()]);
        assert_eq!(added, vec![other.id()]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn into_attachments_keeps_order_and_captions() {
        let mut collection = collection_of(&["a.png", "b.png"]);
        let second = ids(&collection)[1];
        if let Some(item) = collection.get_mut(second) {
            item.set_caption("second");
        }

        let attachments = collection.into_attachments(64);
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].caption(), None);
        assert_eq!(attachments[1].caption(), Some("second"));
    }
}
