// SPDX-License-Identifier: MPL-2.0
//! Page cache for paging between attachment items.
//!
//! # Design
//!
//! - **Id-keyed**: pages are indexed by [`AttachmentId`], never by reference
//! - **At most one page per item**: a hit returns the stored page untouched
//! - **No eviction**: a page lives until its item leaves the collection,
//!   so caption drafts, zoom and playback survive revisits

use super::page::Page;
use crate::attachment::{AttachmentId, AttachmentItem};
use std::collections::HashMap;

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCacheStats {
    /// Number of pages currently cached.
    pub page_count: usize,

    /// Lookups answered from the cache.
    pub hits: u64,

    /// Lookups that built a new page.
    pub misses: u64,

    /// Pages dropped because their item was removed.
    pub discards: u64,
}

impl PageCacheStats {
    /// Returns the hit rate as a percentage (0.0 - 100.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// One page per visited item.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: HashMap<AttachmentId, Page>,
    max_caption_bytes: usize,
    hits: u64,
    misses: u64,
    discards: u64,
}

impl PageCache {
    /// Creates an empty cache. New pages get caption editors bounded by
    /// `max_caption_bytes`.
    #[must_use]
    pub fn new(max_caption_bytes: usize) -> Self {
        Self {
            max_caption_bytes,
            ..Self::default()
        }
    }

    /// Returns the page for `item`, building and storing it on first use.
    pub fn get_or_build(&mut self, item: &AttachmentItem) -> &mut Page {
        let max_caption_bytes = self.max_caption_bytes;
        if self.pages.contains_key(&item.id()) {
            self.hits += 1;
        } else {
            self.misses += 1;
            tracing::debug!(id = %item.id(), "building page");
        }
        self.pages
            .entry(item.id())
            .or_insert_with(|| Page::new(item, max_caption_bytes))
    }

    pub fn get(&self, id: AttachmentId) -> Option<&Page> {
        self.pages.get(&id)
    }

    pub fn get_mut(&mut self, id: AttachmentId) -> Option<&mut Page> {
        self.pages.get_mut(&id)
    }

    pub fn contains(&self, id: AttachmentId) -> bool {
        self.pages.contains_key(&id)
    }

    /// Drops the page of a removed item, stopping any playback on it.
    pub fn discard(&mut self, id: AttachmentId) -> Option<Page> {
        let mut page = self.pages.remove(&id)?;
        page.stop();
        self.discards += 1;
        Some(page)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.values_mut()
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    #[must_use]
    pub fn stats(&self) -> PageCacheStats {
        PageCacheStats {
            page_count: self.pages.len(),
            hits: self.hits,
            misses: self.misses,
            discards: self.discards,
        }
    }
}
