// SPDX-License-Identifier: MPL-2.0
//! Attachment approval surface.
//!
//! Nested TEA sub-components: each has its own State, Message, Effect and
//! `handle()`; `component.rs` orchestrates them and reports outcomes to the
//! host as effects.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (paging controller)
//!     ├── page_cache  - One page per visited item, keyed by attachment id
//!     │   └── page    - Caption, zoom and playback of one item
//!     │       ├── caption  - Byte-bounded text editing
//!     │       └── playback - Play/pause/scrub state machine
//!     ├── navigation  - Steps, directions and pending transitions
//!     ├── rail        - Thumbnail strip (tap, remove)
//!     └── toolbar     - Message composer and send/cancel/add-more
//! ```

pub mod caption;
pub mod component;
pub mod navigation;
pub mod page;
pub mod page_cache;
pub mod playback;
pub mod rail;
pub mod toolbar;

pub use component::{ApprovalConfig, Effect, Message, State, ViewContext};
