// SPDX-License-Identifier: MPL-2.0
//! `attachment_approval` is the review step a messaging client shows before
//! sending attachments, built with the Iced GUI framework.
//!
//! Users page through the pending attachments, caption each one, play back
//! videos, remove items from a thumbnail rail, write an accompanying message
//! and then confirm or cancel. Localization uses Fluent and preferences are
//! stored as TOML.

pub mod app;
pub mod attachment;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
