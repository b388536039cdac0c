// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the approval surface.

pub mod button;
pub mod container;
