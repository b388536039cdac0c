// SPDX-License-Identifier: MPL-2.0
//! Paging directions and in-flight page transitions.

use crate::attachment::AttachmentId;

/// Relative navigation request (arrows, swipe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Go to the item after the current one.
    Next,
    /// Go to the item before the current one.
    Previous,
}

/// Presentation hint for a page change. It never affects the final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Direction of a move between two display positions.
    ///
    /// Moving to a later position is forward, anything else is reverse.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Next => Direction::Forward,
            Step::Previous => Direction::Reverse,
        }
    }
}

/// A page change that has been requested but whose completion has not been
/// observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Item being left.
    pub from: AttachmentId,
    /// Item being shown.
    pub to: AttachmentId,
    pub direction: Direction,
}
