// SPDX-License-Identifier: MPL-2.0
//! Byte-bounded text editing shared by per-item captions and the compose
//! toolbar.
//!
//! The stored text never exceeds its byte ceiling. When an edit would push it
//! over, only the newly typed span is clipped: the text that was already there
//! is kept and the longest prefix of the new span that still fits is accepted.
//! A typed newline is never stored; it ends the editing session instead.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{column, row, text, text_input};
use iced::{Element, Length};

/// Returns the longest prefix of `s` that fits in `max_bytes`, cut on a
/// character boundary.
#[must_use]
pub fn truncate_to_byte_limit(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Drops line breaks, which captions never store.
#[must_use]
pub fn strip_newlines(s: &str) -> String {
    s.chars().filter(|c| !is_newline(*c)).collect()
}

/// Byte lengths of the longest common prefix and suffix of `old` and `new`,
/// on character boundaries and without overlapping.
fn common_affixes(old: &str, new: &str) -> (usize, usize) {
    let prefix: usize = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();

    let max_suffix = old.len().min(new.len()) - prefix;
    let mut suffix = 0;
    for (a, b) in old[prefix..].chars().rev().zip(new[prefix..].chars().rev()) {
        if a != b || suffix + a.len_utf8() > max_suffix {
            break;
        }
        suffix += a.len_utf8();
    }
    (prefix, suffix)
}

/// Text editor state with a hard byte ceiling.
#[derive(Debug, Clone)]
pub struct State {
    text: String,
    max_bytes: usize,
    limit_reached: bool,
}

/// Messages for the caption editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The input widget reports its new full contents.
    Edited(String),
    /// Enter pressed.
    Submitted,
}

/// Effects produced by text edits.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing observable changed.
    None,
    /// The stored text changed.
    Changed(String),
    /// The user asked to stop editing, carrying the new text when the same
    /// edit also changed it.
    FinishedEditing { changed: Option<String> },
}

impl State {
    /// Creates an editor seeded with `initial`, clipped to `max_bytes`.
    #[must_use]
    pub fn new(initial: Option<&str>, max_bytes: usize) -> Self {
        let initial = strip_newlines(initial.unwrap_or_default());
        let text = truncate_to_byte_limit(&initial, max_bytes).to_string();
        Self {
            text,
            max_bytes,
            limit_reached: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Whether the last edit was clipped.
    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Edited(proposed) => self.set_text(&proposed),
            Message::Submitted => Effect::FinishedEditing { changed: None },
        }
    }

    /// Applies a proposed full text, clipping the newly typed span if needed.
    pub fn set_text(&mut self, proposed: &str) -> Effect {
        let (prefix_len, suffix_len) = common_affixes(&self.text, proposed);
        let prefix = &proposed[..prefix_len];
        let suffix = &proposed[proposed.len() - suffix_len..];
        let typed = &proposed[prefix_len..proposed.len() - suffix_len];

        let finished = typed.chars().any(is_newline);
        let typed: String = typed.chars().filter(|c| !is_newline(*c)).collect();

        let kept_bytes = prefix.len() + suffix.len();
        let mut next = String::with_capacity(kept_bytes + typed.len());
        next.push_str(prefix);
        if kept_bytes + typed.len() <= self.max_bytes {
            next.push_str(&typed);
            self.limit_reached = false;
        } else {
            let budget = self.max_bytes.saturating_sub(kept_bytes);
            next.push_str(truncate_to_byte_limit(&typed, budget));
            self.limit_reached = true;
        }
        next.push_str(suffix);

        // The kept text alone may exceed a ceiling that shrank after seeding.
        if next.len() > self.max_bytes {
            next.truncate(truncate_to_byte_limit(&next, self.max_bytes).len());
            self.limit_reached = true;
        }

        let changed = if next == self.text {
            None
        } else {
            self.text = next;
            Some(self.text.clone())
        };

        match (finished, changed) {
            (true, changed) => Effect::FinishedEditing { changed },
            (false, Some(text)) => Effect::Changed(text),
            (false, None) => Effect::None,
        }
    }

    /// Clears the text and the limit indicator.
    pub fn clear(&mut self) -> Effect {
        self.limit_reached = false;
        if self.text.is_empty() {
            Effect::None
        } else {
            self.text.clear();
            Effect::Changed(String::new())
        }
    }
}

/// Renders the text input with a byte counter and the limit warning.
pub fn view<'a>(
    state: &'a State,
    placeholder: &str,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let input = text_input(placeholder, &state.text)
        .on_input(Message::Edited)
        .on_submit(Message::Submitted)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill);

    let counter = text(format!("{}/{}", state.text.len(), state.max_bytes))
        .size(typography::CAPTION)
        .color(colors.text_secondary);

    let mut status = row![counter].spacing(spacing::XS);
    if state.limit_reached {
        let limit = state.max_bytes.to_string();
        status = status.push(
            text(i18n.tr_with_args("caption-limit-reached", &[("limit", limit.as_str())]))
                .size(typography::CAPTION)
                .color(colors.warning),
        );
    }

    column![input, status].spacing(spacing::XXS).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_to_byte_limit("hello", 10), "hello");
        assert_eq!(truncate_to_byte_limit("hello", 3), "hel");
        // 'é' is two bytes.
        assert_eq!(truncate_to_byte_limit("é", 1), "");
        assert_eq!(truncate_to_byte_limit("aé", 2), "a");
        // '🎉' is four bytes.
        assert_eq!(truncate_to_byte_limit("🎉🎉", 7), "🎉");
    }

    #[test]
    fn overflowing_paste_is_clipped_to_ceiling() {
        let mut editor = State::new(None, 10);
        let effect = editor.set_text("hello world");

        assert_eq!(editor.text(), "hello worl");
        assert_eq!(editor.text().len(), 10);
        assert!(editor.limit_reached());
        assert_eq!(effect, Effect::Changed("hello worl".to_string()));
    }

    #[test]
    fn input_within_ceiling_is_stored_verbatim() {
        let samples = ["", "a", "caption", "héllo wörld", "🎉 party", "0123456789"];
        for sample in samples {
            let mut editor = State::new(Some("something else"), 16);
            editor.set_text(sample);
            assert_eq!(editor.text(), sample);
            assert!(!editor.limit_reached());
        }
    }

    #[test]
    fn stored_text_never_exceeds_ceiling() {
        let inputs = [
            "short",
            "a much longer caption than allowed",
            "ééééééééééééééééééé",
            "🎉🎉🎉🎉🎉🎉",
            "mixed é and 🎉 content here",
        ];
        for ceiling in [0, 1, 3, 7, 12] {
            let mut editor = State::new(None, ceiling);
            for input in inputs {
                editor.set_text(input);
                assert!(
                    editor.text().len() <= ceiling,
                    "{:?} exceeds {}",
                    editor.text(),
                    ceiling
                );
            }
        }
    }

    #[test]
    fn insertion_in_the_middle_keeps_existing_text() {
        let mut editor = State::new(Some("abcdef"), 8);
        // Paste "XYZW" between "abc" and "def": only two bytes fit.
        editor.set_text("abcXYZWdef");
        assert_eq!(editor.text(), "abcXYdef");
        assert!(editor.limit_reached());
    }

    #[test]
    fn full_editor_accepts_empty_span() {
        let mut editor = State::new(Some("0123456789"), 10);
        let effect = editor.set_text("0123456789x");
        assert_eq!(editor.text(), "0123456789");
        assert!(editor.limit_reached());
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn multibyte_span_is_not_split() {
        let mut editor = State::new(Some("abc"), 5);
        editor.set_text("abcéé");
        // "abcé" is 5 bytes, the second 'é' would make 7.
        assert_eq!(editor.text(), "abcé");
    }

    #[test]
    fn deletion_clears_limit_indicator() {
        let mut editor = State::new(None, 4);
        editor.set_text("abcdef");
        assert!(editor.limit_reached());

        let effect = editor.set_text("abc");
        assert_eq!(editor.text(), "abc");
        assert!(!editor.limit_reached());
        assert_eq!(effect, Effect::Changed("abc".to_string()));
    }

    #[test]
    fn newline_finishes_editing_without_being_stored() {
        let mut editor = State::new(Some("caption"), 32);
        let effect = editor.set_text("caption\n");
        assert_eq!(editor.text(), "caption");
        assert_eq!(effect, Effect::FinishedEditing { changed: None });

        let effect = editor.set_text("caption more\n");
        assert_eq!(editor.text(), "caption more");
        assert_eq!(
            effect,
            Effect::FinishedEditing {
                changed: Some("caption more".to_string())
            }
        );
    }

    #[test]
    fn submit_finishes_editing() {
        let mut editor = State::new(None, 32);
        assert_eq!(
            editor.handle(Message::Submitted),
            Effect::FinishedEditing { changed: None }
        );
    }

    #[test]
    fn seed_is_clipped_and_cleared() {
        let mut editor = State::new(Some("line one\nline two"), 12);
        assert_eq!(editor.text(), "line oneline");

        assert_eq!(editor.clear(), Effect::Changed(String::new()));
        assert!(editor.is_empty());
        assert_eq!(editor.clear(), Effect::None);
    }
}
