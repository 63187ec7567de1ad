// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Measure, strip, and clip text that contains embedded ANSI escape sequences.
//!
//! Width is counted in `char`s (one column per code point) once the escape sequences
//! are removed. Wide grapheme clusters are not handled.

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// CSI sequences (`ESC [ params intermediates final`) and the two byte `ESC x` forms.
static ANSI_ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b[@-Z\\-_]").expect("Invalid ANSI escape regex")
});

/// One piece of a string, either a complete escape sequence or a single visible char.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnsiSegment<'a> {
    Escape(&'a str),
    Char(char),
}

/// Borrowed view over a string that may contain escape sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnsiText<'a> {
    pub text: &'a str,
}

impl<'a> AnsiText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self { Self { text } }

    #[must_use]
    pub fn has_escapes(&self) -> bool { ANSI_ESCAPE_REGEX.is_match(self.text) }

    /// Returns the text with every escape sequence removed. Does not allocate when
    /// there is nothing to remove.
    #[must_use]
    pub fn strip(&self) -> Cow<'a, str> { ANSI_ESCAPE_REGEX.replace_all(self.text, "") }

    /// Number of columns the text occupies on screen.
    #[must_use]
    pub fn visible_width(&self) -> usize {
        self.segments()
            .into_iter()
            .filter(|segment| matches!(segment, AnsiSegment::Char(_)))
            .count()
    }

    /// Split the text into escape sequences and visible chars, in order.
    #[must_use]
    pub fn segments(&self) -> Vec<AnsiSegment<'a>> {
        let text = self.text;
        let mut acc = Vec::with_capacity(text.len());
        let mut last_end = 0;
        for found in ANSI_ESCAPE_REGEX.find_iter(text) {
            acc.extend(text[last_end..found.start()].chars().map(AnsiSegment::Char));
            acc.push(AnsiSegment::Escape(found.as_str()));
            last_end = found.end();
        }
        acc.extend(text[last_end..].chars().map(AnsiSegment::Char));
        acc
    }

    /// Keep only the visible chars whose index falls in `start..start + len`. Every
    /// escape sequence is kept no matter where it sits, so color state that was switched
    /// on before the window still applies inside it.
    #[must_use]
    pub fn clip(&self, start: usize, len: usize) -> String {
        let end = start.saturating_add(len);
        let mut acc = String::with_capacity(self.text.len());
        let mut visible_index = 0;
        for segment in self.segments() {
            match segment {
                AnsiSegment::Escape(escape) => acc.push_str(escape),
                AnsiSegment::Char(ch) => {
                    if (start..end).contains(&visible_index) {
                        acc.push(ch);
                    }
                    visible_index += 1;
                }
            }
        }
        acc
    }

    /// Append spaces until the visible width is at least `width`.
    #[must_use]
    pub fn pad_to(&self, width: usize) -> String {
        let missing = width.saturating_sub(self.visible_width());
        let mut acc = String::with_capacity(self.text.len() + missing);
        acc.push_str(self.text);
        acc.extend(std::iter::repeat_n(' ', missing));
        acc
    }
}
