// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::WordBoundarySet;

/// The line being edited plus the cursor.
///
/// Content is kept as a `Vec<char>` so that the cursor is simply an index into it. Every
/// operation keeps `0 <= cursor <= content.len()`, which is why the fields are private.
///
/// A new buffer is made for every [`crate::Readline::read_line`] call. Rendering only
/// ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    content: Vec<char>,
    cursor: usize,
}

impl EditBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Buffer holding `text`, with the cursor at the end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let content: Vec<char> = text.chars().collect();
        let cursor = content.len();
        Self { content, cursor }
    }

    #[must_use]
    pub fn text(&self) -> String { self.content.iter().collect() }

    #[must_use]
    pub fn chars(&self) -> &[char] { &self.content }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    /// Replace the whole content. The cursor stays where it was unless it now points
    /// past the end, in which case it is clamped.
    pub fn set_text(&mut self, text: &str) {
        self.content = text.chars().collect();
        self.cursor = self.cursor.min(self.content.len());
    }

    pub fn set_cursor(&mut self, cursor: usize) { self.cursor = cursor.min(self.content.len()); }

    pub fn insert(&mut self, text: &str) {
        let before = self.content.len();
        self.content.splice(self.cursor..self.cursor, text.chars());
        self.cursor += self.content.len() - before;
    }

    pub fn delete_backward_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.content.remove(self.cursor - 1);
        self.cursor -= 1;
    }

    pub fn delete_forward_char(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    pub fn delete_to_end(&mut self) { self.content.truncate(self.cursor); }

    pub fn move_start(&mut self) { self.cursor = 0; }

    pub fn move_end(&mut self) { self.cursor = self.content.len(); }

    pub fn move_char_forward(&mut self) {
        self.cursor = (self.cursor + 1).min(self.content.len());
    }

    pub fn move_char_backward(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

    pub fn delete_backward_word(&mut self, boundaries: &WordBoundarySet) {
        let start = self.word_start_before(self.cursor, boundaries);
        self.content.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn move_word_backward(&mut self, boundaries: &WordBoundarySet) {
        self.cursor = self.word_start_before(self.cursor, boundaries);
    }

    pub fn move_word_forward(&mut self, boundaries: &WordBoundarySet) {
        self.cursor = self.word_end_after(self.cursor, boundaries);
    }

    /// Swap the two chars around the cursor and step past them. At the end of the line
    /// the last two chars are swapped instead. Needs at least two chars before the
    /// cursor.
    pub fn transpose_char(&mut self) {
        if self.cursor < 2 {
            return;
        }
        let pivot = if self.cursor == self.content.len() {
            self.cursor - 1
        } else {
            self.cursor
        };
        self.content.swap(pivot - 1, pivot);
        self.cursor = (pivot + 1).min(self.content.len());
    }

    /// Swap the word that ends at (or before) the cursor with the word in front of it,
    /// joining them with a single space: `"foo bar|"` becomes `"bar foo|"`.
    pub fn transpose_word(&mut self, boundaries: &WordBoundarySet) {
        let second_start = self.word_start_before(self.cursor, boundaries);
        if second_start == 0 {
            return;
        }
        let second_end = self.first_boundary_in(second_start, self.cursor, boundaries);

        let first_limit = second_start - 1;
        let first_start = self.word_start_before(first_limit, boundaries);
        let first_end = self.first_boundary_in(first_start, first_limit, boundaries);

        if first_start == first_end || second_start == second_end {
            return;
        }

        let mut replacement: Vec<char> = self.content[second_start..second_end].to_vec();
        replacement.push(' ');
        replacement.extend_from_slice(&self.content[first_start..first_end]);

        let replacement_len = replacement.len();
        self.content.splice(first_start..second_end, replacement);
        self.cursor = first_start + replacement_len;
    }

    /// Scan backward from `from`: step over one boundary char right before it (so that
    /// trailing punctuation is taken along), then over word chars until a boundary or
    /// the start of the line.
    #[must_use]
    pub fn word_start_before(&self, from: usize, boundaries: &WordBoundarySet) -> usize {
        let mut index = from.min(self.content.len());
        if index > 0 && boundaries.is_boundary(self.content[index - 1]) {
            index -= 1;
        }
        while index > 0 && !boundaries.is_boundary(self.content[index - 1]) {
            index -= 1;
        }
        index
    }

    /// Mirror image of [`Self::word_start_before`].
    #[must_use]
    pub fn word_end_after(&self, from: usize, boundaries: &WordBoundarySet) -> usize {
        let len = self.content.len();
        let mut index = from.min(len);
        if index < len && boundaries.is_boundary(self.content[index]) {
            index += 1;
        }
        while index < len && !boundaries.is_boundary(self.content[index]) {
            index += 1;
        }
        index
    }

    fn first_boundary_in(
        &self,
        start: usize,
        end: usize,
        boundaries: &WordBoundarySet,
    ) -> usize {
        (start..end)
            .find(|&index| boundaries.is_boundary(self.content[index]))
            .unwrap_or(end)
    }
}
