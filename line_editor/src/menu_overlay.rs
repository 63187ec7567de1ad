// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Multi line hint text drawn beneath the edit row.
//!
//! The overlay never moves the edit row: [`MenuOverlay::display`] writes its lines below
//! it and walks the cursor back up, and [`MenuOverlay::erase`] clears exactly the lines
//! that were drawn and walks back up again. In both cases the cursor ends up in column 1
//! of the edit row, so the caller has to restore the column.
//!
//! ```text
//! >> git pu▌           ← edit row (cursor returns here)
//! git push origin      ← overlay line 1
//! git pull --rebase    ← overlay line 2
//! ```

use crate::{AnsiText, CsiSequence, History, TermSize};
use std::io::{self, Write};

/// Source of hint text for the overlay, consulted after every repaint of the primary
/// session. Returning [None] (or an empty string) shows nothing.
pub trait Hinter {
    fn hint(&self, line: &str, history: &History) -> Option<String>;
}

/// Lists the newest distinct history entries that start with the current line. An entry
/// equal to the line is left out, it has nothing more to offer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HistoryHinter {
    pub max_hints: usize,
}

impl Default for HistoryHinter {
    fn default() -> Self { Self { max_hints: 5 } }
}

impl Hinter for HistoryHinter {
    fn hint(&self, line: &str, history: &History) -> Option<String> {
        if line.is_empty() {
            return None;
        }
        let mut acc: Vec<&str> = Vec::with_capacity(self.max_hints);
        for entry in history.iter().rev() {
            if acc.len() == self.max_hints {
                break;
            }
            if entry != line && entry.starts_with(line) && !acc.contains(&entry) {
                acc.push(entry);
            }
        }
        (!acc.is_empty()).then(|| acc.join("\n"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOverlay {
    text: String,
    last_line_count: usize,
}

impl MenuOverlay {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// What is currently drawn, empty if nothing.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn last_line_count(&self) -> usize { self.last_line_count }

    /// Draw `text` below the edit row. Lines are clipped to the terminal width, and at
    /// most `rows - 1` of them are drawn so that the edit row stays on screen. Empty text
    /// draws nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn display(
        &mut self,
        text: &str,
        term: &mut dyn Write,
        size: TermSize,
    ) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let width = usize::from(size.cols);
        let max_lines = usize::from(size.rows).saturating_sub(1);

        let mut drawn = 0;
        for line in text.lines().take(max_lines) {
            write!(
                term,
                "\n\r{}{}",
                AnsiText::new(line).clip(0, width),
                CsiSequence::ResetStyle
            )?;
            drawn += 1;
        }
        if drawn > 0 {
            write!(term, "{}", CsiSequence::CursorPrevLine(to_u16(drawn)))?;
        }

        self.text = text.to_string();
        self.last_line_count = drawn;
        Ok(())
    }

    /// Clear the lines drawn by the last [`Self::display`]. No-op if none are drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn erase(&mut self, term: &mut dyn Write) -> io::Result<()> {
        if self.last_line_count == 0 {
            return Ok(());
        }

        self.text.clear();
        for _ in 0..self.last_line_count {
            write!(
                term,
                "{}{}",
                CsiSequence::CursorNextLine(1),
                CsiSequence::EraseToEndOfLine
            )?;
        }
        write!(
            term,
            "{}{}",
            CsiSequence::ResetStyle,
            CsiSequence::CursorPrevLine(to_u16(self.last_line_count))
        )?;

        self.last_line_count = 0;
        Ok(())
    }
}

fn to_u16(count: usize) -> u16 { u16::try_from(count).unwrap_or(u16::MAX) }
