// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayTransform, LineState, SessionControl, SessionKind, render_line};
use crate::{CsiSequence, DEBUG_LINE_EDITOR_MOD, Hinter, History, KeyReader, MenuOverlay,
            ReadlineError, WordBoundarySet};
use std::io::Write;

/// A running read line session.
///
/// It borrows everything that outlives it (word boundaries, history, overlay) from the
/// [`crate::Readline`] that started it, and owns only its [`LineState`].
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ repaint                                              │
/// │ loop {                                               │
/// │   key ← reader        (Eof / IO error ends the loop) │
/// │   handle key          (Interrupt ends the loop)      │
/// │   accepted? → finish, return the line                │
/// │   end history keystroke                              │
/// │   repaint, then refresh the overlay                  │
/// │ }                                                    │
/// └──────────────────────────────────────────────────────┘
/// ```
#[allow(missing_debug_implementations)]
pub struct Session<'a> {
    pub kind: SessionKind,
    pub line_state: LineState,
    pub boundaries: &'a WordBoundarySet,
    /// [None] disables history browsing and search.
    pub history: Option<&'a History>,
    pub search_prompt: &'a str,
    pub transform: DisplayTransform<'a>,
    pub overlay: Option<&'a mut MenuOverlay>,
    pub hinter: Option<&'a dyn Hinter>,
}

impl Session<'_> {
    /// Drive the session until a line is accepted.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::Interrupted`] if the user interrupts.
    /// - [`ReadlineError::Eof`] if `reader` runs out of keys.
    /// - [`ReadlineError::IO`] if reading or writing fails.
    pub fn run(
        &mut self,
        reader: &mut dyn KeyReader,
        term: &mut dyn Write,
    ) -> Result<String, ReadlineError> {
        self.repaint(reader, term)?;
        loop {
            let key = reader.read_key()?;
            if self.handle_key(key, reader, term)? == SessionControl::Accept {
                self.finish(term)?;
                let line = self.line_state.buffer.text();

                // % is Display, ? is Debug.
                DEBUG_LINE_EDITOR_MOD.then(|| {
                    tracing::debug!(
                        message = "Session::run -> accepted",
                        kind = ?self.kind,
                        line = ?line
                    );
                });

                return Ok(line);
            }
            self.line_state.navigator.end_keystroke(self.history_len());
            self.repaint(reader, term)?;
        }
    }

    #[must_use]
    pub fn history_len(&self) -> usize { self.history.map_or(0, History::len) }

    /// Redraw the edit row, then redraw the overlay (if any) beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the size can not be read, or writing fails.
    pub fn repaint(
        &mut self,
        reader: &dyn KeyReader,
        term: &mut dyn Write,
    ) -> Result<(), ReadlineError> {
        let size = reader.terminal_size()?;
        let display_line = (self.transform)(&self.line_state.buffer);

        self.erase_overlay(term)?;
        let column = render_line(
            term,
            &self.line_state.prompt,
            &display_line,
            self.line_state.buffer.cursor(),
            size,
        )?;

        if let (Some(overlay), Some(hinter), Some(history)) =
            (self.overlay.as_deref_mut(), self.hinter, self.history)
            && let Some(hint) = hinter.hint(&self.line_state.buffer.text(), history)
            && !hint.is_empty()
        {
            overlay.display(&hint, term, size)?;
            write!(term, "{}", CsiSequence::CursorHorizontalAbsolute(column))?;
        }

        term.flush()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn erase_overlay(&mut self, term: &mut dyn Write) -> Result<(), ReadlineError> {
        if let Some(overlay) = self.overlay.as_deref_mut() {
            overlay.erase(term)?;
        }
        Ok(())
    }

    /// Tidy up after an accepted line. The primary session moves to a fresh row.
    fn finish(&mut self, term: &mut dyn Write) -> Result<(), ReadlineError> {
        self.erase_overlay(term)?;
        if self.kind == SessionKind::Primary {
            term.write_all(b"\r\n")?;
        }
        term.flush()?;
        Ok(())
    }
}
