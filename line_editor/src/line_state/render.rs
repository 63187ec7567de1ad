// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Repaint the edit row.
//!
//! The whole row is redrawn on every keystroke: move to column 1, reset style, clear to
//! end of line, then the prompt and the (possibly clipped) display line, and finally put
//! the cursor back where it belongs.
//!
//! When the line does not fit, only a window of it is shown. The window is as wide as the
//! space right of the prompt, and it ends on the cursor:
//!
//! ```text
//! width = 10, prompt = ">> ", line = "abcdefghijklmno", cursor = 14
//!
//! line:    a b c d e f g h [i j k l m n o]
//!                           ▲ start = 14 - 7 + 1 = 8
//! screen: >> ijklmno
//!                  ▲ column 3 + (14 - 8) + 1 = 10
//! ```

use crate::{AnsiText, CsiSequence, DEBUG_LINE_EDITOR_MOD, TermSize};
use std::io::{self, Write};

/// Returns the 1-based column the cursor was left at.
///
/// `display_line` may contain escape sequences; `cursor` is an index into its visible
/// chars. Nothing is flushed; that is left to the caller, which may have more to draw.
///
/// # Errors
///
/// Returns an error if writing to `term` fails.
pub fn render_line(
    term: &mut dyn Write,
    prompt: &str,
    display_line: &str,
    cursor: usize,
    size: TermSize,
) -> io::Result<u16> {
    let width = usize::from(size.cols).max(1);
    let prompt_width = AnsiText::new(prompt).visible_width();
    let window_width = width.saturating_sub(prompt_width).max(1);

    let padded = AnsiText::new(display_line).pad_to(window_width);
    let line = AnsiText::new(&padded);

    write!(
        term,
        "{}{}{}{prompt}",
        CsiSequence::CursorHorizontalAbsolute(1),
        CsiSequence::ResetStyle,
        CsiSequence::EraseToEndOfLine
    )?;

    // The cursor may sit one past the last char, so it needs a column of its own.
    let fits = prompt_width + line.visible_width().max(cursor + 1) <= width;
    let column = if fits {
        term.write_all(padded.as_bytes())?;
        prompt_width + cursor + 1
    } else {
        let start = (cursor + 1).saturating_sub(window_width);
        term.write_all(line.clip(start, window_width).as_bytes())?;
        prompt_width + (cursor - start) + 1
    };

    let column = u16::try_from(column).unwrap_or(u16::MAX);
    write!(term, "{}", CsiSequence::CursorHorizontalAbsolute(column))?;

    // % is Display, ? is Debug.
    DEBUG_LINE_EDITOR_MOD.then(|| {
        tracing::debug!(
            message = "render_line",
            fits = fits,
            cursor = cursor,
            column = column,
            size = ?size
        );
    });

    Ok(column)
}
