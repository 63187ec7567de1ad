// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_line_editor`
//!
//! A blocking, single line terminal editor. It reads raw keys from the terminal, keeps an
//! editable buffer with a cursor, and repaints the line on every keystroke.
//!
//! # Features
//!
//! - Emacs style key bindings, driven by an ordered, first-match-wins table of
//!   [`Handler`]s. The table can be extended via [`EditorConfig::bindings`].
//! - Escape sequences are resolved by [`EscapeScanner`], which never gets stuck: every
//!   partial sequence eventually resolves to a token.
//! - Lines longer than the terminal scroll horizontally around the cursor. Embedded ANSI
//!   color codes in the prompt or in the display line survive the clipping, see
//!   [`render_line`].
//! - Persisted [`History`] with up / down browsing and incremental regex search
//!   (<kbd>Ctrl+R</kbd>), which runs as a nested read line session.
//! - A [`MenuOverlay`] that draws hint text beneath the edit line and erases it again
//!   without corrupting the line. Plug in a [`Hinter`] to use it.
//!
//! # Usage
//!
//! ```no_run
//! use r3bl_line_editor::{EditorConfig, RawModeGuard, Readline, ReadlineError,
//!                        StdinKeyReader};
//!
//! # fn sample() -> miette::Result<()> {
//! let config = EditorConfig::default();
//! let mut readline = Readline::try_new(&config)?;
//! let mut key_reader = StdinKeyReader::default();
//! let mut stdout = std::io::stdout();
//!
//! let _guard = RawModeGuard::new()?;
//! loop {
//!     match readline.read_line("> ", &mut key_reader, &mut stdout) {
//!         Ok(line) => { /* Do something with the line. */ }
//!         Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
//!         Err(error) => return Err(error.into()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! There is none. [`Readline::read_line`] blocks on the [`KeyReader`], applies the key,
//! repaints, and repeats until the line is accepted. The interactive search runs its own
//! loop to completion before control returns to the outer session.

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide a flat public API).
pub mod ansi_text;
pub mod config;
pub mod edit_buffer;
pub mod history;
pub mod key_dispatch;
pub mod line_state;
pub mod log;
pub mod menu_overlay;
pub mod readline;
pub mod terminal;
pub mod test_fixtures;

pub use ansi_text::*;
pub use config::*;
pub use edit_buffer::*;
pub use history::*;
pub use key_dispatch::*;
pub use line_state::*;
pub use log::*;
pub use menu_overlay::*;
pub use readline::*;
pub use terminal::*;
pub use test_fixtures::*;

/// Set to `true` to emit `tracing::debug!` output from the dispatch and render paths.
pub const DEBUG_LINE_EDITOR_MOD: bool = true;

// Constants.
pub const HISTORY_SIZE_MAX: usize = 1_000;

/// Terminal dimensions, sampled fresh on every repaint.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl TermSize {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self { Self { rows, cols } }
}

impl Default for TermSize {
    fn default() -> Self { Self::new(24, 80) }
}
