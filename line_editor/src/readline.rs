// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_LINE_EDITOR_MOD, EditBuffer, EditorConfig, Hinter, History, KeyBindings,
            KeyReader, LineState, MenuOverlay, Session, SessionKind, WordBoundarySet};
use miette::Diagnostic;
use std::{io::{self, Write},
          path::PathBuf};
use thiserror::Error;

/// Error returned from [`Readline::read_line`] and from building a [`Readline`] out of an
/// [`EditorConfig`].
///
/// [`ReadlineError::Interrupted`] and [`ReadlineError::Eof`] are not failures of the
/// editor; they are how the user ends input, and the caller decides what they mean.
#[derive(Debug, Error, Diagnostic)]
pub enum ReadlineError {
    /// An internal I/O error occurred.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_editor::io))]
    IO(#[from] io::Error),

    /// The user pressed Ctrl+C.
    #[error("interrupted")]
    #[diagnostic(code(r3bl_line_editor::interrupted))]
    Interrupted,

    /// The key source has no more keys, eg: stdin was closed.
    #[error("end of input")]
    #[diagnostic(code(r3bl_line_editor::eof))]
    Eof,

    /// A key binding or word boundary pattern from the configuration does not compile.
    #[error("invalid pattern")]
    #[diagnostic(
        code(r3bl_line_editor::invalid_pattern),
        help("Patterns use the syntax of the `regex` crate")
    )]
    InvalidPattern(#[from] regex::Error),

    #[error("failed to read config file {path:?}")]
    #[diagnostic(code(r3bl_line_editor::config_read))]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    #[diagnostic(
        code(r3bl_line_editor::config_parse),
        help("The config file must be a JSON object, see `EditorConfig`")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown edit operation: {0:?}")]
    #[diagnostic(
        code(r3bl_line_editor::unknown_edit_op),
        help("Use a snake_case name, eg: \"delete_backward_word\"")
    )]
    UnknownEditOp(String),
}

impl From<miette::Report> for ReadlineError {
    fn from(report: miette::Report) -> Self {
        ReadlineError::IO(io::Error::other(format!("{report}")))
    }
}

/// The line editor.
///
/// Holds everything that lives across [`Self::read_line`] calls: the binding table, the
/// word boundaries, the history, and the overlay. Each call runs one primary
/// [`Session`] with fresh per-line state.
///
/// A read line session is blocking and single threaded. It returns once the user accepts
/// the line, or with an error (including the user pressing Ctrl+C, and the key source
/// running out).
#[allow(missing_debug_implementations)]
pub struct Readline {
    pub bindings: KeyBindings,
    pub boundaries: WordBoundarySet,
    pub history: History,
    pub search_prompt: String,
    pub overlay: MenuOverlay,
    pub hinter: Option<Box<dyn Hinter>>,
    last_history_error: Option<ReadlineError>,
}

impl Readline {
    /// Build an editor from `config`. Loads the history file if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern does not compile, an edit op name is
    /// unknown, or the history file can not be read.
    pub fn try_new(config: &EditorConfig) -> Result<Self, ReadlineError> {
        let bindings = config.try_build_key_bindings()?;
        let boundaries = WordBoundarySet::try_new(config.word_boundaries.as_slice())?;
        let history = match &config.history_file {
            Some(path) => History::try_load(path, config.history_max_size)?,
            None => History::new(config.history_max_size),
        };

        Ok(Self {
            bindings,
            boundaries,
            history,
            search_prompt: config.search_prompt.clone(),
            overlay: MenuOverlay::new(),
            hinter: None,
            last_history_error: None,
        })
    }

    #[must_use]
    pub fn with_hinter(mut self, hinter: impl Hinter + 'static) -> Self {
        self.hinter = Some(Box::new(hinter));
        self
    }

    /// Why the history file was not updated by the last [`Self::read_line`] call, if it
    /// was not. The line itself is still returned, and kept in memory.
    #[must_use]
    pub fn last_history_error(&self) -> Option<&ReadlineError> {
        self.last_history_error.as_ref()
    }

    /// Read one line. The prompt may contain color escape sequences.
    ///
    /// The accepted line is added to the history before it is returned. Saving it to the
    /// history file is best effort, see [`Self::last_history_error`].
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::Interrupted`] if the user presses Ctrl+C (also inside a search).
    /// - [`ReadlineError::Eof`] if `reader` runs out of keys.
    /// - [`ReadlineError::IO`] if reading from `reader` or writing to `term` fails.
    pub fn read_line(
        &mut self,
        prompt: &str,
        reader: &mut dyn KeyReader,
        term: &mut dyn Write,
    ) -> Result<String, ReadlineError> {
        let show_buffer = |buffer: &EditBuffer| buffer.text();

        let line = {
            let mut session = Session {
                kind: SessionKind::Primary,
                line_state: LineState::new(prompt, self.bindings.clone(), self.history.len()),
                boundaries: &self.boundaries,
                history: Some(&self.history),
                search_prompt: &self.search_prompt,
                transform: &show_buffer,
                overlay: Some(&mut self.overlay),
                hinter: self.hinter.as_deref(),
            };
            session.run(reader, term)?
        };

        self.last_history_error = self.history.append(&line).err();
        if let Some(error) = &self.last_history_error {
            // % is Display, ? is Debug.
            tracing::warn!(message = "Readline::read_line -> history not saved", error = %error);
        }

        DEBUG_LINE_EDITOR_MOD.then(|| {
            tracing::debug!(
                message = "Readline::read_line -> done",
                history_len = self.history.len()
            );
        });

        Ok(line)
    }
}
