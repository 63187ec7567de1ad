// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditBuffer, HistoryNavigator, KeyBindings, KeyDispatcher};

/// Turns the buffer into the text that is painted after the prompt. The primary session
/// paints the buffer as-is; the search session paints its current match.
pub type DisplayTransform<'a> = &'a dyn Fn(&EditBuffer) -> String;

/// What the session loop does after a key is handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Accept,
}

/// Which kind of session is running. Only the primary one prints a newline when a line
/// is accepted, and only it shows the overlay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionKind {
    Primary,
    Search,
}

/// Mutable state of a single session. Made fresh for every read line call.
#[derive(Debug, Clone)]
pub struct LineState {
    pub prompt: String,
    pub buffer: EditBuffer,
    pub dispatcher: KeyDispatcher,
    pub navigator: HistoryNavigator,
}

impl LineState {
    #[must_use]
    pub fn new(prompt: &str, bindings: KeyBindings, history_len: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            buffer: EditBuffer::new(),
            dispatcher: KeyDispatcher::new(bindings),
            navigator: HistoryNavigator::new(history_len),
        }
    }
}
