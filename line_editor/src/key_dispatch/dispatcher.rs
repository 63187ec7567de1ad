// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EditOp, EscapeScanner, FallbackAction, KeyBindings};
use crate::DEBUG_LINE_EDITOR_MOD;

/// Result of feeding a key that completed a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Op(EditOp),
    /// No handler matched. Carries the last raw key of the token.
    Fallback(FallbackAction, char),
}

/// Owns a session's escape scanner and its copy of the binding table.
#[derive(Debug, Clone)]
pub struct KeyDispatcher {
    scanner: EscapeScanner,
    bindings: KeyBindings,
}

impl KeyDispatcher {
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self { scanner: EscapeScanner::new(), bindings }
    }

    #[must_use]
    pub fn bindings(&self) -> &KeyBindings { &self.bindings }

    #[must_use]
    pub fn scanner(&self) -> &EscapeScanner { &self.scanner }

    /// Returns [None] while an escape sequence is still incomplete.
    pub fn feed(&mut self, key: char) -> Option<Dispatch> {
        let token = self.scanner.feed(key)?;
        let dispatch = match self.bindings.resolve(&token) {
            Some(op) => Dispatch::Op(op),
            None => Dispatch::Fallback(self.bindings.fallback, key),
        };

        // % is Display, ? is Debug.
        DEBUG_LINE_EDITOR_MOD.then(|| {
            tracing::debug!(
                message = "KeyDispatcher::feed -> token resolved",
                token = ?token,
                dispatch = ?dispatch
            );
        });

        Some(dispatch)
    }
}
