// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{EditOp, Handler, KeyMatcher};
use crate::EditBuffer;
use serde::{Deserialize, Serialize};

/// What happens to a token that no [`Handler`] matches. It is given the last raw key
/// of the token.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackAction {
    /// Insert the key at the cursor, unless it is a control char.
    #[default]
    InsertPrintable,
    Ignore,
}

impl FallbackAction {
    pub fn apply(self, buffer: &mut EditBuffer, key: char) {
        match self {
            Self::InsertPrintable => {
                if !key.is_control() {
                    let mut buf = [0_u8; 4];
                    buffer.insert(key.encode_utf8(&mut buf));
                }
            }
            Self::Ignore => {}
        }
    }
}

/// Ordered handler table. The first handler whose matcher accepts a token wins, so
/// specific bindings must come before catch all ranges and patterns.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub handlers: Vec<Handler>,
    pub fallback: FallbackAction,
}

impl KeyBindings {
    #[must_use]
    pub fn new(handlers: Vec<Handler>, fallback: FallbackAction) -> Self {
        Self { handlers, fallback }
    }

    /// Put `overrides` ahead of the existing handlers, so they shadow them.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Vec<Handler>) -> Self {
        self.handlers.splice(0..0, overrides);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackAction) -> Self {
        self.fallback = fallback;
        self
    }

    /// First matching handler's op, if any.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<EditOp> {
        self.handlers
            .iter()
            .find(|handler| handler.matcher.matches(token))
            .map(|handler| handler.op)
    }
}

impl Default for KeyBindings {
    fn default() -> Self { Self::new(emacs_handlers(), FallbackAction::default()) }
}

/// The default table.
///
/// | Keys                  | Op                                       |
/// |-----------------------|------------------------------------------|
/// | Enter (`\r`, `\n`)    | accept line                              |
/// | Ctrl+H, Backspace     | delete backward char                     |
/// | Ctrl+A / Ctrl+E       | move to start / end                      |
/// | Ctrl+K                | delete to end                            |
/// | Ctrl+F / Ctrl+B       | move char forward / backward             |
/// | Ctrl+D                | delete forward char                      |
/// | Ctrl+C                | interrupt                                |
/// | Ctrl+W                | delete backward word                     |
/// | Ctrl+T                | transpose chars                          |
/// | Ctrl+N / Ctrl+P       | history next / previous                  |
/// | Ctrl+R                | interactive search                       |
/// | any other Ctrl key    | swallowed                                |
/// | Alt+Backspace         | delete backward word                     |
/// | Alt+B / Alt+F         | move word backward / forward             |
/// | `ESC [ C` / `ESC [ B` | move char forward / backward             |
/// | Alt+T                 | transpose words                          |
/// | any other Alt+letter  | swallowed                                |
///
/// Note that `ESC [ B` is the down arrow; it moves the cursor back, as it always has.
#[must_use]
pub fn emacs_handlers() -> Vec<Handler> {
    let mut acc = vec![
        Handler::exact("\r", EditOp::AcceptLine),
        Handler::exact("\n", EditOp::AcceptLine),
        Handler::exact("\x08", EditOp::DeleteBackwardChar),
        Handler::exact("\x7f", EditOp::DeleteBackwardChar),
        Handler::exact("\x01", EditOp::MoveStart),
        Handler::exact("\x05", EditOp::MoveEnd),
        Handler::exact("\x0b", EditOp::DeleteToEnd),
        Handler::exact("\x06", EditOp::MoveCharForward),
        Handler::exact("\x02", EditOp::MoveCharBackward),
        Handler::exact("\x04", EditOp::DeleteForwardChar),
        Handler::exact("\x03", EditOp::Interrupt),
        Handler::exact("\x17", EditOp::DeleteBackwardWord),
        Handler::exact("\x14", EditOp::TransposeChar),
        Handler::exact("\x0e", EditOp::HistoryNext),
        Handler::exact("\x10", EditOp::HistoryPrevious),
        Handler::exact("\x12", EditOp::InteractiveSearch),
        Handler::new(KeyMatcher::Range('\x01', '\x1a'), EditOp::Swallow),
        Handler::exact("\x1b\x08", EditOp::DeleteBackwardWord),
        Handler::exact("\x1b\x7f", EditOp::DeleteBackwardWord),
        Handler::exact("\x1bb", EditOp::MoveWordBackward),
        Handler::exact("\x1bf", EditOp::MoveWordForward),
        Handler::exact("\x1b[C", EditOp::MoveCharForward),
        Handler::exact("\x1b[B", EditOp::MoveCharBackward),
        Handler::exact("\x1bt", EditOp::TransposeWord),
    ];
    // Built from a literal, so it can not fail.
    if let Ok(meta_letter) = KeyMatcher::try_pattern("\x1b[a-z]") {
        acc.push(Handler::new(meta_letter, EditOp::Swallow));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("\r", Some(EditOp::AcceptLine))]
    #[test_case("\n", Some(EditOp::AcceptLine))]
    #[test_case("\x7f", Some(EditOp::DeleteBackwardChar))]
    #[test_case("\x01", Some(EditOp::MoveStart))]
    #[test_case("\x03", Some(EditOp::Interrupt))]
    #[test_case("\x12", Some(EditOp::InteractiveSearch))]
    #[test_case("\x19", Some(EditOp::Swallow) ; "unbound ctrl y")]
    #[test_case("\t", Some(EditOp::Swallow) ; "tab is ctrl i")]
    #[test_case("\x1b\x7f", Some(EditOp::DeleteBackwardWord))]
    #[test_case("\x1bb", Some(EditOp::MoveWordBackward))]
    #[test_case("\x1bt", Some(EditOp::TransposeWord))]
    #[test_case("\x1bq", Some(EditOp::Swallow) ; "unbound alt q")]
    #[test_case("\x1b[C", Some(EditOp::MoveCharForward))]
    #[test_case("\x1b[B", Some(EditOp::MoveCharBackward))]
    #[test_case("\x1b[A", None ; "up arrow falls through")]
    #[test_case("\x1b[5~", None ; "page up falls through")]
    #[test_case("x", None)]
    fn test_default_table(token: &str, expected: Option<EditOp>) {
        assert_eq!(KeyBindings::default().resolve(token), expected);
    }

    #[test]
    fn test_overrides_shadow_defaults() {
        let bindings = KeyBindings::default()
            .with_overrides(vec![Handler::exact("\x19", EditOp::MoveEnd)]);
        assert_eq!(bindings.resolve("\x19"), Some(EditOp::MoveEnd));
        assert_eq!(bindings.resolve("\x01"), Some(EditOp::MoveStart));
    }

    #[test]
    fn test_fallback_inserts_printable_only() {
        let mut buffer = EditBuffer::new();
        FallbackAction::InsertPrintable.apply(&mut buffer, 'x');
        FallbackAction::InsertPrintable.apply(&mut buffer, 'é');
        FallbackAction::InsertPrintable.apply(&mut buffer, '\x1b');
        FallbackAction::Ignore.apply(&mut buffer, 'y');
        assert_eq!(buffer.text(), "xé");
    }
}
