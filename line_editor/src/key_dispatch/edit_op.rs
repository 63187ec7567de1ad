// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditBuffer, WordBoundarySet};
use strum_macros::{Display, EnumIter, EnumString};

/// Every operation a key binding can trigger.
///
/// The names (in `snake_case`) are also what a config file uses to refer to them, eg:
/// `"delete_backward_word"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EditOp {
    AcceptLine,
    DeleteBackwardChar,
    DeleteForwardChar,
    DeleteToEnd,
    MoveStart,
    MoveEnd,
    MoveCharForward,
    MoveCharBackward,
    DeleteBackwardWord,
    MoveWordBackward,
    MoveWordForward,
    TransposeChar,
    TransposeWord,
    HistoryNext,
    HistoryPrevious,
    InteractiveSearch,
    Interrupt,
    /// Consume the key and do nothing.
    Swallow,
}

impl EditOp {
    /// `true` for the operations that only read and write the [`EditBuffer`].
    #[must_use]
    pub fn is_buffer_edit(self) -> bool {
        !matches!(
            self,
            Self::AcceptLine
                | Self::HistoryNext
                | Self::HistoryPrevious
                | Self::InteractiveSearch
                | Self::Interrupt
                | Self::Swallow
        )
    }

    /// Apply a buffer edit. Operations that need more than the buffer (see
    /// [`Self::is_buffer_edit`]) leave it untouched; the session handles those.
    pub fn apply_to_buffer(self, buffer: &mut EditBuffer, boundaries: &WordBoundarySet) {
        match self {
            Self::DeleteBackwardChar => buffer.delete_backward_char(),
            Self::DeleteForwardChar => buffer.delete_forward_char(),
            Self::DeleteToEnd => buffer.delete_to_end(),
            Self::MoveStart => buffer.move_start(),
            Self::MoveEnd => buffer.move_end(),
            Self::MoveCharForward => buffer.move_char_forward(),
            Self::MoveCharBackward => buffer.move_char_backward(),
            Self::DeleteBackwardWord => buffer.delete_backward_word(boundaries),
            Self::MoveWordBackward => buffer.move_word_backward(boundaries),
            Self::MoveWordForward => buffer.move_word_forward(boundaries),
            Self::TransposeChar => buffer.transpose_char(),
            Self::TransposeWord => buffer.transpose_word(boundaries),
            Self::AcceptLine
            | Self::HistoryNext
            | Self::HistoryPrevious
            | Self::InteractiveSearch
            | Self::Interrupt
            | Self::Swallow => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_parse_back() {
        for op in EditOp::iter() {
            assert_eq!(EditOp::from_str(&op.to_string()).unwrap(), op);
        }
        assert_eq!(EditOp::TransposeWord.to_string(), "transpose_word");
        assert!(EditOp::from_str("launch_rockets").is_err());
    }

    #[test]
    fn test_non_buffer_ops_leave_buffer_alone() {
        let boundaries = WordBoundarySet::default();
        for op in EditOp::iter().filter(|op| !op.is_buffer_edit()) {
            let mut buffer = EditBuffer::from_text("abc def");
            buffer.set_cursor(3);
            op.apply_to_buffer(&mut buffer, &boundaries);
            assert_eq!((buffer.text(), buffer.cursor()), ("abc def".to_string(), 3));
        }
    }

    #[test]
    fn test_buffer_op() {
        let boundaries = WordBoundarySet::default();
        let mut buffer = EditBuffer::from_text("foo bar");
        EditOp::TransposeWord.apply_to_buffer(&mut buffer, &boundaries);
        assert_eq!(buffer.text(), "bar foo");
    }
}
