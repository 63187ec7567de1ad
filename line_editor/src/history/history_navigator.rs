// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::History;
use crate::EditBuffer;

/// Where the session is in the history while browsing with previous / next.
///
/// `index == history.len()` means "past the newest entry", ie: not browsing. Any
/// keystroke that does not move through the history snaps the index back there, see
/// [`Self::end_keystroke`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HistoryNavigator {
    index: usize,
    moved: bool,
}

impl HistoryNavigator {
    #[must_use]
    pub fn new(history_len: usize) -> Self { Self { index: history_len, moved: false } }

    #[must_use]
    pub fn index(&self) -> usize { self.index }

    pub fn previous(&mut self, history: &History, buffer: &mut EditBuffer) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        buffer.set_text(history.get(self.index).unwrap_or_default());
        self.moved = true;
    }

    pub fn next(&mut self, history: &History, buffer: &mut EditBuffer) {
        if self.index >= history.len() {
            return;
        }
        self.index += 1;
        buffer.set_text(history.get(self.index).unwrap_or_default());
        self.moved = true;
    }

    /// Land on `index`, eg: after a successful search.
    pub fn jump_to(&mut self, index: usize) {
        self.index = index;
        self.moved = true;
    }

    /// Call once after every keystroke.
    pub fn end_keystroke(&mut self, history_len: usize) {
        if self.moved {
            self.moved = false;
        } else {
            self.index = history_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history_of(lines: &[&str]) -> History {
        let mut history = History::new(10);
        for line in lines {
            history.append(line).unwrap();
        }
        history
    }

    #[test]
    fn test_browse_back_and_forth() {
        let history = history_of(&["first", "second"]);
        let mut buffer = EditBuffer::from_text("draft");
        let mut navigator = HistoryNavigator::new(history.len());

        navigator.previous(&history, &mut buffer);
        navigator.end_keystroke(history.len());
        assert_eq!((navigator.index(), buffer.text()), (1, "second".to_string()));

        navigator.previous(&history, &mut buffer);
        navigator.end_keystroke(history.len());
        assert_eq!((navigator.index(), buffer.text()), (0, "first".to_string()));

        // Already at the oldest entry.
        navigator.previous(&history, &mut buffer);
        assert_eq!((navigator.index(), buffer.text()), (0, "first".to_string()));
        navigator.end_keystroke(history.len());
        assert_eq!(navigator.index(), 2);
    }

    #[test]
    fn test_next_past_newest_clears_buffer() {
        let history = history_of(&["first", "second"]);
        let mut buffer = EditBuffer::new();
        let mut navigator = HistoryNavigator::new(history.len());

        navigator.previous(&history, &mut buffer);
        navigator.end_keystroke(history.len());
        navigator.next(&history, &mut buffer);
        navigator.end_keystroke(history.len());
        assert_eq!((navigator.index(), buffer.text()), (2, String::new()));

        // Not browsing: next does nothing.
        buffer.insert("typed");
        navigator.next(&history, &mut buffer);
        assert_eq!(buffer.text(), "typed");
    }

    #[test]
    fn test_other_keystroke_resets_index() {
        let history = history_of(&["a", "b", "c"]);
        let mut buffer = EditBuffer::new();
        let mut navigator = HistoryNavigator::new(history.len());

        navigator.previous(&history, &mut buffer);
        navigator.end_keystroke(history.len());
        navigator.previous(&history, &mut buffer);
        navigator.end_keystroke(history.len());
        assert_eq!(navigator.index(), 1);

        // Eg: the user typed a char.
        navigator.end_keystroke(history.len());
        assert_eq!(navigator.index(), 3);
    }

    #[test]
    fn test_all_the_way_back_and_forward_again() {
        let history = history_of(&["a", "b", "c"]);
        let mut buffer = EditBuffer::from_text("draft");
        let mut navigator = HistoryNavigator::new(history.len());

        for _ in 0..history.len() {
            navigator.previous(&history, &mut buffer);
            navigator.end_keystroke(history.len());
        }
        assert_eq!((navigator.index(), buffer.text()), (0, "a".to_string()));

        for _ in 0..history.len() {
            navigator.next(&history, &mut buffer);
            navigator.end_keystroke(history.len());
        }
        assert_eq!((navigator.index(), buffer.text()), (3, String::new()));
    }

    #[test]
    fn test_empty_history() {
        let history = History::new(10);
        let mut buffer = EditBuffer::from_text("x");
        let mut navigator = HistoryNavigator::new(0);
        navigator.previous(&history, &mut buffer);
        navigator.next(&history, &mut buffer);
        assert_eq!((navigator.index(), buffer.text()), (0, "x".to_string()));
    }
}
