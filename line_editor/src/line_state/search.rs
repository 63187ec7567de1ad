// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Incremental regex search over the history (<kbd>Ctrl+R</kbd>).
//!
//! The search is a nested [`Session`] with its own prompt and no history. What the user
//! types there is a regex; after every key the display shows the newest history entry
//! (older than where the outer session is) that matches it:
//!
//! ```text
//! (reverse-i-search: git): git push origin main
//! (reverse-i-search: [x): [pattern not found]
//! ```
//!
//! When the nested session is accepted, the outer buffer takes the last entry that
//! matched. If nothing ever matched, the outer buffer is left alone.

use super::{LineState, Session, SessionKind};
use crate::{DEBUG_LINE_EDITOR_MOD, EditBuffer, History, KeyBindings, KeyReader,
            ReadlineError, WordBoundarySet};
use regex::Regex;
use std::{cell::RefCell, io::Write};

pub const PATTERN_NOT_FOUND: &str = "[pattern not found]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub line: String,
    pub index: usize,
}

/// Newest entry before `from_index` that `pattern` matches. An invalid regex matches
/// nothing.
#[must_use]
pub fn find_match(history: &History, pattern: &str, from_index: usize) -> Option<SearchMatch> {
    let regex = Regex::new(pattern).ok()?;
    history
        .search(&regex, from_index)
        .next()
        .map(|(line, index)| SearchMatch { line: line.to_string(), index })
}

/// Run the nested search session to completion.
///
/// # Errors
///
/// Whatever the nested session returns, eg: [`ReadlineError::Interrupted`].
pub fn run_interactive_search(
    history: &History,
    from_index: usize,
    bindings: KeyBindings,
    boundaries: &WordBoundarySet,
    prompt: &str,
    reader: &mut dyn KeyReader,
    term: &mut dyn Write,
) -> Result<Option<SearchMatch>, ReadlineError> {
    let last_match: RefCell<Option<SearchMatch>> = RefCell::new(None);

    {
        let transform = |buffer: &EditBuffer| -> String {
            let input = buffer.text();
            // Nothing typed yet; an empty regex would match every entry.
            if input.is_empty() {
                return "): ".to_string();
            }
            match find_match(history, &input, from_index) {
                Some(found) => {
                    let display = format!("{input}): {}", found.line);
                    *last_match.borrow_mut() = Some(found);
                    display
                }
                None => format!("{input}): {PATTERN_NOT_FOUND}"),
            }
        };

        let mut session = Session {
            kind: SessionKind::Search,
            line_state: LineState::new(prompt, bindings, 0),
            boundaries,
            history: None,
            search_prompt: prompt,
            transform: &transform,
            overlay: None,
            hinter: None,
        };
        session.run(reader, term)?;
    }

    let found = last_match.into_inner();

    // % is Display, ? is Debug.
    DEBUG_LINE_EDITOR_MOD.then(|| {
        tracing::debug!(
            message = "run_interactive_search -> done",
            from_index = from_index,
            found = ?found
        );
    });

    Ok(found)
}

impl Session<'_> {
    /// Start a nested search from where this session is in the history, and load the
    /// result into this session's buffer.
    pub(crate) fn interactive_search(
        &mut self,
        reader: &mut dyn KeyReader,
        term: &mut dyn Write,
    ) -> Result<(), ReadlineError> {
        let Some(history) = self.history else {
            return Ok(());
        };
        self.erase_overlay(term)?;

        let from_index = self.line_state.navigator.index();
        let found = run_interactive_search(
            history,
            from_index,
            self.line_state.dispatcher.bindings().clone(),
            self.boundaries,
            self.search_prompt,
            reader,
            term,
        )?;

        let line_state = &mut self.line_state;
        match found {
            Some(SearchMatch { line, index }) => {
                line_state.buffer.set_text(&line);
                line_state.buffer.move_end();
                line_state.navigator.jump_to(index);
            }
            None => line_state.navigator.jump_to(from_index),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StdoutMock, TermSize, TestVecKeyReader};
    use pretty_assertions::assert_eq;

    fn history_of(lines: &[&str]) -> History {
        let mut history = History::new(10);
        for line in lines {
            history.append(line).unwrap();
        }
        history
    }

    fn search(
        history: &History,
        keys: &str,
    ) -> (Result<Option<SearchMatch>, ReadlineError>, StdoutMock) {
        let mut reader = TestVecKeyReader::new(keys, TermSize::new(10, 80));
        let mut stdout_mock = StdoutMock::default();
        let result = run_interactive_search(
            history,
            history.len(),
            KeyBindings::default(),
            &WordBoundarySet::default(),
            "(search: ",
            &mut reader,
            &mut stdout_mock,
        );
        (result, stdout_mock)
    }

    #[test]
    fn test_find_match() {
        let history = history_of(&["git status", "ls", "git push"]);
        assert_eq!(
            find_match(&history, "git", 3),
            Some(SearchMatch { line: "git push".to_string(), index: 2 })
        );
        assert_eq!(find_match(&history, "git", 2).map(|it| it.index), Some(0));
        assert_eq!(find_match(&history, "[", 3), None);
        assert_eq!(find_match(&history, "cargo", 3), None);
    }

    #[test]
    fn test_search_returns_last_match() {
        let history = history_of(&["git status", "ls", "git push"]);
        let (result, stdout_mock) = search(&history, "stat\r");
        assert_eq!(
            result.unwrap(),
            Some(SearchMatch { line: "git status".to_string(), index: 0 })
        );
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("(search: stat): git status"));
        // Nested sessions do not start a new row.
        assert!(!output.contains("\r\n"));
    }

    #[test]
    fn test_search_keeps_last_good_match_while_typing() {
        let history = history_of(&["git status", "ls"]);
        let (result, stdout_mock) = search(&history, "ls[\r");
        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("ls[): [pattern not found]"));
        assert_eq!(result.unwrap().map(|it| it.line), Some("ls".to_string()));
    }

    #[test]
    fn test_search_without_match() {
        let history = history_of(&["git status"]);
        let (result, _) = search(&history, "zzz\r");
        assert_eq!(result.unwrap(), None);

        // Accepting before typing anything does not pick an entry either.
        let (result, stdout_mock) = search(&history, "\r");
        assert_eq!(result.unwrap(), None);
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("(search: ): "));
    }

    #[test]
    fn test_interrupt_inside_search() {
        let history = history_of(&["git status"]);
        let (result, _) = search(&history, "gi\x03");
        assert!(matches!(result, Err(ReadlineError::Interrupted)));
    }
}
