// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Accepted lines, oldest first, optionally persisted to a file with one entry per line.

use crate::{DEBUG_LINE_EDITOR_MOD, ReadlineError};
use regex::Regex;
use std::{collections::VecDeque,
          fs::{self, OpenOptions},
          io::{self, Write},
          path::{Path, PathBuf}};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    max_size: usize,
    file_path: Option<PathBuf>,
}

impl History {
    /// History that lives in memory only.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self { entries: VecDeque::new(), max_size, file_path: None }
    }

    /// Load the history persisted at `file_path`. A missing file is an empty history;
    /// it is created on the first [`Self::append`]. Blank lines are skipped, and only the
    /// newest `max_size` entries are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can not be read.
    pub fn try_load(file_path: &Path, max_size: usize) -> Result<Self, ReadlineError> {
        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => String::new(),
            Err(error) => return Err(error.into()),
        };

        let mut entries: VecDeque<String> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect();
        while entries.len() > max_size {
            entries.pop_front();
        }

        // % is Display, ? is Debug.
        DEBUG_LINE_EDITOR_MOD.then(|| {
            tracing::debug!(
                message = "History::try_load",
                file_path = %file_path.display(),
                entries = entries.len()
            );
        });

        Ok(Self { entries, max_size, file_path: Some(file_path.to_path_buf()) })
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn max_size(&self) -> usize { self.max_size }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> { self.file_path.as_deref() }

    /// Newest last.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Add `line` as the newest entry and write it through to the file. When the history
    /// overflows, the oldest entries are dropped and the whole file is rewritten.
    ///
    /// Blank lines are not recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the history file can not be written.
    pub fn append(&mut self, line: &str) -> Result<(), ReadlineError> {
        if line.trim().is_empty() {
            return Ok(());
        }

        self.entries.push_back(line.to_string());
        let mut overflowed = false;
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
            overflowed = true;
        }

        let Some(file_path) = &self.file_path else {
            return Ok(());
        };

        if overflowed {
            // % is Display, ? is Debug.
            tracing::info!(
                message = "History::append -> over max size, rewriting file",
                file_path = %file_path.display(),
                max_size = self.max_size
            );
            let mut content = String::new();
            for entry in &self.entries {
                content.push_str(entry);
                content.push('\n');
            }
            fs::write(file_path, content)?;
        } else {
            let mut file = OpenOptions::new().create(true).append(true).open(file_path)?;
            writeln!(file, "{line}")?;
        }

        Ok(())
    }

    /// Entries matching `pattern`, walking backward from just before `from_index`.
    /// Yields `(line, index)` pairs, newest first.
    pub fn search<'a>(
        &'a self,
        pattern: &'a Regex,
        from_index: usize,
    ) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        let end = from_index.min(self.entries.len());
        (0..end).rev().filter_map(move |index| {
            let line = self.entries[index].as_str();
            pattern.is_match(line).then_some((line, index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn history_of(lines: &[&str]) -> History {
        let mut history = History::new(100);
        for line in lines {
            history.append(line).unwrap();
        }
        history
    }

    #[test]
    fn test_load_skips_blank_lines_and_keeps_newest() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("history.txt");
        fs::write(&file_path, "one\n\n   \ntwo\nthree\nfour\n").unwrap();

        let history = History::try_load(&file_path, 3).unwrap();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["two", "three", "four"]);
    }

    #[test]
    fn test_missing_file_is_empty_and_created_on_append() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("history.txt");

        let mut history = History::try_load(&file_path, 10).unwrap();
        assert!(history.is_empty());

        history.append("ls -la").unwrap();
        history.append("cd /tmp").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "ls -la\ncd /tmp\n");
    }

    #[test]
    fn test_overflow_rewrites_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("history.txt");

        let mut history = History::try_load(&file_path, 2).unwrap();
        for line in ["a", "b", "c"] {
            history.append(line).unwrap();
        }
        assert_eq!(history.len(), 2);
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "b\nc\n");

        let reloaded = History::try_load(&file_path, 2).unwrap();
        assert_eq!(reloaded, history);
    }

    #[test]
    fn test_blank_line_not_recorded() {
        let history = history_of(&["a", "", "  "]);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_search_walks_backward_from_index() {
        let history = history_of(&["git status", "ls", "git push", "cargo test"]);
        let pattern = Regex::new("git").unwrap();

        assert_eq!(
            history.search(&pattern, 4).collect::<Vec<_>>(),
            vec![("git push", 2), ("git status", 0)]
        );
        assert_eq!(
            history.search(&pattern, 2).collect::<Vec<_>>(),
            vec![("git status", 0)]
        );
        assert_eq!(history.search(&pattern, 0).next(), None);
        // Past the end is clamped.
        assert_eq!(history.search(&pattern, 99).next(), Some(("git push", 2)));
    }
}
