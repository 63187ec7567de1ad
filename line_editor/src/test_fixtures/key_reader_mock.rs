// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyReader, ReadlineError, TermSize};
use std::collections::VecDeque;

/// Replays a fixed list of keys, then reports [`ReadlineError::Eof`]. The terminal size
/// is fixed too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestVecKeyReader {
    pub keys: VecDeque<char>,
    pub size: TermSize,
}

impl TestVecKeyReader {
    #[must_use]
    pub fn new(keys: &str, size: TermSize) -> Self {
        Self { keys: keys.chars().collect(), size }
    }

    /// Queue more keys, eg: for the next [`crate::Readline::read_line`] call.
    pub fn push_keys(&mut self, keys: &str) { self.keys.extend(keys.chars()); }
}

impl KeyReader for TestVecKeyReader {
    fn read_key(&mut self) -> Result<char, ReadlineError> {
        self.keys.pop_front().ok_or(ReadlineError::Eof)
    }

    fn terminal_size(&self) -> Result<TermSize, ReadlineError> { Ok(self.size) }
}
