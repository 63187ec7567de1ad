// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word boundary detection for the word-wise edit operations.
//!
//! A [`WordBoundarySet`] is the union of a list of regex fragments. A char is a
//! boundary if the union matches it in full. The set is compiled once and only read
//! afterwards, so it is cheap to clone and share between sessions.
//!
//! ```text
//! "hello world"  → boundaries at: [5]      (whitespace)
//! "foo.bar()"    → boundaries at: [3, 7, 8] (punctuation)
//! ```

use regex::Regex;

/// Default fragments: whitespace and ASCII punctuation.
pub const DEFAULT_WORD_BOUNDARIES: [&str; 2] = [r"\s", r"[[:punct:]]"];

#[derive(Debug, Clone)]
pub struct WordBoundarySet {
    regex: Regex,
}

impl WordBoundarySet {
    /// Compile the union of `patterns`.
    ///
    /// # Errors
    ///
    /// Returns an error if any fragment is not a valid regex.
    pub fn try_new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, regex::Error> {
        let union = patterns
            .iter()
            .map(|pattern| format!("(?:{})", pattern.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        // An empty union must match nothing, not everything.
        let union = if union.is_empty() { r"[^\s\S]".to_string() } else { union };
        let regex = Regex::new(&format!("^(?:{union})$"))?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn is_boundary(&self, ch: char) -> bool {
        let mut buf = [0_u8; 4];
        self.regex.is_match(ch.encode_utf8(&mut buf))
    }
}

impl Default for WordBoundarySet {
    fn default() -> Self {
        Self::try_new(&DEFAULT_WORD_BOUNDARIES).expect("Invalid default word boundary regex")
    }
}
