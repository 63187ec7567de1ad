// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EditOp;
use regex::Regex;

/// Decides whether a resolved key token triggers a [`Handler`].
#[derive(Debug, Clone)]
pub enum KeyMatcher {
    /// The token must equal this string.
    Exact(String),
    /// The token must be a single char in `from..=to`.
    Range(char, char),
    /// The regex must match the whole token.
    Pattern(Regex),
}

impl KeyMatcher {
    #[must_use]
    pub fn exact(token: impl Into<String>) -> Self { Self::Exact(token.into()) }

    /// Compile `pattern` anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regex.
    pub fn try_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(&format!("^(?:{pattern})$"))?))
    }

    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == token,
            Self::Range(from, to) => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => (*from..=*to).contains(&ch),
                    _ => false,
                }
            }
            Self::Pattern(regex) => regex.is_match(token),
        }
    }
}

/// One row of the binding table.
#[derive(Debug, Clone)]
pub struct Handler {
    pub matcher: KeyMatcher,
    pub op: EditOp,
}

impl Handler {
    #[must_use]
    pub fn new(matcher: KeyMatcher, op: EditOp) -> Self { Self { matcher, op } }

    /// Shorthand for the common case of binding one exact token.
    #[must_use]
    pub fn exact(token: &str, op: EditOp) -> Self { Self::new(KeyMatcher::exact(token), op) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("\x01", true)]
    #[test_case("\x1a", true)]
    #[test_case("\x1b", false)]
    #[test_case("a", false)]
    #[test_case("\x01\x02", false ; "multi char token")]
    #[test_case("", false ; "empty token")]
    fn test_range(token: &str, expected: bool) {
        let matcher = KeyMatcher::Range('\x01', '\x1a');
        assert_eq!(matcher.matches(token), expected);
    }

    #[test_case("\x1ba", true)]
    #[test_case("\x1bz", true)]
    #[test_case("\x1bA", false)]
    #[test_case("\x1bab", false ; "anchored at end")]
    #[test_case("x\x1ba", false ; "anchored at start")]
    fn test_pattern(token: &str, expected: bool) {
        let matcher = KeyMatcher::try_pattern("\x1b[a-z]").unwrap();
        assert_eq!(matcher.matches(token), expected);
    }

    #[test]
    fn test_exact() {
        let matcher = KeyMatcher::exact("\x1b[C");
        assert!(matcher.matches("\x1b[C"));
        assert!(!matcher.matches("\x1b[D"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(KeyMatcher::try_pattern("[").is_err());
    }
}
