// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The escape char that starts every multi key sequence.
pub const ESC: char = '\x1b';

/// Where the scanner is, derived from what it has accumulated so far.
///
/// ```text
/// Idle ──ESC──▶ InEscape ──'['──▶ InCsi ──'5'|'6'──▶ InCsi
///  ▲                │                │
///  └── any other key resolves a token (accumulator + key) and returns here
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScannerState {
    Idle,
    InEscape,
    InCsi,
}

/// Accumulates a partial escape sequence until it resolves to a token.
///
/// There is no trap state: whatever key arrives, the scanner either extends a known
/// prefix or resolves, so every key sequence makes progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscapeScanner {
    pending: String,
}

impl EscapeScanner {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> ScannerState {
        match self.pending.as_str() {
            "" => ScannerState::Idle,
            "\x1b" => ScannerState::InEscape,
            _ => ScannerState::InCsi,
        }
    }

    #[must_use]
    pub fn pending(&self) -> &str { &self.pending }

    /// Feed one key. Returns the resolved token, or [None] if the key was swallowed
    /// into the accumulator.
    pub fn feed(&mut self, key: char) -> Option<String> {
        match (self.state(), key) {
            (ScannerState::Idle, ESC)
            | (ScannerState::InEscape, '[')
            | (ScannerState::InCsi, '5' | '6') => {
                self.pending.push(key);
                None
            }
            _ => {
                let mut token = std::mem::take(&mut self.pending);
                token.push(key);
                Some(token)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed_all(scanner: &mut EscapeScanner, keys: &str) -> Vec<String> {
        keys.chars().filter_map(|key| scanner.feed(key)).collect()
    }

    #[test]
    fn test_plain_keys_resolve_immediately() {
        let mut scanner = EscapeScanner::new();
        assert_eq!(feed_all(&mut scanner, "ab"), vec!["a", "b"]);
        assert_eq!(scanner.state(), ScannerState::Idle);
    }

    #[test]
    fn test_page_up_resolves_to_one_token() {
        let mut scanner = EscapeScanner::new();
        assert_eq!(scanner.feed('\x1b'), None);
        assert_eq!(scanner.state(), ScannerState::InEscape);
        assert_eq!(scanner.feed('['), None);
        assert_eq!(scanner.state(), ScannerState::InCsi);
        assert_eq!(scanner.feed('5'), None);
        assert_eq!(scanner.pending(), "\x1b[5");
        assert_eq!(scanner.feed('~'), Some("\x1b[5~".to_string()));
        assert_eq!(scanner.state(), ScannerState::Idle);
    }

    #[test]
    fn test_meta_key() {
        let mut scanner = EscapeScanner::new();
        assert_eq!(feed_all(&mut scanner, "\x1bx"), vec!["\x1bx"]);
    }

    #[test]
    fn test_arrow_key() {
        let mut scanner = EscapeScanner::new();
        assert_eq!(feed_all(&mut scanner, "\x1b[C"), vec!["\x1b[C"]);
    }

    #[test]
    fn test_double_escape_resolves() {
        let mut scanner = EscapeScanner::new();
        assert_eq!(feed_all(&mut scanner, "\x1b\x1b"), vec!["\x1b\x1b"]);
        assert_eq!(scanner.state(), ScannerState::Idle);
    }

    #[test]
    fn test_unknown_csi_parameter_resolves_early() {
        // `ESC [ 1 ; 5 C` is not understood; it breaks up into several tokens.
        let mut scanner = EscapeScanner::new();
        assert_eq!(
            feed_all(&mut scanner, "\x1b[1;5C"),
            vec!["\x1b[1", ";", "5", "C"]
        );
    }
}
