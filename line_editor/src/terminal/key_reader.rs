// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ReadlineError, TermSize};
use std::io::{self, Read};

/// Source of keys and of the terminal size.
///
/// The editor calls [`Self::read_key`] once per iteration and blocks until it returns,
/// and it samples [`Self::terminal_size`] fresh before each repaint. Swap in
/// [`crate::TestVecKeyReader`] to drive the editor from a test.
pub trait KeyReader {
    /// # Errors
    ///
    /// [`ReadlineError::Eof`] once the source is exhausted, or an IO error.
    fn read_key(&mut self) -> Result<char, ReadlineError>;

    /// # Errors
    ///
    /// Returns an error if the size can not be queried.
    fn terminal_size(&self) -> Result<TermSize, ReadlineError>;
}

/// Reads UTF-8 encoded keys from stdin, one byte at a time. Expects the terminal to be in
/// raw mode (see [`crate::RawModeGuard`]), otherwise keys only arrive after Enter.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinKeyReader;

impl KeyReader for StdinKeyReader {
    fn read_key(&mut self) -> Result<char, ReadlineError> {
        let mut stdin = io::stdin().lock();
        let mut next_byte = || -> Result<u8, ReadlineError> {
            let mut buf = [0_u8; 1];
            match stdin.read_exact(&mut buf) {
                Ok(()) => Ok(buf[0]),
                Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                    Err(ReadlineError::Eof)
                }
                Err(error) => Err(error.into()),
            }
        };
        let first = next_byte()?;
        decode_utf8_key(first, next_byte)
    }

    fn terminal_size(&self) -> Result<TermSize, ReadlineError> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(TermSize::new(rows, cols))
    }
}

/// Assemble one char from its leading byte, pulling continuation bytes from `next_byte`.
/// Malformed input decodes to [`char::REPLACEMENT_CHARACTER`] rather than failing.
///
/// # Errors
///
/// Whatever `next_byte` returns.
pub fn decode_utf8_key(
    first: u8,
    mut next_byte: impl FnMut() -> Result<u8, ReadlineError>,
) -> Result<char, ReadlineError> {
    let width = match first {
        0x00..=0x7f => return Ok(char::from(first)),
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => return Ok(char::REPLACEMENT_CHARACTER),
    };

    let mut buf = [first, 0, 0, 0];
    for slot in buf.iter_mut().take(width).skip(1) {
        *slot = next_byte()?;
    }

    Ok(std::str::from_utf8(&buf[..width])
        .ok()
        .and_then(|it| it.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn decode(bytes: &[u8]) -> Result<char, ReadlineError> {
        let mut rest = bytes[1..].iter().copied();
        decode_utf8_key(bytes[0], || rest.next().ok_or(ReadlineError::Eof))
    }

    #[test_case(b"a", 'a')]
    #[test_case(b"\x1b", '\x1b')]
    #[test_case("é".as_bytes(), 'é')]
    #[test_case("€".as_bytes(), '€')]
    #[test_case("🦀".as_bytes(), '🦀')]
    #[test_case(b"\xc3\x28", char::REPLACEMENT_CHARACTER ; "bad continuation")]
    #[test_case(b"\x80", char::REPLACEMENT_CHARACTER ; "stray continuation")]
    fn test_decode(bytes: &[u8], expected: char) {
        assert_eq!(decode(bytes).unwrap(), expected);
    }

    #[test]
    fn test_truncated_sequence_is_eof() {
        assert!(matches!(decode(b"\xe2\x82"), Err(ReadlineError::Eof)));
    }
}
