// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

pub const CSI_START: &str = "\x1b[";

/// The CSI sequences the editor writes. Columns are 1-based.
///
/// Counts of `0` are emitted as-is; terminals treat `CSI 0 F` like `CSI 1 F`, so callers
/// must skip zero moves themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CsiSequence {
    /// `CSI n G`
    CursorHorizontalAbsolute(u16),
    /// `CSI n E`, to column 1 of the n-th next line.
    CursorNextLine(u16),
    /// `CSI n F`, to column 1 of the n-th previous line.
    CursorPrevLine(u16),
    /// `CSI 0 K`
    EraseToEndOfLine,
    /// `CSI 0 m`
    ResetStyle,
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::CursorHorizontalAbsolute(col) => write!(f, "{CSI_START}{col}G"),
            Self::CursorNextLine(count) => write!(f, "{CSI_START}{count}E"),
            Self::CursorPrevLine(count) => write!(f, "{CSI_START}{count}F"),
            Self::EraseToEndOfLine => write!(f, "{CSI_START}0K"),
            Self::ResetStyle => write!(f, "{CSI_START}0m"),
        }
    }
}
