// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that touches the real terminal: raw mode, reading keys, and the handful of
//! CSI sequences the editor emits.

// Attach.
pub mod csi_sequence;
pub mod key_reader;
pub mod raw_mode;

// Re-export.
pub use csi_sequence::*;
pub use key_reader::*;
pub use raw_mode::*;
