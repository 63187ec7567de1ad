// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory stand-ins for the terminal, so that whole editing sessions can be driven
//! and checked from tests (in this crate or downstream).

// Attach.
pub mod key_reader_mock;
pub mod stdout_mock;

// Re-export.
pub use key_reader_mock::*;
pub use stdout_mock::*;
