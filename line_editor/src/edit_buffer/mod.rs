// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod edit_buffer_impl;
pub mod word_boundaries;

// Re-export.
pub use edit_buffer_impl::*;
pub use word_boundaries::*;
