// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod history_navigator;
pub mod history_store;

// Re-export.
pub use history_navigator::*;
pub use history_store::*;
