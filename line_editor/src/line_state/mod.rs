// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One read line session: its buffer, its key dispatch state, the loop that drives it,
//! and the rendering it does after each key.

// Attach.
pub mod event_handlers;
pub mod render;
pub mod search;
pub mod session;
pub mod state;

// Re-export.
pub use render::*;
pub use search::*;
pub use session::*;
pub use state::*;
