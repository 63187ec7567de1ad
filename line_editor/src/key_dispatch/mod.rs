// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn raw keys into [`EditOp`]s.
//!
//! | Module           | Responsibility                                              |
//! |------------------|-------------------------------------------------------------|
//! | `escape_scanner` | Accumulate partial escape sequences into complete tokens    |
//! | `key_matcher`    | [`KeyMatcher`] (exact, range, pattern) and [`Handler`]      |
//! | `edit_op`        | The named operations a [`Handler`] can trigger              |
//! | `key_bindings`   | The ordered handler table, and the emacs style defaults     |
//! | `dispatcher`     | Glue: raw key → token → first matching handler or fallback  |

// Attach.
pub mod dispatcher;
pub mod edit_op;
pub mod escape_scanner;
pub mod key_bindings;
pub mod key_matcher;

// Re-export.
pub use dispatcher::*;
pub use edit_op::*;
pub use escape_scanner::*;
pub use key_bindings::*;
pub use key_matcher::*;
