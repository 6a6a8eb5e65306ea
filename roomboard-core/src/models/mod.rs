//! Data models
//!
//! Shared between the registry and the TUI shell.
//! Wire names follow the summary form's JSON shape (`type` for the
//! extra-request label, SCREAMING_SNAKE_CASE statuses).

pub mod extra;
pub mod room;

// Re-exports
pub use extra::*;
pub use room::*;
