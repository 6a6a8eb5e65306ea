//! # roomboard-core
//!
//! Housekeeping room board engine - session state and summary rendering only.
//!
//! ## Scope
//!
//! This crate handles WHAT the board knows:
//! - Room registry (status, occupancy, notes, extra requests)
//! - Update operations with the form's forgiving no-op semantics
//! - Summary formatter (stats, short codes, WhatsApp-ready message, share link)
//! - The fixed session template and reset
//!
//! Presentation (HOW the board is shown and edited) stays in application
//! code: the terminal front end lives in roomboard-tui.
//!
//! ## Example
//!
//! ```
//! use roomboard_core::{HousekeepingSession, RoomStatus};
//!
//! let mut session = HousekeepingSession::new();
//! session.set_status("102", RoomStatus::Occupied);
//! session.set_occupancy("102", 2);
//! assert!(session.message().contains("102- occ 2"));
//! ```

pub mod models;
pub mod registry;
pub mod session;
pub mod summary;
pub mod template;

// Re-exports
pub use models::{ExtraRequest, Room, RoomStatus};
pub use registry::{FloorFilter, RoomRegistry};
pub use session::HousekeepingSession;
pub use summary::{
    SummaryStats, build_message, build_share_link, compute_stats, format_date, format_room_status,
};
