//! Session template
//!
//! The fixed seed a fresh session starts from: one mid-December shift of
//! a 27-room, three-floor property. Reset restores exactly this state.

use crate::models::{ExtraRequest, Room, RoomStatus};

pub const DEFAULT_SHIFT: &str = "Morning";
pub const DEFAULT_DATE: &str = "2025-12-14";
pub const DEFAULT_ATTENDANT: &str = "Sai";

/// The template room registry.
pub fn seed_rooms() -> Vec<Room> {
    use RoomStatus::*;
    vec![
        room("101", Occupied, Some(2)),
        room("102", VacantClean, None),
        room("103", Occupied, Some(2)),
        room("104", Occupied, Some(4)),
        room("105", VacantClean, None),
        room("106", Occupied, Some(4)),
        room("107", Occupied, Some(2)),
        room("108", DoNotDisturb, None),
        room("109", Occupied, Some(2)),
        room("201", SleepOut, None),
        room("202", Occupied, Some(2)),
        room("203", VacantDirty, None),
        room("204", Occupied, Some(4)),
        room("205", Occupied, Some(1)),
        room("206", Occupied, Some(2)),
        room("207", Occupied, Some(2)),
        room("208", Occupied, Some(2)),
        room("209", Occupied, Some(2)),
        room("301", Occupied, Some(3)),
        room("302", Occupied, Some(1)),
        room("303", Occupied, Some(1)),
        room("304", Occupied, Some(4)),
        room("305", Occupied, Some(2)),
        room("306", Occupied, Some(2)),
        room("307", DoNotDisturb, None),
        room("308", Occupied, Some(2)),
        room("309", Occupied, Some(2)),
    ]
}

/// Standing extra requests in the template.
pub fn seed_extras() -> Vec<ExtraRequest> {
    vec![extra("Baby Cot", "301"), extra("Extra Bed", "304")]
}

fn room(number: &str, status: RoomStatus, occupancy: Option<i32>) -> Room {
    Room {
        number: number.to_string(),
        status,
        occupancy,
        notes: String::new(),
    }
}

fn extra(kind: &str, room: &str) -> ExtraRequest {
    ExtraRequest {
        kind: kind.to_string(),
        room: room.to_string(),
    }
}
