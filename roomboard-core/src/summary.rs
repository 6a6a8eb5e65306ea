//! Summary formatter
//!
//! Pure derivations over a registry snapshot: aggregate stats, short
//! status codes, the shareable message and its deep link. The message is
//! pasted verbatim into chat, so spacing and punctuation here are
//! load-bearing.

use chrono::{Datelike, NaiveDate};

use crate::models::{ExtraRequest, Room, RoomStatus};
use crate::registry::numeric_room_key;

/// Month abbreviations for rendered dates; `May` carries no period.
const MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

/// Shown in place of a blank attendant name.
const NO_ATTENDANT: &str = "—";

/// Messaging deep link; the encoded message is the sole parameter.
const SHARE_BASE_URL: &str = "https://wa.me/?text=";

/// Aggregate counts over the room collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub total_rooms: i32,
    pub occupied_rooms: i32,
    pub total_guests: i32,
    pub vacant_clean_rooms: i32,
    pub vacant_dirty_rooms: i32,
    pub dnd_rooms: i32,
}

/// Render an ISO `YYYY-MM-DD` date as e.g. `Dec. 14,2025`.
///
/// No space between day and year. Empty input renders empty; anything
/// unparseable passes through unchanged.
pub fn format_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {},{}",
            MONTHS[date.month0() as usize],
            date.day(),
            date.year()
        ),
        Err(_) => value.to_string(),
    }
}

/// Short status code for the message, e.g. `VC` or `occ 2`.
///
/// Occupied rooms append the guest count, falling back to 1 when the
/// occupancy is missing or non-positive.
pub fn format_room_status(room: &Room) -> String {
    match room.status {
        RoomStatus::Occupied => {
            let guests = room.occupancy.filter(|&n| n > 0).unwrap_or(1);
            format!("occ {guests}")
        }
        RoomStatus::VacantClean => "VC".to_string(),
        RoomStatus::VacantDirty => "VD".to_string(),
        RoomStatus::DoNotDisturb => "DND".to_string(),
        RoomStatus::SleepOut => "S/O".to_string(),
        RoomStatus::OutOfOrder => "OOO".to_string(),
    }
}

/// Single pass over the rooms. `total_guests` counts `occupancy` (or 1
/// when missing) for occupied rooms only; sleep-outs and out-of-order
/// rooms count toward the total alone.
pub fn compute_stats(rooms: &[Room]) -> SummaryStats {
    let mut stats = SummaryStats {
        total_rooms: rooms.len() as i32,
        ..SummaryStats::default()
    };
    for room in rooms {
        match room.status {
            RoomStatus::Occupied => {
                stats.occupied_rooms += 1;
                stats.total_guests += room.occupancy.unwrap_or(1);
            }
            RoomStatus::VacantClean => stats.vacant_clean_rooms += 1,
            RoomStatus::VacantDirty => stats.vacant_dirty_rooms += 1,
            RoomStatus::DoNotDisturb => stats.dnd_rooms += 1,
            RoomStatus::SleepOut | RoomStatus::OutOfOrder => {}
        }
    }
    stats
}

/// Build the flat WhatsApp-ready summary: header, per-room codes in
/// numeric room order, then extra requests. Segments are joined by
/// single spaces and empty segments are dropped, so an empty board
/// yields the bare header with no trailing separator.
pub fn build_message(
    shift: &str,
    date: &str,
    attendant: &str,
    rooms: &[Room],
    extras: &[ExtraRequest],
) -> String {
    let attendant = attendant.trim();
    let header = format!(
        "Occupancy - {shift} Date : {} Attendant : {}",
        format_date(date),
        if attendant.is_empty() {
            NO_ATTENDANT
        } else {
            attendant
        },
    );

    let mut ordered: Vec<&Room> = rooms.iter().collect();
    ordered.sort_by_key(|room| numeric_room_key(&room.number));
    let room_line = ordered
        .iter()
        .map(|room| {
            let status = format_room_status(room);
            let note = room.notes.trim();
            if note.is_empty() {
                format!("{}- {status}", room.number)
            } else {
                format!("{}- {status} ({note})", room.number)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let extras_line = extras
        .iter()
        .map(|extra| format!("{}:{}", extra.kind, extra.room))
        .collect::<Vec<_>>()
        .join(" ");

    [header, room_line, extras_line]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percent-encode `message` into the messaging deep link.
pub fn build_share_link(message: &str) -> String {
    format!("{SHARE_BASE_URL}{}", urlencoding::encode(message))
}
