//! Room registry
//!
//! In-memory room and extra-request state for one session. All mutation
//! goes through the update operations here; a lookup that misses is a
//! silent no-op rather than an error, matching the form's forgiving
//! semantics.

use std::collections::BTreeSet;
use std::fmt;

use crate::models::{ExtraRequest, Room, RoomStatus};

/// Floor filter: every room, or only rooms on one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloorFilter {
    #[default]
    All,
    Level(char),
}

impl fmt::Display for FloorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorFilter::All => write!(f, "All"),
            FloorFilter::Level(code) => write!(f, "{code}"),
        }
    }
}

/// Session-scoped room state.
#[derive(Debug, Clone)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    extras: Vec<ExtraRequest>,
}

impl RoomRegistry {
    pub fn new(rooms: Vec<Room>, extras: Vec<ExtraRequest>) -> Self {
        Self { rooms, extras }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn extras(&self) -> &[ExtraRequest] {
        &self.extras
    }

    /// Replace a room's status.
    ///
    /// Entering Occupied keeps the prior occupancy, defaulting to 1 when
    /// there was none; leaving Occupied always clears it. Unknown room
    /// numbers are a no-op.
    pub fn set_status(&mut self, number: &str, status: RoomStatus) {
        if let Some(room) = self.room_mut(number) {
            room.occupancy = if status.is_occupied() {
                room.occupancy.or(Some(1))
            } else {
                None
            };
            room.status = status;
        }
    }

    /// Set a room's guest count, clamped into 1..=6; zero and negative
    /// inputs land on 1. Only meaningful for occupied rooms, but the
    /// check is the caller's job, not enforced here.
    pub fn set_occupancy(&mut self, number: &str, guests: i32) {
        if let Some(room) = self.room_mut(number) {
            room.occupancy = Some(guests.clamp(1, 6));
        }
    }

    /// Replace a room's notes verbatim; trimming happens at render time.
    pub fn set_notes(&mut self, number: &str, notes: String) {
        if let Some(room) = self.room_mut(number) {
            room.notes = notes;
        }
    }

    /// Append an extra request. The room number is stored trimmed and a
    /// blank one rejects the whole request; the kind is stored untouched.
    pub fn add_extra(&mut self, kind: String, room: &str) {
        let room = room.trim();
        if room.is_empty() {
            tracing::debug!(%kind, "dropping extra request with blank room");
            return;
        }
        self.extras.push(ExtraRequest {
            kind,
            room: room.to_string(),
        });
    }

    /// Remove the extra request at `index`; out-of-range is a no-op.
    pub fn remove_extra(&mut self, index: usize) {
        if index < self.extras.len() {
            self.extras.remove(index);
        }
    }

    /// Distinct floor codes in lexical order, with `All` prepended.
    pub fn floors(&self) -> Vec<FloorFilter> {
        let codes: BTreeSet<char> = self.rooms.iter().filter_map(Room::floor).collect();
        let mut floors = vec![FloorFilter::All];
        floors.extend(codes.into_iter().map(FloorFilter::Level));
        floors
    }

    /// Rooms matching `filter`, ascending by numeric room number (the
    /// floors list, by contrast, orders its codes lexically).
    pub fn rooms_on_floor(&self, filter: FloorFilter) -> Vec<Room> {
        let mut rooms: Vec<Room> = self
            .rooms
            .iter()
            .filter(|room| match filter {
                FloorFilter::All => true,
                FloorFilter::Level(code) => room.floor() == Some(code),
            })
            .cloned()
            .collect();
        rooms.sort_by_key(|room| numeric_room_key(&room.number));
        rooms
    }

    fn room_mut(&mut self, number: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }
}

/// Numeric sort key for room numbers; non-numeric numbers sort first.
pub(crate) fn numeric_room_key(number: &str) -> i64 {
    number.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(number: &str, status: RoomStatus, occupancy: Option<i32>) -> Room {
        Room {
            number: number.to_string(),
            status,
            occupancy,
            notes: String::new(),
        }
    }

    fn registry() -> RoomRegistry {
        RoomRegistry::new(
            vec![
                room("109", RoomStatus::Occupied, Some(2)),
                room("101", RoomStatus::VacantClean, None),
                room("105", RoomStatus::Occupied, Some(4)),
                room("203", RoomStatus::VacantDirty, None),
                room("301", RoomStatus::DoNotDisturb, None),
            ],
            Vec::new(),
        )
    }

    fn get<'a>(registry: &'a RoomRegistry, number: &str) -> &'a Room {
        registry
            .rooms()
            .iter()
            .find(|room| room.number == number)
            .unwrap()
    }

    #[test]
    fn occupancy_is_clamped_into_range() {
        let mut reg = registry();
        let cases = [
            (i32::MIN, 1),
            (-3, 1),
            (0, 1),
            (1, 1),
            (4, 4),
            (6, 6),
            (7, 6),
            (i32::MAX, 6),
        ];
        for (input, expected) in cases {
            reg.set_occupancy("109", input);
            assert_eq!(get(&reg, "109").occupancy, Some(expected), "input {input}");
        }
    }

    #[test]
    fn entering_occupied_defaults_missing_occupancy_to_one() {
        let mut reg = registry();
        reg.set_status("101", RoomStatus::Occupied);
        let room = get(&reg, "101");
        assert_eq!(room.status, RoomStatus::Occupied);
        assert_eq!(room.occupancy, Some(1));
    }

    #[test]
    fn re_entering_occupied_keeps_prior_occupancy() {
        let mut reg = registry();
        reg.set_status("109", RoomStatus::Occupied);
        assert_eq!(get(&reg, "109").occupancy, Some(2));
    }

    #[test]
    fn leaving_occupied_clears_occupancy() {
        let mut reg = registry();
        reg.set_status("109", RoomStatus::SleepOut);
        let room = get(&reg, "109");
        assert_eq!(room.status, RoomStatus::SleepOut);
        assert_eq!(room.occupancy, None);
    }

    #[test]
    fn mutating_unknown_room_is_noop() {
        let mut reg = registry();
        let before = reg.rooms().to_vec();
        reg.set_status("999", RoomStatus::OutOfOrder);
        reg.set_occupancy("999", 5);
        reg.set_notes("999", "ghost".to_string());
        assert_eq!(reg.rooms(), &before[..]);
    }

    #[test]
    fn notes_are_stored_verbatim() {
        let mut reg = registry();
        reg.set_notes("203", "  needs towels  ".to_string());
        assert_eq!(get(&reg, "203").notes, "  needs towels  ");
    }

    #[test]
    fn add_extra_with_blank_room_is_noop() {
        let mut reg = registry();
        reg.add_extra("Baby Cot".to_string(), "   ");
        assert!(reg.extras().is_empty());
    }

    #[test]
    fn add_extra_trims_room_and_preserves_order() {
        let mut reg = registry();
        reg.add_extra("Baby Cot".to_string(), "405");
        reg.add_extra("Extra Bed".to_string(), " 101 ");
        assert_eq!(
            reg.extras(),
            &[
                ExtraRequest {
                    kind: "Baby Cot".to_string(),
                    room: "405".to_string(),
                },
                ExtraRequest {
                    kind: "Extra Bed".to_string(),
                    room: "101".to_string(),
                },
            ]
        );
    }

    #[test]
    fn add_extra_keeps_kind_untouched() {
        let mut reg = registry();
        reg.add_extra("  custom thing  ".to_string(), "102");
        assert_eq!(reg.extras()[0].kind, "  custom thing  ");
    }

    #[test]
    fn remove_extra_drops_the_indexed_entry() {
        let mut reg = registry();
        reg.add_extra("Baby Cot".to_string(), "101");
        reg.add_extra("Rollaway".to_string(), "203");
        reg.remove_extra(0);
        assert_eq!(reg.extras().len(), 1);
        assert_eq!(reg.extras()[0].kind, "Rollaway");
    }

    #[test]
    fn remove_extra_out_of_range_is_noop() {
        let mut reg = registry();
        reg.add_extra("Baby Cot".to_string(), "101");
        reg.remove_extra(5);
        assert_eq!(reg.extras().len(), 1);
    }

    #[test]
    fn floors_list_starts_with_all_sentinel() {
        let labels: Vec<String> = registry()
            .floors()
            .iter()
            .map(|floor| floor.to_string())
            .collect();
        assert_eq!(labels, ["All", "1", "2", "3"]);
    }

    #[test]
    fn floor_filter_sorts_rooms_numerically() {
        let numbers: Vec<String> = registry()
            .rooms_on_floor(FloorFilter::Level('1'))
            .into_iter()
            .map(|room| room.number)
            .collect();
        assert_eq!(numbers, ["101", "105", "109"]);
    }

    #[test]
    fn all_filter_returns_every_room_sorted() {
        let numbers: Vec<String> = registry()
            .rooms_on_floor(FloorFilter::All)
            .into_iter()
            .map(|room| room.number)
            .collect();
        assert_eq!(numbers, ["101", "105", "109", "203", "301"]);
    }

    #[test]
    fn unknown_floor_yields_no_rooms() {
        assert!(registry().rooms_on_floor(FloorFilter::Level('9')).is_empty());
    }
}
