//! Housekeeping session
//!
//! Single owner of all mutable state for one shift: metadata, floor
//! filter and the room registry. Mutations go through this controller
//! and derived values (stats, message, share link) are recomputed on
//! demand; nothing here is cached.

use crate::models::{ExtraRequest, Room, RoomStatus};
use crate::registry::{FloorFilter, RoomRegistry};
use crate::summary::{self, SummaryStats};
use crate::template;

/// All state for one housekeeping shift.
#[derive(Debug, Clone)]
pub struct HousekeepingSession {
    /// Shift label, e.g. "Morning"
    pub shift: String,
    /// Report date, ISO `YYYY-MM-DD`
    pub date: String,
    /// Attendant name, may be blank
    pub attendant: String,
    /// Floor filter for the room list view
    pub floor: FloorFilter,
    registry: RoomRegistry,
}

impl HousekeepingSession {
    /// Fresh session seeded from the template.
    pub fn new() -> Self {
        Self {
            shift: template::DEFAULT_SHIFT.to_string(),
            date: template::DEFAULT_DATE.to_string(),
            attendant: template::DEFAULT_ATTENDANT.to_string(),
            floor: FloorFilter::All,
            registry: RoomRegistry::new(template::seed_rooms(), template::seed_extras()),
        }
    }

    /// Throw away every change and return to the template.
    pub fn reset(&mut self) {
        tracing::info!("resetting session to template");
        *self = Self::new();
    }

    pub fn rooms(&self) -> &[Room] {
        self.registry.rooms()
    }

    pub fn extras(&self) -> &[ExtraRequest] {
        self.registry.extras()
    }

    pub fn set_status(&mut self, number: &str, status: RoomStatus) {
        self.registry.set_status(number, status);
    }

    pub fn set_occupancy(&mut self, number: &str, guests: i32) {
        self.registry.set_occupancy(number, guests);
    }

    pub fn set_notes(&mut self, number: &str, notes: String) {
        self.registry.set_notes(number, notes);
    }

    pub fn add_extra(&mut self, kind: String, room: &str) {
        self.registry.add_extra(kind, room);
    }

    pub fn remove_extra(&mut self, index: usize) {
        self.registry.remove_extra(index);
    }

    /// Floor tabs for the filter row.
    pub fn floors(&self) -> Vec<FloorFilter> {
        self.registry.floors()
    }

    /// Rooms under the current floor filter, numerically sorted.
    pub fn visible_rooms(&self) -> Vec<Room> {
        self.registry.rooms_on_floor(self.floor)
    }

    pub fn stats(&self) -> SummaryStats {
        summary::compute_stats(self.registry.rooms())
    }

    /// The shareable message, always over every room regardless of the
    /// floor filter.
    pub fn message(&self) -> String {
        summary::build_message(
            &self.shift,
            &self.date,
            &self.attendant,
            self.registry.rooms(),
            self.registry.extras(),
        )
    }

    pub fn share_link(&self) -> String {
        summary::build_share_link(&self.message())
    }
}

impl Default for HousekeepingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_matches_template() {
        let session = HousekeepingSession::new();
        assert_eq!(session.shift, "Morning");
        assert_eq!(session.date, "2025-12-14");
        assert_eq!(session.attendant, "Sai");
        assert_eq!(session.floor, FloorFilter::All);
        assert_eq!(session.rooms().len(), 27);
        assert_eq!(session.extras().len(), 2);
    }

    #[test]
    fn reset_restores_template_after_changes() {
        let mut session = HousekeepingSession::new();
        session.shift = "Night".to_string();
        session.attendant.clear();
        session.floor = FloorFilter::Level('2');
        session.set_status("101", RoomStatus::OutOfOrder);
        session.add_extra("Wheelchair".to_string(), "105");
        session.remove_extra(0);

        session.reset();

        assert_eq!(session.shift, "Morning");
        assert_eq!(session.floor, FloorFilter::All);
        let room = session
            .rooms()
            .iter()
            .find(|room| room.number == "101")
            .unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
        assert_eq!(room.occupancy, Some(2));
        assert_eq!(session.extras().len(), 2);
        assert_eq!(session.extras()[0].kind, "Baby Cot");
    }

    #[test]
    fn floor_filter_limits_visible_rooms() {
        let mut session = HousekeepingSession::new();
        session.floor = FloorFilter::Level('2');
        let visible = session.visible_rooms();
        assert_eq!(visible.len(), 9);
        assert!(visible.iter().all(|room| room.number.starts_with('2')));
        assert_eq!(visible[0].number, "201");
    }

    #[test]
    fn message_reflects_registry_changes_immediately() {
        let mut session = HousekeepingSession::new();
        let before = session.message();
        session.set_status("102", RoomStatus::VacantDirty);
        let after = session.message();
        assert!(before.contains("102- VC"));
        assert!(after.contains("102- VD"));
    }

    #[test]
    fn template_stats_add_up() {
        let stats = HousekeepingSession::new().stats();
        assert_eq!(stats.total_rooms, 27);
        assert_eq!(stats.occupied_rooms, 21);
        assert_eq!(stats.total_guests, 48);
        assert_eq!(stats.vacant_clean_rooms, 2);
        assert_eq!(stats.vacant_dirty_rooms, 1);
        assert_eq!(stats.dnd_rooms, 2);
    }

    #[test]
    fn template_message_renders_known_shape() {
        let session = HousekeepingSession::new();
        let message = session.message();
        assert!(message.starts_with(
            "Occupancy - Morning Date : Dec. 14,2025 Attendant : Sai 101- occ 2 102- VC"
        ));
        assert!(message.ends_with("Baby Cot:301 Extra Bed:304"));
    }

    #[test]
    fn share_link_wraps_current_message() {
        let session = HousekeepingSession::new();
        let link = session.share_link();
        assert!(link.starts_with("https://wa.me/?text=Occupancy%20-%20Morning"));
    }
}
