//! Room Model (客房)

use serde::{Deserialize, Serialize};

/// Housekeeping room status (房态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    /// Guests checked in
    Occupied,
    /// Cleaned and ready to sell
    #[default]
    VacantClean,
    /// Checked out, awaiting cleaning
    VacantDirty,
    /// Guest declined service
    DoNotDisturb,
    /// Bed untouched overnight
    SleepOut,
    /// Pulled from inventory for maintenance
    OutOfOrder,
}

impl RoomStatus {
    /// Every status, in picker order.
    pub const ALL: [RoomStatus; 6] = [
        RoomStatus::Occupied,
        RoomStatus::VacantClean,
        RoomStatus::VacantDirty,
        RoomStatus::DoNotDisturb,
        RoomStatus::SleepOut,
        RoomStatus::OutOfOrder,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Occupied => "Occupied",
            RoomStatus::VacantClean => "Vacant Clean",
            RoomStatus::VacantDirty => "Vacant Dirty",
            RoomStatus::DoNotDisturb => "Do Not Disturb",
            RoomStatus::SleepOut => "Sleep Out",
            RoomStatus::OutOfOrder => "Out of Order",
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, RoomStatus::Occupied)
    }
}

/// Room entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room number; the first character doubles as the floor code
    pub number: String,
    pub status: RoomStatus,
    /// Guest count in 1..=6, only meaningful while Occupied
    pub occupancy: Option<i32>,
    /// Housekeeping notes, free text
    #[serde(default)]
    pub notes: String,
}

impl Room {
    /// Floor code, i.e. the first character of the room number.
    pub fn floor(&self) -> Option<char> {
        self.number.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&RoomStatus::DoNotDisturb).unwrap();
        assert_eq!(json, "\"DO_NOT_DISTURB\"");

        let status: RoomStatus = serde_json::from_str("\"SLEEP_OUT\"").unwrap();
        assert_eq!(status, RoomStatus::SleepOut);
    }

    #[test]
    fn room_round_trips_through_json() {
        let room = Room {
            number: "204".to_string(),
            status: RoomStatus::Occupied,
            occupancy: Some(4),
            notes: "late checkout".to_string(),
        };
        let json = serde_json::to_string(&room).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }

    #[test]
    fn missing_notes_default_to_empty() {
        let room: Room =
            serde_json::from_str(r#"{"number":"102","status":"VACANT_CLEAN","occupancy":null}"#)
                .unwrap();
        assert_eq!(room.notes, "");
        assert_eq!(room.occupancy, None);
    }

    #[test]
    fn floor_is_first_character() {
        let room = Room {
            number: "305".to_string(),
            status: RoomStatus::VacantClean,
            occupancy: None,
            notes: String::new(),
        };
        assert_eq!(room.floor(), Some('3'));
    }
}
