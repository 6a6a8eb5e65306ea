//! Extra Request Model (额外需求)

use serde::{Deserialize, Serialize};

/// Special-equipment request tied to a room.
///
/// `room` is a weak reference: it is rendered as-is in the summary and
/// never checked against the room registry. `kind` is free text; the UI
/// constrains it to a fixed vocabulary, the model does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraRequest {
    /// Request label, e.g. "Baby Cot"
    #[serde(rename = "type")]
    pub kind: String,
    /// Target room number
    pub room: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type() {
        let extra = ExtraRequest {
            kind: "Baby Cot".to_string(),
            room: "301".to_string(),
        };
        let json = serde_json::to_value(&extra).unwrap();
        assert_eq!(json["type"], "Baby Cot");
        assert_eq!(json["room"], "301");

        let back: ExtraRequest =
            serde_json::from_str(r#"{"type":"Extra Bed","room":"304"}"#).unwrap();
        assert_eq!(back.kind, "Extra Bed");
        assert_eq!(back.room, "304");
    }
}
