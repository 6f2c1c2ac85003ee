use crate::domain::ids::CallId;
use crate::domain::note::Note;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side placed the call.
///
/// Values the source sends that are not recognized are kept verbatim in
/// `Unknown` so a single bad record never rejects a whole page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Inbound,
    Outbound,
    Unknown(String),
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
            Direction::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Direction::Unknown(_))
    }
}

impl From<String> for Direction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "inbound" => Direction::Inbound,
            "outbound" => Direction::Outbound,
            _ => Direction::Unknown(raw),
        }
    }
}

impl From<&str> for Direction {
    fn from(raw: &str) -> Self {
        Direction::from(raw.to_string())
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome classification of a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CallType {
    Missed,
    Answered,
    Voicemail,
    Unknown(String),
}

impl CallType {
    pub fn as_str(&self) -> &str {
        match self {
            CallType::Missed => "missed",
            CallType::Answered => "answered",
            CallType::Voicemail => "voicemail",
            CallType::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CallType::Unknown(_))
    }
}

impl From<String> for CallType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "missed" => CallType::Missed,
            "answered" => CallType::Answered,
            "voicemail" => CallType::Voicemail,
            _ => CallType::Unknown(raw),
        }
    }
}

impl From<&str> for CallType {
    fn from(raw: &str) -> Self {
        CallType::from(raw.to_string())
    }
}

impl From<CallType> for String {
    fn from(call_type: CallType) -> Self {
        match call_type {
            CallType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub id: CallId,
    pub direction: Direction,
    pub call_type: CallType,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub via: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Milliseconds.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub notes: Option<Vec<Note>>,
}

impl Call {
    pub fn notes(&self) -> &[Note] {
        self.notes.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::{Call, CallType, Direction};

    #[test]
    fn deserialize_keeps_unknown_enum_values() {
        let call: Call = serde_json::from_str(
            r#"{
                "id": "c1",
                "direction": "sideways",
                "call_type": "voicemail",
                "from": "+33 1",
                "to": "+33 2",
                "created_at": null,
                "duration": 61000
            }"#,
        )
        .unwrap();
        assert_eq!(call.direction, Direction::Unknown("sideways".to_string()));
        assert_eq!(call.call_type, CallType::Voicemail);
        assert!(call.created_at.is_none());
        assert!(call.notes().is_empty());
    }

    #[test]
    fn enum_values_round_trip_as_strings() {
        assert_eq!(String::from(Direction::Inbound), "inbound");
        assert_eq!(String::from(CallType::from("odd")), "odd");
        assert!(!CallType::from("Missed").is_known());
    }
}
