use crate::domain::{CallType, Direction};
use crate::filter::selection::FilterCategory;
use crate::filter::FilterParseError;

pub fn parse_category(raw: &str) -> Result<FilterCategory, FilterParseError> {
    match raw.trim() {
        "direction" => Ok(FilterCategory::Direction),
        "type" | "call_type" => Ok(FilterCategory::CallType),
        other => Err(FilterParseError::UnknownCategory(other.to_string())),
    }
}

pub fn parse_direction(raw: &str) -> Result<Direction, FilterParseError> {
    match Direction::from(raw.trim()) {
        Direction::Unknown(_) => Err(FilterParseError::InvalidDirection(raw.to_string())),
        known => Ok(known),
    }
}

pub fn parse_call_type(raw: &str) -> Result<CallType, FilterParseError> {
    match CallType::from(raw.trim()) {
        CallType::Unknown(_) => Err(FilterParseError::InvalidCallType(raw.to_string())),
        known => Ok(known),
    }
}
