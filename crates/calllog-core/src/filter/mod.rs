mod parser;
mod selection;

use thiserror::Error;

pub use parser::{parse_call_type, parse_category, parse_direction};
pub use selection::{CallFilter, FilterCategory};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("unknown filter category: {0} (expected direction or type)")]
    UnknownCategory(String),
    #[error("invalid direction: {0} (expected inbound or outbound)")]
    InvalidDirection(String),
    #[error("invalid call type: {0} (expected missed, answered or voicemail)")]
    InvalidCallType(String),
}
