use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("id cannot be empty")]
    EmptyId,
    #[error("unknown call direction: {0}")]
    UnknownDirection(String),
    #[error("unknown call type: {0}")]
    UnknownCallType(String),
    #[error("invalid page size: {0} (expected 25, 50, 100 or 200)")]
    InvalidPageSize(String),
}
