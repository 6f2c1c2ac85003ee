use crate::display::CallIcon;
use crate::domain::{CallId, Note};
use crate::rules::PaginationDescriptor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRowDto {
    pub id: CallId,
    pub direction: String,
    pub call_type: String,
    pub icon: Option<CallIcon>,
    pub title: Option<String>,
    pub subtitle: String,
    pub duration: String,
    pub timestamp: String,
    pub notes_summary: String,
    pub via: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroupDto {
    pub label: String,
    pub calls: Vec<CallRowDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallsViewDto {
    pub pagination: PaginationDescriptor,
    pub groups: Vec<DayGroupDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallDetailDto {
    #[serde(flatten)]
    pub row: CallRowDto,
    pub from: String,
    pub to: String,
    pub created_at: Option<String>,
    pub duration_ms: i64,
    pub is_archived: bool,
    pub notes: Vec<Note>,
}
