use crate::domain::{Call, CallType, Direction};
use crate::dto::{CallDetailDto, CallRowDto, CallsViewDto, DayGroupDto};
use crate::error::CoreError;
use crate::time::{created_at_instant, format_timestamp, DisplayZone};
use crate::view::CallsView;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallIcon {
    DiagonalDown,
    DiagonalUp,
}

impl CallIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CallIcon::DiagonalDown => "↙",
            CallIcon::DiagonalUp => "↗",
        }
    }
}

pub fn call_icon(direction: &Direction) -> Result<CallIcon, CoreError> {
    match direction {
        Direction::Inbound => Ok(CallIcon::DiagonalDown),
        Direction::Outbound => Ok(CallIcon::DiagonalUp),
        Direction::Unknown(raw) => Err(CoreError::UnknownDirection(raw.clone())),
    }
}

pub fn call_title(call_type: &CallType) -> Result<&'static str, CoreError> {
    match call_type {
        CallType::Missed => Ok("Missed call"),
        CallType::Answered => Ok("Call answered"),
        CallType::Voicemail => Ok("Voicemail"),
        CallType::Unknown(raw) => Err(CoreError::UnknownCallType(raw.clone())),
    }
}

pub fn call_subtitle(call: &Call) -> String {
    match call.direction {
        Direction::Inbound => format!("from {}", call.from),
        _ => format!("to {}", call.to),
    }
}

/// Milliseconds floored to whole seconds; negative input reads as zero.
pub fn format_duration(duration_ms: i64) -> String {
    let total_seconds = duration_ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

pub fn notes_summary(call: &Call) -> String {
    match call.notes().len() {
        0 => String::new(),
        count => format!("Call has {count} notes"),
    }
}

pub fn call_row(call: &Call, zone: DisplayZone) -> CallRowDto {
    let icon = call_icon(&call.direction)
        .map_err(|err| {
            warn!(id = %call.id, error = %err, "icon mapping failed");
        })
        .ok();
    let title = call_title(&call.call_type)
        .map_err(|err| {
            warn!(id = %call.id, error = %err, "title mapping failed");
        })
        .ok()
        .map(str::to_string);

    CallRowDto {
        id: call.id.clone(),
        direction: call.direction.to_string(),
        call_type: call.call_type.to_string(),
        icon,
        title,
        subtitle: call_subtitle(call),
        duration: format_duration(call.duration),
        timestamp: format_timestamp(created_at_instant(call.created_at.as_deref()), zone),
        notes_summary: notes_summary(call),
        via: call.via.clone(),
    }
}

pub fn view_dto(view: &CallsView, zone: DisplayZone) -> CallsViewDto {
    CallsViewDto {
        pagination: view.pagination,
        groups: view
            .groups
            .iter()
            .map(|group| DayGroupDto {
                label: group.label.clone(),
                calls: group.calls.iter().map(|call| call_row(call, zone)).collect(),
            })
            .collect(),
    }
}

pub fn call_detail(call: &Call, zone: DisplayZone) -> CallDetailDto {
    CallDetailDto {
        row: call_row(call, zone),
        from: call.from.clone(),
        to: call.to.clone(),
        created_at: call.created_at.clone(),
        duration_ms: call.duration,
        is_archived: call.is_archived,
        notes: call.notes().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        call_icon, call_row, call_subtitle, call_title, format_duration, notes_summary, CallIcon,
    };
    use crate::domain::{Call, CallId, CallType, Direction, Note, NoteId};
    use crate::error::CoreError;
    use crate::time::DisplayZone;

    fn call(direction: &str, call_type: &str) -> Call {
        Call {
            id: CallId::new("c-1").unwrap(),
            direction: Direction::from(direction),
            call_type: CallType::from(call_type),
            from: "+33 1 11".to_string(),
            to: "+33 2 22".to_string(),
            via: Some("+33 9 99".to_string()),
            created_at: Some("2022-03-09T14:05:00Z".to_string()),
            duration: 125_999,
            is_archived: false,
            notes: None,
        }
    }

    #[test]
    fn icon_follows_direction() {
        assert_eq!(call_icon(&Direction::Inbound), Ok(CallIcon::DiagonalDown));
        assert_eq!(call_icon(&Direction::Outbound), Ok(CallIcon::DiagonalUp));
        assert_eq!(
            call_icon(&Direction::from("x")),
            Err(CoreError::UnknownDirection("x".to_string()))
        );
    }

    #[test]
    fn title_mapping_is_exhaustive() {
        assert_eq!(call_title(&CallType::Missed), Ok("Missed call"));
        assert_eq!(call_title(&CallType::Answered), Ok("Call answered"));
        assert_eq!(call_title(&CallType::Voicemail), Ok("Voicemail"));
        assert_eq!(
            call_title(&CallType::from("busy")),
            Err(CoreError::UnknownCallType("busy".to_string()))
        );
    }

    #[test]
    fn subtitle_names_the_other_party() {
        assert_eq!(call_subtitle(&call("inbound", "missed")), "from +33 1 11");
        assert_eq!(call_subtitle(&call("outbound", "missed")), "to +33 2 22");
    }

    #[test]
    fn duration_is_floored_and_never_negative() {
        assert_eq!(format_duration(125_999), "02:05");
        assert_eq!(format_duration(999), "00:00");
        assert_eq!(format_duration(-5_000), "00:00");
        assert_eq!(format_duration(3_723_000), "1:02:03");
    }

    #[test]
    fn notes_summary_counts_notes() {
        let mut with_notes = call("inbound", "answered");
        assert_eq!(notes_summary(&with_notes), "");
        with_notes.notes = Some(vec![]);
        assert_eq!(notes_summary(&with_notes), "");
        with_notes.notes = Some(vec![
            Note {
                id: NoteId::new("n1").unwrap(),
                content: "call back".to_string(),
            },
            Note {
                id: NoteId::new("n2").unwrap(),
                content: "done".to_string(),
            },
        ]);
        assert_eq!(notes_summary(&with_notes), "Call has 2 notes");
    }

    #[test]
    fn row_survives_unknown_values() {
        let row = call_row(&call("sideways", "busy"), DisplayZone::utc());
        assert_eq!(row.icon, None);
        assert_eq!(row.title, None);
        assert_eq!(row.subtitle, "to +33 2 22");
        assert_eq!(row.timestamp, "Mar 9, 2022 14:05");
        assert_eq!(row.duration, "02:05");
    }
}
