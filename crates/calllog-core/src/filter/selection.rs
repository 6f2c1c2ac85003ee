use crate::domain::{Call, CallType, Direction};
use crate::rules::sort::DatedCall;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    Direction,
    CallType,
}

impl FilterCategory {
    /// Query-string key the selection is persisted under.
    pub fn key(self) -> &'static str {
        match self {
            FilterCategory::Direction => "direction",
            FilterCategory::CallType => "type",
        }
    }
}

/// At most one selected value per category. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallFilter {
    pub direction: Option<Direction>,
    pub call_type: Option<CallType>,
}

impl CallFilter {
    pub fn is_active(&self) -> bool {
        self.direction.is_some() || self.call_type.is_some()
    }

    /// Unknown values never match, on either side of the comparison.
    pub fn matches(&self, call: &Call) -> bool {
        let direction_ok = match &self.direction {
            Some(wanted) => wanted.is_known() && call.direction == *wanted,
            None => true,
        };
        let type_ok = match &self.call_type {
            Some(wanted) => wanted.is_known() && call.call_type == *wanted,
            None => true,
        };
        direction_ok && type_ok
    }

    pub fn apply<'a>(&self, calls: Vec<DatedCall<'a>>) -> Vec<DatedCall<'a>> {
        if !self.is_active() {
            return calls;
        }
        calls
            .into_iter()
            .filter(|dated| self.matches(dated.call))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::CallFilter;
    use crate::domain::{Call, CallId, CallType, Direction};
    use crate::rules::sort::sort_newest_first;

    fn call(id: &str, direction: &str, call_type: &str) -> Call {
        Call {
            id: CallId::new(id).unwrap(),
            direction: Direction::from(direction),
            call_type: CallType::from(call_type),
            from: "+1 555".to_string(),
            to: "+1 556".to_string(),
            via: None,
            created_at: Some("2022-01-05T10:00:00Z".to_string()),
            duration: 0,
            is_archived: false,
            notes: None,
        }
    }

    #[test]
    fn inactive_filter_passes_everything_through() {
        let calls = vec![call("a", "inbound", "missed"), call("b", "weird", "weird")];
        let sorted = sort_newest_first(&calls);
        let filtered = CallFilter::default().apply(sorted.clone());
        assert_eq!(filtered, sorted);
    }

    #[test]
    fn both_categories_must_match() {
        let filter = CallFilter {
            direction: Some(Direction::Inbound),
            call_type: Some(CallType::Missed),
        };
        assert!(filter.matches(&call("a", "inbound", "missed")));
        assert!(!filter.matches(&call("b", "inbound", "answered")));
        assert!(!filter.matches(&call("c", "outbound", "missed")));
    }

    #[test]
    fn unknown_values_never_match() {
        let on_record = CallFilter {
            direction: Some(Direction::Inbound),
            call_type: None,
        };
        assert!(!on_record.matches(&call("a", "Inbound", "missed")));

        let on_filter = CallFilter {
            direction: Some(Direction::from("sideways")),
            call_type: None,
        };
        assert!(!on_filter.matches(&call("b", "sideways", "missed")));
    }

    #[test]
    fn filtering_is_idempotent() {
        let calls = vec![
            call("a", "inbound", "missed"),
            call("b", "outbound", "missed"),
            call("c", "inbound", "voicemail"),
        ];
        let filter = CallFilter {
            direction: None,
            call_type: Some(CallType::Missed),
        };
        let once = filter.apply(sort_newest_first(&calls));
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }
}
