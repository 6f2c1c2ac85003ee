use crate::domain::Call;
use crate::rules::sort::DatedCall;
use crate::time::{format_day_label, DisplayZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    pub label: String,
    pub calls: Vec<Call>,
}

/// Groups in first-encounter order; input is expected newest first, so
/// groups come out newest day first.
pub fn group_by_day(calls: &[DatedCall<'_>], zone: DisplayZone) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for dated in calls {
        let label = format_day_label(dated.instant, zone);
        let slot = match slots.get(&label) {
            Some(slot) => *slot,
            None => {
                groups.push(DayGroup {
                    label: label.clone(),
                    calls: Vec::new(),
                });
                slots.insert(label, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].calls.push(dated.call.clone());
    }

    groups
}
