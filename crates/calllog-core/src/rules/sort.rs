use crate::domain::Call;
use crate::time::created_at_instant;
use chrono::{DateTime, Utc};

/// A call paired with its parsed `created_at`, computed once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedCall<'a> {
    pub call: &'a Call,
    pub instant: Option<DateTime<Utc>>,
}

/// Most recent first. Calls without a usable timestamp go last, keeping
/// their fetch order; equal timestamps keep fetch order too.
pub fn sort_newest_first(calls: &[Call]) -> Vec<DatedCall<'_>> {
    let mut dated: Vec<DatedCall<'_>> = calls
        .iter()
        .map(|call| DatedCall {
            call,
            instant: created_at_instant(call.created_at.as_deref()),
        })
        .collect();
    // `None` orders below every `Some`, so a reversed comparison sinks it.
    dated.sort_by(|a, b| b.instant.cmp(&a.instant));
    dated
}
