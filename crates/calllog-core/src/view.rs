//! The view-state reducer: fetched page + selection in, grouped display
//! model + pagination descriptor out.

use crate::domain::Call;
use crate::port::{CallPage, CallPageSource};
use crate::rules::{group_by_day, sort_newest_first, DayGroup, PaginationDescriptor};
use crate::state::ViewState;
use crate::time::DisplayZone;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Timezone day labels and timestamps are rendered in.
    pub zone: DisplayZone,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            zone: DisplayZone::utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallsView {
    pub pagination: PaginationDescriptor,
    pub groups: Vec<DayGroup>,
}

impl CallsView {
    pub fn empty(state: &ViewState) -> Self {
        Self {
            pagination: state.pagination.describe(0),
            groups: Vec::new(),
        }
    }

    /// Count reported by the source for the unfiltered window. Client-side
    /// filtering does not shrink it.
    pub fn total_count(&self) -> u64 {
        self.pagination.total_count
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn calls(&self) -> impl Iterator<Item = &Call> {
        self.groups.iter().flat_map(|group| group.calls.iter())
    }
}

pub fn derive_view(page: &CallPage, state: &ViewState, options: ViewOptions) -> CallsView {
    let sorted = sort_newest_first(&page.nodes);
    let filtered = state.filter.apply(sorted);
    let groups = group_by_day(&filtered, options.zone);

    debug!(
        fetched = page.nodes.len(),
        shown = filtered.len(),
        groups = groups.len(),
        total_count = page.total_count,
        "derived call view"
    );

    CallsView {
        pagination: state.pagination.describe(page.total_count),
        groups,
    }
}

/// Fetches the window `state` points at and reduces it. A fetch error is
/// returned as-is with no partial view; a missing result is an empty view.
pub fn load_view<S: CallPageSource>(
    source: &S,
    state: &ViewState,
    options: ViewOptions,
) -> Result<CallsView, S::Error> {
    let request = state.pagination.request();
    debug!(offset = request.offset, limit = request.limit, "fetching call page");
    match source.fetch_page(request)? {
        Some(page) => Ok(derive_view(&page, state, options)),
        None => {
            debug!("page source returned no result");
            Ok(CallsView::empty(state))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_view, load_view, CallsView, ViewOptions};
    use crate::domain::{Call, CallId, CallType, Direction};
    use crate::filter::CallFilter;
    use crate::port::{CallPage, CallPageSource};
    use crate::rules::{PageRequest, PageSize, Pagination};
    use crate::state::ViewState;
    use crate::time::UNKNOWN_DATE_LABEL;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::fmt;

    fn call(id: &str, direction: &str, call_type: &str, created_at: Option<&str>) -> Call {
        Call {
            id: CallId::new(id).unwrap(),
            direction: Direction::from(direction),
            call_type: CallType::from(call_type),
            from: format!("from-{id}"),
            to: format!("to-{id}"),
            via: None,
            created_at: created_at.map(str::to_string),
            duration: 30_000,
            is_archived: false,
            notes: None,
        }
    }

    fn sample_page() -> CallPage {
        CallPage {
            total_count: 120,
            nodes: vec![
                call("1", "inbound", "missed", Some("2022-01-04T09:00:00Z")),
                call("2", "outbound", "answered", Some("2022-01-05T10:00:00Z")),
                call("3", "inbound", "voicemail", Some("2022-01-05T16:00:00Z")),
                call("4", "outbound", "missed", Some("2022-01-04T18:00:00Z")),
                call("5", "inbound", "answered", Some("2022-01-04T12:00:00Z")),
            ],
        }
    }

    fn ids(view: &CallsView) -> Vec<&str> {
        view.calls().map(|call| call.id.as_str()).collect()
    }

    #[test]
    fn inbound_filter_over_two_days() {
        let state = ViewState {
            filter: CallFilter {
                direction: Some(Direction::Inbound),
                call_type: None,
            },
            pagination: Pagination::default(),
        };
        let view = derive_view(&sample_page(), &state, ViewOptions::default());

        let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 5", "Jan 4"]);
        assert_eq!(ids(&view), vec!["3", "5", "1"]);
        assert!(view.calls().all(|call| call.direction == Direction::Inbound));
    }

    #[test]
    fn total_count_ignores_client_filtering() {
        let state = ViewState {
            filter: CallFilter {
                direction: None,
                call_type: Some(CallType::Voicemail),
            },
            pagination: Pagination::new(2, PageSize::TwentyFive),
        };
        let view = derive_view(&sample_page(), &state, ViewOptions::default());
        assert_eq!(view.calls().count(), 1);
        assert_eq!(view.total_count(), 120);
        assert_eq!(view.pagination.active_page, 2);
        assert_eq!(view.pagination.page_count, 5);
    }

    #[test]
    fn no_filter_keeps_every_call_sorted() {
        let view = derive_view(&sample_page(), &ViewState::default(), ViewOptions::default());
        assert_eq!(ids(&view), vec!["3", "2", "4", "5", "1"]);
    }

    #[test]
    fn groups_partition_filtered_calls() {
        let mut page = sample_page();
        page.nodes.push(call("6", "inbound", "missed", Some("garbage")));
        page.nodes.push(call("7", "weird", "missed", None));
        let state = ViewState {
            filter: CallFilter {
                direction: None,
                call_type: Some(CallType::Missed),
            },
            pagination: Pagination::default(),
        };
        let view = derive_view(&page, &state, ViewOptions::default());

        let seen: Vec<&str> = ids(&view);
        let unique: HashSet<&str> = seen.iter().copied().collect();
        assert_eq!(seen.len(), unique.len());
        assert_eq!(seen, vec!["4", "1", "6", "7"]);

        let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 4", UNKNOWN_DATE_LABEL]);
    }

    #[test]
    fn null_timestamp_goes_last_without_error() {
        let page = CallPage {
            total_count: 3,
            nodes: vec![
                call("null", "inbound", "missed", None),
                call("a", "inbound", "missed", Some("2021-12-31T23:00:00Z")),
                call("b", "inbound", "missed", Some("2022-01-01T01:00:00Z")),
            ],
        };
        let view = derive_view(&page, &ViewState::default(), ViewOptions::default());
        assert_eq!(ids(&view), vec!["b", "a", "null"]);
        let last = view.groups.last().unwrap();
        assert_eq!(last.label, UNKNOWN_DATE_LABEL);
        assert_eq!(last.calls.len(), 1);
    }

    #[test]
    fn derive_is_deterministic() {
        let state = ViewState::default();
        let first = derive_view(&sample_page(), &state, ViewOptions::default());
        let second = derive_view(&sample_page(), &state, ViewOptions::default());
        assert_eq!(first, second);
    }

    #[derive(Debug)]
    struct Unreachable;

    impl fmt::Display for Unreachable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("source unreachable")
        }
    }

    impl std::error::Error for Unreachable {}

    struct FakeSource {
        response: Option<CallPage>,
        fail: bool,
        requests: RefCell<Vec<PageRequest>>,
    }

    impl CallPageSource for FakeSource {
        type Error = Unreachable;

        fn fetch_page(&self, request: PageRequest) -> Result<Option<CallPage>, Self::Error> {
            self.requests.borrow_mut().push(request);
            if self.fail {
                return Err(Unreachable);
            }
            Ok(self.response.clone())
        }
    }

    #[test]
    fn load_view_requests_the_active_window() {
        let source = FakeSource {
            response: Some(sample_page()),
            fail: false,
            requests: RefCell::new(Vec::new()),
        };
        let state = ViewState {
            filter: CallFilter::default(),
            pagination: Pagination::new(3, PageSize::TwentyFive)
                .with_page_size(PageSize::OneHundred),
        };
        let view = load_view(&source, &state, ViewOptions::default()).unwrap();
        assert_eq!(view.calls().count(), 5);
        assert_eq!(
            source.requests.borrow().as_slice(),
            &[PageRequest {
                offset: 0,
                limit: 100
            }]
        );
    }

    #[test]
    fn missing_result_is_an_empty_view() {
        let source = FakeSource {
            response: None,
            fail: false,
            requests: RefCell::new(Vec::new()),
        };
        let view = load_view(&source, &ViewState::default(), ViewOptions::default()).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.total_count(), 0);
    }

    #[test]
    fn fetch_error_yields_no_view() {
        let source = FakeSource {
            response: Some(sample_page()),
            fail: true,
            requests: RefCell::new(Vec::new()),
        };
        let err = load_view(&source, &ViewState::default(), ViewOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "source unreachable");
    }

    #[test]
    fn empty_page_gives_empty_groups() {
        let view = derive_view(
            &CallPage::default(),
            &ViewState::default(),
            ViewOptions::default(),
        );
        assert!(view.groups.is_empty());
        assert_eq!(view.total_count(), 0);
    }
}
