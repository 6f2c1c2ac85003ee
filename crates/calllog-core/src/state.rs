//! Reading and writing the view selection through a [`QueryStore`].

use crate::domain::{CallId, CallType, Direction};
use crate::filter::{CallFilter, FilterCategory};
use crate::port::QueryStore;
use crate::rules::{parse_active_page, PageSize, Pagination};
use tracing::debug;

pub const PAGE_KEY: &str = "page";

/// Immutable snapshot of everything the reducer needs besides the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: CallFilter,
    pub pagination: Pagination,
}

impl ViewState {
    /// Page size is not part of the store; callers pass the one in effect.
    pub fn read<S: QueryStore>(store: &S, page_size: PageSize) -> Result<Self, S::Error> {
        let direction =
            non_empty(store.get(FilterCategory::Direction.key())?).map(Direction::from);
        let call_type =
            non_empty(store.get(FilterCategory::CallType.key())?).map(CallType::from);
        let page = store.get(PAGE_KEY)?;
        let active_page = parse_active_page(page.as_deref());

        Ok(Self {
            filter: CallFilter {
                direction,
                call_type,
            },
            pagination: Pagination::new(active_page, page_size),
        })
    }
}

/// A blank or missing value clears the category by deleting its key.
pub fn select_filter<S: QueryStore>(
    store: &mut S,
    category: FilterCategory,
    value: Option<&str>,
) -> Result<(), S::Error> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => {
            debug!(key = category.key(), value, "filter selected");
            store.set(category.key(), value)
        }
        None => {
            debug!(key = category.key(), "filter cleared");
            store.delete(category.key())
        }
    }
}

/// Filters stay in place; the returned path carries the whole query.
pub fn select_page<S: QueryStore>(store: &mut S, page: u32) -> Result<Navigation, S::Error> {
    let page = page.max(1);
    store.set(PAGE_KEY, &page.to_string())?;
    Ok(Navigation::CallList {
        page,
        query: store.query_string()?,
    })
}

/// Applies a page-size selection. When the size actually changes the
/// persisted page is dropped so the next fetch starts at offset 0.
pub fn select_page_size<S: QueryStore>(
    store: &mut S,
    current: Pagination,
    page_size: PageSize,
) -> Result<Pagination, S::Error> {
    let next = current.with_page_size(page_size);
    if next != current {
        debug!(
            from = current.page_size().get(),
            to = page_size.get(),
            "page size changed, resetting page"
        );
        store.delete(PAGE_KEY)?;
    }
    Ok(next)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    CallDetail(CallId),
    CallList { page: u32, query: String },
}

impl Navigation {
    pub fn path(&self) -> String {
        match self {
            Navigation::CallDetail(id) => format!("/calls/{id}"),
            Navigation::CallList { query, .. } => list_path(query),
        }
    }
}

pub fn list_path(query: &str) -> String {
    if query.is_empty() {
        "/calls/".to_string()
    } else {
        format!("/calls/?{query}")
    }
}

pub fn open_call(id: &CallId) -> Navigation {
    Navigation::CallDetail(id.clone())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{
        list_path, open_call, select_filter, select_page, select_page_size, Navigation, ViewState,
    };
    use crate::domain::{CallId, CallType, Direction};
    use crate::filter::FilterCategory;
    use crate::port::QueryStore;
    use crate::query::QueryParams;
    use crate::rules::{PageRequest, PageSize, Pagination};

    #[test]
    fn read_defaults_when_store_is_empty() {
        let state = ViewState::read(&QueryParams::new(), PageSize::default()).unwrap();
        assert_eq!(state, ViewState::default());
        assert_eq!(state.pagination.active_page(), 1);
    }

    #[test]
    fn read_picks_up_filters_and_page() {
        let params = QueryParams::parse("direction=outbound&type=voicemail&page=4");
        let state = ViewState::read(&params, PageSize::Fifty).unwrap();
        assert_eq!(state.filter.direction, Some(Direction::Outbound));
        assert_eq!(state.filter.call_type, Some(CallType::Voicemail));
        assert_eq!(
            state.pagination.request(),
            PageRequest {
                offset: 150,
                limit: 50
            }
        );
    }

    #[test]
    fn unparseable_page_reads_as_first() {
        let params = QueryParams::parse("page=later");
        let state = ViewState::read(&params, PageSize::default()).unwrap();
        assert_eq!(state.pagination.active_page(), 1);
    }

    #[test]
    fn clearing_a_filter_restores_the_store() {
        let original = QueryParams::parse("page=2");
        let mut params = original.clone();
        select_filter(&mut params, FilterCategory::Direction, Some("inbound")).unwrap();
        assert_eq!(params.to_query_string(), "page=2&direction=inbound");
        select_filter(&mut params, FilterCategory::Direction, Some("")).unwrap();
        assert_eq!(params, original);
        select_filter(&mut params, FilterCategory::CallType, None).unwrap();
        assert_eq!(params, original);
    }

    #[test]
    fn selecting_replaces_previous_value() {
        let mut params = QueryParams::new();
        select_filter(&mut params, FilterCategory::CallType, Some("missed")).unwrap();
        select_filter(&mut params, FilterCategory::CallType, Some("answered")).unwrap();
        assert_eq!(params.to_query_string(), "type=answered");
    }

    #[test]
    fn page_size_change_drops_persisted_page() {
        let mut params = QueryParams::parse("direction=inbound&page=3");
        let current = ViewState::read(&params, PageSize::TwentyFive)
            .unwrap()
            .pagination;
        let next = select_page_size(&mut params, current, PageSize::OneHundred).unwrap();
        assert_eq!(next, Pagination::new(1, PageSize::OneHundred));
        assert_eq!(params.get("page").unwrap(), None);
        assert_eq!(params.to_query_string(), "direction=inbound");

        let reread = ViewState::read(&params, PageSize::OneHundred).unwrap();
        assert_eq!(
            reread.pagination.request(),
            PageRequest {
                offset: 0,
                limit: 100
            }
        );
    }

    #[test]
    fn navigation_paths() {
        let mut params = QueryParams::new();
        let nav = select_page(&mut params, 0).unwrap();
        assert_eq!(
            nav,
            Navigation::CallList {
                page: 1,
                query: "page=1".to_string()
            }
        );
        assert_eq!(nav.path(), "/calls/?page=1");
        assert_eq!(list_path(""), "/calls/");

        let id = CallId::new("abc").unwrap();
        assert_eq!(open_call(&id).path(), "/calls/abc");
    }

    #[test]
    fn page_navigation_keeps_filters_in_path() {
        let mut params = QueryParams::parse("direction=inbound&type=missed");
        let nav = select_page(&mut params, 2).unwrap();
        assert_eq!(nav.path(), "/calls/?direction=inbound&type=missed&page=2");

        let nav = select_page(&mut params, 5).unwrap();
        assert_eq!(nav.path(), "/calls/?direction=inbound&type=missed&page=5");
    }
}
