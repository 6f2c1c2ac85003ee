pub mod group;
pub mod pagination;
pub mod sort;

pub use group::{group_by_day, DayGroup};
pub use pagination::{
    parse_active_page, PageRequest, PageSize, Pagination, PaginationDescriptor,
    DEFAULT_ACTIVE_PAGE,
};
pub use sort::{sort_newest_first, DatedCall};
