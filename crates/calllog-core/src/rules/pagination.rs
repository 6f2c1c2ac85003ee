use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ACTIVE_PAGE: u32 = 1;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    TwentyFive,
    Fifty,
    OneHundred,
    TwoHundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::OneHundred,
        PageSize::TwoHundred,
    ];

    pub fn get(self) -> u32 {
        match self {
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::OneHundred => 100,
            PageSize::TwoHundred => 200,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| CoreError::InvalidPageSize(value.to_string()))
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidPageSize(s.to_string()))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Window handed to the page source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPagination")]
pub struct Pagination {
    active_page: u32,
    page_size: PageSize,
}

#[derive(Deserialize)]
struct RawPagination {
    active_page: u32,
    page_size: PageSize,
}

impl From<RawPagination> for Pagination {
    fn from(raw: RawPagination) -> Self {
        Self::new(raw.active_page, raw.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_PAGE, PageSize::default())
    }
}

impl Pagination {
    /// Pages are 1-based; zero is lifted to the first page.
    pub fn new(active_page: u32, page_size: PageSize) -> Self {
        Self {
            active_page: active_page.max(DEFAULT_ACTIVE_PAGE),
            page_size,
        }
    }

    pub fn active_page(&self) -> u32 {
        self.active_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.active_page.saturating_sub(1)) * u64::from(self.page_size.get())
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            offset: self.offset(),
            limit: self.page_size.get(),
        }
    }

    pub fn with_page(self, active_page: u32) -> Self {
        Self::new(active_page, self.page_size)
    }

    /// A different size always restarts at the first page so the old
    /// offset can never point past the end of the new window.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        if page_size == self.page_size {
            return self;
        }
        Self::new(DEFAULT_ACTIVE_PAGE, page_size)
    }

    pub fn describe(&self, total_count: u64) -> PaginationDescriptor {
        let size = u64::from(self.page_size.get());
        PaginationDescriptor {
            active_page: self.active_page,
            page_size: self.page_size,
            total_count,
            page_count: total_count.div_ceil(size),
        }
    }
}

/// Everything page controls need to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    pub active_page: u32,
    pub page_size: PageSize,
    pub total_count: u64,
    pub page_count: u64,
}

pub fn parse_active_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= DEFAULT_ACTIVE_PAGE)
        .unwrap_or(DEFAULT_ACTIVE_PAGE)
}
