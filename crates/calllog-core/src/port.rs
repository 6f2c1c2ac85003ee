use crate::domain::Call;
use crate::rules::PageRequest;
use serde::{Deserialize, Serialize};

/// One server-side window of calls. `total_count` covers the whole
/// unfiltered collection, not just `nodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPage {
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Vec<Call>,
}

pub trait CallPageSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// `Ok(None)` means the source answered without a result.
    fn fetch_page(&self, request: PageRequest) -> Result<Option<CallPage>, Self::Error>;
}

/// Key-value string store backing shareable view state.
pub trait QueryStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
    fn delete(&mut self, key: &str) -> Result<(), Self::Error>;
    /// Every pair in insertion order, percent-encoded, without a leading `?`.
    fn query_string(&self) -> Result<String, Self::Error>;
}
