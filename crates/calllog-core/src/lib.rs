pub mod display;
pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod port;
pub mod query;
pub mod rules;
pub mod state;
pub mod time;
pub mod view;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{CallFilter, FilterCategory, FilterParseError};
pub use port::{CallPage, CallPageSource, QueryStore};
pub use query::QueryParams;
pub use rules::*;
pub use state::{Navigation, ViewState};
pub use view::{derive_view, load_view, CallsView, ViewOptions};
