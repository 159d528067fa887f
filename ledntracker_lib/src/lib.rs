//! Library layer for Ledn Tracker: the accounts view state machine and its helpers.
//!
//! Wraps the `ledntoken_api` crate with the pagination/sort/filter controller,
//! a debouncer for search input, date formatting, CSV rows, and configuration.

pub mod config;
pub mod dates;
pub mod debounce;
pub mod error;
pub mod export;
pub mod messages;
pub mod source;
pub mod validation;
pub mod view;

pub use ledntoken_api;
pub use ledntoken_api::types;
pub use ledntoken_api::{
    FilterField, PageSize, ParamValue, QueryParameters, SortColumn, SortDirection,
};

pub use config::TrackerConfig;
pub use debounce::Debouncer;
pub use error::LednTrackerError;
pub use export::{write_csv, CsvRow};
pub use source::AccountsSource;
pub use view::{AccountsView, FetchTicket, PageNav, SearchRequest, Transition, ViewStatus};
