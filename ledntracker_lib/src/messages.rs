//! User-facing strings shared by every front end.

pub const APP_TITLE: &str = "Ledn Tracker";

pub const NOT_AVAILABLE: &str = "N/A";

pub const NO_RESULTS: &str = "Sorry. There are no results.";
pub const SERVER_ERROR: &str = "Sorry. There is a disruption with the server. Please try again later.";
pub const LOADING: &str = "Loading...";

pub const ACCOUNTS_PER_PAGE: &str = "Accounts per Page:";
pub const FILTER_BY: &str = "Filter by:";

pub const ASC_ARROW: &str = "▲";
pub const DESC_ARROW: &str = "▼";
