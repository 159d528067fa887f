mod client;
mod errors;
pub mod link;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::link::parse_link_header;
pub use self::query::{
    encode_query_data, encode_uri_component, FilterField, PageSize, ParamValue, QueryParameters,
    SortColumn, SortDirection,
};
