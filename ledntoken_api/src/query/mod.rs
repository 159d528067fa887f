mod common;
pub use self::common::{ParamValue, SortDirection};

mod encode;
pub use self::encode::{encode_query_data, encode_uri_component};

mod fields;
pub use self::fields::{FilterField, PageSize, SortColumn};

mod params;
pub use self::params::QueryParameters;
