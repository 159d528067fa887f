use serde::{Deserialize, Serialize};

/// One row of the accounts table, as served by `GET /accounts`.
///
/// Timestamps are kept as the raw strings the server sent and may be null;
/// formatting (and tolerating junk) is left to the presentation side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "ReferredBy", default)]
    pub referred_by: Option<String>,

    pub amt: f64,

    #[serde(rename = "createdDate", default)]
    pub created_date: Option<String>,

    #[serde(default)]
    pub dob: Option<String>,

    pub email: String,

    #[serde(default)]
    pub mfa: Option<String>,
}
