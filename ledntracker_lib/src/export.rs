//! CSV rows for the currently displayed page.

use std::io::Write;

use ledntoken_api::types::AccountRecord;
use serde::Serialize;

use crate::error::LednTrackerError;

/// Header label and record key for each exported column, in output order.
pub const CSV_HEADERS: [(&str, &str); 9] = [
    ("First Name", "First Name"),
    ("Last Name", "Last Name"),
    ("Country", "Country"),
    ("Email", "email"),
    ("Date of Birth", "dob"),
    ("Multi-factor Authentication Type", "mfa"),
    ("# of Ledn Tokens", "amt"),
    ("Creation Date", "createdDate"),
    ("Referred By", "ReferredBy"),
];

/// One exported row. Values are the raw record values; field order and
/// serde names follow [`CSV_HEADERS`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CsvRow {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Date of Birth")]
    pub dob: String,
    #[serde(rename = "Multi-factor Authentication Type")]
    pub mfa: String,
    #[serde(rename = "# of Ledn Tokens")]
    pub amt: String,
    #[serde(rename = "Creation Date")]
    pub created_date: String,
    #[serde(rename = "Referred By")]
    pub referred_by: String,
}

impl From<&AccountRecord> for CsvRow {
    fn from(a: &AccountRecord) -> Self {
        Self {
            first_name: a.first_name.clone(),
            last_name: a.last_name.clone(),
            country: a.country.clone(),
            email: a.email.clone(),
            dob: a.dob.clone().unwrap_or_default(),
            mfa: a.mfa.clone().unwrap_or_default(),
            amt: a.amt.to_string(),
            created_date: a.created_date.clone().unwrap_or_default(),
            referred_by: a.referred_by.clone().unwrap_or_default(),
        }
    }
}

pub fn build_csv_rows(accounts: &[AccountRecord]) -> Vec<CsvRow> {
    accounts.iter().map(CsvRow::from).collect()
}

/// Writes a header line plus one line per account.
pub fn write_csv<W: Write>(accounts: &[AccountRecord], writer: W) -> Result<(), LednTrackerError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if accounts.is_empty() {
        wtr.write_record(CSV_HEADERS.iter().map(|(label, _)| *label))?;
    }
    for row in build_csv_rows(accounts) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
