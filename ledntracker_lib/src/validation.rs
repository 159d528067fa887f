//! Parsing and validation of user-supplied view parameters.

use ledntoken_api::{FilterField, PageSize, SortColumn, SortDirection};

use crate::error::LednTrackerError;

pub const MAX_SEARCH_LENGTH: usize = 100;

/// Strip ASCII control characters and enforce a byte-length limit.
///
/// Unlike most text inputs, search text is not trimmed and may be empty:
/// an empty search is how a filter gets cleared.
pub fn validate_search(input: &str) -> Result<String, LednTrackerError> {
    if input.len() > MAX_SEARCH_LENGTH {
        return Err(LednTrackerError::InvalidInput(format!(
            "search exceeds maximum length of {} bytes",
            MAX_SEARCH_LENGTH
        )));
    }
    Ok(input.chars().filter(|c| !c.is_ascii_control()).collect())
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, LednTrackerError> {
    if page < 1 {
        return Err(LednTrackerError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (one of 10, 25, 50, 100).
pub fn validate_page_size(page_size: u32) -> Result<PageSize, LednTrackerError> {
    PageSize::try_from(page_size).map_err(|n| {
        LednTrackerError::InvalidInput(format!(
            "page size {} is not allowed. Valid values: 10, 25, 50, 100",
            n
        ))
    })
}

/// Validate a sort column: `amt` or `createdDate` (case-insensitive).
pub fn validate_sort_column(input: &str) -> Result<SortColumn, LednTrackerError> {
    input.parse().map_err(|_| {
        LednTrackerError::InvalidInput(format!(
            "unknown sort column '{}'. Valid values: amt, createdDate",
            input
        ))
    })
}

/// Validate a sort order: `asc` or `desc` (case-insensitive).
pub fn validate_sort_direction(input: &str) -> Result<SortDirection, LednTrackerError> {
    input.parse().map_err(|_| {
        LednTrackerError::InvalidInput(format!(
            "unknown sort order '{}'. Valid values: asc, desc",
            input
        ))
    })
}

/// Validate a filter field by wire key, label, or alias.
pub fn validate_filter_field(input: &str) -> Result<FilterField, LednTrackerError> {
    input.parse().map_err(|_| {
        let valid: Vec<&str> = FilterField::ALL.iter().map(|f| f.key()).collect();
        LednTrackerError::InvalidInput(format!(
            "unknown filter field '{}'. Valid values: {}",
            input,
            valid.join(", ")
        ))
    })
}
