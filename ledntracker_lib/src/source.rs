//! The seam between the view controller and whatever serves account pages.

use std::future::Future;

use ledntoken_api::types::PageResponse;
use ledntoken_api::{Client, Error, QueryParameters};

/// Something that can fetch a page of accounts for a parameter set.
///
/// Implemented by the HTTP [`Client`]; tests substitute in-memory fakes.
pub trait AccountsSource {
    fn fetch_page(
        &self,
        params: &QueryParameters,
    ) -> impl Future<Output = Result<PageResponse, Error>>;
}

impl AccountsSource for Client {
    fn fetch_page(
        &self,
        params: &QueryParameters,
    ) -> impl Future<Output = Result<PageResponse, Error>> {
        Client::fetch_page(self, params)
    }
}
