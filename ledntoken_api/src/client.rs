//! HTTP client for the accounts REST endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, LINK};
use url::Url;

use crate::{
    link::parse_link_header,
    query::QueryParameters,
    types::{AccountRecord, PageLinks, PageResponse},
    Error,
};

const DEFAULT_BASE_URL: &str = "http://localhost:5091";
const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// HTTP client for `GET /accounts`.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout
/// (30 seconds unless overridden). No retries are attempted.
pub struct Client {
    /// Base URL for the API. Defaults to `http://localhost:5091`.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the local development server.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, params: &QueryParameters) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(params.add_to_url(&url))
    }

    /// Fetches one page of accounts for the given parameters.
    ///
    /// The JSON body becomes [`PageResponse::data`]; `X-Total-Count` and
    /// `Link` fill in the total and the pagination links. A missing or
    /// malformed header degrades to `None` / empty links instead of failing.
    pub async fn fetch_page(&self, params: &QueryParameters) -> Result<PageResponse, Error> {
        let url = self.get_url("/accounts", params)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get accounts: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let total = total_count(resp.headers());
        let links = page_links(resp.headers());
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let data = serde_json::from_str::<Vec<AccountRecord>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse accounts: {} | body: {}", e, snippet);
            Error::InvalidBody
        })?;

        Ok(PageResponse { data, total, links })
    }
}

fn total_count(headers: &HeaderMap) -> Option<i64> {
    let total = headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok());
    if total.is_none() {
        tracing::warn!("Missing or invalid X-Total-Count header");
    }
    total
}

fn page_links(headers: &HeaderMap) -> PageLinks {
    match headers.get(LINK).and_then(|v| v.to_str().ok()) {
        Some(raw) if !raw.trim().is_empty() => parse_link_header(raw),
        _ => PageLinks::default(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
