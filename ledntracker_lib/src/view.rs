//! The accounts view controller: pagination, sort, filter and loading state.
//!
//! [`AccountsView`] owns every piece of mutable view state. Each interaction
//! derives the next [`QueryParameters`]; when the mapping actually changes,
//! exactly one page is fetched from the [`AccountsSource`] and the pagination
//! bounds are re-derived from the response's `Link` relations.
//!
//! Search input is debounced: [`AccountsView::search_input`] only schedules a
//! [`SearchRequest`], which the driver applies once the quiet period elapses
//! (see [`AccountsView::debounced_search`] and [`AccountsView::settle_search`]).

use std::ops::RangeInclusive;
use std::time::Duration;

use ledntoken_api::types::{AccountRecord, PageResponse};
use ledntoken_api::{FilterField, PageSize, QueryParameters, SortColumn, SortDirection};

use crate::debounce::Debouncer;
use crate::export::{build_csv_rows, CsvRow};
use crate::messages;
use crate::source::AccountsSource;

const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Outcome of a write operation on the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Parameters changed and a page was fetched.
    Fetched,
    /// The operation left the parameters as they were; nothing was fetched.
    Unchanged,
    /// The control is disabled in the current state (or the input was stale).
    Disabled,
}

/// Pagination control activated by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    Number(i64),
}

/// What the presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Populated,
    Empty,
    Error,
}

impl ViewStatus {
    /// Banner text for the non-populated states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewStatus::Loading => Some(messages::LOADING),
            ViewStatus::Populated => None,
            ViewStatus::Empty => Some(messages::NO_RESULTS),
            ViewStatus::Error => Some(messages::SERVER_ERROR),
        }
    }
}

/// A debounced search keystroke, bound to the filter field it was typed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub field: FilterField,
    pub text: String,
}

/// Identifies one issued fetch so late responses can be recognised.
#[derive(Clone, Debug)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: QueryParameters,
}

pub struct AccountsView<S> {
    source: S,
    params: QueryParameters,
    response: Option<PageResponse>,
    last_error: Option<String>,

    filter_field: FilterField,
    search_text: String,
    page: i64,
    page_size: PageSize,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
    loading: bool,

    prev_page: Option<i64>,
    next_page: Option<i64>,
    last_page: Option<i64>,

    search: Debouncer<SearchRequest>,
    issued_seq: u64,
    applied_seq: u64,
}

impl<S: AccountsSource> AccountsView<S> {
    pub fn new(source: S) -> Self {
        Self::with_debounce(source, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(source: S, search_debounce: Duration) -> Self {
        Self {
            source,
            params: QueryParameters::new(),
            response: None,
            last_error: None,
            filter_field: FilterField::default(),
            search_text: String::new(),
            page: 1,
            page_size: PageSize::default(),
            sort_column: None,
            sort_direction: SortDirection::Asc,
            loading: false,
            prev_page: None,
            next_page: None,
            last_page: None,
            search: Debouncer::new(search_debounce),
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    /// Sets `{_page: 1, _limit: 10}` and performs the initial fetch.
    pub async fn initialize(&mut self) -> Transition {
        self.page = 1;
        self.page_size = PageSize::default();
        self.params = QueryParameters::new()
            .with_page(self.page)
            .with_page_size(self.page_size);
        self.refresh().await;
        Transition::Fetched
    }

    /// Re-fetches the current parameters unconditionally.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.source.fetch_page(&ticket.params).await;
        self.apply_fetch(ticket, result);
    }

    /// Tags a fetch of the current parameters with the next sequence number.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_seq += 1;
        tracing::debug!("fetch #{}: {}", self.issued_seq, self.params.encode());
        FetchTicket {
            seq: self.issued_seq,
            params: self.params.clone(),
        }
    }

    /// Stores the outcome of a fetch. A response whose ticket is older than
    /// the last applied one is discarded and `false` is returned.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResponse, ledntoken_api::Error>,
    ) -> bool {
        if ticket.seq < self.applied_seq {
            tracing::warn!(
                "Discarding stale response #{} (already applied #{})",
                ticket.seq,
                self.applied_seq
            );
            return false;
        }
        self.applied_seq = ticket.seq;
        match result {
            Ok(resp) => {
                self.prev_page = resp.links.prev;
                self.next_page = resp.links.next;
                self.last_page = resp.links.last;
                self.response = Some(resp);
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to fetch accounts: {}", e);
                self.prev_page = None;
                self.next_page = None;
                self.last_page = None;
                self.response = None;
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// Installs `next` as the parameter set, fetching only if it differs.
    async fn replace_params(&mut self, next: QueryParameters) -> Transition {
        if next == self.params {
            return Transition::Unchanged;
        }
        self.params = next;
        self.refresh().await;
        Transition::Fetched
    }

    /// Shallow-merges `update` into the current parameters.
    pub async fn update_params(&mut self, update: QueryParameters) -> Transition {
        let mut next = self.params.clone();
        next.merge(update);
        self.replace_params(next).await
    }

    /// Selects a new page size. The current page is kept.
    pub async fn set_page_size(&mut self, page_size: PageSize) -> Transition {
        self.page_size = page_size;
        self.update_params(QueryParameters::new().with_page_size(page_size))
            .await
    }

    pub async fn go_to(&mut self, nav: PageNav) -> Transition {
        let target = match nav {
            PageNav::First => self.prev_page.map(|_| 1),
            PageNav::Prev => self.prev_page,
            PageNav::Next if self.can_go_next() => self.next_page,
            PageNav::Last if self.can_go_last() => self.last_page,
            PageNav::Next | PageNav::Last => None,
            PageNav::Number(n) if n >= 1 && self.last_page.is_some_and(|last| n <= last) => Some(n),
            PageNav::Number(_) => None,
        };
        let Some(page) = target else {
            tracing::debug!("{:?} is disabled on page {}", nav, self.page);
            return Transition::Disabled;
        };
        self.page = page;
        self.update_params(QueryParameters::new().with_page(page))
            .await
    }

    /// Sorts by `column`: toggles the direction when it is already the
    /// selected column, otherwise starts ascending.
    pub async fn sort_by(&mut self, column: SortColumn) -> Transition {
        self.sort_direction = if self.sort_column == Some(column) {
            self.sort_direction.toggle()
        } else {
            SortDirection::Asc
        };
        self.sort_column = Some(column);
        self.update_params(QueryParameters::new().with_sort(column, self.sort_direction))
            .await
    }

    /// Switches the searchable field. Pending searches for the old field are
    /// dropped, filters and search text are cleared, and the sort highlight is
    /// removed while `_sort`/`_order` stay in the parameters.
    pub async fn change_filter_field(&mut self, field: FilterField) -> Transition {
        let transition = self.clear_filters().await;
        self.filter_field = field;
        transition
    }

    /// Removes every `_like` filter, the search text, and the sort highlight.
    pub async fn clear_filters(&mut self) -> Transition {
        if self.search.cancel().is_some() {
            self.loading = false;
        }
        self.search_text.clear();
        self.sort_column = None;
        let mut next = self.params.clone();
        next.clear_like_filters();
        self.replace_params(next).await
    }

    /// Records a keystroke in the search box and (re)starts the debounce timer.
    pub fn search_input(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.loading = true;
        self.search.schedule(SearchRequest {
            field: self.filter_field,
            text: text.to_string(),
        });
    }

    /// Resolves once the search quiet period has elapsed, yielding the
    /// request to apply. Cancel-safe; pending forever when nothing is typed.
    pub async fn debounced_search(&mut self) -> SearchRequest {
        self.search.fire().await
    }

    pub fn has_pending_search(&self) -> bool {
        self.search.is_pending()
    }

    /// Applies a debounced search. Non-empty text sets `{field}_like`; empty
    /// text removes the filter and returns to page 1.
    pub async fn apply_search(&mut self, request: SearchRequest) -> Transition {
        if request.field != self.filter_field {
            self.loading = false;
            tracing::warn!(
                "Dropping search for {:?}; filter field is now {:?}",
                request.field,
                self.filter_field
            );
            return Transition::Disabled;
        }
        let mut next = self.params.clone();
        if request.text.is_empty() {
            next.clear_like_filters();
            self.page = 1;
            next.set_page(1);
        } else {
            next.set_like_filter(request.field, &request.text);
        }
        let transition = self.replace_params(next).await;
        self.loading = false;
        transition
    }

    /// Waits out and applies a pending search, if any.
    pub async fn settle_search(&mut self) -> Option<Transition> {
        if !self.search.is_pending() {
            return None;
        }
        let request = self.debounced_search().await;
        Some(self.apply_search(request).await)
    }

    // -- Derived read-only views --

    pub fn status(&self) -> ViewStatus {
        if self.loading {
            return ViewStatus::Loading;
        }
        match (&self.response, &self.last_error) {
            (Some(resp), _) if resp.data.is_empty() => ViewStatus::Empty,
            (Some(_), _) => ViewStatus::Populated,
            (None, Some(_)) => ViewStatus::Error,
            (None, None) => ViewStatus::Loading,
        }
    }

    pub fn is_column_selected(&self, column: SortColumn) -> bool {
        self.sort_column == Some(column)
    }

    pub fn sort_arrow_for(&self, column: SortColumn) -> Option<&'static str> {
        if !self.is_column_selected(column) {
            return None;
        }
        Some(match self.sort_direction {
            SortDirection::Asc => messages::ASC_ARROW,
            SortDirection::Desc => messages::DESC_ARROW,
        })
    }

    pub fn is_active_page(&self, page: i64) -> bool {
        self.page == page
    }

    pub fn can_go_first(&self) -> bool {
        self.prev_page.is_some()
    }

    pub fn can_go_prev(&self) -> bool {
        self.prev_page.is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.next_page.is_some() && self.last_page.is_some_and(|last| self.page < last)
    }

    pub fn can_go_last(&self) -> bool {
        self.last_page.is_some_and(|last| self.page < last)
    }

    /// Numbers for the direct page buttons: `1..=last_page`, empty when unknown.
    pub fn page_numbers(&self) -> RangeInclusive<i64> {
        1..=self.last_page.unwrap_or(0)
    }

    pub fn records(&self) -> &[AccountRecord] {
        self.response
            .as_ref()
            .map(|r| r.data.as_slice())
            .unwrap_or_default()
    }

    pub fn csv_rows(&self) -> Vec<CsvRow> {
        build_csv_rows(self.records())
    }

    pub fn response(&self) -> Option<&PageResponse> {
        self.response.as_ref()
    }

    pub fn total(&self) -> Option<i64> {
        self.response.as_ref().and_then(|r| r.total)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn prev_page(&self) -> Option<i64> {
        self.prev_page
    }

    pub fn next_page(&self) -> Option<i64> {
        self.next_page
    }

    pub fn last_page(&self) -> Option<i64> {
        self.last_page
    }

    pub fn filter_field(&self) -> FilterField {
        self.filter_field
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
