use std::cell::{Cell, RefCell};

use ledntracker_lib::ledntoken_api::Error;
use ledntracker_lib::messages;
use ledntracker_lib::types::{AccountRecord, PageLinks, PageResponse};
use ledntracker_lib::{
    AccountsSource, AccountsView, FilterField, PageNav, PageSize, QueryParameters, SortColumn,
    SearchRequest, SortDirection, Transition, ViewStatus,
};

/// Serves `total` generated accounts, paginated the way json-server does.
/// A `_like` value of "nobody" matches nothing.
struct FakeSource {
    total: i64,
    fail: Cell<bool>,
    /// Leaves out the `last` relation, as a server with a partial Link header would.
    hide_last: Cell<bool>,
    calls: RefCell<Vec<QueryParameters>>,
}

impl FakeSource {
    fn new(total: i64) -> Self {
        Self {
            total,
            fail: Cell::new(false),
            hide_last: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn last_call(&self) -> QueryParameters {
        self.calls.borrow().last().cloned().unwrap()
    }
}

fn account(n: i64) -> AccountRecord {
    AccountRecord {
        country: "CA".to_string(),
        first_name: format!("First{}", n),
        last_name: format!("Last{}", n),
        referred_by: None,
        amt: n as f64,
        created_date: Some("2021-01-28T21:24:53.393Z".to_string()),
        dob: Some("1985-03-12".to_string()),
        email: format!("user{}@example.com", n),
        mfa: None,
    }
}

impl AccountsSource for FakeSource {
    async fn fetch_page(&self, params: &QueryParameters) -> Result<PageResponse, Error> {
        self.calls.borrow_mut().push(params.clone());
        if self.fail.get() {
            return Err(Error::RequestFailed);
        }
        let nobody = params
            .iter()
            .any(|(k, v)| k.ends_with("_like") && v.to_string() == "nobody");
        let total = if nobody { 0 } else { self.total };
        let limit = params.limit().unwrap_or(10);
        let page = params.page().unwrap_or(1);
        let last = (total + limit - 1) / limit;
        let start = (page - 1) * limit;
        let data = (start..(start + limit).min(total)).map(account).collect();

        let mut links = PageLinks::default();
        if last > 0 {
            links.first = Some(1);
            if !self.hide_last.get() {
                links.last = Some(last);
            }
            if page > 1 {
                links.prev = Some(page - 1);
            }
            if page < last {
                links.next = Some(page + 1);
            }
        }
        Ok(PageResponse {
            data,
            total: Some(total),
            links,
        })
    }
}

async fn loaded_view(total: i64) -> AccountsView<FakeSource> {
    let mut view = AccountsView::new(FakeSource::new(total));
    view.initialize().await;
    view
}

#[tokio::test]
async fn initial_load_enables_forward_controls_only() {
    let view = loaded_view(50).await;

    assert_eq!(view.params().encode(), "_page=1&_limit=10");
    assert_eq!(view.source().call_count(), 1);
    assert_eq!(view.records().len(), 10);
    assert_eq!(view.total(), Some(50));
    assert_eq!(view.last_page(), Some(5));
    assert_eq!(view.status(), ViewStatus::Populated);

    assert!(!view.can_go_first());
    assert!(!view.can_go_prev());
    assert!(view.can_go_next());
    assert!(view.can_go_last());
    assert!(view.is_active_page(1));
    assert_eq!(view.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn prev_and_first_are_noops_without_prev_relation() {
    let mut view = loaded_view(50).await;
    assert_eq!(view.go_to(PageNav::Prev).await, Transition::Disabled);
    assert_eq!(view.go_to(PageNav::First).await, Transition::Disabled);
    assert_eq!(view.source().call_count(), 1);
}

#[tokio::test]
async fn navigation_follows_link_relations() {
    let mut view = loaded_view(50).await;

    assert_eq!(view.go_to(PageNav::Next).await, Transition::Fetched);
    assert_eq!(view.page(), 2);
    assert_eq!(view.prev_page(), Some(1));
    assert!(view.can_go_first());

    assert_eq!(view.go_to(PageNav::Last).await, Transition::Fetched);
    assert_eq!(view.page(), 5);
    assert!(!view.can_go_next());
    assert!(!view.can_go_last());
    assert_eq!(view.go_to(PageNav::Next).await, Transition::Disabled);
    assert_eq!(view.go_to(PageNav::Last).await, Transition::Disabled);

    assert_eq!(view.go_to(PageNav::Prev).await, Transition::Fetched);
    assert_eq!(view.page(), 4);

    assert_eq!(view.go_to(PageNav::First).await, Transition::Fetched);
    assert_eq!(view.page(), 1);
    assert_eq!(view.source().last_call().page(), Some(1));
    assert_eq!(view.source().call_count(), 5);
}

#[tokio::test]
async fn direct_page_numbers_are_bounded() {
    let mut view = loaded_view(50).await;
    assert_eq!(view.go_to(PageNav::Number(0)).await, Transition::Disabled);
    assert_eq!(view.go_to(PageNav::Number(6)).await, Transition::Disabled);
    assert_eq!(view.go_to(PageNav::Number(3)).await, Transition::Fetched);
    assert!(view.is_active_page(3));
    assert_eq!(view.go_to(PageNav::Number(3)).await, Transition::Unchanged);
    assert_eq!(view.source().call_count(), 2);
}

#[tokio::test]
async fn page_size_change_keeps_page() {
    let mut view = loaded_view(200).await;
    view.go_to(PageNav::Next).await;
    assert_eq!(view.set_page_size(PageSize::TwentyFive).await, Transition::Fetched);
    assert_eq!(view.params().encode(), "_page=2&_limit=25");
    assert_eq!(view.records().len(), 25);
    assert_eq!(view.last_page(), Some(8));
    assert_eq!(view.page_size(), PageSize::TwentyFive);
}

#[tokio::test]
async fn sort_toggles_on_same_column_and_resets_on_new_one() {
    let mut view = loaded_view(50).await;

    view.sort_by(SortColumn::Amount).await;
    assert_eq!(view.params().order(), Some(SortDirection::Asc));
    assert_eq!(view.sort_arrow_for(SortColumn::Amount), Some(messages::ASC_ARROW));

    view.sort_by(SortColumn::Amount).await;
    assert_eq!(view.params().order(), Some(SortDirection::Desc));
    assert_eq!(view.sort_arrow_for(SortColumn::Amount), Some(messages::DESC_ARROW));

    view.sort_by(SortColumn::Amount).await;
    assert_eq!(view.params().order(), Some(SortDirection::Asc));

    view.sort_by(SortColumn::Amount).await;
    view.sort_by(SortColumn::CreatedDate).await;
    assert_eq!(
        view.params().encode(),
        "_page=1&_limit=10&_sort=createdDate&_order=ASC"
    );
    assert!(view.is_column_selected(SortColumn::CreatedDate));
    assert!(!view.is_column_selected(SortColumn::Amount));
    assert_eq!(view.sort_arrow_for(SortColumn::Amount), None);
}

#[tokio::test(start_paused = true)]
async fn search_burst_issues_a_single_request() {
    let mut view = loaded_view(50).await;

    view.search_input("K");
    view.search_input("Ka");
    view.search_input("Kay");
    assert!(view.is_loading());
    assert_eq!(view.status(), ViewStatus::Loading);
    assert_eq!(view.search_text(), "Kay");
    assert_eq!(view.source().call_count(), 1);

    assert_eq!(view.settle_search().await, Some(Transition::Fetched));
    assert!(!view.is_loading());
    assert_eq!(view.source().call_count(), 2);
    assert_eq!(
        view.source().last_call().encode(),
        "_page=1&_limit=10&First%20Name_like=Kay"
    );
    assert_eq!(view.settle_search().await, None);
}

#[tokio::test(start_paused = true)]
async fn clearing_search_text_resets_page_and_drops_filter() {
    let mut view = loaded_view(50).await;
    view.go_to(PageNav::Number(3)).await;

    view.search_input("Kay");
    view.settle_search().await;
    assert_eq!(view.page(), 3);
    assert_eq!(view.params().like_keys().count(), 1);

    view.search_input("");
    view.settle_search().await;
    assert_eq!(view.page(), 1);
    assert_eq!(view.params().page(), Some(1));
    assert_eq!(view.params().like_keys().count(), 0);
    assert!(!view.params().contains_key("First Name_like"));
}

#[tokio::test(start_paused = true)]
async fn changing_filter_field_drops_old_filter_before_next_fetch() {
    let mut view = loaded_view(50).await;
    view.sort_by(SortColumn::Amount).await;
    view.search_input("Kay");
    view.settle_search().await;
    assert!(view.params().contains_key("First Name_like"));

    assert_eq!(
        view.change_filter_field(FilterField::Country).await,
        Transition::Fetched
    );
    let sent = view.source().last_call();
    assert!(!sent.contains_key("First Name_like"));
    assert_eq!(sent.like_keys().count(), 0);
    assert_eq!(view.filter_field(), FilterField::Country);
    assert_eq!(view.search_text(), "");

    // The highlight goes away but the server-side sort stays in effect.
    assert!(!view.is_column_selected(SortColumn::Amount));
    assert_eq!(view.sort_arrow_for(SortColumn::Amount), None);
    assert_eq!(sent.encode(), "_page=1&_limit=10&_sort=amt&_order=ASC");

    view.search_input("CA");
    view.settle_search().await;
    assert_eq!(
        view.source().last_call().encode(),
        "_page=1&_limit=10&_sort=amt&_order=ASC&Country_like=CA"
    );
}

#[tokio::test(start_paused = true)]
async fn changing_filter_field_cancels_pending_search() {
    let mut view = loaded_view(50).await;
    view.search_input("Kay");
    assert!(view.has_pending_search());

    view.change_filter_field(FilterField::LastName).await;
    assert!(!view.has_pending_search());
    assert!(!view.is_loading());
    assert_eq!(view.settle_search().await, None);
    assert_eq!(view.source().call_count(), 1);
}

#[tokio::test]
async fn search_for_previous_field_is_dropped() {
    let mut view = loaded_view(50).await;
    view.change_filter_field(FilterField::Mfa).await;
    let stale = ledntracker_lib::SearchRequest {
        field: FilterField::FirstName,
        text: "Kay".to_string(),
    };
    assert_eq!(view.apply_search(stale).await, Transition::Disabled);
    assert_eq!(view.params().like_keys().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn clear_filters_is_idempotent() {
    let mut view = loaded_view(50).await;
    view.sort_by(SortColumn::CreatedDate).await;
    view.search_input("Kay");
    view.settle_search().await;

    assert_eq!(view.clear_filters().await, Transition::Fetched);
    let once = view.params().clone();
    assert_eq!(view.clear_filters().await, Transition::Unchanged);
    assert_eq!(view.params(), &once);
    assert_eq!(once.encode(), "_page=1&_limit=10&_sort=createdDate&_order=ASC");
    assert_eq!(view.sort_column(), None);
}

#[tokio::test(start_paused = true)]
async fn empty_result_is_not_an_error() {
    let mut view = loaded_view(50).await;
    view.search_input("nobody");
    view.settle_search().await;

    assert_eq!(view.status(), ViewStatus::Empty);
    assert_eq!(view.status().message(), Some(messages::NO_RESULTS));
    assert!(view.records().is_empty());
    assert_eq!(view.last_page(), None);
    assert!(view.page_numbers().next().is_none());
}

#[tokio::test]
async fn network_failure_clears_response_and_bounds() {
    let mut view = loaded_view(50).await;
    view.source().fail.set(true);
    assert_eq!(view.go_to(PageNav::Next).await, Transition::Fetched);

    assert_eq!(view.status(), ViewStatus::Error);
    assert_eq!(view.status().message(), Some(messages::SERVER_ERROR));
    assert!(view.response().is_none());
    assert!(view.records().is_empty());
    assert!(view.last_error().is_some());
    assert!(!view.can_go_next());
    assert!(!view.can_go_prev());

    view.source().fail.set(false);
    view.refresh().await;
    assert_eq!(view.status(), ViewStatus::Populated);
    assert_eq!(view.prev_page(), Some(1));
    assert!(view.last_error().is_none());
}

#[tokio::test]
async fn stale_responses_are_discarded() {
    let mut view = loaded_view(50).await;
    let older = view.begin_fetch();
    let newer = view.begin_fetch();

    let fresh = PageResponse {
        data: vec![account(1)],
        total: Some(1),
        links: PageLinks::default(),
    };
    assert!(view.apply_fetch(newer, Ok(fresh)));
    assert!(!view.apply_fetch(older, Err(Error::RequestFailed)));
    assert_eq!(view.records().len(), 1);
    assert_eq!(view.status(), ViewStatus::Populated);
}

#[tokio::test]
async fn csv_rows_mirror_current_page() {
    let view = loaded_view(3).await;
    let rows = view.csv_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].first_name, "First0");
    assert_eq!(rows[2].amt, "2");
}

#[tokio::test]
async fn unknown_last_page_disables_forward_navigation() {
    let source = FakeSource::new(50);
    source.hide_last.set(true);
    let mut view = AccountsView::new(source);
    view.initialize().await;

    assert_eq!(view.next_page(), Some(2));
    assert_eq!(view.last_page(), None);
    assert!(!view.can_go_next());
    assert!(!view.can_go_last());
    assert_eq!(view.go_to(PageNav::Next).await, Transition::Disabled);
    assert_eq!(view.go_to(PageNav::Number(2)).await, Transition::Disabled);
    assert_eq!(view.page(), 1);
    assert_eq!(view.source().call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn search_for_other_field_clears_loading() {
    let mut view = loaded_view(50).await;
    view.search_input("Kay");
    assert!(view.is_loading());

    let request = SearchRequest {
        field: FilterField::Country,
        text: "CA".to_string(),
    };
    assert_eq!(view.apply_search(request).await, Transition::Disabled);
    assert!(!view.is_loading());
    assert_eq!(view.status(), ViewStatus::Populated);
    assert_eq!(view.source().call_count(), 1);
}
