use anyhow::Result;
use ledntracker_lib::dates::display_date;
use ledntracker_lib::types::AccountRecord;
use ledntracker_lib::{messages, write_csv, AccountsSource, AccountsView, SortColumn};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct AccountRow {
    #[tabled(rename = "First Name")]
    #[serde(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    #[serde(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Date of Birth")]
    #[serde(rename = "Date of Birth")]
    dob: String,
    #[tabled(rename = "MFA Type")]
    #[serde(rename = "MFA Type")]
    mfa: String,
    #[tabled(rename = "# of Ledn Tokens")]
    #[serde(rename = "# of Ledn Tokens")]
    amt: String,
    #[tabled(rename = "Creation Date")]
    #[serde(rename = "Creation Date")]
    created_date: String,
    #[tabled(rename = "Referred By")]
    #[serde(rename = "Referred By")]
    referred_by: String,
}

fn build_account_rows(accounts: &[AccountRecord]) -> Vec<AccountRow> {
    accounts
        .iter()
        .map(|a| AccountRow {
            first_name: a.first_name.clone(),
            last_name: a.last_name.clone(),
            country: a.country.clone(),
            email: a.email.clone(),
            dob: display_date(a.dob.as_deref()),
            mfa: a
                .mfa
                .clone()
                .unwrap_or_else(|| messages::NOT_AVAILABLE.to_string()),
            amt: format_tokens(a.amt),
            created_date: display_date(a.created_date.as_deref()),
            referred_by: a
                .referred_by
                .clone()
                .unwrap_or_else(|| messages::NOT_AVAILABLE.to_string()),
        })
        .collect()
}

/// Prints one page of accounts. CSV output carries the raw record values,
/// the other formats the display values.
pub fn print_accounts(accounts: &[AccountRecord], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(build_account_rows(accounts))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_account_rows(accounts));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => write_csv(accounts, std::io::stdout())?,
        OutputFormat::Json => print_json(&build_account_rows(accounts)),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Renders a token amount with thousands separators, e.g. `42,561` or `1,250.5`.
fn format_tokens(amt: f64) -> String {
    let raw = amt.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

// -- View rendering --

/// Pagination controls for the current state: `« ‹ 1 [2] 3 › »`.
/// Disabled controls are left out.
pub fn pagination_bar<S: AccountsSource>(view: &AccountsView<S>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if view.can_go_first() {
        parts.push("«".to_string());
    }
    if view.can_go_prev() {
        parts.push("‹".to_string());
    }
    for n in view.page_numbers() {
        if view.is_active_page(n) {
            parts.push(format!("[{}]", n));
        } else {
            parts.push(n.to_string());
        }
    }
    if view.can_go_next() {
        parts.push("›".to_string());
    }
    if view.can_go_last() {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

/// One-line description of the page, filter, and sort in effect.
pub fn view_summary<S: AccountsSource>(view: &AccountsView<S>) -> String {
    let mut summary = match view.last_page() {
        Some(last) => format!("Page {} of {}", view.page(), last),
        None => format!("Page {}", view.page()),
    };
    if let Some(total) = view.total() {
        summary.push_str(&format!(" ({} accounts)", total));
    }
    summary.push_str(&format!(
        " | {} {} | {} {}",
        messages::ACCOUNTS_PER_PAGE,
        view.page_size(),
        messages::FILTER_BY,
        view.filter_field().label()
    ));
    if !view.search_text().is_empty() {
        summary.push_str(&format!(" \"{}\"", view.search_text()));
    }
    for column in [SortColumn::Amount, SortColumn::CreatedDate] {
        if let Some(arrow) = view.sort_arrow_for(column) {
            summary.push_str(&format!(" | Sorted by {} {}", column.label(), arrow));
        }
    }
    summary
}

/// Draws the whole view: the status banner or the page of records, then the
/// summary line and pagination controls on stderr.
pub fn print_view<S: AccountsSource>(view: &AccountsView<S>, format: &OutputFormat) -> Result<()> {
    match view.status().message() {
        Some(banner) => eprintln!("{}", banner),
        None => print_accounts(view.records(), format)?,
    }
    eprintln!("{}", view_summary(view));
    let bar = pagination_bar(view);
    if !bar.is_empty() {
        eprintln!("{}", bar);
    }
    Ok(())
}
