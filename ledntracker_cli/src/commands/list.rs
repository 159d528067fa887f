//! The `list` subcommand: fetches a single page with the given paging, sort, and filter.

use anyhow::{bail, Result};
use clap::Args;
use ledntracker_lib::ledntoken_api::Client;
use ledntracker_lib::validation;
use ledntracker_lib::{messages, QueryParameters};

use crate::output::{print_accounts, OutputFormat};

/// Paging, sort, and filter flags shared by `list` and `export`.
#[derive(Args)]
pub struct QueryArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Accounts per page: 10, 25, 50, or 100
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Sort column: amt or createdDate
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc or desc (only used with --sort)
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Field to search: "First Name", "Last Name", Country, or mfa
    #[arg(long, default_value = "First Name")]
    pub filter_by: String,

    /// Substring to match in the filter field
    #[arg(long)]
    pub search: Option<String>,
}

impl QueryArgs {
    /// Validates the flags and builds the request parameters, in the same
    /// key order the interactive view produces.
    pub fn to_params(&self) -> Result<QueryParameters> {
        let page = validation::validate_page(self.page)?;
        let page_size = validation::validate_page_size(self.limit)?;
        let mut params = QueryParameters::new()
            .with_page(page)
            .with_page_size(page_size);

        if let Some(sort) = self.sort.as_deref() {
            let column = validation::validate_sort_column(sort)?;
            let direction = validation::validate_sort_direction(&self.order)?;
            params.set_sort(column, direction);
        }

        let field = validation::validate_filter_field(&self.filter_by)?;
        if let Some(search) = self.search.as_deref() {
            let search = validation::validate_search(search)?;
            if !search.is_empty() {
                params.set_like_filter(field, &search);
            }
        }
        Ok(params)
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

pub async fn run(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let params = args.query.to_params()?;
    let resp = match client.fetch_page(&params).await {
        Ok(resp) => resp,
        Err(e) => {
            eprintln!("{}", messages::SERVER_ERROR);
            bail!(e);
        }
    };

    if resp.data.is_empty() {
        eprintln!("{}", messages::NO_RESULTS);
        return Ok(());
    }

    print_accounts(&resp.data, format)?;
    if matches!(format, OutputFormat::Table | OutputFormat::Markdown) {
        let page = params.page().unwrap_or(1);
        match (resp.total, resp.links.last) {
            (Some(total), Some(last)) => {
                eprintln!("Page {} of {} ({} accounts)", page, last, total)
            }
            (Some(total), None) => eprintln!("Page {} ({} accounts)", page, total),
            _ => eprintln!("Page {}", page),
        }
    }
    Ok(())
}
