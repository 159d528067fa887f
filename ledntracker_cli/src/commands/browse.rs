//! The `browse` subcommand: an interactive accounts view driven by stdin lines.
//!
//! Every line is one interaction. `search` lines behave like keystrokes in a
//! search box: they are debounced, so a burst of them issues one request.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ledntracker_lib::types::AccountRecord;
use ledntracker_lib::validation;
use ledntracker_lib::{
    messages, write_csv, AccountsSource, AccountsView, FilterField, PageNav, PageSize,
    SortColumn, TrackerConfig, Transition,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{print_view, OutputFormat};

const HELP: &str = "\
Commands:
  first | prev | next | last   move between pages
  page N                       jump to page N
  limit 10|25|50|100           accounts per page
  sort amt|createdDate         sort (repeat to flip direction)
  filter FIELD                 search field: First Name, Last Name, Country, mfa
  search [TEXT]                search the current field (empty clears)
  clear                        clear all filters
  refresh                      fetch the current page again
  export FILE                  write the current page to CSV
  help                         show this help
  quit                         exit";

#[derive(Debug, PartialEq)]
enum BrowseCommand {
    Nav(PageNav),
    Limit(PageSize),
    Sort(SortColumn),
    Filter(FilterField),
    Search(String),
    Clear,
    Refresh,
    Export(PathBuf),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed.trim_end(), ""),
    };
    let arg = rest.trim();
    let cmd = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "first" => BrowseCommand::Nav(PageNav::First),
        "prev" | "back" => BrowseCommand::Nav(PageNav::Prev),
        "next" | "forward" => BrowseCommand::Nav(PageNav::Next),
        "last" => BrowseCommand::Nav(PageNav::Last),
        "page" => {
            let n = arg
                .parse::<i64>()
                .map_err(|_| format!("page expects a number, got '{}'", arg))?;
            BrowseCommand::Nav(PageNav::Number(n))
        }
        "limit" => {
            let n = arg
                .parse::<u32>()
                .map_err(|_| format!("limit expects a number, got '{}'", arg))?;
            BrowseCommand::Limit(validation::validate_page_size(n).map_err(|e| e.to_string())?)
        }
        "sort" => BrowseCommand::Sort(
            validation::validate_sort_column(arg).map_err(|e| e.to_string())?,
        ),
        "filter" => BrowseCommand::Filter(
            validation::validate_filter_field(arg).map_err(|e| e.to_string())?,
        ),
        // Spaces between the word and the text are separators; trailing ones are kept.
        "search" => BrowseCommand::Search(
            validation::validate_search(rest.trim_start()).map_err(|e| e.to_string())?,
        ),
        "clear" => BrowseCommand::Clear,
        "refresh" => BrowseCommand::Refresh,
        "export" if !arg.is_empty() => BrowseCommand::Export(PathBuf::from(arg)),
        "export" => return Err("export expects a file path".to_string()),
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(format!("unknown command '{}'. Type 'help'.", other)),
    };
    Ok(Some(cmd))
}

fn export_page(accounts: &[AccountRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(accounts, file)?;
    Ok(())
}

/// Applies one command. Returns whether the view should be redrawn.
async fn execute<S: AccountsSource>(view: &mut AccountsView<S>, cmd: BrowseCommand) -> Result<bool> {
    let transition = match cmd {
        BrowseCommand::Nav(nav) => view.go_to(nav).await,
        BrowseCommand::Limit(size) => view.set_page_size(size).await,
        BrowseCommand::Sort(column) => view.sort_by(column).await,
        BrowseCommand::Filter(field) => {
            let t = view.change_filter_field(field).await;
            eprintln!("Filtering by {}", field.label());
            t
        }
        BrowseCommand::Search(text) => {
            view.search_input(&text);
            return Ok(false);
        }
        BrowseCommand::Clear => view.clear_filters().await,
        BrowseCommand::Refresh => {
            view.refresh().await;
            Transition::Fetched
        }
        BrowseCommand::Export(path) => {
            if view.records().is_empty() {
                eprintln!("{}", messages::NO_RESULTS);
                return Ok(false);
            }
            match export_page(view.records(), &path) {
                Ok(()) => eprintln!(
                    "Exported {} accounts to {}",
                    view.records().len(),
                    path.display()
                ),
                Err(e) => eprintln!("Export failed: {:#}", e),
            }
            return Ok(false);
        }
        BrowseCommand::Help => {
            eprintln!("{}", HELP);
            return Ok(false);
        }
        BrowseCommand::Quit => return Ok(false),
    };
    Ok(match transition {
        Transition::Fetched => true,
        Transition::Unchanged => false,
        Transition::Disabled => {
            eprintln!("That control is disabled here.");
            false
        }
    })
}

pub async fn run(config: &TrackerConfig, format: &OutputFormat) -> Result<()> {
    eprintln!("{} ({})", messages::APP_TITLE, config.base_url);
    eprintln!("Type 'help' for commands.");
    let mut view = AccountsView::with_debounce(config.client(), config.search_debounce);
    view.initialize().await;
    print_view(&view, format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    if view.settle_search().await.is_some() {
                        print_view(&view, format)?;
                    }
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(BrowseCommand::Quit)) => break,
                    Ok(Some(cmd)) => {
                        if execute(&mut view, cmd).await? {
                            print_view(&view, format)?;
                        }
                    }
                    Ok(None) => {}
                    Err(msg) => eprintln!("{}", msg),
                }
            }
            request = view.debounced_search() => {
                if view.apply_search(request).await == Transition::Fetched {
                    print_view(&view, format)?;
                }
            }
        }
    }
    Ok(())
}
