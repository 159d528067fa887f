mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ledntracker_lib::TrackerConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ledntracker")]
#[command(about = "Browse Ledn token accounts from the accounts API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Accounts API base URL (overrides LEDN_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print one page of accounts
    List(commands::list::ListArgs),
    /// Write one page of accounts to a CSV file
    Export(commands::export::ExportArgs),
    /// Interactively page, sort, and search accounts (commands on stdin)
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ledntracker_lib=info".parse()?)
                .add_directive("ledntoken_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = TrackerConfig::from_env();
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    let client = config.client();

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &format).await?,
        Commands::Export(args) => commands::export::run(args, &client).await?,
        Commands::Browse => commands::browse::run(&config, &format).await?,
    }

    Ok(())
}
