//! The `export` subcommand: writes one fetched page to a CSV file.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use ledntracker_lib::ledntoken_api::Client;
use ledntracker_lib::{messages, write_csv};

use super::list::QueryArgs;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Destination CSV file
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn run(args: &ExportArgs, client: &Client) -> Result<()> {
    let params = args.query.to_params()?;
    let resp = match client.fetch_page(&params).await {
        Ok(resp) => resp,
        Err(e) => {
            eprintln!("{}", messages::SERVER_ERROR);
            bail!(e);
        }
    };
    if resp.data.is_empty() {
        bail!(messages::NO_RESULTS);
    }

    let file = File::create(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    write_csv(&resp.data, file)?;
    eprintln!(
        "Exported {} accounts to {}",
        resp.data.len(),
        args.out.display()
    );
    Ok(())
}
