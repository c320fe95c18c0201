//! fxboard CLI
//!
//! Command-line client for the currency service

mod cli;
mod output;

use std::io::{self, Write};

use clap::Parser;
use color_eyre::Result;
use fxboard_api::PageRequest;
use fxboard_client::HttpGateway;
use fxboard_core::Settings;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut settings = Settings::load_default(cli.config.as_deref())?;
    if let Some(server) = &cli.server {
        settings.gateway.base_url.clone_from(server);
    }
    let gateway = HttpGateway::new(settings.gateway_config()?)?;

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Page(args) => {
            let request = PageRequest {
                page: args.page,
                size: args.size,
                sort_by: args.sort,
                sort_dir: args.dir,
            };
            let page = gateway.fetch_page(&request).await?;
            if cli.json {
                output::write_json(&mut stdout, &page)?;
            } else {
                output::write_page(&mut stdout, &page)?;
            }
        }
        Command::All => {
            let currencies = gateway.list_all().await?;
            if cli.json {
                output::write_json(&mut stdout, &currencies)?;
            } else {
                output::write_currencies(&mut stdout, &currencies)?;
            }
        }
        Command::Get { code } => {
            let currency = gateway.get_by_code(&code).await?;
            if cli.json {
                output::write_json(&mut stdout, &currency)?;
            } else {
                output::write_currencies(&mut stdout, std::slice::from_ref(&currency))?;
            }
        }
        Command::Create(args) => {
            let created = gateway.create(args.into_payload()).await?;
            tracing::info!(id = created.id, code = %created.code, "currency created");
            if cli.json {
                output::write_json(&mut stdout, &created)?;
            } else {
                output::write_currencies(&mut stdout, std::slice::from_ref(&created))?;
            }
        }
        Command::Update { id, currency } => {
            let updated = gateway.update(id, currency.into_payload()).await?;
            if cli.json {
                output::write_json(&mut stdout, &updated)?;
            } else {
                output::write_currencies(&mut stdout, std::slice::from_ref(&updated))?;
            }
        }
        Command::Delete { id } => {
            gateway.delete(id).await?;
            if !cli.json {
                writeln!(stdout, "deleted currency {id}")?;
            }
        }
    }

    Ok(())
}
