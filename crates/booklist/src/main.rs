//! booklist - Entry Point
//!
//! Reads the config file, searches the catalog for every listed author in order,
//! and prints what was found.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use booklist::config::{ConfigFile, Pagination, api};
use booklist::report::{OutputFormat, write_report};
use booklist::{CatalogClient, Config};

/// Search a public library's catalog website for this year's publications from
/// authors listed in the given config file
#[derive(Parser, Debug)]
#[command(name = "booklist")]
#[command(version)]
struct Cli {
    /// Config file with the library's catalog url and list of authors
    #[arg(env = "BOOKLIST_CONFIG")]
    config_file: PathBuf,

    /// Print debug information
    #[arg(short, long)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error); overrides --debug
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Search this publication year instead of the current one
    #[arg(long)]
    year: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    timeout: u64,

    /// Page requests allowed per search phase
    #[arg(long, default_value_t = api::MAX_PAGE_REQUESTS)]
    max_pages: u32,

    /// Always request the first page, as the catalog's own search page does
    #[arg(long)]
    first_page_only: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file = ConfigFile::load(&cli.config_file)?;

    let pagination = if cli.first_page_only {
        Pagination::FirstPageOnly
    } else {
        Pagination::Offset
    };
    let config = Config::new(file.catalog_url.as_str())
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_max_page_requests(cli.max_pages)
        .with_pagination(pagination);

    let mut client = CatalogClient::new(config)?;
    if let Some(year) = &cli.year {
        client.set_year_filter(year);
    }
    tracing::debug!(?client, "Catalog client ready");

    let mut stdout = std::io::stdout();
    write_report(&client, &file, cli.format, &mut stdout).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "error" };
    let log_level = cli.log_level.as_deref().unwrap_or(default_level);
    init_tracing(log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config_file.display(),
        "Starting booklist"
    );

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
