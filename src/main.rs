//! adsweep main entry point
//!
//! This is the command-line interface for the adsweep listings sweeper.

use adsweep::config::{load_config_with_hash, Config};
use adsweep::crawler::{crawl, CrawlRequest};
use adsweep::output::write_outputs;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// adsweep: a polite classifieds-listing sweeper
///
/// adsweep walks one or more search results pages, collects every listing
/// link it recognizes, and saves one record per listing as JSON and CSV.
/// With --visit-details it also fetches each listing's own page for fuller
/// attributes.
#[derive(Parser, Debug)]
#[command(name = "adsweep")]
#[command(version = "0.1.0")]
#[command(about = "A polite classifieds-listing sweeper", long_about = None)]
struct Cli {
    /// Search results URL to sweep
    #[arg(long, value_name = "URL")]
    url: String,

    /// Number of search result pages to attempt
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Visit each listing page to collect more details (slower)
    #[arg(long)]
    visit_details: bool,

    /// Reserved for JS-heavy pages; accepted but not implemented yet
    #[arg(long)]
    render_js: bool,

    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(count) if count > 0 => ExitCode::SUCCESS,
        Ok(_) => {
            tracing::warn!(
                "no listings were collected; the site may be blocking requests or its markup changed"
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("adsweep=info,warn"),
            1 => EnvFilter::new("adsweep=debug,info"),
            2 => EnvFilter::new("adsweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads configuration, runs the sweep, and writes the results pair
///
/// Returns the number of collected records so main can choose the exit
/// status. The results files are written even when the sweep comes back
/// empty, so downstream tooling always finds a fresh dataset.
async fn run(cli: Cli) -> anyhow::Result<usize> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("loading configuration from {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::debug!("configuration fingerprint: {}", hash);
            config
        }
        None => {
            tracing::debug!("no configuration file given, using defaults");
            Config::default()
        }
    };

    if cli.render_js {
        tracing::warn!("browser rendering is not implemented; continuing with static HTML fetches");
    }

    let output_config = config.output.clone();
    let request = CrawlRequest {
        search_url: cli.url,
        pages: cli.pages,
        visit_details: cli.visit_details,
    };

    let records = crawl(config, request).await?;
    write_outputs(&records, &output_config)?;

    tracing::info!("collected {} listings", records.len());
    Ok(records.len())
}
