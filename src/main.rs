//! CLI entry point: scan a mail corpus, report connectors, answer queries

use anyhow::{bail, Context, Result};
use clap::Parser;
use mail_connectors::{report, scan_corpus, DEFAULT_SUFFIX};
use std::io;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mail-connectors",
    about = "Per-address mail statistics and connector classification"
)]
struct Cli {
    /// Root directory of the mail corpus
    dataset: PathBuf,

    /// Optional file to write the connector list to
    connector_file: Option<PathBuf>,

    /// Accepted domain suffix for valid addresses
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    domain: String,

    /// Optional path for a JSON per-sender statistics dump
    #[arg(long)]
    stats_json: Option<PathBuf>,

    /// Enable verbose logging (debug to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.dataset.is_dir() {
        bail!("dataset path {} is not a directory", cli.dataset.display());
    }
    let suffix = if cli.domain.starts_with('@') {
        cli.domain.clone()
    } else {
        format!("@{}", cli.domain)
    };

    let (engine, _summary) = scan_corpus(&cli.dataset, &suffix).context("corpus scan failed")?;

    // Materialized once so every sink sees the identical list
    let connectors: Vec<String> = engine.connectors().map(str::to_string).collect();

    let stdout = io::stdout();
    report::print_connectors(&connectors, &mut stdout.lock())
        .context("writing connector list to stdout")?;

    // Output-file failures are reported but do not abort the session
    if let Some(path) = &cli.connector_file
        && let Err(err) = report::write_connectors(&connectors, path)
    {
        error!(%err, "connector file not written");
    }
    if let Some(path) = &cli.stats_json
        && let Err(err) = report::write_stats_json(&engine, path)
    {
        error!(%err, "statistics export not written");
    }

    let stdin = io::stdin();
    report::query_loop(&engine, stdin.lock(), &mut stdout.lock())
        .context("interactive query loop failed")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
