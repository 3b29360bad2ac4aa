//! ops-report: compute the operational analytics report from a snapshot file.
//!
//! Reads a JSON `RecordSnapshot` (`bookings`, `items`, `users`) and prints
//! the report as JSON on stdout.

use std::path::PathBuf;

use analytics::{AnalyticsConfig, AnalyticsEngine};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::snapshot::RecordSnapshot;

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "analytics=info,ops_report=info";

#[derive(Parser)]
#[command(name = "ops-report")]
#[command(about = "Compute operational analytics from a record snapshot")]
struct Cli {
    /// Path to the JSON snapshot
    #[arg(short, long, env = "OPS_SNAPSHOT")]
    snapshot: PathBuf,

    /// TOML file overriding report limits
    #[arg(short, long, env = "OPS_CONFIG")]
    config: Option<PathBuf>,

    /// Evaluation time (RFC 3339) used for bookings without a date
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

/// `RUST_LOG` when set, otherwise `DEFAULT_LOG_FILTER`.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalyticsConfig::load(path)?,
        None => AnalyticsConfig::default(),
    };

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("reading snapshot {}", cli.snapshot.display()))?;
    let snapshot: RecordSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", cli.snapshot.display()))?;

    info!(
        bookings = snapshot.bookings.len(),
        items = snapshot.items.len(),
        users = snapshot.users.len(),
        "Snapshot loaded"
    );

    let now = cli.now.unwrap_or_else(Utc::now);
    let engine = AnalyticsEngine::new(config);
    let report = engine.compute_snapshot(&snapshot, now);

    let checksum = report.checksum().context("hashing report")?;
    info!(checksum = %checksum, "Report ready");

    let out = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");

    Ok(())
}
