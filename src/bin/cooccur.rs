//! Co-occurrence CLI
//!
//! Reads membership lists from a file and prints every pair of items that
//! appears together in at least `T` lists, one `"<A>, <B>"` line per pair.
//!
//! ## Configuration
//!
//! Arguments take precedence over environment variables:
//! - `INPUT` / `COOCCUR_INPUT`: input file (default: `Artist_lists_small.txt`)
//! - `--threshold` / `COOCCUR_THRESHOLD`: minimum list count (default: 50)
//! - `--parallel` / `COOCCUR_PARALLEL`: parallel pair phase (default: off)
//! - `--format`: `text` or `json` (default: text)
//! - `RUST_LOG`: log level filter (default: info)
//! - `LOG_FORMAT`: "pretty" or "json" (default: pretty)
//!
//! Logs are written to stderr; stdout carries only the pairs.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin cooccur -- Artist_lists_small.txt --threshold 50
//! ```

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use cooccurrence_kernel::{
    CooccurrencePipeline, FinderMode, KernelConfig, Threshold, DEFAULT_INPUT_PATH,
};

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One "<A>, <B>" line per pair
    Text,
    /// Full report with stats and hashes
    Json,
}

/// Find pairs of items that co-occur in at least a threshold number of lists.
#[derive(Debug, Parser)]
#[command(name = "cooccur", version, about)]
struct Cli {
    /// Input file, one comma-separated list per line
    #[arg(env = "COOCCUR_INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Minimum number of lists an item and a pair must appear in
    #[arg(short, long, env = "COOCCUR_THRESHOLD", default_value_t = Threshold::default())]
    threshold: Threshold,

    /// Compare pairs on all cores
    #[arg(long, env = "COOCCUR_PARALLEL")]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Initialize the tracing subscriber on stderr with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cooccur=info,cooccurrence_kernel=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .flatten_event(true)
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
            )
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mode = if cli.parallel {
        FinderMode::Parallel
    } else {
        FinderMode::Sequential
    };
    let config = KernelConfig::new(cli.threshold).with_mode(mode);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %cli.input.display(),
        threshold = config.threshold.get(),
        mode = %config.mode,
        "Starting co-occurrence run"
    );

    let start = Instant::now();
    let report = CooccurrencePipeline::new(config)
        .run_file(&cli.input)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;

    info!(
        pair_count = report.len(),
        qualifying_items = report.stats.qualifying_items,
        report_hash = %report.report_hash,
        latency_ms = start.elapsed().as_millis() as u64,
        "Run complete"
    );

    let stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => report.write_text(stdout),
        OutputFormat::Json => report.write_json(stdout),
    }
    .context("Failed to write pairs to stdout")?;

    Ok(())
}
