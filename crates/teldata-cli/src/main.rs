//! TelData: converts a directory of text files into a labeled CSV dataset.

use std::path::PathBuf;

use teldata_core::{BuildConfig, Error, Result};
use teldata_ingest::{write_csv, BuildSummary, DatasetBuilder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod report;

/// Overlay positional arguments on the environment configuration.
fn resolve_config(args: &[String], base: BuildConfig) -> BuildConfig {
    let mut config = base;
    if let Some(input) = args.get(1) {
        config.input_dir = PathBuf::from(input);
    }
    if let Some(output) = args.get(2) {
        config.output_path = PathBuf::from(output);
    }
    config
}

/// Build the dataset, report each file, then write the CSV. The per-file
/// report comes first so it is shown even when the write fails.
fn convert(config: &BuildConfig) -> Result<BuildSummary> {
    let (dataset, mut summary) = DatasetBuilder::new(config.clone()).build()?;
    report::print_discovered(&summary);
    report::print_files(&summary);

    write_csv(&dataset, &config.output_path)?;
    info!(
        "Wrote {} entries to {}",
        summary.total_entries,
        config.output_path.display()
    );
    summary.output_path = Some(config.output_path.clone());
    Ok(summary)
}

/// Empty input and per-file read failures end the run normally; anything
/// else exits 1.
fn exit_code(result: &Result<BuildSummary>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) if e.is_fatal() => 1,
        Err(_) => 0,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let base = BuildConfig::from_env();

    if matches!(args.get(1).map(String::as_str), Some("--help" | "-h" | "help")) {
        report::print_usage(&base.input_dir, &base.output_path);
        return Ok(());
    }

    let config = resolve_config(&args, base);
    report::print_banner();
    info!("Reading from {}", config.input_dir.display());

    let result = convert(&config);
    match &result {
        Ok(summary) => report::print_totals(summary),
        Err(e @ Error::EmptyInput { .. }) => println!("{}", e),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
        }
    }

    match exit_code(&result) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
