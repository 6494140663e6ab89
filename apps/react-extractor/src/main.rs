//! ReACT Extractor
//!
//! Selects the ReACTs triggered by a month's feature trends from a metrics
//! CSV (as produced by the forecaster's net caches).
//!
//! Usage:
//!   react-extractor --csv <FILE> [--month <N>] [--all]
//!
//! Logs go to stderr (`RUST_LOG` controls the level); stdout carries only
//! the extracted JSON in single-month mode.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use react_core::{ExtractorConfig, MetricsTable, ReactExtractor, DEFAULT_MONTH};

#[derive(Parser, Debug)]
#[command(name = "react-extractor")]
#[command(version, about = "Generate a child ReACT set from the reference set and a metrics CSV")]
struct Cli {
    /// Path to the metrics CSV file
    #[arg(long)]
    csv: String,

    /// The month number to use for the extraction
    #[arg(long, default_value_t = DEFAULT_MONTH, allow_negative_numbers = true)]
    month: i64,

    /// Generate output for all months in a single JSON file
    #[arg(long)]
    all: bool,

    /// Reference ReACT set (overrides REACT_SET_PATH)
    #[arg(long)]
    reacts: Option<PathBuf>,

    /// Output file (overrides REACT_OUTPUT_PATH)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::from_env();
        if let Some(path) = &self.reacts {
            config = config.with_reference_path(path);
        }
        if let Some(path) = &self.output {
            config = config.with_output_path(path);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let extractor = ReactExtractor::load(&cli.config())?;
    let table = MetricsTable::load(&cli.csv)?;

    if cli.all {
        extractor.run_all_months(&table, true)?;
    } else {
        let reacts = extractor.run_month(&table, cli.month, true)?;
        println!("{}", react_io::to_pretty_string(&reacts)?);
    }

    Ok(())
}
