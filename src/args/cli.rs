use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::records::{
    CatalogKind, DEFAULT_TIMESTAMP_FIELD, HourRange, MetricDescriptor, MetricKey, RecordFormat,
};

use super::parsers::{parse_date, parse_hour_range, parse_metric_key, parse_positive_u32};
use super::types::{AnalysisKind, OutputFormat, PositiveU32};

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the metrics of the active catalog
    Metrics,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Descriptive statistics and pairwise Pearson correlation for timestamped sensor and health readings."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Record file to analyze (.json, .jsonl/.ndjson or .csv)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Input format (defaults to the file extension)
    #[arg(long, ignore_case = true)]
    pub format: Option<RecordFormat>,

    /// Field holding each record's timestamp
    #[arg(long = "timestamp-field", default_value = DEFAULT_TIMESTAMP_FIELD)]
    pub timestamp_field: String,

    /// Metric catalog that names and labels the selectable metrics
    #[arg(long, default_value = "sensor", ignore_case = true, global = true)]
    pub catalog: CatalogKind,

    /// Metrics to analyze, comma-separated (defaults to every catalog metric)
    #[arg(long, short, value_delimiter = ',', value_parser = parse_metric_key)]
    pub metrics: Vec<MetricKey>,

    /// Which results to compute
    #[arg(long, default_value = "all", ignore_case = true)]
    pub analysis: AnalysisKind,

    /// First day of the time window (YYYY-MM-DD, UTC)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last day of the time window (YYYY-MM-DD, UTC; defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Hour-of-day range applied to every day of the window (e.g., 6-18, 22-5)
    #[arg(long, value_parser = parse_hour_range)]
    pub hours: Option<HourRange>,

    /// Shortcut for a window covering the last N days through today
    #[arg(
        long = "last-days",
        value_parser = parse_positive_u32,
        conflicts_with_all = ["from", "to"]
    )]
    pub last_days: Option<PositiveU32>,

    /// Output format
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (sets log level to debug unless overridden by METRICORR_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./metricorr.toml or ./metricorr.json if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Metrics declared by `[[metrics]]` entries in the config file.
    #[arg(skip)]
    pub custom_metrics: Vec<MetricDescriptor>,
}
