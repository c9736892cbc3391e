//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::{CliArgs, Command};
pub use types::{AnalysisKind, OutputFormat, PositiveU32};

pub(crate) use parsers::{parse_date, parse_metric_key};
