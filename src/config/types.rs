use std::path::PathBuf;

use serde::Deserialize;

use crate::args::{AnalysisKind, OutputFormat};
use crate::records::{CatalogKind, MetricDescriptor, RecordFormat};

/// File-level counterpart of the CLI flags. Dates are `YYYY-MM-DD` strings
/// and `hours` uses the `start-end` form of `--hours`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub format: Option<RecordFormat>,
    pub timestamp_field: Option<String>,
    pub catalog: Option<CatalogKind>,
    pub selection: Option<Vec<String>>,
    pub analysis: Option<AnalysisKind>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub hours: Option<String>,
    pub last_days: Option<u32>,
    pub output: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    /// Custom catalog entries (`[[metrics]]`).
    pub metrics: Option<Vec<MetricDescriptor>>,
}
