//! Rendering of analysis results for humans (text) and machines (JSON).
mod catalog;
mod format;
mod json;
mod text;


use std::io::Write as _;
use std::path::Path;

use crate::analysis::{CorrelationResult, MetricSummary};
use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, ReportError};
use crate::records::{MetricCatalog, TimeWindow};

pub use catalog::render_catalog;

/// Everything one run produced, ready to render.
#[derive(Debug, Clone)]
pub struct Report {
    pub catalog: MetricCatalog,
    pub window: Option<TimeWindow>,
    pub records: usize,
    pub statistics: Vec<MetricSummary>,
    pub correlations: Vec<CorrelationResult>,
}

/// Renders `report` in `format`.
///
/// # Errors
///
/// Returns an error when the report cannot be formatted or serialized.
pub fn render(report: &Report, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => text::render_text(report),
        OutputFormat::Json => json::render_json(report),
    }
}

/// Writes rendered output to `path`, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns an error when the destination cannot be written.
pub fn write_output(content: &str, path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).map_err(|err| {
                AppError::report(ReportError::WriteOutput {
                    path: path.to_path_buf(),
                    source: err,
                })
            })?;
            tracing::info!("Report written to {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|err| AppError::report(ReportError::Stdout { source: err }))
        }
    }
}
