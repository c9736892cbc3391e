use serde_json::json;

use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, ReportError};
use crate::records::MetricCatalog;

use super::format::write_line;

/// Lists the metrics of `catalog`, one per line in text form.
///
/// # Errors
///
/// Returns an error when the listing cannot be formatted or serialized.
pub fn render_catalog(catalog: &MetricCatalog, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => {
            let width = catalog
                .entries()
                .iter()
                .map(|entry| entry.key.as_str().chars().count())
                .max()
                .unwrap_or(0);
            let mut output = String::new();
            write_line(&mut output, &format!("Catalog: {}", catalog.name()))?;
            for entry in catalog.entries() {
                let line = match entry.unit.as_deref() {
                    Some(unit) => format!("  {:<width$}  {} ({})", entry.key, entry.label, unit),
                    None => format!("  {:<width$}  {}", entry.key, entry.label),
                };
                write_line(&mut output, &line)?;
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let payload = json!({
                "catalog": catalog.name(),
                "metrics": catalog.entries()
            });
            let mut rendered = serde_json::to_string_pretty(&payload)
                .map_err(|err| AppError::report(ReportError::Serialize { source: err }))?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
