use crate::analysis::{CorrelationResult, CorrelationStrength, MetricSummary, classify};
use crate::error::AppResult;
use crate::records::MetricCatalog;

use super::Report;
use super::format::{format_coefficient, format_value, plural, write_line};

pub(super) fn render_text(report: &Report) -> AppResult<String> {
    let mut output = String::new();
    let scope = report
        .window
        .map_or_else(|| "all records".to_owned(), |window| window.to_string());
    write_line(
        &mut output,
        &format!(
            "Records: {} ({}), catalog: {}",
            report.records,
            scope,
            report.catalog.name()
        ),
    )?;

    if !report.statistics.is_empty() {
        write_line(&mut output, "")?;
        write_line(&mut output, "Statistics")?;
        for summary in &report.statistics {
            write_line(&mut output, &statistics_line(&report.catalog, summary))?;
        }
    }

    if !report.correlations.is_empty() {
        write_line(&mut output, "")?;
        write_line(&mut output, "Correlations")?;
        for result in &report.correlations {
            write_line(&mut output, &correlation_line(&report.catalog, result))?;
        }
    }

    Ok(output)
}

fn statistics_line(catalog: &MetricCatalog, summary: &MetricSummary) -> String {
    let label = catalog.label_for(&summary.metric);
    let stats = &summary.statistics;
    if !stats.has_data() {
        return format!("  {}: no data (0 records)", label);
    }
    let unit = catalog.unit_for(&summary.metric);
    format!(
        "  {}: avg {}, min {}, max {} ({})",
        label,
        format_value(stats.average, unit),
        format_value(stats.min, unit),
        format_value(stats.max, unit),
        plural(stats.count, "record", "records")
    )
}

fn correlation_line(catalog: &MetricCatalog, result: &CorrelationResult) -> String {
    let pair = format!(
        "{} vs {}",
        catalog.label_for(&result.metric1),
        catalog.label_for(&result.metric2)
    );
    let points = plural(result.data_points, "data point", "data points");
    match result.correlation {
        Some(value) => format!(
            "  {}: r = {}, {} ({})",
            pair,
            format_coefficient(value),
            classify(Some(value)).headline(),
            points
        ),
        None => format!(
            "  {}: {} ({})",
            pair,
            CorrelationStrength::Insufficient.label(),
            points
        ),
    }
}
