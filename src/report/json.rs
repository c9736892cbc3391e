use serde_json::{Value, json};

use crate::analysis::{CorrelationResult, MetricSummary, classify};
use crate::error::{AppError, AppResult, ReportError};
use crate::records::MetricCatalog;

use super::Report;

pub(super) fn render_json(report: &Report) -> AppResult<String> {
    let statistics: Vec<Value> = report
        .statistics
        .iter()
        .map(|summary| statistics_json(&report.catalog, summary))
        .collect();
    let correlations: Vec<Value> = report
        .correlations
        .iter()
        .map(|result| correlation_json(&report.catalog, result))
        .collect();

    let payload = json!({
        "catalog": report.catalog.name(),
        "window": report.window,
        "records": report.records,
        "statistics": statistics,
        "correlations": correlations
    });

    let mut rendered = serde_json::to_string_pretty(&payload)
        .map_err(|err| AppError::report(ReportError::Serialize { source: err }))?;
    rendered.push('\n');
    Ok(rendered)
}

fn statistics_json(catalog: &MetricCatalog, summary: &MetricSummary) -> Value {
    let stats = &summary.statistics;
    json!({
        "metric": summary.metric,
        "label": catalog.label_for(&summary.metric),
        "unit": catalog.unit_for(&summary.metric),
        "hasData": stats.has_data(),
        "average": stats.average,
        "min": stats.min,
        "max": stats.max,
        "count": stats.count
    })
}

fn correlation_json(catalog: &MetricCatalog, result: &CorrelationResult) -> Value {
    let class = classify(result.correlation);
    json!({
        "metric1": result.metric1,
        "metric2": result.metric2,
        "label1": catalog.label_for(&result.metric1),
        "label2": catalog.label_for(&result.metric2),
        "correlation": result.correlation,
        "dataPoints": result.data_points,
        "strength": class.strength,
        "direction": class.direction,
        "label": class.headline(),
        "tone": class.tone()
    })
}
