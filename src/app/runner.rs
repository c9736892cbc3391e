use crate::analysis::{analyze, compute_all_pairwise_correlations, summarize};
use crate::args::AnalysisKind;
use crate::error::AppResult;
use crate::records::{MetricCatalog, MetricKey, RecordSource, TimeWindow};
use crate::report::Report;

/// Resolved inputs of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisPlan {
    pub catalog: MetricCatalog,
    pub metrics: Vec<MetricKey>,
    pub window: Option<TimeWindow>,
    pub analysis: AnalysisKind,
}

/// Fetches the plan's records from `source` and computes the requested
/// analysis.
///
/// # Errors
///
/// Returns an error when the source cannot be read, or when correlations are
/// requested for an empty record set or fewer than two distinct metrics.
pub fn run_analysis(source: &dyn RecordSource, plan: &AnalysisPlan) -> AppResult<Report> {
    let records = source.fetch(plan.window.as_ref())?;
    match plan.window.as_ref() {
        Some(window) => tracing::info!("{} records in {}", records.len(), window),
        None => tracing::info!("{} records", records.len()),
    }
    if records.is_empty() {
        tracing::warn!("No data available for the selected period.");
    }

    let (statistics, correlations) = match plan.analysis {
        AnalysisKind::Stats => (summarize(&records, &plan.metrics), Vec::new()),
        AnalysisKind::Correlations => (
            Vec::new(),
            compute_all_pairwise_correlations(&records, &plan.metrics)?,
        ),
        AnalysisKind::All => {
            let analysis = analyze(&records, &plan.metrics)?;
            (analysis.statistics, analysis.correlations)
        }
    };

    Ok(Report {
        catalog: plan.catalog.clone(),
        window: plan.window,
        records: records.len(),
        statistics,
        correlations,
    })
}
