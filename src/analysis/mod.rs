//! Descriptive statistics and pairwise correlation over record sets.
//!
//! Every computation here is pure and deterministic. Missing data is reported
//! in-band (`count == 0`, `correlation == None`); only a malformed metric
//! selection is an error.
mod correlation;
mod statistics;
mod strength;


use serde::Serialize;

use crate::error::AnalysisError;
use crate::records::{FieldAccess, MetricKey};

pub use correlation::{
    CorrelationResult, MIN_CORRELATION_PAIRS, MIN_SELECTED_METRICS, compute_all_pairwise_correlations,
    compute_correlation, validate_selection,
};
pub use statistics::{MetricStatistics, MetricSummary, compute_statistics, summarize};
pub use strength::{
    CorrelationClass, CorrelationDirection, CorrelationStrength, STRENGTH_BANDS, Tone, classify,
    classify_direction, classify_strength,
};

/// Statistics for every selected metric plus their pairwise correlations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub statistics: Vec<MetricSummary>,
    pub correlations: Vec<CorrelationResult>,
}

/// Runs statistics and pairwise correlations for `metrics` in one pass over
/// the selection.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSelection`] under the same conditions as
/// [`compute_all_pairwise_correlations`].
pub fn analyze<R: FieldAccess>(
    records: &[R],
    metrics: &[MetricKey],
) -> Result<Analysis, AnalysisError> {
    let correlations = compute_all_pairwise_correlations(records, metrics)?;
    let statistics = summarize(records, metrics);
    tracing::debug!(
        "Analyzed {} records across {} metrics ({} pairs)",
        records.len(),
        metrics.len(),
        correlations.len()
    );
    Ok(Analysis {
        statistics,
        correlations,
    })
}
