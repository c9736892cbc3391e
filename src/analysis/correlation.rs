#![expect(
    clippy::float_arithmetic,
    reason = "Pearson correlation is computed in floating point."
)]

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{AnalysisError, SelectionError};
use crate::records::{FieldAccess, MetricKey};

/// Fewer valid pairs than this yield no coefficient.
pub const MIN_CORRELATION_PAIRS: usize = 2;
/// Pairwise analysis needs at least this many metrics.
pub const MIN_SELECTED_METRICS: usize = 2;

/// Pearson coefficient for one unordered pair of metrics.
///
/// `correlation` is `None` when fewer than two records carry valid values for
/// both metrics; `data_points` is always the number of pairs used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    pub metric1: MetricKey,
    pub metric2: MetricKey,
    pub correlation: Option<f64>,
    pub data_points: usize,
}

#[must_use]
pub fn compute_correlation<R: FieldAccess>(
    records: &[R],
    first: &MetricKey,
    second: &MetricKey,
) -> CorrelationResult {
    let pairs: Vec<(f64, f64)> = records
        .iter()
        .filter_map(|record| Some((record.field(first)?, record.field(second)?)))
        .collect();

    CorrelationResult {
        metric1: first.clone(),
        metric2: second.clone(),
        correlation: pearson(&pairs),
        data_points: pairs.len(),
    }
}

/// Correlates every unordered pair of `metrics`, in `(0,1), (0,2), .., (1,2)`
/// order.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidSelection`] when the record set is empty,
/// when fewer than two metrics are selected, or when a metric is selected
/// twice.
pub fn compute_all_pairwise_correlations<R: FieldAccess>(
    records: &[R],
    metrics: &[MetricKey],
) -> Result<Vec<CorrelationResult>, AnalysisError> {
    validate_selection(records.len(), metrics)?;

    let mut results = Vec::with_capacity(pair_count(metrics.len()));
    for (index, first) in metrics.iter().enumerate() {
        for second in metrics.iter().skip(index.saturating_add(1)) {
            results.push(compute_correlation(records, first, second));
        }
    }
    Ok(results)
}

/// Checks the caller contract of [`compute_all_pairwise_correlations`].
///
/// # Errors
///
/// Returns the first violated condition: empty record set, too few metrics,
/// then duplicate metrics.
pub fn validate_selection(record_count: usize, metrics: &[MetricKey]) -> Result<(), SelectionError> {
    if record_count == 0 {
        return Err(SelectionError::EmptyRecordSet);
    }
    if metrics.len() < MIN_SELECTED_METRICS {
        return Err(SelectionError::TooFewMetrics {
            selected: metrics.len(),
        });
    }
    let mut seen = BTreeSet::new();
    for metric in metrics {
        if !seen.insert(metric) {
            return Err(SelectionError::DuplicateMetric {
                metric: metric.to_string(),
            });
        }
    }
    Ok(())
}

fn pair_count(metrics: usize) -> usize {
    metrics
        .saturating_mul(metrics.saturating_sub(1))
        .checked_div(2)
        .unwrap_or(0)
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < MIN_CORRELATION_PAIRS {
        return None;
    }

    let (mean_x, mean_y) = pairs
        .iter()
        .zip(1_usize..)
        .fold((0.0_f64, 0.0_f64), |(mean_x, mean_y), (&(x, y), seen)| {
            let weight = seen as f64;
            (mean_x + (x - mean_x) / weight, mean_y + (y - mean_y) / weight)
        });

    // Squares of unscaled deviations overflow near 1e155 and underflow near
    // 1e-155; the coefficient is invariant under per-series scaling.
    let (spread_x, spread_y) = pairs.iter().fold((0.0_f64, 0.0_f64), |(acc_x, acc_y), (x, y)| {
        (acc_x.max((x - mean_x).abs()), acc_y.max((y - mean_y).abs()))
    });

    // Zero variance in either series: no linear relationship to report.
    if spread_x == 0.0 || spread_y == 0.0 {
        return Some(0.0);
    }

    let mut numerator = 0.0_f64;
    let mut sum_sq_x = 0.0_f64;
    let mut sum_sq_y = 0.0_f64;
    for (x, y) in pairs {
        let dev_x = (x - mean_x) / spread_x;
        let dev_y = (y - mean_y) / spread_y;
        numerator += dev_x * dev_y;
        sum_sq_x += dev_x * dev_x;
        sum_sq_y += dev_y * dev_y;
    }

    let coefficient = numerator / (sum_sq_x.sqrt() * sum_sq_y.sqrt());
    if coefficient.is_nan() {
        tracing::debug!(
            "Correlation over {} pairs overflowed; reporting 0",
            pairs.len()
        );
        return Some(0.0);
    }
    Some(coefficient.clamp(-1.0, 1.0))
}
