#![expect(
    clippy::float_arithmetic,
    reason = "Means and extremes are floating-point by definition."
)]

use serde::Serialize;

use crate::records::{FieldAccess, MetricKey};

/// Average/min/max over the valid values of one metric.
///
/// When `count` is zero the other fields hold the `0` sentinel and must be
/// read as "no data", never as a measured zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricStatistics {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl MetricStatistics {
    pub const NO_DATA: Self = Self {
        average: 0.0,
        min: 0.0,
        max: 0.0,
        count: 0,
    };

    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub metric: MetricKey,
    pub statistics: MetricStatistics,
}

#[must_use]
pub fn compute_statistics<R: FieldAccess>(records: &[R], metric: &MetricKey) -> MetricStatistics {
    let mut count = 0usize;
    let mut average = 0.0_f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in records.iter().filter_map(|record| record.field(metric)) {
        count = count.saturating_add(1);
        average += (value - average) / count as f64;
        min = min.min(value);
        max = max.max(value);
    }

    if count == 0 {
        return MetricStatistics::NO_DATA;
    }

    MetricStatistics {
        average,
        min,
        max,
        count,
    }
}

/// Statistics for each metric, in selection order.
#[must_use]
pub fn summarize<R: FieldAccess>(records: &[R], metrics: &[MetricKey]) -> Vec<MetricSummary> {
    metrics
        .iter()
        .map(|metric| MetricSummary {
            metric: metric.clone(),
            statistics: compute_statistics(records, metric),
        })
        .collect()
}
