use thiserror::Error;

/// Caller-contract violations for a metric selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Please select at least two metrics to correlate (selected {selected}).")]
    TooFewMetrics { selected: usize },
    #[error("No data available for the selected period.")]
    EmptyRecordSet,
    #[error("Metric '{metric}' is selected more than once.")]
    DuplicateMetric { metric: String },
    #[error("Unknown metric '{metric}' for the {catalog} catalog.")]
    UnknownMetric { metric: String, catalog: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),
}
