use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid date '{value}'. Expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Invalid hour range '{value}'. Expected start-end (e.g., 6-18).")]
    HourRangeFormat { value: String },
    #[error("Invalid hour in '{value}': {source}")]
    InvalidHour {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Hour {hour} is out of range. Use 0-23.")]
    HourOutOfRange { hour: u32 },
    #[error("Metric key must not be empty.")]
    EmptyMetricKey,
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u32 },
    #[error("Missing input (set --input or provide it in config).")]
    MissingInput,
    #[error("--to requires --from.")]
    WindowMissingStart,
    #[error("--hours requires a date range (--from/--to or --last-days).")]
    HoursRequireDates,
    #[error("--last-days cannot be combined with --from/--to.")]
    LastDaysWithDates,
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
