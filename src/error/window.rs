use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Date range start {from} is after end {to}.")]
    DateRangeInverted { from: NaiveDate, to: NaiveDate },
    #[error("Hour {hour} is out of range. Use 0-23.")]
    HourOutOfRange { hour: u32 },
    #[error(
        "Invalid time range: Start time cannot be after end time on the same day ({start_hour:02}:00 > {end_hour:02}:59)."
    )]
    InvertedSingleDay { start_hour: u32, end_hour: u32 },
    #[error("Date {date} cannot be represented as a timestamp.")]
    UnrepresentableDate { date: NaiveDate },
    #[error("Last-days window must cover at least one day.")]
    EmptyLastDays,
}
