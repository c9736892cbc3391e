use chrono::NaiveDate;

use super::types::PositiveU32;
use crate::error::{AppError, AppResult, ValidationError};
use crate::records::{HourRange, MetricKey};

/// Calendar dates are accepted as `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let value = s.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|err| ValidationError::InvalidDate {
        value: value.to_owned(),
        source: err,
    })
}

pub(super) fn parse_hour_range(s: &str) -> AppResult<HourRange> {
    s.parse::<HourRange>().map_err(AppError::from)
}

pub(crate) fn parse_metric_key(s: &str) -> Result<MetricKey, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyMetricKey);
    }
    Ok(MetricKey::from(value))
}

pub(super) fn parse_positive_u32(s: &str) -> AppResult<PositiveU32> {
    s.parse::<PositiveU32>().map_err(AppError::from)
}
