use std::fmt;

use chrono::{Days, NaiveDate, Timelike};
use serde::Serialize;

use crate::error::{ValidationError, WindowError};

use super::types::Timestamp;

const LAST_HOUR: u32 = 23;
const LAST_MINUTE: u32 = 59;
const LAST_SECOND: u32 = 59;
const LAST_MILLI: u32 = 999;

/// Inclusive hour-of-day range, `start:00` through `end:59`.
///
/// A range whose start is after its end wraps across midnight (22-5 keeps
/// 22:00 through 05:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRange {
    start: u32,
    end: u32,
}

impl HourRange {
    pub const FULL_DAY: Self = Self {
        start: 0,
        end: LAST_HOUR,
    };

    /// Builds an hour range.
    ///
    /// # Errors
    ///
    /// Returns an error when either hour is above 23.
    pub const fn new(start: u32, end: u32) -> Result<Self, WindowError> {
        if start > LAST_HOUR {
            return Err(WindowError::HourOutOfRange { hour: start });
        }
        if end > LAST_HOUR {
            return Err(WindowError::HourOutOfRange { hour: end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    #[must_use]
    pub const fn wraps_midnight(self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub const fn is_full_day(self) -> bool {
        self.start == 0 && self.end == LAST_HOUR
    }

    #[must_use]
    pub const fn contains_hour(self, hour: u32) -> bool {
        if self.wraps_midnight() {
            hour >= self.start || hour <= self.end
        } else {
            hour >= self.start && hour <= self.end
        }
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::FULL_DAY
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:{:02}", self.start, self.end, LAST_MINUTE)
    }
}

impl std::str::FromStr for HourRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let (start_str, end_str) =
            value
                .split_once('-')
                .ok_or_else(|| ValidationError::HourRangeFormat {
                    value: value.to_owned(),
                })?;
        let start = parse_hour(start_str, value)?;
        let end = parse_hour(end_str, value)?;
        if let Some(hour) = [start, end].into_iter().find(|hour| *hour > LAST_HOUR) {
            return Err(ValidationError::HourOutOfRange { hour });
        }
        Ok(Self { start, end })
    }
}

fn parse_hour(part: &str, value: &str) -> Result<u32, ValidationError> {
    part.trim()
        .parse::<u32>()
        .map_err(|err| ValidationError::InvalidHour {
            value: value.to_owned(),
            source: err,
        })
}

/// Inclusive calendar range with an hour-of-day sub-window, evaluated in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    from: NaiveDate,
    to: NaiveDate,
    hours: HourRange,
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    /// Builds a window covering `from` at `hours.start():00` through `to` at
    /// `hours.end():59:59.999`.
    ///
    /// # Errors
    ///
    /// Returns an error when `from` is after `to`, or when a single-day window
    /// has a start hour after its end hour.
    pub fn new(from: NaiveDate, to: NaiveDate, hours: HourRange) -> Result<Self, WindowError> {
        if from > to {
            return Err(WindowError::DateRangeInverted { from, to });
        }
        if from == to && hours.wraps_midnight() {
            return Err(WindowError::InvertedSingleDay {
                start_hour: hours.start,
                end_hour: hours.end,
            });
        }
        let start = from
            .and_hms_milli_opt(hours.start, 0, 0, 0)
            .ok_or(WindowError::UnrepresentableDate { date: from })?
            .and_utc();
        let end = to
            .and_hms_milli_opt(hours.end, LAST_MINUTE, LAST_SECOND, LAST_MILLI)
            .ok_or(WindowError::UnrepresentableDate { date: to })?
            .and_utc();
        Ok(Self {
            from,
            to,
            hours,
            start,
            end,
        })
    }

    /// The `days` calendar days before `today`, through `today`.
    ///
    /// # Errors
    ///
    /// Returns an error when `days` is zero or the start date underflows.
    pub fn last_days(days: u32, today: NaiveDate, hours: HourRange) -> Result<Self, WindowError> {
        if days == 0 {
            return Err(WindowError::EmptyLastDays);
        }
        let from = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(WindowError::UnrepresentableDate { date: today })?;
        Self::new(from, today, hours)
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.from
    }

    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.to
    }

    #[must_use]
    pub const fn hours(&self) -> HourRange {
        self.hours
    }

    #[must_use]
    pub const fn bounds(&self) -> (Timestamp, Timestamp) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        *timestamp >= self.start
            && *timestamp <= self.end
            && self.hours.contains_hour(timestamp.hour())
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}, hours {} UTC", self.from, self.to, self.hours)
    }
}
