use std::fmt::Write as _;

use crate::error::{AppError, AppResult, ReportError};

pub(super) fn write_line(output: &mut String, line: &str) -> AppResult<()> {
    writeln!(output, "{}", line)
        .map_err(|err| AppError::report(ReportError::WriteLine { source: err }))
}

pub(super) fn format_value(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{:.2} {}", value, unit),
        None => format!("{:.2}", value),
    }
}

pub(super) fn format_coefficient(value: f64) -> String {
    format!("{:.3}", value)
}

pub(super) fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
