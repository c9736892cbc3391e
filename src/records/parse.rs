use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};

use crate::error::SourceError;

use super::source::RecordFormat;
use super::types::{Record, Timestamp};

/// Cell spellings treated as a missing value in CSV input.
const CSV_NULLS: [&str; 2] = ["", "null"];
/// Naive timestamp layouts accepted after RFC 3339.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a record document in `format`. `origin` is only used in error
/// messages.
///
/// Records keep document order; ordering by timestamp is the caller's job.
///
/// # Errors
///
/// Returns an error when the document is structurally invalid: not a JSON
/// array, a row that is not an object, or a row whose timestamp is missing or
/// unparseable.
pub fn parse_records(
    content: &str,
    format: RecordFormat,
    timestamp_field: &str,
    origin: &Path,
) -> Result<Vec<Record>, SourceError> {
    match format {
        RecordFormat::Json => parse_json(content, timestamp_field, origin),
        RecordFormat::Jsonl => parse_jsonl(content, timestamp_field, origin),
        RecordFormat::Csv => parse_csv(content, timestamp_field, origin),
    }
}

fn parse_json(content: &str, timestamp_field: &str, origin: &Path) -> Result<Vec<Record>, SourceError> {
    let document: Value = serde_json::from_str(content).map_err(|err| SourceError::ParseJson {
        path: origin.to_path_buf(),
        source: err,
    })?;
    let Value::Array(rows) = document else {
        return Err(SourceError::NotAnArray {
            path: origin.to_path_buf(),
        });
    };
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let row_number = index.saturating_add(1);
        let Value::Object(object) = row else {
            return Err(SourceError::RecordNotObject {
                path: origin.to_path_buf(),
                row: row_number,
            });
        };
        records.push(record_from_object(object, timestamp_field, origin, row_number)?);
    }
    Ok(records)
}

fn parse_jsonl(content: &str, timestamp_field: &str, origin: &Path) -> Result<Vec<Record>, SourceError> {
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line_number = index.saturating_add(1);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let row: Value = serde_json::from_str(trimmed).map_err(|err| SourceError::ParseJsonLine {
            path: origin.to_path_buf(),
            line: line_number,
            source: err,
        })?;
        let Value::Object(object) = row else {
            return Err(SourceError::RecordNotObject {
                path: origin.to_path_buf(),
                row: line_number,
            });
        };
        records.push(record_from_object(&object, timestamp_field, origin, line_number)?);
    }
    Ok(records)
}

fn record_from_object(
    object: &Map<String, Value>,
    timestamp_field: &str,
    origin: &Path,
    row: usize,
) -> Result<Record, SourceError> {
    let raw_timestamp = object
        .get(timestamp_field)
        .ok_or_else(|| SourceError::MissingTimestamp {
            path: origin.to_path_buf(),
            row,
            field: timestamp_field.to_owned(),
        })?;
    let timestamp =
        timestamp_from_value(raw_timestamp).ok_or_else(|| SourceError::InvalidTimestamp {
            path: origin.to_path_buf(),
            row,
            value: raw_timestamp.to_string(),
        })?;

    let mut record = Record::new(timestamp);
    for (name, value) in object {
        if name == timestamp_field {
            continue;
        }
        match field_from_value(value) {
            Some(parsed) => record.insert(name.as_str(), parsed),
            None => tracing::trace!("Skipping non-numeric column '{}' in row {}", name, row),
        }
    }
    Ok(record)
}

fn timestamp_from_value(value: &Value) -> Option<Timestamp> {
    match value {
        Value::String(text) => parse_timestamp(text),
        Value::Number(number) => number
            .as_i64()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `Some(None)` for an explicit null, `Some(Some(v))` for a number, `None`
/// for values that are not metrics at all.
fn field_from_value(value: &Value) -> Option<Option<f64>> {
    match value {
        Value::Null => Some(None),
        Value::Number(number) => Some(number.as_f64()),
        Value::String(text) => text.trim().parse::<f64>().ok().map(Some),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(super) fn parse_timestamp(text: &str) -> Option<Timestamp> {
    let trimmed = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
    {
        return Some(parsed.and_utc());
    }
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}

fn parse_csv(content: &str, timestamp_field: &str, origin: &Path) -> Result<Vec<Record>, SourceError> {
    let csv_error = |source: csv::Error| SourceError::Csv {
        path: origin.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());
    let header = reader.headers().map_err(csv_error)?.clone();
    if header.iter().all(str::is_empty) {
        return Err(SourceError::CsvMissingHeader {
            path: origin.to_path_buf(),
        });
    }
    let timestamp_column = header
        .iter()
        .position(|name| name == timestamp_field)
        .ok_or_else(|| SourceError::CsvMissingTimestampColumn {
            path: origin.to_path_buf(),
            field: timestamp_field.to_owned(),
        })?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let row_number = index.saturating_add(1);
        let raw_timestamp = row.get(timestamp_column).unwrap_or_default();
        let timestamp =
            parse_timestamp(raw_timestamp).ok_or_else(|| SourceError::InvalidTimestamp {
                path: origin.to_path_buf(),
                row: row_number,
                value: raw_timestamp.to_owned(),
            })?;
        let mut record = Record::new(timestamp);
        for (column, name) in header.iter().enumerate() {
            if column == timestamp_column {
                continue;
            }
            let cell = row.get(column).unwrap_or_default();
            match csv_cell(cell) {
                Some(parsed) => record.insert(name, parsed),
                None => tracing::trace!(
                    "Skipping non-numeric cell '{}' in column '{}' on row {}",
                    cell,
                    name,
                    row_number
                ),
            }
        }
        records.push(record);
    }
    Ok(records)
}

fn csv_cell(cell: &str) -> Option<Option<f64>> {
    if CSV_NULLS.iter().any(|null| cell.eq_ignore_ascii_case(null)) {
        return Some(None);
    }
    cell.parse::<f64>().ok().map(Some)
}
