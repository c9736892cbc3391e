use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read records '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON records '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse JSON line {line} in '{path}': {source}")]
    ParseJsonLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Records document '{path}' must be a JSON array of objects.")]
    NotAnArray { path: PathBuf },
    #[error("Record {row} in '{path}' is not an object.")]
    RecordNotObject { path: PathBuf, row: usize },
    #[error("Record {row} in '{path}' is missing timestamp field '{field}'.")]
    MissingTimestamp {
        path: PathBuf,
        row: usize,
        field: String,
    },
    #[error("Record {row} in '{path}' has an invalid timestamp '{value}'.")]
    InvalidTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },
    #[error("Failed to parse CSV records '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("CSV '{path}' has no header line.")]
    CsvMissingHeader { path: PathBuf },
    #[error("CSV '{path}' has no '{field}' column.")]
    CsvMissingTimestampColumn { path: PathBuf, field: String },
    #[error("Unsupported record format '{ext}'. Use .json, .jsonl, or .csv.")]
    UnsupportedExtension { ext: String },
    #[error("Record file must have a .json, .jsonl, or .csv extension (or pass --format).")]
    MissingExtension,
}
