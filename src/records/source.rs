use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, SourceError};

use super::parse::parse_records;
use super::types::Record;
use super::window::TimeWindow;

/// Timestamp column written by the dashboard's `sensor_data` table.
pub const DEFAULT_TIMESTAMP_FIELD: &str = "created_at";

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// JSON array of row objects
    Json,
    /// One JSON object per line
    Jsonl,
    /// Comma-separated values with a header line
    Csv,
}

impl RecordFormat {
    /// Infers the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error when the extension is missing or unsupported.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(RecordFormat::Json),
            Some("jsonl" | "ndjson") => Ok(RecordFormat::Jsonl),
            Some("csv") => Ok(RecordFormat::Csv),
            Some(ext) => Err(SourceError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(SourceError::MissingExtension),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordFormat::Json => "json",
            RecordFormat::Jsonl => "jsonl",
            RecordFormat::Csv => "csv",
        }
    }
}

/// Supplies record sets for analysis.
pub trait RecordSource {
    /// Returns the records inside `window` (every record when `None`),
    /// ordered by timestamp ascending.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying data cannot be read or is
    /// structurally invalid.
    fn fetch(&self, window: Option<&TimeWindow>) -> AppResult<Vec<Record>>;
}

/// Record set exported to a local file.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
    format: RecordFormat,
    timestamp_field: String,
}

impl FileRecordSource {
    /// Creates a source for `path`, inferring the format from the extension
    /// when `format` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error when the format cannot be inferred.
    pub fn new(path: impl Into<PathBuf>, format: Option<RecordFormat>) -> Result<Self, SourceError> {
        let path = path.into();
        let format = match format {
            Some(format) => format,
            None => RecordFormat::from_path(&path)?,
        };
        Ok(Self {
            path,
            format,
            timestamp_field: DEFAULT_TIMESTAMP_FIELD.to_owned(),
        })
    }

    #[must_use]
    pub fn with_timestamp_field(mut self, field: impl Into<String>) -> Self {
        self.timestamp_field = field.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn format(&self) -> RecordFormat {
        self.format
    }
}

impl RecordSource for FileRecordSource {
    fn fetch(&self, window: Option<&TimeWindow>) -> AppResult<Vec<Record>> {
        let content = std::fs::read_to_string(&self.path).map_err(|err| {
            AppError::record_source(SourceError::Read {
                path: self.path.clone(),
                source: err,
            })
        })?;
        let records = parse_records(&content, self.format, &self.timestamp_field, &self.path)?;
        let loaded = records.len();
        let selected = select_window(records, window);
        tracing::debug!(
            "Loaded {} records from {} ({}), {} inside the window",
            loaded,
            self.path.display(),
            self.format.as_str(),
            selected.len()
        );
        Ok(selected)
    }
}

/// Record set already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Record>,
}

impl InMemorySource {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn fetch(&self, window: Option<&TimeWindow>) -> AppResult<Vec<Record>> {
        Ok(select_window(self.records.clone(), window))
    }
}

fn select_window(mut records: Vec<Record>, window: Option<&TimeWindow>) -> Vec<Record> {
    if let Some(window) = window {
        records.retain(|record| window.contains(&record.timestamp()));
    }
    records.sort_by_key(Record::timestamp);
    records
}
