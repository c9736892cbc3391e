use thiserror::Error;

use super::{
    AnalysisError, ConfigError, ReportError, SelectionError, SourceError, ValidationError,
    WindowError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Time window error: {0}")]
    Window(#[from] WindowError),
    #[error("Record source error: {0}")]
    Source(#[from] SourceError),
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<SelectionError> for AppError {
    fn from(value: SelectionError) -> Self {
        AppError::Analysis(AnalysisError::from(value))
    }
}

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn window<E>(error: E) -> Self
    where
        E: Into<WindowError>,
    {
        error.into().into()
    }

    pub fn record_source<E>(error: E) -> Self
    where
        E: Into<SourceError>,
    {
        error.into().into()
    }

    pub fn analysis<E>(error: E) -> Self
    where
        E: Into<AnalysisError>,
    {
        error.into().into()
    }

    pub fn report<E>(error: E) -> Self
    where
        E: Into<ReportError>,
    {
        error.into().into()
    }
}
