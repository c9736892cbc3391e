mod analysis;
mod app;
mod config;
mod report;
mod source;
mod validation;
mod window;

#[cfg(test)]
mod test_support;

pub use analysis::{AnalysisError, SelectionError};
pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use report::ReportError;
pub use source::SourceError;
pub use validation::ValidationError;
pub use window::WindowError;
