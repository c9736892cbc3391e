//! Configuration loading and application.
pub(crate) mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::{DEFAULT_CONFIG_FILES, load_config};

#[cfg(test)]
pub(crate) use loader::load_config_file;
