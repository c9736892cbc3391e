//! Core library for the `metricorr` CLI.
//!
//! This crate computes descriptive statistics and pairwise Pearson
//! correlation over timestamped record sets (farm sensor readings, health
//! monitor vitals, or any exported table with numeric columns). It provides
//! the record model and sources, the analysis engine, report rendering, and
//! the CLI argument and configuration types used by the binary.
pub mod analysis;
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod records;
pub mod report;
