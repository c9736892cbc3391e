//! Runs one analysis: fetch the window's records, compute, and assemble the
//! report.
mod runner;


pub use runner::{AnalysisPlan, run_analysis};
