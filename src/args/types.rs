use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Average, minimum and maximum per metric
    Stats,
    /// Pearson correlation for every metric pair
    Correlations,
    /// Statistics and correlations
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveU32(NonZeroU32);

impl PositiveU32 {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for PositiveU32 {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(PositiveU32)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveU32 {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveU32::try_from(value)
    }
}

impl From<PositiveU32> for u32 {
    fn from(value: PositiveU32) -> Self {
        value.get()
    }
}
