use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = DateTime<Utc>;

/// Opaque name of one numeric field of a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricKey(String);

impl MetricKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MetricKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for MetricKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for MetricKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Keeps a value only when it can take part in a computation.
#[must_use]
pub fn valid_number(value: Option<f64>) -> Option<f64> {
    value.filter(|number| number.is_finite())
}

/// Typed access to the named numeric fields of a record.
///
/// Implementors return the stored value from [`FieldAccess::raw_field`]
/// (`None` when the field is absent or unknown); [`FieldAccess::field`] then
/// drops NaN and infinite values. Absence is exclusion, never zero.
pub trait FieldAccess {
    fn timestamp(&self) -> Timestamp;

    fn raw_field(&self, key: &str) -> Option<f64>;

    fn field(&self, key: &MetricKey) -> Option<f64> {
        valid_number(self.raw_field(key.as_str()))
    }
}

/// Open-schema record loaded from an external source.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    timestamp: Timestamp,
    fields: BTreeMap<MetricKey, Option<f64>>,
}

impl Record {
    #[must_use]
    pub const fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<MetricKey>, value: Option<f64>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<MetricKey>, value: Option<f64>) {
        self.fields.insert(key.into(), value);
    }

    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn fields(&self) -> impl Iterator<Item = (&MetricKey, Option<f64>)> {
        self.fields.iter().map(|(key, value)| (key, *value))
    }
}

impl FieldAccess for Record {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn raw_field(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied().flatten()
    }
}
