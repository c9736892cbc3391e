use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SelectionError};

use super::types::MetricKey;

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Farm sensors: temperature, humidity, soil moisture, light
    Sensor,
    /// Health monitor: heart rate, body temperature, humidity, IR value
    Health,
    /// Metrics declared in the config file
    Custom,
}

impl CatalogKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Sensor => "sensor",
            CatalogKind::Health => "health",
            CatalogKind::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub key: MetricKey,
    pub label: String,
    #[serde(default)]
    pub unit: Option<String>,
}

impl MetricDescriptor {
    #[must_use]
    pub fn new(key: &str, label: &str, unit: Option<&str>) -> Self {
        Self {
            key: MetricKey::from(key),
            label: label.to_owned(),
            unit: unit.map(str::to_owned),
        }
    }

    /// Label with the unit appended, e.g. `Temperature (°C)`.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) => format!("{} ({})", self.label, unit),
            None => self.label.clone(),
        }
    }
}

/// Ordered list of selectable metrics with their display labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCatalog {
    name: String,
    entries: Vec<MetricDescriptor>,
}

impl MetricCatalog {
    #[must_use]
    pub fn sensor() -> Self {
        Self {
            name: CatalogKind::Sensor.as_str().to_owned(),
            entries: vec![
                MetricDescriptor::new("temperature", "Temperature", Some("°C")),
                MetricDescriptor::new("humidity", "Humidity", Some("%")),
                MetricDescriptor::new("moisture", "Soil Moisture", Some("%")),
                MetricDescriptor::new("light", "Light", Some("lux")),
            ],
        }
    }

    #[must_use]
    pub fn health() -> Self {
        Self {
            name: CatalogKind::Health.as_str().to_owned(),
            entries: vec![
                MetricDescriptor::new("beat_avg", "Heart Rate", Some("BPM")),
                MetricDescriptor::new("temperature_c", "Body Temperature", Some("°C")),
                MetricDescriptor::new("humidity", "Humidity", Some("%")),
                MetricDescriptor::new("ir_value", "IR Value", None),
            ],
        }
    }

    /// Builds a catalog from user-declared metrics.
    ///
    /// # Errors
    ///
    /// Returns an error when no metrics are declared, or when a key is empty
    /// or repeated.
    pub fn custom(entries: Vec<MetricDescriptor>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::CustomCatalogEmpty);
        }
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if entry.key.as_str().trim().is_empty() {
                return Err(ConfigError::CatalogKeyEmpty);
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(ConfigError::CatalogKeyDuplicate {
                    key: entry.key.to_string(),
                });
            }
        }
        Ok(Self {
            name: CatalogKind::Custom.as_str().to_owned(),
            entries,
        })
    }

    /// Builds the catalog for `kind`; `custom` entries are only used for
    /// [`CatalogKind::Custom`].
    ///
    /// # Errors
    ///
    /// Returns an error when a custom catalog is requested with invalid
    /// entries.
    pub fn for_kind(kind: CatalogKind, custom: &[MetricDescriptor]) -> Result<Self, ConfigError> {
        match kind {
            CatalogKind::Sensor => Ok(Self::sensor()),
            CatalogKind::Health => Ok(Self::health()),
            CatalogKind::Custom => Self::custom(custom.to_vec()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[MetricDescriptor] {
        &self.entries
    }

    #[must_use]
    pub fn keys(&self) -> Vec<MetricKey> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetricDescriptor> {
        self.entries.iter().find(|entry| entry.key.as_str() == key)
    }

    /// Display label for `key`, falling back to the raw key.
    #[must_use]
    pub fn label_for(&self, key: &MetricKey) -> String {
        self.get(key.as_str())
            .map_or_else(|| key.to_string(), MetricDescriptor::display_label)
    }

    #[must_use]
    pub fn unit_for(&self, key: &MetricKey) -> Option<&str> {
        self.get(key.as_str())
            .and_then(|entry| entry.unit.as_deref())
    }

    /// Validates a selection against the catalog. An empty selection selects
    /// every metric in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error when a selected key is not part of the catalog or is
    /// selected more than once.
    pub fn resolve(&self, selection: &[MetricKey]) -> Result<Vec<MetricKey>, SelectionError> {
        if selection.is_empty() {
            return Ok(self.keys());
        }
        let mut seen = BTreeSet::new();
        for key in selection {
            if self.get(key.as_str()).is_none() {
                return Err(SelectionError::UnknownMetric {
                    metric: key.to_string(),
                    catalog: self.name.clone(),
                });
            }
            if !seen.insert(key) {
                return Err(SelectionError::DuplicateMetric {
                    metric: key.to_string(),
                });
            }
        }
        Ok(selection.to_vec())
    }
}
