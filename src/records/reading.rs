use serde::{Deserialize, Serialize};

use super::types::{FieldAccess, Record, Timestamp};

/// Row of the farm `sensor_data` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    pub created_at: Timestamp,
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    #[serde(default)]
    pub light: Option<f64>,
}

impl FieldAccess for SensorReading {
    fn timestamp(&self) -> Timestamp {
        self.created_at
    }

    fn raw_field(&self, key: &str) -> Option<f64> {
        match key {
            "temperature" => Some(self.temperature),
            "humidity" => Some(self.humidity),
            "moisture" => Some(self.moisture),
            "light" => self.light,
            _ => None,
        }
    }
}

impl From<&SensorReading> for Record {
    fn from(reading: &SensorReading) -> Self {
        Record::new(reading.created_at)
            .with_field("temperature", Some(reading.temperature))
            .with_field("humidity", Some(reading.humidity))
            .with_field("moisture", Some(reading.moisture))
            .with_field("light", reading.light)
    }
}

/// Health monitor reading; any vital may be missing when the sensor drops out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReading {
    pub id: i64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub beat_avg: Option<f64>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub ir_value: Option<f64>,
}

impl FieldAccess for HealthReading {
    fn timestamp(&self) -> Timestamp {
        self.created_at
    }

    fn raw_field(&self, key: &str) -> Option<f64> {
        match key {
            "beat_avg" => self.beat_avg,
            "temperature_c" => self.temperature_c,
            "humidity" => self.humidity,
            "ir_value" => self.ir_value,
            _ => None,
        }
    }
}

impl From<&HealthReading> for Record {
    fn from(reading: &HealthReading) -> Self {
        Record::new(reading.created_at)
            .with_field("beat_avg", reading.beat_avg)
            .with_field("temperature_c", reading.temperature_c)
            .with_field("humidity", reading.humidity)
            .with_field("ir_value", reading.ir_value)
    }
}
