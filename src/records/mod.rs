//! Record model, time windows, metric catalogs, and record sources.
//!
//! A record set is an ordered sequence of timestamped observations with named
//! numeric fields. Fields may be missing or invalid (NaN, infinite); every
//! accessor here reports those as `None` so downstream computations exclude
//! them instead of reading them as zero.
mod catalog;
mod parse;
mod reading;
mod source;
mod types;
mod window;


pub use catalog::{CatalogKind, MetricCatalog, MetricDescriptor};
pub use parse::parse_records;
pub use reading::{HealthReading, SensorReading};
pub use source::{
    DEFAULT_TIMESTAMP_FIELD, FileRecordSource, InMemorySource, RecordFormat, RecordSource,
};
pub use types::{FieldAccess, MetricKey, Record, Timestamp, valid_number};
pub use window::{HourRange, TimeWindow};
