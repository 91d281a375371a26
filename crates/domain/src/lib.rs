//! Sensor Stats Domain Layer
pub mod config;
pub mod device;
pub mod errors;
pub mod measurement;
pub mod stats_cache;
pub mod stats_query;
pub mod time_period;

pub use config::{CliOverrides, Config};
pub use device::{DeviceIdentity, DeviceSelector};
pub use errors::DomainError;
pub use measurement::{Measurement, StatsPayload, TypeStats};
pub use stats_cache::{CacheEntry, CacheKey};
pub use stats_query::StatsQueryParams;
pub use time_period::{AbsolutePeriod, RelativePeriod, TimePeriod};
