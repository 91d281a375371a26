mod device_resolver;
mod measurement_repository;
mod stats_cache_port;

pub use device_resolver::DeviceResolver;
pub use measurement_repository::MeasurementRepository;
pub use stats_cache_port::{StatsCacheMetricsSnapshot, StatsCachePort};
