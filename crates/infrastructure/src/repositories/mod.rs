pub mod device_repository;
pub mod measurement_repository;

pub use device_repository::SqliteDeviceRepository;
pub use measurement_repository::SqliteMeasurementRepository;
