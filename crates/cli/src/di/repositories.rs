use sensor_stats_domain::config::DatabaseConfig;
use sensor_stats_infrastructure::repositories::{
    SqliteDeviceRepository, SqliteMeasurementRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub device: Arc<SqliteDeviceRepository>,
    pub measurement: Arc<SqliteMeasurementRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, cfg: &DatabaseConfig) -> Self {
        Self {
            device: Arc::new(SqliteDeviceRepository::new(pool.clone())),
            measurement: Arc::new(SqliteMeasurementRepository::new(pool, cfg)),
        }
    }
}
