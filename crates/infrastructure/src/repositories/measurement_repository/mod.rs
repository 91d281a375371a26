mod helpers;
mod reader;

use async_trait::async_trait;
use chrono::Utc;
use sensor_stats_application::ports::MeasurementRepository;
use sensor_stats_domain::{
    config::DatabaseConfig, DeviceIdentity, DomainError, Measurement, StatsPayload, TimePeriod,
};
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::{error, instrument};

pub struct SqliteMeasurementRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl SqliteMeasurementRepository {
    pub fn new(pool: SqlitePool, cfg: &DatabaseConfig) -> Self {
        Self {
            pool,
            query_timeout: Duration::from_secs(cfg.query_timeout_secs),
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }
}

#[async_trait]
impl MeasurementRepository for SqliteMeasurementRepository {
    #[instrument(skip(self), fields(period = %period))]
    async fn compute_stats(
        &self,
        measurement_type: Option<&str>,
        device: Option<&DeviceIdentity>,
        period: &TimePeriod,
    ) -> Result<StatsPayload, DomainError> {
        let (start, end) = period.bounds(Utc::now());

        let aggregation = reader::compute_stats(&self.pool, measurement_type, device, start, end);
        match tokio::time::timeout(self.query_timeout, aggregation).await {
            Ok(Ok(payload)) => Ok(payload),
            Ok(Err(e)) => {
                error!(error = %e, "Stats aggregation failed");
                Err(DomainError::AggregationFailure(e.to_string()))
            }
            Err(_) => {
                error!(timeout_ms = self.query_timeout.as_millis() as u64, "Stats aggregation timed out");
                Err(DomainError::AggregationFailure(format!(
                    "aggregation timed out after {:?}",
                    self.query_timeout
                )))
            }
        }
    }

    async fn get_types(&self) -> Result<Vec<String>, DomainError> {
        reader::get_types(&self.pool).await
    }

    async fn get_last(
        &self,
        measurement_type: Option<&str>,
    ) -> Result<Option<Measurement>, DomainError> {
        reader::get_last(&self.pool, measurement_type).await
    }
}
