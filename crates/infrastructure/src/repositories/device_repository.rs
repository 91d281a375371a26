use async_trait::async_trait;
use sensor_stats_application::ports::DeviceResolver;
use sensor_stats_domain::{DeviceIdentity, DeviceSelector, DomainError};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

/// Resolves devices by name, address or exact coordinate pair.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeviceResolver for SqliteDeviceRepository {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        selector: &DeviceSelector,
    ) -> Result<Option<DeviceIdentity>, DomainError> {
        let name = match selector {
            DeviceSelector::Name(name) => {
                sqlx::query_scalar::<_, String>("SELECT name FROM devices WHERE name = ?")
                    .bind(name.as_str())
                    .fetch_optional(&self.pool)
                    .await
            }
            // Several devices may share an address; prefer the one heard from last.
            DeviceSelector::Address(address) => {
                sqlx::query_scalar::<_, String>(
                    "SELECT name FROM devices
                     WHERE address = ?
                     ORDER BY last_observation DESC
                     LIMIT 1",
                )
                .bind(address.as_str())
                .fetch_optional(&self.pool)
                .await
            }
            DeviceSelector::Coordinates {
                longitude,
                latitude,
            } => {
                sqlx::query_scalar::<_, String>(
                    "SELECT name FROM devices
                     WHERE longitude = ? AND latitude = ?
                     ORDER BY last_observation DESC
                     LIMIT 1",
                )
                .bind(*longitude)
                .bind(*latitude)
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            error!(error = %e, "Failed to resolve device");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(found = name.is_some(), "Device lookup finished");
        Ok(name.map(|n| DeviceIdentity::new(&n)))
    }
}
