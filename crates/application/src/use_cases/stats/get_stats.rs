use crate::ports::{DeviceResolver, MeasurementRepository, StatsCachePort};
use crate::services::{CacheKeyBuilder, CachePolicy};
use chrono::Utc;
use sensor_stats_domain::{
    DeviceIdentity, DeviceSelector, DomainError, StatsPayload, StatsQueryParams, TimePeriod,
};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Stats returned to the caller, with where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsOutcome {
    pub payload: Arc<StatsPayload>,
    pub cache_hit: bool,
}

/// Answers stats queries, serving closed past windows from the cache.
///
/// The miss path is check, aggregate, then populate, with no coordination
/// between requests. Two concurrent misses on the same key both aggregate and
/// both write; the store keeps the first write and the payloads are equal
/// because the window can no longer change.
pub struct GetMeasurementStatsUseCase {
    device_resolver: Arc<dyn DeviceResolver>,
    repository: Arc<dyn MeasurementRepository>,
    cache: Arc<dyn StatsCachePort>,
}

impl GetMeasurementStatsUseCase {
    pub fn new(
        device_resolver: Arc<dyn DeviceResolver>,
        repository: Arc<dyn MeasurementRepository>,
        cache: Arc<dyn StatsCachePort>,
    ) -> Self {
        Self {
            device_resolver,
            repository,
            cache,
        }
    }

    #[instrument(skip(self), name = "get_measurement_stats")]
    pub async fn execute(&self, params: &StatsQueryParams) -> Result<StatsOutcome, DomainError> {
        let result = self.run(params).await;

        if let Err(e) = &result {
            if e.is_defect() {
                error!(error = %e, "Stats cache contract violated");
            } else if e.is_client_error() {
                debug!(error = %e, "Stats query rejected");
            } else {
                warn!(error = %e, "Stats query failed");
            }
        }

        result
    }

    async fn run(&self, params: &StatsQueryParams) -> Result<StatsOutcome, DomainError> {
        let period = TimePeriod::from_query(
            params.last_time_period.as_deref(),
            params.start_date.as_deref(),
            params.end_date.as_deref(),
        )?;
        let measurement_type = params.measurement_type.as_deref();
        let device = self.resolve_device(params).await?;

        if !CachePolicy::is_cacheable(&period, Utc::now()) {
            debug!(%period, "Period not cacheable, aggregating");
            let payload = self
                .repository
                .compute_stats(measurement_type, device.as_ref(), &period)
                .await?;
            return Ok(StatsOutcome {
                payload: Arc::new(payload),
                cache_hit: false,
            });
        }

        let key = CacheKeyBuilder::build(measurement_type, device.as_ref(), &period)?;

        if let Some(entry) = self.cache.get(&key) {
            debug!(key = %key, "Stats served from cache");
            return Ok(StatsOutcome {
                payload: entry.payload,
                cache_hit: true,
            });
        }

        debug!(key = %key, "Stats cache miss, aggregating");
        let payload = Arc::new(
            self.repository
                .compute_stats(measurement_type, device.as_ref(), &period)
                .await?,
        );
        self.cache.set(key, Arc::clone(&payload));

        Ok(StatsOutcome {
            payload,
            cache_hit: false,
        })
    }

    async fn resolve_device(
        &self,
        params: &StatsQueryParams,
    ) -> Result<Option<DeviceIdentity>, DomainError> {
        let Some(selector) = DeviceSelector::from_query(
            params.device.as_deref(),
            params.address.as_deref(),
            params.longitude,
            params.latitude,
        ) else {
            return Ok(None);
        };

        match self.device_resolver.resolve(&selector).await? {
            Some(identity) => {
                debug!(%selector, device = %identity, "Device resolved");
                Ok(Some(identity))
            }
            None => Err(DomainError::DeviceNotFound(selector.to_string())),
        }
    }
}
