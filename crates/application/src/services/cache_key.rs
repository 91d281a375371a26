use sensor_stats_domain::{CacheKey, DeviceIdentity, DomainError, TimePeriod};

pub struct CacheKeyBuilder;

impl CacheKeyBuilder {
    /// Builds the key of a cacheable query.
    ///
    /// Only closed absolute periods have a stable identity; anything else is
    /// a caller bug and yields `PreconditionViolation`.
    pub fn build(
        measurement_type: Option<&str>,
        device: Option<&DeviceIdentity>,
        period: &TimePeriod,
    ) -> Result<CacheKey, DomainError> {
        let (start, end) = period
            .as_absolute()
            .and_then(|absolute| absolute.closed_bounds())
            .ok_or_else(|| {
                DomainError::PreconditionViolation(format!(
                    "cache key requested for non-closed period {}",
                    period
                ))
            })?;

        Ok(CacheKey::new(measurement_type, device, start, end))
    }
}
