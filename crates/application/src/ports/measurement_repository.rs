use async_trait::async_trait;
use sensor_stats_domain::{DeviceIdentity, DomainError, Measurement, StatsPayload, TimePeriod};

#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    /// Aggregate count/min/max/avg per measurement type.
    ///
    /// `None` for type or device means "all". Failures are reported as
    /// `DomainError::AggregationFailure`.
    async fn compute_stats(
        &self,
        measurement_type: Option<&str>,
        device: Option<&DeviceIdentity>,
        period: &TimePeriod,
    ) -> Result<StatsPayload, DomainError>;

    /// Distinct measurement types, sorted
    async fn get_types(&self) -> Result<Vec<String>, DomainError>;

    /// Most recent measurement, optionally restricted to one type
    async fn get_last(
        &self,
        measurement_type: Option<&str>,
    ) -> Result<Option<Measurement>, DomainError>;
}
