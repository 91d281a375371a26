use async_trait::async_trait;
use sensor_stats_domain::{DeviceIdentity, DeviceSelector, DomainError};

#[async_trait]
pub trait DeviceResolver: Send + Sync {
    /// Map a selector to the canonical device it names.
    ///
    /// `Ok(None)` means the lookup worked but no device matched.
    async fn resolve(
        &self,
        selector: &DeviceSelector,
    ) -> Result<Option<DeviceIdentity>, DomainError>;
}
