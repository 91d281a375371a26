use crate::ports::MeasurementRepository;
use sensor_stats_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GetMeasurementTypesUseCase {
    repository: Arc<dyn MeasurementRepository>,
}

impl GetMeasurementTypesUseCase {
    pub fn new(repository: Arc<dyn MeasurementRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        let types = self.repository.get_types().await?;
        debug!(count = types.len(), "Measurement types retrieved");
        Ok(types)
    }
}
