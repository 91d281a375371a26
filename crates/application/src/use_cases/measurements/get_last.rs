use crate::ports::MeasurementRepository;
use sensor_stats_domain::{DomainError, Measurement};
use std::sync::Arc;
use tracing::instrument;

pub struct GetLastMeasurementUseCase {
    repository: Arc<dyn MeasurementRepository>,
}

impl GetLastMeasurementUseCase {
    pub fn new(repository: Arc<dyn MeasurementRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        measurement_type: Option<&str>,
    ) -> Result<Option<Measurement>, DomainError> {
        self.repository.get_last(measurement_type).await
    }
}
