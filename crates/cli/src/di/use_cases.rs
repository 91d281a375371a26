use super::Repositories;
use sensor_stats_application::ports::StatsCachePort;
use sensor_stats_application::use_cases::{
    GetLastMeasurementUseCase, GetMeasurementStatsUseCase, GetMeasurementTypesUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub get_stats: Arc<GetMeasurementStatsUseCase>,
    pub get_types: Arc<GetMeasurementTypesUseCase>,
    pub get_last: Arc<GetLastMeasurementUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, cache: Arc<dyn StatsCachePort>) -> Self {
        Self {
            get_stats: Arc::new(GetMeasurementStatsUseCase::new(
                repos.device.clone(),
                repos.measurement.clone(),
                cache,
            )),
            get_types: Arc::new(GetMeasurementTypesUseCase::new(repos.measurement.clone())),
            get_last: Arc::new(GetLastMeasurementUseCase::new(repos.measurement.clone())),
        }
    }
}
