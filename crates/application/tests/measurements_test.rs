mod helpers;

use chrono::{TimeZone, Utc};
use helpers::MockMeasurementRepository;
use sensor_stats_application::use_cases::{GetLastMeasurementUseCase, GetMeasurementTypesUseCase};
use sensor_stats_domain::{DeviceIdentity, Measurement};
use std::sync::Arc;

fn measurement(measurement_type: &str, value: f64, hour: u32) -> Measurement {
    Measurement {
        id: None,
        measurement_type: measurement_type.to_string(),
        value,
        unit: None,
        device: Some(DeviceIdentity::new("dev-1")),
        phenomenon_time: Utc.with_ymd_and_hms(2023, 1, 1, hour, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_get_types_empty() {
    let repository = Arc::new(MockMeasurementRepository::new());
    let use_case = GetMeasurementTypesUseCase::new(repository);

    let types = use_case.execute().await.unwrap();
    assert!(types.is_empty());
}

#[tokio::test]
async fn test_get_types_returns_repository_types() {
    let repository =
        Arc::new(MockMeasurementRepository::new().with_types(&["humidity", "temperature"]));
    let use_case = GetMeasurementTypesUseCase::new(repository);

    let types = use_case.execute().await.unwrap();
    assert_eq!(types, vec!["humidity".to_string(), "temperature".to_string()]);
}

#[tokio::test]
async fn test_get_last_any_type() {
    let repository = Arc::new(MockMeasurementRepository::new().with_measurements(vec![
        measurement("temperature", 20.0, 8),
        measurement("humidity", 55.0, 10),
        measurement("temperature", 22.0, 9),
    ]));
    let use_case = GetLastMeasurementUseCase::new(repository);

    let last = use_case.execute(None).await.unwrap().unwrap();
    assert_eq!(last.measurement_type, "humidity");
    assert_eq!(last.value, 55.0);
}

#[tokio::test]
async fn test_get_last_of_type() {
    let repository = Arc::new(MockMeasurementRepository::new().with_measurements(vec![
        measurement("temperature", 20.0, 8),
        measurement("humidity", 55.0, 10),
        measurement("temperature", 22.0, 9),
    ]));
    let use_case = GetLastMeasurementUseCase::new(repository);

    let last = use_case.execute(Some("temperature")).await.unwrap().unwrap();
    assert_eq!(last.value, 22.0);

    assert!(use_case.execute(Some("pressure")).await.unwrap().is_none());
}
