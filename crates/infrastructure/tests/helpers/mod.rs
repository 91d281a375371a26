#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sensor_stats_infrastructure::database::run_migrations;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// In-memory database with the production schema. A single connection keeps
/// every query on the same in-memory instance.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub async fn insert_device(
    pool: &SqlitePool,
    name: &str,
    address: Option<&str>,
    coordinates: Option<(f64, f64)>,
    last_observation: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO devices (name, address, longitude, latitude, last_observation)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(name)
    .bind(address)
    .bind(coordinates.map(|(lon, _)| lon))
    .bind(coordinates.map(|(_, lat)| lat))
    .bind(last_observation.map(|t| t.timestamp_millis()))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_measurement(
    pool: &SqlitePool,
    measurement_type: &str,
    value: f64,
    device: Option<&str>,
    phenomenon_time: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO measurements (type, value, unit, device, phenomenon_time)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(measurement_type)
    .bind(value)
    .bind(unit_for(measurement_type))
    .bind(device)
    .bind(phenomenon_time.timestamp_millis())
    .execute(pool)
    .await
    .unwrap();
}

fn unit_for(measurement_type: &str) -> Option<&'static str> {
    match measurement_type {
        "temperature" => Some("°C"),
        "humidity" => Some("%"),
        "pressure" => Some("hPa"),
        _ => None,
    }
}

/// Two devices with readings on 2023-01-01 and 2023-01-02.
pub async fn seed_two_days(pool: &SqlitePool) {
    insert_device(pool, "dev-1", Some("Main St 1"), Some((13.4, 52.5)), Some(at(2023, 1, 2, 12))).await;
    insert_device(pool, "dev-2", Some("Harbor 7"), Some((9.99, 53.55)), Some(at(2023, 1, 2, 18))).await;

    insert_measurement(pool, "temperature", 10.0, Some("dev-1"), at(2023, 1, 1, 6)).await;
    insert_measurement(pool, "temperature", 20.0, Some("dev-1"), at(2023, 1, 1, 12)).await;
    insert_measurement(pool, "humidity", 40.0, Some("dev-1"), at(2023, 1, 1, 12)).await;
    insert_measurement(pool, "temperature", 30.0, Some("dev-2"), at(2023, 1, 2, 6)).await;
    insert_measurement(pool, "humidity", 60.0, Some("dev-2"), at(2023, 1, 2, 18)).await;
}
