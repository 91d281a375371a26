use chrono::{DateTime, Utc};
use sensor_stats_domain::{DeviceIdentity, Measurement, TypeStats};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

pub fn to_epoch_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

pub fn row_to_type_stats(row: &SqliteRow) -> Result<TypeStats, sqlx::Error> {
    Ok(TypeStats {
        measurement_type: row.try_get("type")?,
        count: row.try_get::<i64, _>("count")? as u64,
        min: row.try_get("min_value")?,
        max: row.try_get("max_value")?,
        avg: row.try_get("avg_value")?,
    })
}

pub fn row_to_measurement(row: &SqliteRow) -> Result<Measurement, sqlx::Error> {
    let millis: i64 = row.try_get("phenomenon_time")?;
    let phenomenon_time = from_epoch_millis(millis).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "phenomenon_time".to_string(),
        source: format!("timestamp {} out of range", millis).into(),
    })?;

    Ok(Measurement {
        id: row.try_get("id")?,
        measurement_type: row.try_get("type")?,
        value: row.try_get("value")?,
        unit: row.try_get("unit")?,
        device: row
            .try_get::<Option<String>, _>("device")?
            .map(|d| DeviceIdentity::new(&d)),
        phenomenon_time,
    })
}
