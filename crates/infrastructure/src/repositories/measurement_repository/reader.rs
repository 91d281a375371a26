use super::helpers::{row_to_measurement, row_to_type_stats, to_epoch_millis};
use chrono::{DateTime, Utc};
use sensor_stats_domain::{DeviceIdentity, DomainError, Measurement, StatsPayload, TypeStats};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, error, instrument};

#[instrument(skip(pool))]
pub(super) async fn compute_stats(
    pool: &SqlitePool,
    measurement_type: Option<&str>,
    device: Option<&DeviceIdentity>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<StatsPayload, sqlx::Error> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT type, COUNT(*) AS count, MIN(value) AS min_value, \
         MAX(value) AS max_value, AVG(value) AS avg_value \
         FROM measurements WHERE 1 = 1",
    );

    if let Some(t) = measurement_type {
        query.push(" AND type = ").push_bind(t.to_string());
    }
    if let Some(d) = device {
        query.push(" AND device = ").push_bind(d.as_str().to_string());
    }
    if let Some(s) = start {
        query.push(" AND phenomenon_time >= ").push_bind(to_epoch_millis(s));
    }
    if let Some(e) = end {
        query.push(" AND phenomenon_time <= ").push_bind(to_epoch_millis(e));
    }
    query.push(" GROUP BY type ORDER BY type");

    let rows = query.build().fetch_all(pool).await?;
    let stats = rows
        .iter()
        .map(row_to_type_stats)
        .collect::<Result<Vec<TypeStats>, _>>()?;

    debug!(types = stats.len(), "Stats aggregated");
    Ok(StatsPayload::new(stats))
}

#[instrument(skip(pool))]
pub(super) async fn get_types(pool: &SqlitePool) -> Result<Vec<String>, DomainError> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT type FROM measurements ORDER BY type")
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch measurement types");
            DomainError::DatabaseError(e.to_string())
        })
}

#[instrument(skip(pool))]
pub(super) async fn get_last(
    pool: &SqlitePool,
    measurement_type: Option<&str>,
) -> Result<Option<Measurement>, DomainError> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT id, type, value, unit, device, phenomenon_time FROM measurements",
    );
    if let Some(t) = measurement_type {
        query.push(" WHERE type = ").push_bind(t.to_string());
    }
    query.push(" ORDER BY phenomenon_time DESC, id DESC LIMIT 1");

    let map_err = |e: sqlx::Error| {
        error!(error = %e, "Failed to fetch last measurement");
        DomainError::DatabaseError(e.to_string())
    };

    let row = query.build().fetch_optional(pool).await.map_err(map_err)?;
    row.as_ref()
        .map(row_to_measurement)
        .transpose()
        .map_err(map_err)
}
