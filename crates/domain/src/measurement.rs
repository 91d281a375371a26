use crate::device::DeviceIdentity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub measurement_type: String,
    pub value: f64,
    pub unit: Option<String>,
    pub device: Option<DeviceIdentity>,
    pub phenomenon_time: DateTime<Utc>,
}

/// Aggregate statistics of one measurement type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStats {
    #[serde(rename = "type")]
    pub measurement_type: String,
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Result of a stats query: one row per measurement type, sorted by type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsPayload {
    pub stats: Vec<TypeStats>,
}

impl StatsPayload {
    pub fn new(mut stats: Vec<TypeStats>) -> Self {
        stats.sort_by(|a, b| a.measurement_type.cmp(&b.measurement_type));
        Self { stats }
    }

    pub fn for_type(&self, measurement_type: &str) -> Option<&TypeStats> {
        self.stats
            .iter()
            .find(|s| s.measurement_type == measurement_type)
    }

    pub fn total_count(&self) -> u64 {
        self.stats.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
