use sensor_stats_domain::{CacheEntry, CacheKey, StatsPayload};
use std::sync::Arc;

/// Snapshot of stats cache metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsCacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
    /// Eviction rounds; each drops up to a batch of entries.
    pub batch_evictions: u64,
    pub expirations: u64,
    pub conflicting_writes: u64,
    pub hit_rate: f64,
}

/// Store for stats of closed, past windows.
///
/// Implementations must be safe for concurrent readers and writers. `set` is
/// idempotent: a key that already holds an entry keeps it.
pub trait StatsCachePort: Send + Sync {
    /// Pure lookup. Never reaches the database.
    fn get(&self, key: &CacheKey) -> Option<CacheEntry>;
    fn set(&self, key: CacheKey, payload: Arc<StatsPayload>);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn metrics_snapshot(&self) -> StatsCacheMetricsSnapshot;
}
