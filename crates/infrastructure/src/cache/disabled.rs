use super::StatsCacheMetrics;
use sensor_stats_application::ports::{StatsCacheMetricsSnapshot, StatsCachePort};
use sensor_stats_domain::{CacheEntry, CacheKey, StatsPayload};
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;

/// Store used when caching is switched off: every lookup misses and every
/// write is dropped.
#[derive(Default)]
pub struct DisabledStatsCache {
    metrics: StatsCacheMetrics,
}

impl DisabledStatsCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsCachePort for DisabledStatsCache {
    fn get(&self, _key: &CacheKey) -> Option<CacheEntry> {
        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    fn set(&self, _key: CacheKey, _payload: Arc<StatsPayload>) {}

    fn len(&self) -> usize {
        0
    }

    fn metrics_snapshot(&self) -> StatsCacheMetricsSnapshot {
        StatsCacheMetricsSnapshot {
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            ..Default::default()
        }
    }
}
