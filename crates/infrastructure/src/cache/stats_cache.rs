use super::StatsCacheMetrics;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use sensor_stats_application::ports::{StatsCacheMetricsSnapshot, StatsCachePort};
use sensor_stats_domain::config::CacheConfig;
use sensor_stats_domain::{CacheEntry, CacheKey, StatsPayload};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct StatsCacheConfig {
    pub max_entries: usize,
    /// `None` keeps entries until they are evicted for capacity.
    pub ttl: Option<Duration>,
    pub batch_eviction_percentage: f64,
}

impl From<&CacheConfig> for StatsCacheConfig {
    fn from(cfg: &CacheConfig) -> Self {
        Self {
            max_entries: cfg.max_entries,
            ttl: (cfg.ttl_secs > 0).then(|| Duration::from_secs(cfg.ttl_secs)),
            batch_eviction_percentage: cfg.batch_eviction_percentage,
        }
    }
}

struct StoredStats {
    payload: Arc<StatsPayload>,
    inserted_at: Instant,
    sequence: u64,
}

/// In-process stats store backed by a sharded concurrent map.
///
/// Readers and writers on different keys never contend beyond their shard.
/// When full, the oldest inserted entries are dropped in batches; the store
/// is never invalidated by new measurements.
pub struct InMemoryStatsCache {
    entries: DashMap<CacheKey, StoredStats, FxBuildHasher>,
    max_entries: usize,
    ttl: Option<Duration>,
    batch_eviction_percentage: f64,
    sequence: AtomicU64,
    metrics: StatsCacheMetrics,
}

impl InMemoryStatsCache {
    pub fn new(config: StatsCacheConfig) -> Self {
        info!(
            max_entries = config.max_entries,
            ttl_secs = config.ttl.map(|t| t.as_secs()),
            batch_eviction_percentage = config.batch_eviction_percentage,
            "Initializing stats cache"
        );

        Self {
            entries: DashMap::with_capacity_and_hasher(config.max_entries.min(1024), FxBuildHasher),
            max_entries: config.max_entries.max(1),
            ttl: config.ttl,
            batch_eviction_percentage: config.batch_eviction_percentage,
            sequence: AtomicU64::new(0),
            metrics: StatsCacheMetrics::default(),
        }
    }

    fn is_expired(&self, stored: &StoredStats) -> bool {
        self.ttl
            .is_some_and(|ttl| stored.inserted_at.elapsed() >= ttl)
    }

    fn store(&self, payload: Arc<StatsPayload>) -> StoredStats {
        StoredStats {
            payload,
            inserted_at: Instant::now(),
            sequence: self.sequence.fetch_add(1, AtomicOrdering::Relaxed),
        }
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let before = self.entries.len();
        self.entries.retain(|_, stored| !self.is_expired(stored));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(removed, "Expired stats entries purged");
        }
        removed
    }

    fn evict_batch(&self) {
        let batch = ((self.max_entries as f64 * self.batch_eviction_percentage).ceil() as usize)
            .max(1);

        let mut candidates: Vec<(CacheKey, u64)> = self
            .entries
            .iter()
            .map(|e| (e.key().clone(), e.value().sequence))
            .collect();
        candidates.sort_unstable_by_key(|(_, sequence)| *sequence);

        let evicted = candidates
            .into_iter()
            .take(batch)
            .filter(|(key, _)| self.entries.remove(key).is_some())
            .count();

        self.metrics
            .evictions
            .fetch_add(evicted as u64, AtomicOrdering::Relaxed);
        self.metrics
            .batch_evictions
            .fetch_add(1, AtomicOrdering::Relaxed);
        debug!(evicted, remaining = self.entries.len(), "Stats cache batch eviction");
    }

    fn make_room(&self, key: &CacheKey) {
        if self.entries.len() < self.max_entries || self.entries.contains_key(key) {
            return;
        }
        self.purge_expired();
        if self.entries.len() >= self.max_entries {
            self.evict_batch();
        }
    }
}

impl StatsCachePort for InMemoryStatsCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        let expired = match self.entries.get(key) {
            Some(stored) if !self.is_expired(&stored) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(CacheEntry::new(key.clone(), Arc::clone(&stored.payload)));
            }
            Some(_) => true,
            None => false,
        };

        if expired
            && self
                .entries
                .remove_if(key, |_, stored| self.is_expired(stored))
                .is_some()
        {
            self.metrics
                .expirations
                .fetch_add(1, AtomicOrdering::Relaxed);
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    fn set(&self, key: CacheKey, payload: Arc<StatsPayload>) {
        self.make_room(&key);

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if self.is_expired(occupied.get()) {
                    occupied.insert(self.store(payload));
                    self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
                    return;
                }

                let existing = &occupied.get().payload;
                if !Arc::ptr_eq(existing, &payload) && **existing != *payload {
                    self.metrics
                        .conflicting_writes
                        .fetch_add(1, AtomicOrdering::Relaxed);
                    warn!(
                        key = %occupied.key(),
                        "Different stats written for a closed window, keeping cached entry"
                    );
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(self.store(payload));
                self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn metrics_snapshot(&self) -> StatsCacheMetricsSnapshot {
        StatsCacheMetricsSnapshot {
            total_entries: self.entries.len(),
            hits: self.metrics.hits.load(AtomicOrdering::Relaxed),
            misses: self.metrics.misses.load(AtomicOrdering::Relaxed),
            insertions: self.metrics.insertions.load(AtomicOrdering::Relaxed),
            evictions: self.metrics.evictions.load(AtomicOrdering::Relaxed),
            batch_evictions: self.metrics.batch_evictions.load(AtomicOrdering::Relaxed),
            expirations: self.metrics.expirations.load(AtomicOrdering::Relaxed),
            conflicting_writes: self.metrics.conflicting_writes.load(AtomicOrdering::Relaxed),
            hit_rate: self.metrics.hit_rate(),
        }
    }
}
