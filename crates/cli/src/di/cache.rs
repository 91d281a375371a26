use sensor_stats_application::ports::StatsCachePort;
use sensor_stats_domain::config::CacheConfig;
use sensor_stats_infrastructure::cache::{DisabledStatsCache, InMemoryStatsCache, StatsCacheConfig};
use std::sync::Arc;
use tracing::info;

pub fn build_stats_cache(cfg: &CacheConfig) -> Arc<dyn StatsCachePort> {
    if !cfg.enabled {
        info!("Stats cache disabled");
        return Arc::new(DisabledStatsCache::new());
    }
    Arc::new(InMemoryStatsCache::new(StatsCacheConfig::from(cfg)))
}
