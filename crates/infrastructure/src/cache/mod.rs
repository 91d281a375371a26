mod disabled;
mod metrics;
mod stats_cache;

pub use disabled::DisabledStatsCache;
pub use metrics::StatsCacheMetrics;
pub use stats_cache::{InMemoryStatsCache, StatsCacheConfig};
