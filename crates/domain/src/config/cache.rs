use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Seconds an entry stays readable. 0 keeps entries until evicted for
    /// capacity; closed windows never change, so expiry is only a memory knob.
    #[serde(default)]
    pub ttl_secs: u64,

    /// Fraction of `max_entries` dropped at once when the store is full.
    #[serde(default = "default_batch_eviction_percentage")]
    pub batch_eviction_percentage: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
            ttl_secs: 0,
            batch_eviction_percentage: default_batch_eviction_percentage(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    10_000
}

fn default_batch_eviction_percentage() -> f64 {
    0.1
}
