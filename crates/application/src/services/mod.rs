pub mod cache_key;
pub mod cache_policy;

pub use cache_key::CacheKeyBuilder;
pub use cache_policy::CachePolicy;
