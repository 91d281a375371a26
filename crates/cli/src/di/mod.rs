mod cache;
mod repositories;
mod use_cases;

pub use cache::build_stats_cache;
pub use repositories::Repositories;
pub use use_cases::UseCases;
