use chrono::{DateTime, Utc};
use sensor_stats_domain::TimePeriod;

/// Decides whether the stats of a period may be stored and reused.
///
/// Only windows that are closed on both sides and whose end is strictly
/// before `now` qualify: no measurement can be added to them anymore. An end
/// equal to `now` still counts as growing.
pub struct CachePolicy;

impl CachePolicy {
    pub fn is_cacheable(period: &TimePeriod, now: DateTime<Utc>) -> bool {
        match period {
            TimePeriod::Unbounded | TimePeriod::Relative(_) => false,
            TimePeriod::Absolute(absolute) => absolute
                .closed_bounds()
                .is_some_and(|(_, end)| end < now),
        }
    }
}
