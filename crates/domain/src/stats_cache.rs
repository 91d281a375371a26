use crate::device::DeviceIdentity;
use crate::measurement::StatsPayload;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use std::fmt;
use std::sync::Arc;

const WILDCARD: &str = "*";

/// Identity of a cached stats result.
///
/// Bounds are kept at whole-second precision so that requests which only
/// differ in how their dates were spelled land on the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    measurement_type: Option<CompactString>,
    device: Option<DeviceIdentity>,
    start_secs: i64,
    end_secs: i64,
}

impl CacheKey {
    pub fn new(
        measurement_type: Option<&str>,
        device: Option<&DeviceIdentity>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            measurement_type: measurement_type.map(CompactString::from),
            device: device.cloned(),
            start_secs: start.timestamp(),
            end_secs: end.timestamp(),
        }
    }

    pub fn measurement_type(&self) -> Option<&str> {
        self.measurement_type.as_deref()
    }

    pub fn device(&self) -> Option<&DeviceIdentity> {
        self.device.as_ref()
    }

    pub fn start_secs(&self) -> i64 {
        self.start_secs
    }

    pub fn end_secs(&self) -> i64 {
        self.end_secs
    }
}

/// Canonical string form, usable as the key of an external store.
///
/// Real values carry a prefix, so no type or device name can collide with
/// the wildcard.
impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measurement_type {
            Some(t) => write!(f, "stats|t:{}", escape(t))?,
            None => write!(f, "stats|{}", WILDCARD)?,
        }
        match &self.device {
            Some(d) => write!(f, "|d:{}", escape(d.as_str()))?,
            None => write!(f, "|{}", WILDCARD)?,
        }
        write!(f, "|{}|{}", self.start_secs, self.end_secs)
    }
}

fn escape(component: &str) -> String {
    component.replace('\\', "\\\\").replace('|', "\\|")
}

/// Stats stored under a key. Never mutated once written.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub payload: Arc<StatsPayload>,
}

impl CacheEntry {
    pub fn new(key: CacheKey, payload: Arc<StatsPayload>) -> Self {
        Self { key, payload }
    }
}
