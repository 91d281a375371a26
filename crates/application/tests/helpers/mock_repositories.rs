#![allow(dead_code)]

use async_trait::async_trait;
use sensor_stats_application::ports::{
    DeviceResolver, MeasurementRepository, StatsCacheMetricsSnapshot, StatsCachePort,
};
use sensor_stats_domain::{
    CacheEntry, CacheKey, DeviceIdentity, DeviceSelector, DomainError, Measurement,
    StatsPayload, TimePeriod, TypeStats,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

pub fn temperature_payload() -> StatsPayload {
    StatsPayload::new(vec![TypeStats {
        measurement_type: "temperature".to_string(),
        count: 3,
        min: 18.5,
        max: 24.0,
        avg: 21.0,
    }])
}

#[derive(Default)]
pub struct MockDeviceResolver {
    devices: RwLock<Vec<(DeviceSelector, DeviceIdentity)>>,
    calls: AtomicUsize,
}

impl MockDeviceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(self, selector: DeviceSelector, identity: &str) -> Self {
        self.devices
            .write()
            .unwrap()
            .push((selector, DeviceIdentity::new(identity)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceResolver for MockDeviceResolver {
    async fn resolve(
        &self,
        selector: &DeviceSelector,
    ) -> Result<Option<DeviceIdentity>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .devices
            .read()
            .unwrap()
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, id)| id.clone()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsCall {
    pub measurement_type: Option<String>,
    pub device: Option<DeviceIdentity>,
    pub period: TimePeriod,
}

pub struct MockMeasurementRepository {
    payload: RwLock<StatsPayload>,
    failure: RwLock<Option<DomainError>>,
    delay: RwLock<Option<Duration>>,
    stats_calls: RwLock<Vec<StatsCall>>,
    types: Vec<String>,
    measurements: Vec<Measurement>,
}

impl MockMeasurementRepository {
    pub fn new() -> Self {
        Self {
            payload: RwLock::new(temperature_payload()),
            failure: RwLock::new(None),
            delay: RwLock::new(None),
            stats_calls: RwLock::new(Vec::new()),
            types: Vec::new(),
            measurements: Vec::new(),
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_measurements(mut self, measurements: Vec<Measurement>) -> Self {
        self.measurements = measurements;
        self
    }

    pub fn set_payload(&self, payload: StatsPayload) {
        *self.payload.write().unwrap() = payload;
    }

    pub fn set_failure(&self, failure: Option<DomainError>) {
        *self.failure.write().unwrap() = failure;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn stats_calls(&self) -> Vec<StatsCall> {
        self.stats_calls.read().unwrap().clone()
    }

    pub fn stats_call_count(&self) -> usize {
        self.stats_calls.read().unwrap().len()
    }
}

impl Default for MockMeasurementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MeasurementRepository for MockMeasurementRepository {
    async fn compute_stats(
        &self,
        measurement_type: Option<&str>,
        device: Option<&DeviceIdentity>,
        period: &TimePeriod,
    ) -> Result<StatsPayload, DomainError> {
        self.stats_calls.write().unwrap().push(StatsCall {
            measurement_type: measurement_type.map(str::to_string),
            device: device.cloned(),
            period: *period,
        });

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.failure.read().unwrap().clone() {
            return Err(err);
        }

        Ok(self.payload.read().unwrap().clone())
    }

    async fn get_types(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.types.clone())
    }

    async fn get_last(
        &self,
        measurement_type: Option<&str>,
    ) -> Result<Option<Measurement>, DomainError> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| measurement_type.map_or(true, |t| m.measurement_type == t))
            .max_by_key(|m| m.phenomenon_time)
            .cloned())
    }
}

#[derive(Default)]
pub struct MockStatsCache {
    entries: RwLock<HashMap<CacheKey, Arc<StatsPayload>>>,
    gets: AtomicUsize,
    sets: AtomicUsize,
}

impl MockStatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.read().unwrap().keys().cloned().collect()
    }
}

impl StatsCachePort for MockStatsCache {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .read()
            .unwrap()
            .get(key)
            .map(|payload| CacheEntry::new(key.clone(), Arc::clone(payload)))
    }

    fn set(&self, key: CacheKey, payload: Arc<StatsPayload>) {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.entries.write().unwrap().entry(key).or_insert(payload);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn metrics_snapshot(&self) -> StatsCacheMetricsSnapshot {
        StatsCacheMetricsSnapshot {
            total_entries: self.len(),
            ..Default::default()
        }
    }
}
