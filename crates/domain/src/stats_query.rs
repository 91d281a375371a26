use serde::{Deserialize, Serialize};

/// Raw parameters of a stats query, exactly as the caller sent them.
///
/// Parsing into a `TimePeriod` and `DeviceSelector` happens in the stats use
/// case so that every rejection is reported through `DomainError`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQueryParams {
    #[serde(rename = "type")]
    pub measurement_type: Option<String>,
    pub device: Option<String>,
    pub address: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub last_time_period: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl StatsQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, measurement_type: &str) -> Self {
        self.measurement_type = Some(measurement_type.to_string());
        self
    }

    pub fn with_device(mut self, device: &str) -> Self {
        self.device = Some(device.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn with_coordinates(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = Some(longitude);
        self.latitude = Some(latitude);
        self
    }

    pub fn with_last(mut self, period: &str) -> Self {
        self.last_time_period = Some(period.to_string());
        self
    }

    pub fn with_dates(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start_date = start.map(str::to_string);
        self.end_date = end.map(str::to_string);
        self
    }
}
