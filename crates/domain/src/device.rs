use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical reference to a resolved device.
///
/// Opaque to the stats layer: only compared, hashed and printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceIdentity(CompactString);

impl DeviceIdentity {
    pub fn new(id: &str) -> Self {
        Self(CompactString::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the caller identified the device a query is scoped to.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceSelector {
    Name(String),
    Address(String),
    Coordinates { longitude: f64, latitude: f64 },
}

impl DeviceSelector {
    /// Picks the selector from the raw parameters. Name wins over address,
    /// address over coordinates; coordinates count only when both are given.
    pub fn from_query(
        device: Option<&str>,
        address: Option<&str>,
        longitude: Option<f64>,
        latitude: Option<f64>,
    ) -> Option<Self> {
        if let Some(name) = device {
            return Some(DeviceSelector::Name(name.to_string()));
        }
        if let Some(address) = address {
            return Some(DeviceSelector::Address(address.to_string()));
        }
        match (longitude, latitude) {
            (Some(longitude), Some(latitude)) => Some(DeviceSelector::Coordinates {
                longitude,
                latitude,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceSelector::Name(name) => write!(f, "device={}", name),
            DeviceSelector::Address(address) => write!(f, "address={}", address),
            DeviceSelector::Coordinates {
                longitude,
                latitude,
            } => write!(f, "longitude={},latitude={}", longitude, latitude),
        }
    }
}
