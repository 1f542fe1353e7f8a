//! Core data types for realm-config.
//!
//! One `Configuration` is decoded per invocation and dropped after it has
//! been encoded to its destination.

use serde::{Deserialize, Deserializer, Serialize};

/// Root aggregate of a combined `realm.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Logging section.
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: LogSettings,

    /// Endpoints in listening precedence order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoints: Vec<EndpointSettings>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Logging section. Absent fields stay absent in both formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Log level (e.g., "info").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl LogSettings {
    /// Whether neither field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.output.is_none()
    }
}

/// A single relay endpoint. Only its position identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Local address in `host:port` form.
    pub listen: String,

    /// Upstream address in `host:port` form.
    pub remote: String,
}

impl EndpointSettings {
    pub fn new(listen: impl Into<String>, remote: impl Into<String>) -> Self {
        Self {
            listen: listen.into(),
            remote: remote.into(),
        }
    }
}
