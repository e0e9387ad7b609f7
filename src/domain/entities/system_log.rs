use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Severity of an audit log entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
}

/// Append-only audit record of a state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Short machine-readable event tag, e.g. `GATEWAY_SETTLEMENT_SUCCESS`
    pub event: String,
    pub details: String,
    pub level: LogLevel,
}

impl SystemLogEntry {
    pub fn new(event: impl Into<String>, details: impl Into<String>, level: LogLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event: event.into(),
            details: details.into(),
            level,
        }
    }
}
