//! Alert records raised by threshold crossings and the SOS button.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{generate_id, Timestamp};
use crate::vitals::{Reading, VitalStatus};

/// Reading id used for alerts raised by the SOS button.
pub const SOS_SENSOR_ID: &str = "sos1";

/// Sensor type label used for alerts raised by the SOS button.
pub const SOS_SENSOR_TYPE: &str = "SOS Button";

/// Fixed message of every SOS alert.
pub const SOS_ALERT_MESSAGE: &str = "SOS Emergency Button Activated!";

/// How many alerts the dashboard's "Recent Alerts" card shows.
pub const RECENT_ALERTS_LIMIT: usize = 3;

/// Severity of an alert, also used as the contact subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
    Sos,
}

impl AlertSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
            AlertSeverity::Sos => "sos",
        }
    }

    /// Severity for a vital status; normal readings never alert.
    pub fn from_status(status: VitalStatus) -> Option<Self> {
        match status {
            VitalStatus::Normal => None,
            VitalStatus::Warning => Some(AlertSeverity::Warning),
            VitalStatus::Critical => Some(AlertSeverity::Critical),
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable alert record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: String,
    pub sensor_id: String,
    pub sensor_type: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: Timestamp,
    /// Never flipped; kept for the unread badge.
    pub acknowledged: bool,
}

impl Alert {
    /// Alert for a reading that just entered `severity`. Uses the reading's
    /// current value and unit in the message.
    pub fn for_reading(reading: &Reading, severity: AlertSeverity, now: Timestamp) -> Self {
        Self {
            id: generate_id("alert"),
            sensor_id: reading.id.clone(),
            sensor_type: reading.sensor_type.clone(),
            severity,
            message: format!(
                "{} is {}! Value: {:.1} {}",
                reading.sensor_type,
                severity,
                reading.value(),
                reading.unit
            ),
            timestamp: now,
            acknowledged: false,
        }
    }

    /// Alert appended when the SOS button is confirmed.
    pub fn sos(now: Timestamp) -> Self {
        Self {
            id: generate_id("sos"),
            sensor_id: SOS_SENSOR_ID.to_string(),
            sensor_type: SOS_SENSOR_TYPE.to_string(),
            severity: AlertSeverity::Sos,
            message: SOS_ALERT_MESSAGE.to_string(),
            timestamp: now,
            acknowledged: false,
        }
    }
}

/// Clone the alerts sorted by timestamp, newest first.
///
/// Alerts sharing a timestamp come out last-inserted first.
pub fn newest_first(alerts: &[Alert]) -> Vec<Alert> {
    let mut sorted: Vec<Alert> = alerts.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// The `limit` most recent alerts, newest first.
pub fn recent(alerts: &[Alert], limit: usize) -> Vec<Alert> {
    let mut sorted = newest_first(alerts);
    sorted.truncate(limit);
    sorted
}

pub fn unacknowledged_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| !a.acknowledged).count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
