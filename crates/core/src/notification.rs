//! Transient user-facing notifications ("toasts").
//!
//! A [`Toast`] is fire-and-forget: it is shown once and never stored. The
//! delivery side lives in `beacon-events`.

use serde::{Deserialize, Serialize};

use crate::alert::{AlertSeverity, Alert};
use crate::vitals::Reading;

/// Display duration override for the SOS activation toast.
pub const SOS_TOAST_DURATION_MS: u64 = 10_000;

/// Visual level of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
    /// `None` means the presentation layer's default duration.
    pub duration_ms: Option<u64>,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
            duration_ms: None,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title, description)
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Toast for a reading that entered a non-normal status. Critical
    /// alerts are errors, everything else is a warning.
    pub fn for_reading_alert(reading: &Reading, alert: &Alert) -> Self {
        let level = match alert.severity {
            AlertSeverity::Critical | AlertSeverity::Sos => ToastLevel::Error,
            AlertSeverity::Warning => ToastLevel::Warning,
        };
        Self::new(
            level,
            format!("{} Alert", reading.sensor_type),
            format!(
                "{} reading is {}. Value: {:.1} {}",
                reading.sensor_type,
                alert.severity,
                reading.value(),
                reading.unit
            ),
        )
    }

    pub fn sos_activated() -> Self {
        Self::new(
            ToastLevel::Error,
            "SOS ACTIVATED",
            "Emergency contacts are being notified.",
        )
        .with_duration_ms(SOS_TOAST_DURATION_MS)
    }

    pub fn sos_cancelled() -> Self {
        Self::success("SOS Cancelled", "Emergency notification has been cancelled.")
    }

    pub fn contact_added(name: &str) -> Self {
        Self::success("Contact Added", format!("{name} added to emergency contacts."))
    }

    pub fn contact_removed() -> Self {
        Self::success("Contact Removed", "Emergency contact has been removed.")
    }

    pub fn profile_updated() -> Self {
        Self::success("Profile Updated", "Your profile has been updated successfully.")
    }
}
