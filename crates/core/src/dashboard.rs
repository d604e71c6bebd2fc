//! The dashboard summary card, built from one consistent view of a session.

use serde::Serialize;

use crate::alert::{self, Alert, RECENT_ALERTS_LIMIT};
use crate::sos::{SosMachine, SosStatus};
use crate::vitals::{Reading, StatusSummary};

/// Status counts, the unread alert badge, the SOS flag and the most recent
/// alerts, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub status: StatusSummary,
    pub unacknowledged_alerts: usize,
    pub sos_active: bool,
    pub recent_alerts: Vec<Alert>,
}

impl Dashboard {
    /// Build every field from the same borrowed state. Callers must hold
    /// whatever lock guards these three together for the whole call.
    pub fn build(readings: &[Reading], alerts: &[Alert], sos: &SosMachine) -> Self {
        Self {
            status: StatusSummary::from_readings(readings),
            unacknowledged_alerts: alert::unacknowledged_count(alerts),
            sos_active: sos.is_active(),
            recent_alerts: alert::recent(alerts, RECENT_ALERTS_LIMIT),
        }
    }
}

/// Everything a freshly connected live-feed client needs to render, taken
/// from one view of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub readings: Vec<Reading>,
    pub dashboard: Dashboard,
    pub sos: SosStatus,
}

impl SessionSnapshot {
    pub fn build(readings: &[Reading], alerts: &[Alert], sos: &SosMachine) -> Self {
        Self {
            readings: readings.to_vec(),
            dashboard: Dashboard::build(readings, alerts, sos),
            sos: sos.status(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
