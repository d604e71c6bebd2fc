//! Edge-triggered threshold evaluation for vital readings.
//!
//! Pure logic, no I/O. The caller records a new value on a [`Reading`] and
//! gets back the alert and toast to emit, if any. Only a move into a
//! non-normal status that differs from the previous one emits; staying in
//! a status or dropping back to normal is silent.

use crate::alert::{Alert, AlertSeverity};
use crate::notification::Toast;
use crate::types::Timestamp;
use crate::vitals::Reading;

/// Alert plus the toast that announces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub alert: Alert,
    pub toast: Toast,
}

/// Record `value` on `reading` and evaluate the resulting transition.
///
/// Value, status and timestamp change together, so the reading's status
/// always matches its thresholds afterwards.
pub fn evaluate(reading: &mut Reading, value: f64, now: Timestamp) -> Option<Evaluation> {
    let change = reading.record(value, now);
    if !change.entered_alert_state() {
        return None;
    }

    let severity = AlertSeverity::from_status(change.current)?;
    let alert = Alert::for_reading(reading, severity, now);
    let toast = Toast::for_reading_alert(reading, &alert);
    Some(Evaluation { alert, toast })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
