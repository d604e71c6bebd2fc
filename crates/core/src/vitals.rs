//! Vital-sign readings, their thresholds, and the status classifier.
//!
//! The five tracked vitals are fixed for the lifetime of a session. Each
//! [`Reading`] keeps its `value` and `status` private so the only way to
//! change them is [`Reading::record`], which reclassifies in the same step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Classification of a reading against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalStatus::Normal => "normal",
            VitalStatus::Warning => "warning",
            VitalStatus::Critical => "critical",
        }
    }

    pub fn is_normal(self) -> bool {
        self == VitalStatus::Normal
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Thresholds and ranges
// ---------------------------------------------------------------------------

/// Static high-side thresholds for a vital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Thresholds {
    pub const fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }

    /// Classify a value: critical wins over warning, both are inclusive.
    pub fn classify(&self, value: f64) -> VitalStatus {
        if value >= self.critical {
            VitalStatus::Critical
        } else if value >= self.warning {
            VitalStatus::Warning
        } else {
            VitalStatus::Normal
        }
    }
}

/// Physical band a simulated value is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ---------------------------------------------------------------------------
// VitalKind
// ---------------------------------------------------------------------------

/// The five vitals tracked by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    Temperature,
    HeartRate,
    BloodPressure,
    Oxygen,
    Glucose,
}

impl VitalKind {
    /// Every vital, in dashboard order.
    pub const ALL: [VitalKind; 5] = [
        VitalKind::Temperature,
        VitalKind::HeartRate,
        VitalKind::BloodPressure,
        VitalKind::Oxygen,
        VitalKind::Glucose,
    ];

    /// Stable reading id.
    pub fn reading_id(self) -> &'static str {
        match self {
            VitalKind::Temperature => "temp1",
            VitalKind::HeartRate => "hr1",
            VitalKind::BloodPressure => "bp1",
            VitalKind::Oxygen => "ox1",
            VitalKind::Glucose => "glu1",
        }
    }

    /// Human-readable type name shown on sensor cards and in alert text.
    pub fn label(self) -> &'static str {
        match self {
            VitalKind::Temperature => "Temperature",
            VitalKind::HeartRate => "Heart Rate",
            VitalKind::BloodPressure => "Blood Pressure",
            VitalKind::Oxygen => "Oxygen",
            VitalKind::Glucose => "Glucose",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::Temperature => "°F",
            VitalKind::HeartRate => "BPM",
            VitalKind::BloodPressure => "mmHg",
            VitalKind::Oxygen => "%",
            VitalKind::Glucose => "mg/dL",
        }
    }

    pub fn initial_value(self) -> f64 {
        match self {
            VitalKind::Temperature => 98.6,
            VitalKind::HeartRate => 72.0,
            VitalKind::BloodPressure => 120.0,
            VitalKind::Oxygen => 98.0,
            VitalKind::Glucose => 105.0,
        }
    }

    pub fn thresholds(self) -> Thresholds {
        match self {
            VitalKind::Temperature => Thresholds::new(99.5, 101.0),
            VitalKind::HeartRate => Thresholds::new(100.0, 120.0),
            VitalKind::BloodPressure => Thresholds::new(140.0, 160.0),
            // High-only comparison, so these are inverted relative to a
            // low-oxygen alarm. Kept as configured.
            VitalKind::Oxygen => Thresholds::new(92.0, 88.0),
            VitalKind::Glucose => Thresholds::new(140.0, 180.0),
        }
    }

    pub fn range(self) -> SensorRange {
        match self {
            VitalKind::Temperature => SensorRange::new(95.0, 103.0),
            VitalKind::HeartRate => SensorRange::new(50.0, 150.0),
            VitalKind::BloodPressure => SensorRange::new(90.0, 180.0),
            VitalKind::Oxygen => SensorRange::new(85.0, 100.0),
            VitalKind::Glucose => SensorRange::new(70.0, 200.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Outcome of recording a new value on a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub previous: VitalStatus,
    pub current: VitalStatus,
}

impl StatusChange {
    /// True when the reading moved into a non-normal status it was not
    /// already in. Moves to normal never count.
    pub fn entered_alert_state(&self) -> bool {
        !self.current.is_normal() && self.current != self.previous
    }
}

/// A single simulated vital sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub id: String,
    pub kind: VitalKind,
    #[serde(rename = "type")]
    pub sensor_type: String,
    value: f64,
    pub unit: String,
    status: VitalStatus,
    pub timestamp: Timestamp,
    pub thresholds: Thresholds,
}

impl Reading {
    /// Build a reading with its catalog defaults. The initial status is
    /// classified from the initial value, not assumed normal.
    pub fn new(kind: VitalKind, now: Timestamp) -> Self {
        let thresholds = kind.thresholds();
        let value = kind.initial_value();
        Self {
            id: kind.reading_id().to_string(),
            kind,
            sensor_type: kind.label().to_string(),
            value,
            unit: kind.unit().to_string(),
            status: thresholds.classify(value),
            timestamp: now,
            thresholds,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn status(&self) -> VitalStatus {
        self.status
    }

    pub fn range(&self) -> SensorRange {
        self.kind.range()
    }

    /// Store a new value, reclassify it, and stamp the update time.
    pub fn record(&mut self, value: f64, now: Timestamp) -> StatusChange {
        let previous = self.status;
        self.value = value;
        self.status = self.thresholds.classify(value);
        self.timestamp = now;
        StatusChange {
            previous,
            current: self.status,
        }
    }
}

/// The fixed set of five readings a session starts with.
pub fn default_readings(now: Timestamp) -> Vec<Reading> {
    VitalKind::ALL
        .iter()
        .map(|kind| Reading::new(*kind, now))
        .collect()
}

/// Count of readings per status, as shown on the dashboard summary card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StatusSummary {
    pub fn from_readings(readings: &[Reading]) -> Self {
        readings
            .iter()
            .fold(Self::default(), |mut acc, r| {
                match r.status() {
                    VitalStatus::Normal => acc.normal += 1,
                    VitalStatus::Warning => acc.warning += 1,
                    VitalStatus::Critical => acc.critical += 1,
                }
                acc
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn classify_is_inclusive_at_both_thresholds() {
        let t = Thresholds::new(100.0, 120.0);
        assert_eq!(t.classify(99.9), VitalStatus::Normal);
        assert_eq!(t.classify(100.0), VitalStatus::Warning);
        assert_eq!(t.classify(119.9), VitalStatus::Warning);
        assert_eq!(t.classify(120.0), VitalStatus::Critical);
    }

    #[test]
    fn inverted_thresholds_classify_critical_first() {
        let t = VitalKind::Oxygen.thresholds();
        assert_eq!(t.classify(98.0), VitalStatus::Critical);
        assert_eq!(t.classify(87.0), VitalStatus::Normal);
    }

    #[test]
    fn default_readings_match_catalog() {
        let readings = default_readings(Utc::now());
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["temp1", "hr1", "bp1", "ox1", "glu1"]);

        let hr = &readings[1];
        assert_eq!(hr.sensor_type, "Heart Rate");
        assert_eq!(hr.unit, "BPM");
        assert_eq!(hr.value(), 72.0);
    }

    #[test]
    fn initial_status_is_classified_from_initial_value() {
        for reading in default_readings(Utc::now()) {
            assert_eq!(reading.status(), reading.thresholds.classify(reading.value()));
        }
    }

    #[test]
    fn record_reclassifies_and_reports_change() {
        let mut reading = Reading::new(VitalKind::HeartRate, Utc::now());
        let change = reading.record(105.0, Utc::now());
        assert_eq!(change.previous, VitalStatus::Normal);
        assert_eq!(change.current, VitalStatus::Warning);
        assert!(change.entered_alert_state());
        assert_eq!(reading.status(), VitalStatus::Warning);
        assert_eq!(reading.value(), 105.0);
    }

    #[test]
    fn staying_in_same_state_is_not_an_entry() {
        let change = StatusChange {
            previous: VitalStatus::Critical,
            current: VitalStatus::Critical,
        };
        assert!(!change.entered_alert_state());
    }

    #[test]
    fn returning_to_normal_is_not_an_entry() {
        let change = StatusChange {
            previous: VitalStatus::Warning,
            current: VitalStatus::Normal,
        };
        assert!(!change.entered_alert_state());
    }

    #[test]
    fn summary_counts_each_status() {
        let now = Utc::now();
        let mut readings = default_readings(now);
        readings[0].record(102.0, now); // temperature critical
        readings[1].record(105.0, now); // heart rate warning

        let summary = StatusSummary::from_readings(&readings);
        // Oxygen starts critical under its configured thresholds.
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.normal, 2);
    }

    #[test]
    fn range_clamps_both_ends() {
        let range = VitalKind::Glucose.range();
        assert_eq!(range.clamp(10.0), 70.0);
        assert_eq!(range.clamp(500.0), 200.0);
        assert_eq!(range.clamp(120.0), 120.0);
    }

    #[test]
    fn reading_serializes_type_field() {
        let reading = Reading::new(VitalKind::Glucose, Utc::now());
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["type"], "Glucose");
        assert_eq!(json["kind"], "glucose");
        assert_eq!(json["status"], "normal");
        assert_eq!(json["value"], 105.0);
    }
}
