//! Synchronous session state.
//!
//! [`MonitorState`] owns every mutable record of a session: readings, the
//! alert log, the SOS machine and the profile (which embeds the contact
//! book). It knows nothing about locks, timers or notifications; the
//! [`SensorStore`](crate::SensorStore) wraps it and turns the returned
//! outcomes into toasts and bus events.

use std::collections::HashMap;

use rand::Rng;

use beacon_core::alert::{self, Alert};
use beacon_core::contacts::{ContactBook, EmergencyContact, NewContact};
use beacon_core::dashboard::{Dashboard, SessionSnapshot};
use beacon_core::error::CoreError;
use beacon_core::evaluator::{evaluate, Evaluation};
use beacon_core::history::{HistoryPoint, ReadingHistory, DEFAULT_HISTORY_CAPACITY};
use beacon_core::profile::{ProfileList, ProfilePatch, UserProfile};
use beacon_core::simulator::{next_value, round_tenth, NoiseModel};
use beacon_core::sos::{SosAction, SosMachine, SosOutcome};
use beacon_core::types::Timestamp;
use beacon_core::vitals::{default_readings, Reading};

#[derive(Debug, Clone)]
pub struct MonitorState {
    readings: Vec<Reading>,
    alerts: Vec<Alert>,
    sos: SosMachine,
    profile: UserProfile,
    history: HashMap<String, ReadingHistory>,
    ticks: u64,
}

impl MonitorState {
    /// Fresh session: catalog readings, empty alert log, SOS inactive,
    /// default profile with its seeded contact.
    pub fn new(now: Timestamp) -> Self {
        Self::with_history_capacity(now, DEFAULT_HISTORY_CAPACITY)
    }

    /// Fresh session keeping up to `capacity` history samples per reading.
    /// Each history starts with the initial value.
    pub fn with_history_capacity(now: Timestamp, capacity: usize) -> Self {
        let readings = default_readings(now);
        let history = readings
            .iter()
            .map(|r| {
                let mut ring = ReadingHistory::with_capacity(capacity);
                ring.push(HistoryPoint::of(r));
                (r.id.clone(), ring)
            })
            .collect();
        Self {
            readings,
            alerts: Vec::new(),
            sos: SosMachine::new(),
            profile: UserProfile::default(),
            history,
            ticks: 0,
        }
    }

    // ---- Reads ----

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn reading(&self, id: &str) -> Option<&Reading> {
        self.readings.iter().find(|r| r.id == id)
    }

    /// Summary card built from this one state, so counts, badge, SOS flag
    /// and recent alerts all describe the same moment.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.readings, &self.alerts, &self.sos)
    }

    /// Alerts in the order they were raised.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn sos(&self) -> &SosMachine {
        &self.sos
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.profile.emergency_contacts
    }

    /// Readings, dashboard and SOS dialog from this one state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::build(&self.readings, &self.alerts, &self.sos)
    }

    /// Recent samples of one reading, oldest first. `None` for an unknown id.
    pub fn history(&self, reading_id: &str, limit: Option<usize>) -> Option<Vec<HistoryPoint>> {
        self.history.get(reading_id).map(|h| h.latest(limit))
    }

    /// Number of simulator ticks applied so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    // ---- Simulation ----

    /// Advance every reading by one simulator step and append the alerts
    /// it produced. Returned evaluations are in reading order.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        noise: &NoiseModel,
        now: Timestamp,
    ) -> Vec<Evaluation> {
        let mut raised = Vec::new();
        for reading in &mut self.readings {
            let value = next_value(rng, reading.value(), reading.range(), noise);
            if let Some(eval) = evaluate(reading, value, now) {
                raised.push(eval);
            }
            if let Some(ring) = self.history.get_mut(&reading.id) {
                ring.push(HistoryPoint::of(reading));
            }
        }
        self.alerts.extend(raised.iter().map(|e| e.alert.clone()));
        self.ticks += 1;
        raised
    }

    /// Record a specific value on one reading, bypassing the random walk.
    ///
    /// The value is clamped into the reading's band and rounded like a
    /// simulated one, then evaluated the same way.
    pub fn record_value(
        &mut self,
        reading_id: &str,
        value: f64,
        now: Timestamp,
    ) -> Result<Option<Evaluation>, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!(
                "reading value must be finite, got {value}"
            )));
        }
        let reading = self
            .readings
            .iter_mut()
            .find(|r| r.id == reading_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "reading",
                id: reading_id.to_string(),
            })?;

        let value = round_tenth(reading.range().clamp(value));
        let evaluation = evaluate(reading, value, now);
        if let Some(ring) = self.history.get_mut(reading_id) {
            ring.push(HistoryPoint::of(reading));
        }
        if let Some(eval) = &evaluation {
            self.alerts.push(eval.alert.clone());
        }
        Ok(evaluation)
    }

    // ---- SOS ----

    /// Commit a confirmed SOS prompt. Activation appends the SOS alert.
    pub fn confirm_sos(&mut self, action: SosAction, now: Timestamp) -> Result<SosOutcome, CoreError> {
        let outcome = self.sos.confirm(action, now)?;
        if let SosOutcome::Activated { alert, .. } = &outcome {
            self.alerts.push(alert.clone());
        }
        Ok(outcome)
    }

    // ---- Contacts ----

    pub fn add_contact(&mut self, input: NewContact) -> Option<EmergencyContact> {
        self.profile.emergency_contacts.add(input)
    }

    pub fn remove_contact(&mut self, id: &str) -> bool {
        self.profile.emergency_contacts.remove(id)
    }

    // ---- Profile ----

    pub fn update_profile(&mut self, patch: ProfilePatch) -> &UserProfile {
        self.profile.merge(patch);
        &self.profile
    }

    pub fn add_profile_item(&mut self, list: ProfileList, item: &str) -> bool {
        self.profile.push_item(list, item)
    }

    pub fn remove_profile_item(&mut self, list: ProfileList, index: usize) -> Option<String> {
        self.profile.remove_item(list, index)
    }

    /// Newest-first slice of the alert log, optionally truncated.
    pub fn alerts_newest_first(&self, limit: Option<usize>) -> Vec<Alert> {
        match limit {
            Some(limit) => alert::recent(&self.alerts, limit),
            None => alert::newest_first(&self.alerts),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use beacon_core::alert::AlertSeverity;
    use beacon_core::vitals::VitalStatus;

    fn input(name: &str, phone: &str) -> NewContact {
        serde_json::from_value(serde_json::json!({ "name": name, "phone": phone }))
            .expect("valid contact json")
    }

    #[test]
    fn status_matches_classification_after_every_tick() {
        let mut state = MonitorState::new(Utc::now());
        let mut rng = StdRng::seed_from_u64(99);
        let noise = NoiseModel::default().with_spike_probability(0.3);

        for _ in 0..500 {
            state.tick(&mut rng, &noise, Utc::now());
            for r in state.readings() {
                assert_eq!(r.status(), r.thresholds.classify(r.value()));
                assert!(r.range().contains(r.value()));
            }
        }
        assert_eq!(state.tick_count(), 500);
    }

    #[test]
    fn tick_alerts_are_appended_to_log() {
        let mut state = MonitorState::new(Utc::now());
        let mut rng = StdRng::seed_from_u64(5);
        let noise = NoiseModel::default().with_spike_probability(1.0);

        let mut raised = 0;
        for _ in 0..20 {
            raised += state.tick(&mut rng, &noise, Utc::now()).len();
        }
        assert_eq!(state.alerts().len(), raised);
    }

    #[test]
    fn record_value_clamps_rounds_and_alerts() {
        let mut state = MonitorState::new(Utc::now());
        let eval = state
            .record_value("hr1", 500.0, Utc::now())
            .unwrap()
            .expect("critical transition");

        assert_eq!(eval.alert.severity, AlertSeverity::Critical);
        assert_eq!(state.reading("hr1").unwrap().value(), 150.0);
        assert_eq!(state.alerts().len(), 1);

        // Still critical: nothing new.
        assert!(state.record_value("hr1", 130.04, Utc::now()).unwrap().is_none());
        assert_eq!(state.reading("hr1").unwrap().value(), 130.0);
    }

    #[test]
    fn record_value_rejects_unknown_reading_and_nan() {
        let mut state = MonitorState::new(Utc::now());
        assert_matches!(
            state.record_value("nope", 1.0, Utc::now()),
            Err(CoreError::NotFound { entity: "reading", .. })
        );
        assert_matches!(
            state.record_value("hr1", f64::NAN, Utc::now()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn sos_trigger_appends_exactly_one_alert() {
        let mut state = MonitorState::new(Utc::now());
        state.confirm_sos(SosAction::Trigger, Utc::now()).unwrap();
        assert!(state.confirm_sos(SosAction::Trigger, Utc::now()).is_err());

        let sos_alerts = state
            .alerts()
            .iter()
            .filter(|a| a.severity == AlertSeverity::Sos)
            .count();
        assert_eq!(sos_alerts, 1);

        state.confirm_sos(SosAction::Cancel, Utc::now()).unwrap();
        assert!(!state.sos().is_active());
        assert_eq!(state.alerts().len(), 1);
    }

    #[test]
    fn contacts_live_in_profile() {
        let mut state = MonitorState::new(Utc::now());
        let added = state.add_contact(input("Sam", "555")).unwrap();
        assert_eq!(state.profile().emergency_contacts.len(), 2);

        assert!(state.add_contact(input("", "555")).is_none());
        assert!(state.remove_contact(&added.id));
        assert_eq!(state.contacts().len(), 1);
    }

    #[test]
    fn update_profile_keeps_contacts() {
        let mut state = MonitorState::new(Utc::now());
        let profile = state.update_profile(ProfilePatch {
            blood_type: Some("AB-".to_string()),
            ..Default::default()
        });
        assert_eq!(profile.blood_type, "AB-");
        assert_eq!(profile.emergency_contacts.len(), 1);
    }

    #[test]
    fn dashboard_reflects_the_same_update() {
        let mut state = MonitorState::new(Utc::now());
        state.record_value("hr1", 130.0, Utc::now()).unwrap();
        state.confirm_sos(SosAction::Trigger, Utc::now()).unwrap();

        let dashboard = state.dashboard();
        assert_eq!(dashboard.status.critical, 2);
        assert!(dashboard.sos_active);
        assert_eq!(dashboard.unacknowledged_alerts, state.alerts().len());
        assert_eq!(dashboard.recent_alerts[0].severity, AlertSeverity::Sos);
    }

    #[test]
    fn history_tracks_every_recorded_value() {
        let mut state = MonitorState::with_history_capacity(Utc::now(), 3);
        assert_eq!(state.history("hr1", None).unwrap().len(), 1);

        for v in [80.0, 105.0, 125.0] {
            state.record_value("hr1", v, Utc::now()).unwrap();
        }
        let points = state.history("hr1", None).unwrap();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![80.0, 105.0, 125.0]);
        assert_eq!(points[2].status, VitalStatus::Critical);

        // Other readings are untouched by a targeted record.
        assert_eq!(state.history("temp1", None).unwrap().len(), 1);
        assert!(state.history("nope", None).is_none());
    }

    #[test]
    fn tick_samples_every_reading() {
        let mut state = MonitorState::new(Utc::now());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..4 {
            state.tick(&mut rng, &NoiseModel::default(), Utc::now());
        }
        for r in state.readings() {
            let points = state.history(&r.id, None).unwrap();
            assert_eq!(points.len(), 5);
            assert_eq!(points.last().unwrap().value, r.value());
        }
        assert_eq!(state.history("ox1", Some(2)).unwrap().len(), 2);
    }

    #[test]
    fn alerts_newest_first_respects_limit() {
        let mut state = MonitorState::new(Utc::now());
        for v in [105.0, 125.0, 105.0, 125.0] {
            state.record_value("hr1", v, Utc::now()).unwrap();
        }
        assert_eq!(state.alerts_newest_first(None).len(), 4);
        let top = state.alerts_newest_first(Some(3));
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].severity, AlertSeverity::Critical);
    }
}
