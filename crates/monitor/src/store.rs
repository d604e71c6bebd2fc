//! The owned sensor store and its tick task.
//!
//! [`SensorStore`] is the single owner of a session's [`MonitorState`]. It
//! starts the simulator tick task on construction and stops it on
//! [`shutdown`](SensorStore::shutdown). Everything else talks to the state
//! through cheap, cloneable [`StoreHandle`]s, which fail with
//! [`MonitorError::StoreClosed`] once the store is gone.
//!
//! Every mutation holds the write lock for its whole update, including the
//! toasts and bus events it emits, so observers never see half an update.

use std::sync::{Arc, Weak};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use beacon_core::alert::Alert;
use beacon_core::contacts::{ContactBook, EmergencyContact, NewContact};
use beacon_core::dashboard::{Dashboard, SessionSnapshot};
use beacon_core::error::CoreError;
use beacon_core::evaluator::Evaluation;
use beacon_core::history::HistoryPoint;
use beacon_core::event_names::{
    EVENT_ALERT_RAISED, EVENT_CONTACT_ADDED, EVENT_CONTACT_REMOVED, EVENT_PROFILE_UPDATED,
    EVENT_READING_UPDATED, EVENT_SOS_ACTIVATED, EVENT_SOS_CANCELLED,
};
use beacon_core::notification::Toast;
use beacon_core::profile::{ProfileList, ProfilePatch, UserProfile};
use beacon_core::sos::{SosAction, SosOutcome, SosStatus};
use beacon_core::vitals::Reading;
use beacon_events::{ContactDelivery, EventBus, MonitorEvent, Notifier};

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::state::MonitorState;

// ---------------------------------------------------------------------------
// Shared inner
// ---------------------------------------------------------------------------

struct Inner {
    state: RwLock<MonitorState>,
    notifier: Arc<dyn Notifier>,
    bus: Arc<EventBus>,
    delivery: ContactDelivery,
}

impl Inner {
    /// Announce a freshly appended reading alert and reach its contacts.
    fn emit_evaluation(&self, eval: Evaluation, contacts: &ContactBook) {
        tracing::info!(
            reading_id = %eval.alert.sensor_id,
            severity = %eval.alert.severity,
            alert_id = %eval.alert.id,
            "Reading entered alert state"
        );
        self.delivery.deliver(&eval.alert, contacts);
        self.bus.publish(
            MonitorEvent::new(EVENT_ALERT_RAISED)
                .with_source("reading", eval.alert.sensor_id.clone())
                .with_data(&eval.alert),
        );
        self.notifier.notify(eval.toast);
    }

    fn publish_readings(&self, readings: &[Reading]) {
        self.bus
            .publish(MonitorEvent::new(EVENT_READING_UPDATED).with_data(&readings));
    }
}

// ---------------------------------------------------------------------------
// SensorStore
// ---------------------------------------------------------------------------

/// Owner of the session state and the simulator task.
pub struct SensorStore {
    inner: Option<Arc<Inner>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SensorStore {
    /// Build a fresh session and spawn the tick task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: MonitorConfig, notifier: Arc<dyn Notifier>, bus: Arc<EventBus>) -> Self {
        let inner = Arc::new(Inner {
            state: RwLock::new(MonitorState::with_history_capacity(
                Utc::now(),
                config.history_capacity,
            )),
            notifier,
            bus,
            delivery: ContactDelivery::new(),
        });
        let cancel = CancellationToken::new();

        tracing::info!(
            tick_interval_ms = config.tick_interval.as_millis() as u64,
            spike_probability = config.spike_probability,
            seed = ?config.seed,
            "Sensor store started"
        );

        let task = tokio::spawn(run_ticks(Arc::clone(&inner), config, cancel.clone()));

        Self {
            inner: Some(inner),
            cancel,
            task: Some(task),
        }
    }

    /// A new handle onto this store.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: self.inner.as_ref().map(Arc::downgrade).unwrap_or_default(),
        }
    }

    /// Stop the tick task, wait for it, and release the state. Handles
    /// return [`MonitorError::StoreClosed`] afterwards.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "Sensor tick task ended abnormally");
            }
        }
        self.inner.take();
        tracing::info!("Sensor store shut down");
    }
}

impl Drop for SensorStore {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// The simulator loop. Runs until `cancel` fires.
async fn run_ticks(inner: Arc<Inner>, config: MonitorConfig, cancel: CancellationToken) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let noise = config.noise_model();

    // First tick fires one full period after start.
    let mut interval =
        tokio::time::interval_at(Instant::now() + config.tick_interval, config.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Sensor tick task stopping");
                break;
            }
            _ = interval.tick() => {
                let mut state = inner.state.write().await;
                let raised = state.tick(&mut rng, &noise, Utc::now());
                tracing::debug!(tick = state.tick_count(), alerts = raised.len(), "Sensor tick");
                inner.publish_readings(state.readings());
                for eval in raised {
                    inner.emit_evaluation(eval, state.contacts());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// StoreHandle
// ---------------------------------------------------------------------------

/// Read views and command interface onto a [`SensorStore`].
#[derive(Clone, Default)]
pub struct StoreHandle {
    inner: Weak<Inner>,
}

impl StoreHandle {
    fn upgrade(&self) -> Result<Arc<Inner>, MonitorError> {
        self.inner.upgrade().ok_or(MonitorError::StoreClosed)
    }

    /// Whether the owning store is still alive.
    pub fn is_open(&self) -> bool {
        self.inner.strong_count() > 0
    }

    // ---- Reads ----

    pub async fn readings(&self) -> Result<Vec<Reading>, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.readings().to_vec())
    }

    pub async fn reading(&self, id: &str) -> Result<Reading, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        state.reading(id).cloned().ok_or_else(|| {
            CoreError::NotFound {
                entity: "reading",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Dashboard summary taken under a single read guard.
    pub async fn dashboard(&self) -> Result<Dashboard, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.dashboard())
    }

    /// Alerts in the order they were raised.
    pub async fn alerts(&self) -> Result<Vec<Alert>, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.alerts().to_vec())
    }

    /// Alerts newest first, optionally truncated to `limit`.
    pub async fn alerts_newest_first(&self, limit: Option<usize>) -> Result<Vec<Alert>, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.alerts_newest_first(limit))
    }

    /// Full session view for a newly connected feed client.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.snapshot())
    }

    /// SOS state together with the confirmation dialog for it.
    pub async fn sos_status(&self) -> Result<SosStatus, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.sos().status())
    }

    pub async fn contacts(&self) -> Result<Vec<EmergencyContact>, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.contacts().list().to_vec())
    }

    pub async fn profile(&self) -> Result<UserProfile, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.profile().clone())
    }

    /// Recent samples of one reading, oldest first, optionally limited to
    /// the newest `limit`.
    pub async fn history(&self, reading_id: &str, limit: Option<usize>) -> Result<Vec<HistoryPoint>, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        state.history(reading_id, limit).ok_or_else(|| {
            CoreError::NotFound {
                entity: "reading",
                id: reading_id.to_string(),
            }
            .into()
        })
    }

    pub async fn tick_count(&self) -> Result<u64, MonitorError> {
        let inner = self.upgrade()?;
        let state = inner.state.read().await;
        Ok(state.tick_count())
    }

    // ---- Commands ----

    /// Record a specific value on a reading, evaluating it like a tick.
    /// Returns the alert it raised, if any.
    pub async fn record_value(&self, reading_id: &str, value: f64) -> Result<Option<Alert>, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        let evaluation = state.record_value(reading_id, value, Utc::now())?;
        inner.publish_readings(state.readings());
        Ok(evaluation.map(|eval| {
            let alert = eval.alert.clone();
            inner.emit_evaluation(eval, state.contacts());
            alert
        }))
    }

    /// Commit a confirmed SOS prompt.
    ///
    /// Fails with [`CoreError::Conflict`] when `action` does not match the
    /// prompt for the current state.
    pub async fn confirm_sos(&self, action: SosAction) -> Result<SosOutcome, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        let outcome = state.confirm_sos(action, Utc::now()).inspect_err(|e| {
            tracing::warn!(action = action.as_str(), error = %e, "SOS confirmation rejected");
        })?;

        match &outcome {
            SosOutcome::Activated { alert, toast } => {
                tracing::warn!(alert_id = %alert.id, "SOS activated");
                inner.delivery.deliver(alert, state.contacts());
                inner.bus.publish(
                    MonitorEvent::new(EVENT_SOS_ACTIVATED)
                        .with_source("alert", alert.id.clone())
                        .with_data(alert),
                );
                inner.notifier.notify(toast.clone());
            }
            SosOutcome::Cancelled { toast } => {
                tracing::info!("SOS cancelled");
                inner.bus.publish(MonitorEvent::new(EVENT_SOS_CANCELLED));
                inner.notifier.notify(toast.clone());
            }
        }
        Ok(outcome)
    }

    pub async fn trigger_sos(&self) -> Result<SosOutcome, MonitorError> {
        self.confirm_sos(SosAction::Trigger).await
    }

    pub async fn cancel_sos(&self) -> Result<SosOutcome, MonitorError> {
        self.confirm_sos(SosAction::Cancel).await
    }

    /// Add a contact. Incomplete input is a silent no-op returning `None`.
    pub async fn add_contact(&self, input: NewContact) -> Result<Option<EmergencyContact>, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        let Some(contact) = state.add_contact(input) else {
            tracing::debug!("Ignoring contact without name or phone");
            return Ok(None);
        };

        tracing::info!(contact_id = %contact.id, "Emergency contact added");
        inner.bus.publish(
            MonitorEvent::new(EVENT_CONTACT_ADDED)
                .with_source("contact", contact.id.clone())
                .with_data(&contact),
        );
        inner.notifier.notify(Toast::contact_added(&contact.name));
        Ok(Some(contact))
    }

    /// Remove a contact by id. Returns whether one was removed.
    pub async fn remove_contact(&self, id: &str) -> Result<bool, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        if !state.remove_contact(id) {
            return Ok(false);
        }

        tracing::info!(contact_id = %id, "Emergency contact removed");
        inner
            .bus
            .publish(MonitorEvent::new(EVENT_CONTACT_REMOVED).with_source("contact", id));
        inner.notifier.notify(Toast::contact_removed());
        Ok(true)
    }

    /// Shallow-merge `patch` into the profile and return the result.
    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        let profile = state.update_profile(patch).clone();
        inner.profile_changed(&profile);
        Ok(profile)
    }

    /// Append an item to one of the profile lists. Blank items are ignored.
    pub async fn add_profile_item(&self, list: ProfileList, item: &str) -> Result<UserProfile, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        if state.add_profile_item(list, item) {
            inner.profile_changed(state.profile());
        }
        Ok(state.profile().clone())
    }

    /// Remove an item from one of the profile lists by index. Out-of-range
    /// indices are ignored.
    pub async fn remove_profile_item(&self, list: ProfileList, index: usize) -> Result<UserProfile, MonitorError> {
        let inner = self.upgrade()?;
        let mut state = inner.state.write().await;
        if state.remove_profile_item(list, index).is_some() {
            inner.profile_changed(state.profile());
        }
        Ok(state.profile().clone())
    }
}

impl Inner {
    fn profile_changed(&self, profile: &UserProfile) {
        tracing::info!("Profile updated");
        self.bus
            .publish(MonitorEvent::new(EVENT_PROFILE_UPDATED).with_data(profile));
        self.notifier.notify(Toast::profile_updated());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
