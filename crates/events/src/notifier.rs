//! The "show a transient message" capability.
//!
//! Domain code surfaces [`Toast`]s through a [`Notifier`] without knowing
//! where they end up. The server wires a [`BusNotifier`] so toasts reach
//! WebSocket clients; [`TracingNotifier`] only logs them.

use std::sync::Arc;

use beacon_core::event_names::EVENT_TOAST_SHOWN;
use beacon_core::notification::{Toast, ToastLevel};

use crate::bus::{EventBus, MonitorEvent};

/// Fire-and-forget toast sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Logs every toast at a level matching its severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        log_toast(&toast);
    }
}

/// Publishes every toast on the event bus as a `toast.shown` event.
pub struct BusNotifier {
    bus: Arc<EventBus>,
}

impl BusNotifier {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }
}

impl Notifier for BusNotifier {
    fn notify(&self, toast: Toast) {
        log_toast(&toast);
        self.bus
            .publish(MonitorEvent::new(EVENT_TOAST_SHOWN).with_data(&toast));
    }
}

fn log_toast(toast: &Toast) {
    match toast.level {
        ToastLevel::Error => tracing::error!(
            title = %toast.title,
            description = %toast.description,
            duration_ms = ?toast.duration_ms,
            "Toast"
        ),
        ToastLevel::Warning => tracing::warn!(
            title = %toast.title,
            description = %toast.description,
            "Toast"
        ),
        ToastLevel::Info | ToastLevel::Success => tracing::info!(
            title = %toast.title,
            description = %toast.description,
            "Toast"
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
