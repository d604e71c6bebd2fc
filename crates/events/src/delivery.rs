//! Contact delivery for alerts.
//!
//! There is no outbound channel: each recipient gets one structured
//! `warn` log line that an operator can grep for.

use beacon_core::alert::Alert;
use beacon_core::contacts::{ContactBook, EmergencyContact};

/// Notifies the contacts subscribed to an alert's severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactDelivery;

impl ContactDelivery {
    pub fn new() -> Self {
        Self
    }

    /// Deliver `alert` to every contact in `book` whose `notify_on` includes
    /// the alert's severity. Returns the recipients, in contact-book order.
    pub fn deliver(&self, alert: &Alert, book: &ContactBook) -> Vec<EmergencyContact> {
        let recipients = book.subscribed_to(alert.severity);
        for contact in &recipients {
            tracing::warn!(
                alert_id = %alert.id,
                severity = %alert.severity,
                contact_id = %contact.id,
                contact_name = %contact.name,
                phone = %contact.phone,
                "Notifying emergency contact"
            );
        }
        if recipients.is_empty() {
            tracing::debug!(
                alert_id = %alert.id,
                severity = %alert.severity,
                "No contacts subscribed to alert severity"
            );
        }
        recipients
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
