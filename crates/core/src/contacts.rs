//! Emergency contacts and the in-memory contact book.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::alert::AlertSeverity;
use crate::types::generate_id;

/// A person to notify for selected alert severities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub relationship: String,
    pub phone: String,
    pub email: String,
    pub notify_on: BTreeSet<AlertSeverity>,
}

impl EmergencyContact {
    pub fn wants(&self, severity: AlertSeverity) -> bool {
        self.notify_on.contains(&severity)
    }
}

/// Contact fields as entered by the user, before an id is assigned.
///
/// Every field may be omitted; a missing name or phone leaves the contact
/// incomplete rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_notify_on")]
    pub notify_on: BTreeSet<AlertSeverity>,
}

/// New contacts subscribe to SOS only unless told otherwise.
fn default_notify_on() -> BTreeSet<AlertSeverity> {
    BTreeSet::from([AlertSeverity::Sos])
}

impl NewContact {
    /// Name and phone are the only required fields. Whitespace-only counts
    /// as missing.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

/// Ordered collection of contacts. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: Vec<EmergencyContact>,
}

impl ContactBook {
    pub fn new(contacts: Vec<EmergencyContact>) -> Self {
        Self { contacts }
    }

    /// The contact a new session starts with.
    pub fn seeded() -> Self {
        Self::new(vec![EmergencyContact {
            id: "contact1".to_string(),
            name: "Jane Doe".to_string(),
            relationship: "Spouse".to_string(),
            phone: "+1-555-123-4567".to_string(),
            email: "jane.doe@example.com".to_string(),
            notify_on: BTreeSet::from([AlertSeverity::Critical, AlertSeverity::Sos]),
        }])
    }

    pub fn list(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Append a contact with a generated id.
    ///
    /// Incomplete input is silently ignored and returns `None`.
    pub fn add(&mut self, input: NewContact) -> Option<EmergencyContact> {
        if !input.is_complete() {
            return None;
        }
        let contact = EmergencyContact {
            id: generate_id("contact"),
            name: input.name,
            relationship: input.relationship,
            phone: input.phone,
            email: input.email,
            notify_on: input.notify_on,
        };
        self.contacts.push(contact.clone());
        Some(contact)
    }

    /// Remove every contact with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }

    /// Contacts subscribed to `severity`, in insertion order.
    pub fn subscribed_to(&self, severity: AlertSeverity) -> Vec<EmergencyContact> {
        self.contacts
            .iter()
            .filter(|c| c.wants(severity))
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
