//! SOS state machine.
//!
//! Two states, two user-confirmed transitions. A caller first asks for a
//! [`SosPrompt`] (the confirmation dialog for whatever the current state
//! allows), then commits it. Committing a prompt that no longer matches the
//! current state is rejected, so a second "trigger" confirmation while SOS is
//! already active can never append another SOS alert.

use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::error::CoreError;
use crate::notification::Toast;
use crate::types::Timestamp;

/// Current SOS state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SosState {
    Inactive,
    Active { since: Timestamp },
}

impl SosState {
    pub fn is_active(self) -> bool {
        matches!(self, SosState::Active { .. })
    }
}

/// The transition a confirmation dialog would commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SosAction {
    Trigger,
    Cancel,
}

impl SosAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SosAction::Trigger => "trigger",
            SosAction::Cancel => "cancel",
        }
    }
}

/// Current SOS state plus the dialog the button would open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SosStatus {
    pub active: bool,
    pub state: SosState,
    pub prompt: SosPrompt,
}

/// Confirmation dialog contents for the next SOS transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SosPrompt {
    pub action: SosAction,
    pub title: &'static str,
    pub description: &'static str,
    pub confirm_label: &'static str,
    pub dismiss_label: &'static str,
}

impl SosPrompt {
    fn for_action(action: SosAction) -> Self {
        match action {
            SosAction::Trigger => Self {
                action,
                title: "Confirm Emergency Alert",
                description: "This will notify all your emergency contacts.",
                confirm_label: "Yes, Send Alert",
                dismiss_label: "Cancel",
            },
            SosAction::Cancel => Self {
                action,
                title: "Cancel Emergency Alert?",
                description: "Are you sure you want to cancel the emergency alert?",
                confirm_label: "Yes, Cancel Alert",
                dismiss_label: "Keep Alert Active",
            },
        }
    }
}

/// Result of committing a confirmed prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum SosOutcome {
    /// SOS went active. The alert must be appended to the alert list.
    Activated { alert: Alert, toast: Toast },
    /// SOS went inactive. Nothing is appended.
    Cancelled { toast: Toast },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosMachine {
    state: SosState,
}

impl Default for SosMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SosMachine {
    pub fn new() -> Self {
        Self {
            state: SosState::Inactive,
        }
    }

    pub fn state(&self) -> SosState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// The dialog to show for the button press in the current state.
    pub fn prompt(&self) -> SosPrompt {
        let action = if self.is_active() {
            SosAction::Cancel
        } else {
            SosAction::Trigger
        };
        SosPrompt::for_action(action)
    }

    /// State and prompt read together, so the prompt always matches the
    /// state it is shown for.
    pub fn status(&self) -> SosStatus {
        SosStatus {
            active: self.is_active(),
            state: self.state,
            prompt: self.prompt(),
        }
    }

    /// Commit a confirmed action.
    ///
    /// Returns [`CoreError::Conflict`] when `action` is not the one the
    /// current state allows (e.g. a stale trigger dialog confirmed after
    /// SOS already went active).
    pub fn confirm(&mut self, action: SosAction, now: Timestamp) -> Result<SosOutcome, CoreError> {
        match (self.state, action) {
            (SosState::Inactive, SosAction::Trigger) => {
                self.state = SosState::Active { since: now };
                Ok(SosOutcome::Activated {
                    alert: Alert::sos(now),
                    toast: Toast::sos_activated(),
                })
            }
            (SosState::Active { .. }, SosAction::Cancel) => {
                self.state = SosState::Inactive;
                Ok(SosOutcome::Cancelled {
                    toast: Toast::sos_cancelled(),
                })
            }
            (SosState::Active { .. }, SosAction::Trigger) => Err(CoreError::Conflict(
                "SOS is already active; confirm a cancel instead".to_string(),
            )),
            (SosState::Inactive, SosAction::Cancel) => Err(CoreError::Conflict(
                "SOS is not active; nothing to cancel".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
