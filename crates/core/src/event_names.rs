//! Well-known event type constants.
//!
//! These are the `event_type` strings published on the in-process event bus
//! and forwarded verbatim to WebSocket clients.

/// A reading's value was updated by the simulator or an injected value.
pub const EVENT_READING_UPDATED: &str = "reading.updated";

/// A vital reading moved into a new warning or critical status.
pub const EVENT_ALERT_RAISED: &str = "alert.raised";

/// The SOS button was confirmed and an SOS alert was appended.
pub const EVENT_SOS_ACTIVATED: &str = "sos.activated";

/// An active SOS was cancelled.
pub const EVENT_SOS_CANCELLED: &str = "sos.cancelled";

pub const EVENT_CONTACT_ADDED: &str = "contact.added";

pub const EVENT_CONTACT_REMOVED: &str = "contact.removed";

pub const EVENT_PROFILE_UPDATED: &str = "profile.updated";

/// A transient user-facing message was shown.
pub const EVENT_TOAST_SHOWN: &str = "toast.shown";

/// Sent to one WebSocket client when it connects: current readings, the
/// dashboard and the SOS dialog.
pub const EVENT_FEED_SNAPSHOT: &str = "feed.snapshot";
