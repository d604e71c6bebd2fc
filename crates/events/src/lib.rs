//! Beacon event bus and notification infrastructure.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`MonitorEvent`]: the event envelope published for every state change.
//! - [`Notifier`]: the "show a transient message" capability, with
//!   [`TracingNotifier`] and [`BusNotifier`] implementations.
//! - [`ContactDelivery`]: stand-in delivery to emergency contacts.

pub mod bus;
pub mod delivery;
pub mod notifier;

pub use bus::{EventBus, MonitorEvent};
pub use delivery::ContactDelivery;
pub use notifier::{BusNotifier, Notifier, TracingNotifier};
