//! Session state container for the beacon monitor.
//!
//! - [`MonitorState`]: synchronous owner of readings, alerts, SOS and
//!   profile.
//! - [`SensorStore`]: async owner of the state and the simulator tick task.
//! - [`StoreHandle`]: the read/command interface handed to consumers.

pub mod config;
pub mod error;
pub mod state;
pub mod store;

pub use config::MonitorConfig;
pub use error::MonitorError;
pub use state::MonitorState;
pub use store::{SensorStore, StoreHandle};
