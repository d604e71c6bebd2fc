//! Domain logic for the safety beacon vitals monitor.
//!
//! Everything here is synchronous and free of I/O. The async runtime, the
//! shared store, and the HTTP surface live in the `beacon-monitor` and
//! `beacon-api` crates.
//!
//! - [`vitals`]: readings, thresholds and the status classifier.
//! - [`simulator`]: the bounded random walk that drives readings.
//! - [`evaluator`]: edge-triggered alert generation.
//! - [`sos`]: the two-state SOS machine and its confirmation prompts.
//! - [`contacts`] and [`profile`]: user-editable records.
//! - [`dashboard`]: the summary card snapshot.
//! - [`history`]: bounded per-reading trend samples.

pub mod alert;
pub mod contacts;
pub mod dashboard;
pub mod error;
pub mod evaluator;
pub mod history;
pub mod event_names;
pub mod notification;
pub mod profile;
pub mod services;
pub mod simulator;
pub mod sos;
pub mod types;
pub mod vitals;

pub use error::CoreError;
