use beacon_core::error::CoreError;

/// Errors returned by [`StoreHandle`](crate::StoreHandle) operations.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// The owning [`SensorStore`](crate::SensorStore) has shut down.
    #[error("Sensor store is closed")]
    StoreClosed,

    #[error(transparent)]
    Core(#[from] CoreError),
}
