use std::time::Duration;

use beacon_core::history::DEFAULT_HISTORY_CAPACITY;
use beacon_core::simulator::{NoiseModel, DEFAULT_SPIKE_PROBABILITY};

/// Default simulation tick period.
const DEFAULT_TICK_INTERVAL_MS: u64 = 5_000;

/// Simulation settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Time between simulator ticks (default: 5 s).
    pub tick_interval: Duration,
    /// Probability that a tick step is a spike (default: `0.05`).
    pub spike_probability: f64,
    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// History samples kept per reading (default: 720).
    pub history_capacity: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            spike_probability: DEFAULT_SPIKE_PROBABILITY,
            seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Unparseable values fall back to the default.
    ///
    /// | Env Var             | Default         |
    /// |---------------------|-----------------|
    /// | `TICK_INTERVAL_MS`  | `5000`          |
    /// | `SPIKE_PROBABILITY` | `0.05`          |
    /// | `SIMULATOR_SEED`    | unset           |
    /// | `HISTORY_CAPACITY`  | `720`           |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let tick_interval = std::env::var("TICK_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_interval);

        let spike_probability = std::env::var("SPIKE_PROBABILITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.spike_probability);

        let seed = std::env::var("SIMULATOR_SEED")
            .ok()
            .and_then(|v| v.parse().ok());

        let history_capacity = std::env::var("HISTORY_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.history_capacity);

        Self {
            tick_interval,
            spike_probability,
            seed,
            history_capacity,
        }
    }

    /// Noise model with this config's spike probability.
    pub fn noise_model(&self) -> NoiseModel {
        NoiseModel::default().with_spike_probability(self.spike_probability)
    }
}
