//! Bounded random-walk simulator for vital readings.
//!
//! Pure logic: the caller owns the random source and the readings. Each
//! step adds symmetric jitter, occasionally replaced by a one-sided spike,
//! then clamps into the vital's physical band and rounds to one decimal.

use rand::Rng;

use crate::vitals::SensorRange;

/// Default full width of the symmetric jitter (values in `[-2.5, 2.5)`).
pub const DEFAULT_JITTER_WIDTH: f64 = 5.0;

/// Default probability that a step is a spike instead of jitter.
pub const DEFAULT_SPIKE_PROBABILITY: f64 = 0.05;

/// Smallest spike excursion.
pub const DEFAULT_SPIKE_MIN: f64 = 5.0;

/// Width of the spike excursion range (spikes land in `[5, 15)`).
pub const DEFAULT_SPIKE_SPAN: f64 = 10.0;

/// Parameters of the per-step noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel {
    pub jitter_width: f64,
    pub spike_probability: f64,
    pub spike_min: f64,
    pub spike_span: f64,
}

impl Default for NoiseModel {
    fn default() -> Self {
        Self {
            jitter_width: DEFAULT_JITTER_WIDTH,
            spike_probability: DEFAULT_SPIKE_PROBABILITY,
            spike_min: DEFAULT_SPIKE_MIN,
            spike_span: DEFAULT_SPIKE_SPAN,
        }
    }
}

impl NoiseModel {
    /// Same model with a different spike probability, clamped to `[0, 1]`.
    pub fn with_spike_probability(mut self, probability: f64) -> Self {
        self.spike_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Draw one noise sample.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let jitter = (rng.random::<f64>() - 0.5) * self.jitter_width;
        if rng.random::<f64>() < self.spike_probability {
            rng.random::<f64>() * self.spike_span + self.spike_min
        } else {
            jitter
        }
    }
}

/// Round to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the next simulated value for a reading currently at `current`.
///
/// The result is always inside `range`: clamping happens before rounding
/// and the band edges are whole numbers, so rounding cannot leave it.
pub fn next_value<R: Rng + ?Sized>(
    rng: &mut R,
    current: f64,
    range: SensorRange,
    noise: &NoiseModel,
) -> f64 {
    let candidate = current + noise.sample(rng);
    round_tenth(range.clamp(candidate))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
