//! Chart axis specifications.
//!
//! Axes are expressed in display units: minutes for time, °C for
//! temperature, and °C/min for rate of rise.

mod config;
mod error;

pub use config::{RorAxisConfig, TemperatureAxisConfig, TimeAxisConfig};
pub use error::AxisConfigError;

use super::Sample;

/// Most ticks past `min` an axis will carry.
const MAX_TICKS: usize = 1000;

/// Bounds and tick positions for one chart axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,

    /// Tick positions from `min` to `max` inclusive, in ascending order.
    pub ticks: Vec<f64>,
}

impl AxisSpec {
    /// Builds an axis with ticks at `min + k * step` for every tick not past `max`.
    ///
    /// `step` must be strictly positive; the config types guarantee this.
    fn with_ticks(min: f64, max: f64, step: f64) -> Self {
        // Tolerate rounding so a `max` that is a whole number of steps keeps its tick.
        let steps = ((max - min) / step + 1e-9).floor().max(0.0);
        let count = if steps.is_nan() || steps > MAX_TICKS as f64 {
            log::warn!("axis [{min}, {max}] by {step} needs too many ticks, keeping {MAX_TICKS}");
            MAX_TICKS
        } else {
            steps as usize
        };
        let ticks = (0..=count).map(|k| min + k as f64 * step).collect();
        Self {
            min,
            max,
            step,
            ticks,
        }
    }
}

/// Computes the time axis for a recording.
///
/// The axis always starts at zero and spans at least the configured base
/// maximum. Longer roasts grow the axis in whole steps:
///
/// ```text
/// max = max(base_max, ceil(last_t / step) * step)
/// ```
///
/// With no samples, or a last sample time that is not finite, `base_max`
/// stands in for the last sample time. Ticks are capped at a thousand steps
/// for very long axes.
#[must_use]
pub fn time_axis(samples: &[Sample], config: &TimeAxisConfig) -> AxisSpec {
    let base_max = config.base_max();
    let step = config.step();

    let last_t = samples
        .last()
        .map(Sample::minutes)
        .filter(|t| t.is_finite())
        .unwrap_or(base_max);
    let rounded = (last_t / step).ceil() * step;

    AxisSpec::with_ticks(0.0, base_max.max(rounded), step)
}

/// Computes the fixed temperature axis.
#[must_use]
pub fn temperature_axis(config: &TemperatureAxisConfig) -> AxisSpec {
    AxisSpec::with_ticks(config.min(), config.max(), config.step())
}

/// Computes the fixed rate-of-rise axis.
#[must_use]
pub fn ror_axis(config: &RorAxisConfig) -> AxisSpec {
    AxisSpec::with_ticks(config.min(), config.max(), config.step())
}
