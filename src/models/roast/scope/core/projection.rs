//! Bean temperature projection.
//!
//! Fits a least-squares line through the most recent samples and extrapolates
//! it to a target temperature, usually first crack.

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use super::Sample;

/// Bean temperature at which first crack is expected, °C.
pub const FIRST_CRACK_CELSIUS: f64 = 196.0;

/// Slopes flatter than this (°C/min) are treated as no trend.
const MIN_SLOPE: f64 = 1e-6;

/// Projection configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Number of most recent samples used for the fit.
    pub window: usize,

    /// Fewest samples for which a projection is attempted.
    pub min_samples: usize,

    /// Projections further out than this are discarded.
    pub horizon: Time,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            window: 20,
            min_samples: 4,
            horizon: Time::new::<minute>(60.0),
        }
    }
}

/// When the bean temperature trend reaches a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub target: ThermodynamicTemperature,

    /// Time remaining from the last sample.
    pub eta: Time,

    /// Absolute time at which the target is reached.
    pub at: Time,
}

/// Projects when bean temperature will reach `target`.
///
/// Returns `None` when there are too few samples, the trend is flat, or the
/// crossing lies in the past or beyond the configured horizon.
#[must_use]
pub fn eta_to_temperature(
    samples: &[Sample],
    target: ThermodynamicTemperature,
    config: &ProjectionConfig,
) -> Option<Projection> {
    let n = config.window.min(samples.len());
    if n < config.min_samples.max(2) {
        return None;
    }
    let recent = &samples[samples.len() - n..];

    let (slope, intercept) = fit_line(recent)?;
    if slope.abs() < MIN_SLOPE {
        return None;
    }

    let at = (target.get::<degree_celsius>() - intercept) / slope;
    let now = recent.last()?.minutes();
    let eta = at - now;
    if eta < 0.0 || eta > config.horizon.get::<minute>() {
        return None;
    }

    Some(Projection {
        target,
        eta: Time::new::<minute>(eta),
        at: Time::new::<minute>(at),
    })
}

/// Projects when bean temperature will reach first crack, using the default config.
#[must_use]
pub fn first_crack(samples: &[Sample]) -> Option<Projection> {
    eta_to_temperature(
        samples,
        ThermodynamicTemperature::new::<degree_celsius>(FIRST_CRACK_CELSIUS),
        &ProjectionConfig::default(),
    )
}

/// Least-squares fit of BT (°C) against time (min), returning `(slope, intercept)`.
fn fit_line(samples: &[Sample]) -> Option<(f64, f64)> {
    let n = samples.len() as f64;
    let mean_t = samples.iter().map(Sample::minutes).sum::<f64>() / n;
    let mean_bt = samples.iter().map(Sample::bt_celsius).sum::<f64>() / n;

    let (sxx, sxy) = samples.iter().fold((0.0, 0.0), |(sxx, sxy), s| {
        let dt = s.minutes() - mean_t;
        (sxx + dt * dt, sxy + dt * (s.bt_celsius() - mean_bt))
    });
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, mean_bt - slope * mean_t))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::roast::scope::core::test_support::{bt_ramp, samples};

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn linear_ramp_hits_first_crack() {
        // 150 °C rising 8 °C/min, last sample at 5 min and 190 °C.
        let projection = first_crack(&bt_ramp(21, 0.25, 150.0, 8.0)).unwrap();

        assert_relative_eq!(projection.eta.get::<minute>(), 0.75, epsilon = 1e-6);
        assert_relative_eq!(projection.at.get::<minute>(), 5.75, epsilon = 1e-6);
        assert_eq!(projection.target, celsius(FIRST_CRACK_CELSIUS));
    }

    #[test]
    fn uses_only_the_window() {
        // Slow start, then a fast ramp over the last ten samples.
        let mut input = bt_ramp(10, 0.5, 100.0, 1.0);
        input.extend(samples(&[
            (5.0, 150.0, 200.0),
            (5.5, 155.0, 200.0),
            (6.0, 160.0, 200.0),
            (6.5, 165.0, 200.0),
        ]));
        let config = ProjectionConfig {
            window: 4,
            ..ProjectionConfig::default()
        };

        let projection = eta_to_temperature(&input, celsius(175.0), &config).unwrap();
        assert_relative_eq!(projection.eta.get::<minute>(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn too_few_samples() {
        assert!(first_crack(&bt_ramp(3, 0.5, 150.0, 8.0)).is_none());
        assert!(first_crack(&[]).is_none());
    }

    #[test]
    fn flat_trend() {
        assert!(first_crack(&bt_ramp(10, 0.5, 180.0, 0.0)).is_none());
    }

    #[test]
    fn target_already_passed() {
        assert!(first_crack(&bt_ramp(10, 0.5, 200.0, 4.0)).is_none());
    }

    #[test]
    fn beyond_horizon() {
        // 0.1 °C/min from 150 °C needs hours to reach 196 °C.
        assert!(first_crack(&bt_ramp(10, 0.5, 150.0, 0.1)).is_none());
    }

    #[test]
    fn duplicate_times_do_not_fit() {
        let input = samples(&[
            (2.0, 150.0, 200.0),
            (2.0, 151.0, 200.0),
            (2.0, 152.0, 200.0),
            (2.0, 153.0, 200.0),
        ]);
        assert!(first_crack(&input).is_none());
    }
}
