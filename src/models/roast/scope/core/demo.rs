//! Synthetic roast profile.
//!
//! Used in place of a live feed so the chart has something realistic to show.
//! The curve has three phases: a charge dip while cold beans pull heat out of
//! the drum, a steady climb, and a flattening wobble toward the end of the roast.

use super::Sample;

/// Recipe for a synthetic roast curve.
///
/// Temperatures are in °C, times in minutes, and per-phase rates in °C/min.
/// Each step adds `rate * dt` to running BT and ET values. The running values
/// are never clamped; only the recorded sample is.
///
/// The default reproduces a ten-minute demo roast sampled every six seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoProfile {
    /// Step between samples.
    pub dt: f64,

    /// Time of the last sample.
    pub duration: f64,

    /// BT and ET before the first step (pre-charge).
    pub start: (f64, f64),

    /// End of the charge dip.
    pub dip_until: f64,

    /// BT and ET rates during the dip (negative while falling).
    pub dip_rate: (f64, f64),

    /// End of the steady climb.
    pub climb_until: f64,

    /// BT and ET rates during the climb.
    pub climb_rate: (f64, f64),

    /// BT and ET oscillation periods once flattening.
    ///
    /// Within each period the rate is positive for the first half and
    /// negative for the second.
    pub wobble_period: (f64, f64),

    /// BT and ET oscillation rate magnitudes once flattening.
    pub wobble_rate: (f64, f64),

    /// Inclusive clamp applied to recorded BT.
    pub bt_bounds: (f64, f64),

    /// Inclusive clamp applied to recorded ET.
    pub et_bounds: (f64, f64),
}

impl Default for DemoProfile {
    fn default() -> Self {
        Self {
            dt: 0.1,
            duration: 10.0,
            start: (178.0, 176.0),
            dip_until: 0.9,
            dip_rate: (-4.5, -3.0),
            climb_until: 6.0,
            climb_rate: (9.2, 5.2),
            wobble_period: (0.6, 0.8),
            wobble_rate: (0.8, 0.6),
            bt_bounds: (20.0, 240.0),
            et_bounds: (20.0, 236.0),
        }
    }
}

impl DemoProfile {
    /// Generates the sample sequence.
    ///
    /// Times are rounded to three decimals after every step so that
    /// floating-point error does not accumulate across the roast. The
    /// increment for `t` is applied before that sample is recorded, so the
    /// first sample already carries one step of the dip.
    ///
    /// The output is deterministic. A non-positive or `NaN` `dt` and a
    /// non-finite `duration` yield no samples. Generation stops early if `dt`
    /// is too small to advance the rounded time.
    #[must_use]
    pub fn generate(&self) -> Vec<Sample> {
        if self.dt.is_nan() || self.dt <= 0.0 {
            log::warn!("demo profile step {} is not positive, no samples generated", self.dt);
            return Vec::new();
        }
        if !self.duration.is_finite() {
            log::warn!(
                "demo profile duration {} is not finite, no samples generated",
                self.duration
            );
            return Vec::new();
        }

        let (mut bt, mut et) = self.start;
        let mut out = Vec::new();
        let mut t = 0.0;

        while t <= self.duration {
            let (bt_rate, et_rate) = self.rates_at(t);
            bt += bt_rate * self.dt;
            et += et_rate * self.dt;

            out.push(Sample::from_celsius(
                t,
                clamp(bt, self.bt_bounds),
                clamp(et, self.et_bounds),
            ));

            let next = round_millis(t + self.dt);
            if next <= t {
                log::warn!(
                    "demo profile step {} does not advance past t = {t}, stopping",
                    self.dt
                );
                break;
            }
            t = next;
        }

        log::debug!("generated demo profile with {} samples", out.len());
        out
    }

    fn rates_at(&self, t: f64) -> (f64, f64) {
        if t < self.dip_until {
            self.dip_rate
        } else if t < self.climb_until {
            self.climb_rate
        } else {
            (
                wobble(t, self.wobble_period.0, self.wobble_rate.0),
                wobble(t, self.wobble_period.1, self.wobble_rate.1),
            )
        }
    }
}

/// Generates the default demo profile.
#[must_use]
pub fn demo_profile() -> Vec<Sample> {
    DemoProfile::default().generate()
}

fn wobble(t: f64, period: f64, rate: f64) -> f64 {
    if t % period < period / 2.0 { rate } else { -rate }
}

/// Unlike [`f64::clamp`], never panics on inverted bounds; the upper bound wins.
fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.max(lo).min(hi)
}

fn round_millis(t: f64) -> f64 {
    (t * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

    #[test]
    fn spans_ten_minutes_at_six_seconds() {
        let samples = demo_profile();

        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0].minutes(), 0.0);
        assert_relative_eq!(samples[100].minutes(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn deterministic() {
        assert_eq!(demo_profile(), demo_profile());
    }

    #[test]
    fn times_strictly_increase() {
        let samples = demo_profile();
        assert!(samples.windows(2).all(|w| w[0].t() < w[1].t()));
    }

    #[test]
    fn recorded_values_within_bounds() {
        let celsius = ThermodynamicTemperature::new::<degree_celsius>;
        let (bt_lo, bt_hi) = (celsius(20.0), celsius(240.0));
        let (et_lo, et_hi) = (celsius(20.0), celsius(236.0));

        for sample in demo_profile() {
            assert!(bt_lo <= sample.bt() && sample.bt() <= bt_hi);
            assert!(et_lo <= sample.et() && sample.et() <= et_hi);
        }
    }

    #[test]
    fn charge_dip_then_climb() {
        let samples = demo_profile();

        // First sample already carries one dip step.
        assert_relative_eq!(samples[0].bt_celsius(), 177.55, epsilon = 1e-9);
        assert_relative_eq!(samples[0].et_celsius(), 175.7, epsilon = 1e-9);

        // Nine dip steps (t = 0.0 ..= 0.8), turning point at t = 0.8.
        assert_relative_eq!(samples[8].bt_celsius(), 173.95, epsilon = 1e-9);
        assert!(samples[9].bt() > samples[8].bt());
        assert!(samples[30].bt() > samples[20].bt());
    }

    #[test]
    fn clamps_recorded_values() {
        let profile = DemoProfile {
            climb_until: 10.0,
            climb_rate: (9.2, 9.2),
            ..DemoProfile::default()
        };
        let samples = profile.generate();
        let last = samples.last().unwrap();

        // Running values pass 257 °C; recorded values stop at the ceiling.
        assert_relative_eq!(last.bt_celsius(), 240.0, epsilon = 1e-9);
        assert_relative_eq!(last.et_celsius(), 236.0, epsilon = 1e-9);
    }

    #[test]
    fn flattening_wobbles_with_separate_periods() {
        let samples = demo_profile();
        let step = |i: usize| {
            (
                samples[i].bt_celsius() - samples[i - 1].bt_celsius(),
                samples[i].et_celsius() - samples[i - 1].et_celsius(),
            )
        };

        // Top of the climb: 51 steps of 0.92 from the 173.95 turning point.
        assert_relative_eq!(samples[59].bt_celsius(), 220.87, epsilon = 1e-9);

        // (index, BT change, ET change): BT flips every 0.3 min, ET every 0.4 min.
        for (i, d_bt, d_et) in [
            (61, 0.08, -0.06),
            (62, 0.08, -0.06),
            (65, -0.08, 0.06),
            (67, 0.08, 0.06),
            (70, -0.08, -0.06),
        ] {
            let (bt, et) = step(i);
            assert_relative_eq!(bt, d_bt, epsilon = 1e-9);
            assert_relative_eq!(et, d_et, epsilon = 1e-9);
        }
    }

    #[test]
    fn step_too_small_to_advance_stops() {
        let profile = DemoProfile {
            dt: 0.0004,
            ..DemoProfile::default()
        };
        let samples = profile.generate();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].minutes(), 0.0);
    }

    #[test]
    fn non_finite_duration_yields_nothing() {
        for duration in [f64::INFINITY, f64::NAN] {
            let profile = DemoProfile {
                duration,
                ..DemoProfile::default()
            };
            assert!(profile.generate().is_empty());
        }
    }

    #[test]
    fn non_positive_step_yields_nothing() {
        let profile = DemoProfile {
            dt: 0.0,
            ..DemoProfile::default()
        };
        assert!(profile.generate().is_empty());
    }
}
