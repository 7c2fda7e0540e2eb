use uom::si::{
    f64::{TemperatureInterval, Time},
    temperature_interval::degree_celsius as delta_celsius,
    time::minute,
};

use super::TemperatureRate;

/// Conversions between [`TemperatureRate`] and the roaster's display unit, °C/min.
///
/// [`uom`] has no named unit for a temperature rate, so values are built from
/// and read through a one-minute interval.
pub trait RateOfRise: Sized {
    /// Constructs a rate from degrees Celsius per minute.
    fn from_celsius_per_minute(value: f64) -> Self;

    /// Returns the rate in degrees Celsius per minute.
    fn celsius_per_minute(self) -> f64;
}

impl RateOfRise for TemperatureRate {
    fn from_celsius_per_minute(value: f64) -> Self {
        TemperatureInterval::new::<delta_celsius>(value) / Time::new::<minute>(1.0)
    }

    fn celsius_per_minute(self) -> f64 {
        let per_minute: TemperatureInterval = self * Time::new::<minute>(1.0);
        per_minute.get::<delta_celsius>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::{ConstZero, si::temperature_interval::kelvin as delta_kelvin, si::time::second};

    #[test]
    fn per_minute_roundtrip() {
        let rate = TemperatureRate::from_celsius_per_minute(9.2);
        assert_relative_eq!(rate.celsius_per_minute(), 9.2, epsilon = 1e-12);
    }

    #[test]
    fn matches_interval_over_time() {
        let rate: TemperatureRate =
            TemperatureInterval::new::<delta_kelvin>(1.0) / Time::new::<second>(1.0);
        assert_relative_eq!(rate.celsius_per_minute(), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(TemperatureRate::ZERO.celsius_per_minute(), 0.0);
    }
}
