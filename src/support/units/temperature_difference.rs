use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference).
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        temperature_interval::{degree_celsius as delta_celsius, kelvin as delta_kelvin},
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn subtract_bean_temperatures() {
        let turning_point = ThermodynamicTemperature::new::<degree_celsius>(174.0);
        let drop = ThermodynamicTemperature::new::<degree_celsius>(218.5);

        // Rise from turning point to drop.
        assert_relative_eq!(
            drop.minus(turning_point).get::<delta_celsius>(),
            44.5,
            epsilon = 1e-9
        );

        // Charge dip is a negative difference.
        assert_relative_eq!(
            turning_point.minus(drop).get::<delta_kelvin>(),
            -44.5,
            epsilon = 1e-9
        );

        // 200°C and 392°F are the same temperature.
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(200.0);
        let t_in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(392.0);
        assert_relative_eq!(
            t_in_f.minus(t_in_c).get::<delta_celsius>(),
            0.0,
            epsilon = 1e-9
        );
    }
}
