//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities (sample times, bean and
//! environment temperatures, rate of rise). This module provides extensions
//! that are useful for roast telemetry but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use roast_scope::support::units::TemperatureDifference;
//!
//! let bt_now = ThermodynamicTemperature::new::<degree_celsius>(196.0);
//! let bt_before = ThermodynamicTemperature::new::<degree_celsius>(186.0);
//! let rise = bt_now.minus(bt_before);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Rate of rise
//!
//! [`TemperatureRate`] is the quantity of temperature change over time.
//! [`RateOfRise`] converts it to and from °C/min:
//!
//! ```
//! use roast_scope::support::units::{RateOfRise, TemperatureRate};
//!
//! let ror = TemperatureRate::from_celsius_per_minute(12.5);
//! assert!((ror.celsius_per_minute() - 12.5).abs() < 1e-12);
//! ```

mod quantities;
mod rate_of_rise;
mod temperature_difference;

pub use quantities::TemperatureRate;
pub use rate_of_rise::RateOfRise;
pub use temperature_difference::TemperatureDifference;
