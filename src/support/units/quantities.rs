use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, Z0},
};

/// Rate of temperature change, K/s in SI.
///
/// Roast telemetry reports this as °C/min; see [`super::RateOfRise`].
pub type TemperatureRate = Quantity<ISQ<Z0, Z0, N1, Z0, P1, Z0, Z0>, SI<f64>, f64>;
