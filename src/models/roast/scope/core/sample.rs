//! Telemetry samples.

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use crate::support::units::{RateOfRise, TemperatureRate};

/// A single roast telemetry reading.
///
/// Sequences of samples are expected to be ordered by strictly increasing
/// time. That ordering is the caller's contract and is not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    t: Time,
    bt: ThermodynamicTemperature,
    et: ThermodynamicTemperature,
}

impl Sample {
    /// Constructs a sample from its time and temperatures.
    #[must_use]
    pub fn new(t: Time, bt: ThermodynamicTemperature, et: ThermodynamicTemperature) -> Self {
        Self { t, bt, et }
    }

    /// Constructs a sample from minutes since charge and temperatures in °C.
    ///
    /// Values are stored in SI units, so reading them back in minutes or °C
    /// is exact only to within a few ULPs (the °C offset does not round-trip).
    #[must_use]
    pub fn from_celsius(minutes: f64, bt: f64, et: f64) -> Self {
        Self::new(
            Time::new::<minute>(minutes),
            ThermodynamicTemperature::new::<degree_celsius>(bt),
            ThermodynamicTemperature::new::<degree_celsius>(et),
        )
    }

    /// Time since the start of the recording.
    #[must_use]
    pub fn t(&self) -> Time {
        self.t
    }

    /// Bean temperature.
    #[must_use]
    pub fn bt(&self) -> ThermodynamicTemperature {
        self.bt
    }

    /// Environment temperature.
    #[must_use]
    pub fn et(&self) -> ThermodynamicTemperature {
        self.et
    }

    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.t.get::<minute>()
    }

    #[must_use]
    pub fn bt_celsius(&self) -> f64 {
        self.bt.get::<degree_celsius>()
    }

    #[must_use]
    pub fn et_celsius(&self) -> f64 {
        self.et.get::<degree_celsius>()
    }
}

/// A [`Sample`] paired with the rate of rise derived at that point.
///
/// Only produced by [`derive_ror`](super::derive_ror).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentedSample {
    sample: Sample,
    ror: TemperatureRate,
}

impl AugmentedSample {
    pub(super) fn new(sample: Sample, ror: TemperatureRate) -> Self {
        Self { sample, ror }
    }

    /// The underlying telemetry reading.
    #[must_use]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Bean temperature rate of rise.
    #[must_use]
    pub fn ror(&self) -> TemperatureRate {
        self.ror
    }

    /// Rate of rise in °C/min, the unit plotted on the chart's right axis.
    #[must_use]
    pub fn ror_celsius_per_minute(&self) -> f64 {
        self.ror.celsius_per_minute()
    }
}
