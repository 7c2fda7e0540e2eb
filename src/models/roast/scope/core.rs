//! Roast telemetry computations.
//!
//! Everything here is a pure function of its inputs: rate-of-rise derivation,
//! axis ranges, event markers, the demo profile, and bean temperature
//! projection. Presentation state lives in [`super::controls`].

mod axis;
mod demo;
mod events;
mod guidance;
mod projection;
mod readout;
mod ror;
mod sample;

#[cfg(test)]
mod test_support;

pub use axis::{
    AxisConfigError, AxisSpec, RorAxisConfig, TemperatureAxisConfig, TimeAxisConfig, ror_axis,
    temperature_axis, time_axis,
};
pub use demo::{DemoProfile, demo_profile};
pub use events::{EventKind, EventMarker, ReferenceBand, RoastEvents};
pub use guidance::{DEFAULT_TOLERANCE, HeatAdjustment, heat_adjustment};
pub use projection::{
    FIRST_CRACK_CELSIUS, Projection, ProjectionConfig, eta_to_temperature, first_crack,
};
pub use readout::ChannelReadout;
pub use ror::derive_ror;
pub use sample::{AugmentedSample, Sample};
