//! Roast scope: the data behind a live BT/ET/RoR chart.
//!
//! [`RoastScopeModel`] is the [`twine_core::Model`] adapter. Given optional
//! samples and event times it produces a [`ScopeView`] holding everything a
//! rendering layer needs: the samples with their rate of rise, the three axes,
//! event markers, the reference band, and the latest channel values.
//!
//! [`RoastScope`] wraps the model with the power/start/reset state of the
//! scope's control bar.
//!
//! ```
//! use roast_scope::models::roast::scope::{RoastScopeModel, ScopeInput, Sample};
//! use twine_core::Model;
//!
//! let input = ScopeInput::from_samples(vec![
//!     Sample::from_celsius(0.0, 100.0, 150.0),
//!     Sample::from_celsius(1.0, 110.0, 160.0),
//!     Sample::from_celsius(2.0, 120.0, 170.0),
//! ]);
//! let view = RoastScopeModel::default().call(&input).unwrap();
//!
//! assert!((view.samples[1].ror_celsius_per_minute() - 10.0).abs() < 1e-9);
//! assert_eq!(view.temperature_axis.ticks.len(), 27);
//! ```

mod controls;
mod core;

pub use self::core::{
    AugmentedSample, AxisConfigError, AxisSpec, ChannelReadout, DEFAULT_TOLERANCE, DemoProfile,
    EventKind, EventMarker, FIRST_CRACK_CELSIUS, HeatAdjustment, Projection, ProjectionConfig,
    ReferenceBand, RoastEvents, RorAxisConfig, Sample, TemperatureAxisConfig, TimeAxisConfig,
    demo_profile, derive_ror, eta_to_temperature, first_crack, heat_adjustment, ror_axis,
    temperature_axis, time_axis,
};
pub use controls::{RoastScope, ScopeState};

use std::convert::Infallible;

use twine_core::Model;

/// Input to [`RoastScopeModel`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeInput {
    /// Externally supplied samples; the demo profile is used when `None`.
    pub samples: Option<Vec<Sample>>,

    pub events: RoastEvents,
}

impl ScopeInput {
    /// Input that shows the demo profile with default events.
    #[must_use]
    pub fn demo() -> Self {
        Self::default()
    }

    /// Input that shows the given samples with default events.
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self {
            samples: Some(samples),
            events: RoastEvents::default(),
        }
    }
}

/// Everything needed to draw one frame of the roast chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeView {
    /// Samples with their rate of rise, in input order.
    pub samples: Vec<AugmentedSample>,

    pub time_axis: AxisSpec,
    pub temperature_axis: AxisSpec,
    pub ror_axis: AxisSpec,

    /// Charge, turning point, and drop markers.
    pub markers: [EventMarker; 3],

    pub reference_band: ReferenceBand,
    pub readout: ChannelReadout,
}

/// Builds a [`ScopeView`] from samples and roast events.
///
/// The view is recomputed in full on every call; the work is linear in the
/// number of samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoastScopeModel {
    pub time_axis: TimeAxisConfig,
    pub temperature_axis: TemperatureAxisConfig,
    pub ror_axis: RorAxisConfig,
    pub reference_band: ReferenceBand,
    pub demo: DemoProfile,
}

impl RoastScopeModel {
    /// Builds the view for an explicit sample slice.
    #[must_use]
    pub fn view(&self, samples: &[Sample], events: &RoastEvents) -> ScopeView {
        let augmented = derive_ror(samples);
        let readout = ChannelReadout::latest(&augmented);

        ScopeView {
            time_axis: time_axis(samples, &self.time_axis),
            temperature_axis: temperature_axis(&self.temperature_axis),
            ror_axis: ror_axis(&self.ror_axis),
            markers: events.markers(),
            reference_band: self.reference_band,
            readout,
            samples: augmented,
        }
    }
}

impl Model for RoastScopeModel {
    type Input = ScopeInput;
    type Output = ScopeView;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let view = match &input.samples {
            Some(samples) => self.view(samples, &input.events),
            None => self.view(&self.demo.generate(), &input.events),
        };
        Ok(view)
    }
}
