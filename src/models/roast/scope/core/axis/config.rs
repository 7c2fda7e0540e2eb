use crate::support::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};

use super::AxisConfigError;

/// Time axis configuration, in minutes.
///
/// The defaults span 16 minutes with a tick every 2 minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxisConfig {
    base_max: Constrained<f64, NonNegative>,
    step: Constrained<f64, StrictlyPositive>,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self::from_constrained(
            Constrained::new_unchecked(16.0),
            Constrained::new_unchecked(2.0),
        )
    }
}

impl TimeAxisConfig {
    /// Constructs a validated time axis configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_max` is negative or `step` is not strictly positive.
    pub fn new(base_max: f64, step: f64) -> Result<Self, AxisConfigError> {
        let base_max = NonNegative::new(base_max).map_err(AxisConfigError::Bound)?;
        let step = StrictlyPositive::new(step).map_err(AxisConfigError::Step)?;
        Ok(Self::from_constrained(base_max, step))
    }

    /// Constructs a time axis configuration from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        base_max: Constrained<f64, NonNegative>,
        step: Constrained<f64, StrictlyPositive>,
    ) -> Self {
        Self { base_max, step }
    }

    /// Minimum span of the axis, in minutes.
    #[must_use]
    pub fn base_max(&self) -> f64 {
        self.base_max.into_inner()
    }

    /// Distance between ticks, in minutes.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step.into_inner()
    }
}

/// Fixed range configuration shared by the temperature and RoR axes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FixedRange {
    min: f64,
    max: f64,
    step: Constrained<f64, StrictlyPositive>,
}

impl FixedRange {
    fn new(min: f64, max: f64, step: f64) -> Result<Self, AxisConfigError> {
        if min.is_nan() || max.is_nan() {
            return Err(AxisConfigError::Bound(ConstraintError::NotANumber));
        }
        if max < min {
            return Err(AxisConfigError::Inverted { min, max });
        }
        let step = StrictlyPositive::new(step).map_err(AxisConfigError::Step)?;
        Ok(Self { min, max, step })
    }

    fn new_unchecked(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step: Constrained::new_unchecked(step),
        }
    }
}

/// Temperature axis configuration, in °C.
///
/// The defaults run from 0 to 260 °C with a tick every 10 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureAxisConfig(FixedRange);

impl Default for TemperatureAxisConfig {
    fn default() -> Self {
        Self(FixedRange::new_unchecked(0.0, 260.0, 10.0))
    }
}

impl TemperatureAxisConfig {
    /// Constructs a validated temperature axis configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is `NaN`, `max < min`, or `step` is not strictly positive.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, AxisConfigError> {
        FixedRange::new(min, max, step).map(Self)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.0.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.max
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.0.step.into_inner()
    }
}

/// Rate-of-rise axis configuration, in °C/min.
///
/// The defaults run from 0 to 50 °C/min with a tick every 10 °C/min.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RorAxisConfig(FixedRange);

impl Default for RorAxisConfig {
    fn default() -> Self {
        Self(FixedRange::new_unchecked(0.0, 50.0, 10.0))
    }
}

impl RorAxisConfig {
    /// Constructs a validated rate-of-rise axis configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is `NaN`, `max < min`, or `step` is not strictly positive.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, AxisConfigError> {
        FixedRange::new(min, max, step).map(Self)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.0.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.max
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.0.step.into_inner()
    }
}
