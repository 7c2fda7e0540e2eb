//! Heat adjustment hints from the current rate of rise.

use std::fmt;

use crate::support::units::{RateOfRise, TemperatureRate};

/// Default dead band around the target rate of rise, °C/min.
pub const DEFAULT_TOLERANCE: f64 = 0.4;

/// Suggested burner change to bring RoR back toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatAdjustment {
    /// RoR is running hot.
    Decrease,
    /// RoR is within tolerance.
    Hold,
    /// RoR is running cold.
    Increase,
}

impl fmt::Display for HeatAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decrease => "lower gas 1, check air +1",
            Self::Hold => "hold",
            Self::Increase => "raise gas 1, check air -1",
        })
    }
}

/// Compares the current RoR with a target, allowing `tolerance` either side.
///
/// Returns `None` when the current rate is not a number (no RoR yet).
#[must_use]
pub fn heat_adjustment(
    current: TemperatureRate,
    target: TemperatureRate,
    tolerance: TemperatureRate,
) -> Option<HeatAdjustment> {
    let current = current.celsius_per_minute();
    if current.is_nan() {
        return None;
    }
    let target = target.celsius_per_minute();
    let tolerance = tolerance.celsius_per_minute();

    Some(if current > target + tolerance {
        HeatAdjustment::Decrease
    } else if current < target - tolerance {
        HeatAdjustment::Increase
    } else {
        HeatAdjustment::Hold
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_minute(value: f64) -> TemperatureRate {
        TemperatureRate::from_celsius_per_minute(value)
    }

    fn adjust(current: f64, target: f64) -> Option<HeatAdjustment> {
        heat_adjustment(
            per_minute(current),
            per_minute(target),
            per_minute(DEFAULT_TOLERANCE),
        )
    }

    #[test]
    fn outside_the_band() {
        assert_eq!(adjust(12.0, 10.0), Some(HeatAdjustment::Decrease));
        assert_eq!(adjust(8.0, 10.0), Some(HeatAdjustment::Increase));
    }

    #[test]
    fn inside_the_band() {
        assert_eq!(adjust(10.0, 10.0), Some(HeatAdjustment::Hold));
        assert_eq!(adjust(10.3, 10.0), Some(HeatAdjustment::Hold));
        assert_eq!(adjust(9.7, 10.0), Some(HeatAdjustment::Hold));
    }

    #[test]
    fn no_rate_yet() {
        assert_eq!(adjust(f64::NAN, 10.0), None);
    }

    #[test]
    fn labels() {
        assert_eq!(HeatAdjustment::Hold.to_string(), "hold");
        assert_eq!(
            HeatAdjustment::Decrease.to_string(),
            "lower gas 1, check air +1"
        );
    }
}
