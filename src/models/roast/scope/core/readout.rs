//! Latest channel values for the side panel.

use std::fmt;

use super::AugmentedSample;

/// Most recent ET, BT, and RoR values.
///
/// All channels read zero when there are no samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelReadout {
    /// Environment temperature, °C.
    pub et: f64,

    /// Bean temperature, °C.
    pub bt: f64,

    /// Rate of rise, °C/min.
    pub ror: f64,
}

impl ChannelReadout {
    /// Reads the last sample of an augmented series.
    #[must_use]
    pub fn latest(samples: &[AugmentedSample]) -> Self {
        samples.last().map_or_else(Self::default, |last| Self {
            et: last.sample().et_celsius(),
            bt: last.sample().bt_celsius(),
            ror: last.ror_celsius_per_minute(),
        })
    }
}

/// Temperatures to whole degrees, RoR to one decimal.
impl fmt::Display for ChannelReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ET {:.0}  BT {:.0}  ΔBT {:.1}",
            self.et.round(),
            self.bt.round(),
            self.ror
        )
    }
}
