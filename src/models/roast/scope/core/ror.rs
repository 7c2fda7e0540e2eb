//! Rate-of-rise derivation.

use uom::{ConstZero, si::f64::Time};

use crate::support::units::{TemperatureDifference, TemperatureRate};

use super::{AugmentedSample, Sample};

/// Augments each sample with its bean temperature rate of rise.
///
/// Interior points use a centered difference over their two neighbours:
///
/// ```text
/// RoR[i] = (BT[i+1] - BT[i-1]) / (t[i+1] - t[i-1])
/// ```
///
/// The first and last samples always get a zero rate, which draws a flat edge
/// at both ends of the RoR curve. A zero time span between neighbours (duplicate
/// timestamps) also yields zero instead of dividing by zero.
///
/// The output has the same length and order as `samples`.
#[must_use]
pub fn derive_ror(samples: &[Sample]) -> Vec<AugmentedSample> {
    let last = samples.len().saturating_sub(1);

    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            if i == 0 || i == last {
                return AugmentedSample::new(sample, TemperatureRate::ZERO);
            }
            let (prev, next) = (&samples[i - 1], &samples[i + 1]);
            AugmentedSample::new(sample, centered_difference(prev, next))
        })
        .collect()
}

fn centered_difference(prev: &Sample, next: &Sample) -> TemperatureRate {
    let span = next.t() - prev.t();
    if span == Time::ZERO {
        log::trace!("zero time span around t = {:?}, rate of rise set to zero", prev.t());
        return TemperatureRate::ZERO;
    }
    next.bt().minus(prev.bt()) / span
}
