use super::Sample;

/// Builds samples from `(minutes, bt °C, et °C)` rows.
pub(crate) fn samples(rows: &[(f64, f64, f64)]) -> Vec<Sample> {
    rows.iter()
        .map(|&(t, bt, et)| Sample::from_celsius(t, bt, et))
        .collect()
}

/// `n` samples every `dt` minutes with BT rising linearly at `rate` °C/min.
///
/// ET tracks 20 °C above BT.
pub(crate) fn bt_ramp(n: usize, dt: f64, bt_start: f64, rate: f64) -> Vec<Sample> {
    (0..n)
        .map(|k| {
            let t = k as f64 * dt;
            let bt = bt_start + rate * t;
            Sample::from_celsius(t, bt, bt + 20.0)
        })
        .collect()
}
