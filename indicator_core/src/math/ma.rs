/// Simple moving average. The first `period - 1` positions have no full
/// window and hold NaN.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        out[i] = window.iter().sum::<f64>() / period as f64;
    }
    out
}

/// Exponential moving average, seeded with the first value so it is defined
/// from index 0. This matches the convention used by the rest of the system
/// and must not be replaced with a gapped warm-up.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; values.len()];
    }
    let p = period as f64;
    let mut out = Vec::with_capacity(values.len());
    for (i, &value) in values.iter().enumerate() {
        let prev = if i == 0 { value } else { out[i - 1] };
        out.push((2.0 * value + (p - 1.0) * prev) / (p + 1.0));
    }
    out
}
