use crate::math::ma::ema;

#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub dif: Vec<f64>,
    pub dea: Vec<f64>,
    pub macd: Vec<f64>,
}

#[derive(Debug)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    pub fn compute(&self, closes: &[f64]) -> MacdSeries {
        let n = closes.len();
        let fast = ema(closes, self.fast_period);
        let slow = ema(closes, self.slow_period);

        // EMA has no warm-up gap, so DIF is defined at every index.
        let dif: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();

        // DEA only becomes meaningful once the slow EMA has seen a full
        // period: NaN before slow_period-1, then an EMA over the DIF suffix
        // seeded with the first value of that suffix.
        let mut dea = vec![f64::NAN; n];
        let start = self.slow_period.saturating_sub(1);
        if start < n {
            let smoothed = ema(&dif[start..], self.signal_period);
            dea[start..].copy_from_slice(&smoothed);
        }

        let macd: Vec<f64> = dif
            .iter()
            .zip(&dea)
            .map(|(d, e)| if e.is_nan() { f64::NAN } else { (d - e) * 2.0 })
            .collect();

        MacdSeries { dif, dea, macd }
    }
}
