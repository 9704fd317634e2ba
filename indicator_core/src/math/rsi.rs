#[derive(Debug)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// RSI over a simple (non-exponential) average of the trailing `period`
    /// gains and losses. Index `i` needs `period` close-to-close transitions,
    /// so everything before `i == period` is NaN.
    pub fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let mut out = vec![f64::NAN; closes.len()];
        if self.period == 0 {
            return out;
        }
        for i in self.period..closes.len() {
            let mut gain = 0.0;
            let mut loss = 0.0;
            for w in closes[i - self.period..=i].windows(2) {
                let change = w[1] - w[0];
                if change >= 0.0 {
                    gain += change;
                } else {
                    loss += -change;
                }
            }
            let avg_gain = gain / self.period as f64;
            let avg_loss = loss / self.period as f64;

            let rsi = if avg_loss == 0.0 {
                100.0
            } else {
                100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
            };
            out[i] = rsi.clamp(0.0, 100.0);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_length() {
        let closes: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64).cos()).collect();
        let out = Rsi::new(14).compute(&closes);
        for i in 0..14 {
            assert!(out[i].is_nan());
        }
        assert!(out[14].is_finite());
    }

    #[test]
    fn test_bounded_between_0_and_100() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 1.3).sin() * 20.0).collect();
        let out = Rsi::new(14).compute(&closes);
        for v in out.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn test_all_gains_is_100() {
        let closes: Vec<f64> = (10..=30).map(|v| v as f64).collect();
        let out = Rsi::new(14).compute(&closes);
        assert_eq!(out[14], 100.0);
    }

    #[test]
    fn test_all_losses_is_0() {
        let closes: Vec<f64> = (10..=30).rev().map(|v| v as f64).collect();
        let out = Rsi::new(14).compute(&closes);
        assert_eq!(out[14], 0.0);
    }
}
