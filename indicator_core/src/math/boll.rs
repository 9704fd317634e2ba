use crate::math::ma::sma;

#[derive(Debug, Clone)]
pub struct BollSeries {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

#[derive(Debug)]
pub struct Boll {
    period: usize,
    multiplier: f64,
}

impl Boll {
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }

    /// Middle band is the SMA; the envelope uses the population standard
    /// deviation of the trailing window around that mean.
    pub fn compute(&self, closes: &[f64]) -> BollSeries {
        let n = closes.len();
        let middle = sma(closes, self.period);
        let mut upper = vec![f64::NAN; n];
        let mut lower = vec![f64::NAN; n];

        for i in 0..n {
            let mid = middle[i];
            if mid.is_nan() {
                continue;
            }
            let window = &closes[i + 1 - self.period..=i];
            let variance =
                window.iter().map(|&x| (x - mid).powi(2)).sum::<f64>() / self.period as f64;
            let std_dev = variance.sqrt();
            upper[i] = mid + self.multiplier * std_dev;
            lower[i] = mid - self.multiplier * std_dev;
        }

        BollSeries {
            upper,
            middle,
            lower,
        }
    }
}
