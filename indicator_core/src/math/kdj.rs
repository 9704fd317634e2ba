#[derive(Debug, Clone)]
pub struct KdjSeries {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
    pub j: Vec<f64>,
}

#[derive(Debug)]
pub struct Kdj {
    rsv_period: usize,
    k_smooth: usize,
    d_smooth: usize,
}

impl Kdj {
    pub fn new(rsv_period: usize, k_smooth: usize, d_smooth: usize) -> Self {
        Self {
            rsv_period,
            k_smooth,
            d_smooth,
        }
    }

    /// K and D are seeded to the first RSV, not a neutral 50. A flat window
    /// (highest == lowest) makes RSV non-finite; it propagates as NaN.
    pub fn compute(&self, highs: &[f64], lows: &[f64], closes: &[f64]) -> KdjSeries {
        debug_assert_eq!(highs.len(), closes.len());
        debug_assert_eq!(lows.len(), closes.len());

        let n = closes.len();
        let mut out = KdjSeries {
            k: vec![f64::NAN; n],
            d: vec![f64::NAN; n],
            j: vec![f64::NAN; n],
        };
        if self.rsv_period == 0 || self.k_smooth == 0 || self.d_smooth == 0 {
            return out;
        }

        let mut k = f64::NAN;
        let mut d = f64::NAN;
        for i in (self.rsv_period - 1)..n {
            let window = i + 1 - self.rsv_period..=i;
            let highest = highs[window.clone()].iter().fold(f64::MIN, |a, &b| a.max(b));
            let lowest = lows[window].iter().fold(f64::MAX, |a, &b| a.min(b));
            let rsv = (closes[i] - lowest) / (highest - lowest) * 100.0;

            if i == self.rsv_period - 1 {
                k = rsv;
                d = rsv;
            } else {
                k = (k * (self.k_smooth as f64 - 1.0) + rsv) / self.k_smooth as f64;
                d = (d * (self.d_smooth as f64 - 1.0) + k) / self.d_smooth as f64;
            }
            out.k[i] = k;
            out.d[i] = d;
            out.j[i] = 3.0 * k - 2.0 * d;
        }
        out
    }
}
