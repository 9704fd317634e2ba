use chrono::{Duration, NaiveDate};

use crate::spec::indicator::Indicator;

/// Trading periods of history an indicator needs before its output is
/// defined across the visible range, with headroom for stable smoothing.
pub fn indicator_periods(indicator: &Indicator) -> usize {
    match *indicator {
        Indicator::Ma { period } => period + 5,
        Indicator::Macd { slow, signal, .. } => slow + signal + 10,
        Indicator::Rsi { period } => period + 10,
        Indicator::Kdj { period, .. } => period + 10,
        Indicator::Boll { period, .. } => period + 10,
    }
}

/// Maximum lookback across a batch of specs; the batch shares one extended
/// fetch window. Specs that fail to parse are skipped: planning is
/// best-effort and the calculator dispatch will report them later.
pub fn required_periods<S: AsRef<str>>(specs: &[S]) -> usize {
    specs
        .iter()
        .filter_map(|s| Indicator::from_spec(s.as_ref()).ok())
        .map(|ind| indicator_periods(&ind))
        .max()
        .unwrap_or(0)
}

/// Extend the requested start date backwards by ceil(periods * 1.5)
/// calendar days. The 1.5 factor over-provisions for weekends and holidays,
/// since the requirement is counted in trading periods.
pub fn extended_start(start: NaiveDate, periods: usize) -> NaiveDate {
    let calendar_days = (periods as i64 * 3).div_ceil(2);
    start - Duration::days(calendar_days)
}
