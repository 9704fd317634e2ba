use chrono::NaiveDate;

use crate::engine::engine::IndicatorBatch;
use crate::series::bar::PriceSeries;

/// Trim a series computed over an extended window (and its indicator batch)
/// back to the caller's requested closed date interval. The same positional
/// mask is applied to the bars and to every indicator sequence, so alignment
/// is preserved.
pub fn restrict(
    series: &PriceSeries,
    batch: &IndicatorBatch,
    start: NaiveDate,
    end: NaiveDate,
) -> (PriceSeries, IndicatorBatch) {
    let keep: Vec<usize> = series
        .bars()
        .iter()
        .enumerate()
        .filter(|(_, bar)| bar.date >= start && bar.date <= end)
        .map(|(i, _)| i)
        .collect();

    let bars = keep.iter().map(|&i| series.bars()[i]).collect();
    let entries = batch
        .entries
        .iter()
        .map(|(key, output)| (key.clone(), output.select(&keep)))
        .collect();

    // Selecting from an ascending series keeps it ascending.
    (
        PriceSeries::from_bars(bars).expect("subset of an ordered series stays ordered"),
        IndicatorBatch { entries },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::engine::{IndicatorEngine, IndicatorOutput};
    use crate::series::bar::Bar;
    use chrono::Duration;

    fn series(days: usize) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..days)
            .map(|i| {
                let close = 100.0 + i as f64;
                Bar {
                    date: start + Duration::days(i as i64),
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 0.0,
                }
            })
            .collect();
        PriceSeries::from_bars(bars).unwrap()
    }

    #[test]
    fn test_restrict_to_last_20_of_60() {
        let extended = series(60);
        let engine = IndicatorEngine::from_specs(&["ma(20)"]).unwrap();
        let batch = engine.compute(&extended);

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(40);
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(59);
        let (trimmed, trimmed_batch) = restrict(&extended, &batch, start, end);

        assert_eq!(trimmed.len(), 20);
        assert_eq!(trimmed.bars()[0].date, start);

        // The kept MA values come from the extended computation, so every
        // visible position is past warm-up and defined.
        let IndicatorOutput::Line(ma) = trimmed_batch.get("ma20").unwrap() else {
            panic!("expected a single line");
        };
        assert_eq!(ma.len(), 20);
        assert!(ma.iter().all(|v| v.is_finite()));
        // Trailing-20 mean of 140..=159 at the first kept row.
        assert_eq!(ma[0], (121.0 + 140.0) / 2.0);
    }

    #[test]
    fn test_restrict_preserves_order_and_bounds() {
        let extended = series(10);
        let batch = IndicatorBatch { entries: vec![] };
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let (trimmed, _) = restrict(&extended, &batch, start, end);
        assert_eq!(trimmed.len(), 5);
        assert_eq!(trimmed.bars()[0].date, start);
        assert_eq!(trimmed.bars()[4].date, end);
    }

    #[test]
    fn test_restrict_empty_when_range_outside_series() {
        let extended = series(5);
        let batch = IndicatorBatch { entries: vec![] };
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let (trimmed, _) = restrict(&extended, &batch, start, end);
        assert!(trimmed.is_empty());
    }
}
