use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::errors::IndicatorError;

/// One trading period of OHLCV data, keyed by date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// A price series in ascending chronological order. Ascending order is the
/// one internal convention; callers holding newest-first data must reverse
/// at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn from_bars(bars: Vec<Bar>) -> Result<Self, IndicatorError> {
        for (i, pair) in bars.windows(2).enumerate() {
            if pair[0].date >= pair[1].date {
                return Err(IndicatorError::UnorderedSeries(i + 1));
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }
}
