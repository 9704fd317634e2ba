use serde::Serialize;

use crate::common::errors::IndicatorError;
use crate::math::{boll::Boll, kdj::Kdj, ma::sma, macd::Macd, rsi::Rsi};
use crate::series::bar::PriceSeries;
use crate::spec::indicator::Indicator;
use crate::spec::parser::ParsedSpec;

/// Result sequences for one indicator, positionally aligned to the input
/// series. NaN marks warm-up or degenerate positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorOutput {
    Line(Vec<f64>),
    Macd {
        dif: Vec<f64>,
        dea: Vec<f64>,
        macd: Vec<f64>,
    },
    Kdj {
        k: Vec<f64>,
        d: Vec<f64>,
        j: Vec<f64>,
    },
    Boll {
        upper: Vec<f64>,
        middle: Vec<f64>,
        lower: Vec<f64>,
    },
}

impl IndicatorOutput {
    /// Keep only the given positions, in order. Used by the range
    /// re-aligner so indicator sequences stay aligned with the price rows.
    pub fn select(&self, keep: &[usize]) -> Self {
        let pick = |v: &Vec<f64>| keep.iter().map(|&i| v[i]).collect();
        match self {
            Self::Line(v) => Self::Line(pick(v)),
            Self::Macd { dif, dea, macd } => Self::Macd {
                dif: pick(dif),
                dea: pick(dea),
                macd: pick(macd),
            },
            Self::Kdj { k, d, j } => Self::Kdj {
                k: pick(k),
                d: pick(d),
                j: pick(j),
            },
            Self::Boll {
                upper,
                middle,
                lower,
            } => Self::Boll {
                upper: pick(upper),
                middle: pick(middle),
                lower: pick(lower),
            },
        }
    }
}

/// Computed outputs for one request, in request order, keyed canonically
/// (e.g. "ma20", "macd").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBatch {
    pub entries: Vec<(String, IndicatorOutput)>,
}

impl IndicatorBatch {
    pub fn get(&self, key: &str) -> Option<&IndicatorOutput> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Parses and type-checks a batch of indicator specs up front, then
/// evaluates them over a price series. A single bad spec fails the whole
/// batch; a partial indicator set would be misleading.
#[derive(Debug)]
pub struct IndicatorEngine {
    indicators: Vec<Indicator>,
}

impl IndicatorEngine {
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, IndicatorError> {
        let indicators = specs
            .iter()
            .map(|s| Indicator::from_parsed(&ParsedSpec::parse(s.as_ref())?))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { indicators })
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Evaluate every indicator over the full series. The series should
    /// already cover the extended window from the lookback planner so that
    /// warm-up NaNs fall before the range the caller will keep.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorBatch {
        let closes = series.closes();
        let entries = self
            .indicators
            .iter()
            .map(|ind| {
                let output = match *ind {
                    Indicator::Ma { period } => IndicatorOutput::Line(sma(&closes, period)),
                    Indicator::Rsi { period } => {
                        IndicatorOutput::Line(Rsi::new(period).compute(&closes))
                    }
                    Indicator::Macd { fast, slow, signal } => {
                        let out = Macd::new(fast, slow, signal).compute(&closes);
                        IndicatorOutput::Macd {
                            dif: out.dif,
                            dea: out.dea,
                            macd: out.macd,
                        }
                    }
                    Indicator::Kdj {
                        period,
                        k_smooth,
                        d_smooth,
                    } => {
                        let out = Kdj::new(period, k_smooth, d_smooth).compute(
                            &series.highs(),
                            &series.lows(),
                            &closes,
                        );
                        IndicatorOutput::Kdj {
                            k: out.k,
                            d: out.d,
                            j: out.j,
                        }
                    }
                    Indicator::Boll { period, multiplier } => {
                        let out = Boll::new(period, multiplier).compute(&closes);
                        IndicatorOutput::Boll {
                            upper: out.upper,
                            middle: out.middle,
                            lower: out.lower,
                        }
                    }
                };
                (ind.key(), output)
            })
            .collect();
        IndicatorBatch { entries }
    }
}
