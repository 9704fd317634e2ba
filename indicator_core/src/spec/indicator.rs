use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::common::errors::IndicatorError;
use crate::spec::parser::ParsedSpec;

/// The closed set of supported indicator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IndicatorKind {
    Ma,
    Macd,
    Rsi,
    Kdj,
    Boll,
}

impl IndicatorKind {
    pub fn arity(&self) -> usize {
        match self {
            Self::Ma | Self::Rsi => 1,
            Self::Boll => 2,
            Self::Macd | Self::Kdj => 3,
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            Self::Ma => "ma(20)",
            Self::Macd => "macd(12,26,9)",
            Self::Rsi => "rsi(14)",
            Self::Kdj => "kdj(9,3,3)",
            Self::Boll => "boll(20,2)",
        }
    }
}

/// A fully validated indicator request with its typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Indicator {
    Ma { period: usize },
    Macd { fast: usize, slow: usize, signal: usize },
    Rsi { period: usize },
    Kdj { period: usize, k_smooth: usize, d_smooth: usize },
    Boll { period: usize, multiplier: f64 },
}

impl Indicator {
    /// Resolve a parsed spec into a typed indicator, enforcing the arity
    /// that the parser deliberately left unchecked.
    pub fn from_parsed(parsed: &ParsedSpec) -> Result<Self, IndicatorError> {
        let kind = IndicatorKind::from_str(&parsed.name)
            .map_err(|_| IndicatorError::UnknownIndicator(parsed.name.clone()))?;

        if parsed.params.len() != kind.arity() {
            return Err(IndicatorError::ArityMismatch {
                kind,
                expected: kind.arity(),
                got: parsed.params.len(),
                example: kind.example(),
            });
        }

        let spec_text = parsed.to_string();
        let period = |v: f64| as_period(&spec_text, v);
        Ok(match kind {
            IndicatorKind::Ma => Self::Ma {
                period: period(parsed.params[0])?,
            },
            IndicatorKind::Macd => Self::Macd {
                fast: period(parsed.params[0])?,
                slow: period(parsed.params[1])?,
                signal: period(parsed.params[2])?,
            },
            IndicatorKind::Rsi => Self::Rsi {
                period: period(parsed.params[0])?,
            },
            IndicatorKind::Kdj => Self::Kdj {
                period: period(parsed.params[0])?,
                k_smooth: period(parsed.params[1])?,
                d_smooth: period(parsed.params[2])?,
            },
            IndicatorKind::Boll => Self::Boll {
                period: period(parsed.params[0])?,
                multiplier: parsed.params[1],
            },
        })
    }

    pub fn from_spec(spec: &str) -> Result<Self, IndicatorError> {
        Self::from_parsed(&ParsedSpec::parse(spec)?)
    }

    pub fn kind(&self) -> IndicatorKind {
        match self {
            Self::Ma { .. } => IndicatorKind::Ma,
            Self::Macd { .. } => IndicatorKind::Macd,
            Self::Rsi { .. } => IndicatorKind::Rsi,
            Self::Kdj { .. } => IndicatorKind::Kdj,
            Self::Boll { .. } => IndicatorKind::Boll,
        }
    }

    /// Result key: MA carries its period ("ma20") since several can appear
    /// in one batch; the others use the bare kind name.
    pub fn key(&self) -> String {
        match self {
            Self::Ma { period } => format!("ma{}", period),
            other => other.kind().to_string(),
        }
    }
}

fn as_period(spec: &str, value: f64) -> Result<usize, IndicatorError> {
    if value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(IndicatorError::InvalidParameter {
            spec: spec.to_string(),
            token: value.to_string(),
        });
    }
    Ok(value as usize)
}
