use crate::spec::indicator::IndicatorKind;
use thiserror::Error;

/// Errors for the indicator system. Degenerate numeric input (e.g. a flat
/// high/low window in KDJ) is not an error: it surfaces as NaN in the output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("invalid indicator format '{0}', expected name(p1,p2,...) e.g. macd(12,26,9)")]
    InvalidFormat(String),

    #[error("invalid parameter '{token}' in indicator '{spec}', parameters must be numeric")]
    InvalidParameter { spec: String, token: String },

    #[error("{kind} requires exactly {expected} parameter(s), got {got}, e.g. {example}")]
    ArityMismatch {
        kind: IndicatorKind,
        expected: usize,
        got: usize,
        example: &'static str,
    },

    #[error("unknown indicator '{0}', supported: ma(period), macd(fast,slow,signal), rsi(period), kdj(period,k,d), boll(period,multiplier)")]
    UnknownIndicator(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD or YYYYMMDD")]
    InvalidDate(String),

    #[error("price series is not in ascending date order at row {0}")]
    UnorderedSeries(usize),
}
