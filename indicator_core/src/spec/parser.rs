use std::fmt;

use crate::common::errors::IndicatorError;

/// An indicator spec as written by the caller: a name plus raw numeric
/// parameters, e.g. "macd(12,26,9)" or bare "rsi". Parameter count is not
/// checked here; that belongs to the typed dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSpec {
    pub name: String,
    pub params: Vec<f64>,
}

impl ParsedSpec {
    /// Grammar: `name '(' number (',' number)* ')'` or a bare `name`.
    pub fn parse(spec: &str) -> Result<Self, IndicatorError> {
        let spec = spec.trim();
        let invalid = || IndicatorError::InvalidFormat(spec.to_string());

        let (name, args) = match spec.find('(') {
            None => (spec, None),
            Some(open) => {
                let inner = spec[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(invalid)?;
                (&spec[..open], Some(inner))
            }
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut params = Vec::new();
        if let Some(args) = args {
            if args.trim().is_empty() {
                // "name()" is not in the grammar; parens require parameters.
                return Err(invalid());
            }
            for token in args.split(',') {
                let token = token.trim();
                if token.is_empty() || token.contains(['(', ')']) {
                    // Trailing commas and stray text are shape violations,
                    // not bad parameters.
                    return Err(invalid());
                }
                let value = token
                    .parse::<f64>()
                    .map_err(|_| IndicatorError::InvalidParameter {
                        spec: spec.to_string(),
                        token: token.to_string(),
                    })?;
                params.push(value);
            }
        }

        Ok(Self {
            name: name.to_lowercase(),
            params,
        })
    }
}

impl fmt::Display for ParsedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.name);
        }
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "{}({})", self.name, params.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_params() {
        let spec = ParsedSpec::parse("macd(12,26,9)").unwrap();
        assert_eq!(spec.name, "macd");
        assert_eq!(spec.params, vec![12.0, 26.0, 9.0]);
    }

    #[test]
    fn test_parse_bare_name() {
        let spec = ParsedSpec::parse("rsi").unwrap();
        assert_eq!(spec.name, "rsi");
        assert!(spec.params.is_empty());
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(ParsedSpec::parse("MACD(12, 26, 9)").unwrap().to_string(), "macd(12,26,9)");
        assert_eq!(ParsedSpec::parse("rsi").unwrap().to_string(), "rsi");
    }

    #[test]
    fn test_parse_lowercases_name() {
        let spec = ParsedSpec::parse("BOLL(20, 2)").unwrap();
        assert_eq!(spec.name, "boll");
        assert_eq!(spec.params, vec![20.0, 2.0]);
    }

    #[test]
    fn test_unclosed_paren_is_invalid_format() {
        assert!(matches!(
            ParsedSpec::parse("macd(12,26,9"),
            Err(IndicatorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_name_is_invalid_format() {
        assert!(matches!(
            ParsedSpec::parse("(12)"),
            Err(IndicatorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_parens_is_invalid_format() {
        assert!(matches!(
            ParsedSpec::parse("ma()"),
            Err(IndicatorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_trailing_comma_is_invalid_format() {
        assert!(matches!(
            ParsedSpec::parse("ma(5,)"),
            Err(IndicatorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_stray_text_after_param_is_invalid_format() {
        assert!(matches!(
            ParsedSpec::parse("ma(5)x)"),
            Err(IndicatorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_non_numeric_param() {
        let err = ParsedSpec::parse("ma(abc)").unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::InvalidParameter { ref token, .. } if token == "abc"
        ));
    }
}
