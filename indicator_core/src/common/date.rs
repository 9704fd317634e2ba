use chrono::NaiveDate;

use crate::common::errors::IndicatorError;

/// Parse a date string. Supports "YYYY-MM-DD" and "YYYYMMDD".
pub fn parse_date(s: &str) -> Result<NaiveDate, IndicatorError> {
    let fmt = if s.contains('-') { "%Y-%m-%d" } else { "%Y%m%d" };
    NaiveDate::parse_from_str(s, fmt).map_err(|_| IndicatorError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date("2024-03-05").unwrap(), expected);
        assert_eq!(parse_date("20240305").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(matches!(
            parse_date("03/05/2024"),
            Err(IndicatorError::InvalidDate(_))
        ));
    }
}
