use chrono::NaiveDate;

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_form() {
        let d = parse_date("20261018").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }

    #[test]
    fn parses_dashed_form() {
        let d = parse_date("2026-10-18").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_date("18/10/2026").unwrap_err();
        assert!(err.to_string().contains("18/10/2026"));
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(parse_date("2026-02-30").is_err());
    }
}
