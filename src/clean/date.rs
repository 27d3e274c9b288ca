use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Weekday symbols, Monday first, matching `NaiveDate::num_days_from_monday`.
pub const WEEKDAY_JA: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}/\d{2}/\d{2})\s*\((.)\)$").expect("date pattern should be valid")
});

/// Parse a raw `"YYYY/MM/DD (曜)"` cell into a date and its weekday symbol.
///
/// The weekday character in the input only has to be present; it is never
/// used. The returned symbol is always recomputed from the parsed date, so
/// the output stays internally consistent even when the source mislabels a
/// day. A malformed cell is a hard error: dates are the row key and cannot
/// be recovered per-row.
pub fn normalize_date(raw: &str) -> Result<(NaiveDate, &'static str)> {
    let caps = DATE_RE
        .captures(raw.trim())
        .with_context(|| format!("invalid date format: {:?}", raw))?;
    let date = NaiveDate::parse_from_str(&caps[1], "%Y/%m/%d")
        .with_context(|| format!("invalid calendar date: {:?}", raw))?;
    let weekday = WEEKDAY_JA[date.weekday().num_days_from_monday() as usize];
    Ok((date, weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_is_recomputed_from_the_date() {
        // 2021-03-01 was a Monday; the claimed weekday is wrong on purpose.
        let (date, weekday) = normalize_date("2021/03/01 (金)").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
        assert_eq!(weekday, "月");
    }

    #[test]
    fn correct_weekday_passes_through_unchanged() {
        let (_, weekday) = normalize_date("2025/11/01 (土)").unwrap();
        assert_eq!(weekday, "土");
    }

    #[test]
    fn space_before_parenthesis_is_optional() {
        assert!(normalize_date("2022/07/15(金)").is_ok());
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(normalize_date("2021-03-01 (月)").is_err());
        assert!(normalize_date("2021/03/01").is_err());
        assert!(normalize_date("").is_err());
    }

    #[test]
    fn impossible_calendar_date_is_an_error() {
        assert!(normalize_date("2021/02/30 (火)").is_err());
    }
}
