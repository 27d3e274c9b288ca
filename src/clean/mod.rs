//! Normalization of raw scraped rows into the canonical record schema.
//!
//! The pass is order-preserving and never drops rows: a field that cannot be
//! normalized becomes `unknown`/empty and is counted in [`CleaningStats`].
//! Only a malformed date aborts, since the date is the row key.

pub mod date;
pub mod stats;
pub mod status;
pub mod wind;

use anyhow::Result;

pub use date::normalize_date;
pub use stats::CleaningStats;
pub use status::normalize_status;
pub use wind::normalize_max_wind;

use crate::types::{CleanRecord, RawRecord, Route};

/// Normalize a batch of raw rows, returning the cleaned rows in input order
/// together with the anomaly counters for the whole pass.
pub fn clean_records(rows: &[RawRecord]) -> Result<(Vec<CleanRecord>, CleaningStats)> {
    let mut stats = CleaningStats::default();
    let mut cleaned = Vec::with_capacity(rows.len());

    for raw in rows {
        stats.total_rows += 1;
        let (date, weekday) = normalize_date(&raw.date)?;
        let to_status = normalize_status(&raw.to_aogashima, Route::To, &mut stats);
        let from_status = normalize_status(&raw.from_aogashima, Route::From, &mut stats);
        let (wind_direction, wind_speed) = normalize_max_wind(&raw.max_wind, &mut stats);

        cleaned.push(CleanRecord {
            date,
            weekday: weekday.to_string(),
            to_status,
            from_status,
            wind_direction,
            wind_speed,
        });
    }

    Ok((cleaned, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn raw(date: &str, to: &str, from: &str, wind: &str) -> RawRecord {
        RawRecord {
            date: date.to_string(),
            to_aogashima: to.to_string(),
            from_aogashima: from.to_string(),
            max_wind: wind.to_string(),
        }
    }

    #[test]
    fn row_count_and_order_are_preserved() {
        let rows = vec![
            raw("2021/03/01 (月)", "〇", "〇", "北 12.0"),
            raw("2021/03/02 (火)", "", "調整中", "欠測"),
            raw("2021/03/03 (水)", "×", "✕", ""),
        ];
        let (cleaned, stats) = clean_records(&rows).unwrap();

        assert_eq!(cleaned.len(), rows.len());
        assert_eq!(stats.total_rows, rows.len());
        assert_eq!(cleaned[0].to_status, Status::Operational);
        assert_eq!(cleaned[1].to_status, Status::Unknown);
        assert_eq!(cleaned[1].from_status, Status::Unknown);
        assert_eq!(cleaned[2].from_status, Status::Canceled);
        // Bad fields become placeholders, never dropped rows.
        assert_eq!(cleaned[1].wind_direction, "");
        assert_eq!(cleaned[1].wind_speed, "");
    }

    #[test]
    fn stats_reconcile_with_row_count() {
        let rows = vec![
            raw("2021/03/01 (月)", "〇", "", "北 12.0"),
            raw("2021/03/02 (火)", "休", "○", ""),
        ];
        let (_, stats) = clean_records(&rows).unwrap();

        assert_eq!(stats.total_rows, 2);
        assert_eq!(stats.unknown_status_to + stats.unknown_status_from, 2);
        assert_eq!(stats.max_wind_missing, 1);
        let tallied: usize = stats.invalid_status_values.values().sum();
        assert_eq!(tallied, 2);
    }

    #[test]
    fn malformed_date_fails_the_whole_pass() {
        let rows = vec![
            raw("2021/03/01 (月)", "〇", "〇", "北 12.0"),
            raw("3月2日", "〇", "〇", "北 12.0"),
        ];
        assert!(clean_records(&rows).is_err());
    }
}
