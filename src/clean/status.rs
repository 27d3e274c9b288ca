use crate::clean::stats::CleaningStats;
use crate::types::{Route, Status};

/// Map a raw status glyph onto the canonical three-valued status.
///
/// Both circle variants mark an operated sailing and both cross variants a
/// canceled one. Anything else (including blank) becomes `Unknown` and is
/// recorded in `stats`; bad status cells never fail the row.
pub fn normalize_status(raw: &str, route: Route, stats: &mut CleaningStats) -> Status {
    let cleaned = raw.trim();
    match cleaned {
        "〇" | "○" => Status::Operational,
        "×" | "✕" => Status::Canceled,
        other => {
            stats.count_unknown_status(route, other);
            Status::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_circle_glyphs_map_to_operational() {
        let mut stats = CleaningStats::default();
        assert_eq!(normalize_status("〇", Route::To, &mut stats), Status::Operational);
        assert_eq!(normalize_status("○", Route::To, &mut stats), Status::Operational);
        assert_eq!(stats.unknown_status_to, 0);
    }

    #[test]
    fn both_cross_glyphs_map_to_canceled() {
        let mut stats = CleaningStats::default();
        assert_eq!(normalize_status("×", Route::From, &mut stats), Status::Canceled);
        assert_eq!(normalize_status("✕", Route::From, &mut stats), Status::Canceled);
        assert_eq!(stats.unknown_status_from, 0);
    }

    #[test]
    fn blank_counts_against_the_right_route() {
        let mut stats = CleaningStats::default();
        assert_eq!(normalize_status("  ", Route::To, &mut stats), Status::Unknown);
        assert_eq!(normalize_status("", Route::From, &mut stats), Status::Unknown);
        assert_eq!(stats.unknown_status_to, 1);
        assert_eq!(stats.unknown_status_from, 1);
        assert_eq!(stats.invalid_status_values.get("(blank)"), Some(&2));
    }

    #[test]
    fn unrecognized_glyph_is_tallied_by_value() {
        let mut stats = CleaningStats::default();
        assert_eq!(normalize_status(" 欠航 ", Route::To, &mut stats), Status::Unknown);
        assert_eq!(stats.invalid_status_values.get("欠航"), Some(&1));
    }
}
