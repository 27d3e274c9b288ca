use std::collections::BTreeMap;

use crate::types::Route;

/// Per-field anomaly counters accumulated over one cleaning pass.
///
/// Every row increments exactly one outcome per field (valid or one of the
/// counters below), so the counters always reconcile with `total_rows`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleaningStats {
    pub total_rows: usize,
    pub unknown_status_to: usize,
    pub unknown_status_from: usize,
    /// Tally of raw status values that failed to map, keyed by the trimmed
    /// value (`"(blank)"` for empty input).
    pub invalid_status_values: BTreeMap<String, usize>,
    pub max_wind_missing: usize,
    pub max_wind_invalid: usize,
    pub max_wind_trimmed: usize,
}

impl CleaningStats {
    pub fn count_unknown_status(&mut self, route: Route, raw: &str) {
        match route {
            Route::To => self.unknown_status_to += 1,
            Route::From => self.unknown_status_from += 1,
        }
        let key = if raw.is_empty() { "(blank)" } else { raw };
        *self.invalid_status_values.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Combine two accumulators. Associative, so partial stats from split
    /// batches can be folded in any grouping.
    pub fn merge(&mut self, other: &CleaningStats) {
        self.total_rows += other.total_rows;
        self.unknown_status_to += other.unknown_status_to;
        self.unknown_status_from += other.unknown_status_from;
        for (key, count) in &other.invalid_status_values {
            *self.invalid_status_values.entry(key.clone()).or_insert(0) += count;
        }
        self.max_wind_missing += other.max_wind_missing;
        self.max_wind_invalid += other.max_wind_invalid;
        self.max_wind_trimmed += other.max_wind_trimmed;
    }

    /// Print the validation summary. This is the product of a cleaning run,
    /// not diagnostics, so it goes to stdout rather than the log.
    pub fn print_summary(&self) {
        println!("Rows processed: {}", self.total_rows);
        println!("--- Validation summary ---");
        println!("Missing/unknown to_aogashima status: {}", self.unknown_status_to);
        println!("Missing/unknown from_aogashima status: {}", self.unknown_status_from);
        println!("Max wind missing values: {}", self.max_wind_missing);
        println!("Max wind invalid rows: {}", self.max_wind_invalid);
        println!(
            "Trailing parentheses trimmed from wind values: {}",
            self.max_wind_trimmed
        );
        if !self.invalid_status_values.is_empty() {
            println!("Status values needing attention:");
            let mut entries: Vec<(&String, &usize)> = self.invalid_status_values.iter().collect();
            entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (raw_value, count) in entries {
                println!("  {}: {}", raw_value, count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(to: usize, missing: usize) -> CleaningStats {
        let mut s = CleaningStats::default();
        s.total_rows = to + missing;
        for _ in 0..to {
            s.count_unknown_status(Route::To, "休");
        }
        s.max_wind_missing = missing;
        s
    }

    #[test]
    fn blank_status_tallied_under_placeholder_key() {
        let mut s = CleaningStats::default();
        s.count_unknown_status(Route::From, "");
        assert_eq!(s.unknown_status_from, 1);
        assert_eq!(s.invalid_status_values.get("(blank)"), Some(&1));
    }

    #[test]
    fn merge_is_associative() {
        let (a, b, c) = (sample(1, 2), sample(3, 0), sample(0, 5));

        let mut left = a.clone();
        left.merge(&b);
        left.merge(&c);

        let mut bc = b.clone();
        bc.merge(&c);
        let mut right = a.clone();
        right.merge(&bc);

        assert_eq!(left, right);
        assert_eq!(left.total_rows, 11);
        assert_eq!(left.invalid_status_values.get("休"), Some(&4));
    }
}
