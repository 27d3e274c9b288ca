use once_cell::sync::Lazy;
use regex::Regex;

use crate::clean::stats::CleaningStats;

static WIND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+(\d+(?:\.\d+)?)$").expect("wind pattern should be valid"));
static SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// Normalize a free-text `"<direction> <speed>"` wind cell.
///
/// The source data carries a handful of artifacts: a trailing `)` left over
/// from annotations, IDEOGRAPHIC SPACE between the tokens, and doubled
/// spaces. Those are repaired (and counted) before the pattern match. A cell
/// that still does not parse yields an empty pair and bumps the invalid
/// counter; the speed of a parsed cell is reformatted to one decimal place.
pub fn normalize_max_wind(raw: &str, stats: &mut CleaningStats) -> (String, String) {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        stats.max_wind_missing += 1;
        return (String::new(), String::new());
    }

    let stripped = cleaned.trim_end_matches([' ', ')']).replace('\u{3000}', " ");
    let repaired = SPACES_RE.replace_all(&stripped, " ");
    if repaired != cleaned {
        stats.max_wind_trimmed += 1;
    }

    match WIND_RE.captures(&repaired) {
        Some(caps) => match caps[2].parse::<f64>() {
            Ok(speed) => (caps[1].to_string(), format!("{:.1}", speed)),
            Err(_) => {
                stats.max_wind_invalid += 1;
                (String::new(), String::new())
            }
        },
        None => {
            stats.max_wind_invalid += 1;
            (String::new(), String::new())
        }
    }
}
