use std::fmt;

use anyhow::Result;
use url::Url;

/// Monthly status page, one table of daily rows per `ym=YYYYMM` query.
pub const BASE_URL: &str = "https://tma.main.jp/tokai/aogashima.php";

/// First month with usable data on the site.
pub const START: YearMonth = YearMonth { year: 2021, month: 3 };
/// Last month to fetch.
pub const END: YearMonth = YearMonth { year: 2025, month: 11 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn code(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    fn next(self) -> YearMonth {
        if self.month == 12 {
            YearMonth { year: self.year + 1, month: 1 }
        } else {
            YearMonth { year: self.year, month: self.month + 1 }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// All months from `start` through `end`, inclusive, oldest first.
pub fn iter_year_months(start: YearMonth, end: YearMonth) -> Vec<YearMonth> {
    let mut months = Vec::new();
    let mut current = start;
    while current <= end {
        months.push(current);
        current = current.next();
    }
    months
}

pub fn month_url(ym: YearMonth) -> Result<Url> {
    Ok(Url::parse_with_params(BASE_URL, &[("ym", ym.code())])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_range_is_inclusive_and_wraps_years() {
        let months = iter_year_months(
            YearMonth { year: 2021, month: 11 },
            YearMonth { year: 2022, month: 2 },
        );
        let codes: Vec<String> = months.iter().map(YearMonth::code).collect();
        assert_eq!(codes, ["202111", "202112", "202201", "202202"]);
    }

    #[test]
    fn single_month_range() {
        let ym = YearMonth { year: 2023, month: 6 };
        assert_eq!(iter_year_months(ym, ym), vec![ym]);
    }

    #[test]
    fn month_url_carries_the_ym_query() {
        let url = month_url(YearMonth { year: 2021, month: 3 }).unwrap();
        assert_eq!(url.as_str(), "https://tma.main.jp/tokai/aogashima.php?ym=202103");
    }
}
