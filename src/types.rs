use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One daily row exactly as scraped from the monthly status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub to_aogashima: String,
    pub from_aogashima: String,
    pub max_wind: String,
}

/// Canonical operational status of one sailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Operational,
    Canceled,
    Unknown,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Operational => "operational",
            Status::Canceled => "canceled",
            Status::Unknown => "unknown",
        }
    }

    /// Parse a canonical label back from the cleaned CSV. Anything
    /// unrecognized collapses to `Unknown`.
    pub fn parse(s: &str) -> Status {
        match s {
            "operational" => Status::Operational,
            "canceled" => Status::Canceled,
            _ => Status::Unknown,
        }
    }

    /// Tri-state operational flag as written to the cleaned CSV:
    /// `"1"`, `"0"`, or blank when the status is unknown.
    pub fn operational_flag(self) -> &'static str {
        match self {
            Status::Operational => "1",
            Status::Canceled => "0",
            Status::Unknown => "",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ferry direction: to the island or back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    To,
    From,
}

impl Route {
    pub fn parse(s: &str) -> Option<Route> {
        match s {
            "to" => Some(Route::To),
            "from" => Some(Route::From),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Route::To => "to",
            Route::From => "from",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully normalized daily row. The only persisted artifact of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub date: NaiveDate,
    /// Weekday symbol recomputed from `date`, never taken from the input.
    pub weekday: String,
    pub to_status: Status,
    pub from_status: Status,
    /// One of the 16 compass labels, or empty when the reading was unusable.
    pub wind_direction: String,
    /// Speed in m/s formatted to one decimal, or empty.
    pub wind_speed: String,
}

impl CleanRecord {
    pub fn status_for(&self, route: Route) -> Status {
        match route {
            Route::To => self.to_status,
            Route::From => self.from_status,
        }
    }

    /// Month of the date, rendered without a leading zero ("1".."12").
    pub fn month_label(&self) -> String {
        self.date.month().to_string()
    }
}
