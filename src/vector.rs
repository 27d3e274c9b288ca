//! Wind-vector projection of cleaned rows for the scatter visualization.
//!
//! Unlike the cleaning pass this is a filtering projection: rows without a
//! recognized direction and parseable speed simply produce no vector.

use crate::types::{CleanRecord, Status};

/// Compass label → degrees, East = 0°, increasing counter-clockwise.
pub fn direction_degrees(label: &str) -> Option<f64> {
    let degrees = match label {
        "東" => 0.0,
        "東北東" => 22.5,
        "北東" => 45.0,
        "北北東" => 67.5,
        "北" => 90.0,
        "北北西" => 112.5,
        "北西" => 135.0,
        "西北西" => 157.5,
        "西" => 180.0,
        "西南西" => 202.5,
        "南西" => 225.0,
        "南南西" => 247.5,
        "南" => 270.0,
        "南南東" => 292.5,
        "南東" => 315.0,
        "東南東" => 337.5,
        _ => return None,
    };
    Some(degrees)
}

/// Cartesian wind vector for one row, bucketed by the to-island status.
#[derive(Debug, Clone, PartialEq)]
pub struct WindVector {
    pub status: Status,
    /// East-west component, positive toward the east.
    pub x: f64,
    /// North-south component, positive toward the north.
    pub y: f64,
    /// Month label "1".."12".
    pub month: String,
}

impl WindVector {
    /// Project one cleaned row. `None` when the direction is unrecognized or
    /// the speed is blank/unparseable; such rows stay in the cleaned CSV but
    /// are excluded from the vector set.
    pub fn from_record(record: &CleanRecord) -> Option<WindVector> {
        let degrees = direction_degrees(&record.wind_direction)?;
        let speed: f64 = record.wind_speed.trim().parse().ok()?;
        let theta = degrees.to_radians();
        Some(WindVector {
            status: record.to_status,
            x: speed * theta.cos(),
            y: speed * theta.sin(),
            month: record.month_label(),
        })
    }
}

/// Per-status trace arrays, shaped for the chart payload.
#[derive(Debug, Default, Clone)]
pub struct StatusBucket {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub month: Vec<String>,
}

/// The three fixed status buckets. Any status outside the fixed set lands in
/// `unknown`.
#[derive(Debug, Default, Clone)]
pub struct VectorBuckets {
    pub operational: StatusBucket,
    pub canceled: StatusBucket,
    pub unknown: StatusBucket,
}

impl VectorBuckets {
    pub fn from_vectors<'a, I>(vectors: I) -> VectorBuckets
    where
        I: IntoIterator<Item = &'a WindVector>,
    {
        let mut buckets = VectorBuckets::default();
        for v in vectors {
            let bucket = match v.status {
                Status::Operational => &mut buckets.operational,
                Status::Canceled => &mut buckets.canceled,
                Status::Unknown => &mut buckets.unknown,
            };
            bucket.x.push(v.x);
            bucket.y.push(v.y);
            bucket.month.push(v.month.clone());
        }
        buckets
    }

    /// Distinct months present across all buckets, sorted numerically.
    pub fn months(&self) -> Vec<String> {
        let mut months: Vec<u32> = [&self.operational, &self.canceled, &self.unknown]
            .iter()
            .flat_map(|b| b.month.iter())
            .filter_map(|m| m.parse().ok())
            .collect();
        months.sort_unstable();
        months.dedup();
        months.into_iter().map(|m| m.to_string()).collect()
    }
}
