//! CSV persistence for the raw and cleaned record schemas.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;

use crate::types::{CleanRecord, RawRecord, Status};

pub const CLEAN_HEADERS: [&str; 8] = [
    "date",
    "weekday",
    "to_aogashima_status",
    "from_aogashima_status",
    "to_aogashima_operational",
    "from_aogashima_operational",
    "max_wind_direction",
    "max_wind_speed_mps",
];

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory of {:?}", path))?;
    }
    Ok(())
}

pub fn write_raw_csv(path: &Path, records: &[RawRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating raw CSV {:?}", path))?;
    for record in records {
        wtr.serialize(record)
            .with_context(|| format!("writing raw CSV row for {:?}", record.date))?;
    }
    wtr.flush().context("flushing raw CSV")?;
    Ok(())
}

pub fn read_raw_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening raw CSV {:?}", path))?;
    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        let record: RawRecord =
            result.with_context(|| format!("raw CSV parse error at record {}", idx))?;
        records.push(record);
    }
    Ok(records)
}

pub fn write_clean_csv(path: &Path, records: &[CleanRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating clean CSV {:?}", path))?;
    wtr.write_record(CLEAN_HEADERS).context("writing clean CSV header")?;
    for record in records {
        wtr.write_record([
            record.date.format("%Y-%m-%d").to_string().as_str(),
            record.weekday.as_str(),
            record.to_status.as_str(),
            record.from_status.as_str(),
            record.to_status.operational_flag(),
            record.from_status.operational_flag(),
            record.wind_direction.as_str(),
            record.wind_speed.as_str(),
        ])
        .with_context(|| format!("writing clean CSV row for {}", record.date))?;
    }
    wtr.flush().context("flushing clean CSV")?;
    Ok(())
}

/// Clean-CSV row as stored on disk. The operational flags are derived from
/// the status columns on write, so they are ignored on read.
#[derive(Debug, Deserialize)]
struct CleanRow {
    date: String,
    weekday: String,
    to_aogashima_status: String,
    from_aogashima_status: String,
    max_wind_direction: String,
    max_wind_speed_mps: String,
}

pub fn read_clean_csv(path: &Path) -> Result<Vec<CleanRecord>> {
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening clean CSV {:?}", path))?;
    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        let row: CleanRow =
            result.with_context(|| format!("clean CSV parse error at record {}", idx))?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .with_context(|| format!("invalid date {:?} at record {}", row.date, idx))?;
        records.push(CleanRecord {
            date,
            weekday: row.weekday,
            to_status: Status::parse(&row.to_aogashima_status),
            from_status: Status::parse(&row.from_aogashima_status),
            wind_direction: row.max_wind_direction,
            wind_speed: row.max_wind_speed_mps,
        });
    }
    Ok(records)
}
