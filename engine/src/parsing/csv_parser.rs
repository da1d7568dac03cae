use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::domain::{DailyRecord, HourlyRecord};

/// Columns the daily table must carry.
const DAILY_COLUMNS: [&str; 16] = [
    "instant",
    "dteday",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

/// Columns the hourly table must carry: the daily set plus `hr`.
const HOURLY_COLUMNS: [&str; 17] = [
    "instant",
    "dteday",
    "season",
    "yr",
    "mnth",
    "hr",
    "holiday",
    "weekday",
    "workingday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

#[derive(Debug, Deserialize)]
struct DailyRow {
    instant: u32,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u8,
    holiday: u8,
    weekday: u8,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

#[derive(Debug, Deserialize)]
struct HourlyRow {
    instant: u32,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u8,
    hr: u8,
    holiday: u8,
    weekday: u8,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

fn verify_header(headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            anyhow::bail!("CSV header is missing column `{}`", column);
        }
    }
    Ok(())
}

fn parse_date(dteday: &str, instant: u32) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(dteday, "%Y-%m-%d")
        .with_context(|| format!("invalid dteday `{}` at instant {}", dteday, instant))
}

fn parse_flag(value: u8, column: &str, instant: u32) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => anyhow::bail!("invalid {} flag `{}` at instant {}", column, other, instant),
    }
}

fn warn_on_count_mismatch(instant: u32, casual: u32, registered: u32, total: u32) {
    if casual + registered != total {
        log::warn!(
            "instant {}: casual {} + registered {} != cnt {}",
            instant,
            casual,
            registered,
            total
        );
    }
}

/// Parses the daily rental table from CSV content.
///
/// Verifies the header carries every expected column (reporting the first
/// missing one by name), then converts each row into a [`DailyRecord`].
/// Row-level failures carry the `instant` of the offending row.
pub fn parse_daily_csv(content: &str) -> Result<Vec<DailyRecord>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers().context("failed to read CSV header")?;
    verify_header(headers, &DAILY_COLUMNS).context("daily table schema mismatch")?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let row: DailyRow =
            result.with_context(|| format!("failed to parse daily row {}", line + 1))?;
        records.push(convert_daily(row)?);
    }

    Ok(records)
}

/// Parses the hourly rental table from CSV content.
///
/// Same contract as [`parse_daily_csv`], with the additional `hr` column
/// checked against the 0-23 range.
pub fn parse_hourly_csv(content: &str) -> Result<Vec<HourlyRecord>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers().context("failed to read CSV header")?;
    verify_header(headers, &HOURLY_COLUMNS).context("hourly table schema mismatch")?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let row: HourlyRow =
            result.with_context(|| format!("failed to parse hourly row {}", line + 1))?;
        records.push(convert_hourly(row)?);
    }

    Ok(records)
}

fn convert_daily(row: DailyRow) -> Result<DailyRecord> {
    warn_on_count_mismatch(row.instant, row.casual, row.registered, row.cnt);

    Ok(DailyRecord {
        instant: row.instant,
        date: parse_date(&row.dteday, row.instant)?,
        season: row.season,
        year: row.yr,
        month: row.mnth,
        holiday: parse_flag(row.holiday, "holiday", row.instant)?,
        weekday: row.weekday,
        working_day: parse_flag(row.workingday, "workingday", row.instant)?,
        weather: row.weathersit,
        temp: row.temp,
        feels_like: row.atemp,
        humidity: row.hum,
        windspeed: row.windspeed,
        casual: row.casual,
        registered: row.registered,
        total: row.cnt,
    })
}

fn convert_hourly(row: HourlyRow) -> Result<HourlyRecord> {
    if row.hr > 23 {
        anyhow::bail!("invalid hr `{}` at instant {}", row.hr, row.instant);
    }
    warn_on_count_mismatch(row.instant, row.casual, row.registered, row.cnt);

    Ok(HourlyRecord {
        instant: row.instant,
        date: parse_date(&row.dteday, row.instant)?,
        season: row.season,
        year: row.yr,
        month: row.mnth,
        hour: row.hr,
        holiday: parse_flag(row.holiday, "holiday", row.instant)?,
        weekday: row.weekday,
        working_day: parse_flag(row.workingday, "workingday", row.instant)?,
        weather: row.weathersit,
        temp: row.temp,
        feels_like: row.atemp,
        humidity: row.hum,
        windspeed: row.windspeed,
        casual: row.casual,
        registered: row.registered,
        total: row.cnt,
    })
}
