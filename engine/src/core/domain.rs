//! Domain models for bike-sharing rental records.
//!
//! This module provides the core data structures for the two rental tables:
//! one aggregated per calendar day and one per (day, hour) pair. Records are
//! immutable once loaded; aggregation functions take them by reference and
//! all derived values are computed on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekday codes at or above this value count as weekend days.
///
/// The upstream `weekday` column runs 0-6 starting on Sunday; the weekend
/// split used throughout the analysis flags codes 5 and 6.
pub const WEEKEND_START_INDEX: u8 = 5;

/// One day of aggregated rental activity.
///
/// Categorical columns keep their raw upstream codes; use
/// [`crate::core::labels`] to turn them into display labels. The canonical
/// datasets satisfy `casual + registered == total` on every row, which
/// [`counts_consistent`](DailyRecord::counts_consistent) checks.
///
/// # Examples
///
/// ```
/// use bikeshare_insights::core::domain::DailyRecord;
/// use chrono::NaiveDate;
///
/// let record = DailyRecord {
///     instant: 1,
///     date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
///     season: 1,
///     year: 0,
///     month: 1,
///     holiday: false,
///     weekday: 6,
///     working_day: false,
///     weather: 2,
///     temp: 0.344167,
///     feels_like: 0.363625,
///     humidity: 0.805833,
///     windspeed: 0.160446,
///     casual: 331,
///     registered: 654,
///     total: 985,
/// };
///
/// assert!(record.is_weekend());
/// assert!(record.counts_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub instant: u32,
    pub date: NaiveDate,
    pub season: u8,
    pub year: u8,
    pub month: u8,
    pub holiday: bool,
    pub weekday: u8,
    pub working_day: bool,
    pub weather: u8,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub total: u32,
}

impl DailyRecord {
    /// Returns `true` if this day falls on a weekend per the weekday code.
    pub fn is_weekend(&self) -> bool {
        self.weekday >= WEEKEND_START_INDEX
    }

    /// Returns `true` if the rider counts satisfy `casual + registered == total`.
    pub fn counts_consistent(&self) -> bool {
        self.casual + self.registered == self.total
    }
}

/// One hour of rental activity.
///
/// Carries the same calendar and weather columns as [`DailyRecord`] plus the
/// hour of day (`hour`, 0-23).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub instant: u32,
    pub date: NaiveDate,
    pub season: u8,
    pub year: u8,
    pub month: u8,
    pub hour: u8,
    pub holiday: bool,
    pub weekday: u8,
    pub working_day: bool,
    pub weather: u8,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub total: u32,
}

impl HourlyRecord {
    /// Returns `true` if this hour falls on a weekend per the weekday code.
    pub fn is_weekend(&self) -> bool {
        self.weekday >= WEEKEND_START_INDEX
    }

    /// Returns `true` if the rider counts satisfy `casual + registered == total`.
    pub fn counts_consistent(&self) -> bool {
        self.casual + self.registered == self.total
    }
}

/// Both rental tables loaded into memory.
///
/// A `Dataset` is built once by the loader and passed by reference into the
/// aggregation functions; nothing in the engine holds loaded tables in
/// module-level state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl Dataset {
    /// Returns `true` if neither table holds any records.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.hourly.is_empty()
    }

    /// Returns the first and last calendar dates covered by the daily table.
    pub fn daily_date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.daily.iter().map(|r| r.date).min()?;
        let last = self.daily.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}
