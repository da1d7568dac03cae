//! Filter, group-by and reduce operations over rental records.
//!
//! Every function here is a pure function of the record slice it is given.
//! Grouped results come back in ascending key order, never in insertion
//! order, so downstream consumers get a stable axis without sorting.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::domain::{DailyRecord, HourlyRecord};
use crate::core::labels::{
    holiday_label, hour_label, working_day_label, DataYear, Month, Season, UnknownCode, Weather,
    Weekday,
};
use crate::services::error::{AggregationError, AggregationResult};
use crate::time::month::MonthBucket;

/// Columns the engine can group rental records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Season,
    Year,
    Month,
    Hour,
    Weekday,
    Holiday,
    WorkingDay,
    Weather,
}

impl GroupKey {
    /// Returns the upstream column name for this key.
    pub fn column(self) -> &'static str {
        match self {
            GroupKey::Season => "season",
            GroupKey::Year => "yr",
            GroupKey::Month => "mnth",
            GroupKey::Hour => "hr",
            GroupKey::Weekday => "weekday",
            GroupKey::Holiday => "holiday",
            GroupKey::WorkingDay => "workingday",
            GroupKey::Weather => "weathersit",
        }
    }
}

/// Record types the aggregation operations work over.
pub trait RentalRecord {
    /// Table name used in error messages.
    const TABLE: &'static str;

    /// The calendar date the record belongs to.
    fn date(&self) -> NaiveDate;

    /// Total rentals in the record.
    fn total_count(&self) -> u32;

    /// The raw code for a grouping column, or `None` if this record type
    /// does not carry that column.
    fn group_code(&self, key: GroupKey) -> Option<i64>;
}

impl RentalRecord for DailyRecord {
    const TABLE: &'static str = "daily";

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn total_count(&self) -> u32 {
        self.total
    }

    fn group_code(&self, key: GroupKey) -> Option<i64> {
        match key {
            GroupKey::Season => Some(i64::from(self.season)),
            GroupKey::Year => Some(i64::from(self.year)),
            GroupKey::Month => Some(i64::from(self.month)),
            GroupKey::Hour => None,
            GroupKey::Weekday => Some(i64::from(self.weekday)),
            GroupKey::Holiday => Some(i64::from(self.holiday)),
            GroupKey::WorkingDay => Some(i64::from(self.working_day)),
            GroupKey::Weather => Some(i64::from(self.weather)),
        }
    }
}

impl RentalRecord for HourlyRecord {
    const TABLE: &'static str = "hourly";

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn total_count(&self) -> u32 {
        self.total
    }

    fn group_code(&self, key: GroupKey) -> Option<i64> {
        match key {
            GroupKey::Season => Some(i64::from(self.season)),
            GroupKey::Year => Some(i64::from(self.year)),
            GroupKey::Month => Some(i64::from(self.month)),
            GroupKey::Hour => Some(i64::from(self.hour)),
            GroupKey::Weekday => Some(i64::from(self.weekday)),
            GroupKey::Holiday => Some(i64::from(self.holiday)),
            GroupKey::WorkingDay => Some(i64::from(self.working_day)),
            GroupKey::Weather => Some(i64::from(self.weather)),
        }
    }
}

/// Mean total rentals on each side of a boolean partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionMeans {
    pub matched_count: usize,
    pub matched_mean: f64,
    pub unmatched_count: usize,
    pub unmatched_mean: f64,
}

/// Total rentals bucketed into one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub month: MonthBucket,
    pub total: u64,
}

fn code_for<R: RentalRecord>(record: &R, key: GroupKey) -> AggregationResult<i64> {
    record.group_code(key).ok_or(AggregationError::MissingColumn {
        table: R::TABLE,
        column: key.column(),
    })
}

/// Returns the display label for one code value of a grouping column.
///
/// The mapping is total over the defined codes of every column; anything
/// else comes back as an [`UnknownCode`] error instead of a raw passthrough.
pub fn group_label(key: GroupKey, code: i64) -> Result<String, UnknownCode> {
    match key {
        GroupKey::Season => Season::from_code(code).map(|s| s.label().to_string()),
        GroupKey::Year => DataYear::from_code(code).map(|y| y.label().to_string()),
        GroupKey::Month => Month::from_code(code).map(|m| m.label().to_string()),
        GroupKey::Hour => hour_label(code),
        GroupKey::Weekday => Weekday::from_code(code).map(|w| w.label().to_string()),
        GroupKey::Holiday => holiday_label(code).map(str::to_string),
        GroupKey::WorkingDay => working_day_label(code).map(str::to_string),
        GroupKey::Weather => Weather::from_code(code).map(|w| w.label().to_string()),
    }
}

/// Sums total rentals over the records matching a year and, optionally, a
/// month within that year.
///
/// A period that matches no records sums to `Ok(0)`; only an entirely empty
/// record slice is an error.
pub fn total_in_period<R: RentalRecord>(
    records: &[R],
    year: DataYear,
    month: Option<Month>,
) -> AggregationResult<u64> {
    if records.is_empty() {
        return Err(AggregationError::EmptyDataset(format!(
            "{} table has no records",
            R::TABLE
        )));
    }

    let mut total = 0u64;
    for record in records {
        if code_for(record, GroupKey::Year)? != year.code() {
            continue;
        }
        if let Some(month) = month {
            if code_for(record, GroupKey::Month)? != month.code() {
                continue;
            }
        }
        total += u64::from(record.total_count());
    }

    Ok(total)
}

/// Sums total rentals per distinct value of a grouping column.
///
/// The result is ordered by ascending key code. Each record contributes to
/// exactly one bucket, so the bucket totals always add up to the grand total
/// of the input.
pub fn group_sum<R: RentalRecord>(
    records: &[R],
    key: GroupKey,
) -> AggregationResult<Vec<(i64, u64)>> {
    if records.is_empty() {
        return Err(AggregationError::EmptyDataset(format!(
            "{} table has no records to group by `{}`",
            R::TABLE,
            key.column()
        )));
    }

    let mut sums: BTreeMap<i64, u64> = BTreeMap::new();
    for record in records {
        let code = code_for(record, key)?;
        *sums.entry(code).or_insert(0) += u64::from(record.total_count());
    }

    Ok(sums.into_iter().collect())
}

/// Returns the group value whose total rentals are highest.
///
/// Ties are broken deterministically in favor of the lowest key code: the
/// scan goes through the groups in ascending key order and only a strictly
/// greater sum displaces the current best.
pub fn peak_group<R: RentalRecord>(records: &[R], key: GroupKey) -> AggregationResult<i64> {
    let sums = group_sum(records, key)?;

    let mut best: Option<(i64, u64)> = None;
    for (code, total) in sums {
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((code, total)),
        }
    }

    best.map(|(code, _)| code).ok_or_else(|| {
        AggregationError::EmptyDataset(format!("{} table has no records", R::TABLE))
    })
}

/// Splits records by a predicate and computes the mean total rentals on each
/// side.
///
/// Either side ending up with no records is an [`AggregationError::EmptyPartition`]
/// error; a mean over nothing is never reported as `0.0` or NaN.
pub fn mean_by_predicate<R: RentalRecord>(
    records: &[R],
    predicate: impl Fn(&R) -> bool,
) -> AggregationResult<PartitionMeans> {
    if records.is_empty() {
        return Err(AggregationError::EmptyDataset(format!(
            "{} table has no records to partition",
            R::TABLE
        )));
    }

    let mut matched_sum = 0u64;
    let mut matched_count = 0usize;
    let mut unmatched_sum = 0u64;
    let mut unmatched_count = 0usize;

    for record in records {
        if predicate(record) {
            matched_sum += u64::from(record.total_count());
            matched_count += 1;
        } else {
            unmatched_sum += u64::from(record.total_count());
            unmatched_count += 1;
        }
    }

    if matched_count == 0 {
        return Err(AggregationError::EmptyPartition(
            "no records match the predicate".to_string(),
        ));
    }
    if unmatched_count == 0 {
        return Err(AggregationError::EmptyPartition(
            "every record matches the predicate".to_string(),
        ));
    }

    Ok(PartitionMeans {
        matched_count,
        matched_mean: matched_sum as f64 / matched_count as f64,
        unmatched_count,
        unmatched_mean: unmatched_sum as f64 / unmatched_count as f64,
    })
}

/// Buckets records into calendar months from `start` through `end` inclusive
/// and sums total rentals per month.
///
/// The series is chronological and gap free: months inside the range without
/// any records appear with a total of zero. Records dated outside the range
/// are ignored. A `start` after `end` is an [`AggregationError::InvalidRange`]
/// error.
pub fn monthly_series<R: RentalRecord>(
    records: &[R],
    start: MonthBucket,
    end: MonthBucket,
) -> AggregationResult<Vec<MonthTotal>> {
    if start > end {
        return Err(AggregationError::InvalidRange { start, end });
    }
    if records.is_empty() {
        return Err(AggregationError::EmptyDataset(format!(
            "{} table has no records to bucket by month",
            R::TABLE
        )));
    }

    let mut sums: BTreeMap<MonthBucket, u64> = BTreeMap::new();
    for record in records {
        let bucket = MonthBucket::from_date(record.date());
        if bucket < start || bucket > end {
            continue;
        }
        *sums.entry(bucket).or_insert(0) += u64::from(record.total_count());
    }

    let mut series = Vec::with_capacity(start.months_until(end));
    let mut current = start;
    while current <= end {
        series.push(MonthTotal {
            month: current,
            total: sums.get(&current).copied().unwrap_or(0),
        });
        current = current.next();
    }

    Ok(series)
}
