//! Distribution summaries and histogram feeds for the rental tables.
//!
//! The histogram feeds mirror the dashboard view: rentals accumulated over a
//! feature, split into a working-day series and an off-day series, each
//! normalized to percent of its own partition so the two can be overlaid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::domain::HourlyRecord;
use crate::services::aggregation::{GroupKey, RentalRecord};
use crate::services::error::{AggregationError, AggregationResult};

/// Summary statistics for a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

/// Computes count, mean, median, standard deviation, min, max and sum.
///
/// An empty value slice is an [`AggregationError::EmptyDataset`] error, not
/// a row of zeros.
pub fn compute_stats(values: &[f64]) -> AggregationResult<DistributionStats> {
    if values.is_empty() {
        return Err(AggregationError::EmptyDataset(
            "no values to summarize".to_string(),
        ));
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    Ok(DistributionStats {
        count,
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[count - 1],
        sum,
    })
}

/// One bar of a feature distribution, split by working day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBin {
    pub label: String,
    pub midpoint: f64,
    /// Rentals in this bin on working days.
    pub working_total: u64,
    /// Rentals in this bin on non-working days.
    pub off_total: u64,
    /// Share of all working-day rentals falling in this bin, in percent.
    pub working_percent: f64,
    /// Share of all off-day rentals falling in this bin, in percent.
    pub off_percent: f64,
}

/// Rentals distributed over one feature, percent-normalized per partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDistribution {
    pub feature: String,
    pub bins: Vec<DistributionBin>,
}

pub(crate) fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn normalize(feature: &str, mut bins: Vec<DistributionBin>) -> FeatureDistribution {
    let working_grand: u64 = bins.iter().map(|b| b.working_total).sum();
    let off_grand: u64 = bins.iter().map(|b| b.off_total).sum();

    for bin in &mut bins {
        bin.working_percent = percent_of(bin.working_total, working_grand);
        bin.off_percent = percent_of(bin.off_total, off_grand);
    }

    FeatureDistribution {
        feature: feature.to_string(),
        bins,
    }
}

/// Distributes rentals over the distinct codes of an ordinal column.
///
/// One bin per code present in the data, in ascending code order.
pub fn coded_distribution(
    records: &[HourlyRecord],
    key: GroupKey,
) -> AggregationResult<FeatureDistribution> {
    if records.is_empty() {
        return Err(AggregationError::EmptyDataset(format!(
            "hourly table has no records to group by `{}`",
            key.column()
        )));
    }

    let mut totals: BTreeMap<i64, (u64, u64)> = BTreeMap::new();
    for record in records {
        let code = record
            .group_code(key)
            .ok_or(AggregationError::MissingColumn {
                table: HourlyRecord::TABLE,
                column: key.column(),
            })?;
        let entry = totals.entry(code).or_insert((0, 0));
        if record.working_day {
            entry.0 += u64::from(record.total);
        } else {
            entry.1 += u64::from(record.total);
        }
    }

    let bins = totals
        .into_iter()
        .map(|(code, (working, off))| DistributionBin {
            label: code.to_string(),
            midpoint: code as f64,
            working_total: working,
            off_total: off,
            working_percent: 0.0,
            off_percent: 0.0,
        })
        .collect();

    Ok(normalize(key.column(), bins))
}

/// Distributes rentals over a continuous feature using equal-width bins.
///
/// Bins that receive no records are dropped from the result. If every record
/// carries the same value a single bin covers it. A bin count of zero is an
/// [`AggregationError::InvalidBinCount`] error.
pub fn binned_distribution(
    records: &[HourlyRecord],
    feature: &str,
    get_value: impl Fn(&HourlyRecord) -> f64,
    n_bins: usize,
) -> AggregationResult<FeatureDistribution> {
    if n_bins == 0 {
        return Err(AggregationError::InvalidBinCount(n_bins));
    }
    if records.is_empty() {
        return Err(AggregationError::EmptyDataset(format!(
            "hourly table has no records to bin by `{}`",
            feature
        )));
    }

    let values: Vec<f64> = records.iter().map(|r| get_value(r)).collect();
    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min_val == max_val {
        let mut working = 0u64;
        let mut off = 0u64;
        for record in records {
            if record.working_day {
                working += u64::from(record.total);
            } else {
                off += u64::from(record.total);
            }
        }
        let bins = vec![DistributionBin {
            label: format!("{} [{:.2}]", feature, min_val),
            midpoint: min_val,
            working_total: working,
            off_total: off,
            working_percent: 0.0,
            off_percent: 0.0,
        }];
        return Ok(normalize(feature, bins));
    }

    let bin_width = (max_val - min_val) / n_bins as f64;
    let mut accum: Vec<(u64, u64)> = vec![(0, 0); n_bins];

    for (record, value) in records.iter().zip(&values) {
        let mut idx = ((value - min_val) / bin_width).floor() as usize;
        if idx >= n_bins {
            idx = n_bins - 1;
        }
        if record.working_day {
            accum[idx].0 += u64::from(record.total);
        } else {
            accum[idx].1 += u64::from(record.total);
        }
    }

    let bins = accum
        .into_iter()
        .enumerate()
        .filter(|&(_, (working, off))| working > 0 || off > 0)
        .map(|(idx, (working, off))| {
            let bin_start = min_val + idx as f64 * bin_width;
            let bin_end = min_val + (idx + 1) as f64 * bin_width;
            DistributionBin {
                label: format!("{} [{:.2}-{:.2}]", feature, bin_start, bin_end),
                midpoint: (bin_start + bin_end) / 2.0,
                working_total: working,
                off_total: off,
                working_percent: 0.0,
                off_percent: 0.0,
            }
        })
        .collect();

    Ok(normalize(feature, bins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hourly(hour: u8, working_day: bool, temp: f64, total: u32) -> HourlyRecord {
        HourlyRecord {
            instant: 0,
            date: NaiveDate::from_ymd_opt(2011, 6, 1).unwrap(),
            season: 2,
            year: 0,
            month: 6,
            hour,
            holiday: false,
            weekday: if working_day { 2 } else { 6 },
            working_day,
            weather: 1,
            temp,
            feels_like: temp,
            humidity: 0.5,
            windspeed: 0.2,
            casual: total / 3,
            registered: total - total / 3,
            total,
        }
    }

    #[test]
    fn test_compute_stats() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = compute_stats(&values).unwrap();

        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.sum, 15.0);
        assert!((stats.std_dev - std::f64::consts::SQRT_2).abs() < 0.001);
    }

    #[test]
    fn test_compute_stats_even_count_median() {
        let values = vec![4.0, 1.0, 3.0, 2.0];
        let stats = compute_stats(&values).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_compute_stats_empty_is_error() {
        let err = compute_stats(&[]).unwrap_err();
        assert!(matches!(err, AggregationError::EmptyDataset(_)));
    }

    #[test]
    fn coded_distribution_normalizes_per_partition() {
        let records = vec![
            hourly(8, true, 0.5, 300),
            hourly(17, true, 0.5, 100),
            hourly(8, false, 0.5, 50),
            hourly(17, false, 0.5, 150),
        ];

        let dist = coded_distribution(&records, GroupKey::Hour).unwrap();
        assert_eq!(dist.feature, "hr");
        assert_eq!(dist.bins.len(), 2);

        let eight = &dist.bins[0];
        assert_eq!(eight.label, "8");
        assert_eq!(eight.working_total, 300);
        assert_eq!(eight.off_total, 50);
        assert_eq!(eight.working_percent, 75.0);
        assert_eq!(eight.off_percent, 25.0);

        let seventeen = &dist.bins[1];
        assert_eq!(seventeen.working_percent, 25.0);
        assert_eq!(seventeen.off_percent, 75.0);
    }

    #[test]
    fn binned_distribution_covers_value_range() {
        let records = vec![
            hourly(1, true, 0.0, 100),
            hourly(2, true, 0.45, 200),
            hourly(3, true, 1.0, 300),
            hourly(4, false, 0.95, 60),
        ];

        let dist = binned_distribution(&records, "temp", |r| r.temp, 10).unwrap();

        // 0.0 and 0.45 fall in distinct bins; 1.0 and 0.95 share the last bin.
        assert_eq!(dist.bins.len(), 3);
        let last = dist.bins.last().unwrap();
        assert_eq!(last.working_total, 300);
        assert_eq!(last.off_total, 60);
        assert_eq!(last.off_percent, 100.0);
    }

    #[test]
    fn binned_distribution_single_value_yields_one_bin() {
        let records = vec![hourly(1, true, 0.5, 100), hourly(2, false, 0.5, 40)];
        let dist = binned_distribution(&records, "windspeed", |_| 0.5, 10).unwrap();

        assert_eq!(dist.bins.len(), 1);
        assert_eq!(dist.bins[0].working_total, 100);
        assert_eq!(dist.bins[0].off_total, 40);
    }

    #[test]
    fn binned_distribution_empty_is_error() {
        let err = binned_distribution(&[], "temp", |r| r.temp, 10).unwrap_err();
        assert!(matches!(err, AggregationError::EmptyDataset(_)));
    }

    #[test]
    fn binned_distribution_zero_bins_is_error() {
        let records = vec![hourly(1, true, 0.2, 100), hourly(2, false, 0.8, 40)];
        let err = binned_distribution(&records, "temp", |r| r.temp, 0).unwrap_err();
        assert!(matches!(err, AggregationError::InvalidBinCount(0)));
    }
}
