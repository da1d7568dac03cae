//! Dashboard report assembly.
//!
//! Gathers every figure the rentals dashboard presents into one serializable
//! structure: the featured-month headline, the peak rental hour, weekday
//! versus weekend means, chart feeds, category shares, weather statistics
//! and the optional correlation table. The assembly recomputes everything
//! from the full tables on each call.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::domain::Dataset;
use crate::core::labels::{hour_label, DataYear, Month, UnknownCode};
use crate::services::aggregation::{
    group_label, group_sum, mean_by_predicate, monthly_series, peak_group, total_in_period,
    GroupKey, MonthTotal,
};
use crate::services::distributions::{
    binned_distribution, coded_distribution, compute_stats, percent_of, DistributionStats,
    FeatureDistribution,
};
use crate::services::error::{AggregationError, AggregationResult};
use crate::services::insights::{weather_correlations, CorrelationEntry};
use crate::time::month::MonthBucket;

/// Options controlling report assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    pub featured_year: DataYear,
    pub featured_month: Month,
    pub include_daily_trend: bool,
    pub include_correlations: bool,
    pub histogram_bins: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            featured_year: DataYear::Y2011,
            featured_month: Month::January,
            include_daily_trend: true,
            include_correlations: true,
            histogram_bins: 10,
        }
    }
}

/// Row counts and content fingerprints of the loaded source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub daily_checksum: String,
    pub hourly_checksum: String,
}

/// Total rentals for the configured month of the configured year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedMonthTotal {
    pub year: String,
    pub month: String,
    pub total: u64,
}

/// The hour of day with the most rentals over the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHour {
    pub hour: i64,
    pub label: String,
    pub total: u64,
}

/// Mean daily rentals on weekdays and on weekend days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekendComparison {
    pub weekday_mean: f64,
    pub weekday_days: usize,
    pub weekend_mean: f64,
    pub weekend_days: usize,
}

/// One point of the daily rental trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total: u32,
}

/// Total rentals for one hour of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotal {
    pub hour: i64,
    pub label: String,
    pub total: u64,
}

/// One month's share of the rentals across the daily table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthShare {
    pub month: String,
    pub total: u64,
    pub percent: f64,
}

/// One labeled slice of a categorical breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub code: i64,
    pub label: String,
    pub total: u64,
    pub percent: f64,
}

/// Rentals broken down over the values of one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub column: String,
    pub entries: Vec<ShareEntry>,
}

/// Summary statistics for one named variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableStats {
    pub variable: String,
    pub stats: DistributionStats,
}

/// Everything the dashboard presents, computed once from the loaded tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub source: SourceSummary,
    pub featured_month: FeaturedMonthTotal,
    pub peak_hour: PeakHour,
    pub weekday_weekend: WeekendComparison,
    pub daily_trend: Option<Vec<TrendPoint>>,
    pub hourly_totals: Vec<HourTotal>,
    pub monthly_distribution: Vec<MonthShare>,
    pub monthly_series: Vec<MonthTotal>,
    pub feature_distributions: Vec<FeatureDistribution>,
    pub category_shares: Vec<CategoryShare>,
    pub weather_stats: Vec<VariableStats>,
    pub correlations: Option<Vec<CorrelationEntry>>,
    pub conclusions: Vec<String>,
}

/// Assembles the full dashboard report from the loaded dataset.
///
/// Fails loudly on degenerate inputs: either table being empty, a group code
/// without a defined label, or an hourly partition with no records all
/// surface as [`AggregationError`]s.
pub fn build_report(
    dataset: &Dataset,
    source: SourceSummary,
    options: &ReportOptions,
) -> AggregationResult<DashboardReport> {
    if dataset.daily.is_empty() {
        return Err(AggregationError::EmptyDataset(
            "daily table has no records".to_string(),
        ));
    }
    if dataset.hourly.is_empty() {
        return Err(AggregationError::EmptyDataset(
            "hourly table has no records".to_string(),
        ));
    }

    let featured_total = total_in_period(
        &dataset.daily,
        options.featured_year,
        Some(options.featured_month),
    )?;
    let featured_month = FeaturedMonthTotal {
        year: options.featured_year.label().to_string(),
        month: options.featured_month.label().to_string(),
        total: featured_total,
    };

    let hour_sums = group_sum(&dataset.hourly, GroupKey::Hour)?;
    let peak_code = peak_group(&dataset.hourly, GroupKey::Hour)?;
    let peak_total = hour_sums
        .iter()
        .find(|&&(code, _)| code == peak_code)
        .map(|&(_, total)| total)
        .unwrap_or(0);
    let peak_hour = PeakHour {
        hour: peak_code,
        label: hour_label(peak_code)?,
        total: peak_total,
    };

    let means = mean_by_predicate(&dataset.daily, |r| r.is_weekend())?;
    let weekday_weekend = WeekendComparison {
        weekday_mean: means.unmatched_mean,
        weekday_days: means.unmatched_count,
        weekend_mean: means.matched_mean,
        weekend_days: means.matched_count,
    };

    let daily_trend = if options.include_daily_trend {
        let mut points: Vec<TrendPoint> = dataset
            .daily
            .iter()
            .map(|r| TrendPoint {
                date: r.date,
                total: r.total,
            })
            .collect();
        points.sort_by_key(|p| p.date);
        Some(points)
    } else {
        None
    };

    let hourly_totals = hour_sums
        .iter()
        .map(|&(hour, total)| {
            Ok(HourTotal {
                hour,
                label: hour_label(hour)?,
                total,
            })
        })
        .collect::<Result<Vec<_>, UnknownCode>>()?;

    let month_sums = group_sum(&dataset.daily, GroupKey::Month)?;
    let month_grand: u64 = month_sums.iter().map(|&(_, total)| total).sum();
    let monthly_distribution = month_sums
        .iter()
        .map(|&(code, total)| {
            Ok(MonthShare {
                month: group_label(GroupKey::Month, code)?,
                total,
                percent: percent_of(total, month_grand),
            })
        })
        .collect::<Result<Vec<_>, UnknownCode>>()?;

    let (first_date, last_date) = dataset.daily_date_span().ok_or_else(|| {
        AggregationError::EmptyDataset("daily table has no records".to_string())
    })?;
    let monthly_series = monthly_series(
        &dataset.daily,
        MonthBucket::from_date(first_date),
        MonthBucket::from_date(last_date),
    )?;

    let mut feature_distributions = Vec::new();
    for key in [GroupKey::Month, GroupKey::Hour, GroupKey::Weekday] {
        feature_distributions.push(coded_distribution(&dataset.hourly, key)?);
    }
    let bins = options.histogram_bins;
    feature_distributions.push(binned_distribution(
        &dataset.hourly,
        "temp",
        |r| r.temp,
        bins,
    )?);
    feature_distributions.push(binned_distribution(
        &dataset.hourly,
        "feels_like",
        |r| r.feels_like,
        bins,
    )?);
    feature_distributions.push(binned_distribution(
        &dataset.hourly,
        "humidity",
        |r| r.humidity,
        bins,
    )?);
    feature_distributions.push(binned_distribution(
        &dataset.hourly,
        "windspeed",
        |r| r.windspeed,
        bins,
    )?);
    feature_distributions.push(binned_distribution(
        &dataset.hourly,
        "casual",
        |r| f64::from(r.casual),
        bins,
    )?);
    feature_distributions.push(binned_distribution(
        &dataset.hourly,
        "registered",
        |r| f64::from(r.registered),
        bins,
    )?);

    let mut category_shares = Vec::new();
    for key in [
        GroupKey::Season,
        GroupKey::Year,
        GroupKey::Holiday,
        GroupKey::WorkingDay,
        GroupKey::Weather,
    ] {
        let sums = group_sum(&dataset.hourly, key)?;
        let grand: u64 = sums.iter().map(|&(_, total)| total).sum();
        let entries = sums
            .iter()
            .map(|&(code, total)| {
                Ok(ShareEntry {
                    code,
                    label: group_label(key, code)?,
                    total,
                    percent: percent_of(total, grand),
                })
            })
            .collect::<Result<Vec<_>, UnknownCode>>()?;
        category_shares.push(CategoryShare {
            column: key.column().to_string(),
            entries,
        });
    }

    let temps: Vec<f64> = dataset.daily.iter().map(|r| r.temp).collect();
    let feels_like: Vec<f64> = dataset.daily.iter().map(|r| r.feels_like).collect();
    let humidity: Vec<f64> = dataset.daily.iter().map(|r| r.humidity).collect();
    let windspeed: Vec<f64> = dataset.daily.iter().map(|r| r.windspeed).collect();
    let weather_stats = vec![
        VariableStats {
            variable: "temp".to_string(),
            stats: compute_stats(&temps)?,
        },
        VariableStats {
            variable: "feels_like".to_string(),
            stats: compute_stats(&feels_like)?,
        },
        VariableStats {
            variable: "humidity".to_string(),
            stats: compute_stats(&humidity)?,
        },
        VariableStats {
            variable: "windspeed".to_string(),
            stats: compute_stats(&windspeed)?,
        },
    ];

    let correlations = if options.include_correlations {
        Some(weather_correlations(&dataset.daily))
    } else {
        None
    };

    let conclusions = vec![
        format!(
            "Total rentals in {} {} reached {}.",
            featured_month.month, featured_month.year, featured_month.total
        ),
        format!(
            "The busiest rental hour across both tables is {} with {} rentals.",
            peak_hour.label, peak_hour.total
        ),
        format!(
            "Average daily rentals are {:.2} on weekdays versus {:.2} on weekend days.",
            weekday_weekend.weekday_mean, weekday_weekend.weekend_mean
        ),
    ];

    Ok(DashboardReport {
        source,
        featured_month,
        peak_hour,
        weekday_weekend,
        daily_trend,
        hourly_totals,
        monthly_distribution,
        monthly_series,
        feature_distributions,
        category_shares,
        weather_stats,
        correlations,
        conclusions,
    })
}

impl DashboardReport {
    /// Renders the report as plain text with one `===` header per section.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Bike Sharing Rentals Report ===")?;
        writeln!(
            f,
            "Sources: {} daily rows (sha256 {}), {} hourly rows (sha256 {})",
            self.source.daily_rows,
            self.source.daily_checksum,
            self.source.hourly_rows,
            self.source.hourly_checksum
        )?;

        writeln!(f, "\n=== Featured Month ===")?;
        writeln!(
            f,
            "Total rentals in {} {}: {}",
            self.featured_month.month, self.featured_month.year, self.featured_month.total
        )?;

        writeln!(f, "\n=== Peak Hour ===")?;
        writeln!(
            f,
            "Busiest hour: {} (hour {}, {} rentals)",
            self.peak_hour.label, self.peak_hour.hour, self.peak_hour.total
        )?;

        writeln!(f, "\n=== Weekdays vs Weekend ===")?;
        writeln!(
            f,
            "Average rentals per weekday: {:.2} ({} days)",
            self.weekday_weekend.weekday_mean, self.weekday_weekend.weekday_days
        )?;
        writeln!(
            f,
            "Average rentals per weekend day: {:.2} ({} days)",
            self.weekday_weekend.weekend_mean, self.weekday_weekend.weekend_days
        )?;

        if let Some(trend) = &self.daily_trend {
            writeln!(f, "\n=== Daily Trend ===")?;
            if let (Some(first), Some(last)) = (trend.first(), trend.last()) {
                writeln!(
                    f,
                    "{} points from {} to {}",
                    trend.len(),
                    first.date,
                    last.date
                )?;
            }
        }

        writeln!(f, "\n=== Rentals per Hour ===")?;
        for hour in &self.hourly_totals {
            writeln!(f, "{:>5}: {}", hour.label, hour.total)?;
        }

        writeln!(f, "\n=== Monthly Distribution ===")?;
        for share in &self.monthly_distribution {
            writeln!(f, "{}: {} ({:.1}%)", share.month, share.total, share.percent)?;
        }

        writeln!(f, "\n=== Rentals per Calendar Month ===")?;
        for point in &self.monthly_series {
            writeln!(f, "{}: {}", point.month, point.total)?;
        }

        writeln!(f, "\n=== Feature Distributions ===")?;
        for dist in &self.feature_distributions {
            let peak_working = dist
                .bins
                .iter()
                .max_by(|a, b| {
                    a.working_percent
                        .partial_cmp(&b.working_percent)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|b| b.label.as_str())
                .unwrap_or("-");
            writeln!(
                f,
                "{}: {} bins, working-day peak at {}",
                dist.feature,
                dist.bins.len(),
                peak_working
            )?;
        }

        writeln!(f, "\n=== Category Shares ===")?;
        for category in &self.category_shares {
            writeln!(f, "[{}]", category.column)?;
            for entry in &category.entries {
                writeln!(f, "  {}: {} ({:.1}%)", entry.label, entry.total, entry.percent)?;
            }
        }

        writeln!(f, "\n=== Weather Variables ===")?;
        for var in &self.weather_stats {
            writeln!(
                f,
                "{}: mean {:.3}, median {:.3}, std {:.3}, range [{:.3}, {:.3}]",
                var.variable,
                var.stats.mean,
                var.stats.median,
                var.stats.std_dev,
                var.stats.min,
                var.stats.max
            )?;
        }

        if let Some(correlations) = &self.correlations {
            writeln!(f, "\n=== Spearman Correlations ===")?;
            for entry in correlations {
                writeln!(
                    f,
                    "{} vs {}: {:+.3}",
                    entry.variable1, entry.variable2, entry.correlation
                )?;
            }
        }

        writeln!(f, "\n=== Conclusions ===")?;
        for (i, conclusion) in self.conclusions.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, conclusion)?;
        }

        Ok(())
    }
}
