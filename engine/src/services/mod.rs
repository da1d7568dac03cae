//! Aggregation and reporting services for the rental tables.
//!
//! This module holds the engine proper: the group-by and reduction
//! operations, distribution summaries, correlation analysis, and the
//! assembly of the full dashboard report.
//!
//! # Services
//!
//! - [`aggregation`]: filter, group-by and reduce operations
//! - [`distributions`]: summary statistics and histogram feeds
//! - [`insights`]: Spearman correlations across the weather variables
//! - [`report`]: assembly of every dashboard figure into one structure

pub mod aggregation;
pub mod distributions;
pub mod error;
pub mod insights;
pub mod report;

pub use aggregation::{
    group_label, group_sum, mean_by_predicate, monthly_series, peak_group, total_in_period,
    GroupKey, MonthTotal, PartitionMeans, RentalRecord,
};
pub use distributions::{compute_stats, DistributionStats, FeatureDistribution};
pub use error::{AggregationError, AggregationResult};
pub use insights::{spearman_correlation, weather_correlations, CorrelationEntry};
pub use report::{build_report, DashboardReport, ReportOptions, SourceSummary};
