//! Error types for aggregation operations.

use crate::core::labels::UnknownCode;
use crate::time::month::MonthBucket;

/// Result type for aggregation operations
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Error type for aggregation operations.
///
/// Every degenerate input is reported loudly instead of being coerced to a
/// zero, an empty series, or a NaN mean.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("no records to aggregate: {0}")]
    EmptyDataset(String),

    #[error("empty partition: {0}")]
    EmptyPartition(String),

    #[error("column `{column}` is not present in the {table} table")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    #[error("invalid month range: start {start} is after end {end}")]
    InvalidRange {
        start: MonthBucket,
        end: MonthBucket,
    },

    #[error("invalid histogram bin count: {0}")]
    InvalidBinCount(usize),
}
