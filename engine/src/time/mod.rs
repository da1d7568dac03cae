//! Calendar utilities for time series bucketing.

pub mod month;

pub use month::MonthBucket;
