//! Core domain models for bike-sharing rental analysis.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: the daily and hourly rental records, the in-memory dataset that
//! bundles them, and the closed code-to-label mappings for the categorical
//! columns.

pub mod domain;
pub mod labels;

pub use domain::{DailyRecord, Dataset, HourlyRecord};
pub use labels::{
    holiday_label, hour_label, working_day_label, DataYear, Month, Season, UnknownCode,
    UnknownLabel, Weather, Weekday,
};
