//! Parsers for the bike-sharing rental data files.
//!
//! The two canonical tables arrive as CSV with a fixed, known header. The
//! parser verifies the header, deserializes each row, and converts it into
//! the domain records in [`crate::core::domain`], reporting the exact row
//! and column on failure.

pub mod csv_parser;

#[cfg(test)]
mod csv_parser_tests;

pub use csv_parser::{parse_daily_csv, parse_hourly_csv};
