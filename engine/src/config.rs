//! Report configuration file support.
//!
//! This module provides utilities for reading report settings from TOML
//! configuration files: where the two CSV tables live, which month the
//! headline features, which sections to include, and the output format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::labels::{DataYear, Month};
use crate::services::report::ReportOptions;

/// Report configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Locations of the two source tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_daily_csv")]
    pub daily_csv: String,
    #[serde(default = "default_hourly_csv")]
    pub hourly_csv: String,
}

/// Section toggles and headline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Raw `yr` code of the featured period (0 = first data year).
    #[serde(default)]
    pub featured_year: i64,
    /// Raw `mnth` code of the featured month (1-12).
    #[serde(default = "default_featured_month")]
    pub featured_month: i64,
    #[serde(default = "default_true")]
    pub include_daily_trend: bool,
    #[serde(default = "default_true")]
    pub include_correlations: bool,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// Output format of the report binary: `text` or `json`.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_daily_csv() -> String {
    "data/day.csv".to_string()
}

fn default_hourly_csv() -> String {
    "data/hour.csv".to_string()
}

fn default_featured_month() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

fn default_histogram_bins() -> usize {
    10
}

fn default_output() -> String {
    "text".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            daily_csv: default_daily_csv(),
            hourly_csv: default_hourly_csv(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            featured_year: 0,
            featured_month: default_featured_month(),
            include_daily_trend: true,
            include_correlations: true,
            histogram_bins: default_histogram_bins(),
            output: default_output(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            report: ReportSettings::default(),
        }
    }
}

impl ReportConfig {
    /// Loads report configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.as_ref().display()))
    }

    /// Loads report configuration from the default location.
    ///
    /// Searches for `bikeshare.toml` in the current directory, `engine/`,
    /// and the parent directory. When no file is found the built-in
    /// defaults apply; a file that exists but fails to parse is an error.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = vec![
            PathBuf::from("bikeshare.toml"),
            PathBuf::from("engine/bikeshare.toml"),
            PathBuf::from("../bikeshare.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        log::warn!("no bikeshare.toml found in standard locations, using defaults");
        Ok(Self::default())
    }

    /// Returns `true` if the report should be printed as JSON.
    pub fn json_output(&self) -> bool {
        self.report.output.eq_ignore_ascii_case("json")
    }

    /// Converts the settings into [`ReportOptions`].
    ///
    /// Featured year and month are raw column codes; undefined codes fail
    /// with the same unknown-code errors as any other lookup.
    pub fn report_options(&self) -> Result<ReportOptions> {
        let featured_year = DataYear::from_code(self.report.featured_year)
            .context("invalid featured_year in config")?;
        let featured_month = Month::from_code(self.report.featured_month)
            .context("invalid featured_month in config")?;

        Ok(ReportOptions {
            featured_year,
            featured_month,
            include_daily_trend: self.report.include_daily_trend,
            include_correlations: self.report.include_correlations,
            histogram_bins: self.report.histogram_bins,
        })
    }
}
