use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::domain::Dataset;
use crate::io::checksum;
use crate::parsing::csv_parser;
use crate::services::report::SourceSummary;

/// A dataset loaded from disk, with provenance for the report.
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub summary: SourceSummary,
}

/// Loader for the two rental CSV tables.
pub struct RentalDataLoader;

impl RentalDataLoader {
    /// Loads the daily and hourly tables into a [`Dataset`].
    ///
    /// Each file is read once; the raw content is fingerprinted before
    /// parsing so the summary reflects the bytes actually consumed.
    pub fn load(daily_path: &Path, hourly_path: &Path) -> Result<LoadedDataset> {
        Self::check_extension(daily_path)?;
        Self::check_extension(hourly_path)?;

        let daily_content = fs::read_to_string(daily_path)
            .with_context(|| format!("failed to read daily table {}", daily_path.display()))?;
        let hourly_content = fs::read_to_string(hourly_path)
            .with_context(|| format!("failed to read hourly table {}", hourly_path.display()))?;

        Self::load_from_contents(&daily_content, &hourly_content)
    }

    /// Loads the tables from already-read CSV content.
    pub fn load_from_contents(daily_content: &str, hourly_content: &str) -> Result<LoadedDataset> {
        let daily_checksum = checksum::fingerprint(daily_content);
        let hourly_checksum = checksum::fingerprint(hourly_content);

        let daily = csv_parser::parse_daily_csv(daily_content)
            .context("failed to parse daily table")?;
        let hourly = csv_parser::parse_hourly_csv(hourly_content)
            .context("failed to parse hourly table")?;

        log::info!(
            "loaded {} daily rows (sha256 {}) and {} hourly rows (sha256 {})",
            daily.len(),
            daily_checksum,
            hourly.len(),
            hourly_checksum
        );

        let summary = SourceSummary {
            daily_rows: daily.len(),
            hourly_rows: hourly.len(),
            daily_checksum,
            hourly_checksum,
        };

        Ok(LoadedDataset {
            dataset: Dataset { daily, hourly },
            summary,
        })
    }

    fn check_extension(path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .with_context(|| format!("{} has no file extension", path.display()))?;

        if !extension.eq_ignore_ascii_case("csv") {
            anyhow::bail!("unsupported file format: {}", extension);
        }
        Ok(())
    }
}
