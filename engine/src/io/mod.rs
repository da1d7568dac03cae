//! High-level data loading utilities.
//!
//! The loader combines CSV parsing with domain model construction: it reads
//! the two rental tables, fingerprints the file contents for provenance,
//! and produces a ready-to-use [`crate::core::domain::Dataset`].
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_insights::io::loaders::RentalDataLoader;
//! use std::path::Path;
//!
//! let loaded = RentalDataLoader::load(Path::new("day.csv"), Path::new("hour.csv"))
//!     .expect("failed to load");
//! println!("{} daily rows", loaded.summary.daily_rows);
//! ```

pub mod checksum;
pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use loaders::{LoadedDataset, RentalDataLoader};
