//! Analytics engine for bike-sharing rental data.
//!
//! The engine loads the two canonical rental tables (one row per day, one
//! row per hour), computes descriptive aggregates over them, and assembles
//! the figures a dashboard presents: period totals, the peak rental hour,
//! weekday versus weekend means, per-group distributions and correlations.
//!
//! Everything is recomputed from immutable in-memory tables on each call;
//! there is no cached or module-level state. Degenerate inputs (empty
//! tables, unknown category codes, missing columns, empty partitions) fail
//! loudly with typed errors instead of being coerced to zeros or NaN.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_insights::io::loaders::RentalDataLoader;
//! use bikeshare_insights::services::report::{build_report, ReportOptions};
//! use std::path::Path;
//!
//! let loaded = RentalDataLoader::load(Path::new("day.csv"), Path::new("hour.csv"))
//!     .expect("failed to load rental tables");
//! let report = build_report(&loaded.dataset, loaded.summary, &ReportOptions::default())
//!     .expect("failed to build report");
//! println!("{}", report.render_text());
//! ```

pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod services;
pub mod time;
