use anyhow::{Context, Result};
use std::path::Path;

use bikeshare_insights::config::ReportConfig;
use bikeshare_insights::io::loaders::RentalDataLoader;
use bikeshare_insights::services::report::build_report;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::var("BIKESHARE_CONFIG") {
        Ok(path) => ReportConfig::from_file(&path)
            .with_context(|| format!("failed to load config from BIKESHARE_CONFIG={}", path))?,
        Err(_) => ReportConfig::from_default_location()?,
    };

    // Positional paths override the config; --json overrides the output mode.
    let args: Vec<String> = std::env::args().collect();
    let positional: Vec<&String> = args[1..].iter().filter(|a| !a.starts_with("--")).collect();
    let daily_path = positional
        .first()
        .map(|s| s.as_str())
        .unwrap_or(&config.data.daily_csv);
    let hourly_path = positional
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or(&config.data.hourly_csv);
    let json = config.json_output() || args.iter().any(|a| a == "--json");

    let options = config.report_options()?;

    let loaded = RentalDataLoader::load(Path::new(daily_path), Path::new(hourly_path))
        .context("failed to load rental tables")?;
    let report = build_report(&loaded.dataset, loaded.summary, &options)
        .context("failed to build report")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("=== Bike Sharing Report Tool ===");
        println!("Daily table: {}", daily_path);
        println!("Hourly table: {}", hourly_path);
        println!();
        print!("{}", report.render_text());
    }

    Ok(())
}
