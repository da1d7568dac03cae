//! Correlation analysis across the weather and rental variables.

use serde::{Deserialize, Serialize};

use crate::core::domain::DailyRecord;

/// Spearman rank correlation between a pair of named variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub variable1: String,
    pub variable2: String,
    pub correlation: f64,
}

/// Compute Spearman rank correlation between two variables.
///
/// Returns 0.0 for mismatched lengths, empty inputs, or constant series,
/// since no monotonic relationship is observable in those cases.
pub fn spearman_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len();

    // Create ranks for x
    let mut x_indexed: Vec<(usize, f64)> = x.iter().copied().enumerate().collect();
    x_indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut x_ranks = vec![0.0; n];
    for (rank, (idx, _)) in x_indexed.iter().enumerate() {
        x_ranks[*idx] = (rank + 1) as f64;
    }

    // Create ranks for y
    let mut y_indexed: Vec<(usize, f64)> = y.iter().copied().enumerate().collect();
    y_indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let mut y_ranks = vec![0.0; n];
    for (rank, (idx, _)) in y_indexed.iter().enumerate() {
        y_ranks[*idx] = (rank + 1) as f64;
    }

    // Compute Pearson correlation on ranks
    let mean_x = x_ranks.iter().sum::<f64>() / n as f64;
    let mean_y = y_ranks.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for i in 0..n {
        let dx = x_ranks[i] - mean_x;
        let dy = y_ranks[i] - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Compute pairwise correlations among the daily weather variables and the
/// total rental count.
///
/// Fewer than two records yield no entries.
pub fn weather_correlations(records: &[DailyRecord]) -> Vec<CorrelationEntry> {
    if records.len() < 2 {
        return vec![];
    }

    let temps: Vec<f64> = records.iter().map(|r| r.temp).collect();
    let feels_like: Vec<f64> = records.iter().map(|r| r.feels_like).collect();
    let humidity: Vec<f64> = records.iter().map(|r| r.humidity).collect();
    let windspeed: Vec<f64> = records.iter().map(|r| r.windspeed).collect();
    let totals: Vec<f64> = records.iter().map(|r| f64::from(r.total)).collect();

    let variables = [
        ("temp", &temps[..]),
        ("feels_like", &feels_like[..]),
        ("humidity", &humidity[..]),
        ("windspeed", &windspeed[..]),
        ("total", &totals[..]),
    ];

    let mut correlations = Vec::new();

    // Compute all pairwise correlations
    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            let (name1, data1) = variables[i];
            let (name2, data2) = variables[j];

            let corr = spearman_correlation(data1, data2);
            correlations.push(CorrelationEntry {
                variable1: name1.to_string(),
                variable2: name2.to_string(),
                correlation: corr,
            });
        }
    }

    correlations
}
