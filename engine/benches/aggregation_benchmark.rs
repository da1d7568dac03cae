use chrono::{Datelike, Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bikeshare_insights::core::domain::{DailyRecord, Dataset, HourlyRecord};
use bikeshare_insights::services::aggregation::{
    group_sum, mean_by_predicate, monthly_series, peak_group, GroupKey,
};
use bikeshare_insights::services::report::{build_report, ReportOptions, SourceSummary};
use bikeshare_insights::time::month::MonthBucket;

fn synthetic_daily(days: u64) -> Vec<DailyRecord> {
    let base = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    (0..days)
        .map(|offset| {
            let date = base + Days::new(offset);
            let weekday = date.weekday().num_days_from_sunday() as u8;
            let total = 800 + (offset % 400) as u32 * 7;
            DailyRecord {
                instant: offset as u32 + 1,
                date,
                season: (date.month0() / 3 + 1) as u8,
                year: (date.year() - 2011) as u8,
                month: date.month() as u8,
                holiday: false,
                weekday,
                working_day: weekday != 0 && weekday != 6,
                weather: (offset % 3 + 1) as u8,
                temp: 0.2 + (offset % 50) as f64 / 100.0,
                feels_like: 0.2 + (offset % 50) as f64 / 100.0,
                humidity: 0.4 + (offset % 40) as f64 / 100.0,
                windspeed: 0.1 + (offset % 20) as f64 / 100.0,
                casual: total / 4,
                registered: total - total / 4,
                total,
            }
        })
        .collect()
}

fn synthetic_hourly(days: u64) -> Vec<HourlyRecord> {
    let base = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let mut records = Vec::with_capacity(days as usize * 24);
    for offset in 0..days {
        let date = base + Days::new(offset);
        let weekday = date.weekday().num_days_from_sunday() as u8;
        for hour in 0u8..24 {
            // Commute-shaped load with a peak at 17.
            let total = 20 + u32::from(24 - hour.abs_diff(17)) * 10;
            records.push(HourlyRecord {
                instant: (offset * 24 + u64::from(hour)) as u32 + 1,
                date,
                season: (date.month0() / 3 + 1) as u8,
                year: (date.year() - 2011) as u8,
                month: date.month() as u8,
                hour,
                holiday: false,
                weekday,
                working_day: weekday != 0 && weekday != 6,
                weather: 1,
                temp: 0.5,
                feels_like: 0.5,
                humidity: 0.6,
                windspeed: 0.2,
                casual: total / 4,
                registered: total - total / 4,
                total,
            });
        }
    }
    records
}

fn bench_group_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for days in [30u64, 365, 730] {
        let hourly = synthetic_hourly(days);
        group.bench_with_input(
            BenchmarkId::new("group_sum_by_hour", days),
            &hourly,
            |b, records| {
                b.iter(|| group_sum(black_box(records), GroupKey::Hour).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("peak_group_by_hour", days),
            &hourly,
            |b, records| {
                b.iter(|| peak_group(black_box(records), GroupKey::Hour).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_partition_means(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    let daily = synthetic_daily(730);
    group.bench_function("mean_by_weekend_730_days", |b| {
        b.iter(|| mean_by_predicate(black_box(&daily), |r| r.is_weekend()).unwrap());
    });

    group.finish();
}

fn bench_monthly_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    let daily = synthetic_daily(730);
    let start = MonthBucket {
        year: 2011,
        month: 1,
    };
    let end = MonthBucket {
        year: 2012,
        month: 12,
    };
    group.bench_function("monthly_series_two_years", |b| {
        b.iter(|| monthly_series(black_box(&daily), start, end).unwrap());
    });

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    let dataset = Dataset {
        daily: synthetic_daily(730),
        hourly: synthetic_hourly(730),
    };
    let summary = SourceSummary {
        daily_rows: dataset.daily.len(),
        hourly_rows: dataset.hourly.len(),
        daily_checksum: "0".repeat(64),
        hourly_checksum: "1".repeat(64),
    };

    group.bench_function("build_report_two_years", |b| {
        b.iter(|| {
            build_report(
                black_box(&dataset),
                summary.clone(),
                &ReportOptions::default(),
            )
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_group_operations,
    bench_partition_means,
    bench_monthly_series,
    bench_full_report
);
criterion_main!(benches);
