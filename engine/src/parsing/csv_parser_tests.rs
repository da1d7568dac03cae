use chrono::NaiveDate;

use super::csv_parser::{parse_daily_csv, parse_hourly_csv};

const DAILY_HEADER: &str =
    "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

const HOURLY_HEADER: &str =
    "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

#[test]
fn parses_daily_rows() {
    let csv = format!(
        "{}\n1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985\n\
         2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801\n",
        DAILY_HEADER
    );

    let records = parse_daily_csv(&csv).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.instant, 1);
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2011, 1, 1).unwrap());
    assert_eq!(first.season, 1);
    assert_eq!(first.weekday, 6);
    assert!(!first.holiday);
    assert!(!first.working_day);
    assert_eq!(first.casual, 331);
    assert_eq!(first.registered, 654);
    assert_eq!(first.total, 985);
    assert!(first.counts_consistent());
    assert!(first.is_weekend());
}

#[test]
fn parses_hourly_rows() {
    let csv = format!(
        "{}\n1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0.0,3,13,16\n\
         2,2011-01-01,1,0,1,17,0,6,0,1,0.22,0.2727,0.8,0.0,8,32,40\n",
        HOURLY_HEADER
    );

    let records = parse_hourly_csv(&csv).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].hour, 0);
    assert_eq!(records[1].hour, 17);
    assert_eq!(records[1].total, 40);
}

#[test]
fn missing_column_is_named_in_the_error() {
    // Header without `cnt`.
    let csv = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered\n\
               1,2011-01-01,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,331,654\n";

    let err = parse_daily_csv(csv).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("`cnt`"), "unexpected error: {}", message);
}

#[test]
fn malformed_date_fails_with_instant() {
    let csv = format!(
        "{}\n7,01/01/2011,1,0,1,0,6,0,2,0.3,0.3,0.8,0.1,331,654,985\n",
        DAILY_HEADER
    );

    let err = parse_daily_csv(&csv).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("instant 7"), "unexpected error: {}", message);
}

#[test]
fn non_binary_flag_fails() {
    let csv = format!(
        "{}\n1,2011-01-01,1,0,1,2,6,0,2,0.3,0.3,0.8,0.1,331,654,985\n",
        DAILY_HEADER
    );

    let err = parse_daily_csv(&csv).unwrap_err();
    assert!(format!("{:#}", err).contains("holiday"));
}

#[test]
fn out_of_range_hour_fails() {
    let csv = format!(
        "{}\n1,2011-01-01,1,0,1,24,0,6,0,1,0.24,0.2879,0.81,0.0,3,13,16\n",
        HOURLY_HEADER
    );

    let err = parse_hourly_csv(&csv).unwrap_err();
    assert!(format!("{:#}", err).contains("hr"));
}

#[test]
fn empty_table_parses_to_no_records() {
    let csv = format!("{}\n", DAILY_HEADER);
    assert!(parse_daily_csv(&csv).unwrap().is_empty());
}
