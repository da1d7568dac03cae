use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use super::loaders::RentalDataLoader;

const DAILY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
";

const HOURLY_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0.0,3,13,16
2,2011-01-01,1,0,1,17,0,6,0,1,0.22,0.2727,0.8,0.0,8,32,40
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn loads_both_tables_with_summary() {
    let dir = TempDir::new().unwrap();
    let daily_path = write_fixture(&dir, "day.csv", DAILY_CSV);
    let hourly_path = write_fixture(&dir, "hour.csv", HOURLY_CSV);

    let loaded = RentalDataLoader::load(&daily_path, &hourly_path).unwrap();

    assert_eq!(loaded.dataset.daily.len(), 2);
    assert_eq!(loaded.dataset.hourly.len(), 2);
    assert_eq!(loaded.summary.daily_rows, 2);
    assert_eq!(loaded.summary.hourly_rows, 2);
    assert_eq!(loaded.summary.daily_checksum.len(), 64);
    assert_ne!(loaded.summary.daily_checksum, loaded.summary.hourly_checksum);
}

#[test]
fn checksums_match_content_not_path() {
    let dir = TempDir::new().unwrap();
    let first = write_fixture(&dir, "a.csv", DAILY_CSV);
    let second = write_fixture(&dir, "b.csv", DAILY_CSV);
    let hourly = write_fixture(&dir, "hour.csv", HOURLY_CSV);

    let from_first = RentalDataLoader::load(&first, &hourly).unwrap();
    let from_second = RentalDataLoader::load(&second, &hourly).unwrap();
    assert_eq!(
        from_first.summary.daily_checksum,
        from_second.summary.daily_checksum
    );
}

#[test]
fn rejects_non_csv_extension() {
    let dir = TempDir::new().unwrap();
    let json_path = write_fixture(&dir, "day.json", "{}");
    let hourly_path = write_fixture(&dir, "hour.csv", HOURLY_CSV);

    let err = RentalDataLoader::load(&json_path, &hourly_path).unwrap_err();
    assert!(err.to_string().contains("unsupported file format"));
}

#[test]
fn rejects_path_without_extension() {
    let err = RentalDataLoader::load(Path::new("day"), Path::new("hour.csv")).unwrap_err();
    assert!(format!("{:#}", err).contains("no file extension"));
}

#[test]
fn missing_file_is_contextualized() {
    let dir = TempDir::new().unwrap();
    let hourly_path = write_fixture(&dir, "hour.csv", HOURLY_CSV);
    let missing = dir.path().join("absent.csv");

    let err = RentalDataLoader::load(&missing, &hourly_path).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read daily table"));
}

#[test]
fn load_from_contents_skips_the_filesystem() {
    let loaded = RentalDataLoader::load_from_contents(DAILY_CSV, HOURLY_CSV).unwrap();
    assert_eq!(loaded.dataset.daily[0].total, 985);
    assert_eq!(loaded.dataset.hourly[1].hour, 17);
}
