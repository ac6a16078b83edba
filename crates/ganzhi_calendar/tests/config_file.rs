//! Configuration loading from disk and config-driven generation.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use ganzhi_base::MonthStemRule;
use ganzhi_calendar::{
    CalendarConfig, CalendarError, NoLunarLabels, OracleError, SolarLongitude,
    generate_from_config,
};

/// Longitude pinned to mid-Capricorn: month 11 of the solar year.
struct Pinned;

impl SolarLongitude for Pinned {
    fn solar_longitude_deg(&self, _instant: DateTime<Utc>) -> Result<f64, OracleError> {
        Ok(280.0)
    }
}

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn load_and_generate() {
    let file = write_config(
        r#"
start_date = "2025-12-21"
day_count = 3
zone = "Asia/Hong_Kong"
month_stem_rule = "five_tigers"
"#,
    );
    let config = CalendarConfig::from_file(file.path()).unwrap();
    assert_eq!(config.month_stem_rule, MonthStemRule::FiveTigers);

    let rows = generate_from_config(&config, Pinned, NoLunarLabels).unwrap();
    assert_eq!(rows.len(), 39);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 12, 21).unwrap());
    // 乙 year, Five Tigers: month 11 is 戊子
    assert_eq!(rows[0].month_pillar.to_string(), "戊子");
}

#[test]
fn default_rule_from_file() {
    let file = write_config("start_date = \"2025-12-21\"\nday_count = 1\nzone = \"UTC\"\n");
    let config = CalendarConfig::from_file(file.path()).unwrap();
    let rows = generate_from_config(&config, Pinned, NoLunarLabels).unwrap();
    assert_eq!(rows[0].month_pillar.to_string(), "丙子");
    assert_eq!(rows[0].zone_abbreviation, "UTC");
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CalendarConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CalendarError::Config(_)));
}

#[test]
fn malformed_file_is_config_error() {
    let file = write_config("start_date = 12\n");
    let err = CalendarConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CalendarError::Config(_)));
}

#[test]
fn unknown_zone_in_file() {
    let file = write_config("start_date = \"2025-12-21\"\nday_count = 1\nzone = \"Moon/Base\"\n");
    let err = CalendarConfig::from_file(file.path()).unwrap_err();
    assert_eq!(err, CalendarError::UnknownTimeZone("Moon/Base".into()));
}
