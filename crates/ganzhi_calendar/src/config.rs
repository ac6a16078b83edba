//! Generation settings and their TOML form.
//!
//! ```toml
//! start_date = "2025-12-21"
//! day_count = 30
//! zone = "Asia/Hong_Kong"
//! month_stem_rule = "year_mod_five"
//! ```

use std::path::Path;

use chrono::NaiveDate;
use chrono_tz::Tz;
use ganzhi_base::MonthStemRule;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::generator::CalendarGenerator;
use crate::oracle::{LunarDateLabel, SolarLongitude};
use crate::row::CalendarRow;
use crate::zone::parse_zone;

/// What to generate: a date range, a zone and the month-stem rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First civil date.
    pub start_date: NaiveDate,
    /// Number of civil dates.
    pub day_count: u32,
    /// IANA zone identifier.
    pub zone: String,
    #[serde(default)]
    pub month_stem_rule: MonthStemRule,
}

impl CalendarConfig {
    pub fn new(start_date: NaiveDate, day_count: u32, zone: impl Into<String>) -> Self {
        Self {
            start_date,
            day_count,
            zone: zone.into(),
            month_stem_rule: MonthStemRule::default(),
        }
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CalendarError> {
        let config: Self = toml::from_str(text)
            .map_err(|e| CalendarError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CalendarError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalendarError::Config(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, CalendarError> {
        toml::to_string(self)
            .map_err(|e| CalendarError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.day_count == 0 {
            return Err(CalendarError::Config(
                "day_count must be greater than 0".into(),
            ));
        }
        self.time_zone()?;
        Ok(())
    }

    pub fn time_zone(&self) -> Result<Tz, CalendarError> {
        parse_zone(&self.zone)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new(NaiveDate::default(), 1, "UTC")
    }
}

/// Generate the rows a configuration describes.
pub fn generate_from_config<S: SolarLongitude, L: LunarDateLabel>(
    config: &CalendarConfig,
    solar: S,
    lunar: L,
) -> Result<Vec<CalendarRow>, CalendarError> {
    config.validate()?;
    let zone = config.time_zone()?;
    CalendarGenerator::new(solar, lunar)
        .with_month_stem_rule(config.month_stem_rule)
        .generate(config.start_date, config.day_count, zone)
}
