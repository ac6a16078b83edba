//! Sexagenary calendar generation over a civil date range.
//!
//! This crate provides:
//! - Oracle traits for the Sun's longitude and lunar date labels
//! - Deterministic local-time resolution across DST transitions
//! - Per-day contexts (year/month/day pillars, phase, solar term)
//! - Hour pillars and Nine-Star readings for the 13 intraday slots
//! - Row generation with the Late Rat and solar-term rules
//! - TOML configuration
//!
//! The ephemeris and lunar tables are supplied by the caller.

pub mod config;
pub mod day_context;
pub mod error;
pub mod generator;
pub mod hour;
pub mod oracle;
pub mod row;
pub mod slot;
pub mod zone;

pub use config::{CalendarConfig, generate_from_config};
pub use day_context::{
    DayContext, OBSERVATION_HOUR, compute_day_context, compute_day_context_with,
    days_from_reference,
};
pub use error::{CalendarError, OracleError};
pub use generator::{CalendarGenerator, ROWS_PER_DAY, generate_calendar};
pub use hour::{HourReading, StarSet, anchor_day, hour_reading};
pub use oracle::{LunarDateLabel, NoLunarLabels, SolarLongitude};
pub use row::{CalendarRecord, CalendarRow};
pub use slot::{ALL_TIME_SLOTS, TimeSlot};
pub use zone::{parse_zone, resolve_local, resolve_local_utc, zone_abbreviation};
