//! Year, month, day and hour pillar arithmetic.
//!
//! Inputs are already-resolved quantities (civil year and month, solar
//! longitude, day offset from the reference day); civil-time and time-zone
//! handling lives in the calendar crate.

use crate::pillar::Pillar;
use crate::solar_term::START_OF_SPRING_DEG;
use crate::stem::Stem;
use crate::util::normalize_longitude;

/// Civil date whose day pillar is 甲子 and whose day star is 1.
pub const DAY_REFERENCE_YMD: (i32, u32, u32) = (2025, 12, 21);

/// Offset aligning the year cycle so that 1984 is 甲子.
pub const YEAR_CYCLE_OFFSET: i32 = 4;

/// Width of a solar month in degrees of longitude.
pub const SOLAR_MONTH_SPAN_DEG: f64 = 30.0;

/// How the month-1 stem is derived from the logical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MonthStemRule {
    /// `((logical_year mod 5) * 2 + month_index + 1) mod 10`.
    #[default]
    YearModFive,
    /// Five Tigers keyed on the year stem:
    /// `((year_stem mod 5) * 2 + month_index + 1) mod 10`.
    FiveTigers,
}

/// Sexagenary year in force: the civil year, or the previous one while the
/// Sun has not yet reached Start of Spring (315 deg) in January–March.
///
/// The month guard is needed because longitude wraps at 360: low values only
/// mean "before Start of Spring" in the first calendar quarter.
pub fn logical_year(civil_year: i32, civil_month: u32, lon_deg: f64) -> i32 {
    if normalize_longitude(lon_deg) < START_OF_SPRING_DEG && civil_month <= 3 {
        civil_year - 1
    } else {
        civil_year
    }
}

pub fn year_pillar(logical_year: i32) -> Pillar {
    Pillar::from_offset(logical_year as i64 - YEAR_CYCLE_OFFSET as i64)
}

/// 1-based solar month (1 = the month opening at Start of Spring, 12 = the
/// month before the next one).
pub fn month_index_from_longitude(lon_deg: f64) -> u8 {
    let shifted = normalize_longitude(lon_deg - START_OF_SPRING_DEG);
    let idx = (shifted / SOLAR_MONTH_SPAN_DEG).floor() as u8 + 1;
    idx.min(12)
}

/// Month pillar for a logical year and 1-based month index.
///
/// Month 1 always carries the Tiger branch (寅).
pub fn month_pillar(logical_year: i32, month_index: u8, rule: MonthStemRule) -> Pillar {
    debug_assert!((1..=12).contains(&month_index));
    let year_key = match rule {
        MonthStemRule::YearModFive => (logical_year as i64).rem_euclid(5),
        MonthStemRule::FiveTigers => year_pillar(logical_year).stem.index() as i64 % 5,
    };
    let m = month_index as i64;
    let stem = (year_key * 2 + m + 1).rem_euclid(10) as u8;
    let branch = ((m + 1) % 12) as u8;
    Pillar::from_indices(stem, branch)
}

/// Day pillar from the signed day count since [`DAY_REFERENCE_YMD`].
pub fn day_pillar(days_from_reference: i64) -> Pillar {
    Pillar::from_offset(days_from_reference)
}

/// Stem of the Rat hour for a day stem ("Five Rats"): 甲己 start at 甲,
/// 乙庚 at 丙, 丙辛 at 戊, 丁壬 at 庚, 戊癸 at 壬.
pub fn rat_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2)
}

/// Hour pillar for the anchor day's stem and the hour's branch ordinal.
pub fn hour_pillar(day_stem: Stem, branch_ordinal: u8) -> Pillar {
    debug_assert!(branch_ordinal < 12, "hour ordinal {branch_ordinal} out of range");
    let start = rat_hour_stem(day_stem).index();
    Pillar::from_indices((start + branch_ordinal) % 10, branch_ordinal)
}
