//! Per-day sexagenary context.
//!
//! Everything that is constant across a civil day (year/month/day pillars,
//! solar phase, solar term) is derived once from the Sun's longitude at local
//! civil noon.

use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use ganzhi_base::{
    DAY_REFERENCE_YMD, MonthStemRule, Pillar, SolarPhase, SolarTerm, day_pillar, logical_year,
    month_index_from_longitude, month_pillar, solar_term_index, year_pillar,
};
use tracing::debug;

use crate::error::CalendarError;
use crate::oracle::{SolarLongitude, checked_longitude};
use crate::zone::{resolve_local, zone_abbreviation};

/// Local hour at which the day's solar longitude is sampled.
pub const OBSERVATION_HOUR: u32 = 12;

/// Day-level results for one civil date in one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct DayContext {
    /// Civil date.
    pub date: NaiveDate,
    /// Year pillar of the logical year.
    pub year_pillar: Pillar,
    /// Month pillar of the solar month.
    pub month_pillar: Pillar,
    /// Day pillar.
    pub day_pillar: Pillar,
    /// Sexagenary year (changes at Start of Spring).
    pub logical_year: i32,
    /// Solar month, 1 = Tiger month .. 12 = Ox month.
    pub month_index: u8,
    /// Yang/Yin half-year.
    pub phase: SolarPhase,
    /// Solar term index 0..23 (0 = Spring Equinox).
    pub solar_term_index: u8,
    /// Solar longitude at local noon, degrees.
    pub solar_longitude_deg: f64,
    /// Days since the day-pillar reference (2025-12-21), signed.
    pub days_from_reference: i64,
    /// Zone abbreviation in force at local noon, e.g. "HKT".
    pub zone_abbreviation: String,
}

impl DayContext {
    pub fn solar_term(&self) -> SolarTerm {
        SolarTerm::from_index(self.solar_term_index)
    }
}

const REFERENCE_DATE: NaiveDate = {
    let (y, m, d) = DAY_REFERENCE_YMD;
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid day reference"),
    }
};

/// Signed day count from the day-pillar reference date.
pub fn days_from_reference(date: NaiveDate) -> i64 {
    date.signed_duration_since(REFERENCE_DATE).num_days()
}

/// Compute the day context with the default month-stem rule.
pub fn compute_day_context<S: SolarLongitude + ?Sized>(
    date: NaiveDate,
    zone: Tz,
    solar: &S,
) -> Result<DayContext, CalendarError> {
    compute_day_context_with(date, zone, solar, MonthStemRule::default())
}

/// Compute the day context with an explicit month-stem rule.
pub fn compute_day_context_with<S: SolarLongitude + ?Sized>(
    date: NaiveDate,
    zone: Tz,
    solar: &S,
    rule: MonthStemRule,
) -> Result<DayContext, CalendarError> {
    let noon = date
        .and_hms_opt(OBSERVATION_HOUR, 0, 0)
        .ok_or(CalendarError::DateOutOfRange(date))?;
    let local = resolve_local(zone, noon)?;
    let lon = checked_longitude(solar, local.with_timezone(&Utc))?;

    let year = logical_year(date.year(), date.month(), lon);
    let month_index = month_index_from_longitude(lon);
    let diff = days_from_reference(date);

    let ctx = DayContext {
        date,
        year_pillar: year_pillar(year),
        month_pillar: month_pillar(year, month_index, rule),
        day_pillar: day_pillar(diff),
        logical_year: year,
        month_index,
        phase: SolarPhase::from_longitude(lon),
        solar_term_index: solar_term_index(lon),
        solar_longitude_deg: lon,
        days_from_reference: diff,
        zone_abbreviation: zone_abbreviation(&local),
    };
    debug!(
        %date,
        lon,
        logical_year = year,
        month_index,
        day = %ctx.day_pillar,
        "day context"
    );
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OracleError;
    use crate::zone::parse_zone;
    use chrono::DateTime;

    struct Fixed(f64);

    impl SolarLongitude for Fixed {
        fn solar_longitude_deg(&self, _instant: DateTime<Utc>) -> Result<f64, OracleError> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl SolarLongitude for Failing {
        fn solar_longitude_deg(&self, _instant: DateTime<Utc>) -> Result<f64, OracleError> {
            Err(OracleError::Unavailable("offline".into()))
        }
    }

    fn hk() -> Tz {
        parse_zone("Asia/Hong_Kong").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reference_day() {
        let ctx = compute_day_context(date(2025, 12, 21), hk(), &Fixed(270.2)).unwrap();
        assert_eq!(ctx.day_pillar.to_string(), "甲子");
        assert_eq!(ctx.days_from_reference, 0);
        assert_eq!(ctx.logical_year, 2025);
        assert_eq!(ctx.year_pillar.to_string(), "乙巳");
        assert_eq!(ctx.month_index, 11);
        assert_eq!(ctx.month_pillar.to_string(), "丙子");
        assert_eq!(ctx.phase, SolarPhase::Yang);
        assert_eq!(ctx.solar_term(), SolarTerm::WinterSolstice);
        assert_eq!(ctx.zone_abbreviation, "HKT");
    }

    #[test]
    fn january_before_start_of_spring() {
        let ctx = compute_day_context(date(2026, 1, 20), hk(), &Fixed(300.0)).unwrap();
        assert_eq!(ctx.logical_year, 2025);
        assert_eq!(ctx.month_index, 12);
        assert_eq!(ctx.month_pillar.branch.name(), "丑");
    }

    #[test]
    fn five_tigers_rule_changes_month_stem_only() {
        let d = date(2026, 2, 10);
        let a = compute_day_context_with(d, hk(), &Fixed(321.0), MonthStemRule::YearModFive)
            .unwrap();
        let b = compute_day_context_with(d, hk(), &Fixed(321.0), MonthStemRule::FiveTigers)
            .unwrap();
        assert_eq!(a.month_pillar.branch, b.month_pillar.branch);
        assert_eq!(a.year_pillar, b.year_pillar);
        assert_eq!(a.day_pillar, b.day_pillar);
        // 丙午 year: Five Tigers opens at 庚寅
        assert_eq!(b.month_pillar.to_string(), "庚寅");
    }

    #[test]
    fn solar_failure_propagates() {
        let err = compute_day_context(date(2025, 12, 21), hk(), &Failing).unwrap_err();
        assert_eq!(
            err,
            CalendarError::Oracle(OracleError::Unavailable("offline".into()))
        );
    }

    #[test]
    fn malformed_longitude_rejected() {
        let err = compute_day_context(date(2025, 12, 21), hk(), &Fixed(f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Oracle(OracleError::Malformed { .. })
        ));
    }

    #[test]
    fn days_from_reference_signed() {
        assert_eq!(days_from_reference(date(2025, 12, 22)), 1);
        assert_eq!(days_from_reference(date(2025, 12, 20)), -1);
        assert_eq!(days_from_reference(date(2026, 2, 19)), 60);
    }
}
