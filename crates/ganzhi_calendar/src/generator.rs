//! Calendar row generation over a civil date range.
//!
//! Dates are scanned in order and each civil date's [`DayContext`] is
//! resolved exactly once: the context of `d + 1` serves as the Late Rat
//! anchor of `d` and then becomes the current day, and the context of `d - 1`
//! supplies the previous solar term for the change check.

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use ganzhi_base::MonthStemRule;
use tracing::{debug_span, warn};

use crate::day_context::{DayContext, compute_day_context_with};
use crate::error::CalendarError;
use crate::hour::{anchor_day, hour_reading};
use crate::oracle::{LunarDateLabel, SolarLongitude};
use crate::row::CalendarRow;
use crate::slot::{ALL_TIME_SLOTS, TimeSlot};
use crate::zone::parse_zone;

/// Rows produced per civil date.
pub const ROWS_PER_DAY: usize = ALL_TIME_SLOTS.len();

/// Upper bound on the days reserved ahead; longer ranges grow as they go.
const RESERVE_DAYS: u32 = 366;

/// Row generator bound to a solar and a lunar oracle.
#[derive(Debug, Clone)]
pub struct CalendarGenerator<S, L> {
    solar: S,
    lunar: L,
    month_stem_rule: MonthStemRule,
}

impl<S: SolarLongitude, L: LunarDateLabel> CalendarGenerator<S, L> {
    pub fn new(solar: S, lunar: L) -> Self {
        Self {
            solar,
            lunar,
            month_stem_rule: MonthStemRule::default(),
        }
    }

    pub fn with_month_stem_rule(mut self, rule: MonthStemRule) -> Self {
        self.month_stem_rule = rule;
        self
    }

    pub fn month_stem_rule(&self) -> MonthStemRule {
        self.month_stem_rule
    }

    /// Day context for one date under this generator's oracle and rule.
    pub fn day_context(&self, date: NaiveDate, zone: Tz) -> Result<DayContext, CalendarError> {
        compute_day_context_with(date, zone, &self.solar, self.month_stem_rule)
    }

    /// Rows for `[start, start + day_count)` in date order, 13 per date.
    pub fn generate(
        &self,
        start: NaiveDate,
        day_count: u32,
        zone: Tz,
    ) -> Result<Vec<CalendarRow>, CalendarError> {
        let _span = debug_span!(
            "generate_calendar",
            %start,
            days = day_count,
            zone = zone.name()
        )
        .entered();

        if day_count == 0 {
            return Ok(Vec::new());
        }
        // the scan resolves [start - 1, start + day_count]
        let first = pred(start)?;
        start
            .checked_add_days(Days::new(u64::from(day_count)))
            .ok_or(CalendarError::DateOutOfRange(start))?;

        let mut rows = Vec::with_capacity(day_count.min(RESERVE_DAYS) as usize * ROWS_PER_DAY);
        let mut prev = self.day_context(first, zone)?;
        let mut today = self.day_context(start, zone)?;
        for _ in 0..day_count {
            let next = self.day_context(succ(today.date)?, zone)?;
            self.push_day(&mut rows, &prev, &today, &next);
            prev = std::mem::replace(&mut today, next);
        }
        Ok(rows)
    }

    fn push_day(
        &self,
        rows: &mut Vec<CalendarRow>,
        prev: &DayContext,
        today: &DayContext,
        next: &DayContext,
    ) {
        let lunar_label = self.lunar_label(today.date);
        let term_change =
            (today.solar_term_index != prev.solar_term_index).then(|| today.solar_term());

        for slot in ALL_TIME_SLOTS {
            let anchor = anchor_day(slot, today, next);
            let solar_term = match slot {
                TimeSlot::EarlyRat => term_change,
                _ => None,
            };
            rows.push(CalendarRow::assemble(
                today.date,
                lunar_label.clone(),
                today.zone_abbreviation.clone(),
                solar_term,
                anchor,
                hour_reading(anchor, slot),
            ));
        }
    }

    fn lunar_label(&self, date: NaiveDate) -> String {
        match self.lunar.lunar_label(date) {
            Ok(label) => label,
            Err(e) => {
                warn!(%date, error = %e, "lunar label unavailable");
                String::new()
            }
        }
    }
}

/// Generate rows for `day_count` civil dates from `start` in the IANA zone
/// `zone_id`, with the default month-stem rule.
pub fn generate_calendar<S: SolarLongitude, L: LunarDateLabel>(
    start: NaiveDate,
    day_count: u32,
    zone_id: &str,
    solar: S,
    lunar: L,
) -> Result<Vec<CalendarRow>, CalendarError> {
    let zone = parse_zone(zone_id)?;
    CalendarGenerator::new(solar, lunar).generate(start, day_count, zone)
}

fn pred(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.pred_opt().ok_or(CalendarError::DateOutOfRange(date))
}

fn succ(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.succ_opt().ok_or(CalendarError::DateOutOfRange(date))
}
