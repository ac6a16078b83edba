//! Hour pillars and the four Nine-Star readings for a slot.

use ganzhi_base::{NineStar, Pillar, day_star, hour_pillar, hour_star, month_star, year_star};

use crate::day_context::DayContext;
use crate::slot::TimeSlot;

/// Year, month, day and hour stars for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarSet {
    pub year: NineStar,
    pub month: NineStar,
    pub day: NineStar,
    pub hour: NineStar,
}

/// Hour-level result for one slot, computed from the slot's anchor day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourReading {
    pub slot: TimeSlot,
    pub hour_pillar: Pillar,
    pub stars: StarSet,
}

/// Day whose context drives a slot: `next` for Late Rat, `today` otherwise.
pub fn anchor_day<'a>(
    slot: TimeSlot,
    today: &'a DayContext,
    next: &'a DayContext,
) -> &'a DayContext {
    if slot.is_late_rat() { next } else { today }
}

/// Hour pillar and stars for `slot` on an already-chosen anchor day.
pub fn hour_reading(anchor: &DayContext, slot: TimeSlot) -> HourReading {
    let ordinal = slot.branch_ordinal();
    HourReading {
        slot,
        hour_pillar: hour_pillar(anchor.day_pillar.stem, ordinal),
        stars: StarSet {
            year: year_star(anchor.logical_year),
            month: month_star(anchor.year_pillar.branch, anchor.month_index),
            day: day_star(anchor.days_from_reference, anchor.phase),
            hour: hour_star(anchor.phase, anchor.day_pillar.branch, ordinal),
        },
    }
}
