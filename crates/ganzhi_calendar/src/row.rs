//! Calendar rows: one per (civil date, time slot).

use chrono::NaiveDate;
use ganzhi_base::{
    Branch, Pillar, SolarPhase, SolarTerm, fetus_origin, life_palace, life_palace_label,
};
use serde::Serialize;

use crate::day_context::DayContext;
use crate::hour::{HourReading, StarSet};
use crate::slot::TimeSlot;

/// Fully typed row.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarRow {
    /// Civil date the row is listed under.
    pub date: NaiveDate,
    /// Lunar date label of the civil date; empty when unavailable.
    pub lunar_label: String,
    pub slot: TimeSlot,
    /// Zone abbreviation of the civil date, e.g. "BST".
    pub zone_abbreviation: String,
    /// Set on the Early Rat row of a date whose solar term changed.
    pub solar_term: Option<SolarTerm>,
    /// Phase of the anchor day.
    pub phase: SolarPhase,
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub hour_pillar: Pillar,
    pub stars: StarSet,
    pub fetus_origin: Pillar,
    pub life_palace: Branch,
}

impl CalendarRow {
    /// Assemble a row from the civil-day fields and the slot's anchor day.
    pub fn assemble(
        date: NaiveDate,
        lunar_label: String,
        zone_abbreviation: String,
        solar_term: Option<SolarTerm>,
        anchor: &DayContext,
        reading: HourReading,
    ) -> Self {
        Self {
            date,
            lunar_label,
            slot: reading.slot,
            zone_abbreviation,
            solar_term,
            phase: anchor.phase,
            year_pillar: anchor.year_pillar,
            month_pillar: anchor.month_pillar,
            day_pillar: anchor.day_pillar,
            hour_pillar: reading.hour_pillar,
            stars: reading.stars,
            fetus_origin: fetus_origin(anchor.month_pillar),
            life_palace: life_palace(anchor.month_index, reading.hour_pillar.branch),
        }
    }

    /// Flatten to display strings for an external table sink.
    pub fn to_record(&self) -> CalendarRecord {
        CalendarRecord {
            date: self.date.format("%Y-%m-%d").to_string(),
            lunar_label: self.lunar_label.clone(),
            slot: self.slot.name().to_string(),
            period: self.slot.period().to_string(),
            zone_abbreviation: self.zone_abbreviation.clone(),
            solar_term: self
                .solar_term
                .map(|t| t.name().to_string())
                .unwrap_or_default(),
            phase: format!("{}遁", self.phase.name()),
            year_pillar: self.year_pillar.to_string(),
            year_property: self.year_pillar.property(),
            year_nayin: self.year_pillar.nayin().name().to_string(),
            month_pillar: self.month_pillar.to_string(),
            month_property: self.month_pillar.property(),
            month_nayin: self.month_pillar.nayin().name().to_string(),
            day_pillar: self.day_pillar.to_string(),
            day_property: self.day_pillar.property(),
            day_nayin: self.day_pillar.nayin().name().to_string(),
            hour_pillar: self.hour_pillar.to_string(),
            hour_property: self.hour_pillar.property(),
            hour_nayin: self.hour_pillar.nayin().name().to_string(),
            fetus_origin: self.fetus_origin.to_string(),
            fetus_origin_property: self.fetus_origin.property(),
            life_palace: life_palace_label(self.life_palace),
            year_star: self.stars.year.value(),
            year_star_element: self.stars.year.element().name().to_string(),
            month_star: self.stars.month.value(),
            month_star_element: self.stars.month.element().name().to_string(),
            day_star: self.stars.day.value(),
            day_star_element: self.stars.day.element().name().to_string(),
            hour_star: self.stars.hour.value(),
            hour_star_element: self.stars.hour.element().name().to_string(),
        }
    }
}

/// Flat, serializable view of a [`CalendarRow`], in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarRecord {
    pub date: String,
    pub lunar_label: String,
    pub slot: String,
    pub period: String,
    pub zone_abbreviation: String,
    pub solar_term: String,
    pub phase: String,
    pub year_pillar: String,
    pub year_property: String,
    pub year_nayin: String,
    pub month_pillar: String,
    pub month_property: String,
    pub month_nayin: String,
    pub day_pillar: String,
    pub day_property: String,
    pub day_nayin: String,
    pub hour_pillar: String,
    pub hour_property: String,
    pub hour_nayin: String,
    pub fetus_origin: String,
    pub fetus_origin_property: String,
    pub life_palace: String,
    pub year_star: u8,
    pub year_star_element: String,
    pub month_star: u8,
    pub month_star_element: String,
    pub day_star: u8,
    pub day_star_element: String,
    pub hour_star: u8,
    pub hour_star_element: String,
}
