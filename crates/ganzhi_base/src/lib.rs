//! Stem-branch tables and sexagenary arithmetic.
//!
//! This crate provides:
//! - The 10 Heavenly Stems, 12 Earthly Branches and their element/polarity tags
//! - The 60-pillar cycle with its Nayin sound elements
//! - The 24 solar terms and the Yang/Yin half-year phase
//! - Year/month/day/hour pillar and Nine-Star calculators
//! - Fetus Origin and Life Palace
//!
//! Everything here is a pure function of already-resolved inputs (civil year
//! and month, solar longitude in degrees, day offsets). Time zones and the
//! solar-longitude source live in `ganzhi_calendar`.

pub mod branch;
pub mod derived;
pub mod element;
pub mod nayin;
pub mod pillar;
pub mod sexagenary;
pub mod solar_term;
pub mod star;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch, BranchGroup};
pub use derived::{fetus_origin, life_palace, life_palace_label};
pub use element::{ALL_ELEMENTS, Element, ElementTag, Polarity};
pub use nayin::{ALL_NAYIN, Nayin};
pub use pillar::{CYCLE_LENGTH, Pillar};
pub use sexagenary::{
    DAY_REFERENCE_YMD, MonthStemRule, SOLAR_MONTH_SPAN_DEG, YEAR_CYCLE_OFFSET, day_pillar,
    hour_pillar, logical_year, month_index_from_longitude, month_pillar, rat_hour_stem,
    year_pillar,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, SOLAR_TERM_SPAN_DEG, START_OF_SPRING_DEG, SolarPhase, SolarTerm,
    solar_term_index,
};
pub use star::{
    ALL_NINE_STARS, NineStar, YEAR_STAR_ANCHOR, YEAR_STAR_ANCHOR_YEAR, day_star, hour_star,
    month_star, year_star,
};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem};
pub use util::normalize_longitude;
