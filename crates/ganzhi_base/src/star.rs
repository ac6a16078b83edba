//! Nine Stars (flying stars) and their year/month/day/hour cycles.
//!
//! Year and month stars always fly backward. Day and hour stars fly forward
//! in the Yang phase and backward in the Yin phase.

use crate::branch::{Branch, BranchGroup};
use crate::element::Element;
use crate::solar_term::SolarPhase;
use crate::util::fold_nine;

/// Logical year whose year star is [`YEAR_STAR_ANCHOR`].
pub const YEAR_STAR_ANCHOR_YEAR: i32 = 2024;

/// Year star of [`YEAR_STAR_ANCHOR_YEAR`] (三碧).
pub const YEAR_STAR_ANCHOR: u8 = 3;

/// The nine stars, value 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NineStar {
    OneWhite,
    TwoBlack,
    ThreeJade,
    FourGreen,
    FiveYellow,
    SixWhite,
    SevenRed,
    EightWhite,
    NinePurple,
}

/// All nine stars in value order (index 0 = star 1).
pub const ALL_NINE_STARS: [NineStar; 9] = [
    NineStar::OneWhite,
    NineStar::TwoBlack,
    NineStar::ThreeJade,
    NineStar::FourGreen,
    NineStar::FiveYellow,
    NineStar::SixWhite,
    NineStar::SevenRed,
    NineStar::EightWhite,
    NineStar::NinePurple,
];

impl NineStar {
    /// Chinese name, e.g. "一白".
    pub const fn name(self) -> &'static str {
        match self {
            Self::OneWhite => "一白",
            Self::TwoBlack => "二黑",
            Self::ThreeJade => "三碧",
            Self::FourGreen => "四綠",
            Self::FiveYellow => "五黃",
            Self::SixWhite => "六白",
            Self::SevenRed => "七赤",
            Self::EightWhite => "八白",
            Self::NinePurple => "九紫",
        }
    }

    /// Star number 1..=9.
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    pub const fn element(self) -> Element {
        match self {
            Self::OneWhite => Element::Water,
            Self::TwoBlack | Self::FiveYellow | Self::EightWhite => Element::Earth,
            Self::ThreeJade | Self::FourGreen => Element::Wood,
            Self::SixWhite | Self::SevenRed => Element::Metal,
            Self::NinePurple => Element::Fire,
        }
    }

    /// Star with number `value`; `None` outside 1..=9.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=9 => Some(ALL_NINE_STARS[(value - 1) as usize]),
            _ => None,
        }
    }

    fn from_folded(value: u8) -> Self {
        debug_assert!((1..=9).contains(&value), "star value {value} out of range");
        ALL_NINE_STARS[(value - 1) as usize]
    }
}

impl std::fmt::Display for NineStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Year star: counts down one per logical year from 2024 = 3.
pub fn year_star(logical_year: i32) -> NineStar {
    let offset = logical_year as i64 - YEAR_STAR_ANCHOR_YEAR as i64;
    NineStar::from_folded(fold_nine(YEAR_STAR_ANCHOR as i64 - offset))
}

/// Month star for a 1-based solar month index (1 = month opening at Start of
/// Spring), keyed on the year pillar's branch group.
pub fn month_star(year_branch: Branch, month_index: u8) -> NineStar {
    debug_assert!((1..=12).contains(&month_index));
    let base: i64 = match year_branch.group() {
        BranchGroup::Cardinal => 8,
        BranchGroup::Storage => 5,
        BranchGroup::Growth => 2,
    };
    let value = (base - (month_index as i64 - 1) - 1).rem_euclid(9) + 1;
    NineStar::from_folded(value as u8)
}

/// Day star from the signed day count since the reference day (star 1).
///
/// Yang phase counts forward from 1, Yin phase counts backward from 9.
pub fn day_star(days_from_reference: i64, phase: SolarPhase) -> NineStar {
    let raw = match phase {
        SolarPhase::Yang => 1 + days_from_reference,
        SolarPhase::Yin => 9 - days_from_reference,
    };
    NineStar::from_folded(fold_nine(raw))
}

/// Hour star for the anchor day's phase and branch and the hour's branch
/// ordinal (0 for both Rat slots).
pub fn hour_star(phase: SolarPhase, day_branch: Branch, hour_ordinal: u8) -> NineStar {
    debug_assert!(hour_ordinal < 12);
    let h = hour_ordinal as i64;
    let value = match phase {
        SolarPhase::Yang => {
            let start = match day_branch.group() {
                BranchGroup::Cardinal => 1,
                BranchGroup::Growth => 7,
                BranchGroup::Storage => 4,
            };
            (start + h - 1).rem_euclid(9) + 1
        }
        SolarPhase::Yin => {
            let start = match day_branch.group() {
                BranchGroup::Cardinal => 9,
                BranchGroup::Growth => 3,
                BranchGroup::Storage => 6,
            };
            (start - h - 1).rem_euclid(9) + 1
        }
    };
    NineStar::from_folded(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn values_sequential() {
        for (i, s) in ALL_NINE_STARS.iter().enumerate() {
            assert_eq!(s.value() as usize, i + 1);
            assert_eq!(NineStar::from_value(i as u8 + 1), Some(*s));
        }
        assert_eq!(NineStar::from_value(0), None);
        assert_eq!(NineStar::from_value(10), None);
    }

    #[test]
    fn star_elements() {
        assert_eq!(NineStar::OneWhite.element().name(), "水");
        assert_eq!(NineStar::FourGreen.element().name(), "木");
        assert_eq!(NineStar::NinePurple.element().name(), "火");
    }

    #[test]
    fn year_star_anchor_and_descent() {
        assert_eq!(year_star(2024).value(), 3);
        assert_eq!(year_star(2025).value(), 2);
        assert_eq!(year_star(2026).value(), 1);
        assert_eq!(year_star(2027).value(), 9);
        assert_eq!(year_star(2023).value(), 4);
        assert_eq!(year_star(2017).value(), 1);
    }

    #[test]
    fn month_star_bases() {
        // 子 year starts at 8, 辰 at 5, 寅 at 2
        assert_eq!(month_star(Branch::Zi, 1).value(), 8);
        assert_eq!(month_star(Branch::Chen, 1).value(), 5);
        assert_eq!(month_star(Branch::Yin, 1).value(), 2);
        assert_eq!(month_star(Branch::Zi, 2).value(), 7);
        assert_eq!(month_star(Branch::Yin, 3).value(), 9);
        assert_eq!(month_star(Branch::Chen, 12).value(), 3);
    }

    #[test]
    fn day_star_directions() {
        assert_eq!(day_star(0, SolarPhase::Yang).value(), 1);
        assert_eq!(day_star(1, SolarPhase::Yang).value(), 2);
        assert_eq!(day_star(8, SolarPhase::Yang).value(), 9);
        assert_eq!(day_star(-1, SolarPhase::Yang).value(), 9);
        assert_eq!(day_star(0, SolarPhase::Yin).value(), 9);
        assert_eq!(day_star(1, SolarPhase::Yin).value(), 8);
        assert_eq!(day_star(-1, SolarPhase::Yin).value(), 1);
    }

    #[test]
    fn hour_star_rat_starts() {
        assert_eq!(hour_star(SolarPhase::Yang, Branch::Zi, 0).value(), 1);
        assert_eq!(hour_star(SolarPhase::Yang, Branch::Chen, 0).value(), 4);
        assert_eq!(hour_star(SolarPhase::Yang, Branch::Yin, 0).value(), 7);
        assert_eq!(hour_star(SolarPhase::Yin, Branch::Zi, 0).value(), 9);
        assert_eq!(hour_star(SolarPhase::Yin, Branch::Chen, 0).value(), 6);
        assert_eq!(hour_star(SolarPhase::Yin, Branch::Yin, 0).value(), 3);
    }

    #[test]
    fn hour_star_flies_with_phase() {
        assert_eq!(hour_star(SolarPhase::Yang, Branch::Zi, 11).value(), 3);
        assert_eq!(hour_star(SolarPhase::Yin, Branch::Zi, 11).value(), 7);
    }

    #[test]
    fn every_star_in_range() {
        for y in 1900..2100 {
            assert!((1..=9).contains(&year_star(y).value()));
        }
        for b in ALL_BRANCHES {
            for m in 1..=12 {
                assert!((1..=9).contains(&month_star(b, m).value()));
            }
            for h in 0..12 {
                for phase in [SolarPhase::Yang, SolarPhase::Yin] {
                    assert!((1..=9).contains(&hour_star(phase, b, h).value()));
                }
            }
        }
        for d in -1000..1000 {
            for phase in [SolarPhase::Yang, SolarPhase::Yin] {
                assert!((1..=9).contains(&day_star(d, phase).value()));
            }
        }
    }
}
