//! The 24 solar terms (jieqi).
//!
//! Each term starts where the Sun's apparent ecliptic longitude crosses a
//! multiple of 15 deg. Index 0 is the Spring Equinox at 0 deg; Start of
//! Spring (立春), which opens the sexagenary year, is index 21 at 315 deg.

use crate::util::normalize_longitude;

/// Width of one solar term in degrees of solar longitude.
pub const SOLAR_TERM_SPAN_DEG: f64 = 15.0;

/// Solar longitude of Start of Spring (立春), the year boundary.
pub const START_OF_SPRING_DEG: f64 = 315.0;

/// The 24 solar terms starting from the Spring Equinox (0 deg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    SpringEquinox,
    ClearAndBright,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostsDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
}

/// All 24 solar terms in order (0 = Spring Equinox).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::SpringEquinox,
    SolarTerm::ClearAndBright,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostsDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
];

const ALL_SOLAR_TERM_NAMES: [&str; 24] = [
    "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑", "立秋", "處暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "驚蟄",
];

const ALL_SOLAR_TERM_ENGLISH: [&str; 24] = [
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost's Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
];

impl SolarTerm {
    /// Chinese name, e.g. "立春".
    pub fn name(self) -> &'static str {
        ALL_SOLAR_TERM_NAMES[self.index() as usize]
    }

    pub fn english_name(self) -> &'static str {
        ALL_SOLAR_TERM_ENGLISH[self.index() as usize]
    }

    /// 0-based index (Spring Equinox=0 .. Awakening of Insects=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Solar longitude at which the term begins.
    pub fn start_longitude_deg(self) -> f64 {
        self.index() as f64 * SOLAR_TERM_SPAN_DEG
    }

    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 24, "solar term index {index} out of range");
        ALL_SOLAR_TERMS[index as usize]
    }

    /// Term in force at a solar longitude.
    pub fn from_longitude(lon_deg: f64) -> Self {
        Self::from_index(solar_term_index(lon_deg))
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-year phase that sets the direction of Day- and Hour-Star cycling.
///
/// Yang (陽遁) runs from the winter solstice to the summer solstice,
/// longitude in [270, 360) or [0, 90); Yin (陰遁) covers [90, 270).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarPhase {
    Yang,
    Yin,
}

impl SolarPhase {
    pub fn from_longitude(lon_deg: f64) -> Self {
        let lon = normalize_longitude(lon_deg);
        if (90.0..270.0).contains(&lon) { Self::Yin } else { Self::Yang }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    /// "陽" or "陰".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}

/// `floor(lon / 15)` after normalizing to [0, 360).
pub fn solar_term_index(lon_deg: f64) -> u8 {
    let idx = (normalize_longitude(lon_deg) / SOLAR_TERM_SPAN_DEG).floor() as u8;
    idx.min(23)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn start_of_spring_at_315() {
        assert_eq!(SolarTerm::StartOfSpring.start_longitude_deg(), START_OF_SPRING_DEG);
        assert_eq!(SolarTerm::from_longitude(315.0).name(), "立春");
    }

    #[test]
    fn boundaries() {
        assert_eq!(solar_term_index(0.0), 0);
        assert_eq!(solar_term_index(14.999), 0);
        assert_eq!(solar_term_index(15.0), 1);
        assert_eq!(solar_term_index(270.0), 18);
        assert_eq!(solar_term_index(359.999), 23);
        assert_eq!(solar_term_index(-0.5), 23);
    }

    #[test]
    fn phase_switches_at_solstices() {
        assert_eq!(SolarPhase::from_longitude(89.99), SolarPhase::Yang);
        assert_eq!(SolarPhase::from_longitude(90.0), SolarPhase::Yin);
        assert_eq!(SolarPhase::from_longitude(269.99), SolarPhase::Yin);
        assert_eq!(SolarPhase::from_longitude(270.0), SolarPhase::Yang);
        assert!(SolarPhase::from_longitude(0.0).is_yang());
    }

    #[test]
    fn winter_solstice_name() {
        assert_eq!(SolarTerm::WinterSolstice.name(), "冬至");
        assert_eq!(SolarTerm::WinterSolstice.english_name(), "Winter Solstice");
    }
}
