//! Heavenly Stems (tiangan): the 10-symbol cycle.
//!
//! Stems alternate Yang/Yin and advance through the elements two at a time:
//! 甲乙 Wood, 丙丁 Fire, 戊己 Earth, 庚辛 Metal, 壬癸 Water.

use crate::element::{Element, ElementTag, Polarity};

/// The 10 Heavenly Stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Number of stems in the cycle.
pub const STEM_COUNT: u8 = 10;

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a 0-based index.
    ///
    /// # Panics
    /// An index outside 0..=9 is an arithmetic defect upstream and panics.
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < STEM_COUNT, "stem index {index} out of range");
        ALL_STEMS[index as usize]
    }

    /// Stem for any integer position in the cycle (Euclidean modulo 10).
    pub fn from_cycle(position: i64) -> Self {
        Self::from_index(position.rem_euclid(STEM_COUNT as i64) as u8)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub const fn tag(self) -> ElementTag {
        ElementTag::new(self.polarity(), self.element())
    }

    /// Property string, e.g. "陽木" for Jia.
    pub fn property(self) -> String {
        self.tag().to_string()
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in Stem::all().iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn properties_match_table() {
        let expected = [
            "陽木", "陰木", "陽火", "陰火", "陽土", "陰土", "陽金", "陰金", "陽水", "陰水",
        ];
        for (s, want) in ALL_STEMS.iter().zip(expected) {
            assert_eq!(s.property(), want, "stem {}", s.name());
        }
    }

    #[test]
    fn from_cycle_wraps_negative() {
        assert_eq!(Stem::from_cycle(-1), Stem::Gui);
        assert_eq!(Stem::from_cycle(23), Stem::Ding);
    }

    #[test]
    #[should_panic]
    fn from_index_out_of_range_panics() {
        let _ = Stem::from_index(10);
    }
}
