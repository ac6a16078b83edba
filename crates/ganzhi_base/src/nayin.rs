//! Nayin (納音, "received sound") of the 60 sexagenary pillars.
//!
//! The 60-pillar cycle is split into 30 consecutive pairs; both pillars of a
//! pair share one Nayin. Pair k covers cycle indices 2k and 2k+1, so 甲子 and
//! 乙丑 are both 海中金.

use crate::element::Element;

/// The 30 Nayin in cycle order (pair 0 = 甲子/乙丑).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nayin {
    GoldInTheSea,
    FurnaceFire,
    GreatForestWood,
    RoadsideEarth,
    SwordEdgeMetal,
    MountainTopFire,
    ValleyStreamWater,
    CityWallEarth,
    WhiteWaxMetal,
    WillowWood,
    SpringWater,
    RoofTileEarth,
    ThunderboltFire,
    PineCypressWood,
    LongRiverWater,
    SandGold,
    MountainFootFire,
    FlatlandWood,
    WallEarth,
    GoldLeafMetal,
    LampFire,
    HeavenlyRiverWater,
    PostStationEarth,
    HairpinMetal,
    MulberryWood,
    GreatStreamWater,
    SandEarth,
    SkyFire,
    PomegranateWood,
    GreatSeaWater,
}

/// All 30 Nayin in cycle order.
pub const ALL_NAYIN: [Nayin; 30] = [
    Nayin::GoldInTheSea,
    Nayin::FurnaceFire,
    Nayin::GreatForestWood,
    Nayin::RoadsideEarth,
    Nayin::SwordEdgeMetal,
    Nayin::MountainTopFire,
    Nayin::ValleyStreamWater,
    Nayin::CityWallEarth,
    Nayin::WhiteWaxMetal,
    Nayin::WillowWood,
    Nayin::SpringWater,
    Nayin::RoofTileEarth,
    Nayin::ThunderboltFire,
    Nayin::PineCypressWood,
    Nayin::LongRiverWater,
    Nayin::SandGold,
    Nayin::MountainFootFire,
    Nayin::FlatlandWood,
    Nayin::WallEarth,
    Nayin::GoldLeafMetal,
    Nayin::LampFire,
    Nayin::HeavenlyRiverWater,
    Nayin::PostStationEarth,
    Nayin::HairpinMetal,
    Nayin::MulberryWood,
    Nayin::GreatStreamWater,
    Nayin::SandEarth,
    Nayin::SkyFire,
    Nayin::PomegranateWood,
    Nayin::GreatSeaWater,
];

const ALL_NAYIN_NAMES: [&str; 30] = [
    "海中金", "爐中火", "大林木", "路旁土", "劍鋒金", "山頭火", "澗下水", "城頭土", "白蠟金",
    "楊柳木", "泉中水", "屋上土", "霹靂火", "松柏木", "長流水", "砂中金", "山下火", "平地木",
    "壁上土", "金箔金", "覆燈火", "天河水", "大驛土", "釵釧金", "桑柘木", "大溪水", "沙中土",
    "天上火", "石榴木", "大海水",
];

impl Nayin {
    /// Chinese name, e.g. "海中金".
    pub fn name(self) -> &'static str {
        ALL_NAYIN_NAMES[self.index() as usize]
    }

    /// 0-based pair index (0..29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nayin for a sexagenary cycle index (0..59).
    pub fn from_cycle_index(cycle_index: u8) -> Self {
        debug_assert!(cycle_index < 60, "cycle index {cycle_index} out of range");
        ALL_NAYIN[(cycle_index / 2) as usize]
    }

    /// Element carried by the Nayin (last character of its name).
    pub const fn element(self) -> Element {
        match self {
            Self::GoldInTheSea
            | Self::SwordEdgeMetal
            | Self::WhiteWaxMetal
            | Self::SandGold
            | Self::GoldLeafMetal
            | Self::HairpinMetal => Element::Metal,
            Self::FurnaceFire
            | Self::MountainTopFire
            | Self::ThunderboltFire
            | Self::MountainFootFire
            | Self::LampFire
            | Self::SkyFire => Element::Fire,
            Self::GreatForestWood
            | Self::WillowWood
            | Self::PineCypressWood
            | Self::FlatlandWood
            | Self::MulberryWood
            | Self::PomegranateWood => Element::Wood,
            Self::RoadsideEarth
            | Self::CityWallEarth
            | Self::RoofTileEarth
            | Self::WallEarth
            | Self::PostStationEarth
            | Self::SandEarth => Element::Earth,
            Self::ValleyStreamWater
            | Self::SpringWater
            | Self::LongRiverWater
            | Self::HeavenlyRiverWater
            | Self::GreatStreamWater
            | Self::GreatSeaWater => Element::Water,
        }
    }
}

impl std::fmt::Display for Nayin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAYIN.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn element_matches_name_suffix() {
        for n in ALL_NAYIN {
            assert!(n.name().ends_with(n.element().name()), "{}", n.name());
        }
    }

    #[test]
    fn adjacent_cycle_indices_share_nayin() {
        for k in 0..30u8 {
            assert_eq!(Nayin::from_cycle_index(2 * k), Nayin::from_cycle_index(2 * k + 1));
        }
        assert_eq!(Nayin::from_cycle_index(59), Nayin::GreatSeaWater);
    }
}
