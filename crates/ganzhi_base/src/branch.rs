//! Earthly Branches (dizhi): the 12-symbol cycle.
//!
//! The ordinal (0 = Rat .. 11 = Pig) drives all modular arithmetic and also
//! names the twelve two-hour periods of the civil day.

use crate::element::{Element, ElementTag, Polarity};

/// The 12 Earthly Branches starting from Zi (Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Number of branches in the cycle.
pub const BRANCH_COUNT: u8 = 12;

/// The three four-branch groups used by the Nine-Star start tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchGroup {
    /// 子午卯酉 (Rat, Horse, Rabbit, Rooster).
    Cardinal,
    /// 辰戌丑未 (Dragon, Dog, Ox, Sheep).
    Storage,
    /// 寅申巳亥 (Tiger, Monkey, Snake, Pig).
    Growth,
}

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Sheep",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based ordinal (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a 0-based ordinal.
    ///
    /// # Panics
    /// An ordinal outside 0..=11 is an arithmetic defect upstream and panics.
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < BRANCH_COUNT, "branch index {index} out of range");
        ALL_BRANCHES[index as usize]
    }

    /// Branch for any integer position in the cycle (Euclidean modulo 12).
    pub fn from_cycle(position: i64) -> Self {
        Self::from_index(position.rem_euclid(BRANCH_COUNT as i64) as u8)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub const fn tag(self) -> ElementTag {
        ElementTag::new(self.polarity(), self.element())
    }

    /// Property string, e.g. "陽水" for Zi.
    pub fn property(self) -> String {
        self.tag().to_string()
    }

    pub const fn group(self) -> BranchGroup {
        match self {
            Self::Zi | Self::Wu | Self::Mao | Self::You => BranchGroup::Cardinal,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => BranchGroup::Storage,
            Self::Yin | Self::Shen | Self::Si | Self::Hai => BranchGroup::Growth,
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in Branch::all().iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), *b);
        }
    }

    #[test]
    fn properties_match_table() {
        let expected = [
            "陽水", "陰土", "陽木", "陰木", "陽土", "陰火", "陽火", "陰土", "陽金", "陰金", "陽土",
            "陰水",
        ];
        for (b, want) in ALL_BRANCHES.iter().zip(expected) {
            assert_eq!(b.property(), want, "branch {}", b.name());
        }
    }

    #[test]
    fn groups_have_four_members() {
        for group in [BranchGroup::Cardinal, BranchGroup::Storage, BranchGroup::Growth] {
            let n = ALL_BRANCHES.iter().filter(|b| b.group() == group).count();
            assert_eq!(n, 4, "{group:?}");
        }
    }

    #[test]
    fn animals() {
        assert_eq!(Branch::Zi.animal(), "Rat");
        assert_eq!(Branch::Wu.animal(), "Horse");
        assert_eq!(Branch::Hai.animal(), "Pig");
        let distinct: std::collections::HashSet<_> =
            ALL_BRANCHES.iter().map(|b| b.animal()).collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn from_cycle_wraps_negative() {
        assert_eq!(Branch::from_cycle(-1), Branch::Hai);
        assert_eq!(Branch::from_cycle(25), Branch::Chou);
    }
}
