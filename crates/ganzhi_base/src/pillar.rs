//! Sexagenary pillars: a stem paired with a branch.
//!
//! Only same-parity pairs occur (Yang stem with Yang branch, Yin with Yin),
//! which gives the 60 members of the cycle. Cycle index n satisfies
//! `n mod 10 = stem` and `n mod 12 = branch`.

use crate::branch::Branch;
use crate::nayin::Nayin;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LENGTH: u8 = 60;

/// A stem-branch pair identifying a year, month, day or hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch.
    ///
    /// Mixed parity is not a cycle member and trips a debug assertion.
    pub fn new(stem: Stem, branch: Branch) -> Self {
        debug_assert_eq!(
            stem.index() % 2,
            branch.index() % 2,
            "{}{} is not a sexagenary pillar",
            stem.name(),
            branch.name()
        );
        Self { stem, branch }
    }

    /// Build from 0-based stem and branch indices.
    pub fn from_indices(stem_index: u8, branch_index: u8) -> Self {
        Self::new(Stem::from_index(stem_index), Branch::from_index(branch_index))
    }

    /// Pillar at position `n` of the cycle (0 = 甲子 .. 59 = 癸亥).
    pub fn from_cycle_index(n: u8) -> Self {
        debug_assert!(n < CYCLE_LENGTH, "cycle index {n} out of range");
        Self::from_indices(n % 10, n % 12)
    }

    /// Pillar for any integer offset from 甲子 (Euclidean modulo).
    pub fn from_offset(offset: i64) -> Self {
        Self::new(Stem::from_cycle(offset), Branch::from_cycle(offset))
    }

    /// Position in the 60-cycle (0..59).
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(CYCLE_LENGTH as i16) as u8
    }

    /// Stem property followed by branch property, e.g. "陽木陽水".
    pub fn property(self) -> String {
        format!("{}{}", self.stem.tag(), self.branch.tag())
    }

    pub fn nayin(self) -> Nayin {
        Nayin::from_cycle_index(self.cycle_index())
    }

    /// Pinyin form, e.g. "Jia-Zi".
    pub fn pinyin(self) -> String {
        format!("{}-{}", self.stem.pinyin(), self.branch.pinyin())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}
