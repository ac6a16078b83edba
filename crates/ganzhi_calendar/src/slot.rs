//! The fixed 13-slot intraday schedule.
//!
//! The Rat hour (23:00-01:00) straddles midnight and is split in two: Early
//! Rat opens the civil day, Late Rat closes it and belongs to the next
//! sexagenary day.

use ganzhi_base::Branch;

/// One of the 13 intraday slots, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    EarlyRat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
    LateRat,
}

/// All 13 slots in output order.
pub const ALL_TIME_SLOTS: [TimeSlot; 13] = [
    TimeSlot::EarlyRat,
    TimeSlot::Ox,
    TimeSlot::Tiger,
    TimeSlot::Rabbit,
    TimeSlot::Dragon,
    TimeSlot::Snake,
    TimeSlot::Horse,
    TimeSlot::Goat,
    TimeSlot::Monkey,
    TimeSlot::Rooster,
    TimeSlot::Dog,
    TimeSlot::Pig,
    TimeSlot::LateRat,
];

impl TimeSlot {
    /// Chinese slot name, e.g. "早子時".
    pub const fn name(self) -> &'static str {
        match self {
            Self::EarlyRat => "早子時",
            Self::Ox => "丑時",
            Self::Tiger => "寅時",
            Self::Rabbit => "卯時",
            Self::Dragon => "辰時",
            Self::Snake => "巳時",
            Self::Horse => "午時",
            Self::Goat => "未時",
            Self::Monkey => "申時",
            Self::Rooster => "酉時",
            Self::Dog => "戌時",
            Self::Pig => "亥時",
            Self::LateRat => "晚子時",
        }
    }

    /// Civil clock span, e.g. "01:00-03:00".
    pub const fn period(self) -> &'static str {
        match self {
            Self::EarlyRat => "00:00-01:00",
            Self::Ox => "01:00-03:00",
            Self::Tiger => "03:00-05:00",
            Self::Rabbit => "05:00-07:00",
            Self::Dragon => "07:00-09:00",
            Self::Snake => "09:00-11:00",
            Self::Horse => "11:00-13:00",
            Self::Goat => "13:00-15:00",
            Self::Monkey => "15:00-17:00",
            Self::Rooster => "17:00-19:00",
            Self::Dog => "19:00-21:00",
            Self::Pig => "21:00-23:00",
            Self::LateRat => "23:00-24:00",
        }
    }

    /// Branch ordinal of the hour (0 for both Rat slots).
    pub const fn branch_ordinal(self) -> u8 {
        match self {
            Self::EarlyRat | Self::LateRat => 0,
            other => other as u8,
        }
    }

    pub fn branch(self) -> Branch {
        Branch::from_index(self.branch_ordinal())
    }

    /// Whether the slot's pillars come from the next civil day.
    pub const fn is_late_rat(self) -> bool {
        matches!(self, Self::LateRat)
    }

    /// Position in [`ALL_TIME_SLOTS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [TimeSlot; 13] {
        &ALL_TIME_SLOTS
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
