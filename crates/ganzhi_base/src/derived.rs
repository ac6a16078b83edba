//! Secondary points derived from already-computed pillars.

use crate::branch::Branch;
use crate::pillar::Pillar;

/// Fetus Origin (胎元): month stem advanced by one, month branch by three.
pub fn fetus_origin(month_pillar: Pillar) -> Pillar {
    Pillar::from_indices(
        (month_pillar.stem.index() + 1) % 10,
        (month_pillar.branch.index() + 3) % 12,
    )
}

/// Life Palace (命宮) branch from the 1-based solar month index and the
/// hour pillar's branch.
///
/// Both inputs are turned into 1-based branch numbers; the palace is the
/// branch numbered `(14 - (m + h)) mod 12`, with 0 read as 12.
pub fn life_palace(month_index: u8, hour_branch: Branch) -> Branch {
    debug_assert!((1..=12).contains(&month_index));
    let m = ((month_index as i64 + 1) % 12) + 1;
    let h = hour_branch.index() as i64 + 1;
    let mut idx = (14 - (m + h)).rem_euclid(12);
    if idx <= 0 {
        idx += 12;
    }
    Branch::from_index((idx - 1) as u8)
}

/// Life Palace display form, e.g. "卯宮".
pub fn life_palace_label(branch: Branch) -> String {
    format!("{}宮", branch.name())
}
