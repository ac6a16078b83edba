//! Small numeric helpers shared by the calculators.

/// Normalize a longitude to [0, 360) degrees.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0; that case
/// folds back to 0.
pub fn normalize_longitude(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Map a Euclidean residue mod 9 onto the star range 1..=9 (0 becomes 9).
pub(crate) fn fold_nine(value: i64) -> u8 {
    let r = value.rem_euclid(9) as u8;
    if r == 0 { 9 } else { r }
}
