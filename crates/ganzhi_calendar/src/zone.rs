//! Civil-time to absolute-time resolution.
//!
//! Local wall-clock times are resolved with a fixed policy so the same input
//! always maps to the same instant:
//! - a unique local time maps to that instant;
//! - an ambiguous time (clocks set back) maps to the earlier instant;
//! - a skipped time (clocks set forward, or a skipped day) is read with the
//!   offset in force before the gap.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::CalendarError;

/// How far back to look for the offset preceding a gap.
const GAP_SEARCH_HOURS: i64 = 48;

/// Parse an IANA zone identifier such as `"Asia/Hong_Kong"`.
pub fn parse_zone(zone_id: &str) -> Result<Tz, CalendarError> {
    zone_id
        .parse::<Tz>()
        .map_err(|_| CalendarError::UnknownTimeZone(zone_id.to_string()))
}

/// Resolve a local date-time in `zone` to a zoned instant.
pub fn resolve_local(zone: Tz, local: NaiveDateTime) -> Result<DateTime<Tz>, CalendarError> {
    let mapped = zone.from_local_datetime(&local);
    if let Some(dt) = mapped.single() {
        return Ok(dt);
    }
    if let Some(dt) = mapped.earliest() {
        debug!(%local, zone = zone.name(), "ambiguous local time, taking earlier instant");
        return Ok(dt);
    }

    let offset_secs = offset_before_gap(zone, local)?;
    let utc = local
        .checked_sub_signed(Duration::seconds(offset_secs as i64))
        .ok_or(CalendarError::DateOutOfRange(local.date()))?;
    let resolved = zone.from_utc_datetime(&utc);
    debug!(%local, zone = zone.name(), resolved = %resolved, "local time in DST gap");
    Ok(resolved)
}

/// Resolve straight to UTC.
pub fn resolve_local_utc(zone: Tz, local: NaiveDateTime) -> Result<DateTime<Utc>, CalendarError> {
    Ok(resolve_local(zone, local)?.with_timezone(&Utc))
}

/// Short zone name in force at an instant, e.g. "HKT" or "BST".
pub fn zone_abbreviation(instant: &DateTime<Tz>) -> String {
    instant.format("%Z").to_string()
}

/// UTC offset (seconds east) in force just before the gap containing `local`.
fn offset_before_gap(zone: Tz, local: NaiveDateTime) -> Result<i32, CalendarError> {
    for hours in 1..=GAP_SEARCH_HOURS {
        let earlier = local
            .checked_sub_signed(Duration::hours(hours))
            .ok_or(CalendarError::DateOutOfRange(local.date()))?;
        if let Some(dt) = zone.from_local_datetime(&earlier).earliest() {
            return Ok(dt.offset().fix().local_minus_utc());
        }
    }
    // No zone has a gap this long; fall back to the zone's offset at the UTC
    // reading of the wall clock.
    let dt = zone.from_utc_datetime(&local);
    Ok(dt.offset().fix().local_minus_utc())
}
