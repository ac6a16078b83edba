//! Narrow interfaces to the external solar-longitude and lunar-label sources.
//!
//! The calendar never computes ephemerides or lunar dates itself; callers
//! plug in whatever backend they have.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::OracleError;

/// Apparent geocentric ecliptic longitude of the Sun.
pub trait SolarLongitude {
    /// Longitude in degrees, expected in `[0, 360)`.
    fn solar_longitude_deg(&self, instant: DateTime<Utc>) -> Result<f64, OracleError>;
}

/// Lunar month + day label for a civil date (e.g. "十一月初二").
pub trait LunarDateLabel {
    fn lunar_label(&self, date: NaiveDate) -> Result<String, OracleError>;
}

impl<T: SolarLongitude + ?Sized> SolarLongitude for &T {
    fn solar_longitude_deg(&self, instant: DateTime<Utc>) -> Result<f64, OracleError> {
        (**self).solar_longitude_deg(instant)
    }
}

impl<T: LunarDateLabel + ?Sized> LunarDateLabel for &T {
    fn lunar_label(&self, date: NaiveDate) -> Result<String, OracleError> {
        (**self).lunar_label(date)
    }
}

/// Lunar source that leaves every label empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarLabels;

impl LunarDateLabel for NoLunarLabels {
    fn lunar_label(&self, _date: NaiveDate) -> Result<String, OracleError> {
        Ok(String::new())
    }
}

/// Query the oracle and reject values outside `[0, 360)`.
///
/// A value of exactly 360 is accepted and folded to 0.
pub(crate) fn checked_longitude<S: SolarLongitude + ?Sized>(
    solar: &S,
    instant: DateTime<Utc>,
) -> Result<f64, OracleError> {
    let lon = solar.solar_longitude_deg(instant)?;
    if !lon.is_finite() {
        return Err(OracleError::Malformed {
            value: lon,
            detail: "not finite",
        });
    }
    if !(0.0..=360.0).contains(&lon) {
        return Err(OracleError::Malformed {
            value: lon,
            detail: "outside [0, 360)",
        });
    }
    Ok(if lon >= 360.0 { 0.0 } else { lon })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Fixed(f64);

    impl SolarLongitude for Fixed {
        fn solar_longitude_deg(&self, _instant: DateTime<Utc>) -> Result<f64, OracleError> {
            Ok(self.0)
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 21, 4, 0, 0).unwrap()
    }

    #[test]
    fn accepts_in_range() {
        assert_eq!(checked_longitude(&Fixed(270.5), noon()), Ok(270.5));
        assert_eq!(checked_longitude(&Fixed(360.0), noon()), Ok(0.0));
    }

    #[test]
    fn rejects_nan_and_out_of_range() {
        assert!(matches!(
            checked_longitude(&Fixed(f64::NAN), noon()),
            Err(OracleError::Malformed { .. })
        ));
        assert!(matches!(
            checked_longitude(&Fixed(-1.0), noon()),
            Err(OracleError::Malformed { .. })
        ));
        assert!(matches!(
            checked_longitude(&Fixed(400.0), noon()),
            Err(OracleError::Malformed { .. })
        ));
    }

    #[test]
    fn borrowed_oracle_delegates() {
        let f = Fixed(12.0);
        let r = &f;
        assert_eq!(checked_longitude(&r, noon()), Ok(12.0));
    }

    #[test]
    fn no_lunar_labels_is_empty() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(NoLunarLabels.lunar_label(d), Ok(String::new()));
    }
}
