//! Error types for calendar generation.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure reported by an external oracle.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The oracle could not answer (missing data, backend failure).
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
    /// The oracle answered with a value outside its contract.
    #[error("malformed oracle value {value}: {detail}")]
    Malformed { value: f64, detail: &'static str },
}

/// Errors from calendar generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Error from the solar-longitude oracle.
    #[error("solar longitude: {0}")]
    Oracle(#[from] OracleError),
    /// Zone identifier is not a known IANA zone.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    /// Date arithmetic left the representable range.
    #[error("date out of range near {0}")]
    DateOutOfRange(NaiveDate),
    /// Invalid or unreadable configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
