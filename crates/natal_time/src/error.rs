//! Error types for civil-time parsing and normalization.

use chrono::NaiveDate;

/// Errors from date, time-of-day or UTC offset handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date is not a real calendar date, or is malformed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Birth date lies after the reference "today".
    #[error("date {date} is in the future (today is {today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },
    /// Time of day is malformed or out of range.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    /// UTC offset or zone abbreviation could not be resolved.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}
