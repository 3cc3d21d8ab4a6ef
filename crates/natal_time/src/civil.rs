//! Civil (wall-clock) birth date and time.
//!
//! Parses ISO-8601 date and time-of-day strings, rejects impossible
//! calendar dates and future dates, and converts local wall time to UTC
//! with a fixed offset.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::offset::UtcOffset;

/// A local date and time of day, before any offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl CivilDateTime {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]`.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        Ok(Self {
            date: parse_date(date)?,
            time: parse_time(time)?,
        })
    }

    /// Reject dates after `today`.
    pub fn ensure_not_after(&self, today: NaiveDate) -> Result<(), TimeError> {
        ensure_not_future(self.date, today)
    }

    /// UTC instant for this wall time at the given offset.
    pub fn to_utc(&self, offset: UtcOffset) -> Result<NaiveDateTime, TimeError> {
        self.date
            .and_time(self.time)
            .checked_sub_signed(chrono::Duration::seconds(offset.seconds_east()))
            .ok_or_else(|| {
                TimeError::InvalidDate(format!("{} {} shifted by {offset}", self.date, self.time))
            })
    }
}

/// Parse an ISO calendar date. A trailing `T…` time component is ignored.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    let trimmed = s.trim();
    let date_part = trimmed.split_once('T').map_or(trimmed, |(d, _)| d);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| TimeError::InvalidDate(format!("{trimmed:?}: {e}")))
}

/// Parse `HH:MM:SS[.fff]` or `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| TimeError::InvalidTime(format!("{trimmed:?}: {e}")))
}

/// Reject a date that lies after `today`.
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<(), TimeError> {
    if date > today {
        return Err(TimeError::FutureDate { date, today });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_date_and_time() {
        let c = CivilDateTime::parse("1990-05-15", "14:30").unwrap();
        assert_eq!(c.date, date(1990, 5, 15));
        assert_eq!(c.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        let c = CivilDateTime::parse("1990-05-15T00:00:00Z", "14:30:15").unwrap();
        assert_eq!(c.time, NaiveTime::from_hms_opt(14, 30, 15).unwrap());
    }

    #[test]
    fn rejects_impossible_dates() {
        for s in ["2023-02-30", "2023-13-01", "2023-00-10", "1999-04-31", "not a date"] {
            assert!(
                matches!(parse_date(s), Err(TimeError::InvalidDate(_))),
                "{s} should be rejected"
            );
        }
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn rejects_bad_times() {
        for s in ["24:00", "12:60", "noon", ""] {
            assert!(matches!(parse_time(s), Err(TimeError::InvalidTime(_))), "{s}");
        }
    }

    #[test]
    fn future_dates_rejected() {
        let today = date(2024, 6, 1);
        assert!(ensure_not_future(date(2024, 6, 1), today).is_ok());
        assert_eq!(
            ensure_not_future(date(2024, 6, 2), today),
            Err(TimeError::FutureDate {
                date: date(2024, 6, 2),
                today
            })
        );
    }

    #[test]
    fn offset_shifts_to_utc() {
        let c = CivilDateTime::parse("2000-01-01", "05:30").unwrap();
        let utc = c.to_utc(UtcOffset::parse("+05:30").unwrap()).unwrap();
        assert_eq!(utc, date(2000, 1, 1).and_hms_opt(0, 0, 0).unwrap());

        let c = CivilDateTime::parse("1999-12-31", "20:00").unwrap();
        let utc = c.to_utc(UtcOffset::parse("-05:00").unwrap()).unwrap();
        assert_eq!(utc, date(2000, 1, 1).and_hms_opt(1, 0, 0).unwrap());
    }
}
