//! Fixed UTC offsets.
//!
//! Accepted forms: `UTC`, `GMT`, `Z`, `±HH:MM`, `±HHMM`, `±HH`, `UTC±H[:MM]`,
//! and a short table of common zone abbreviations. Full IANA zone resolution
//! happens upstream; by the time an offset reaches this crate it is fixed.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Abbreviations resolved to fixed offsets, in minutes east of UTC.
const ZONE_ABBREVIATIONS: &[(&str, i32)] = &[
    ("EST", -5 * 60),
    ("CST", -6 * 60),
    ("MST", -7 * 60),
    ("PST", -8 * 60),
    ("IST", 5 * 60 + 30),
    ("JST", 9 * 60),
    ("CET", 60),
    ("EET", 2 * 60),
];

/// Largest offset accepted, ±14:00.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A fixed offset east of UTC, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UtcOffset {
    minutes_east: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { minutes_east: 0 };

    /// Offset from minutes east of UTC.
    pub fn from_minutes(minutes_east: i32) -> Result<Self, TimeError> {
        if minutes_east.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidTimezone(format!(
                "offset of {minutes_east} minutes exceeds ±14:00"
            )));
        }
        Ok(Self { minutes_east })
    }

    pub fn minutes_east(self) -> i32 {
        self.minutes_east
    }

    pub fn seconds_east(self) -> i64 {
        i64::from(self.minutes_east) * 60
    }

    /// Parse an offset or abbreviation.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let upper = s.trim().to_ascii_uppercase();
        if let Some(&(_, minutes)) = ZONE_ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == upper) {
            return Ok(Self {
                minutes_east: minutes,
            });
        }
        let rest = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);
        if rest.is_empty() || rest == "Z" {
            return Ok(Self::UTC);
        }
        parse_signed(rest).ok_or_else(|| TimeError::InvalidTimezone(s.to_string()))?
    }
}

fn parse_signed(s: &str) -> Option<Result<UtcOffset, TimeError>> {
    if !s.is_ascii() {
        return None;
    }
    let (sign, body) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = match body.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None if body.len() == 4 => (&body[..2], &body[2..]),
        None if (1..=2).contains(&body.len()) => (body, "0"),
        None => return None,
    };
    if hours.is_empty() || hours.len() > 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(UtcOffset::from_minutes(sign * (hours * 60 + minutes)))
}

impl FromStr for UtcOffset {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for UtcOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes_east < 0 { '-' } else { '+' };
        let abs = self.minutes_east.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_aliases() {
        for s in ["UTC", "utc", "GMT", "Z", "  z "] {
            assert_eq!(UtcOffset::parse(s), Ok(UtcOffset::UTC), "{s}");
        }
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(UtcOffset::parse("+05:30").unwrap().minutes_east(), 330);
        assert_eq!(UtcOffset::parse("-0800").unwrap().minutes_east(), -480);
        assert_eq!(UtcOffset::parse("+9").unwrap().minutes_east(), 540);
        assert_eq!(UtcOffset::parse("UTC-3:30").unwrap().minutes_east(), -210);
        assert_eq!(UtcOffset::parse("GMT+01").unwrap().minutes_east(), 60);
    }

    #[test]
    fn abbreviations() {
        assert_eq!(UtcOffset::parse("IST").unwrap().minutes_east(), 330);
        assert_eq!(UtcOffset::parse("pst").unwrap().minutes_east(), -480);
    }

    #[test]
    fn rejects_garbage() {
        for s in ["Mars/Olympus", "+25:00", "+05:75", "05:30", "+5:3", "+123"] {
            assert!(
                matches!(UtcOffset::parse(s), Err(TimeError::InvalidTimezone(_))),
                "{s} should be rejected"
            );
        }
    }

    #[test]
    fn display_roundtrips() {
        let off = UtcOffset::parse("-03:30").unwrap();
        assert_eq!(off.to_string(), "-03:30");
        assert_eq!(UtcOffset::parse(&off.to_string()), Ok(off));
    }
}
