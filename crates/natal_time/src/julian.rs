//! Julian Day ↔ calendar conversions.
//!
//! The proleptic Gregorian calendar is used for every date, matching
//! ISO-8601 input. Negative and pre-1582 years are accepted.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day for a calendar date with fractional day.
///
/// `day_frac` is the day of month plus the elapsed fraction of that day,
/// e.g. 1.5 for noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Calendar date `(year, month, day_frac)` for a Julian Day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

/// Julian Day of a UTC date-time.
pub fn jd_from_datetime(dt: &NaiveDateTime) -> f64 {
    let seconds = f64::from(dt.num_seconds_from_midnight())
        + f64::from(dt.nanosecond().min(999_999_999)) / 1e9;
    let day_frac = f64::from(dt.day()) + seconds / SECONDS_PER_DAY;
    calendar_to_jd(dt.year(), dt.month(), day_frac)
}

/// UTC date-time for a Julian Day, rounded to the nearest second.
///
/// Returns `None` when the date falls outside chrono's representable range.
pub fn datetime_from_jd(jd: f64) -> Option<NaiveDateTime> {
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    let date = NaiveDate::from_ymd_opt(year, month, day as u32)?;
    let secs = ((day_frac - day) * SECONDS_PER_DAY).round() as i64;
    date.and_hms_opt(0, 0, 0)?
        .checked_add_signed(chrono::Duration::seconds(secs))
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
