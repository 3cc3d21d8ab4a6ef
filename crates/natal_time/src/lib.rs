//! Civil time normalization for natal computations.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (proleptic Gregorian)
//! - ISO date/time parsing with calendar and future-date validation
//! - Fixed UTC offsets and zone abbreviations
//! - Greenwich Mean and local sidereal time
//! - [`JulianMoment`], the normalized instant every downstream computation uses

pub mod civil;
pub mod error;
pub mod julian;
pub mod offset;
pub mod sidereal;

use chrono::NaiveDateTime;
use serde::Serialize;

pub use civil::{CivilDateTime, ensure_not_future, parse_date, parse_time};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, centuries_since_j2000,
    datetime_from_jd, jd_from_datetime, jd_to_calendar,
};
pub use offset::UtcOffset;
pub use sidereal::{gmst_deg, local_sidereal_time_deg};

/// A UTC instant with its Julian Day and Greenwich Mean Sidereal Time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JulianMoment {
    /// The instant in UTC.
    pub utc: NaiveDateTime,
    /// Julian Day (UT).
    pub julian_day: f64,
    /// GMST in degrees, [0, 360).
    pub gmst_deg: f64,
}

impl JulianMoment {
    pub fn from_utc(utc: NaiveDateTime) -> Self {
        let julian_day = jd_from_datetime(&utc);
        Self {
            utc,
            julian_day,
            gmst_deg: gmst_deg(julian_day),
        }
    }

    /// Normalize a local wall time at a fixed offset.
    pub fn from_civil(civil: &CivilDateTime, offset: UtcOffset) -> Result<Self, TimeError> {
        Ok(Self::from_utc(civil.to_utc(offset)?))
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(&self) -> f64 {
        centuries_since_j2000(self.julian_day)
    }

    /// Local sidereal time for an observer at `longitude_east_deg`.
    pub fn local_sidereal_time_deg(&self, longitude_east_deg: f64) -> f64 {
        local_sidereal_time_deg(self.gmst_deg, longitude_east_deg)
    }
}
