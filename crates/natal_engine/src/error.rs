//! Fatal errors for chart and numerology requests.
//!
//! Anything here rejects the whole request. Per-body position failures are
//! not errors; they are recorded in [`crate::Chart::unavailable`].

use natal_numerology::NumerologyError;
use natal_time::TimeError;
use natal_vedic::VedicError;

/// Request-level failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or impossible date or time, or a birth date in the future.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Latitude or longitude outside its range.
    #[error("invalid {axis} {value} (must be within ±{limit})")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        limit: f64,
    },
    /// Name longer than the accepted maximum.
    #[error("invalid name: {0}")]
    InvalidName(String),
    /// Timezone could not be resolved to a fixed offset.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
    /// The requested house system is undefined at this latitude.
    #[error("house system {system} is unstable at latitude {latitude_deg}° (limit ±{limit_deg}°)")]
    HouseSystemUnstable {
        system: &'static str,
        latitude_deg: f64,
        limit_deg: f64,
    },
    #[error("unsupported ayanamsha: {0}")]
    UnsupportedAyanamsha(String),
    #[error("unsupported house system: {0}")]
    UnsupportedHouseSystem(String),
    #[error("unsupported letter system: {0}")]
    UnsupportedLetterSystem(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidTimezone(tz) => Self::InvalidTimezone(tz),
            other => Self::InvalidDate(other.to_string()),
        }
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::HouseSystemUnstable {
                system,
                latitude_deg,
                limit_deg,
            } => Self::HouseSystemUnstable {
                system,
                latitude_deg,
                limit_deg,
            },
            VedicError::UnsupportedAyanamsha(name) => Self::UnsupportedAyanamsha(name),
            VedicError::UnsupportedHouseSystem(name) => Self::UnsupportedHouseSystem(name),
            VedicError::DateOutOfRange => Self::InvalidDate("derived date out of range".into()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<NumerologyError> for ChartError {
    fn from(e: NumerologyError) -> Self {
        match e {
            NumerologyError::UnsupportedLetterSystem(name) => Self::UnsupportedLetterSystem(name),
            other => Self::InvalidDate(other.to_string()),
        }
    }
}
