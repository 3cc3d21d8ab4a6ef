//! Error types for sidereal, house and derived computations.

/// Errors from vedic and house computations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Quadrant house division is undefined near the poles.
    #[error("house system {system} is unstable at latitude {latitude_deg}° (limit ±{limit_deg}°)")]
    HouseSystemUnstable {
        system: &'static str,
        latitude_deg: f64,
        limit_deg: f64,
    },
    /// Iterative cusp solution did not settle.
    #[error("house cusp {cusp} did not converge")]
    NoConvergence { cusp: u8 },
    /// Ayanamsha name not recognized.
    #[error("unsupported ayanamsha: {0}")]
    UnsupportedAyanamsha(String),
    /// House system name not recognized.
    #[error("unsupported house system: {0}")]
    UnsupportedHouseSystem(String),
    /// Sidereal correction requested on an already sidereal value.
    #[error("value is already sidereal")]
    AlreadySidereal,
    /// A derived date falls outside the representable calendar range.
    #[error("derived date out of range")]
    DateOutOfRange,
}
