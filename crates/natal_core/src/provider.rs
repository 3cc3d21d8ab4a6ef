//! The position-provider contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Body;
use crate::error::ProviderError;

/// Geocentric ecliptic position of a body, tropical frame of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU. Zero for the lunar nodes.
    pub distance_au: f64,
    /// Longitude rate in degrees per day. Negative when retrograde.
    pub speed_deg_per_day: f64,
}

impl RawPosition {
    /// The diametrically opposite point with the same motion.
    ///
    /// Used to derive the South Node from the North Node.
    pub fn opposite(&self) -> Self {
        Self {
            longitude_deg: crate::normalize_deg(self.longitude_deg + 180.0),
            latitude_deg: -self.latitude_deg,
            distance_au: self.distance_au,
            speed_deg_per_day: self.speed_deg_per_day,
        }
    }
}

/// Source of body positions.
///
/// Implementations may be local computations or remote services. Each call
/// is independent; callers impose their own timeout and treat any error as
/// "this body is unavailable" rather than a failed chart.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Position of `body` at Julian Day `jd` (UT).
    async fn position(&self, body: Body, jd: f64) -> Result<RawPosition, ProviderError>;
}
