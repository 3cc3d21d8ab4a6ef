//! Bundled analytic position provider.
//!
//! Planets come from [`crate::kepler`], the Moon and North Node from
//! [`crate::lunar`]. Speeds are central differences over one day.
//! The South Node is not served: callers derive it from the North Node.

use async_trait::async_trait;
use natal_time::{calendar_to_jd, centuries_since_j2000};

use crate::error::ProviderError;
use crate::kepler::{general_precession_deg, geocentric_ecliptic, to_spherical};
use crate::lunar::{NodeMode, moon_coordinates, north_node_deg};
use crate::provider::{PositionProvider, RawPosition};
use crate::{Body, normalize_deg};

/// Half-width of the speed differencing window, in days.
const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Low-precision ephemeris from mean orbital elements and truncated lunar theory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElementsProvider {
    node_mode: NodeMode,
    min_jd: f64,
    max_jd: f64,
}

impl Default for MeanElementsProvider {
    fn default() -> Self {
        Self::new(NodeMode::Mean)
    }
}

impl MeanElementsProvider {
    /// Provider valid from year 1000 to year 3000.
    pub fn new(node_mode: NodeMode) -> Self {
        Self {
            node_mode,
            min_jd: calendar_to_jd(1000, 1, 1.0),
            max_jd: calendar_to_jd(3000, 1, 1.0),
        }
    }

    pub fn node_mode(&self) -> NodeMode {
        self.node_mode
    }

    /// Validity range as `(min_jd, max_jd)`.
    pub fn range(&self) -> (f64, f64) {
        (self.min_jd, self.max_jd)
    }

    /// Longitude, latitude and distance at one instant, without speed.
    fn coordinates(&self, body: Body, jd: f64) -> Result<(f64, f64, f64), ProviderError> {
        let t = centuries_since_j2000(jd);
        match body {
            Body::Moon => {
                let m = moon_coordinates(t);
                Ok((m.longitude_deg, m.latitude_deg, m.distance_au))
            }
            Body::NorthNode => Ok((north_node_deg(t, self.node_mode), 0.0, 0.0)),
            Body::SouthNode => Err(ProviderError::UnsupportedBody(body)),
            _ => {
                let v = geocentric_ecliptic(body, t)
                    .ok_or(ProviderError::UnsupportedBody(body))?;
                let (lon, lat, dist) = to_spherical(v);
                Ok((normalize_deg(lon + general_precession_deg(t)), lat, dist))
            }
        }
    }

    /// Synchronous position computation.
    pub fn compute(&self, body: Body, jd: f64) -> Result<RawPosition, ProviderError> {
        if !(self.min_jd..=self.max_jd).contains(&jd) {
            return Err(ProviderError::EpochOutOfRange {
                jd,
                min: self.min_jd,
                max: self.max_jd,
            });
        }
        let (lon, lat, dist) = self.coordinates(body, jd)?;
        let (before, _, _) = self.coordinates(body, jd - SPEED_HALF_STEP_DAYS)?;
        let (after, _, _) = self.coordinates(body, jd + SPEED_HALF_STEP_DAYS)?;
        let delta = (after - before + 180.0).rem_euclid(360.0) - 180.0;
        Ok(RawPosition {
            longitude_deg: lon,
            latitude_deg: lat,
            distance_au: dist,
            speed_deg_per_day: delta / (2.0 * SPEED_HALF_STEP_DAYS),
        })
    }
}

#[async_trait]
impl PositionProvider for MeanElementsProvider {
    fn name(&self) -> &'static str {
        "mean-elements"
    }

    async fn position(&self, body: Body, jd: f64) -> Result<RawPosition, ProviderError> {
        let result = self.compute(body, jd);
        if let Err(e) = &result {
            tracing::debug!(provider = self.name(), %body, jd, error = %e, "position unavailable");
        }
        result
    }
}
