//! Frame-tagged body positions.

use natal_core::{Body, RawPosition};
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;
use crate::zodiac::{SignPlacement, sign_placement};

/// Zodiac frame a longitude is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Measured from the vernal equinox of date.
    Tropical,
    /// Tropical minus ayanamsha.
    Sidereal,
}

/// A body's position in one frame, with its sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    pub frame: Frame,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    /// Apparent backward motion (negative longitude speed).
    pub retrograde: bool,
    pub placement: SignPlacement,
}

impl PlanetPosition {
    /// Tropical position from a provider result.
    pub fn tropical(body: Body, raw: &RawPosition) -> Self {
        let longitude_deg = normalize_360(raw.longitude_deg);
        Self {
            body,
            frame: Frame::Tropical,
            longitude_deg,
            latitude_deg: raw.latitude_deg,
            distance_au: raw.distance_au,
            speed_deg_per_day: raw.speed_deg_per_day,
            retrograde: raw.speed_deg_per_day < 0.0,
            placement: sign_placement(longitude_deg),
        }
    }

    /// Same body and motion at a new longitude in another frame.
    pub(crate) fn relabeled(&self, frame: Frame, longitude_deg: f64) -> Self {
        let longitude_deg = normalize_360(longitude_deg);
        Self {
            frame,
            longitude_deg,
            placement: sign_placement(longitude_deg),
            ..*self
        }
    }
}
