//! Tropical → sidereal correction.
//!
//! A corrector fixes one ayanamsha value for one instant and applies it to
//! tropical values only. Feeding it anything already sidereal is an error,
//! so a chart can never be corrected twice.

use serde::Serialize;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::VedicError;
use crate::houses::HouseSet;
use crate::position::{Frame, PlanetPosition};
use crate::util::normalize_360;

/// Ayanamsha fixed for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiderealCorrector {
    pub system: AyanamshaSystem,
    /// Ayanamsha value in degrees.
    pub ayanamsha_deg: f64,
}

impl SiderealCorrector {
    pub fn new(system: AyanamshaSystem, jd: f64) -> Self {
        Self {
            system,
            ayanamsha_deg: ayanamsha_deg(system, jd),
        }
    }

    /// Sidereal longitude of a tropical longitude, [0, 360).
    pub fn longitude(&self, tropical_deg: f64) -> f64 {
        normalize_360(tropical_deg - self.ayanamsha_deg)
    }

    /// Sidereal copy of a tropical position.
    pub fn position(&self, tropical: &PlanetPosition) -> Result<PlanetPosition, VedicError> {
        if tropical.frame != Frame::Tropical {
            return Err(VedicError::AlreadySidereal);
        }
        Ok(tropical.relabeled(Frame::Sidereal, self.longitude(tropical.longitude_deg)))
    }

    /// Sidereal copies of a set of tropical positions, order preserved.
    pub fn positions(&self, tropical: &[PlanetPosition]) -> Result<Vec<PlanetPosition>, VedicError> {
        tropical.iter().map(|p| self.position(p)).collect()
    }

    /// Sidereal copy of a tropical house set.
    pub fn houses(&self, tropical: &HouseSet) -> Result<HouseSet, VedicError> {
        if tropical.frame != Frame::Tropical {
            return Err(VedicError::AlreadySidereal);
        }
        Ok(tropical.shifted(Frame::Sidereal, -self.ayanamsha_deg))
    }
}
