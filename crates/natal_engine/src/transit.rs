//! Transits: positions at another moment, aspected against a natal chart.

use natal_time::JulianMoment;
use natal_vedic::{Aspect, PlanetPosition, detect_cross_aspects};
use serde::Serialize;

use crate::assembler::{ChartAssembler, aspect_points};
use crate::chart::{Chart, PositionUnavailable};

/// Transiting positions and their aspects to natal positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    pub moment: JulianMoment,
    /// Tropical transit positions in canonical body order.
    pub positions: Vec<PlanetPosition>,
    /// `body_a` is the transiting body, `body_b` the natal one.
    pub aspects: Vec<Aspect>,
    pub unavailable: Vec<PositionUnavailable>,
}

impl ChartAssembler {
    /// Transits at `at` over `natal`, using the natal orbs.
    pub async fn transits(&self, natal: &Chart, at: JulianMoment) -> TransitReport {
        let (positions, unavailable) = self.fetch_positions(at.julian_day).await;
        let aspects = detect_cross_aspects(
            &aspect_points(&positions),
            &aspect_points(&natal.tropical.positions),
            &self.config().orbs,
            self.config().exact_threshold_deg,
        );
        tracing::debug!(jd = at.julian_day, aspects = aspects.len(), "transits computed");
        TransitReport {
            moment: at,
            positions,
            aspects,
            unavailable,
        }
    }
}
