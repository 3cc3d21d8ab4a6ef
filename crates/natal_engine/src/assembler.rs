//! Chart assembly.
//!
//! Per-body positions are fetched concurrently, each under its own timeout,
//! while the houses are computed. A body whose fetch fails or times out is
//! recorded as unavailable and left out of every derived result; it never
//! turns into a zero longitude. The South Node is never fetched: it is the
//! point opposite the North Node.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use natal_core::{Body, PositionProvider, ProviderError, RawPosition};
use natal_time::JulianMoment;
use natal_vedic::{
    Aspect, AyanamshaSystem, Frame, HouseSet, HouseSystem, PlanetPosition, SiderealCorrector,
    VedicError, chinese_zodiac, compute_houses, detect_aspects, mahadasha_sequence,
    mahadasha_window, nakshatra_from_longitude,
};
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::chart::{
    Chart, FrameChart, HouseFallback, PositionUnavailable, UnavailableReason, ZodiacSigns,
};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::input::BirthData;

type FetchOutcome = Result<RawPosition, UnavailableReason>;

/// Builds charts from a position provider and chart settings.
///
/// Cheap to clone; clones share the provider.
#[derive(Clone)]
pub struct ChartAssembler {
    provider: Arc<dyn PositionProvider>,
    config: ChartConfig,
    timeout: Duration,
}

impl std::fmt::Debug for ChartAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartAssembler")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// `(body, longitude)` pairs for aspect detection.
pub(crate) fn aspect_points(positions: &[PlanetPosition]) -> Vec<(Body, f64)> {
    positions.iter().map(|p| (p.body, p.longitude_deg)).collect()
}

impl ChartAssembler {
    pub fn new(provider: Arc<dyn PositionProvider>, config: ChartConfig, timeout: Duration) -> Self {
        Self {
            provider,
            config,
            timeout,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// House system and ayanamsha for a birth, after per-request overrides.
    pub fn systems_for(&self, birth: &BirthData) -> (HouseSystem, AyanamshaSystem) {
        (
            birth.house_system.unwrap_or(self.config.house_system),
            birth.ayanamsha.unwrap_or(self.config.ayanamsha),
        )
    }

    /// Tropical positions of all 12 bodies at `jd`.
    ///
    /// Returns the available positions in canonical body order and a marker
    /// for every body that could not be placed.
    pub async fn fetch_positions(&self, jd: f64) -> (Vec<PlanetPosition>, Vec<PositionUnavailable>) {
        let after_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
        let mut tasks = JoinSet::new();
        for body in Body::fetched() {
            let provider = Arc::clone(&self.provider);
            let limit = self.timeout;
            tasks.spawn(async move {
                let outcome = match tokio::time::timeout(limit, provider.position(body, jd)).await {
                    Ok(Ok(raw)) if raw.longitude_deg.is_finite() => Ok(raw),
                    Ok(Ok(_)) => Err(UnavailableReason::Provider {
                        error: ProviderError::Source("non-finite longitude".into()),
                    }),
                    Ok(Err(error)) => Err(UnavailableReason::Provider { error }),
                    Err(_) => Err(UnavailableReason::Timeout { after_ms }),
                };
                (body, outcome)
            });
        }

        let mut fetched: BTreeMap<Body, FetchOutcome> = BTreeMap::new();
        let mut task_failure: Option<String> = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((body, outcome)) => {
                    fetched.insert(body, outcome);
                }
                Err(e) => task_failure = Some(e.to_string()),
            }
        }
        let south = match fetched.get(&Body::NorthNode) {
            Some(Ok(north)) => Ok(north.opposite()),
            _ => Err(UnavailableReason::DerivedFromUnavailable {
                source: Body::NorthNode,
            }),
        };
        fetched.insert(Body::SouthNode, south);

        let mut positions = Vec::with_capacity(Body::all().len());
        let mut unavailable = Vec::new();
        for &body in Body::all() {
            let outcome = fetched.remove(&body).unwrap_or_else(|| {
                Err(UnavailableReason::TaskFailed {
                    message: task_failure
                        .clone()
                        .unwrap_or_else(|| "fetch produced no result".into()),
                })
            });
            match outcome {
                Ok(raw) => positions.push(PlanetPosition::tropical(body, &raw)),
                Err(reason) => {
                    tracing::warn!(%body, jd, ?reason, "position unavailable");
                    unavailable.push(PositionUnavailable { body, reason });
                }
            }
        }
        (positions, unavailable)
    }

    /// Tropical houses, substituting the configured fallback system when the
    /// requested one is unstable at this latitude.
    pub fn houses(
        &self,
        moment: &JulianMoment,
        latitude_deg: f64,
        longitude_deg: f64,
        requested: HouseSystem,
    ) -> Result<(HouseSet, Option<HouseFallback>), ChartError> {
        match compute_houses(moment, latitude_deg, longitude_deg, requested) {
            Ok(set) => Ok((set, None)),
            Err(e @ VedicError::HouseSystemUnstable { .. }) => {
                let Some(used) = self.config.high_latitude_fallback else {
                    return Err(e.into());
                };
                tracing::warn!(%requested, %used, latitude_deg, "house system fallback");
                let set = compute_houses(moment, latitude_deg, longitude_deg, used)?;
                Ok((
                    set,
                    Some(HouseFallback {
                        requested,
                        used,
                        latitude_deg,
                    }),
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Aspects among every pair of tropical positions, the two lunar nodes
    /// included.
    pub fn natal_aspects(&self, tropical: &[PlanetPosition]) -> Vec<Aspect> {
        detect_aspects(
            &aspect_points(tropical),
            &self.config.orbs,
            self.config.exact_threshold_deg,
        )
    }

    /// Full chart for validated birth data.
    pub async fn assemble(&self, birth: &BirthData) -> Result<Chart, ChartError> {
        let (house_system, ayanamsha) = self.systems_for(birth);
        let span = tracing::debug_span!("chart", jd = birth.moment.julian_day);
        self.assemble_at(birth, house_system, ayanamsha)
            .instrument(span)
            .await
    }

    async fn assemble_at(
        &self,
        birth: &BirthData,
        house_system: HouseSystem,
        ayanamsha: AyanamshaSystem,
    ) -> Result<Chart, ChartError> {
        let (moment, latitude_deg, longitude_deg) =
            (birth.moment, birth.latitude_deg, birth.longitude_deg);
        let ((tropical_positions, unavailable), houses) = tokio::join!(
            self.fetch_positions(moment.julian_day),
            async { self.houses(&moment, latitude_deg, longitude_deg, house_system) },
        );
        let (tropical_houses, house_fallback) = houses?;

        let corrector = SiderealCorrector::new(ayanamsha, moment.julian_day);
        let sidereal_positions = corrector.positions(&tropical_positions)?;
        let sidereal_houses = corrector.houses(&tropical_houses)?;
        let aspects = self.natal_aspects(&tropical_positions);

        let nakshatra = sidereal_positions
            .iter()
            .find(|p| p.body == Body::Moon)
            .map(|moon| nakshatra_from_longitude(moon.longitude_deg));
        let (dasha, dasha_sequence) = match &nakshatra {
            Some(n) => (
                Some(mahadasha_window(n.index, moment.utc)?),
                mahadasha_sequence(n.index, moment.utc)?,
            ),
            None => (None, Vec::new()),
        };

        let sun_sign = |positions: &[PlanetPosition]| {
            positions
                .iter()
                .find(|p| p.body == Body::Sun)
                .map(|sun| sun.placement.sign)
        };
        let signs = ZodiacSigns {
            western: sun_sign(&tropical_positions),
            vedic: sun_sign(&sidereal_positions),
            chinese: chinese_zodiac(birth.civil.date),
        };

        tracing::debug!(
            positions = tropical_positions.len(),
            unavailable = unavailable.len(),
            aspects = aspects.len(),
            ayanamsha_deg = corrector.ayanamsha_deg,
            "chart assembled"
        );

        Ok(Chart {
            moment,
            latitude_deg,
            longitude_deg,
            tropical: FrameChart {
                frame: Frame::Tropical,
                positions: tropical_positions,
                houses: tropical_houses,
            },
            sidereal: FrameChart {
                frame: Frame::Sidereal,
                positions: sidereal_positions,
                houses: sidereal_houses,
            },
            ayanamsha: corrector,
            aspects,
            nakshatra,
            dasha,
            dasha_sequence,
            house_fallback,
            signs,
            warnings: birth.warnings.clone(),
            unavailable,
        })
    }
}
