//! The engine facade: validation, assembly and caching behind one handle.

use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use natal_core::{MeanElementsProvider, PositionProvider};
use natal_numerology::{NumerologyProfile, compute_profile};
use natal_time::{JulianMoment, UtcOffset};
use natal_vedic::{AyanamshaSystem, HouseSystem};

use crate::assembler::ChartAssembler;
use crate::cache::{CacheStats, ComputationCache};
use crate::chart::Chart;
use crate::config::EngineConfig;
use crate::error::ChartError;
use crate::input::{BirthData, BirthInput, NumerologyInput, NumerologyRequest};
use crate::transit::TransitReport;

/// Everything that changes a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChartKey {
    utc: NaiveDateTime,
    /// Local civil time drives the Chinese sign and the warnings.
    offset: UtcOffset,
    latitude_bits: u64,
    longitude_bits: u64,
    house_system: HouseSystem,
    ayanamsha: AyanamshaSystem,
}

/// Chart and numerology engine with an injected position provider.
///
/// `NatalEngine` is [`Send`] + [`Sync`]; share it via `Arc<NatalEngine>`.
/// Each engine owns its caches, so separate engines never share results.
pub struct NatalEngine {
    config: EngineConfig,
    assembler: ChartAssembler,
    charts: ComputationCache<ChartKey, Arc<Chart>>,
    profiles: ComputationCache<NumerologyInput, Arc<NumerologyProfile>>,
}

impl std::fmt::Debug for NatalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatalEngine")
            .field("config", &self.config)
            .field("assembler", &self.assembler)
            .finish_non_exhaustive()
    }
}

impl NatalEngine {
    pub fn new(config: EngineConfig, provider: Arc<dyn PositionProvider>) -> Result<Self, ChartError> {
        config.validate()?;
        Ok(Self {
            assembler: ChartAssembler::new(provider, config.chart, config.provider_timeout()),
            charts: ComputationCache::new("charts", &config.cache),
            profiles: ComputationCache::new("numerology", &config.cache),
            config,
        })
    }

    /// Engine over the bundled mean-elements provider.
    pub fn with_bundled_provider(config: EngineConfig) -> Result<Self, ChartError> {
        Self::new(config, Arc::new(MeanElementsProvider::default()))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn assembler(&self) -> &ChartAssembler {
        &self.assembler
    }

    /// Validate `input` against the current time and return its chart.
    pub async fn chart(&self, input: &BirthInput) -> Result<Arc<Chart>, ChartError> {
        let birth = input.validate(Utc::now().naive_utc())?;
        self.chart_for(&birth).await
    }

    /// Chart for validated birth data, computed at most once per key.
    ///
    /// Charts with unavailable bodies are returned but not cached, so a
    /// transient provider failure is retried on the next request.
    pub async fn chart_for(&self, birth: &BirthData) -> Result<Arc<Chart>, ChartError> {
        let (house_system, ayanamsha) = self.assembler.systems_for(birth);
        let key = ChartKey {
            utc: birth.moment.utc,
            offset: birth.offset,
            latitude_bits: birth.latitude_deg.to_bits(),
            longitude_bits: birth.longitude_deg.to_bits(),
            house_system,
            ayanamsha,
        };
        let assembler = self.assembler.clone();
        let birth = birth.clone();
        self.charts
            .get_or_compute_if(
                key,
                move || async move { assembler.assemble(&birth).await.map(Arc::new) },
                |chart: &Arc<Chart>| chart.is_complete(),
            )
            .await
    }

    /// Validate `request` against today's date (UTC) and return its profile.
    pub async fn numerology(
        &self,
        request: &NumerologyRequest,
    ) -> Result<Arc<NumerologyProfile>, ChartError> {
        let input = request.validate(Utc::now().date_naive())?;
        self.numerology_for(&input).await
    }

    pub async fn numerology_for(
        &self,
        input: &NumerologyInput,
    ) -> Result<Arc<NumerologyProfile>, ChartError> {
        let input = input.cache_key();
        self.profiles
            .get_or_compute(input.clone(), move || async move {
                let profile =
                    compute_profile(&input.name, input.birth_date, input.target_date, input.system)?;
                Ok::<_, ChartError>(Arc::new(profile))
            })
            .await
    }

    /// Transits at `at_utc` over a natal chart. Not cached.
    pub async fn transits(&self, natal: &Chart, at_utc: NaiveDateTime) -> TransitReport {
        self.assembler
            .transits(natal, JulianMoment::from_utc(at_utc))
            .await
    }

    pub fn chart_cache_stats(&self) -> CacheStats {
        self.charts.stats()
    }

    pub fn numerology_cache_stats(&self) -> CacheStats {
        self.profiles.stats()
    }
}
