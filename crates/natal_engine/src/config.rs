//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a complete config:
//!
//! ```json
//! {
//!   "chart": { "house_system": "Placidus", "ayanamsha": "Lahiri",
//!              "orbs": { "sextile": 6.0 }, "high_latitude_fallback": "Equal" },
//!   "cache": { "max_entries": 1000, "ttl_secs": 86400 },
//!   "provider_timeout_ms": 2000
//! }
//! ```

use std::time::Duration;

use natal_vedic::{AspectOrbs, AyanamshaSystem, DEFAULT_EXACT_THRESHOLD_DEG, HouseSystem};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Chart computation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub house_system: HouseSystem,
    pub ayanamsha: AyanamshaSystem,
    pub orbs: AspectOrbs,
    /// Orb below which an aspect is flagged exact, degrees.
    pub exact_threshold_deg: f64,
    /// System to use when `house_system` is unstable at the birth latitude.
    /// `None` makes such requests fail.
    pub high_latitude_fallback: Option<HouseSystem>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default(),
            ayanamsha: AyanamshaSystem::default(),
            orbs: AspectOrbs::default(),
            exact_threshold_deg: DEFAULT_EXACT_THRESHOLD_DEG,
            high_latitude_fallback: None,
        }
    }
}

/// Result cache bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub max_entries: u64,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl_secs: 24 * 60 * 60,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub chart: ChartConfig,
    pub cache: CacheConfig,
    /// Per-body position fetch timeout.
    pub provider_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            cache: CacheConfig::default(),
            provider_timeout_ms: 2000,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ChartError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ChartError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let invalid = |msg: &str| Err(ChartError::InvalidConfig(msg.to_string()));
        if self.cache.max_entries == 0 {
            return invalid("cache.max_entries must be greater than zero");
        }
        if self.cache.ttl_secs == 0 {
            return invalid("cache.ttl_secs must be greater than zero");
        }
        if self.provider_timeout_ms == 0 {
            return invalid("provider_timeout_ms must be greater than zero");
        }
        if !self.chart.orbs.is_valid() {
            return invalid("chart.orbs must all be finite and positive");
        }
        let threshold = self.chart.exact_threshold_deg;
        if !threshold.is_finite() || threshold < 0.0 {
            return invalid("chart.exact_threshold_deg must be finite and non-negative");
        }
        if self
            .chart
            .high_latitude_fallback
            .is_some_and(HouseSystem::latitude_limited)
        {
            return invalid("chart.high_latitude_fallback must work at every latitude");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = EngineConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.chart.house_system, HouseSystem::Placidus);
        assert_eq!(c.chart.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(c.cache.ttl(), Duration::from_secs(86_400));
        assert_eq!(c.provider_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let c = EngineConfig::from_json_str(
            r#"{"chart": {"house_system": "Equal", "orbs": {"sextile": 4.0},
                "high_latitude_fallback": "Porphyry"},
                "provider_timeout_ms": 250}"#,
        )
        .unwrap();
        assert_eq!(c.chart.house_system, HouseSystem::Equal);
        assert_eq!(c.chart.orbs.sextile, 4.0);
        assert_eq!(c.chart.orbs.trine, 8.0);
        assert_eq!(c.chart.high_latitude_fallback, Some(HouseSystem::Porphyry));
        assert_eq!(c.provider_timeout_ms, 250);
    }

    #[test]
    fn rejects_bad_values() {
        for json in [
            r#"{"cache": {"max_entries": 0}}"#,
            r#"{"cache": {"ttl_secs": 0}}"#,
            r#"{"provider_timeout_ms": 0}"#,
            r#"{"chart": {"orbs": {"trine": -1.0}}}"#,
            r#"{"chart": {"high_latitude_fallback": "Placidus"}}"#,
            r#"{"chart": {"house_system": "Koch"}}"#,
        ] {
            assert!(
                matches!(EngineConfig::from_json_str(json), Err(ChartError::InvalidConfig(_))),
                "{json}"
            );
        }
    }
}
