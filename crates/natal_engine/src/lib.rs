//! Natal chart and numerology engine.
//!
//! This crate provides:
//! - Validation of raw birth and numerology requests
//! - [`ChartAssembler`]: concurrent per-body fetches with timeouts, houses,
//!   sidereal correction, aspects, nakshatra and dasha
//! - [`ComputationCache`]: size- and TTL-bounded, single-flight result cache
//! - [`NatalEngine`]: the facade tying configuration, provider and caches
//!   together

pub mod assembler;
pub mod cache;
pub mod chart;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod transit;

pub use assembler::ChartAssembler;
pub use cache::{CacheStats, ComputationCache};
pub use chart::{
    BodyStatus, Chart, FrameChart, HouseFallback, PositionUnavailable, UnavailableReason,
    ZodiacSigns,
};
pub use config::{CacheConfig, ChartConfig, EngineConfig};
pub use engine::NatalEngine;
pub use error::ChartError;
pub use input::{
    BirthData, BirthInput, BirthWarning, EARLY_BIRTH_YEAR, MAX_NAME_CHARS, NumerologyInput,
    NumerologyRequest, birth_warnings, today_at,
};
pub use transit::TransitReport;
