//! Error types for position providers.

use serde::Serialize;

use crate::Body;

/// Errors a [`crate::PositionProvider`] may return for a single body.
///
/// These never abort a chart: the assembler records them against the body.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider has no model for this body.
    #[error("body {0} is not supported by this provider")]
    UnsupportedBody(Body),
    /// Name did not match any chart body.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// The Julian Day is outside the provider's validity range.
    #[error("epoch JD {jd} outside provider range [{min}, {max}]")]
    EpochOutOfRange { jd: f64, min: f64, max: f64 },
    /// Upstream data source failed (network, file, service).
    #[error("position source failed: {0}")]
    Source(String),
}
