//! Core body set and the position-provider contract.
//!
//! A [`PositionProvider`] answers one question: where is this body, in
//! tropical ecliptic coordinates of date, at this Julian Day? Everything
//! else (sidereal correction, houses, aspects) is layered on top by
//! downstream crates and never talks to an ephemeris directly.
//!
//! [`MeanElementsProvider`] is the bundled implementation: a low-precision
//! analytic ephemeris with no data files.

pub mod error;
pub mod fundamental;
pub mod kepler;
pub mod lunar;
pub mod mean_elements;
pub mod provider;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::ProviderError;
pub use lunar::NodeMode;
pub use mean_elements::MeanElementsProvider;
pub use provider::{PositionProvider, RawPosition};

/// Bodies placed in a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Ascending lunar node (Rahu).
    NorthNode,
    /// Descending lunar node (Ketu), always opposite the North Node.
    SouthNode,
}

/// All 12 chart bodies in canonical order.
pub const ALL_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::NorthNode,
    Body::SouthNode,
];

impl Body {
    pub const fn all() -> &'static [Body; 12] {
        &ALL_BODIES
    }

    /// 0-based position in [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
        }
    }

    /// Bodies a provider is asked for directly. The South Node is derived.
    pub fn fetched() -> impl Iterator<Item = Body> {
        ALL_BODIES.into_iter().filter(|b| *b != Body::SouthNode)
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let body = match key.as_str() {
            "sun" => Self::Sun,
            "moon" => Self::Moon,
            "mercury" => Self::Mercury,
            "venus" => Self::Venus,
            "mars" => Self::Mars,
            "jupiter" => Self::Jupiter,
            "saturn" => Self::Saturn,
            "uranus" => Self::Uranus,
            "neptune" => Self::Neptune,
            "pluto" => Self::Pluto,
            "northnode" | "rahu" => Self::NorthNode,
            "southnode" | "ketu" => Self::SouthNode,
            _ => return Err(ProviderError::UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index(), i);
        }
    }

    #[test]
    fn south_node_is_not_fetched() {
        let fetched: Vec<Body> = Body::fetched().collect();
        assert_eq!(fetched.len(), 11);
        assert!(!fetched.contains(&Body::SouthNode));
        assert!(fetched.contains(&Body::NorthNode));
    }

    #[test]
    fn parse_names() {
        assert_eq!("North Node".parse::<Body>(), Ok(Body::NorthNode));
        assert_eq!("ketu".parse::<Body>(), Ok(Body::SouthNode));
        assert_eq!("SUN".parse::<Body>(), Ok(Body::Sun));
        assert!("Vulcan".parse::<Body>().is_err());
    }

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_deg(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_deg(720.5) - 0.5).abs() < 1e-12);
    }
}
