//! The assembled chart and its per-body availability markers.

use natal_core::{Body, ProviderError};
use natal_time::JulianMoment;
use natal_vedic::{
    Aspect, ChineseAnimal, DashaWindow, Frame, HouseSet, HouseSystem, NakshatraInfo,
    PlanetPosition, SiderealCorrector, ZodiacSign,
};
use serde::Serialize;

use crate::input::BirthWarning;

/// Why a body has no position in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The provider returned an error.
    Provider { error: ProviderError },
    /// The provider did not answer within the timeout.
    Timeout { after_ms: u64 },
    /// The fetch task panicked or was cancelled.
    TaskFailed { message: String },
    /// Derived from a body that is itself unavailable.
    DerivedFromUnavailable { source: Body },
}

/// A body left out of a chart, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionUnavailable {
    pub body: Body,
    pub reason: UnavailableReason,
}

/// Availability of one body in a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyStatus<'a> {
    Available(&'a PlanetPosition),
    Unavailable(&'a UnavailableReason),
}

/// Positions and houses in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameChart {
    pub frame: Frame,
    /// Available bodies in canonical order.
    pub positions: Vec<PlanetPosition>,
    pub houses: HouseSet,
}

impl FrameChart {
    pub fn position(&self, body: Body) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.body == body)
    }

    /// House (1-12) a body falls in, if available.
    pub fn house_of(&self, body: Body) -> Option<u8> {
        self.position(body)
            .map(|p| self.houses.house_of(p.longitude_deg))
    }
}

/// Records a house-system substitution made for a high latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseFallback {
    pub requested: HouseSystem,
    pub used: HouseSystem,
    pub latitude_deg: f64,
}

/// Headline signs: Sun sign in each frame and the Chinese year animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSigns {
    /// Tropical Sun sign, if the Sun is available.
    pub western: Option<ZodiacSign>,
    /// Sidereal Sun sign, if the Sun is available.
    pub vedic: Option<ZodiacSign>,
    /// From the local birth date.
    pub chinese: ChineseAnimal,
}

/// A natal chart.
///
/// Aspects are computed once, on tropical longitudes. Nakshatra and dasha
/// come from the sidereal Moon and are absent when the Moon is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub moment: JulianMoment,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub tropical: FrameChart,
    pub sidereal: FrameChart,
    pub ayanamsha: SiderealCorrector,
    pub aspects: Vec<Aspect>,
    pub nakshatra: Option<NakshatraInfo>,
    /// Mahadasha window opening at birth.
    pub dasha: Option<DashaWindow>,
    /// Nine consecutive mahadasha windows from birth.
    pub dasha_sequence: Vec<DashaWindow>,
    pub house_fallback: Option<HouseFallback>,
    pub signs: ZodiacSigns,
    /// Accuracy advisories carried over from the birth data.
    pub warnings: Vec<BirthWarning>,
    /// Bodies with no position. Empty for a complete chart.
    pub unavailable: Vec<PositionUnavailable>,
}

impl Chart {
    pub fn frame(&self, frame: Frame) -> &FrameChart {
        match frame {
            Frame::Tropical => &self.tropical,
            Frame::Sidereal => &self.sidereal,
        }
    }

    /// `None` only for a body the chart never considered.
    pub fn body_status(&self, body: Body) -> Option<BodyStatus<'_>> {
        if let Some(p) = self.tropical.position(body) {
            return Some(BodyStatus::Available(p));
        }
        self.unavailable
            .iter()
            .find(|u| u.body == body)
            .map(|u| BodyStatus::Unavailable(&u.reason))
    }

    /// Every body has a position.
    pub fn is_complete(&self) -> bool {
        self.unavailable.is_empty()
    }
}
