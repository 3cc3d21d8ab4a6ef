//! Chart geometry on top of raw body positions.
//!
//! This crate provides:
//! - Ayanamsha for Lahiri, Krishnamurti and Raman, and the one-way
//!   tropical → sidereal [`SiderealCorrector`]
//! - House cusps (Placidus, Equal, Porphyry) with Ascendant and Midheaven
//! - Major aspect detection with configurable orbs
//! - Nakshatra/pada placement and Vimshottari mahadasha windows
//! - Zodiac sign placement (sign, element, modality, DMS)

pub mod aspects;
pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod houses;
pub mod nakshatra;
pub mod position;
pub mod sidereal;
pub mod util;
pub mod zodiac;

pub use aspects::{
    ALL_ASPECT_KINDS, Aspect, AspectKind, AspectOrbs, DEFAULT_EXACT_THRESHOLD_DEG, aspect_between,
    classify, detect_aspects, detect_cross_aspects,
};
pub use ayanamsha::{ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg};
pub use dasha::{
    DAYS_PER_YEAR, DashaLord, DashaWindow, VIMSHOTTARI_SEQUENCE, mahadasha_sequence,
    mahadasha_window,
};
pub use error::VedicError;
pub use houses::{
    ALL_HOUSE_SYSTEMS, HouseCusp, HouseSet, HouseSystem, MAX_PLACIDUS_LATITUDE_DEG,
    ascendant_midheaven_deg, compute_houses, mean_obliquity_deg,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use position::{Frame, PlanetPosition};
pub use sidereal::SiderealCorrector;
pub use util::{angular_separation, arc_forward, normalize_360};
pub use zodiac::{
    ALL_CHINESE_ANIMALS, ChineseAnimal, Dms, Element, Modality, SignPlacement, ZodiacSign,
    chinese_new_year, chinese_zodiac, deg_to_dms, sign_placement,
};
