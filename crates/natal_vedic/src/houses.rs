//! House (bhava) cusps: Placidus, Equal and Porphyry.
//!
//! Ascendant and Midheaven from the local sidereal time (RAMC), geographic
//! latitude and the mean obliquity of the ecliptic:
//!
//!   MC  = atan2(sin θ, cos θ · cos ε)
//!   Asc = atan2(cos θ, −(sin θ · cos ε + tan φ · sin ε))
//!
//! Placidus divides the diurnal and nocturnal semi-arcs of each cusp's own
//! declination into thirds, so the cusp is found by fixed-point iteration.
//! Beyond ±66.5° latitude some ecliptic degrees never rise or set and the
//! division is undefined: the calculator refuses rather than approximating.
//!
//! Sources: Meeus, *Astronomical Algorithms* ch. 13 and 22; standard
//! Placidus semi-arc definition.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use natal_time::JulianMoment;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::position::Frame;
use crate::util::{arc_forward, normalize_360};
use crate::zodiac::{SignPlacement, sign_placement};

/// Latitude limit for semi-arc based systems, degrees.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE_RAD: f64 = 1e-12;

/// Supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    /// Time-based trisection of each cusp's semi-arc.
    #[default]
    Placidus,
    /// Each house spans exactly 30° from the Ascendant.
    Equal,
    /// Porphyry (Sripati): trisect the four quadrant arcs in longitude.
    Porphyry,
}

/// All house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 3] = [
    HouseSystem::Placidus,
    HouseSystem::Equal,
    HouseSystem::Porphyry,
];

impl HouseSystem {
    pub const fn all() -> &'static [HouseSystem; 3] {
        &ALL_HOUSE_SYSTEMS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Equal => "Equal",
            Self::Porphyry => "Porphyry",
        }
    }

    /// Whether this system fails for |latitude| > 66.5°.
    pub const fn latitude_limited(self) -> bool {
        matches!(self, Self::Placidus)
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placidus" | "p" => Ok(Self::Placidus),
            "equal" | "e" => Ok(Self::Equal),
            "porphyry" | "sripati" | "o" => Ok(Self::Porphyry),
            _ => Err(VedicError::UnsupportedHouseSystem(s.to_string())),
        }
    }
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub house: u8,
    /// Ecliptic longitude of the cusp in degrees, [0, 360).
    pub longitude_deg: f64,
    pub placement: SignPlacement,
}

/// Ascendant, Midheaven and the 12 cusps in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSet {
    pub system: HouseSystem,
    pub frame: Frame,
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    /// `cusps[0]` is house 1.
    pub cusps: [HouseCusp; 12],
}

impl HouseSet {
    fn from_longitudes(
        system: HouseSystem,
        frame: Frame,
        asc_deg: f64,
        mc_deg: f64,
        longitudes: &[f64; 12],
    ) -> Self {
        let cusps = std::array::from_fn(|i| {
            let lon = normalize_360(longitudes[i]);
            HouseCusp {
                house: i as u8 + 1,
                longitude_deg: lon,
                placement: sign_placement(lon),
            }
        });
        Self {
            system,
            frame,
            ascendant_deg: normalize_360(asc_deg),
            midheaven_deg: normalize_360(mc_deg),
            cusps,
        }
    }

    /// Cusp longitudes in house order.
    pub fn cusp_longitudes(&self) -> [f64; 12] {
        std::array::from_fn(|i| self.cusps[i].longitude_deg)
    }

    /// House (1-12) containing an ecliptic longitude in this set's frame.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        let lon = normalize_360(longitude_deg);
        for i in 0..12 {
            let start = self.cusps[i].longitude_deg;
            let end = self.cusps[(i + 1) % 12].longitude_deg;
            if arc_forward(start, lon) < arc_forward(start, end) {
                return i as u8 + 1;
            }
        }
        12
    }

    /// Every longitude moved by `delta_deg` and relabeled.
    pub(crate) fn shifted(&self, frame: Frame, delta_deg: f64) -> Self {
        let longitudes = self.cusp_longitudes().map(|lon| lon + delta_deg);
        Self::from_longitudes(
            self.system,
            frame,
            self.ascendant_deg + delta_deg,
            self.midheaven_deg + delta_deg,
            &longitudes,
        )
    }
}

/// Mean obliquity of the ecliptic in degrees (IAU 2006, to T²).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    (84_381.406 - 46.836_769 * t - 0.000_183_1 * t * t) / 3600.0
}

/// Ascendant and Midheaven longitudes in degrees from RAMC, latitude and
/// obliquity (all degrees).
pub fn ascendant_midheaven_deg(ramc_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let theta = ramc_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let asc = theta
        .cos()
        .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()));
    let mc = theta.sin().atan2(theta.cos() * eps.cos());
    (
        normalize_360(asc.to_degrees()),
        normalize_360(mc.to_degrees()),
    )
}

/// Tropical houses for an instant and observer.
///
/// `longitude_deg` is east-positive.
pub fn compute_houses(
    moment: &JulianMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: HouseSystem,
) -> Result<HouseSet, VedicError> {
    if system.latitude_limited() && latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
        return Err(VedicError::HouseSystemUnstable {
            system: system.name(),
            latitude_deg,
            limit_deg: MAX_PLACIDUS_LATITUDE_DEG,
        });
    }
    let ramc_deg = moment.local_sidereal_time_deg(longitude_deg);
    let eps_deg = mean_obliquity_deg(moment.centuries());
    let (asc, mc) = ascendant_midheaven_deg(ramc_deg, latitude_deg, eps_deg);

    let longitudes = match system {
        HouseSystem::Equal => compute_equal(asc),
        HouseSystem::Porphyry => compute_porphyry(asc, mc),
        HouseSystem::Placidus => compute_placidus(
            asc,
            mc,
            ramc_deg.to_radians(),
            latitude_deg.to_radians(),
            eps_deg.to_radians(),
        )?,
    };
    Ok(HouseSet::from_longitudes(
        system,
        Frame::Tropical,
        asc,
        mc,
        &longitudes,
    ))
}

fn compute_equal(asc_deg: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_360(asc_deg + 30.0 * i as f64))
}

fn compute_porphyry(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    // (first cusp index, quadrant start, quadrant end)
    for (idx, from, to) in [
        (0, asc_deg, ic_deg),
        (3, ic_deg, desc_deg),
        (6, desc_deg, mc_deg),
        (9, mc_deg, asc_deg),
    ] {
        let arc = arc_forward(from, to);
        cusps[idx] = from;
        cusps[idx + 1] = normalize_360(from + arc / 3.0);
        cusps[idx + 2] = normalize_360(from + 2.0 * arc / 3.0);
    }
    cusps
}

fn compute_placidus(
    asc_deg: f64,
    mc_deg: f64,
    ramc: f64,
    lat: f64,
    eps: f64,
) -> Result<[f64; 12], VedicError> {
    let c11 = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true, 11)?;
    let c12 = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true, 12)?;
    let c2 = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false, 2)?;
    let c3 = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false, 3)?;

    Ok([
        asc_deg,
        c2,
        c3,
        mc_deg + 180.0,
        c11 + 180.0,
        c12 + 180.0,
        asc_deg + 180.0,
        c2 + 180.0,
        c3 + 180.0,
        mc_deg,
        c11,
        c12,
    ]
    .map(normalize_360))
}

/// One intermediate Placidus cusp.
///
/// Above the horizon (houses 11, 12) the cusp's right ascension is
/// `RAMC + fraction · DSA`; below (houses 2, 3) it is
/// `RAMC + π − fraction · NSA`, where DSA/NSA are the diurnal and nocturnal
/// semi-arcs at the cusp's own declination.
fn placidus_cusp(
    ramc: f64,
    lat: f64,
    eps: f64,
    fraction: f64,
    above_horizon: bool,
    house: u8,
) -> Result<f64, VedicError> {
    let target = |diurnal_semi_arc: f64| {
        if above_horizon {
            ramc + fraction * diurnal_semi_arc
        } else {
            ramc + PI - fraction * (PI - diurnal_semi_arc)
        }
    };

    let mut ra = target(PI / 2.0);
    for _ in 0..MAX_ITERATIONS {
        let lambda = equator_to_ecliptic_longitude_rad(ra, eps);
        let dec = (eps.sin() * lambda.sin()).asin();
        let next = target(diurnal_semi_arc_rad(dec, lat));
        if (next - ra).abs() < CONVERGENCE_RAD {
            return Ok(equator_to_ecliptic_longitude_rad(next, eps).to_degrees());
        }
        ra = next;
    }
    Err(VedicError::NoConvergence { cusp: house })
}

/// Diurnal semi-arc (radians) of a point with declination `dec` at latitude `lat`.
fn diurnal_semi_arc_rad(dec: f64, lat: f64) -> f64 {
    (-lat.tan() * dec.tan()).clamp(-1.0, 1.0).acos()
}

/// Ecliptic longitude (radians) of the ecliptic point with right ascension `ra`.
fn equator_to_ecliptic_longitude_rad(ra: f64, eps: f64) -> f64 {
    ra.sin().atan2(ra.cos() * eps.cos())
}
