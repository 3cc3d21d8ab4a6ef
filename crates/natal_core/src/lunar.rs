//! Moon position and lunar nodes.
//!
//! Moon: principal periodic terms of the ELP-2000/82 series as tabulated by
//! Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47 (tables 47.A/47.B),
//! truncated to amplitudes above ~0.03°. Accuracy is a few arcminutes.
//!
//! Nodes: mean node is the Delaunay Ω; the true node adds the five
//! largest short-period terms from Meeus ch. 47.

use serde::{Deserialize, Serialize};

use crate::fundamental::fundamental_arguments;
use crate::normalize_deg;

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Mean or perturbed (true) lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus short-period perturbations.
    True,
}

/// Geocentric lunar coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCoordinates {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
}

// Longitude terms: [D, M, M', F, amplitude_deg]
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 14] = [
    [0.0,  0.0,  1.0,  0.0,  6.288_774],
    [2.0,  0.0, -1.0,  0.0,  1.274_027],
    [2.0,  0.0,  0.0,  0.0,  0.658_314],
    [0.0,  0.0,  2.0,  0.0,  0.213_618],
    [0.0,  1.0,  0.0,  0.0, -0.185_116],
    [0.0,  0.0,  0.0,  2.0, -0.114_332],
    [2.0,  0.0, -2.0,  0.0,  0.058_793],
    [2.0, -1.0, -1.0,  0.0,  0.057_066],
    [2.0,  0.0,  1.0,  0.0,  0.053_322],
    [2.0, -1.0,  0.0,  0.0,  0.045_758],
    [0.0,  1.0, -1.0,  0.0, -0.040_923],
    [1.0,  0.0,  0.0,  0.0, -0.034_720],
    [0.0,  1.0,  1.0,  0.0, -0.030_383],
    [2.0,  0.0,  0.0, -2.0,  0.015_327],
];

// Latitude terms: [D, M, M', F, amplitude_deg]
#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 6] = [
    [0.0, 0.0,  0.0, 1.0, 5.128_122],
    [0.0, 0.0,  1.0, 1.0, 0.280_602],
    [0.0, 0.0,  1.0,-1.0, 0.277_693],
    [2.0, 0.0,  0.0,-1.0, 0.173_237],
    [2.0, 0.0, -1.0, 1.0, 0.055_413],
    [2.0, 0.0, -1.0,-1.0, 0.046_271],
];

// Distance terms: [D, M, M', F, amplitude_km] (cosine series)
#[rustfmt::skip]
static DISTANCE_TERMS: [[f64; 5]; 4] = [
    [0.0, 0.0,  1.0, 0.0, -20_905.355],
    [2.0, 0.0, -1.0, 0.0,  -3_699.111],
    [2.0, 0.0,  0.0, 0.0,  -2_955.968],
    [0.0, 0.0,  2.0, 0.0,    -569.925],
];

// True-node terms: [l, l', F, D, Ω, amplitude_deg]
#[rustfmt::skip]
static NODE_TERMS: [[f64; 6]; 5] = [
    [0.0, 0.0, -2.0, 2.0, 0.0, -1.4979],
    [0.0, 1.0,  0.0, 0.0, 0.0, -0.1500],
    [0.0, 0.0,  0.0, 2.0, 0.0, -0.1226],
    [0.0, 0.0,  2.0, 0.0, 0.0,  0.1176],
    [2.0, 0.0, -2.0, 0.0, 0.0, -0.0801],
];

/// Sum a periodic series whose rows are `[D, M, M', F, amplitude]`.
///
/// Terms containing the solar anomaly M are scaled by the eccentricity
/// factor E (once per power of M).
fn periodic_sum(terms: &[[f64; 5]], args: &[f64; 5], e_factor: f64, use_cos: bool) -> f64 {
    let [l, lp, f, d, _] = *args;
    terms
        .iter()
        .map(|row| {
            let angle = row[0] * d + row[1] * lp + row[2] * l + row[3] * f;
            let scale = e_factor.powi(row[1].abs() as i32);
            let trig = if use_cos { angle.cos() } else { angle.sin() };
            row[4] * scale * trig
        })
        .sum()
}

/// Geocentric Moon position, ecliptic and equinox of date.
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_coordinates(t: f64) -> LunarCoordinates {
    let args = fundamental_arguments(t);
    // Mean longitude L' = F + Ω
    let mean_longitude = (args[2] + args[4]).to_degrees();
    let e_factor = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let longitude = mean_longitude + periodic_sum(&LONGITUDE_TERMS, &args, e_factor, false);
    let latitude = periodic_sum(&LATITUDE_TERMS, &args, e_factor, false);
    let distance_km = 385_000.56 + periodic_sum(&DISTANCE_TERMS, &args, e_factor, true);

    LunarCoordinates {
        longitude_deg: normalize_deg(longitude),
        latitude_deg: latitude,
        distance_au: distance_km / KM_PER_AU,
    }
}

/// Mean ascending node longitude in degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_deg(fundamental_arguments(t)[4].to_degrees())
}

/// True ascending node longitude in degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let correction: f64 = NODE_TERMS
        .iter()
        .map(|row| {
            let angle = row[0] * args[0]
                + row[1] * args[1]
                + row[2] * args[2]
                + row[3] * args[3]
                + row[4] * args[4];
            row[5] * angle.sin()
        })
        .sum();
    normalize_deg(args[4].to_degrees() + correction)
}

/// Ascending node longitude for the given mode.
pub fn north_node_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let moon = moon_coordinates(t);
        assert!(arc(moon.longitude_deg, 133.162_655) < 0.1, "λ = {}", moon.longitude_deg);
        assert!((moon.latitude_deg + 3.229_126).abs() < 0.1, "β = {}", moon.latitude_deg);
        let km = moon.distance_au * KM_PER_AU;
        assert!((km - 368_409.7).abs() < 500.0, "Δ = {km}");
    }

    #[test]
    fn mean_node_at_j2000_approx_125() {
        let deg = mean_node_deg(0.0);
        assert!((deg - 125.04).abs() < 0.1, "mean node at J2000 = {deg}");
    }

    #[test]
    fn mean_node_regresses() {
        // ~19.34°/year retrograde
        let r1 = mean_node_deg(0.0);
        let r2 = mean_node_deg(0.01);
        let per_year = (r2 - r1 + 180.0).rem_euclid(360.0) - 180.0;
        assert!((per_year + 19.34).abs() < 0.5, "rate = {per_year}");
    }

    #[test]
    fn true_node_stays_near_mean() {
        for &t in &[-0.5, 0.0, 0.24, 0.5] {
            let diff = arc(true_node_deg(t), mean_node_deg(t));
            assert!(diff < 2.0, "t={t}: |true − mean| = {diff}");
        }
    }

    #[test]
    fn ranges() {
        for &t in &[-5.0, -1.0, 0.0, 1.0, 5.0] {
            for mode in [NodeMode::Mean, NodeMode::True] {
                let deg = north_node_deg(t, mode);
                assert!((0.0..360.0).contains(&deg), "{mode:?} t={t}: {deg}");
            }
            let moon = moon_coordinates(t);
            assert!((0.0..360.0).contains(&moon.longitude_deg));
            assert!(moon.latitude_deg.abs() < 5.4);
        }
    }
}
