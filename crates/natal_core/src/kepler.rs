//! Planet positions from mean Keplerian orbital elements.
//!
//! Elements and their linear rates are the JPL "approximate positions of the
//! planets" set (E. M. Standish, table 1, J2000 ecliptic and equinox,
//! valid 1800–2050 AD with arcminute-level error; usable with degraded
//! accuracy over a wider span).
//!
//! Geocentric coordinates are the planet's heliocentric vector minus the
//! Earth–Moon barycenter's. Longitudes are then carried from the J2000
//! equinox to the equinox of date with the general precession in longitude.

use std::f64::consts::PI;

use crate::Body;

/// Mean orbital elements at J2000 and their rates per Julian century.
///
/// Each field is `[value, rate]`: semi-major axis (AU), eccentricity,
/// inclination (deg), mean longitude (deg), longitude of perihelion (deg),
/// longitude of ascending node (deg).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a: [f64; 2],
    pub e: [f64; 2],
    pub i: [f64; 2],
    pub l: [f64; 2],
    pub peri: [f64; 2],
    pub node: [f64; 2],
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

const VENUS: OrbitalElements = OrbitalElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

const MARS: OrbitalElements = OrbitalElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

const SATURN: OrbitalElements = OrbitalElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

const URANUS: OrbitalElements = OrbitalElements {
    a: [19.189_164_64, -0.001_961_76],
    e: [0.047_257_44, -0.000_043_97],
    i: [0.772_637_83, -0.002_429_39],
    l: [313.238_104_51, 428.482_027_85],
    peri: [170.954_276_30, 0.408_052_81],
    node: [74.016_925_03, 0.042_405_89],
};

const NEPTUNE: OrbitalElements = OrbitalElements {
    a: [30.069_922_76, 0.000_262_91],
    e: [0.008_590_48, 0.000_051_05],
    i: [1.770_043_47, 0.000_353_72],
    l: [-55.120_029_69, 218.459_453_25],
    peri: [44.964_762_27, -0.322_414_64],
    node: [131.784_225_74, -0.005_086_64],
};

const PLUTO: OrbitalElements = OrbitalElements {
    a: [39.482_116_75, -0.000_315_96],
    e: [0.248_827_30, 0.000_051_70],
    i: [17.140_012_06, 0.000_048_18],
    l: [238.929_038_33, 145.207_805_15],
    peri: [224.068_916_29, -0.040_629_42],
    node: [110.303_936_84, -0.011_834_82],
};

/// Elements for a planet, or `None` for the Sun, Moon and nodes.
pub const fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        _ => None,
    }
}

/// Solve Kepler's equation `E − e·sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = (mean_anomaly + PI).rem_euclid(2.0 * PI) - PI;
    let mut ecc_anomaly = m + e * m.sin();
    for _ in 0..30 {
        let delta = (m - (ecc_anomaly - e * ecc_anomaly.sin())) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric ecliptic (J2000) rectangular coordinates in AU.
///
/// `t` = Julian centuries since J2000.0.
pub fn heliocentric_ecliptic(el: &OrbitalElements, t: f64) -> [f64; 3] {
    let at = |p: [f64; 2]| p[0] + p[1] * t;
    let a = at(el.a);
    let e = at(el.e);
    let i = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    let ecc_anomaly = solve_kepler((l - peri).to_radians(), e);

    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = i.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Heliocentric ecliptic (J2000) vector of the Earth–Moon barycenter.
pub fn earth_heliocentric(t: f64) -> [f64; 3] {
    heliocentric_ecliptic(&EARTH_MOON_BARYCENTER, t)
}

/// General precession in longitude since J2000, degrees.
///
/// Source: IAU 2006 (Capitaine et al. 2003), p_A to second order.
pub fn general_precession_deg(t: f64) -> f64 {
    (5_028.796_195 * t + 1.105_434_8 * t * t) / 3600.0
}

/// Spherical `(longitude_deg, latitude_deg, distance)` of a rectangular vector.
pub fn to_spherical(v: [f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = v;
    let rho = (x * x + y * y).sqrt();
    let lon = y.atan2(x).to_degrees().rem_euclid(360.0);
    let lat = z.atan2(rho).to_degrees();
    (lon, lat, (rho * rho + z * z).sqrt())
}

/// Geocentric vector (J2000 ecliptic) of a planet or the Sun.
///
/// Returns `None` for bodies without Keplerian elements.
pub fn geocentric_ecliptic(body: Body, t: f64) -> Option<[f64; 3]> {
    let earth = earth_heliocentric(t);
    if body == Body::Sun {
        return Some([-earth[0], -earth[1], -earth[2]]);
    }
    let planet = heliocentric_ecliptic(elements_for(body)?, t);
    Some([
        planet[0] - earth[0],
        planet[1] - earth[1],
        planet[2] - earth[2],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit_is_identity() {
        for &m in &[0.0, 0.5, 2.0, -1.0] {
            assert!((solve_kepler(m, 0.0) - m).abs() < 1e-12);
        }
    }

    #[test]
    fn kepler_satisfies_equation() {
        let e = 0.248_827_3;
        for &m in &[0.1, 1.0, 2.5, 3.1] {
            let ea = solve_kepler(m, e);
            assert!((ea - e * ea.sin() - m).abs() < 1e-10);
        }
    }

    #[test]
    fn earth_distance_near_one_au() {
        for &t in &[-1.0, 0.0, 0.25] {
            let (_, _, r) = to_spherical(earth_heliocentric(t));
            assert!((0.98..1.02).contains(&r), "t={t}: r = {r}");
        }
    }

    #[test]
    fn sun_at_j2000() {
        // Geometric solar longitude at J2000.0 ≈ 280.38° (J2000 equinox)
        let v = geocentric_ecliptic(Body::Sun, 0.0).unwrap();
        let (lon, lat, _) = to_spherical(v);
        assert!((lon - 280.38).abs() < 0.05, "Sun λ = {lon}");
        assert!(lat.abs() < 0.01);
    }

    #[test]
    fn no_elements_for_moon_or_nodes() {
        assert!(elements_for(Body::Moon).is_none());
        assert!(geocentric_ecliptic(Body::NorthNode, 0.0).is_none());
    }

    #[test]
    fn precession_rate() {
        assert!((general_precession_deg(1.0) - 1.397).abs() < 0.001);
    }
}
