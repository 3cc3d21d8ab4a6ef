//! Greenwich Mean Sidereal Time and local sidereal time.
//!
//! GMST in degrees from the IAU 1982 expression in Julian Day form:
//!
//!   θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
//!        + 0.000387933·T² − T³/38710000
//!
//! where T is Julian centuries from J2000.0. UT is used for UT1.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 12.4.

use crate::julian::{J2000_JD, centuries_since_j2000};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time from GMST and observer east longitude, degrees in [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000_noon() {
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.460_618_37).abs() < 1e-9, "GMST at J2000 = {g}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 52s ≈ 99.968°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.968).abs() < 0.01, "GMST at J2000 midnight = {g}");
    }

    #[test]
    fn meeus_example_12b() {
        // 1987 April 10, 19h21m00s UT → 128.7378734°
        let g = gmst_deg(2_446_896.306_25);
        assert!((g - 128.737_873_4).abs() < 1e-4, "got {g}");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 2_300_000.0] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn lst_wraps_west_longitudes() {
        let lst = local_sidereal_time_deg(10.0, -20.0);
        assert!((lst - 350.0).abs() < 1e-12);
    }
}
