//! Delaunay fundamental arguments of lunar theory.
//!
//! Source: IERS Conventions 2010, eq. 5.43. Public domain.

/// Arcseconds to radians.
const AS2RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Delaunay arguments `[l, l', F, D, Ω]` in radians (unnormalized).
///
/// - `l`: mean anomaly of the Moon
/// - `l'`: mean anomaly of the Sun
/// - `F`: mean argument of latitude of the Moon
/// - `D`: mean elongation of the Moon from the Sun
/// - `Ω`: mean longitude of the Moon's ascending node
///
/// `t` = Julian centuries since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485_868.249_036 + 1_717_915_923.217_8 * t + 31.879_2 * t2 + 0.051_635 * t3
        - 0.000_244_70 * t4)
        * AS2RAD;
    let lp = (1_287_104.793_05 + 129_596_581.048_1 * t - 0.553_2 * t2 + 0.000_136 * t3
        - 0.000_011_49 * t4)
        * AS2RAD;
    let f = (335_779.526_232 + 1_739_527_262.847_8 * t - 12.751_2 * t2 - 0.001_037 * t3
        + 0.000_004_17 * t4)
        * AS2RAD;
    let d = (1_072_260.703_69 + 1_602_961_601.209_0 * t - 6.370_6 * t2 + 0.006_593 * t3
        - 0.000_031_69 * t4)
        * AS2RAD;
    let om = (450_160.398_036 - 6_962_890.543_1 * t + 7.472_2 * t2 + 0.007_702 * t3
        - 0.000_059_39 * t4)
        * AS2RAD;

    [l, lp, f, d, om]
}
