//! Integration tests across ayanamsha, houses, nakshatra and dasha.

use chrono::NaiveDate;
use natal_core::{Body, RawPosition};
use natal_time::{CivilDateTime, JulianMoment, UtcOffset};
use natal_vedic::{
    AyanamshaSystem, DashaLord, Frame, HouseSystem, Nakshatra, PlanetPosition, SiderealCorrector,
    VedicError, ZodiacSign, arc_forward, compute_houses, mahadasha_window,
    nakshatra_from_longitude,
};

fn moment(date: &str, time: &str, offset: &str) -> JulianMoment {
    let civil = CivilDateTime::parse(date, time).unwrap();
    JulianMoment::from_civil(&civil, UtcOffset::parse(offset).unwrap()).unwrap()
}

#[test]
fn placidus_houses_are_ordered_for_mid_latitudes() {
    let m = moment("1990-05-15", "14:30", "+05:30");
    for &lat in &[-45.0, -10.0, 0.0, 6.93, 40.7, 51.5, 66.5] {
        let set = compute_houses(&m, lat, 79.86, HouseSystem::Placidus).unwrap();
        assert!((set.cusps[0].longitude_deg - set.ascendant_deg).abs() < 1e-9);
        assert!((set.cusps[9].longitude_deg - set.midheaven_deg).abs() < 1e-9);
        let total: f64 = (0..12)
            .map(|i| arc_forward(set.cusps[i].longitude_deg, set.cusps[(i + 1) % 12].longitude_deg))
            .sum();
        assert!((total - 360.0).abs() < 1e-6, "lat {lat}: cusp arcs sum to {total}");
    }
}

#[test]
fn placidus_refuses_polar_latitudes() {
    let m = moment("1990-05-15", "14:30", "+02:00");
    let err = compute_houses(&m, 69.65, 18.96, HouseSystem::Placidus).unwrap_err();
    assert!(matches!(err, VedicError::HouseSystemUnstable { .. }), "{err}");

    // Non quadrant systems still work there
    assert!(compute_houses(&m, 69.65, 18.96, HouseSystem::Equal).is_ok());
    assert!(compute_houses(&m, -78.0, 18.96, HouseSystem::Porphyry).is_ok());
}

#[test]
fn sidereal_houses_shift_by_ayanamsha() {
    let m = moment("2001-09-09", "06:15", "UTC");
    let corrector = SiderealCorrector::new(AyanamshaSystem::Lahiri, m.julian_day);
    let tropical = compute_houses(&m, 28.6, 77.2, HouseSystem::Placidus).unwrap();
    let sidereal = corrector.houses(&tropical).unwrap();
    assert_eq!(sidereal.frame, Frame::Sidereal);
    for i in 0..12 {
        let d = arc_forward(sidereal.cusps[i].longitude_deg, tropical.cusps[i].longitude_deg);
        assert!((d - corrector.ayanamsha_deg).abs() < 1e-9);
    }
    assert_eq!(corrector.houses(&sidereal), Err(VedicError::AlreadySidereal));
}

#[test]
fn moon_nakshatra_drives_dasha() {
    let raw = RawPosition {
        longitude_deg: 65.0 + 23.85,
        latitude_deg: 0.0,
        distance_au: 0.0026,
        speed_deg_per_day: 13.2,
    };
    let corrector = SiderealCorrector {
        system: AyanamshaSystem::Lahiri,
        ayanamsha_deg: 23.85,
    };
    let moon = corrector
        .position(&PlanetPosition::tropical(Body::Moon, &raw))
        .unwrap();
    assert_eq!(moon.placement.sign, ZodiacSign::Gemini);

    let nak = nakshatra_from_longitude(moon.longitude_deg);
    assert_eq!(nak.nakshatra, Nakshatra::Mrigashira);
    assert_eq!(nak.index, 4);

    let birth = NaiveDate::from_ymd_opt(1990, 5, 15)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();
    let window = mahadasha_window(nak.index, birth).unwrap();
    assert_eq!(window.lord, DashaLord::Mars);
    assert_eq!(window.start, birth);
    assert_eq!(window.end.date(), NaiveDate::from_ymd_opt(1997, 5, 15).unwrap());
}
