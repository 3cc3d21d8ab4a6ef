//! Zodiac signs and degrees-minutes-seconds placement.
//!
//! Twelve equal signs of 30° starting at 0° Aries (Mesha). The same
//! division applies to tropical and sidereal longitudes; only the input
//! frame differs.
//!
//! The Chinese animal sign is calendar based, not ecliptic: a 12-year cycle
//! anchored at 2020 (Rat), with the year changing at an approximate Chinese
//! New Year between 21 January and 19 February.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 zodiac signs from Aries (Mesha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (quality) of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// 0-based index (0 = Aries).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit rashi name.
    pub const fn rashi_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// Fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Cardinal, fixed, mutable repeating from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }
}

/// The 12 animals of the Chinese zodiac, from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in cycle order (0 = Rat).
pub const ALL_CHINESE_ANIMALS: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

/// A Rat year.
const CHINESE_CYCLE_ANCHOR_YEAR: i32 = 2020;

impl ChineseAnimal {
    pub const fn all() -> &'static [ChineseAnimal; 12] {
        &ALL_CHINESE_ANIMALS
    }

    /// 0-based index (0 = Rat).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Animal of a Chinese calendar year.
    pub const fn for_year(year: i32) -> Self {
        let shift = 12 - CHINESE_CYCLE_ANCHOR_YEAR.rem_euclid(12);
        ALL_CHINESE_ANIMALS[((year.rem_euclid(12) + shift) % 12) as usize]
    }
}

/// Approximate Chinese New Year: 21 January plus a 19-year Metonic offset
/// of 0-29 days. Good to within a few weeks; not a lunisolar calendar.
pub fn chinese_new_year(year: i32) -> Option<NaiveDate> {
    let offset = year.rem_euclid(19) * 11 % 30;
    NaiveDate::from_ymd_opt(year, 1, 21)?.checked_add_signed(Duration::days(i64::from(offset)))
}

/// Chinese animal sign for a civil birth date.
///
/// Dates before the year's New Year belong to the previous animal year.
pub fn chinese_zodiac(date: NaiveDate) -> ChineseAnimal {
    let year = date.year();
    let before_new_year = chinese_new_year(year).is_some_and(|ny| date < ny);
    ChineseAnimal::for_year(if before_new_year { year - 1 } else { year })
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// A longitude expressed as sign plus position within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: ZodiacSign,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub dms: Dms,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Negative input is treated by absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Sign and in-sign position of an ecliptic longitude.
pub fn sign_placement(longitude_deg: f64) -> SignPlacement {
    let lon = normalize_360(longitude_deg);
    let idx = ((lon / 30.0).floor() as usize).min(11);
    let degrees_in_sign = lon - idx as f64 * 30.0;
    SignPlacement {
        sign: ALL_SIGNS[idx],
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(sign_placement(0.0).sign, ZodiacSign::Aries);
        assert_eq!(sign_placement(29.999).sign, ZodiacSign::Aries);
        assert_eq!(sign_placement(30.0).sign, ZodiacSign::Taurus);
        assert_eq!(sign_placement(359.999).sign, ZodiacSign::Pisces);
        assert_eq!(sign_placement(-1.0).sign, ZodiacSign::Pisces);
    }

    #[test]
    fn placement_dms() {
        let p = sign_placement(65.5125);
        assert_eq!(p.sign, ZodiacSign::Gemini);
        assert_eq!(p.dms.degrees, 5);
        assert_eq!(p.dms.minutes, 30);
        assert!((p.dms.seconds - 45.0).abs() < 1e-6);
        assert!((dms_to_deg(&p.dms) - p.degrees_in_sign).abs() < 1e-12);
    }

    #[test]
    fn elements_and_modalities() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Cancer.element(), Element::Water);
        assert_eq!(ZodiacSign::Capricorn.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Leo.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Pisces.modality(), Modality::Mutable);
        assert_eq!(ZodiacSign::Libra.modality(), Modality::Cardinal);
    }

    #[test]
    fn chinese_cycle_from_rat_year() {
        assert_eq!(ChineseAnimal::for_year(2020), ChineseAnimal::Rat);
        assert_eq!(ChineseAnimal::for_year(1990), ChineseAnimal::Horse);
        assert_eq!(ChineseAnimal::for_year(2031), ChineseAnimal::Pig);
        assert_eq!(ChineseAnimal::for_year(1936), ChineseAnimal::Rat);
        assert_eq!(ChineseAnimal::for_year(-1), ChineseAnimal::Goat);
    }

    #[test]
    fn chinese_new_year_cutoff() {
        let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        // 2026: (126 mod 19) * 11 mod 30 = 12 days after 21 January
        assert_eq!(chinese_new_year(2026), Some(ymd(2026, 2, 2)));
        assert_eq!(chinese_zodiac(ymd(2026, 2, 1)), ChineseAnimal::Snake);
        assert_eq!(chinese_zodiac(ymd(2026, 2, 2)), ChineseAnimal::Horse);
        // 1900 has no offset
        assert_eq!(chinese_new_year(1900), Some(ymd(1900, 1, 21)));
        assert_eq!(chinese_zodiac(ymd(1990, 5, 15)), ChineseAnimal::Horse);
        assert_eq!(chinese_zodiac(ymd(2000, 2, 10)), ChineseAnimal::Rabbit);
    }

    #[test]
    fn rashi_names() {
        assert_eq!(ZodiacSign::Aries.rashi_name(), "Mesha");
        assert_eq!(ZodiacSign::Pisces.rashi_name(), "Meena");
    }
}
