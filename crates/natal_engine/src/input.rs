//! Request records and their validation.
//!
//! [`BirthInput`] and [`NumerologyRequest`] are the raw, deserializable
//! request shapes. Validation turns them into [`BirthData`] and
//! [`NumerologyInput`], which are immutable and always well-formed. Any
//! validation failure rejects the whole request.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use natal_numerology::{LetterSystem, normalize_name};
use natal_time::{CivilDateTime, JulianMoment, UtcOffset, parse_date, parse_time};
use natal_vedic::{AyanamshaSystem, HouseSystem, MAX_PLACIDUS_LATITUDE_DEG};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

const MAX_LATITUDE_DEG: f64 = 90.0;
const MAX_LONGITUDE_DEG: f64 = 180.0;

/// Longest accepted name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Births before this year get an [`BirthWarning::EarlyBirthYear`].
pub const EARLY_BIRTH_YEAR: i32 = 1900;

/// Valid birth data that still limits chart accuracy. Never rejects a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BirthWarning {
    /// Born before [`EARLY_BIRTH_YEAR`].
    EarlyBirthYear { year: i32 },
    /// Beyond the polar circles, where quadrant house systems break down.
    HighLatitude { latitude_deg: f64 },
    /// Exactly midnight or noon, usually a placeholder for an unknown time.
    RoundBirthTime { time: NaiveTime },
}

/// Advisories for a validated birth date, time and latitude.
pub fn birth_warnings(civil: &CivilDateTime, latitude_deg: f64) -> Vec<BirthWarning> {
    let mut warnings = Vec::new();
    if civil.date.year() < EARLY_BIRTH_YEAR {
        warnings.push(BirthWarning::EarlyBirthYear {
            year: civil.date.year(),
        });
    }
    if latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
        warnings.push(BirthWarning::HighLatitude { latitude_deg });
    }
    let t = civil.time;
    if t.minute() == 0 && t.second() == 0 && t.nanosecond() == 0 && matches!(t.hour(), 0 | 12) {
        warnings.push(BirthWarning::RoundBirthTime { time: t });
    }
    warnings
}

fn check_name(name: &str) -> Result<(), ChartError> {
    let chars = name.chars().count();
    if chars > MAX_NAME_CHARS {
        return Err(ChartError::InvalidName(format!(
            "{chars} characters (at most {MAX_NAME_CHARS})"
        )));
    }
    Ok(())
}

/// Birth data as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    #[serde(default)]
    pub full_name: Option<String>,
    /// `YYYY-MM-DD`; a trailing `T…` is ignored.
    #[serde(rename = "birthDateISO")]
    pub birth_date_iso: String,
    /// `HH:MM[:SS]`, optionally prefixed by a date and `T`.
    #[serde(rename = "birthTimeISO")]
    pub birth_time_iso: String,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Fixed offset or abbreviation (`+05:30`, `UTC`, `IST`).
    pub timezone_id: String,
    /// Overrides the configured ayanamsha.
    #[serde(default)]
    pub ayanamsha: Option<String>,
    /// Overrides the configured house system.
    #[serde(default)]
    pub house_system: Option<String>,
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthData {
    pub civil: CivilDateTime,
    pub timezone_id: String,
    pub offset: UtcOffset,
    pub moment: JulianMoment,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub name: Option<String>,
    pub ayanamsha: Option<AyanamshaSystem>,
    pub house_system: Option<HouseSystem>,
    pub warnings: Vec<BirthWarning>,
}

fn time_of_day(s: &str) -> &str {
    let s = s.trim();
    let s = s.split_once('T').map_or(s, |(_, t)| t);
    s.strip_suffix('Z').unwrap_or(s)
}

fn check_coordinate(axis: &'static str, value: f64, limit: f64) -> Result<f64, ChartError> {
    if (-limit..=limit).contains(&value) {
        // -0.0 and 0.0 must produce the same cache key
        Ok(value + 0.0)
    } else {
        Err(ChartError::InvalidCoordinate { axis, value, limit })
    }
}

/// Date "today" at a given UTC offset.
pub fn today_at(now_utc: NaiveDateTime, offset: UtcOffset) -> NaiveDate {
    (now_utc + Duration::seconds(offset.seconds_east())).date()
}

impl BirthInput {
    /// Validate against the current UTC time.
    ///
    /// The future-date check uses "today" at the birth's own offset.
    pub fn validate(&self, now_utc: NaiveDateTime) -> Result<BirthData, ChartError> {
        if let Some(name) = &self.full_name {
            check_name(name)?;
        }
        let offset = UtcOffset::parse(&self.timezone_id)?;
        let civil = CivilDateTime::new(
            parse_date(&self.birth_date_iso)?,
            parse_time(time_of_day(&self.birth_time_iso))?,
        );
        civil.ensure_not_after(today_at(now_utc, offset))?;
        let latitude_deg = check_coordinate("latitude", self.latitude, MAX_LATITUDE_DEG)?;
        let longitude_deg = check_coordinate("longitude", self.longitude, MAX_LONGITUDE_DEG)?;
        let ayanamsha = self
            .ayanamsha
            .as_deref()
            .map(str::parse::<AyanamshaSystem>)
            .transpose()?;
        let house_system = self
            .house_system
            .as_deref()
            .map(str::parse::<HouseSystem>)
            .transpose()?;

        Ok(BirthData {
            civil,
            timezone_id: self.timezone_id.clone(),
            offset,
            moment: JulianMoment::from_civil(&civil, offset)?,
            latitude_deg,
            longitude_deg,
            name: self
                .full_name
                .as_ref()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            ayanamsha,
            house_system,
            warnings: birth_warnings(&civil, latitude_deg),
        })
    }
}

/// Numerology request as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(rename = "birthDateISO")]
    pub birth_date_iso: String,
    /// Letter system name; defaults to Pythagorean.
    #[serde(default)]
    pub system: Option<String>,
    /// Date for personal year/month/day; defaults to today (UTC).
    #[serde(default, rename = "targetDateISO")]
    pub target_date_iso: Option<String>,
}

/// Validated numerology request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NumerologyInput {
    pub name: String,
    pub birth_date: NaiveDate,
    pub target_date: NaiveDate,
    pub system: LetterSystem,
}

impl NumerologyRequest {
    pub fn validate(&self, today: NaiveDate) -> Result<NumerologyInput, ChartError> {
        check_name(&self.full_name)?;
        let birth_date = parse_date(&self.birth_date_iso)?;
        natal_time::ensure_not_future(birth_date, today)?;
        let target_date = match self.target_date_iso.as_deref() {
            Some(s) => parse_date(s)?,
            None => today,
        };
        let system = match self.system.as_deref() {
            Some(s) => s.parse::<LetterSystem>()?,
            None => LetterSystem::default(),
        };
        Ok(NumerologyInput {
            name: self.full_name.clone(),
            birth_date,
            target_date,
            system,
        })
    }
}

impl NumerologyInput {
    /// Cache key: the name reduced to the letters that carry value.
    pub(crate) fn cache_key(&self) -> Self {
        Self {
            name: normalize_name(&self.name),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn input() -> BirthInput {
        BirthInput {
            full_name: Some("  Asha Perera ".into()),
            birth_date_iso: "1990-05-15".into(),
            birth_time_iso: "14:30".into(),
            latitude: 6.9271,
            longitude: 79.8612,
            timezone_id: "+05:30".into(),
            ayanamsha: None,
            house_system: None,
        }
    }

    #[test]
    fn valid_input_normalizes_to_utc() {
        let b = input().validate(now()).unwrap();
        assert_eq!(b.moment.utc.to_string(), "1990-05-15 09:00:00");
        assert!((b.moment.julian_day - 2_448_026.875).abs() < 1e-9);
        assert_eq!(b.name.as_deref(), Some("Asha Perera"));
    }

    #[test]
    fn json_field_names() {
        let json = r#"{"fullName": "A", "birthDateISO": "1990-05-15",
            "birthTimeISO": "1990-05-15T14:30:00Z", "latitude": 0.0,
            "longitude": 0.0, "timezoneId": "UTC", "ayanamsha": "kp"}"#;
        let parsed: BirthInput = serde_json::from_str(json).unwrap();
        let b = parsed.validate(now()).unwrap();
        assert_eq!(b.ayanamsha, Some(AyanamshaSystem::Krishnamurti));
        assert_eq!(b.civil.time.to_string(), "14:30:00");
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut i = input();
        i.latitude = 90.5;
        assert!(matches!(
            i.validate(now()),
            Err(ChartError::InvalidCoordinate { axis: "latitude", .. })
        ));
        let mut i = input();
        i.longitude = -180.01;
        assert!(matches!(
            i.validate(now()),
            Err(ChartError::InvalidCoordinate { axis: "longitude", .. })
        ));
        let mut i = input();
        i.latitude = f64::NAN;
        assert!(i.validate(now()).is_err());
    }

    #[test]
    fn poles_and_antimeridian_are_allowed() {
        let mut i = input();
        i.latitude = -90.0;
        i.longitude = 180.0;
        assert!(i.validate(now()).is_ok());
    }

    #[test]
    fn rejects_impossible_and_future_dates() {
        let mut i = input();
        i.birth_date_iso = "2023-02-30".into();
        assert!(matches!(i.validate(now()), Err(ChartError::InvalidDate(_))));
        let mut i = input();
        i.birth_date_iso = "2026-10-17".into();
        assert!(matches!(i.validate(now()), Err(ChartError::InvalidDate(_))));
    }

    #[test]
    fn future_check_uses_birth_offset() {
        // 2026-10-16 12:00 UTC is already 2026-10-17 at +14:00
        let mut i = input();
        i.birth_date_iso = "2026-10-17".into();
        i.birth_time_iso = "00:30".into();
        i.timezone_id = "+14:00".into();
        assert!(i.validate(now()).is_ok());
    }

    #[test]
    fn rejects_unknown_selectors_and_zones() {
        let mut i = input();
        i.ayanamsha = Some("fagan".into());
        assert_eq!(
            i.validate(now()),
            Err(ChartError::UnsupportedAyanamsha("fagan".into()))
        );
        let mut i = input();
        i.house_system = Some("koch".into());
        assert_eq!(
            i.validate(now()),
            Err(ChartError::UnsupportedHouseSystem("koch".into()))
        );
        let mut i = input();
        i.timezone_id = "Asia/Colombo".into();
        assert!(matches!(i.validate(now()), Err(ChartError::InvalidTimezone(_))));
    }

    #[test]
    fn advisories_do_not_reject() {
        let b = input().validate(now()).unwrap();
        assert!(b.warnings.is_empty());

        let mut i = input();
        i.birth_date_iso = "1888-03-01".into();
        i.birth_time_iso = "12:00".into();
        i.latitude = -70.0;
        let b = i.validate(now()).unwrap();
        assert_eq!(
            b.warnings,
            vec![
                BirthWarning::EarlyBirthYear { year: 1888 },
                BirthWarning::HighLatitude { latitude_deg: -70.0 },
                BirthWarning::RoundBirthTime {
                    time: NaiveTime::from_hms_opt(12, 0, 0).unwrap()
                },
            ]
        );

        let mut i = input();
        i.birth_time_iso = "00:00:01".into();
        i.latitude = 66.5;
        assert!(i.validate(now()).unwrap().warnings.is_empty());
    }

    #[test]
    fn overlong_names_are_rejected() {
        let mut i = input();
        i.full_name = Some("a".repeat(MAX_NAME_CHARS + 1));
        assert!(matches!(i.validate(now()), Err(ChartError::InvalidName(_))));
        i.full_name = Some("é".repeat(MAX_NAME_CHARS));
        assert!(i.validate(now()).is_ok());

        let req = NumerologyRequest {
            full_name: "Z".repeat(5_400_000),
            birth_date_iso: "1999-12-31".into(),
            system: Some("kabbalistic".into()),
            target_date_iso: None,
        };
        assert!(matches!(
            req.validate(now().date()),
            Err(ChartError::InvalidName(_))
        ));
    }

    #[test]
    fn numerology_request_defaults() {
        let today = now().date();
        let req: NumerologyRequest =
            serde_json::from_str(r#"{"fullName": "John Doe", "birthDateISO": "1999-12-31"}"#)
                .unwrap();
        let input = req.validate(today).unwrap();
        assert_eq!(input.system, LetterSystem::Pythagorean);
        assert_eq!(input.target_date, today);
        assert_eq!(input.cache_key().name, "JOHNDOE");

        let bad = NumerologyRequest {
            system: Some("runic".into()),
            ..req
        };
        assert_eq!(
            bad.validate(today),
            Err(ChartError::UnsupportedLetterSystem("runic".into()))
        );
    }
}
