//! Vimshottari mahadasha windows.
//!
//! The 120-year Vimshottari cycle runs through nine lords in a fixed order.
//! The birth nakshatra selects the starting lord (`nakshatra index mod 9`).
//! Windows here are first-level approximations: the first window opens at
//! birth and runs for the lord's full period, without balance-of-dasha
//! reduction.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Year length for dasha periods, days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Length of the full Vimshottari cycle, years.
pub const VIMSHOTTARI_CYCLE_YEARS: f64 = 120.0;

/// The nine dasha lords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashaLord {
    Ketu,
    Venus,
    Sun,
    Moon,
    Mars,
    Rahu,
    Jupiter,
    Saturn,
    Mercury,
}

/// Lords in Vimshottari order, starting from Ketu.
pub const VIMSHOTTARI_SEQUENCE: [DashaLord; 9] = [
    DashaLord::Ketu,
    DashaLord::Venus,
    DashaLord::Sun,
    DashaLord::Moon,
    DashaLord::Mars,
    DashaLord::Rahu,
    DashaLord::Jupiter,
    DashaLord::Saturn,
    DashaLord::Mercury,
];

impl DashaLord {
    /// Position in [`VIMSHOTTARI_SEQUENCE`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ketu => "Ketu",
            Self::Venus => "Venus",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Rahu => "Rahu",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Mercury => "Mercury",
        }
    }

    /// Mahadasha length in years.
    pub const fn years(self) -> f64 {
        match self {
            Self::Ketu => 7.0,
            Self::Venus => 20.0,
            Self::Sun => 6.0,
            Self::Moon => 10.0,
            Self::Mars => 7.0,
            Self::Rahu => 18.0,
            Self::Jupiter => 16.0,
            Self::Saturn => 19.0,
            Self::Mercury => 17.0,
        }
    }

    /// Following lord in the cycle.
    pub const fn next(self) -> Self {
        VIMSHOTTARI_SEQUENCE[(self.index() + 1) % 9]
    }

    /// Lord that opens the dasha cycle for a birth nakshatra (0-26).
    pub const fn for_nakshatra(nakshatra_index: u8) -> Self {
        VIMSHOTTARI_SEQUENCE[(nakshatra_index % 9) as usize]
    }
}

/// One mahadasha window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaWindow {
    pub lord: DashaLord,
    pub years: f64,
    /// Window start (UTC).
    pub start: NaiveDateTime,
    /// Window end (UTC), exclusive.
    pub end: NaiveDateTime,
}

impl DashaWindow {
    /// Window for `lord` opening at `start`.
    pub fn starting_at(lord: DashaLord, start: NaiveDateTime) -> Result<Self, VedicError> {
        let seconds = (lord.years() * DAYS_PER_YEAR * 86_400.0).round() as i64;
        let end = start
            .checked_add_signed(Duration::seconds(seconds))
            .ok_or(VedicError::DateOutOfRange)?;
        Ok(Self {
            lord,
            years: lord.years(),
            start,
            end,
        })
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

/// First mahadasha window, opening at birth.
pub fn mahadasha_window(
    nakshatra_index: u8,
    birth_utc: NaiveDateTime,
) -> Result<DashaWindow, VedicError> {
    DashaWindow::starting_at(DashaLord::for_nakshatra(nakshatra_index), birth_utc)
}

/// Nine consecutive mahadasha windows from birth, one full cycle.
pub fn mahadasha_sequence(
    nakshatra_index: u8,
    birth_utc: NaiveDateTime,
) -> Result<Vec<DashaWindow>, VedicError> {
    let mut windows = Vec::with_capacity(9);
    let mut lord = DashaLord::for_nakshatra(nakshatra_index);
    let mut start = birth_utc;
    for _ in 0..9 {
        let window = DashaWindow::starting_at(lord, start)?;
        start = window.end;
        lord = lord.next();
        windows.push(window);
    }
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn birth() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 5, 15)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap()
    }

    #[test]
    fn cycle_is_120_years() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|l| l.years()).sum();
        assert!((total - VIMSHOTTARI_CYCLE_YEARS).abs() < 1e-12);
    }

    #[test]
    fn lord_from_nakshatra_index() {
        assert_eq!(DashaLord::for_nakshatra(0), DashaLord::Ketu);
        assert_eq!(DashaLord::for_nakshatra(4), DashaLord::Mars);
        assert_eq!(DashaLord::for_nakshatra(13), DashaLord::Mars);
        assert_eq!(DashaLord::for_nakshatra(26), DashaLord::Mercury);
    }

    #[test]
    fn window_length_uses_julian_year() {
        let w = mahadasha_window(4, birth()).unwrap();
        assert_eq!(w.lord, DashaLord::Mars);
        let days = (w.end - w.start).num_seconds() as f64 / 86_400.0;
        assert!((days - 7.0 * 365.25).abs() < 1e-6);
        assert!(w.contains(birth()));
        assert!(!w.contains(w.end));
    }

    #[test]
    fn sequence_is_contiguous_and_wraps() {
        let seq = mahadasha_sequence(8, birth()).unwrap();
        assert_eq!(seq.len(), 9);
        assert_eq!(seq[0].lord, DashaLord::Mercury);
        assert_eq!(seq[1].lord, DashaLord::Ketu);
        for pair in seq.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let span = (seq[8].end - seq[0].start).num_seconds() as f64 / 86_400.0;
        assert!((span - 120.0 * 365.25).abs() < 1e-6);
    }
}
