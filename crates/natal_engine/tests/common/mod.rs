//! Position-provider doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use natal_core::{Body, PositionProvider, ProviderError, RawPosition};
use natal_engine::{BirthData, BirthInput};

/// Tropical longitudes served by [`FakeProvider::fixed`].
///
/// Mars squares the Sun and Mercury trines it, both exactly. The Moon sits
/// in sidereal Mrigashira for a 1990 birth.
pub const FIXED_LONGITUDES: [(Body, f64); 11] = [
    (Body::Sun, 10.0),
    (Body::Moon, 88.0),
    (Body::Mercury, 130.0),
    (Body::Venus, 200.0),
    (Body::Mars, 100.0),
    (Body::Jupiter, 250.0),
    (Body::Saturn, 315.0),
    (Body::Uranus, 283.0),
    (Body::Neptune, 290.0),
    (Body::Pluto, 227.0),
    (Body::NorthNode, 300.0),
];

/// Provider with canned longitudes, injectable failures and delays, and
/// per-body call counters.
pub struct FakeProvider {
    failing: Vec<Body>,
    hanging: Vec<Body>,
    delay: Duration,
    calls: [AtomicUsize; 12],
}

impl FakeProvider {
    pub fn fixed() -> Self {
        Self {
            failing: Vec::new(),
            hanging: Vec::new(),
            delay: Duration::ZERO,
            calls: std::array::from_fn(|_| AtomicUsize::new(0)),
        }
    }

    /// `body` fails with a source error.
    pub fn failing(mut self, body: Body) -> Self {
        self.failing.push(body);
        self
    }

    /// `body` never answers within any test timeout.
    pub fn hanging(mut self, body: Body) -> Self {
        self.hanging.push(body);
        self
    }

    /// Every call takes at least `delay`.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls_for(&self, body: Body) -> usize {
        self.calls[body.index()].load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

#[async_trait]
impl PositionProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn position(&self, body: Body, _jd: f64) -> Result<RawPosition, ProviderError> {
        self.calls[body.index()].fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.hanging.contains(&body) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.failing.contains(&body) {
            return Err(ProviderError::Source(format!("{body} lookup failed")));
        }
        let longitude_deg = FIXED_LONGITUDES
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, lon)| *lon)
            .ok_or(ProviderError::UnsupportedBody(body))?;
        Ok(RawPosition {
            longitude_deg,
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: if body == Body::Saturn { -0.05 } else { 0.5 },
        })
    }
}

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

/// Colombo, 1990-05-15 14:30 +05:30 (09:00 UTC).
pub fn colombo_input() -> BirthInput {
    BirthInput {
        full_name: Some("Asha Perera".into()),
        birth_date_iso: "1990-05-15".into(),
        birth_time_iso: "14:30".into(),
        latitude: 6.9271,
        longitude: 79.8612,
        timezone_id: "+05:30".into(),
        ayanamsha: None,
        house_system: None,
    }
}

pub fn colombo() -> BirthData {
    colombo_input().validate(now()).unwrap()
}

/// Tromsø, inside the Arctic Circle.
pub fn tromso() -> BirthData {
    BirthInput {
        latitude: 69.65,
        longitude: 18.96,
        timezone_id: "CET".into(),
        ..colombo_input()
    }
    .validate(now())
    .unwrap()
}

pub fn arc(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
