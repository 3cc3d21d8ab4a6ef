//! Major aspects between chart points.
//!
//! Five aspect types with configurable orbs (defaults 8° for conjunction,
//! square, trine and opposition; 6° for sextile). A pair of points is tested
//! against every type; only the closest match is kept, ties going to the
//! type with the smaller angle. Strength falls linearly from 1 at exactness
//! to 0 at the orb edge.

use natal_core::Body;
use serde::{Deserialize, Serialize};

use crate::util::angular_separation;

/// Default threshold under which an aspect counts as exact, degrees.
pub const DEFAULT_EXACT_THRESHOLD_DEG: f64 = 1.0;

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspect kinds in ascending angle order.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn all() -> &'static [AspectKind; 5] {
        &ALL_ASPECT_KINDS
    }

    /// Exact angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
        }
    }
}

/// Maximum orb per aspect kind, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectOrbs {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl Default for AspectOrbs {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 6.0,
            square: 8.0,
            trine: 8.0,
            opposition: 8.0,
        }
    }
}

impl AspectOrbs {
    pub const fn orb_for(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }

    /// All orbs finite and positive.
    pub fn is_valid(&self) -> bool {
        AspectKind::all().iter().all(|&k| {
            let orb = self.orb_for(k);
            orb.is_finite() && orb > 0.0
        })
    }
}

/// A detected aspect between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Shortest angular separation in degrees, [0, 180].
    pub separation_deg: f64,
    /// Distance from the exact angle in degrees.
    pub orb_deg: f64,
    /// Orb below the exact threshold.
    pub exact: bool,
    /// `1 − orb / max_orb`, clamped to [0, 1].
    pub strength: f64,
}

/// Closest aspect for a separation, if any is within orb.
///
/// Returns `(kind, orb_deg, max_orb_deg)`.
pub fn classify(separation_deg: f64, orbs: &AspectOrbs) -> Option<(AspectKind, f64, f64)> {
    let mut best: Option<(AspectKind, f64, f64)> = None;
    for &kind in AspectKind::all() {
        let max_orb = orbs.orb_for(kind);
        let orb = (separation_deg - kind.angle_deg()).abs();
        if orb > max_orb {
            continue;
        }
        // Strict comparison keeps the lower angle on ties.
        if best.is_none_or(|(_, best_orb, _)| orb < best_orb) {
            best = Some((kind, orb, max_orb));
        }
    }
    best
}

/// Aspect between two longitudes, if any.
pub fn aspect_between(
    a: (Body, f64),
    b: (Body, f64),
    orbs: &AspectOrbs,
    exact_threshold_deg: f64,
) -> Option<Aspect> {
    let separation_deg = angular_separation(a.1, b.1);
    let (kind, orb_deg, max_orb) = classify(separation_deg, orbs)?;
    Some(Aspect {
        body_a: a.0,
        body_b: b.0,
        kind,
        separation_deg,
        orb_deg,
        exact: orb_deg < exact_threshold_deg,
        strength: (1.0 - orb_deg / max_orb).clamp(0.0, 1.0),
    })
}

/// Aspects among all unordered pairs of `points`, in input pair order.
pub fn detect_aspects(
    points: &[(Body, f64)],
    orbs: &AspectOrbs,
    exact_threshold_deg: f64,
) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            if let Some(aspect) = aspect_between(a, b, orbs, exact_threshold_deg) {
                out.push(aspect);
            }
        }
    }
    out
}

/// Aspects from each `moving` point to each `fixed` point.
///
/// `body_a` is the moving (transiting) body, `body_b` the fixed (natal) one.
pub fn detect_cross_aspects(
    moving: &[(Body, f64)],
    fixed: &[(Body, f64)],
    orbs: &AspectOrbs,
    exact_threshold_deg: f64,
) -> Vec<Aspect> {
    moving
        .iter()
        .flat_map(|&m| {
            fixed
                .iter()
                .filter_map(move |&f| aspect_between(m, f, orbs, exact_threshold_deg))
        })
        .collect()
}
