//! Deterministic lucky numbers.
//!
//! The core numbers come first; the list is topped up with draws from a
//! `StdRng` whose seed is a 64-bit FNV-1a hash of the normalized inputs, so
//! identical requests always produce identical lists.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::letters::{LetterSystem, normalize_name};

/// Length of a lucky-number list.
pub const LUCKY_COUNT: usize = 6;

/// Largest value a draw may produce.
pub const LUCKY_MAX: u32 = 99;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(state: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(state, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Stable seed for a (name, birth date, system) triple.
pub fn lucky_seed(name: &str, birth_date: NaiveDate, system: LetterSystem) -> u64 {
    let mut h = fnv1a(FNV_OFFSET, normalize_name(name).as_bytes());
    h = fnv1a(h, &[0xff]);
    h = fnv1a(h, birth_date.format("%Y-%m-%d").to_string().as_bytes());
    h = fnv1a(h, &[0xff]);
    fnv1a(h, system.name().as_bytes())
}

/// Distinct non-zero `core` values, then seeded draws up to [`LUCKY_COUNT`].
pub fn lucky_numbers(core: &[u32], seed: u64) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(LUCKY_COUNT);
    for &n in core {
        if n != 0 && !out.contains(&n) && out.len() < LUCKY_COUNT {
            out.push(n);
        }
    }
    let mut rng = StdRng::seed_from_u64(seed);
    while out.len() < LUCKY_COUNT {
        let n = rng.gen_range(1..=LUCKY_MAX);
        if !out.contains(&n) {
            out.push(n);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
    }

    #[test]
    fn fnv_reference_vector() {
        // FNV-1a 64 of "a"
        assert_eq!(fnv1a(FNV_OFFSET, b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn seed_ignores_case_and_punctuation() {
        let sys = LetterSystem::Pythagorean;
        assert_eq!(lucky_seed("John Doe", date(), sys), lucky_seed("john-doe", date(), sys));
        assert_ne!(
            lucky_seed("John Doe", date(), sys),
            lucky_seed("John Doe", date(), LetterSystem::Chaldean)
        );
    }

    #[test]
    fn core_numbers_lead_and_list_is_distinct() {
        let out = lucky_numbers(&[8, 8, 0, 11], 42);
        assert_eq!(out.len(), LUCKY_COUNT);
        assert_eq!(&out[..2], &[8, 11]);
        for (i, n) in out.iter().enumerate() {
            assert!((1..=LUCKY_MAX).contains(n));
            assert!(!out[i + 1..].contains(n));
        }
    }

    #[test]
    fn same_seed_same_list() {
        assert_eq!(lucky_numbers(&[3], 7), lucky_numbers(&[3], 7));
    }
}
