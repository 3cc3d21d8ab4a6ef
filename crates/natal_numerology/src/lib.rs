//! Numerology profiles.
//!
//! This crate provides:
//! - Pythagorean, Chaldean and Kabbalistic letter tables
//! - Digit reduction that halts on master numbers (11, 22, 33)
//! - Core numbers, pinnacles, challenge and personal cycles
//! - Karmic debt detection and seeded lucky numbers

pub mod error;
pub mod letters;
pub mod lucky;
pub mod profile;
pub mod reduce;

pub use error::NumerologyError;
pub use letters::{
    ALL_LETTER_SYSTEMS, LetterFilter, LetterSystem, is_vowel, letter_sum, normalize_name,
};
pub use lucky::{LUCKY_COUNT, LUCKY_MAX, lucky_numbers, lucky_seed};
pub use profile::{
    NumerologyProfile, challenge, compute_profile, expression, life_path, life_path_total,
    personal_cycle, personality, pinnacles, soul_urge,
};
pub use reduce::{
    KARMIC_DEBT_NUMBERS, MASTER_NUMBERS, digit_sum, is_karmic_debt, is_master, reduce,
    reduction_chain,
};
