//! Letter-to-number tables.
//!
//! Three alphabets are supported:
//! - Pythagorean: positions 1-9 cycling through the alphabet (A=1, J=1, S=1)
//! - Chaldean: the traditional Babylonian table, values 1-8 (9 is sacred
//!   and never assigned)
//! - Kabbalistic: A-I carry units, J-R tens, S-Z hundreds (A=1 … Z=800)
//!
//! Names are upper-cased and stripped to ASCII letters before lookup.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// Numerology letter systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSystem {
    #[default]
    Pythagorean,
    Chaldean,
    Kabbalistic,
}

/// All letter systems in enum order.
pub const ALL_LETTER_SYSTEMS: [LetterSystem; 3] = [
    LetterSystem::Pythagorean,
    LetterSystem::Chaldean,
    LetterSystem::Kabbalistic,
];

const CHALDEAN: [u32; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

const KABBALISTIC_SCALE: [u32; 3] = [1, 10, 100];

impl LetterSystem {
    pub const fn all() -> &'static [LetterSystem; 3] {
        &ALL_LETTER_SYSTEMS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pythagorean => "pythagorean",
            Self::Chaldean => "chaldean",
            Self::Kabbalistic => "kabbalistic",
        }
    }

    /// Value of an upper-case ASCII letter, `None` for anything else.
    pub const fn letter_value(self, letter: u8) -> Option<u32> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let pos = (letter - b'A') as u32;
        Some(match self {
            Self::Pythagorean => pos % 9 + 1,
            Self::Chaldean => CHALDEAN[pos as usize],
            Self::Kabbalistic => (pos % 9 + 1) * KABBALISTIC_SCALE[(pos / 9) as usize],
        })
    }

    /// Value of any character after case-folding; non-letters map to `None`.
    pub fn char_value(self, c: char) -> Option<u32> {
        if c.is_ascii_alphabetic() {
            self.letter_value(c.to_ascii_uppercase() as u8)
        } else {
            None
        }
    }
}

impl Display for LetterSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LetterSystem {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pythagorean" | "western" => Ok(Self::Pythagorean),
            "chaldean" => Ok(Self::Chaldean),
            "kabbalistic" | "kabbalah" => Ok(Self::Kabbalistic),
            _ => Err(NumerologyError::UnsupportedLetterSystem(s.to_string())),
        }
    }
}

/// Upper-case ASCII letters of `name`, everything else dropped.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// A, E, I, O, U. Y counts as a consonant.
pub const fn is_vowel(letter: u8) -> bool {
    matches!(letter.to_ascii_uppercase(), b'A' | b'E' | b'I' | b'O' | b'U')
}

/// Which letters of a name contribute to a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFilter {
    All,
    Vowels,
    Consonants,
}

impl LetterFilter {
    const fn accepts(self, letter: u8) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => is_vowel(letter),
            Self::Consonants => !is_vowel(letter),
        }
    }
}

/// Unreduced letter total of a name, saturating at `u32::MAX`.
pub fn letter_sum(name: &str, system: LetterSystem, filter: LetterFilter) -> u32 {
    name.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .filter(|&b| filter.accepts(b))
        .filter_map(|b| system.letter_value(b))
        .fold(0, u32::saturating_add)
}
