//! Full numerology profile from a name, birth date and target date.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::NumerologyError;
use crate::letters::{LetterFilter, LetterSystem, letter_sum};
use crate::lucky::{lucky_numbers, lucky_seed};
use crate::reduce::{is_karmic_debt, is_master, reduce, reduction_chain};

/// Numerology profile for one person on one target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub system: LetterSystem,
    pub life_path: u32,
    /// Expression (destiny): all letters.
    pub expression: u32,
    /// Soul urge: vowels only.
    pub soul_urge: u32,
    /// Personality: consonants only.
    pub personality: u32,
    pub maturity: u32,
    pub challenge: u32,
    pub pinnacles: [u32; 4],
    pub birthday: u32,
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    /// Date the personal cycle numbers refer to.
    pub target_date: NaiveDate,
    /// Master numbers among the core numbers.
    pub master_numbers: BTreeSet<u32>,
    /// Karmic debt numbers met while reducing the core totals.
    pub karmic_debt: BTreeSet<u32>,
    pub lucky_numbers: Vec<u32>,
}

fn positive_year(date: NaiveDate) -> Result<u32, NumerologyError> {
    u32::try_from(date.year())
        .ok()
        .filter(|&y| y > 0)
        .ok_or_else(|| NumerologyError::InvalidDate(format!("{date}: year must be 1 or later")))
}

/// `reduce(day) + reduce(month) + reduce(year)`, before the final reduction.
///
/// Each part keeps a master number if it reduces to one.
pub fn life_path_total(date: NaiveDate) -> Result<u32, NumerologyError> {
    let year = positive_year(date)?;
    Ok(reduce(date.day()) + reduce(date.month()) + reduce(year))
}

/// Reduced [`life_path_total`]. The final sum only halts on a master if the
/// total itself lands there.
pub fn life_path(date: NaiveDate) -> Result<u32, NumerologyError> {
    life_path_total(date).map(reduce)
}

pub fn expression(name: &str, system: LetterSystem) -> u32 {
    reduce(letter_sum(name, system, LetterFilter::All))
}

pub fn soul_urge(name: &str, system: LetterSystem) -> u32 {
    reduce(letter_sum(name, system, LetterFilter::Vowels))
}

pub fn personality(name: &str, system: LetterSystem) -> u32 {
    reduce(letter_sum(name, system, LetterFilter::Consonants))
}

/// `|reduce(day) − reduce(month)|`.
pub fn challenge(date: NaiveDate) -> u32 {
    reduce(date.day()).abs_diff(reduce(date.month()))
}

/// The four pinnacles for a birth date and its life path.
pub fn pinnacles(date: NaiveDate, life_path: u32) -> [u32; 4] {
    let (day, month) = (date.day(), date.month());
    let first = reduce(month + day);
    let second = reduce(day + life_path);
    [
        first,
        second,
        reduce(first + second),
        reduce(month + life_path),
    ]
}

/// Personal year, month and day for `target`.
pub fn personal_cycle(
    birth: NaiveDate,
    target: NaiveDate,
) -> Result<(u32, u32, u32), NumerologyError> {
    let target_year = positive_year(target)?;
    let year = reduce(birth.month() + birth.day() + target_year);
    let month = reduce(year + target.month());
    let day = reduce(month + target.day());
    Ok((year, month, day))
}

fn karmic_debt(totals: &[u32]) -> BTreeSet<u32> {
    totals
        .iter()
        .flat_map(|&t| reduction_chain(t))
        .filter(|&n| is_karmic_debt(n))
        .collect()
}

/// Complete profile. An empty or letterless name yields 0 for the
/// name-based numbers.
pub fn compute_profile(
    name: &str,
    birth_date: NaiveDate,
    target_date: NaiveDate,
    system: LetterSystem,
) -> Result<NumerologyProfile, NumerologyError> {
    let birth_year = positive_year(birth_date)?;
    let day = birth_date.day();
    let life_path_total = life_path_total(birth_date)?;
    let life_path = reduce(life_path_total);

    let all = letter_sum(name, system, LetterFilter::All);
    let vowels = letter_sum(name, system, LetterFilter::Vowels);
    let consonants = letter_sum(name, system, LetterFilter::Consonants);
    let (expression, soul_urge, personality) = (reduce(all), reduce(vowels), reduce(consonants));

    let maturity = reduce(life_path + expression);
    let birthday = reduce(day);
    let (personal_year, personal_month, personal_day) = personal_cycle(birth_date, target_date)?;

    let master_numbers = [
        life_path,
        expression,
        soul_urge,
        personality,
        maturity,
        birthday,
    ]
    .into_iter()
    .filter(|&n| is_master(n))
    .collect();

    Ok(NumerologyProfile {
        system,
        life_path,
        expression,
        soul_urge,
        personality,
        maturity,
        challenge: challenge(birth_date),
        pinnacles: pinnacles(birth_date, life_path),
        birthday,
        personal_year,
        personal_month,
        personal_day,
        target_date,
        master_numbers,
        karmic_debt: karmic_debt(&[
            day,
            birth_year,
            life_path_total,
            all,
            vowels,
            consonants,
        ]),
        lucky_numbers: lucky_numbers(
            &[life_path, expression, soul_urge],
            lucky_seed(name, birth_date, system),
        ),
    })
}
