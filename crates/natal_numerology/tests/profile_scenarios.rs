//! End-to-end numerology profiles for known names and dates.

use chrono::NaiveDate;
use natal_numerology::{
    LetterSystem, NumerologyError, compute_profile, expression, personality, reduce, soul_urge,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn john_doe_pythagorean() {
    let p = compute_profile(
        "John Doe",
        ymd(1999, 12, 31),
        ymd(2026, 10, 16),
        LetterSystem::Pythagorean,
    )
    .unwrap();
    assert_eq!(p.life_path, 8);
    assert_eq!(p.expression, 8);
    assert_eq!(p.soul_urge, 8);
    assert_eq!(p.personality, 9);
    assert_eq!(p.maturity, 7);
    assert_eq!(p.birthday, 4);
    assert_eq!(p.challenge, 1);
    assert_eq!(p.pinnacles, [7, 3, 1, 2]);
    assert_eq!((p.personal_year, p.personal_month, p.personal_day), (8, 9, 7));
    assert!(p.master_numbers.is_empty());
    assert_eq!(p.lucky_numbers.len(), 6);
    assert_eq!(p.lucky_numbers[0], 8);
}

#[test]
fn eleven_eleven_reduces_through_to_seven() {
    let p = compute_profile(
        "",
        ymd(1911, 11, 11),
        ymd(2026, 1, 1),
        LetterSystem::Pythagorean,
    )
    .unwrap();
    assert_eq!(p.life_path, 7);
    assert_eq!(p.birthday, 11);
    assert!(p.master_numbers.contains(&11));
    assert!(!p.master_numbers.contains(&33));
}

#[test]
fn empty_name_gives_zero_not_error() {
    for &system in LetterSystem::all() {
        for name in ["", "   ", "123-!?"] {
            assert_eq!(expression(name, system), 0);
            assert_eq!(soul_urge(name, system), 0);
            assert_eq!(personality(name, system), 0);
        }
    }
    let p = compute_profile("", ymd(1990, 5, 15), ymd(2026, 1, 1), LetterSystem::Chaldean).unwrap();
    assert_eq!((p.expression, p.soul_urge, p.personality), (0, 0, 0));
    assert_eq!(p.maturity, p.life_path);
    assert!(!p.lucky_numbers.contains(&0));
}

#[test]
fn case_and_punctuation_do_not_matter() {
    let a = compute_profile("john doe", ymd(1999, 12, 31), ymd(2026, 1, 1), LetterSystem::Chaldean)
        .unwrap();
    let b = compute_profile("JOHN-DOE!", ymd(1999, 12, 31), ymd(2026, 1, 1), LetterSystem::Chaldean)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn systems_disagree_on_the_same_name() {
    // Chaldean J1 O7 H5 N5 D4 O7 E5 = 34 → 7
    assert_eq!(expression("John Doe", LetterSystem::Chaldean), 7);
    // Kabbalistic J10 O60 H8 N50 D4 O60 E5 = 197 → 17 → 8
    assert_eq!(expression("John Doe", LetterSystem::Kabbalistic), 8);
}

#[test]
fn profile_is_deterministic() {
    let run = || {
        compute_profile(
            "Ada Lovelace",
            ymd(1815, 12, 10),
            ymd(2026, 10, 16),
            LetterSystem::Kabbalistic,
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn reduction_outputs_stay_in_range() {
    for n in [0_u32, 1, 9, 10, 19, 38, 99, 1999, 4_294_967_295] {
        let r = reduce(n);
        assert!((r == 0 && n == 0) || (1..=9).contains(&r) || [11, 22, 33].contains(&r));
    }
}

#[test]
fn year_before_common_era_is_invalid() {
    let err = compute_profile("x", ymd(-5, 1, 1), ymd(2026, 1, 1), LetterSystem::Pythagorean)
        .unwrap_err();
    assert!(matches!(err, NumerologyError::InvalidDate(_)));
}

#[test]
fn profile_serializes_plain_record() {
    let p = compute_profile("John Doe", ymd(1999, 12, 31), ymd(2026, 10, 16), LetterSystem::Pythagorean)
        .unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["system"], "pythagorean");
    assert_eq!(json["life_path"], 8);
    assert_eq!(json["target_date"], "2026-10-16");
    assert!(json["pinnacles"].is_array());
}

#[test]
fn huge_kabbalistic_name_saturates_instead_of_overflowing() {
    let name = "Z".repeat(5_400_000);
    let p = compute_profile(&name, ymd(1999, 12, 31), ymd(2026, 10, 16), LetterSystem::Kabbalistic)
        .unwrap();
    // u32::MAX = 4294967295 → 57 → 12 → 3
    assert_eq!(p.expression, 3);
    assert_eq!(p.personality, 3);
    assert_eq!(p.soul_urge, 0);
}
