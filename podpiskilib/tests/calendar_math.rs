use chrono::{Datelike, NaiveDate};
use podpiskilib::calendar::{add_months_clamped, days_in_month, months_between};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn months_between_ignores_day_of_month() {
    assert_eq!(months_between(d(2024, 1, 31), d(2024, 3, 1)), 2);
    assert_eq!(months_between(d(2024, 3, 1), d(2024, 1, 31)), -2);
    assert_eq!(months_between(d(2024, 5, 1), d(2024, 5, 31)), 0);
    assert_eq!(months_between(d(2023, 11, 15), d(2024, 2, 15)), 3);
}

#[test]
fn clamp_always_lands_in_target_month() {
    // для любого дня 1..=31 дата валидна и равна min(d, длина месяца)
    for day in 1..=31u32 {
        let feb = add_months_clamped(d(2024, 2, 1), 0, day);
        assert_eq!(feb.month(), 2);
        assert_eq!(feb.day(), day.min(29));

        let apr = add_months_clamped(d(2023, 4, 15), 0, day);
        assert_eq!(apr.month(), 4);
        assert_eq!(apr.day(), day.min(30));
    }
}

#[test]
fn add_months_rolls_over_year() {
    assert_eq!(add_months_clamped(d(2024, 11, 30), 3, 31), d(2025, 2, 28));
    assert_eq!(add_months_clamped(d(2024, 12, 1), 1, 15), d(2025, 1, 15));
}

#[test]
fn add_months_accepts_negative_shift() {
    assert_eq!(add_months_clamped(d(2024, 1, 15), -1, 31), d(2023, 12, 31));
    assert_eq!(add_months_clamped(d(2024, 3, 31), -1, 31), d(2024, 2, 29));
}

#[test]
fn february_lengths() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2025, 2), 28);
    assert_eq!(days_in_month(2024, 12), 31);
    assert_eq!(days_in_month(2024, 4), 30);
}
