//! Календарная арифметика по месяцам: разница в месяцах и построение даты
//! с прижатием дня к длине месяца.

use chrono::{Datelike, NaiveDate};

/// Число целых шагов месяц/год от `from` к `to`; день месяца не учитывается.
/// Может быть отрицательным.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Дата в месяце `date + months` с днём `min(target_day, длина месяца)`.
/// Единственное место в крейте, где день проецируется на месяц, —
/// прижатие везде одинаковое.
pub fn add_months_clamped(date: NaiveDate, months: i32, target_day: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = target_day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}
