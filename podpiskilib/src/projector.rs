//! Проектор дат списаний — единственный источник истины для вопроса
//! «когда эта подписка спишется в следующий раз».

use chrono::NaiveDate;

use crate::{
    calendar::{add_months_clamped, months_between},
    error::{PodpiskiError, Result},
    model::Subscription,
};

fn period(sub: &Subscription) -> Result<i32> {
    if sub.period_months == 0 {
        return Err(PodpiskiError::Precondition("period_months must be >= 1"));
    }
    Ok(sub.period_months as i32)
}

/// Первая дата списания на дату `from` или позже. `Ok(None)` — подписка
/// неактивна или без автопродления, будущих списаний нет.
///
/// Ряд привязан к месяцу создания: если день списания в нём уже прошёл
/// к моменту создания, месяц создания не считается и ряд начинается на
/// период позже. Дальше — прыжок к ближайшему кратному периоду, так что
/// цикла по всем месяцам с создания нет.
pub fn next_occurrence(sub: &Subscription, from: NaiveDate) -> Result<Option<NaiveDate>> {
    if !sub.is_active || !sub.auto_renewal {
        return Ok(None);
    }
    let period = period(sub)?;

    let mut offset = 0;
    if add_months_clamped(sub.created_at, 0, sub.billing_day) < sub.created_at {
        offset = period;
    }

    let diff = months_between(sub.created_at, from);
    if diff > offset {
        offset += (diff - offset) / period * period;
    }

    let mut date = add_months_clamped(sub.created_at, offset, sub.billing_day);
    while date < from {
        offset += period;
        date = add_months_clamped(sub.created_at, offset, sub.billing_day);
    }
    Ok(Some(date))
}

/// Списывается ли подписка в месяце даты `month` (день не учитывается):
/// от месяца создания прошло неотрицательное число месяцев, кратное периоду.
pub fn is_billing_month(sub: &Subscription, month: NaiveDate) -> Result<bool> {
    if !sub.is_active || !sub.auto_renewal {
        return Ok(false);
    }
    let period = period(sub)?;
    let diff = months_between(sub.created_at, month);
    Ok(diff >= 0 && diff % period == 0)
}

/// Целых дней от `from` до следующего списания (обе даты — без времени,
/// результат неотрицателен). `Ok(None)` — списаний больше не будет.
pub fn days_until(sub: &Subscription, from: NaiveDate) -> Result<Option<i64>> {
    Ok(next_occurrence(sub, from)?.map(|d| (d - from).num_days()))
}
