//! Сводные расчёты по набору подписок: сумма за месяц, ближайшее списание,
//! раскладка по календарю. Все три смотрят только через проектор, чтобы
//! представления не могли разъехаться.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{error::Result, model::Subscription, projector};

/// Группа ближайшего списания: все подписки с минимальной датой, а не одна.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NextBilling {
    pub subscriptions: Vec<Subscription>,
    pub days_left: i64,
    pub total_amount: u64,
}

/// Одно списание в календаре месяца.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub subscription_id: i64,
}

/// Сумма цен подписок, у которых месяц `month` — месяц списания.
/// Валюты здесь не сводятся: смешанный набор даёт приближённую сумму.
pub fn monthly_total(subs: &[Subscription], month: NaiveDate) -> Result<u64> {
    let mut total: u64 = 0;
    for sub in subs {
        if projector::is_billing_month(sub, month)? {
            total += sub.price;
        }
    }
    Ok(total)
}

/// Все подписки с самой ранней следующей датой списания. Совпадение дат —
/// штатный случай: возвращаются все, сумма общая. `Ok(None)` — ни у одной
/// подписки нет будущих списаний.
pub fn next_billing_group(subs: &[Subscription], from: NaiveDate) -> Result<Option<NextBilling>> {
    let mut nearest: Option<NaiveDate> = None;
    for sub in subs {
        if let Some(d) = projector::next_occurrence(sub, from)? {
            if nearest.map_or(true, |n| d < n) {
                nearest = Some(d);
            }
        }
    }
    let Some(nearest) = nearest else {
        return Ok(None);
    };

    let mut group = Vec::new();
    let mut total: u64 = 0;
    for sub in subs {
        if projector::next_occurrence(sub, from)? == Some(nearest) {
            total += sub.price;
            group.push(sub.clone());
        }
    }
    Ok(Some(NextBilling {
        subscriptions: group,
        days_left: (nearest - from).num_days(),
        total_amount: total,
    }))
}

/// Даты списаний в месяце `month`, по одной на подходящую подписку.
/// Несколько подписок могут попасть на один день — группировка по дате
/// остаётся за отображением.
pub fn calendar_occurrences(subs: &[Subscription], month: NaiveDate) -> Result<Vec<Occurrence>> {
    let mut out = Vec::new();
    for sub in subs {
        if projector::is_billing_month(sub, month)? {
            out.push(Occurrence {
                date: crate::calendar::add_months_clamped(month, 0, sub.billing_day),
                subscription_id: sub.id,
            });
        }
    }
    Ok(out)
}
